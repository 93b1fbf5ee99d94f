//! # `bytechipper` Byte-Level BPE Registry
//!
//! Pluggable, registry-selected BPE encoders over token-id strings.
//!
//! Encoded text is the decimal token ids joined by single spaces;
//! every encoder implements [`TextBpe`]:
//! * [`TextBpe::encode`] - text to a token-id string.
//! * [`TextBpe::decode`] - a token-id string back to text.
//! * [`TextBpe::is_beginning_of_word`] - does a token start a word?
//!
//! Encoders are selected by name through the [`registry`], and load
//! their vocabulary files through a [`resources::ResourceLoader`].
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``download``
//! * ``hf``
//! * ``rayon``
//!
//! #### feature: ``download``
//!
//! * ``bytechipper-disk-cache``
//!
//! The download feature enables fetching `http(s)` vocabulary and
//! merge files into a local disk cache.
//!
//! #### feature: ``hf``
//!
//! * ``tokenizers``
//!
//! Registers the `"hf_byte_bpe"` entry; see [`hf_byte_bpe`].
//!
//! #### feature: ``rayon``
//!
//! This enables batch parallelism wrappers using the ``rayon`` crate.
//!
//! ## Building a Registered BPE
//!
//! ```rust,no_run
//! use bytechipper::{build_bpe, disk_cache::BytechipperDiskCache};
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut disk_cache = BytechipperDiskCache::new(Default::default())?;
//!     let bpe = build_bpe(
//!         "hf_byte_bpe",
//!         &serde_json::json!({
//!             "bpe_vocab": "https://example.com/roberta/vocab.json",
//!             "bpe_merges": "https://example.com/roberta/merges.txt",
//!         }),
//!         &mut disk_cache,
//!     )?;
//!
//!     let ids = bpe.encode("Hello world")?;
//!     let text = bpe.decode(&ids)?;
//!     assert_eq!(text, "Hello world");
//!     Ok(())
//! }
//! ```
#![warn(missing_docs, unused)]

pub mod bpe;
pub mod errors;
pub mod registry;
pub mod resources;

#[cfg(feature = "hf")]
pub mod hf_byte_bpe;

#[cfg(feature = "rayon")]
pub mod rayon;

#[cfg(feature = "download")]
#[doc(inline)]
pub use bytechipper_disk_cache as disk_cache;

#[doc(inline)]
pub use bpe::TextBpe;
#[doc(inline)]
pub use errors::{BCError, BCResult, BytechipperError};
#[doc(inline)]
pub use registry::{build_bpe, list_bpes};
