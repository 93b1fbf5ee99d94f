//! # BPE Registry
//!
//! Named [`BpeProvider`]s, selected by configuration.
//!
//! Providers register at link time through [`BpeProviderInventoryHook`];
//! the global [`BpeRegistry`] is built from all hooks on first use,
//! and may be amended at runtime through [`with_bpe_registry_mut`].
//!
//! ```rust,no_run
//! use bytechipper::{
//!     disk_cache::BytechipperDiskCache,
//!     registry::build_bpe,
//! };
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut disk_cache = BytechipperDiskCache::new(Default::default())?;
//!     let config = serde_json::json!({
//!         "bpe_vocab": "/data/roberta/vocab.json",
//!         "bpe_merges": "/data/roberta/merges.txt",
//!     });
//!     let bpe = build_bpe("hf_byte_bpe", &config, &mut disk_cache)?;
//!
//!     let ids = bpe.encode("Hello world")?;
//!     assert_eq!(bpe.decode(&ids)?, "Hello world");
//!     Ok(())
//! }
//! ```

mod bpe_registry;

#[doc(inline)]
pub use bpe_registry::*;
