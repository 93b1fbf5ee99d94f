//! # `hf_byte_bpe`
//!
//! The byte-level BPE registry entry, wrapping the ``tokenizers`` crate.
//!
//! Behavior on top of the wrapped tokenizer:
//! * `<s>`, `<pad>`, `</s>`, `<unk>`, `<mask>` are registered as special tokens.
//! * [`decode`](`crate::TextBpe::decode`) returns inputs containing `<mask>`
//!   or `<unk>` unchanged.
//! * `<unk>`, `<s>`, `</s>` and `<pad>` always begin a word.

#[allow(clippy::module_inception)]
mod hf_byte_bpe;
mod options;
mod provider;

#[cfg(test)]
pub(crate) mod testing;

#[doc(inline)]
pub use hf_byte_bpe::*;
#[doc(inline)]
pub use options::*;
#[doc(inline)]
pub use provider::*;
