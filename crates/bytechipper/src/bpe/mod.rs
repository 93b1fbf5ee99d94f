//! # BPE Adapters
//!
//! The [`TextBpe`] trait, and the token-id string helpers shared
//! by its implementations.

mod text_bpe;
mod token_ids;

#[doc(inline)]
pub use text_bpe::*;
#[doc(inline)]
pub use token_ids::*;
