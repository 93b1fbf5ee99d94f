//! # Rayon Utilities
//!
//! [`rayon`] powered wrappers for parallel batch encoding and decoding.

mod rayon_bpe;

pub use rayon_bpe::ParallelRayonBpe;
