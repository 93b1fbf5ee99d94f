//! # Parallel BPE

use crate::{BCResult, TextBpe};

/// Batch-Level Parallel BPE Wrapper.
///
/// Enables ``rayon`` encoding and decoding of batches.
/// Per-item operations are forwarded unchanged.
#[derive(Clone)]
pub struct ParallelRayonBpe<B: TextBpe> {
    /// Wrapped BPE.
    pub inner: B,
}

impl<B: TextBpe> ParallelRayonBpe<B> {
    /// Create a new parallel BPE.
    ///
    /// ## Arguments
    /// * `inner` - The BPE to wrap.
    ///
    /// ## Returns
    /// A new `ParallelRayonBpe` instance.
    pub fn new(inner: B) -> Self {
        Self { inner }
    }
}

impl<B: TextBpe> TextBpe for ParallelRayonBpe<B> {
    fn encode(
        &self,
        text: &str,
    ) -> BCResult<String> {
        self.inner.encode(text)
    }

    fn decode(
        &self,
        text: &str,
    ) -> BCResult<String> {
        self.inner.decode(text)
    }

    fn is_beginning_of_word(
        &self,
        token: &str,
    ) -> BCResult<bool> {
        self.inner.is_beginning_of_word(token)
    }

    fn encode_batch(
        &self,
        batch: &[&str],
    ) -> BCResult<Vec<String>> {
        use rayon::prelude::*;

        batch
            .par_iter()
            .map(|text| self.inner.encode(text))
            .collect()
    }

    fn decode_batch(
        &self,
        batch: &[&str],
    ) -> BCResult<Vec<String>> {
        use rayon::prelude::*;

        batch
            .par_iter()
            .map(|text| self.inner.decode(text))
            .collect()
    }
}
