//! # Text BPE Trait

use std::sync::Arc;

use crate::BCResult;

/// A registry-selectable BPE encoder over whitespace-delimited token-id strings.
///
/// Encoded text is the decimal token ids joined by single spaces;
/// see [`format_token_ids`](`super::format_token_ids`).
pub trait TextBpe: Send + Sync {
    /// Encode text into a token-id string.
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    ///
    /// ## Returns
    /// The space-joined token ids.
    fn encode(
        &self,
        text: &str,
    ) -> BCResult<String>;

    /// Decode a token-id string back into text.
    ///
    /// ## Arguments
    /// * `text` - Whitespace-delimited token ids.
    fn decode(
        &self,
        text: &str,
    ) -> BCResult<String>;

    /// Does `token` start a new word in the original text?
    ///
    /// ## Arguments
    /// * `token` - A single token, in encoded (token-id string) form.
    fn is_beginning_of_word(
        &self,
        token: &str,
    ) -> BCResult<bool>;

    /// Encode a batch of text.
    fn encode_batch(
        &self,
        batch: &[&str],
    ) -> BCResult<Vec<String>> {
        batch.iter().map(|text| self.encode(text)).collect()
    }

    /// Decode a batch of token-id strings.
    fn decode_batch(
        &self,
        batch: &[&str],
    ) -> BCResult<Vec<String>> {
        batch.iter().map(|text| self.decode(text)).collect()
    }
}

impl<B: TextBpe + ?Sized> TextBpe for Arc<B> {
    fn encode(
        &self,
        text: &str,
    ) -> BCResult<String> {
        (**self).encode(text)
    }

    fn decode(
        &self,
        text: &str,
    ) -> BCResult<String> {
        (**self).decode(text)
    }

    fn is_beginning_of_word(
        &self,
        token: &str,
    ) -> BCResult<bool> {
        (**self).is_beginning_of_word(token)
    }

    fn encode_batch(
        &self,
        batch: &[&str],
    ) -> BCResult<Vec<String>> {
        (**self).encode_batch(batch)
    }

    fn decode_batch(
        &self,
        batch: &[&str],
    ) -> BCResult<Vec<String>> {
        (**self).decode_batch(batch)
    }
}
