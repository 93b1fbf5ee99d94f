//! # `hf_byte_bpe` Options

use std::env;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{BCError, BCResult, hf_byte_bpe::HF_BYTE_BPE_NAME};

/// Environment variable naming the default `merges.txt` path or URL.
pub const BPE_MERGES_ENV: &str = "BPE_MERGES";

/// Environment variable naming the default `vocab.json` path or URL.
pub const BPE_VOCAB_ENV: &str = "BPE_VOCAB";

fn env_bpe_merges() -> Option<String> {
    env::var(BPE_MERGES_ENV).ok()
}

fn env_bpe_vocab() -> Option<String> {
    env::var(BPE_VOCAB_ENV).ok()
}

/// Options for [`HfByteBpe`](`super::HfByteBpe`).
///
/// When deserialized, absent `bpe_merges`/`bpe_vocab` fields fall back to
/// the `BPE_MERGES`/`BPE_VOCAB` environment variables. Unknown fields are
/// ignored, so a shared config object may carry options for other entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HfByteBpeOptions {
    /// Path or URL of `merges.txt`.
    #[serde(default = "env_bpe_merges")]
    pub bpe_merges: Option<String>,

    /// Path or URL of `vocab.json`.
    #[serde(default = "env_bpe_vocab")]
    pub bpe_vocab: Option<String>,

    /// Add a prefix space before encoding.
    #[serde(default, alias = "bpe_add_prefix_space")]
    pub add_prefix_space: bool,
}

impl HfByteBpeOptions {
    /// Options with file references taken from the environment.
    pub fn from_env() -> Self {
        Self {
            bpe_merges: env_bpe_merges(),
            bpe_vocab: env_bpe_vocab(),
            add_prefix_space: false,
        }
    }

    /// Parse options from a registry config value.
    ///
    /// `null` is treated as an empty object.
    pub fn from_config(config: &Value) -> BCResult<Self> {
        let config = match config {
            Value::Null => Value::Object(Default::default()),
            other => other.clone(),
        };
        serde_json::from_value(config).map_err(|e| BCError::InvalidOptions {
            name: HF_BYTE_BPE_NAME.to_string(),
            message: e.to_string(),
        })
    }

    /// Set the `merges.txt` reference.
    pub fn with_merges<S: Into<String>>(
        mut self,
        merges: S,
    ) -> Self {
        self.bpe_merges = Some(merges.into());
        self
    }

    /// Set the `vocab.json` reference.
    pub fn with_vocab<S: Into<String>>(
        mut self,
        vocab: S,
    ) -> Self {
        self.bpe_vocab = Some(vocab.into());
        self
    }

    /// Set whether a prefix space is added before encoding.
    pub fn with_add_prefix_space(
        mut self,
        add_prefix_space: bool,
    ) -> Self {
        self.add_prefix_space = add_prefix_space;
        self
    }

    /// The configured `merges.txt` reference.
    ///
    /// ## Returns
    /// * `Err(BCError::MissingOption)` - if unset.
    pub fn merges_ref(&self) -> BCResult<&str> {
        self.bpe_merges
            .as_deref()
            .ok_or_else(|| BCError::MissingOption("bpe_merges".to_string()))
    }

    /// The configured `vocab.json` reference.
    ///
    /// ## Returns
    /// * `Err(BCError::MissingOption)` - if unset.
    pub fn vocab_ref(&self) -> BCResult<&str> {
        self.bpe_vocab
            .as_deref()
            .ok_or_else(|| BCError::MissingOption("bpe_vocab".to_string()))
    }
}
