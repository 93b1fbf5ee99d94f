//! # `hf_byte_bpe` Registry Entry

use std::sync::Arc;

use serde_json::Value;

use crate::{
    BCResult,
    TextBpe,
    hf_byte_bpe::{HfByteBpe, HfByteBpeOptions},
    registry::{BpeProvider, BpeProviderInventoryHook},
    resources::ResourceLoader,
};

/// The registry name of [`HfByteBpeProvider`].
pub const HF_BYTE_BPE_NAME: &str = "hf_byte_bpe";

/// [`BpeProvider`] for [`HfByteBpe`].
///
/// Config: see [`HfByteBpeOptions`].
#[derive(Debug, Default, Clone, Copy)]
pub struct HfByteBpeProvider;

inventory::submit! {
    BpeProviderInventoryHook::new(|| Arc::new(HfByteBpeProvider))
}

impl BpeProvider for HfByteBpeProvider {
    fn name(&self) -> String {
        HF_BYTE_BPE_NAME.to_string()
    }

    fn description(&self) -> String {
        "Byte-level BPE from a vocab.json/merges.txt pair; via the tokenizers crate".to_string()
    }

    fn build_bpe(
        &self,
        config: &Value,
        loader: &mut dyn ResourceLoader,
    ) -> BCResult<Arc<dyn TextBpe>> {
        let options = HfByteBpeOptions::from_config(config)?;
        Ok(Arc::new(HfByteBpe::load(options, loader)?))
    }
}
