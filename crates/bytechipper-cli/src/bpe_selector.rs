use std::sync::Arc;

use bytechipper::{TextBpe, resources::ResourceLoader};
use serde_json::{Map, Value};

/// BPE selector arg group.
#[derive(clap::Args, Debug)]
pub struct BpeSelectorArgs {
    /// Registered BPE to use; see `bchipper list`.
    #[arg(long, default_value = "hf_byte_bpe")]
    bpe: String,

    /// Path or URL of `vocab.json`.
    #[arg(long, env = "BPE_VOCAB")]
    bpe_vocab: Option<String>,

    /// Path or URL of `merges.txt`.
    #[arg(long, env = "BPE_MERGES")]
    bpe_merges: Option<String>,

    /// Add a prefix space before encoding.
    #[arg(long)]
    bpe_add_prefix_space: bool,

    /// Additional entry options, as a JSON object.
    #[arg(long, default_value = None)]
    bpe_config: Option<String>,
}

impl BpeSelectorArgs {
    /// Get the BPE name.
    pub fn bpe(&self) -> &str {
        &self.bpe
    }

    /// Build the entry config.
    ///
    /// Explicit `--bpe-*` flags override keys in `--bpe-config`.
    pub fn config(&self) -> Result<Value, Box<dyn std::error::Error>> {
        let mut config = match &self.bpe_config {
            Some(json) => match serde_json::from_str(json)? {
                Value::Object(map) => map,
                other => return Err(format!("--bpe-config must be a JSON object: {other}").into()),
            },
            None => Map::new(),
        };

        if let Some(vocab) = &self.bpe_vocab {
            config.insert("bpe_vocab".to_string(), Value::from(vocab.as_str()));
        }
        if let Some(merges) = &self.bpe_merges {
            config.insert("bpe_merges".to_string(), Value::from(merges.as_str()));
        }
        if self.bpe_add_prefix_space {
            config.insert("add_prefix_space".to_string(), Value::Bool(true));
        }

        Ok(Value::Object(config))
    }

    /// Build the selected BPE.
    pub fn load_bpe(
        &self,
        loader: &mut dyn ResourceLoader,
    ) -> Result<Arc<dyn TextBpe>, Box<dyn std::error::Error>> {
        let config = self.config()?;
        log::info!("loading BPE {:?}: {config}", self.bpe());

        Ok(bytechipper::build_bpe(self.bpe(), &config, loader)?)
    }
}
