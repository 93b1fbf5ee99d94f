//! # Byte-Level BPE over ``tokenizers``

use std::path::Path;

use tokenizers::{AddedToken, Tokenizer, models::bpe::BPE, pre_tokenizers::byte_level::ByteLevel};

use crate::{
    BCError,
    BCResult,
    TextBpe,
    bpe::{contains_symbol, format_token_ids, parse_token_ids},
    hf_byte_bpe::HfByteBpeOptions,
    resources::ResourceLoader,
};

/// Special tokens registered on every [`HfByteBpe`], in registration order.
pub const HF_BYTE_BPE_SPECIAL_TOKENS: &[&str] = &["<s>", "<pad>", "</s>", "<unk>", "<mask>"];

/// Symbols which make [`HfByteBpe::decode`] return its input unchanged.
pub const DECODE_PASSTHROUGH_SYMBOLS: &[&str] = &["<mask>", "<unk>"];

/// Special elements which always begin a word.
///
/// These are matched by symbol; they also appear in the byte-level vocabulary.
pub const WORD_START_SYMBOLS: &[&str] = &["<unk>", "<s>", "</s>", "<pad>"];

fn external<E: core::fmt::Display>(context: &str) -> impl FnOnce(E) -> BCError + '_ {
    move |e| BCError::External(format!("{context}: {e}"))
}

fn path_str(path: &Path) -> BCResult<&str> {
    path.to_str()
        .ok_or_else(|| BCError::Parse(format!("non-utf8 path: {}", path.display())))
}

/// A byte-level BPE tokenizer, delegated to the ``tokenizers`` crate.
///
/// Built from a GPT-2 style `vocab.json` and `merges.txt` pair.
pub struct HfByteBpe {
    options: HfByteBpeOptions,
    tokenizer: Tokenizer,
}

impl HfByteBpe {
    /// Resolve the configured files through `loader`, and build the tokenizer.
    ///
    /// ## Returns
    /// * `Err(BCError::MissingOption)` - if `bpe_vocab` or `bpe_merges` is unset.
    /// * `Err(e)` - if a file cannot be resolved or parsed.
    pub fn load(
        options: HfByteBpeOptions,
        loader: &mut dyn ResourceLoader,
    ) -> BCResult<Self> {
        let vocab_path = loader.resolve_path(options.vocab_ref()?)?;
        let merges_path = loader.resolve_path(options.merges_ref()?)?;

        let bpe = BPE::from_file(path_str(&vocab_path)?, path_str(&merges_path)?)
            .build()
            .map_err(external("failed to load byte-level BPE"))?;

        let mut tokenizer = Tokenizer::new(bpe);
        tokenizer
            .with_pre_tokenizer(Some(
                ByteLevel::default()
                    .add_prefix_space(options.add_prefix_space)
                    .trim_offsets(false),
            ))
            .with_decoder(Some(ByteLevel::default()))
            .with_post_processor(Some(ByteLevel::default().trim_offsets(false)));

        let specials: Vec<AddedToken> = HF_BYTE_BPE_SPECIAL_TOKENS
            .iter()
            .map(|s| AddedToken::from(*s, true))
            .collect();
        let added = tokenizer.add_special_tokens(&specials);
        log::debug!("hf_byte_bpe: {added} special tokens added");

        log::info!(
            "loaded hf_byte_bpe: vocab={} merges={} size={}",
            vocab_path.display(),
            merges_path.display(),
            tokenizer.get_vocab_size(true),
        );

        Ok(Self { options, tokenizer })
    }

    /// The options this tokenizer was built from.
    pub fn options(&self) -> &HfByteBpeOptions {
        &self.options
    }

    /// The wrapped ``tokenizers`` tokenizer.
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// The vocabulary size, including the special tokens.
    pub fn vocab_size(&self) -> usize {
        self.tokenizer.get_vocab_size(true)
    }

    /// Look up the id of a token string (in byte-level form, e.g. `"Ġworld"`).
    pub fn token_to_id(
        &self,
        token: &str,
    ) -> Option<u32> {
        self.tokenizer.token_to_id(token)
    }

    /// Encode text to token ids.
    pub fn encode_ids(
        &self,
        text: &str,
    ) -> BCResult<Vec<u32>> {
        let encoding = self
            .tokenizer
            .encode(text, true)
            .map_err(external("encode failed"))?;
        Ok(encoding.get_ids().to_vec())
    }

    /// Decode token ids to text, skipping special tokens.
    ///
    /// Ids unknown to the vocabulary are dropped.
    pub fn decode_ids(
        &self,
        ids: &[u32],
    ) -> BCResult<String> {
        self.tokenizer
            .decode(ids, true)
            .map_err(external("decode failed"))
    }
}

impl TextBpe for HfByteBpe {
    fn encode(
        &self,
        text: &str,
    ) -> BCResult<String> {
        Ok(format_token_ids(&self.encode_ids(text)?))
    }

    fn decode(
        &self,
        text: &str,
    ) -> BCResult<String> {
        if contains_symbol(text, DECODE_PASSTHROUGH_SYMBOLS) {
            return Ok(text.to_string());
        }
        self.decode_ids(&parse_token_ids(text)?)
    }

    fn is_beginning_of_word(
        &self,
        token: &str,
    ) -> BCResult<bool> {
        if WORD_START_SYMBOLS.contains(&token) {
            return Ok(true);
        }
        Ok(self.decode(token)?.starts_with(' '))
    }
}
