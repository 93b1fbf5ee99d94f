/// The tokenizer mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenizerMode {
    /// Encode from text to token ids.
    Encode,

    /// Decode from token ids to text.
    Decode,

    /// Mark which token ids begin a word.
    Bow,
}

/// Tokenizer mode argument group.
#[derive(clap::Args, Debug)]
#[group(required = true, multiple = false)]
pub struct TokenizerModeArgs {
    /// Encode from text to token ids.
    #[arg(long, action=clap::ArgAction::SetTrue)]
    encode: bool,

    /// Decode from token ids to text.
    #[arg(long, action=clap::ArgAction::SetTrue)]
    decode: bool,

    /// Write `true`/`false` for each token id; does it begin a word?
    #[arg(long, action=clap::ArgAction::SetTrue)]
    bow: bool,
}

impl TokenizerModeArgs {
    /// Get the tokenizer mode.
    pub fn mode(&self) -> TokenizerMode {
        // The arg group is required; exactly one flag is set.
        if self.encode {
            TokenizerMode::Encode
        } else if self.decode {
            TokenizerMode::Decode
        } else {
            TokenizerMode::Bow
        }
    }
}
