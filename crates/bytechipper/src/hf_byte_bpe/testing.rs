//! # Test Fixtures
//!
//! A tiny byte-level vocabulary covering `"hello, world!"`.

use std::path::PathBuf;

use crate::{
    hf_byte_bpe::{HfByteBpe, HfByteBpeOptions},
    resources::LocalResourceLoader,
};

/// Path of a file under `tests/data`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

/// Options pointing at the fixture vocabulary.
pub fn fixture_options(add_prefix_space: bool) -> HfByteBpeOptions {
    HfByteBpeOptions::default()
        .with_vocab(fixture_path("vocab.json").to_string_lossy())
        .with_merges(fixture_path("merges.txt").to_string_lossy())
        .with_add_prefix_space(add_prefix_space)
}

/// Load the fixture tokenizer.
pub fn fixture_bpe(add_prefix_space: bool) -> HfByteBpe {
    HfByteBpe::load(fixture_options(add_prefix_space), &mut LocalResourceLoader)
        .expect("failed to load fixture vocabulary")
}
