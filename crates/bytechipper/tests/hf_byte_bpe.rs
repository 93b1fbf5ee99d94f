#![cfg(feature = "hf")]

use std::{env, path::PathBuf};

use bytechipper::{
    BCError,
    build_bpe,
    hf_byte_bpe::{BPE_MERGES_ENV, BPE_VOCAB_ENV, HF_BYTE_BPE_NAME},
    list_bpes,
    resources::LocalResourceLoader,
};
use serde_json::json;
use serial_test::serial;

fn data_path(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
        .to_string_lossy()
        .into_owned()
}

#[test]
fn test_listing() {
    assert!(list_bpes().iter().any(|l| l.name == HF_BYTE_BPE_NAME));
}

#[test]
#[serial]
fn test_round_trip() {
    let bpe = build_bpe(
        HF_BYTE_BPE_NAME,
        &json!({
            "bpe_vocab": data_path("vocab.json"),
            "bpe_merges": data_path("merges.txt"),
        }),
        &mut LocalResourceLoader,
    )
    .unwrap();

    for text in ["hello world", "hello, world!", "world, hello", ""] {
        let ids = bpe.encode(text).unwrap();
        assert_eq!(bpe.decode(&ids).unwrap(), text, "{ids:?}");
    }

    let ids = bpe.encode("hello, world!").unwrap();
    let bows: Vec<bool> = ids
        .split(' ')
        .map(|id| bpe.is_beginning_of_word(id).unwrap())
        .collect();
    assert_eq!(bows, vec![false, false, true, false]);

    assert!(bpe.is_beginning_of_word("<s>").unwrap());
    assert_eq!(bpe.decode("17 <unk> 22").unwrap(), "17 <unk> 22");
    assert!(matches!(bpe.decode("17 x"), Err(BCError::Parse(_))));
}

#[test]
#[serial]
fn test_env_fallback() {
    let saved = (env::var(BPE_VOCAB_ENV).ok(), env::var(BPE_MERGES_ENV).ok());
    unsafe {
        env::set_var(BPE_VOCAB_ENV, data_path("vocab.json"));
        env::set_var(BPE_MERGES_ENV, data_path("merges.txt"));
    }

    let result = build_bpe(
        HF_BYTE_BPE_NAME,
        &json!({"add_prefix_space": true}),
        &mut LocalResourceLoader,
    );

    unsafe {
        env::remove_var(BPE_VOCAB_ENV);
        env::remove_var(BPE_MERGES_ENV);
    }
    let missing = build_bpe(HF_BYTE_BPE_NAME, &json!({}), &mut LocalResourceLoader);

    unsafe {
        if let Some(v) = saved.0 {
            env::set_var(BPE_VOCAB_ENV, v);
        }
        if let Some(v) = saved.1 {
            env::set_var(BPE_MERGES_ENV, v);
        }
    }

    let bpe = result.unwrap();
    assert_eq!(bpe.encode("hello world").unwrap(), "8 17 22");

    assert!(matches!(missing, Err(BCError::MissingOption(_))));
}

#[test]
fn test_unknown_entry() {
    assert!(matches!(
        build_bpe("sentencepiece", &json!({}), &mut LocalResourceLoader),
        Err(BCError::ResourceNotFound(_))
    ));
}
