use std::io::{BufRead, Write};

use bytechipper::{BCResult, TextBpe, rayon::ParallelRayonBpe};

use crate::{
    bpe_selector::BpeSelectorArgs,
    disk_cache::DiskCacheArgs,
    input_output::{InputArgs, OutputArgs},
    tokenizer_mode::{TokenizerMode, TokenizerModeArgs},
};

/// Args for the cat command.
#[derive(clap::Args, Debug)]
pub struct CatArgs {
    #[command(flatten)]
    bpe_selector: BpeSelectorArgs,

    #[command(flatten)]
    tokenizer_mode: TokenizerModeArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    disk_cache: DiskCacheArgs,

    /// Lines per batch; batches are processed in parallel.
    #[arg(long, default_value_t = 1)]
    batch_size: usize,
}

impl CatArgs {
    /// Run the cat command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut disk_cache = self.disk_cache.init_disk_cache()?;
        let bpe = ParallelRayonBpe::new(self.bpe_selector.load_bpe(&mut disk_cache)?);

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        run_cat(
            &mut reader,
            &mut writer,
            &bpe,
            self.tokenizer_mode.mode(),
            self.batch_size,
        )
    }
}

/// Stream `reader` to `writer`, one output line per input line.
///
/// Line terminators are not passed to the BPE.
fn run_cat(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    bpe: &dyn TextBpe,
    mode: TokenizerMode,
    batch_size: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let batch_size = batch_size.max(1);
    let mut batch: Vec<String> = Vec::with_capacity(batch_size);

    for line in reader.lines() {
        batch.push(line?);
        if batch.len() == batch_size {
            write_batch(writer, bpe, mode, &batch)?;
            batch.clear();
        }
    }
    if !batch.is_empty() {
        write_batch(writer, bpe, mode, &batch)?;
    }

    writer.flush()?;
    Ok(())
}

fn write_batch(
    writer: &mut dyn Write,
    bpe: &dyn TextBpe,
    mode: TokenizerMode,
    lines: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let lines: Vec<&str> = lines.iter().map(String::as_str).collect();

    let outputs = match mode {
        TokenizerMode::Encode => bpe.encode_batch(&lines)?,
        TokenizerMode::Decode => bpe.decode_batch(&lines)?,
        TokenizerMode::Bow => lines
            .iter()
            .map(|line| bow_line(bpe, line))
            .collect::<BCResult<Vec<_>>>()?,
    };

    for output in outputs {
        writeln!(writer, "{output}")?;
    }
    writer.flush()?;
    Ok(())
}

/// `true`/`false` for each token of `line`.
fn bow_line(
    bpe: &dyn TextBpe,
    line: &str,
) -> BCResult<String> {
    let flags = line
        .split_whitespace()
        .map(|token| bpe.is_beginning_of_word(token).map(|b| b.to_string()))
        .collect::<BCResult<Vec<_>>>()?;
    Ok(flags.join(" "))
}
