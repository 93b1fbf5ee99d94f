mod bpe_selector;
mod commands;
mod disk_cache;
mod input_output;
mod logging;
mod tokenizer_mode;

use clap::Parser;
use commands::Commands;

/// bchipper
#[derive(clap::Parser, Debug)]
pub struct Args {
    #[command(flatten)]
    log: logging::LogArgs,

    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    args.log.setup_logging(2)?;

    args.command.run()
}
