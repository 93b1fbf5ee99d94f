use crate::commands::{cat::CatArgs, list::ListArgs};

pub mod cat;
pub mod list;

/// Subcommands for bchipper
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Act as a streaming tokenizer.
    Cat(CatArgs),

    /// List registered BPE entries.
    List(ListArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Cat(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
        }
    }
}
