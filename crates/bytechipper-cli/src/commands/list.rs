use std::io::Write;

use bytechipper::registry::BpeListing;

/// Args for the listing command.
#[derive(clap::Args, Debug)]
pub struct ListArgs {}

impl ListArgs {
    /// Run the listing command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = std::io::stdout().lock();
        write_listing(&mut stdout, &bytechipper::list_bpes())?;
        Ok(())
    }
}

fn write_listing(
    writer: &mut dyn Write,
    listing: &[BpeListing],
) -> std::io::Result<()> {
    for entry in listing {
        writeln!(writer, "\"{}\" - {}", entry.name, entry.description)?;
    }
    writer.flush()
}
