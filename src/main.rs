//! CLI entry point for the Fukuda-style tiling renderer

use clap::Parser;
use fukudatile::io::cli::{Cli, FileProcessor};

fn main() -> fukudatile::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log_filter())
        .with_writer(std::io::stderr)
        .init();

    let mut processor = FileProcessor::new(cli);
    processor.process()
}
