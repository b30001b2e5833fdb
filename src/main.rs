mod core;
mod gui;

use clap::Parser;
use std::path::PathBuf;

/// A small plain text editor
#[derive(Debug, Parser)]
#[command(name = "text-editor")]
#[command(version, about)]
struct Args {
    /// Text file to open at startup
    file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    log::debug!("starting with {:?}", args);

    gui::run(args.file)
}
