use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{App, Arg};
use env_logger::Env;
use functest::config::PADDED_FILE;
use functest::memory::{Memory, CODE_START};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let matches = App::new("romcheck")
        .about("Loads a ROM image at $0000 and reports its vectors")
        .arg(
            Arg::with_name("IMAGE")
                .help("Image to load (default: 6502_functional_test_padded.bin)")
                .index(1),
        )
        .get_matches();

    let path = matches
        .value_of_os("IMAGE")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(PADDED_FILE));
    let raw = fs::read(&path).with_context(|| format!("reading {}", path.display()))?;

    let mut mem = Memory::new();
    mem.load_image(&raw)
        .with_context(|| format!("loading {}", path.display()))?;

    let vectors = mem.vectors();
    log::info!("{}: {} bytes", path.display(), mem.image_len());
    log::info!(
        "NMI ${:04X}  RESET ${:04X}  IRQ ${:04X}",
        vectors.nmi,
        vectors.reset,
        vectors.irq
    );
    if mem.image_len() <= CODE_START as usize {
        log::warn!("image ends before ${:04X}", CODE_START);
    }
    println!("{}", mem.hex_dump(CODE_START, 16));
    Ok(())
}
