use anyhow::{Context, Result};
use clap::{App, Arg};
use env_logger::Env;
use functest::config::Config;
use functest::image::{self, PAD_LEN};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let matches = App::new("pad")
        .about("Prepends zero bytes to the assembled functional test image")
        .arg(
            Arg::with_name("INPUT")
                .help("Assembled image (default: 6502_functional_test.bin)")
                .index(1),
        )
        .arg(
            Arg::with_name("OUTPUT")
                .help("Padded image (default: 6502_functional_test_padded.bin)")
                .index(2),
        )
        .get_matches();

    let config = Config::default().merge_matches(&matches);
    let written = image::pad_file(&config.binary, &config.padded).with_context(|| {
        format!(
            "padding {} with {} zero bytes",
            config.binary.display(),
            PAD_LEN
        )
    })?;
    println!("{} ({} bytes)", config.padded.display(), written);
    Ok(())
}
