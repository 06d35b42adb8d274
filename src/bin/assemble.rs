use anyhow::{Context, Result};
use clap::{App, Arg};
use env_logger::Env;
use functest::config::Config;
use functest::Error;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{:#}", e);
        // hand the assembler's own status back to the caller
        let code = match e.downcast_ref::<Error>() {
            Some(Error::AssemblerFailed { code: Some(c), .. }) => *c,
            _ => 1,
        };
        std::process::exit(code);
    }
}

fn run() -> Result<()> {
    let matches = App::new("assemble")
        .about("Assembles the 6502 functional test with as65")
        .arg(
            Arg::with_name("SOURCE")
                .help("Assembler source (default: 6502_functional_test.a65)")
                .index(1),
        )
        .arg(
            Arg::with_name("assembler")
                .long("assembler")
                .takes_value(true)
                .help("Assembler program (default: $AS65, then as65)"),
        )
        .get_matches();

    let config = Config::from_env().merge_matches(&matches);
    let assembled = config
        .assembler()
        .run(&config.source)
        .with_context(|| format!("assembling {}", config.source.display()))?;

    if assembled.binary_exists {
        println!("{}", assembled.binary.display());
    }
    Ok(())
}
