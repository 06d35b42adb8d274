use std::env;
use std::path::PathBuf;

use clap::ArgMatches;

use crate::assembler::{Assembler, DEFAULT_PROGRAM};

pub const SOURCE_FILE: &str = "6502_functional_test.a65";
pub const BINARY_FILE: &str = "6502_functional_test.bin";
pub const PADDED_FILE: &str = "6502_functional_test_padded.bin";

/// Environment variable naming the assembler to run instead of `as65`.
pub const ASSEMBLER_ENV: &str = "AS65";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub source: PathBuf,
    pub binary: PathBuf,
    pub padded: PathBuf,
    pub assembler: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: PathBuf::from(SOURCE_FILE),
            binary: PathBuf::from(BINARY_FILE),
            padded: PathBuf::from(PADDED_FILE),
            assembler: PathBuf::from(DEFAULT_PROGRAM),
        }
    }
}

impl Config {
    /// Defaults with the assembler taken from `$AS65` when it is set and
    /// non-empty.
    pub fn from_env() -> Self {
        Config::default().with_assembler_override(env::var_os(ASSEMBLER_ENV).map(PathBuf::from))
    }

    fn with_assembler_override(mut self, program: Option<PathBuf>) -> Self {
        if let Some(p) = program {
            if !p.as_os_str().is_empty() {
                self.assembler = p;
            }
        }
        self
    }

    /// Applies whichever of `SOURCE`, `INPUT`, `OUTPUT` and `assembler` were
    /// given on the command line. Names not defined by the app are ignored.
    pub fn merge_matches(mut self, matches: &ArgMatches) -> Self {
        if let Some(v) = matches.value_of_os("SOURCE") {
            self.source = PathBuf::from(v);
        }
        if let Some(v) = matches.value_of_os("INPUT") {
            self.binary = PathBuf::from(v);
        }
        if let Some(v) = matches.value_of_os("OUTPUT") {
            self.padded = PathBuf::from(v);
        }
        if let Some(v) = matches.value_of_os("assembler") {
            self.assembler = PathBuf::from(v);
        }
        self
    }

    pub fn assembler(&self) -> Assembler {
        Assembler::new(self.assembler.clone())
    }
}
