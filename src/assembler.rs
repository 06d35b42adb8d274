use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use bitflags::bitflags;
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Error, Result};

pub const DEFAULT_PROGRAM: &str = "as65";

bitflags! {
    // Ref: as65 command line options
    pub struct AsmFlags: u8 {
        const LISTING           = 0b0001; // -l  write a listing file
        const MACROS            = 0b0010; // -m  expand macros in the listing
        const WIDE              = 0b0100; // -w  wide listing
        const NO_PAGING         = 0b1000; // -h0 no page breaks in the listing
    }
}

impl Default for AsmFlags {
    fn default() -> Self {
        AsmFlags::all()
    }
}

impl AsmFlags {
    pub fn to_args(self) -> Vec<&'static str> {
        let mut args = vec![];
        if self.contains(AsmFlags::LISTING) {
            args.push("-l");
        }
        if self.contains(AsmFlags::MACROS) {
            args.push("-m");
        }
        if self.contains(AsmFlags::WIDE) {
            args.push("-w");
        }
        if self.contains(AsmFlags::NO_PAGING) {
            args.push("-h0");
        }
        args
    }
}

/// Path of the binary the assembler writes for `source`: the same stem with a
/// `.bin` extension, next to the source.
pub fn binary_path_for<P: AsRef<Path>>(source: P) -> PathBuf {
    lazy_static! {
        static ref EXT: Regex = Regex::new(r"(?i)\.(a65|asm|s)$").unwrap();
    }
    let source = source.as_ref().to_string_lossy();
    if EXT.is_match(&source) {
        PathBuf::from(EXT.replace(&source, ".bin").into_owned())
    } else {
        PathBuf::from(format!("{}.bin", source))
    }
}

#[derive(Debug, PartialEq)]
pub struct Assembled {
    /// Where the assembler is expected to have put the image.
    pub binary: PathBuf,
    pub binary_exists: bool,
}

#[derive(Debug, Clone)]
pub struct Assembler {
    program: PathBuf,
    flags: AsmFlags,
}

impl Assembler {
    pub fn new<P: Into<PathBuf>>(program: P) -> Self {
        Assembler {
            program: program.into(),
            flags: AsmFlags::default(),
        }
    }

    pub fn with_flags(mut self, flags: AsmFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn flags(&self) -> AsmFlags {
        self.flags
    }

    pub fn args<P: AsRef<Path>>(&self, source: P) -> Vec<OsString> {
        let mut args: Vec<OsString> = self
            .flags
            .to_args()
            .into_iter()
            .map(OsString::from)
            .collect();
        args.push(source.as_ref().as_os_str().to_os_string());
        args
    }

    pub fn command<P: AsRef<Path>>(&self, source: P) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.args(source));
        cmd
    }

    /// Runs the assembler on `source` and waits for it to exit.
    ///
    /// Stdout and stderr are inherited, so whatever the assembler prints is
    /// what the user sees. The source is handed over unchecked; a missing
    /// source is for the assembler to report. There is no retry.
    pub fn run<P: AsRef<Path>>(&self, source: P) -> Result<Assembled> {
        let source = source.as_ref();
        log::info!("assembling {} with {}", source.display(), self.program.display());
        log::debug!(
            "command line: {} {}",
            self.program.display(),
            self.args(source)
                .iter()
                .map(|a| a.to_string_lossy())
                .collect::<Vec<_>>()
                .join(" ")
        );

        let status = self.command(source).status().map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                Error::AssemblerNotFound(self.program.clone())
            } else {
                Error::Spawn {
                    program: self.program.clone(),
                    source: e,
                }
            }
        })?;

        if !status.success() {
            return Err(Error::AssemblerFailed {
                program: self.program.clone(),
                code: status.code(),
            });
        }

        let binary = binary_path_for(source);
        let binary_exists = binary.is_file();
        if binary_exists {
            log::info!("assembler wrote {}", binary.display());
        } else {
            log::warn!(
                "{} exited successfully but {} was not found",
                self.program.display(),
                binary.display()
            );
        }
        Ok(Assembled {
            binary,
            binary_exists,
        })
    }
}

impl Default for Assembler {
    fn default() -> Self {
        Assembler::new(DEFAULT_PROGRAM)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_flags() {
        assert_eq!(AsmFlags::default().to_args(), vec!["-l", "-m", "-w", "-h0"]);
    }

    #[test]
    fn test_args() {
        let asm = Assembler::default();
        assert_eq!(asm.program(), Path::new("as65"));
        let args = asm.args("6502_functional_test.a65");
        assert_eq!(
            args,
            vec!["-l", "-m", "-w", "-h0", "6502_functional_test.a65"]
                .into_iter()
                .map(OsString::from)
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_args_with_flags() {
        let asm = Assembler::new("as65").with_flags(AsmFlags::LISTING | AsmFlags::NO_PAGING);
        let args = asm.args("a.a65");
        assert_eq!(
            args,
            vec![OsString::from("-l"), OsString::from("-h0"), OsString::from("a.a65")]
        );
    }

    #[test]
    fn test_binary_path_for() {
        assert_eq!(
            binary_path_for("6502_functional_test.a65"),
            PathBuf::from("6502_functional_test.bin")
        );
        assert_eq!(binary_path_for("dir/test.A65"), PathBuf::from("dir/test.bin"));
        assert_eq!(binary_path_for("noext"), PathBuf::from("noext.bin"));
        // only the trailing extension is replaced
        assert_eq!(binary_path_for("x.a65.s"), PathBuf::from("x.a65.bin"));
    }

    #[test]
    fn test_missing_source_still_spawns() {
        // the assembler is started even though the source is absent
        let asm = Assembler::new("functest-no-such-assembler");
        match asm.run("functest-no-such-source.a65") {
            Err(Error::AssemblerNotFound(p)) => {
                assert_eq!(p, PathBuf::from("functest-no-such-assembler"))
            }
            other => panic!("expected missing assembler, got {:?}", other),
        }
    }
}
