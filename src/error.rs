use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("assembler program {} not found", .0.display())]
    AssemblerNotFound(PathBuf),

    #[error("failed to start {}", .program.display())]
    Spawn { program: PathBuf, source: io::Error },

    /// `code` is `None` when the process was killed by a signal.
    #[error("{} exited with {}", .program.display(), describe_code(.code))]
    AssemblerFailed { program: PathBuf, code: Option<i32> },

    #[error("image of {0} bytes does not fit in a 64 KiB address space")]
    ImageTooLarge(usize),
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("status {}", c),
        None => "no status (terminated by signal)".to_string(),
    }
}
