pub mod assembler;
pub mod config;
pub mod error;
pub mod image;
pub mod memory;

pub use error::{Error, Result};
