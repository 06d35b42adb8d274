use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Number of zero bytes placed in front of the assembled image.
///
/// The assembler emits the functional test 10 bytes short of the offset the
/// emulator loads it at. Why it does so is unknown, so the bytes are simply
/// put back.
pub const PAD_LEN: usize = 10;

pub fn pad_front(raw: &[u8]) -> Vec<u8> {
    let mut padded = Vec::with_capacity(PAD_LEN + raw.len());
    padded.resize(PAD_LEN, 0u8);
    padded.extend_from_slice(raw);
    padded
}

/// Reads `input`, writes it to `output` with [`PAD_LEN`] zero bytes in front
/// and returns the number of bytes written.
///
/// The input is read in full before `output` is touched, so a missing input
/// leaves no output file behind. An existing `output` is overwritten.
pub fn pad_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<usize> {
    let input = input.as_ref();
    let output = output.as_ref();

    let raw = fs::read(input).map_err(|e| Error::Read {
        path: input.to_path_buf(),
        source: e,
    })?;
    let padded = pad_front(&raw);

    fs::write(output, &padded).map_err(|e| Error::Write {
        path: output.to_path_buf(),
        source: e,
    })?;

    log::info!(
        "padded {} ({} bytes) -> {} ({} bytes)",
        input.display(),
        raw.len(),
        output.display(),
        padded.len()
    );
    Ok(padded.len())
}
