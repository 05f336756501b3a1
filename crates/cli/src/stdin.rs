//! Utility functions for reading from [`stdin`](std::io::stdin).

use eyre::{Result, WrapErr};
use oru_common::fs;
use std::{
    io::{self, Read},
    path::Path,
};

/// Reads all of stdin into a String.
pub fn read() -> Result<String> {
    let mut buf = String::new();
    io::stdin().lock().read_to_string(&mut buf).wrap_err("failed to read from stdin")?;
    Ok(buf)
}

/// Reads the file at `path`, or stdin if `path` is absent or `-`.
pub fn read_path_or_stdin(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => Ok(fs::read_to_string(path)?),
        _ => read(),
    }
}
