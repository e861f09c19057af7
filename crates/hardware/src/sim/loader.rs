//! Program Image Loader.
//!
//! A program image is a text file with one machine word per line, written as a
//! signed decimal integer. Line `n` (zero-based) becomes the initial contents
//! of memory address `n`. Surrounding whitespace is ignored, as are blank lines
//! at the end of the file; any other line that is not a 32-bit integer is an error.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::{LoadError, Word};

/// Reads and parses a program image file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, or
/// [`LoadError::Parse`] for a malformed line.
pub fn load_image(path: impl AsRef<Path>) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let image = parse_image(&text)?;
    debug!(path = %path.display(), words = image.len(), "program loaded");
    Ok(image)
}

/// Parses the text of a program image.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] with the one-based line number of the first
/// malformed line.
pub fn parse_image(text: &str) -> Result<Vec<Word>, LoadError> {
    let lines: Vec<&str> = text.lines().collect();
    let used = lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .map_or(0, |last| last + 1);

    lines[..used]
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let text = line.trim();
            text.parse::<Word>().map_err(|_| LoadError::Parse {
                line: i + 1,
                text: text.to_string(),
            })
        })
        .collect()
}
