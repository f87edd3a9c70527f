//! Layout file loading
//!
//! Reads a board layout from a text file, one board row per line.

use std::fs;
use std::io;
use std::path::Path;

/// Split file content into layout rows
///
/// Rows are kept verbatim: trailing spaces are free cells and must survive.
/// Only the line terminators are dropped.
#[must_use]
pub fn rows_from_str(content: &str) -> Vec<String> {
    content.lines().map(String::from).collect()
}

/// Load a layout from a file
///
/// Returns the raw rows; tile codes and row lengths are validated later by
/// `Board::parse`.
///
/// # Errors
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use peg_solitaire::layouts::loader::load_from_file;
///
/// let rows = load_from_file("boards/triangle.txt").unwrap();
/// println!("Loaded {} rows", rows.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(rows_from_str(&content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_keep_trailing_spaces() {
        let rows = rows_from_str("XOX\nOO \n");
        assert_eq!(rows, vec!["XOX".to_string(), "OO ".to_string()]);
    }

    #[test]
    fn rows_without_final_newline() {
        let rows = rows_from_str("XX\nXX");
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn empty_content_yields_no_rows() {
        assert!(rows_from_str("").is_empty());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_from_file("no/such/layout.txt").is_err());
    }
}
