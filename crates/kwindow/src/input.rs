//! Resolving where the symbols to scan come from.
//!
//! The CLI accepts a literal argument, stdin, or a file path. Stdin and file
//! contents have a single trailing line terminator removed so that
//! `echo abc | kwindow --stdin` scans `abc` rather than `abc\n`.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// The symbols used when no input source is given.
pub const DEFAULT_EXAMPLE: &str = "aaabaabaaa";

/// Where to read the input sequence from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A literal string from the command line, used verbatim.
    Text(String),
    /// Everything readable from standard input.
    Stdin,
    /// The full contents of a UTF-8 file.
    File(PathBuf),
    /// The built-in [`DEFAULT_EXAMPLE`].
    Example,
}

impl InputSource {
    /// Pick a source from the CLI's mutually exclusive options.
    pub fn from_flags(
        text: Option<String>,
        stdin: bool,
        file: Option<PathBuf>,
    ) -> Result<Self, String> {
        match (text, stdin, file) {
            (None, false, None) => Ok(Self::Example),
            (Some(t), false, None) => Ok(Self::Text(t)),
            (None, true, None) => Ok(Self::Stdin),
            (None, false, Some(p)) => Ok(Self::File(p)),
            _ => Err("provide at most one of --text, --stdin, or --file".to_string()),
        }
    }

    /// Short description for logs and reports.
    pub fn describe(&self) -> String {
        match self {
            Self::Text(_) => "argument".to_string(),
            Self::Stdin => "stdin".to_string(),
            Self::File(p) => p.display().to_string(),
            Self::Example => "built-in example".to_string(),
        }
    }

    /// Load the input text.
    pub fn load(&self) -> Result<String, String> {
        match self {
            Self::Text(t) => Ok(t.clone()),
            Self::Stdin => read_stdin_content(),
            Self::File(p) => read_file_content(p),
            Self::Example => Ok(DEFAULT_EXAMPLE.to_string()),
        }
    }
}

fn read_stdin_content() -> Result<String, String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| format!("failed to read stdin: {e}"))?;
    Ok(strip_line_terminator(buf))
}

/// Read a file as input, dropping one trailing line terminator.
pub fn read_file_content(path: &Path) -> Result<String, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read file '{}': {e}", path.display()))?;
    Ok(strip_line_terminator(content))
}

/// Remove one trailing `\n` or `\r\n`.
pub fn strip_line_terminator(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_selects_example() {
        let source = InputSource::from_flags(None, false, None).unwrap();
        assert_eq!(source, InputSource::Example);
        assert_eq!(source.load().unwrap(), DEFAULT_EXAMPLE);
    }

    #[test]
    fn text_flag_is_used_verbatim() {
        let source = InputSource::from_flags(Some("ab\n".into()), false, None).unwrap();
        assert_eq!(source.load().unwrap(), "ab\n");
        assert_eq!(source.describe(), "argument");
    }

    #[test]
    fn conflicting_flags_are_rejected() {
        let err = InputSource::from_flags(Some("x".into()), true, None).unwrap_err();
        assert!(err.contains("at most one"));
        assert!(InputSource::from_flags(None, true, Some("f".into())).is_err());
    }

    #[test]
    fn strips_exactly_one_terminator() {
        assert_eq!(strip_line_terminator("abc\n".into()), "abc");
        assert_eq!(strip_line_terminator("abc\r\n".into()), "abc");
        assert_eq!(strip_line_terminator("abc\n\n".into()), "abc\n");
        assert_eq!(strip_line_terminator("abc\r".into()), "abc\r");
        assert_eq!(strip_line_terminator(String::new()), "");
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_file_content(Path::new("/nonexistent/kwindow-input.txt")).unwrap_err();
        assert!(err.contains("/nonexistent/kwindow-input.txt"));
    }
}
