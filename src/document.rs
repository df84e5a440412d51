use std::{fs, path::Path};

use log::debug;

use crate::{cleaner::LineCleaner, CleanError};

/// An ordered list of lines read from, or written to, a dependency file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    pub fn new(lines: Vec<String>) -> Self {
        Document { lines }
    }

    /// Splits on `\n`, `\r\n` and a lone `\r`. A final terminator does not
    /// add an empty line.
    pub fn from_text(text: &str) -> Self {
        let mut lines = Vec::new();
        let mut rest = text;
        while !rest.is_empty() {
            match rest.find(['\n', '\r']) {
                Some(end) => {
                    lines.push(rest[..end].to_string());
                    let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                    rest = &rest[end + terminator..];
                }
                None => {
                    lines.push(rest.to_string());
                    rest = "";
                }
            }
        }
        Document { lines }
    }

    /// Reads the whole file before returning; the handle is closed on return.
    pub fn read(path: &Path) -> Result<Self, CleanError> {
        let text = fs::read_to_string(path).map_err(|source| CleanError::InputUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let document = Document::from_text(&text);
        debug!("read {} lines from {}", document.len(), path.display());
        Ok(document)
    }

    pub fn clean_with(&self, cleaner: &dyn LineCleaner) -> Document {
        Document {
            lines: self.lines.iter().map(|line| cleaner.clean(line)).collect(),
        }
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }

    /// Creates or truncates `path` and returns the number of bytes written.
    pub fn write(&self, path: &Path) -> Result<usize, CleanError> {
        let text = self.render();
        fs::write(path, &text).map_err(|source| CleanError::OutputUnwritable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(text.len())
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
