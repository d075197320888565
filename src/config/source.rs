//! Providers of raw configuration text.
//!
//! The parser never touches the filesystem itself; a [`ConfigSource`] hands it
//! a string, whether that came from a file, standard input or memory.

use crate::{HyprMotionError, Result};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Something that can produce configuration text
pub trait ConfigSource {
    /// Short human-readable label used in logs and messages
    fn describe(&self) -> String;

    /// Read the full configuration text
    fn read_text(&self) -> Result<String>;
}

/// Configuration read from a file on disk
#[derive(Debug, Clone)]
pub struct FileConfigSource {
    path: PathBuf,
}

impl FileConfigSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConfigSource for FileConfigSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read_text(&self) -> Result<String> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| {
            HyprMotionError::SourceError(format!("Failed to read {}: {}", self.describe(), e))
        })?;
        debug!(path = %self.path.display(), bytes = text.len(), "Read config file");
        Ok(text)
    }
}

/// Configuration piped through standard input
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinConfigSource;

impl ConfigSource for StdinConfigSource {
    fn describe(&self) -> String {
        "<stdin>".to_string()
    }

    fn read_text(&self) -> Result<String> {
        let mut text = String::new();
        std::io::stdin()
            .lock()
            .read_to_string(&mut text)
            .map_err(|e| HyprMotionError::SourceError(format!("Failed to read stdin: {}", e)))?;
        debug!(bytes = text.len(), "Read config from stdin");
        Ok(text)
    }
}

/// Configuration held in memory, e.g. pasted from a clipboard
#[derive(Debug, Clone, Default)]
pub struct InMemoryConfigSource {
    label: String,
    text: String,
}

impl InMemoryConfigSource {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

impl ConfigSource for InMemoryConfigSource {
    fn describe(&self) -> String {
        self.label.clone()
    }

    fn read_text(&self) -> Result<String> {
        Ok(self.text.clone())
    }
}

/// Pick a source for a command-line argument; `-` selects standard input
pub fn source_for_path(path: &Path) -> Box<dyn ConfigSource> {
    if path.as_os_str() == "-" {
        Box::new(StdinConfigSource)
    } else {
        Box::new(FileConfigSource::new(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_file_source_reads_text() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "animation = fade, 0").unwrap();

        let source = FileConfigSource::new(file.path());
        assert_eq!(source.read_text().unwrap(), "animation = fade, 0\n");
        assert_eq!(source.describe(), file.path().display().to_string());
    }

    #[test]
    fn test_missing_file_is_source_error() {
        let source = FileConfigSource::new("/nonexistent/hyprland.conf");
        let error = source.read_text().unwrap_err();
        assert!(matches!(
            error.downcast_ref::<HyprMotionError>(),
            Some(HyprMotionError::SourceError(_))
        ));
    }

    #[test]
    fn test_in_memory_source() {
        let source = InMemoryConfigSource::new("clipboard", "bezier = a, 0, 0, 1, 1");
        assert_eq!(source.describe(), "clipboard");
        assert_eq!(source.read_text().unwrap(), "bezier = a, 0, 0, 1, 1");
    }

    #[test]
    fn test_dash_selects_stdin() {
        assert_eq!(source_for_path(Path::new("-")).describe(), "<stdin>");
        assert_eq!(
            source_for_path(Path::new("hyprland.conf")).describe(),
            "hyprland.conf"
        );
    }
}
