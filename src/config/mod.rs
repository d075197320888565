//! Configuration parsing for HyprMotion

pub mod normalizer;
pub mod parser;
pub mod section;
pub mod settings;
pub mod source;

pub use normalizer::{normalize_line, strip_comment};
pub use parser::{parse, ConfigParser, ParseError, ParseErrorKind, ParseReport, ParseResult};
pub use section::{LineDisposition, SectionState, SectionTracker};
pub use settings::{OutputFormat, Settings, SettingsError};
pub use source::{
    source_for_path, ConfigSource, FileConfigSource, InMemoryConfigSource, StdinConfigSource,
};

use crate::{HyprMotionError, Result};
use tracing::info;

/// Read text from `source` and parse it
pub fn parse_source(source: &dyn ConfigSource, lenient: bool) -> Result<ParseReport> {
    let text = source.read_text()?;
    let parser = ConfigParser::new();

    let report = if lenient {
        parser.parse_lenient(&text)
    } else {
        let result = parser
            .parse(&text)
            .map_err(|error| HyprMotionError::ParseFailed {
                origin: source.describe(),
                error,
            })?;
        ParseReport {
            result,
            errors: Vec::new(),
        }
    };

    info!(
        source = %source.describe(),
        beziers = report.result.beziers.len(),
        animations = report.result.animations.len(),
        skipped = report.errors.len(),
        "Loaded animation config"
    );

    Ok(report)
}
