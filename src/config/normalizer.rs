//! Comment stripping and whitespace normalisation for configuration lines

/// Character that starts a comment running to the end of the line
pub const COMMENT_MARKER: char = '#';

const ESCAPED_MARKER: &str = "##";
const PLACEHOLDER: char = '\u{0}';

/// Remove the comment from a raw line, keeping escaped `##` as a literal `#`.
///
/// Escapes are substituted before looking for the comment start so that
/// `##text` and `#comment` are never confused.
pub fn strip_comment(line: &str) -> String {
    let escaped = line.replace(ESCAPED_MARKER, &PLACEHOLDER.to_string());
    let content = match escaped.find(COMMENT_MARKER) {
        Some(index) => &escaped[..index],
        None => escaped.as_str(),
    };

    content.replace(PLACEHOLDER, &COMMENT_MARKER.to_string())
}

/// Strip comments and surrounding whitespace. An empty result means the line
/// carries nothing and should be skipped.
pub fn normalize_line(line: &str) -> String {
    strip_comment(line).trim().to_string()
}
