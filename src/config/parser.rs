use crate::config::normalizer::normalize_line;
use crate::config::section::{LineDisposition, SectionTracker};
use crate::models::{
    animation::{AnimationEntry, AnimationName, Curve, DEFAULT_CURVE},
    bezier::Bezier,
    style::{BaseStyle, Style, StyleError},
};
use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, instrument, trace, warn};

const BEZIER_KEYWORD: &str = "bezier";
const ANIMATION_KEYWORD: &str = "animation";

/// `bezier` keyword, name and four control values
const BEZIER_FIELD_COUNT: usize = 6;
/// `animation` keyword, name and on/off flag
const DISABLED_ANIMATION_MIN_FIELDS: usize = 3;
/// Adds speed and curve to the disabled form
const ENABLED_ANIMATION_MIN_FIELDS: usize = 5;

/// The rule a declaration line violated
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    #[error("Invalid bezier format: {0}. Expected: bezier = NAME, X0, Y0, X1, Y1")]
    MalformedBezier(String),
    #[error("Invalid animation format. Expected: animation = NAME, ONOFF, SPEED, CURVE [, STYLE]")]
    MalformedAnimation,
    #[error("Invalid animation name: {0}")]
    UnknownAnimationName(String),
    #[error("ONOFF must be either 0 or 1, got {0}")]
    InvalidOnOff(String),
    #[error("Speed must start with a non-negative number of deciseconds, got {0}")]
    InvalidSpeed(String),
    #[error("Unknown bezier curve: {0}")]
    UnknownCurve(String),
    #[error("Invalid style {style} for animation {animation}")]
    InvalidStyle {
        animation: AnimationName,
        style: String,
    },
    #[error("Invalid slide direction: {0}. Must be left, right, top, or bottom")]
    InvalidSlideDirection(String),
    #[error("Invalid {style} percentage: {value}. Must be in format NUMBER% between 0 and 100")]
    InvalidPercentage { style: BaseStyle, value: String },
    #[error("Style {0} does not support parameters")]
    StyleDoesNotAcceptParameter(BaseStyle),
}

impl From<StyleError> for ParseErrorKind {
    fn from(error: StyleError) -> Self {
        match error {
            StyleError::InvalidSlideDirection(direction) => {
                ParseErrorKind::InvalidSlideDirection(direction)
            }
            StyleError::InvalidPercentage { style, value } => {
                ParseErrorKind::InvalidPercentage { style, value }
            }
            StyleError::DoesNotAcceptParameter(style) => {
                ParseErrorKind::StyleDoesNotAcceptParameter(style)
            }
        }
    }
}

/// A declaration line that could not be parsed
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Failed to parse line {line_number} \"{line}\": {kind}")]
pub struct ParseError {
    /// 1-based line number in the input text
    pub line_number: usize,
    /// Line content after comment stripping and trimming
    pub line: String,
    pub kind: ParseErrorKind,
}

/// Beziers and animations extracted from one configuration text
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ParseResult {
    /// One entry per bezier name, ordered by first declaration, holding the
    /// last declared control values
    pub beziers: Vec<Bezier>,
    /// Every animation declaration in source order, duplicates included
    pub animations: Vec<AnimationEntry>,
}

impl ParseResult {
    pub fn bezier(&self, name: &str) -> Option<&Bezier> {
        self.beziers.iter().find(|bezier| bezier.name == name)
    }

    /// Last declaration for the given animation, which is the one in effect
    pub fn animation(&self, name: AnimationName) -> Option<&AnimationEntry> {
        self.animations.iter().rev().find(|entry| entry.name == name)
    }

    pub fn enabled_animations(&self) -> impl Iterator<Item = &AnimationEntry> {
        self.animations.iter().filter(|entry| entry.is_enabled())
    }

    pub fn is_empty(&self) -> bool {
        self.beziers.is_empty() && self.animations.is_empty()
    }
}

/// Outcome of a lenient parse: everything that parsed, plus every line that did not
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParseReport {
    pub result: ParseResult,
    pub errors: Vec<ParseError>,
}

impl ParseReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parser for the `bezier` and `animation` declarations of a Hyprland config.
///
/// The parser holds no state between calls; every parse builds its own
/// bezier table, so one instance can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigParser;

impl ConfigParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse the whole text, failing on the first malformed declaration
    #[instrument(skip_all, fields(bytes = text.len()))]
    pub fn parse(&self, text: &str) -> Result<ParseResult, ParseError> {
        run(text, |error| {
            debug!(line_number = error.line_number, "Aborting parse: {}", error.kind);
            Err(error)
        })
    }

    /// Parse the whole text, skipping malformed declarations
    #[instrument(skip_all, fields(bytes = text.len()))]
    pub fn parse_lenient(&self, text: &str) -> ParseReport {
        let mut errors = Vec::new();
        let result = run(text, |error| {
            warn!(line_number = error.line_number, "Skipping line: {}", error.kind);
            errors.push(error);
            Ok(())
        })
        .unwrap_or_default();

        ParseReport { result, errors }
    }
}

/// Parse configuration text with a fresh [`ConfigParser`]
pub fn parse(text: &str) -> Result<ParseResult, ParseError> {
    ConfigParser::new().parse(text)
}

/// Single pass over the lines in source order. `on_error` decides whether a
/// failed declaration aborts the run or is skipped.
fn run<F>(text: &str, mut on_error: F) -> Result<ParseResult, ParseError>
where
    F: FnMut(ParseError) -> Result<(), ParseError>,
{
    let mut context = ParseContext::default();
    let mut tracker = SectionTracker::new();

    for (index, raw_line) in text.lines().enumerate() {
        let line = normalize_line(raw_line);
        if line.is_empty() {
            continue;
        }

        match tracker.observe(&line) {
            LineDisposition::Candidate => {}
            LineDisposition::Consumed | LineDisposition::Ignored => continue,
        }

        if let Err(kind) = context.parse_declaration(&line) {
            on_error(ParseError {
                line_number: index + 1,
                line,
                kind,
            })?;
        }
    }

    let result = context.into_result();
    debug!(
        beziers = result.beziers.len(),
        animations = result.animations.len(),
        "Parsed animation config"
    );

    Ok(result)
}

/// Split on `=` and `,`, dropping empty fragments
fn split_fields(line: &str) -> Vec<&str> {
    line.split(['=', ','])
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .collect()
}

/// Working tables for a single parse
#[derive(Debug, Default)]
struct ParseContext {
    beziers: IndexMap<String, Bezier>,
    animations: Vec<AnimationEntry>,
}

impl ParseContext {
    fn parse_declaration(&mut self, line: &str) -> Result<(), ParseErrorKind> {
        let fields = split_fields(line);

        match fields.first().copied() {
            Some(BEZIER_KEYWORD) => self.parse_bezier(&fields),
            Some(ANIMATION_KEYWORD) => self.parse_animation(&fields),
            Some(first) => {
                let word = first.split_whitespace().next().unwrap_or_default();
                if word == BEZIER_KEYWORD || word == ANIMATION_KEYWORD {
                    debug!(line, "Declaration keyword without `=`, ignoring line");
                } else {
                    trace!(line, "Not an animation declaration");
                }
                Ok(())
            }
            None => Ok(()),
        }
    }

    fn parse_bezier(&mut self, fields: &[&str]) -> Result<(), ParseErrorKind> {
        if fields.len() != BEZIER_FIELD_COUNT {
            return Err(ParseErrorKind::MalformedBezier(format!(
                "expected {} fields, found {}",
                BEZIER_FIELD_COUNT,
                fields.len()
            )));
        }

        let name = fields[1];
        let mut values = [0.0_f64; 4];
        for (value, text) in values.iter_mut().zip(&fields[2..]) {
            *value = text.parse::<f64>().map_err(|_| {
                ParseErrorKind::MalformedBezier(format!("control value {} is not a number", text))
            })?;
        }

        let [x0, y0, x1, y1] = values;
        let bezier = Bezier::new(name, x0, y0, x1, y1)
            .map_err(|e| ParseErrorKind::MalformedBezier(e.to_string()))?;

        trace!(name, "Declared bezier");
        if self.beziers.insert(name.to_string(), bezier).is_some() {
            debug!(name, "Bezier redeclared, later values win");
        }

        Ok(())
    }

    fn parse_animation(&mut self, fields: &[&str]) -> Result<(), ParseErrorKind> {
        if fields.len() < DISABLED_ANIMATION_MIN_FIELDS {
            return Err(ParseErrorKind::MalformedAnimation);
        }

        let name: AnimationName = fields[1]
            .parse()
            .map_err(|_| ParseErrorKind::UnknownAnimationName(fields[1].to_string()))?;

        match fields[2] {
            "0" => {
                trace!(%name, "Declared disabled animation");
                self.animations.push(AnimationEntry::disabled(name));
                return Ok(());
            }
            "1" => {}
            other => return Err(ParseErrorKind::InvalidOnOff(other.to_string())),
        }

        if fields.len() < ENABLED_ANIMATION_MIN_FIELDS {
            return Err(ParseErrorKind::MalformedAnimation);
        }

        let speed = parse_speed(fields[3])?;
        let curve = self.resolve_curve(fields[4])?;
        let style = match fields.get(5) {
            Some(style) => Some(parse_style(name, style)?),
            None => None,
        };

        trace!(%name, speed, curve = curve.name(), "Declared animation");
        self.animations
            .push(AnimationEntry::enabled(name, speed, curve, style));

        Ok(())
    }

    /// Only beziers declared above the current line are visible
    fn resolve_curve(&self, name: &str) -> Result<Curve, ParseErrorKind> {
        if name == DEFAULT_CURVE {
            return Ok(Curve::Default);
        }

        self.beziers
            .get(name)
            .cloned()
            .map(Curve::Bezier)
            .ok_or_else(|| ParseErrorKind::UnknownCurve(name.to_string()))
    }

    fn into_result(self) -> ParseResult {
        ParseResult {
            beziers: self.beziers.into_values().collect(),
            animations: self.animations,
        }
    }
}

/// Leading decimal digits of the field, so `4.79` reads as 4 and `5ms` as 5.
/// Values beyond `u32::MAX` saturate.
fn parse_speed(field: &str) -> Result<u32, ParseErrorKind> {
    let unsigned = field.strip_prefix('+').unwrap_or(field);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..digits_end];
    if digits.is_empty() {
        return Err(ParseErrorKind::InvalidSpeed(field.to_string()));
    }

    if digits_end < unsigned.len() {
        debug!(field, "Ignoring trailing characters after speed");
    }

    Ok(digits.bytes().fold(0u32, |speed, digit| {
        speed
            .saturating_mul(10)
            .saturating_add(u32::from(digit - b'0'))
    }))
}

/// Validate `STYLE [PARAM]` against the animation's permitted styles
fn parse_style(animation: AnimationName, field: &str) -> Result<Style, ParseErrorKind> {
    let mut words = field.split_whitespace();
    let keyword = words.next().unwrap_or_default();
    let param = words.collect::<Vec<_>>().join(" ");

    let base = keyword
        .parse::<BaseStyle>()
        .ok()
        .filter(|base| animation.accepts_style(*base))
        .ok_or_else(|| ParseErrorKind::InvalidStyle {
            animation,
            style: keyword.to_string(),
        })?;

    if param.is_empty() {
        return Ok(Style::Bare(base));
    }

    Ok(Style::with_parameter(base, &param)?)
}
