//! Animation style keywords and their parameter grammars
//!
//! A style is written as a base keyword optionally followed by a single
//! parameter, e.g. `slide left`, `popin 80%` or `slidefade 20%`. Only the
//! slide, popin and slidefade families accept a parameter.

use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

static PERCENTAGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)%$").expect("percentage pattern is a valid regex"));

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleError {
    #[error("Invalid slide direction: {0}. Must be left, right, top, or bottom")]
    InvalidSlideDirection(String),
    #[error("Invalid {style} percentage: {value}. Must be in format NUMBER% between 0 and 100")]
    InvalidPercentage { style: BaseStyle, value: String },
    #[error("Style {0} does not support parameters")]
    DoesNotAcceptParameter(BaseStyle),
}

/// Style keyword without its parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseStyle {
    Slide,
    SlideVert,
    Popin,
    Gnomed,
    Fade,
    SlideFade,
    SlideFadeVert,
    Once,
    Loop,
}

impl BaseStyle {
    pub const ALL: [BaseStyle; 9] = [
        BaseStyle::Slide,
        BaseStyle::SlideVert,
        BaseStyle::Popin,
        BaseStyle::Gnomed,
        BaseStyle::Fade,
        BaseStyle::SlideFade,
        BaseStyle::SlideFadeVert,
        BaseStyle::Once,
        BaseStyle::Loop,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BaseStyle::Slide => "slide",
            BaseStyle::SlideVert => "slidevert",
            BaseStyle::Popin => "popin",
            BaseStyle::Gnomed => "gnomed",
            BaseStyle::Fade => "fade",
            BaseStyle::SlideFade => "slidefade",
            BaseStyle::SlideFadeVert => "slidefadevert",
            BaseStyle::Once => "once",
            BaseStyle::Loop => "loop",
        }
    }

    /// Whether a parameter may follow this keyword
    pub fn takes_parameter(self) -> bool {
        matches!(
            self,
            BaseStyle::Slide | BaseStyle::Popin | BaseStyle::SlideFade | BaseStyle::SlideFadeVert
        )
    }
}

impl FromStr for BaseStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BaseStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| format!("Unknown style: {}", s))
    }
}

impl fmt::Display for BaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction parameter of the `slide` style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideDirection {
    Left,
    Right,
    Top,
    Bottom,
}

impl SlideDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SlideDirection::Left => "left",
            SlideDirection::Right => "right",
            SlideDirection::Top => "top",
            SlideDirection::Bottom => "bottom",
        }
    }
}

impl FromStr for SlideDirection {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(SlideDirection::Left),
            "right" => Ok(SlideDirection::Right),
            "top" => Ok(SlideDirection::Top),
            "bottom" => Ok(SlideDirection::Bottom),
            _ => Err(StyleError::InvalidSlideDirection(s.to_string())),
        }
    }
}

impl fmt::Display for SlideDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whole-number percentage in `0..=100`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    pub const MAX: u8 = 100;

    pub fn new(value: u32) -> Option<Self> {
        u8::try_from(value)
            .ok()
            .filter(|value| *value <= Self::MAX)
            .map(Percentage)
    }

    /// Parse the `<digits>%` form; signs, decimals and whitespace are rejected
    pub fn parse(text: &str) -> Option<Self> {
        let captures = PERCENTAGE_REGEX.captures(text)?;
        let value = captures[1].parse::<u32>().ok()?;
        Self::new(value)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Validated style attached to an enabled animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// Keyword given without a parameter
    Bare(BaseStyle),
    Slide(SlideDirection),
    Popin(Percentage),
    SlideFade(Percentage),
    SlideFadeVert(Percentage),
}

impl Style {
    /// Apply a parameter to a base keyword using that keyword's grammar
    pub fn with_parameter(base: BaseStyle, param: &str) -> Result<Self, StyleError> {
        let percentage = || {
            Percentage::parse(param).ok_or_else(|| StyleError::InvalidPercentage {
                style: base,
                value: param.to_string(),
            })
        };

        match base {
            BaseStyle::Slide => Ok(Style::Slide(param.parse::<SlideDirection>()?)),
            BaseStyle::Popin => Ok(Style::Popin(percentage()?)),
            BaseStyle::SlideFade => Ok(Style::SlideFade(percentage()?)),
            BaseStyle::SlideFadeVert => Ok(Style::SlideFadeVert(percentage()?)),
            other => Err(StyleError::DoesNotAcceptParameter(other)),
        }
    }

    pub fn base(&self) -> BaseStyle {
        match self {
            Style::Bare(base) => *base,
            Style::Slide(_) => BaseStyle::Slide,
            Style::Popin(_) => BaseStyle::Popin,
            Style::SlideFade(_) => BaseStyle::SlideFade,
            Style::SlideFadeVert(_) => BaseStyle::SlideFadeVert,
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Style::Bare(base) => write!(f, "{}", base),
            Style::Slide(direction) => write!(f, "slide {}", direction),
            Style::Popin(percent) => write!(f, "popin {}", percent),
            Style::SlideFade(percent) => write!(f, "slidefade {}", percent),
            Style::SlideFadeVert(percent) => write!(f, "slidefadevert {}", percent),
        }
    }
}

impl Serialize for Style {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
