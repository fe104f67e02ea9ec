//! Formatting options.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::OptionsError;

/// Widest indent accepted, in spaces.
pub const MAX_INDENT_WIDTH: u8 = 8;

/// One level of indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawIndent")]
pub enum IndentStyle {
    Spaces(u8),
    Tabs,
}

impl IndentStyle {
    /// The text emitted for one indent level.
    pub fn unit(&self) -> String {
        match self {
            IndentStyle::Spaces(n) => " ".repeat(usize::from(*n)),
            IndentStyle::Tabs => "\t".into(),
        }
    }

    fn spaces(width: u64) -> Result<Self, OptionsError> {
        match u8::try_from(width) {
            Ok(n) if (1..=MAX_INDENT_WIDTH).contains(&n) => Ok(IndentStyle::Spaces(n)),
            _ => Err(OptionsError::IndentWidth(width)),
        }
    }
}

impl Default for IndentStyle {
    fn default() -> Self {
        IndentStyle::Spaces(2)
    }
}

impl fmt::Display for IndentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndentStyle::Spaces(n) => write!(f, "{n}"),
            IndentStyle::Tabs => f.write_str("tab"),
        }
    }
}

/// Accepts `"tab"`/`"tabs"` or a width such as `"2"` or `"4"`.
impl FromStr for IndentStyle {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("tab") || s.eq_ignore_ascii_case("tabs") {
            return Ok(IndentStyle::Tabs);
        }
        match s.parse::<u64>() {
            Ok(width) => Self::spaces(width),
            Err(_) => Err(OptionsError::UnknownIndent(s.to_string())),
        }
    }
}

/// Wire form of [`IndentStyle`]: a number of spaces or a name.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawIndent {
    Width(u64),
    Name(String),
}

impl TryFrom<RawIndent> for IndentStyle {
    type Error = OptionsError;

    fn try_from(raw: RawIndent) -> Result<Self, Self::Error> {
        match raw {
            RawIndent::Width(width) => Self::spaces(width),
            RawIndent::Name(name) => name.parse(),
        }
    }
}

/// Options controlling [`crate::format_with`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    pub indent: IndentStyle,
}

impl FormatOptions {
    pub fn with_indent(indent: IndentStyle) -> Self {
        Self { indent }
    }
}
