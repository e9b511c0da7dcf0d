//! Segmentation strategies.

use std::fmt;
use std::str::FromStr;

use ece_core::EceError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Sentences, split at terminal punctuation and blank lines.
    #[default]
    Prose,
    /// Blank-line separated blocks with indentation kept.
    Code,
    /// One atom per non-blank line.
    Lines,
    /// Whitespace-separated tokens.
    Tokens,
    /// Fixed-size runs of tokens.
    Window,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [Self::Prose, Self::Code, Self::Lines, Self::Tokens, Self::Window];

    /// Strict lookup, case-insensitive, with aliases.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "prose" | "sentences" => Some(Self::Prose),
            "code" | "blocks" => Some(Self::Code),
            "lines" | "line" => Some(Self::Lines),
            "tokens" | "token" | "words" => Some(Self::Tokens),
            "window" | "windows" => Some(Self::Window),
            _ => None,
        }
    }

    /// Lenient lookup used at the host boundary.
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_else(|| {
            tracing::debug!(strategy = name, "unknown atomize strategy, using prose");
            Self::Prose
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Prose => "prose",
            Self::Code => "code",
            Self::Lines => "lines",
            Self::Tokens => "tokens",
            Self::Window => "window",
        }
    }

    /// Joins atoms back into an approximation of the input.
    pub fn separator(&self) -> &'static str {
        match self {
            Self::Prose | Self::Tokens | Self::Window => " ",
            Self::Code => "\n\n",
            Self::Lines => "\n",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = EceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| EceError::InvalidArgument(format!("unknown strategy: {s}")))
    }
}
