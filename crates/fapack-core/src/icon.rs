//! Icon identifiers and style families.
//!
//! An identifier is one input line of the form `<prefix> <name>`
//! (e.g. `fab fa-facebook-square`). The prefix selects the style family,
//! which in turn selects the CDN subdirectory.

use std::fmt;
use thiserror::Error;

/// FontAwesome style family, named after the CDN subdirectory it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Brands,
    Light,
    Regular,
    Solid,
}

impl Style {
    /// Maps a class prefix to its style family.
    ///
    /// Anything that is not `fab`/`fal`/`far` (including `fas`, bare `fa`,
    /// and unrecognized prefixes like `fak`) falls back to `Solid` rather
    /// than erroring.
    pub fn from_prefix(prefix: &str) -> Self {
        match prefix {
            "fab" => Style::Brands,
            "fal" => Style::Light,
            "far" => Style::Regular,
            _ => Style::Solid,
        }
    }

    /// CDN subdirectory name for this style.
    pub fn as_dir(&self) -> &'static str {
        match self {
            Style::Brands => "brands",
            Style::Light => "light",
            Style::Regular => "regular",
            Style::Solid => "solid",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_dir())
    }
}

/// Malformed input line: missing prefix/name or extra tokens. Carries the
/// original line so the failure list can echo it back verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid icon identifier: {line:?}")]
pub struct InvalidIdentifier {
    pub line: String,
}

/// One parsed input line: the style prefix token and the icon name token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconIdentifier {
    pub prefix: String,
    pub name: String,
}

impl IconIdentifier {
    /// Parses `<prefix> <name>` from one line.
    ///
    /// Exactly two whitespace-separated tokens are required; zero, one, or
    /// three-or-more tokens never produce an identifier.
    pub fn parse(line: &str) -> Result<Self, InvalidIdentifier> {
        let mut tokens = line.split_whitespace();
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(prefix), Some(name), None) => Ok(Self {
                prefix: prefix.to_string(),
                name: name.to_string(),
            }),
            _ => Err(InvalidIdentifier {
                line: line.to_string(),
            }),
        }
    }

    /// Style family selected by the prefix token.
    pub fn style(&self) -> Style {
        Style::from_prefix(&self.prefix)
    }

    /// Icon name with a leading `fa-` class marker removed, if present.
    pub fn bare_name(&self) -> &str {
        self.name.strip_prefix("fa-").unwrap_or(&self.name)
    }
}
