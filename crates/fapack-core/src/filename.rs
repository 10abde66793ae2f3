//! Output filename derivation.
//!
//! Saved files are named from the trailing segment of the resolved URL,
//! optionally prefixed by the icon's original style token and a configurable
//! prepend string, then sanitized for Linux filesystems.

use crate::resolver::ResolvedIcon;

/// Filename configuration surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameOptions {
    /// Include the original style prefix token (e.g. `fab-`) in filenames.
    pub include_style_prefix: bool,
    /// String inserted before the resolved icon name.
    pub prepend: String,
}

impl Default for NameOptions {
    fn default() -> Self {
        Self {
            include_style_prefix: false,
            prepend: "fa-".to_string(),
        }
    }
}

/// Extracts the last path segment of a URL for use as a filename hint.
///
/// Returns `None` if the URL cannot be parsed or the path is empty/root.
pub fn url_segment(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().split('/').filter(|s| !s.is_empty()).last()?;
    if segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}

/// Derives the local filename for a resolved icon.
///
/// With defaults this is `fa-facebook-square.svg`; with the style prefix
/// enabled, `fab-fa-facebook-square.svg`.
pub fn output_filename(icon: &ResolvedIcon, options: &NameOptions) -> String {
    let mut name = String::new();
    if options.include_style_prefix {
        name.push_str(&icon.identifier.prefix);
        name.push('-');
    }
    name.push_str(&options.prepend);
    name.push_str(&icon.trailing_segment());
    sanitize_filename(&name)
}

/// Sanitizes a candidate filename for safe use on Linux.
///
/// Path separators, NUL, control characters and whitespace become `_`
/// (consecutive runs collapsed), leading/trailing dots, spaces and
/// underscores are trimmed, and the result is capped at NAME_MAX bytes.
pub fn sanitize_filename(name: &str) -> String {
    const NAME_MAX: usize = 255;

    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        let bad = matches!(c, '\0' | '/' | '\\' | ' ' | '\t') || c.is_control();
        if bad {
            if !out.ends_with('_') {
                out.push('_');
            }
        } else {
            out.push(c);
        }
    }

    let trimmed = out.trim_matches(|c| matches!(c, ' ' | '\t' | '.' | '_'));

    if trimmed.len() <= NAME_MAX {
        return trimmed.to_string();
    }
    let mut take = NAME_MAX;
    while take > 0 && !trimmed.is_char_boundary(take) {
        take -= 1;
    }
    trimmed[..take].to_string()
}
