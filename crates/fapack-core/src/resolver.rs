//! Resolving icon identifiers to CDN asset URLs.
//!
//! The CDN host and release are fixed constants, not configuration. This is
//! a hard dependency on one upstream release: if FontAwesome retires it, the
//! resolved URLs start returning 404 with no error on our side.

use crate::filename;
use crate::icon::{IconIdentifier, InvalidIdentifier, Style};

/// Base URL of the FontAwesome asset CDN.
pub const CDN_BASE: &str = "https://site-assets.fontawesome.com";

/// Pinned upstream release.
pub const CDN_RELEASE: &str = "v5.15.4";

/// A resolved icon: the parsed identifier, its style, and the asset URL.
/// Ephemeral, rebuilt from the raw input on every run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIcon {
    pub identifier: IconIdentifier,
    pub style: Style,
    pub url: String,
}

impl ResolvedIcon {
    /// Trailing URL segment, e.g. `facebook-square.svg`. Used for output
    /// filenames and for labeling fetch failures.
    pub fn trailing_segment(&self) -> String {
        filename::url_segment(&self.url).unwrap_or_else(|| self.url.clone())
    }
}

/// Resolves one input line to an asset URL.
///
/// Splits the line into `<prefix> <name>`, maps the prefix to a style
/// directory, strips a leading `fa-` marker from the name, and builds
/// `<CDN_BASE>/releases/<CDN_RELEASE>/svgs/<style>/<name>.svg`.
pub fn resolve(line: &str) -> Result<ResolvedIcon, InvalidIdentifier> {
    let identifier = IconIdentifier::parse(line)?;
    let style = identifier.style();
    let url = format!(
        "{}/releases/{}/svgs/{}/{}.svg",
        CDN_BASE,
        CDN_RELEASE,
        style.as_dir(),
        identifier.bare_name()
    );
    Ok(ResolvedIcon {
        identifier,
        style,
        url,
    })
}
