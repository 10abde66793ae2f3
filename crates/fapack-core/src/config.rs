use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::filename::NameOptions;

fn default_prepend() -> String {
    "fa-".to_string()
}

/// Global configuration loaded from `~/.config/fapack/config.toml`.
///
/// The CDN host, pinned release, and stagger interval are compile-time
/// constants, not configuration; only the filename scheme and the output
/// directory are user-facing knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FapackConfig {
    /// Include the style prefix token (e.g. `fab-`) in output filenames.
    #[serde(default)]
    pub include_style_prefix: bool,
    /// String inserted before the icon name in output filenames.
    #[serde(default = "default_prepend")]
    pub prepend: String,
    /// Directory fetched SVGs are written to (default: current directory).
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
}

impl Default for FapackConfig {
    fn default() -> Self {
        Self {
            include_style_prefix: false,
            prepend: default_prepend(),
            download_dir: None,
        }
    }
}

impl FapackConfig {
    /// Filename options derived from this config.
    pub fn name_options(&self) -> NameOptions {
        NameOptions {
            include_style_prefix: self.include_style_prefix,
            prepend: self.prepend.clone(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fapack")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FapackConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FapackConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: FapackConfig = toml::from_str(&data)?;
    Ok(cfg)
}
