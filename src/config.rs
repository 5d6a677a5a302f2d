//! Layout configuration module.
//!
//! Handles loading and validating `toclink.toml`. The geometry the original
//! workflow hard-coded into the annotation script lives here instead, so a
//! songbook with a different page size or TOC leading only needs a config
//! file, not a code change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [page]
//! height_in = 11.0          # Page height in inches (US Letter)
//! top_margin_in = 0.7       # Space above the first link
//! pixels_per_inch = 72.0    # Host coordinate resolution
//!
//! [links]
//! spacing_in = 0.56         # Baseline-to-baseline distance between links
//! height_in = 0.25          # Clickable rectangle height
//! width_in = 3.5            # Clickable rectangle width
//! left_margin_in = 0.75     # Rectangle left edge
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want:
//!
//! ```toml
//! # Only override the page height for A4 songbooks
//! [page]
//! height_in = 11.69
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Layout configuration loaded from `toclink.toml`.
///
/// All fields have defaults that reproduce the original songbook layout.
/// User config files need only specify the values they want to override.
/// Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Page dimensions and resolution.
    pub page: PageConfig,
    /// Link rectangle dimensions and stacking.
    pub links: LinksConfig,
}

impl LayoutConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page.height_in <= 0.0 {
            return Err(ConfigError::Validation(
                "page.height_in must be positive".into(),
            ));
        }
        if self.page.pixels_per_inch <= 0.0 {
            return Err(ConfigError::Validation(
                "page.pixels_per_inch must be positive".into(),
            ));
        }
        if self.page.top_margin_in < 0.0 || self.page.top_margin_in >= self.page.height_in {
            return Err(ConfigError::Validation(
                "page.top_margin_in must be within the page".into(),
            ));
        }
        if self.links.spacing_in <= 0.0 {
            return Err(ConfigError::Validation(
                "links.spacing_in must be positive".into(),
            ));
        }
        if self.links.height_in <= 0.0 || self.links.width_in <= 0.0 {
            return Err(ConfigError::Validation(
                "links.height_in and links.width_in must be positive".into(),
            ));
        }
        if self.links.left_margin_in < 0.0 {
            return Err(ConfigError::Validation(
                "links.left_margin_in must not be negative".into(),
            ));
        }
        Ok(())
    }
}

/// Page dimensions and coordinate resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Page height in inches.
    pub height_in: f64,
    /// Distance from the top of the page to the first link.
    pub top_margin_in: f64,
    /// Host coordinate resolution. Acrobat and PDF user space are 72/inch.
    pub pixels_per_inch: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            height_in: 11.0,
            top_margin_in: 0.7,
            pixels_per_inch: 72.0,
        }
    }
}

/// Link rectangle dimensions and stacking distance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LinksConfig {
    /// Vertical distance between consecutive link baselines.
    pub spacing_in: f64,
    /// Height of each clickable rectangle.
    pub height_in: f64,
    /// Width of each clickable rectangle.
    pub width_in: f64,
    /// Left edge of every rectangle.
    pub left_margin_in: f64,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            spacing_in: 0.56,
            height_in: 0.25,
            width_in: 3.5,
            left_margin_in: 0.75,
        }
    }
}

/// Load and validate a config file.
pub fn load(path: &Path) -> Result<LayoutConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: LayoutConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Load a config file if it exists, otherwise return stock defaults.
pub fn load_optional(path: &Path) -> Result<LayoutConfig, ConfigError> {
    if path.exists() {
        load(path)
    } else {
        Ok(LayoutConfig::default())
    }
}

/// A fully documented stock config, printed by `toclink gen-config`.
pub fn stock_config_toml() -> String {
    r#"# toclink configuration
# All options are optional - the values below are the defaults, which
# match the original songbook layout (US Letter, 0.56in TOC leading).

[page]
# Page height in inches
height_in = 11.0
# Distance from the top of the page to the first link
top_margin_in = 0.7
# Host coordinate resolution (PDF user space is 72 per inch)
pixels_per_inch = 72.0

[links]
# Vertical distance between consecutive link baselines
spacing_in = 0.56
# Height of each clickable rectangle
height_in = 0.25
# Width of each clickable rectangle
width_in = 3.5
# Left edge of every rectangle
left_margin_in = 0.75
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_reproduce_original_layout() {
        let config = LayoutConfig::default();
        assert_eq!(config.page.height_in, 11.0);
        assert_eq!(config.page.top_margin_in, 0.7);
        assert_eq!(config.page.pixels_per_inch, 72.0);
        assert_eq!(config.links.spacing_in, 0.56);
        assert_eq!(config.links.height_in, 0.25);
        assert_eq!(config.links.width_in, 3.5);
        assert_eq!(config.links.left_margin_in, 0.75);
    }

    #[test]
    fn defaults_validate() {
        assert!(LayoutConfig::default().validate().is_ok());
    }

    #[test]
    fn stock_config_parses_to_defaults() {
        let parsed: LayoutConfig = toml::from_str(&stock_config_toml()).unwrap();
        assert_eq!(parsed.page.height_in, LayoutConfig::default().page.height_in);
        assert_eq!(
            parsed.links.spacing_in,
            LayoutConfig::default().links.spacing_in
        );
    }

    #[test]
    fn sparse_override_keeps_other_defaults() {
        let config: LayoutConfig = toml::from_str("[page]\nheight_in = 11.69\n").unwrap();
        assert_eq!(config.page.height_in, 11.69);
        assert_eq!(config.page.top_margin_in, 0.7);
        assert_eq!(config.links.width_in, 3.5);
    }

    #[test]
    fn unknown_keys_rejected() {
        let result: Result<LayoutConfig, _> = toml::from_str("[page]\nheigt_in = 11.0\n");
        assert!(result.is_err());
    }

    #[test]
    fn negative_spacing_fails_validation() {
        let config: LayoutConfig = toml::from_str("[links]\nspacing_in = -0.5\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn top_margin_past_page_bottom_fails_validation() {
        let config: LayoutConfig = toml::from_str("[page]\ntop_margin_in = 12.0\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_optional_missing_file_gives_defaults() {
        let config = load_optional(Path::new("/nonexistent/toclink.toml")).unwrap();
        assert_eq!(config.page.height_in, 11.0);
    }
}
