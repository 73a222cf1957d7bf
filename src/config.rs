//! Collage configuration module.
//!
//! Handles loading, validating, and merging `collage.toml`. Stock defaults
//! are the base layer; a user file is a sparse overlay merged recursively on
//! top, so a config needs only the keys it overrides. Unknown keys are
//! rejected to catch typos early.
//!
//! ## Configuration Options
//!
//! ```toml
//! [service]
//! cloud_name = "my-account"          # Destination account (required to build)
//! host = "res.cloudinary.com"        # Delivery host
//!
//! [assets]
//! ribbon_pixel_id = "assets/white-pixel"   # Provisioned 1×1 white image
//! background_id = "holiday-card-backdrop"  # Bottommost layer
//!
//! [layout]
//! canvas = [1600, 900]
//! caption_reserve = 120
//! margin = 50
//! gap = 40
//! row_split = [2, 1]
//! pattern = [["full"], ["major", "minor"], ["minor", "major"]]
//!
//! [frame]
//! corner_radius = 25
//! border_width = 8
//! border_color = "gold"
//!
//! [caption]
//! font_family = "Cookie"
//! font_size = 80
//! color = "rgb:5d4037"
//! ribbon_height = 100
//! ribbon_opacity = 70
//! bottom_offset = 20
//! ```
//!
//! The provisioned asset ids and the account name are deployment-specific
//! values, which is why they live here rather than as literals in the
//! builder. An empty `cloud_name` is a valid *config* (the unconfigured
//! state) — the builder, not the loader, refuses to emit a URL for it.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::layout::LayoutConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Full collage configuration loaded from `collage.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CollageConfig {
    /// Destination account and delivery host.
    pub service: ServiceConfig,
    /// Provisioned asset identifiers (ribbon pixel, background).
    pub assets: AssetsConfig,
    /// Canvas, margins, and masonry pattern.
    pub layout: LayoutConfig,
    /// Photo decoration (corner rounding, border).
    pub frame: FrameConfig,
    /// Caption ribbon and text styling.
    pub caption: CaptionConfig,
}

impl CollageConfig {
    /// Validate config values are within acceptable ranges and that the
    /// layout geometry actually fits on the canvas.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let layout = &self.layout;
        if layout.canvas[0] == 0 || layout.canvas[1] == 0 {
            return Err(ConfigError::Validation(
                "layout.canvas dimensions must be non-zero".into(),
            ));
        }
        if layout.pattern.is_empty() {
            return Err(ConfigError::Validation(
                "layout.pattern must have at least one column".into(),
            ));
        }
        if layout.pattern.iter().any(|c| c.is_empty() || c.len() > 2) {
            return Err(ConfigError::Validation(
                "layout.pattern columns must have 1 or 2 cells".into(),
            ));
        }
        if layout.row_split[0] == 0 || layout.row_split[1] == 0 {
            return Err(ConfigError::Validation(
                "layout.row_split parts must be non-zero".into(),
            ));
        }
        let cols = layout.pattern.len() as u32;
        if 2 * layout.margin + (cols - 1) * layout.gap + cols >= layout.canvas[0] {
            return Err(ConfigError::Validation(
                "layout margins and gaps leave no horizontal room for columns".into(),
            ));
        }
        let vertical_overhead = layout.caption_reserve + 2 * layout.margin + layout.gap;
        if vertical_overhead >= layout.canvas[1] {
            return Err(ConfigError::Validation(
                "layout caption reserve, margins and gap leave no vertical room for rows".into(),
            ));
        }
        if self.caption.ribbon_opacity > 100 {
            return Err(ConfigError::Validation(
                "caption.ribbon_opacity must be 0-100".into(),
            ));
        }
        if self.caption.font_size == 0 {
            return Err(ConfigError::Validation(
                "caption.font_size must be non-zero".into(),
            ));
        }
        Ok(())
    }
}

/// Destination account and delivery host.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    /// Account identifier at the hosting service. Empty means unconfigured:
    /// loading succeeds but no URL can be built.
    pub cloud_name: String,
    /// Delivery hostname.
    pub host: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            cloud_name: String::new(),
            host: "res.cloudinary.com".to_string(),
        }
    }
}

/// Identifiers of externally-provisioned assets referenced by every collage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssetsConfig {
    /// Public id of a 1×1 white image, stretched into the caption ribbon.
    pub ribbon_pixel_id: String,
    /// Public id of the background image — the bottommost visual layer.
    pub background_id: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            ribbon_pixel_id: "assets/white-pixel".to_string(),
            background_id: "holiday-card-backdrop".to_string(),
        }
    }
}

/// Decoration applied to every photo slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FrameConfig {
    /// Corner rounding radius in pixels.
    pub corner_radius: u32,
    /// Solid border width in pixels.
    pub border_width: u32,
    /// Border color, in the service's color syntax (named or `rgb:…`).
    pub border_color: String,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            corner_radius: 25,
            border_width: 8,
            border_color: "gold".to_string(),
        }
    }
}

/// Caption ribbon and text styling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CaptionConfig {
    /// Text font family (spaces allowed; encoded at serialization time).
    pub font_family: String,
    /// Text size in points.
    pub font_size: u32,
    /// Text color, in the service's color syntax.
    pub color: String,
    /// Ribbon height in pixels.
    pub ribbon_height: u32,
    /// Ribbon opacity, 0–100.
    pub ribbon_opacity: u32,
    /// Upward offset of ribbon and text from the bottom edge.
    pub bottom_offset: u32,
}

impl Default for CaptionConfig {
    fn default() -> Self {
        Self {
            font_family: "Cookie".to_string(),
            font_size: 80,
            color: "rgb:5d4037".to_string(),
            ribbon_height: 100,
            ribbon_opacity: 70,
            bottom_offset: 20,
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(CollageConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
/// Returns `Err` if it exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<CollageConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: CollageConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from the given `collage.toml` path.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result. A missing file yields the stock defaults.
pub fn load_config(path: &Path) -> Result<CollageConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(path)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `collage.toml` with all keys and
/// explanations. Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Collage Card Configuration
# ==========================
# All settings except service.cloud_name are optional; values shown are
# the defaults. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Hosting service
# ---------------------------------------------------------------------------
[service]
# Destination account at the hosting service. Must be set before any
# collage URL can be built.
cloud_name = ""

# Delivery hostname.
host = "res.cloudinary.com"

# ---------------------------------------------------------------------------
# Provisioned assets (deployment-specific public ids)
# ---------------------------------------------------------------------------
[assets]
# A 1x1 white image, stretched into the semi-transparent caption ribbon.
ribbon_pixel_id = "assets/white-pixel"

# The background image, rendered as the bottommost layer.
background_id = "holiday-card-backdrop"

# ---------------------------------------------------------------------------
# Layout geometry
# ---------------------------------------------------------------------------
[layout]
# Output canvas as [width, height] in pixels.
canvas = [1600, 900]

# Height reserved along the bottom edge for the caption ribbon.
caption_reserve = 120

# Uniform outer margin around the photo grid.
margin = 50

# Uniform gap between columns and between stacked rows.
gap = 40

# Row proportion as [major, minor] parts. [2, 1] gives the major row
# two thirds of the available height.
row_split = [2, 1]

# Masonry pattern: one list of cells per column, top to bottom.
# Cells: "full" (spans both rows), "major", "minor".
# The number of cells is the number of photos a collage requires.
pattern = [["full"], ["major", "minor"], ["minor", "major"]]

# ---------------------------------------------------------------------------
# Photo decoration
# ---------------------------------------------------------------------------
[frame]
# Corner rounding radius in pixels.
corner_radius = 25

# Solid border width in pixels.
border_width = 8

# Border color (service color syntax: named or "rgb:rrggbb").
border_color = "gold"

# ---------------------------------------------------------------------------
# Caption
# ---------------------------------------------------------------------------
[caption]
# Text font family and size.
font_family = "Cookie"
font_size = 80

# Text color (service color syntax).
color = "rgb:5d4037"

# Ribbon band height in pixels and opacity (0-100).
ribbon_height = 100
ribbon_opacity = 70

# Upward offset of ribbon and text from the bottom edge.
bottom_offset = 20
"##
}
