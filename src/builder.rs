//! Collage URL assembly — the externally observable operation.
//!
//! Given a validated config, an ordered list of photo references, and a
//! caption label, [`build_plan`] pairs each photo positionally with its
//! slot (caller order is authoritative, no sorting) and assembles the
//! delivery URL in the fixed layering order:
//!
//! ```text
//! base transform → photo overlays in slot order → ribbon → text → background
//! ```
//!
//! The order is load-bearing: the host format resolves layer stacking from
//! segment position, so reordering segments changes the rendered image.
//!
//! Abnormal conditions are reported as values, never panics: an empty
//! account name ([`BuildError::Unconfigured`]), a photo count that does not
//! match the layout's slot count ([`BuildError::WrongPhotoCount`]), and a
//! config whose geometry does not fit the canvas
//! ([`BuildError::InvalidConfig`] — builds re-validate, since only the
//! loader path is guaranteed to have done so). The [`collage_url`] boundary
//! maps all of them to an empty string, the contract the surrounding UI
//! consumes — it never partially renders a collage with missing photos.
//!
//! The calendar year that appears in the caption is an explicit parameter
//! of the core ([`build_plan`], [`collage_url_at`]) so output is
//! deterministic under test; only [`collage_url`] reads the system clock.

use chrono::Datelike;
use serde::Serialize;
use thiserror::Error;

use crate::config::CollageConfig;
use crate::layout::{self, Slot};
use crate::transform;
use crate::types::PhotoRef;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BuildError {
    #[error("no destination account configured — set service.cloud_name in collage.toml")]
    Unconfigured,
    #[error("collage needs exactly {expected} photos, got {got}")]
    WrongPhotoCount { expected: usize, got: usize },
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Role of one top-level segment in the assembled URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Base,
    Photo,
    Ribbon,
    Text,
    Background,
}

/// One segment of the assembled URL, labeled by role.
#[derive(Debug, Clone, Serialize)]
pub struct Segment {
    pub kind: SegmentKind,
    pub value: String,
}

/// Structured breakdown of one collage build: the computed slots, every
/// segment in assembly order, and the finished URL. Derived data only —
/// recomputed per build, never cached.
#[derive(Debug, Clone, Serialize)]
pub struct CollagePlan {
    pub canvas: [u32; 2],
    pub caption: String,
    pub slots: Vec<Slot>,
    pub segments: Vec<Segment>,
    pub url: String,
}

/// The caption literal: `{label} – Holiday {year}` (en dash).
pub fn caption_text(label: &str, year: i32) -> String {
    format!("{label} – Holiday {year}")
}

/// Current calendar year from the system clock — the default for the
/// injected year parameter at the call boundary.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Build the full collage plan for the given photos and caption label.
///
/// Photos pair positionally with the layout's slots: photo i fills slot i.
/// Identifiers are not validated beyond the flat-namespace slash escape;
/// the upload transport is trusted to have issued well-formed ids.
pub fn build_plan(
    config: &CollageConfig,
    photos: &[PhotoRef],
    label: &str,
    year: i32,
) -> Result<CollagePlan, BuildError> {
    if config.service.cloud_name.is_empty() {
        return Err(BuildError::Unconfigured);
    }
    // The loader validates configs it reads, but a config assembled in
    // code arrives here unchecked — and the slot arithmetic assumes a
    // geometry that fits the canvas.
    config
        .validate()
        .map_err(|e| BuildError::InvalidConfig(e.to_string()))?;
    let slots = layout::compute_slots(&config.layout);
    if photos.len() != slots.len() {
        return Err(BuildError::WrongPhotoCount {
            expected: slots.len(),
            got: photos.len(),
        });
    }

    let caption = caption_text(label, year);
    let mut segments = Vec::with_capacity(slots.len() + 4);
    segments.push(Segment {
        kind: SegmentKind::Base,
        value: transform::base(config.layout.canvas),
    });
    for (photo, slot) in photos.iter().zip(&slots) {
        segments.push(Segment {
            kind: SegmentKind::Photo,
            value: transform::photo_overlay(&photo.public_id, slot, &config.frame),
        });
    }
    segments.push(Segment {
        kind: SegmentKind::Ribbon,
        value: transform::ribbon_overlay(
            &config.assets.ribbon_pixel_id,
            config.layout.canvas[0],
            &config.caption,
        ),
    });
    segments.push(Segment {
        kind: SegmentKind::Text,
        value: transform::text_overlay(&caption, &config.caption),
    });
    segments.push(Segment {
        kind: SegmentKind::Background,
        value: config.assets.background_id.clone(),
    });

    let path: Vec<&str> = segments.iter().map(|s| s.value.as_str()).collect();
    let url = format!(
        "https://{}/{}/image/upload/{}",
        config.service.host,
        config.service.cloud_name,
        path.join("/"),
    );

    Ok(CollagePlan {
        canvas: config.layout.canvas,
        caption,
        slots,
        segments,
        url,
    })
}

/// Deterministic URL builder with an explicit year.
///
/// `None` signals one of the two guard conditions; no partial URL is ever
/// produced.
pub fn collage_url_at(
    config: &CollageConfig,
    photos: &[PhotoRef],
    label: &str,
    year: i32,
) -> Option<String> {
    build_plan(config, photos, label, year).ok().map(|p| p.url)
}

/// Call-boundary builder: current system year, guard failures map to `""`.
///
/// This is the contract the surrounding UI consumes — an empty string means
/// "nothing to share yet" (unconfigured account or incomplete photo set).
pub fn collage_url(config: &CollageConfig, photos: &[PhotoRef], label: &str) -> String {
    collage_url_at(config, photos, label, current_year()).unwrap_or_default()
}
