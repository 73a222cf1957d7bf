//! Wire-format segment builders for the hosting service's URL syntax.
//!
//! The delivery URL is a fixed contract dictated by the external service:
//! slash-delimited instruction groups of comma-delimited key-prefixed
//! tokens (`w_473`, `c_fill`, `bo_8px_solid_gold`, …). The rendered image
//! depends on reproducing this syntax bit-exact, so every token the crate
//! emits is formatted here and nowhere else.
//!
//! Each overlay is *two* path groups: a layer group (`l_…` plus sizing and
//! decoration) followed by an apply group (`fl_layer_apply` plus gravity
//! and offsets). Splitting a finished URL on `/` therefore yields two
//! entries per overlay — callers that reason about top-level segment order
//! must account for that.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::config::{CaptionConfig, FrameConfig};
use crate::layout::Slot;

/// Percent-encoding set equivalent to JavaScript's `encodeURIComponent`:
/// everything except alphanumerics and `- _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Escape a public id for use in an `l_` overlay reference.
///
/// Overlay references use a flat namespace: folder separators are written
/// as `:` instead of `/`. No other characters are rewritten — ids with
/// reserved URL characters beyond the slash are passed through untouched.
pub fn escape_overlay_id(public_id: &str) -> String {
    public_id.replace('/', ":")
}

/// Percent-encode text for embedding in an `l_text:` group.
pub fn encode_text(text: &str) -> String {
    utf8_percent_encode(text, COMPONENT).to_string()
}

/// Base transform sizing the background to the full canvas.
pub fn base(canvas: [u32; 2]) -> String {
    format!("w_{},h_{},c_fill", canvas[0], canvas[1])
}

/// Overlay placing one photo into its slot: filled to the slot's exact
/// size, corners rounded, bordered, anchored north-west at the slot's
/// offset. A zero x offset is omitted per the service's convention of
/// dropping default-valued offsets.
pub fn photo_overlay(public_id: &str, slot: &Slot, frame: &FrameConfig) -> String {
    let layer = format!(
        "l_{},w_{},h_{},c_fill,r_{},bo_{}px_solid_{}",
        escape_overlay_id(public_id),
        slot.width,
        slot.height,
        frame.corner_radius,
        frame.border_width,
        frame.border_color,
    );
    let apply = if slot.x == 0 {
        format!("fl_layer_apply,g_north_west,y_{}", slot.y)
    } else {
        format!("fl_layer_apply,g_north_west,x_{},y_{}", slot.x, slot.y)
    };
    format!("{layer}/{apply}")
}

/// Semi-transparent ribbon behind the caption: the provisioned white-pixel
/// image stretched across the canvas width, anchored to the bottom edge.
pub fn ribbon_overlay(pixel_id: &str, canvas_width: u32, caption: &CaptionConfig) -> String {
    let layer = format!(
        "l_{},w_{},h_{},o_{}",
        escape_overlay_id(pixel_id),
        canvas_width,
        caption.ribbon_height,
        caption.ribbon_opacity,
    );
    format!(
        "{layer}/fl_layer_apply,g_south,y_{}",
        caption.bottom_offset
    )
}

/// Caption text overlay, centered on the bottom edge with the same offset
/// as the ribbon so it sits inside it.
pub fn text_overlay(text: &str, caption: &CaptionConfig) -> String {
    let layer = format!(
        "l_text:{}_{}:{},co_{}",
        encode_text(&caption.font_family),
        caption.font_size,
        encode_text(text),
        caption.color,
    );
    format!(
        "{layer}/fl_layer_apply,g_south,y_{}",
        caption.bottom_offset
    )
}
