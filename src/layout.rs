//! Pure slot-geometry calculation for the masonry collage.
//!
//! All functions here are pure arithmetic over the layout configuration —
//! no I/O, no clock, no dependence on which photos will fill the slots.
//! Geometry depends only on the slot *count* and *order*, never on input
//! data, so the slot list for a given config can be computed once and
//! reused.
//!
//! ## The stock masonry
//!
//! Three equal-width columns over a 1600×900 canvas, with a 120px band
//! along the bottom reserved for the caption ribbon. The vertical space is
//! split into a major row and a minor row at a 2:1 proportion:
//!
//! ```text
//! ┌────────┐ ┌────────┐ ┌────────┐
//! │        │ │ major  │ │ minor  │
//! │  full  │ ├────────┤ ├────────┤
//! │        │ │ minor  │ │ major  │
//! └────────┘ └────────┘ └────────┘
//!          (caption ribbon)
//! ```
//!
//! Column 3 reverses column 2's proportions on purpose — the staggered
//! heights are what make the grid read as a masonry rather than a table.
//! The pattern itself is configuration data ([`LayoutConfig::pattern`]),
//! so alternate arrangements are a config change, not a code change.

use serde::{Deserialize, Serialize};

/// One fixed rectangular placement region on the canvas.
///
/// Offsets are from the canvas's north-west corner, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Height class of one cell in a masonry column.
///
/// `major`/`minor` are the two proportioned rows; `full` spans both rows
/// plus the gap between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    Full,
    Major,
    Minor,
}

/// Layout constants. Loaded from `[layout]` in `collage.toml`; the defaults
/// reproduce the stock five-slot masonry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Output canvas as `[width, height]` in pixels.
    pub canvas: [u32; 2],
    /// Height reserved along the bottom edge for the caption ribbon.
    pub caption_reserve: u32,
    /// Uniform outer margin around the grid.
    pub margin: u32,
    /// Uniform gap, both between columns and between stacked rows.
    pub gap: u32,
    /// Row proportion as `[major, minor]` parts, e.g. `[2, 1]`.
    pub row_split: [u32; 2],
    /// Masonry pattern: one inner list of cells per column, top to bottom.
    pub pattern: Vec<Vec<CellKind>>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas: [1600, 900],
            caption_reserve: 120,
            margin: 50,
            gap: 40,
            row_split: [2, 1],
            pattern: vec![
                vec![CellKind::Full],
                vec![CellKind::Major, CellKind::Minor],
                vec![CellKind::Minor, CellKind::Major],
            ],
        }
    }
}

impl LayoutConfig {
    /// Number of slots this layout produces — the exact photo count the
    /// builder requires.
    pub fn slot_count(&self) -> usize {
        self.pattern.iter().map(Vec::len).sum()
    }
}

/// Compute the slot rectangles for a layout, in enumeration order:
/// columns left to right, cells top to bottom within a column.
///
/// The arithmetic:
/// 1. usable height = canvas height − caption reserve
/// 2. column width = floor((canvas width − 2·margin − (cols−1)·gap) / cols),
///    shared by all columns
/// 3. available height = usable height − 2·margin − gap; the major row gets
///    floor(available · major/(major+minor)) and the minor row absorbs the
///    remainder, so the two rows always sum exactly to the available height
/// 4. a `full` cell spans major + gap + minor
/// 5. offsets accumulate margin, prior widths/heights, and gaps
pub fn compute_slots(layout: &LayoutConfig) -> Vec<Slot> {
    let [canvas_w, canvas_h] = layout.canvas;
    let cols = layout.pattern.len() as u32;
    let usable_h = canvas_h - layout.caption_reserve;

    let available_w = canvas_w - 2 * layout.margin - (cols - 1) * layout.gap;
    let col_width = available_w / cols;

    let available_h = usable_h - 2 * layout.margin - layout.gap;
    let [major_parts, minor_parts] = layout.row_split;
    let major_h = available_h * major_parts / (major_parts + minor_parts);
    // Minor row absorbs the rounding remainder.
    let minor_h = available_h - major_h;
    let full_h = major_h + layout.gap + minor_h;

    let mut slots = Vec::with_capacity(layout.slot_count());
    for (col, cells) in layout.pattern.iter().enumerate() {
        let x = layout.margin + col as u32 * (col_width + layout.gap);
        let mut y = layout.margin;
        for cell in cells {
            let height = match cell {
                CellKind::Full => full_h,
                CellKind::Major => major_h,
                CellKind::Minor => minor_h,
            };
            slots.push(Slot {
                x,
                y,
                width: col_width,
                height,
            });
            y += height + layout.gap;
        }
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stock() -> Vec<Slot> {
        compute_slots(&LayoutConfig::default())
    }

    // =========================================================================
    // Stock geometry
    // =========================================================================

    #[test]
    fn stock_layout_has_five_slots() {
        assert_eq!(LayoutConfig::default().slot_count(), 5);
        assert_eq!(stock().len(), 5);
    }

    #[test]
    fn stock_slot_rectangles() {
        // canvas 1600×900, reserve 120 → usable 780
        // width: (1600 − 100 − 80) / 3 = 473
        // height: 780 − 100 − 40 = 640 → major 426, minor 214
        let slots = stock();
        assert_eq!(
            slots,
            vec![
                Slot { x: 50, y: 50, width: 473, height: 680 },
                Slot { x: 563, y: 50, width: 473, height: 426 },
                Slot { x: 563, y: 516, width: 473, height: 214 },
                Slot { x: 1076, y: 50, width: 473, height: 214 },
                Slot { x: 1076, y: 304, width: 473, height: 426 },
            ]
        );
    }

    #[test]
    fn columns_share_one_width() {
        let slots = stock();
        assert!(slots.iter().all(|s| s.width == slots[0].width));
    }

    #[test]
    fn full_column_spans_rows_plus_gap() {
        // major + gap + minor == usable height − 2·margin
        let layout = LayoutConfig::default();
        let slots = compute_slots(&layout);
        let usable = layout.canvas[1] - layout.caption_reserve;
        assert_eq!(slots[0].height, usable - 2 * layout.margin);
        assert_eq!(slots[0].height, slots[1].height + layout.gap + slots[2].height);
    }

    #[test]
    fn reversed_columns_sum_identically() {
        // col2 is major/minor, col3 is minor/major; both sum to the
        // available height even though individually reversed
        let slots = stock();
        assert_eq!(
            slots[1].height + slots[2].height,
            slots[3].height + slots[4].height
        );
        assert_eq!(slots[1].height, slots[4].height);
        assert_eq!(slots[2].height, slots[3].height);
    }

    #[test]
    fn minor_row_absorbs_rounding_remainder() {
        // available height 641 is not divisible by 3: major = floor(641·2/3)
        // = 427, minor = 214, sum exact
        let layout = LayoutConfig {
            canvas: [1600, 901],
            ..LayoutConfig::default()
        };
        let slots = compute_slots(&layout);
        assert_eq!(slots[1].height, 427);
        assert_eq!(slots[2].height, 214);
        assert_eq!(slots[1].height + slots[2].height, 641);
    }

    #[test]
    fn x_offsets_accumulate_widths_and_gaps() {
        let layout = LayoutConfig::default();
        let slots = compute_slots(&layout);
        assert_eq!(slots[0].x, layout.margin);
        assert_eq!(slots[1].x, layout.margin + slots[0].width + layout.gap);
        assert_eq!(slots[3].x, slots[1].x + slots[1].width + layout.gap);
        // Cells in the same column share an x
        assert_eq!(slots[1].x, slots[2].x);
        assert_eq!(slots[3].x, slots[4].x);
    }

    #[test]
    fn bottom_cells_sit_below_top_cells() {
        let layout = LayoutConfig::default();
        let slots = compute_slots(&layout);
        assert_eq!(slots[2].y, layout.margin + slots[1].height + layout.gap);
        assert_eq!(slots[4].y, layout.margin + slots[3].height + layout.gap);
    }

    #[test]
    fn grid_stays_clear_of_caption_reserve() {
        let layout = LayoutConfig::default();
        let usable = layout.canvas[1] - layout.caption_reserve;
        for slot in compute_slots(&layout) {
            assert!(slot.y + slot.height <= usable - layout.margin);
        }
    }

    // =========================================================================
    // Pattern as data
    // =========================================================================

    #[test]
    fn alternate_pattern_changes_slot_count() {
        let layout = LayoutConfig {
            pattern: vec![
                vec![CellKind::Major, CellKind::Minor],
                vec![CellKind::Minor, CellKind::Major],
            ],
            ..LayoutConfig::default()
        };
        assert_eq!(layout.slot_count(), 4);
        assert_eq!(compute_slots(&layout).len(), 4);
    }

    #[test]
    fn pattern_parses_from_lowercase_toml() {
        let toml = r#"
canvas = [1600, 900]
pattern = [["full"], ["major", "minor"], ["minor", "major"]]
"#;
        let layout: LayoutConfig = toml::from_str(toml).unwrap();
        assert_eq!(layout.pattern[0], vec![CellKind::Full]);
        assert_eq!(layout.pattern[2], vec![CellKind::Minor, CellKind::Major]);
        // Unspecified fields keep their defaults
        assert_eq!(layout.margin, 50);
    }
}
