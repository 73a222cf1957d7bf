//! CLI output formatting.
//!
//! Output is information-centric: the primary display for a build is the
//! collage's semantic structure — slots with their geometry, segments with
//! their role — with the raw wire strings shown as secondary context. All
//! functions here return lines rather than printing, so they are unit
//! testable and the binary owns the actual `println!`.
//!
//! ```text
//! Slots (3 columns, 5 photos)
//! 001 473x680 at (50, 50)
//! 002 473x426 at (563, 50)
//! ...
//!
//! Segments
//! base        w_1600,h_900,c_fill
//! photo 001   l_a:b,w_473,...
//! ...
//! ```

use crate::builder::{CollagePlan, SegmentKind};
use crate::layout::Slot;

/// Header + one line per slot, 1-based, geometry first.
pub fn slot_lines(slots: &[Slot], columns: usize) -> Vec<String> {
    let mut lines = vec![format!(
        "Slots ({} columns, {} photos)",
        columns,
        slots.len()
    )];
    for (i, slot) in slots.iter().enumerate() {
        lines.push(format!(
            "{:03} {}x{} at ({}, {})",
            i + 1,
            slot.width,
            slot.height,
            slot.x,
            slot.y
        ));
    }
    lines
}

/// Segment inventory: role label, photo ordinal where applicable, wire
/// string as context.
pub fn segment_lines(plan: &CollagePlan) -> Vec<String> {
    let mut lines = vec!["Segments".to_string()];
    let mut photo = 0usize;
    for segment in &plan.segments {
        let label = match segment.kind {
            SegmentKind::Base => "base      ".to_string(),
            SegmentKind::Photo => {
                photo += 1;
                format!("photo {photo:03} ")
            }
            SegmentKind::Ribbon => "ribbon    ".to_string(),
            SegmentKind::Text => "text      ".to_string(),
            SegmentKind::Background => "background".to_string(),
        };
        lines.push(format!("{label}  {}", segment.value));
    }
    lines
}

/// Full build report: slots, segments, caption, final URL.
pub fn build_report(plan: &CollagePlan, columns: usize) -> Vec<String> {
    let mut lines = slot_lines(&plan.slots, columns);
    lines.push(String::new());
    lines.extend(segment_lines(plan));
    lines.push(String::new());
    lines.push(format!("Caption: {}", plan.caption));
    lines.push(format!("URL: {}", plan.url));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_plan;
    use crate::config::CollageConfig;
    use crate::layout::compute_slots;
    use crate::types::PhotoRef;

    fn plan() -> CollagePlan {
        let mut config = CollageConfig::default();
        config.service.cloud_name = "demo".to_string();
        let photos: Vec<PhotoRef> = ["a", "b", "c", "d", "e"]
            .iter()
            .map(|id| PhotoRef::new(*id, String::new()))
            .collect();
        build_plan(&config, &photos, "Smith", 2026).unwrap()
    }

    #[test]
    fn slot_lines_are_one_based_with_geometry() {
        let slots = compute_slots(&Default::default());
        let lines = slot_lines(&slots, 3);
        assert_eq!(lines[0], "Slots (3 columns, 5 photos)");
        assert_eq!(lines[1], "001 473x680 at (50, 50)");
        assert_eq!(lines[5], "005 473x426 at (1076, 304)");
    }

    #[test]
    fn segment_lines_number_photos_only() {
        let lines = segment_lines(&plan());
        assert_eq!(lines.len(), 10); // header + 9 segments
        assert!(lines[1].starts_with("base"));
        assert!(lines[2].starts_with("photo 001"));
        assert!(lines[6].starts_with("photo 005"));
        assert!(lines[7].starts_with("ribbon"));
        assert!(lines[9].starts_with("background"));
    }

    #[test]
    fn build_report_ends_with_url() {
        let p = plan();
        let lines = build_report(&p, 3);
        assert_eq!(lines.last().unwrap(), &format!("URL: {}", p.url));
        assert!(lines.contains(&"Caption: Smith – Holiday 2026".to_string()));
    }
}
