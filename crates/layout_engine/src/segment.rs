//! Segment computation
//!
//! A panel is displayed and persisted as an ordered list of segments:
//! plain sections alternating with door openings, together tiling the span
//! `[0, total_width]`. Segments are derived on every read; they are never
//! stored. Arithmetic stays at full precision, rounding happens only when a
//! width is read for display.

use panel_model::Door;
use serde::{Deserialize, Serialize};

/// What a segment represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentKind {
    /// Plain panel section
    Plain,
    /// Door opening
    Door,
}

/// A contiguous span of the panel, in centimeters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub kind: SegmentKind,
    /// Offset of the segment's left edge from the panel's left edge
    pub start: f32,
    /// Offset of the segment's right edge
    pub end: f32,
    /// The originating door, when `kind` is [`SegmentKind::Door`]
    pub door: Option<Door>,
}

impl Segment {
    fn plain(start: f32, end: f32) -> Self {
        Self {
            kind: SegmentKind::Plain,
            start,
            end,
            door: None,
        }
    }

    fn for_door(door: &Door) -> Self {
        Self {
            kind: SegmentKind::Door,
            start: door.position,
            end: door.end(),
            door: Some(door.clone()),
        }
    }

    /// Exact width
    pub fn width(&self) -> f32 {
        self.end - self.start
    }

    /// Width rounded to the nearest integer centimeter, for display
    pub fn rounded_width(&self) -> f32 {
        self.width().round()
    }

    /// Whether this segment is a door opening
    pub fn is_door(&self) -> bool {
        self.kind == SegmentKind::Door
    }
}

/// Derive the segment list for a panel.
///
/// With no doors the whole panel is a single plain segment. Otherwise doors
/// are visited left to right and the spans between them become plain
/// segments. The door list is assumed non-overlapping; overlap prevention is
/// the responsibility of the mutation layer, not re-validated here.
pub fn compute_segments(doors: &[Door], total_width: f32) -> Vec<Segment> {
    if doors.is_empty() {
        return vec![Segment::plain(0.0, total_width)];
    }

    let mut sorted: Vec<&Door> = doors.iter().collect();
    sorted.sort_by(|a, b| a.position.total_cmp(&b.position));

    let mut segments = Vec::with_capacity(sorted.len() * 2 + 1);
    let mut cursor = 0.0_f32;

    for door in sorted {
        if door.position > cursor {
            segments.push(Segment::plain(cursor, door.position));
        }
        segments.push(Segment::for_door(door));
        cursor = door.end();
    }

    if cursor < total_width {
        segments.push(Segment::plain(cursor, total_width));
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use panel_model::Door;

    #[test]
    fn test_empty_doors_single_segment() {
        let segments = compute_segments(&[], 800.0);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].kind, SegmentKind::Plain);
        assert_eq!(segments[0].start, 0.0);
        assert_eq!(segments[0].end, 800.0);
        assert_eq!(segments[0].width(), 800.0);
    }

    #[test]
    fn test_single_door_three_segments() {
        let doors = vec![Door::new(350.0, 100.0, 190.0)];
        let segments = compute_segments(&doors, 800.0);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].kind, SegmentKind::Plain);
        assert_eq!(segments[1].kind, SegmentKind::Door);
        assert_eq!(segments[2].kind, SegmentKind::Plain);
        assert_eq!(segments[1].start, 350.0);
        assert_eq!(segments[1].end, 450.0);
        assert_eq!(segments[2].end, 800.0);
    }

    #[test]
    fn test_door_flush_with_left_edge() {
        let doors = vec![Door::new(0.0, 120.0, 190.0)];
        let segments = compute_segments(&doors, 500.0);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].kind, SegmentKind::Door);
        assert_eq!(segments[1].kind, SegmentKind::Plain);
    }

    #[test]
    fn test_door_flush_with_right_edge() {
        let doors = vec![Door::new(400.0, 100.0, 190.0)];
        let segments = compute_segments(&doors, 500.0);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[1].kind, SegmentKind::Door);
        assert_eq!(segments[1].end, 500.0);
    }

    #[test]
    fn test_unsorted_doors_are_walked_in_position_order() {
        let doors = vec![
            Door::new(500.0, 100.0, 190.0),
            Door::new(100.0, 100.0, 190.0),
        ];
        let segments = compute_segments(&doors, 800.0);
        assert_eq!(segments.len(), 5);
        assert_eq!(segments[1].start, 100.0);
        assert_eq!(segments[3].start, 500.0);
    }

    #[test]
    fn test_segments_tile_the_panel() {
        let doors = vec![
            Door::new(80.0, 90.0, 190.0),
            Door::new(300.0, 110.0, 180.0),
            Door::new(620.0, 100.0, 190.0),
        ];
        let segments = compute_segments(&doors, 800.0);

        assert_eq!(segments[0].start, 0.0);
        assert_eq!(segments.last().unwrap().end, 800.0);
        for pair in segments.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        let sum: f32 = segments.iter().map(Segment::width).sum();
        assert!((sum - 800.0).abs() < 1e-3);
    }

    #[test]
    fn test_fractional_widths_round_for_display() {
        let doors = vec![Door::new(100.4, 99.8, 190.0)];
        let segments = compute_segments(&doors, 800.0);
        assert_eq!(segments[0].rounded_width(), 100.0);
        assert_eq!(segments[1].rounded_width(), 100.0);
        // exact arithmetic is preserved underneath
        assert!((segments[1].width() - 99.8).abs() < 1e-4);
    }
}
