//! Gap scanning
//!
//! When a new door is placed, the free spans of the panel are scanned and
//! the widest one wins. A gap exists before the first door, between
//! consecutive doors, and after the last door; zero-width spans are skipped.

use panel_model::Door;

/// A door-free span of the panel, in centimeters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gap {
    pub start: f32,
    pub end: f32,
}

impl Gap {
    pub fn width(&self) -> f32 {
        self.end - self.start
    }

    /// Position that centers a door of `door_width` within this gap
    pub fn centered_position(&self, door_width: f32) -> f32 {
        self.start + (self.width() - door_width) / 2.0
    }
}

/// Scan the free spans of a panel, left to right
pub fn scan_gaps(doors: &[Door], total_width: f32) -> Vec<Gap> {
    let mut sorted: Vec<&Door> = doors.iter().collect();
    sorted.sort_by(|a, b| a.position.total_cmp(&b.position));

    let mut gaps = Vec::with_capacity(sorted.len() + 1);
    let mut cursor = 0.0_f32;

    for door in sorted {
        if door.position > cursor {
            gaps.push(Gap {
                start: cursor,
                end: door.position,
            });
        }
        cursor = cursor.max(door.end());
    }

    if cursor < total_width {
        gaps.push(Gap {
            start: cursor,
            end: total_width,
        });
    }

    gaps
}

/// The widest free span, if any. Ties keep the leftmost gap.
pub fn largest_gap(doors: &[Door], total_width: f32) -> Option<Gap> {
    scan_gaps(doors, total_width)
        .into_iter()
        .fold(None, |best: Option<Gap>, gap| match best {
            Some(b) if b.width() >= gap.width() => Some(b),
            _ => Some(gap),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use panel_model::Door;

    #[test]
    fn test_no_doors_one_gap() {
        let gaps = scan_gaps(&[], 800.0);
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].start, 0.0);
        assert_eq!(gaps[0].end, 800.0);
    }

    #[test]
    fn test_gaps_around_two_doors() {
        let doors = vec![
            Door::new(100.0, 100.0, 190.0),
            Door::new(500.0, 100.0, 190.0),
        ];
        let gaps = scan_gaps(&doors, 800.0);
        assert_eq!(gaps.len(), 3);
        assert_eq!((gaps[0].start, gaps[0].end), (0.0, 100.0));
        assert_eq!((gaps[1].start, gaps[1].end), (200.0, 500.0));
        assert_eq!((gaps[2].start, gaps[2].end), (600.0, 800.0));
    }

    #[test]
    fn test_door_at_edge_emits_no_zero_gap() {
        let doors = vec![Door::new(0.0, 100.0, 190.0)];
        let gaps = scan_gaps(&doors, 800.0);
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].start, 100.0);
    }

    #[test]
    fn test_largest_gap() {
        let doors = vec![
            Door::new(100.0, 100.0, 190.0),
            Door::new(500.0, 100.0, 190.0),
        ];
        let gap = largest_gap(&doors, 800.0).unwrap();
        assert_eq!((gap.start, gap.end), (200.0, 500.0));
    }

    #[test]
    fn test_largest_gap_tie_keeps_leftmost() {
        let doors = vec![Door::new(300.0, 200.0, 190.0)];
        let gap = largest_gap(&doors, 800.0).unwrap();
        assert_eq!((gap.start, gap.end), (0.0, 300.0));
    }

    #[test]
    fn test_centered_position() {
        let gap = Gap {
            start: 200.0,
            end: 500.0,
        };
        assert_eq!(gap.centered_position(100.0), 300.0);
    }

    #[test]
    fn test_fully_occupied_panel_has_no_gaps() {
        let doors = vec![Door::new(0.0, 800.0, 190.0)];
        assert!(scan_gaps(&doors, 800.0).is_empty());
        assert!(largest_gap(&doors, 800.0).is_none());
    }
}
