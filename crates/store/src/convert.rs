//! Record ↔ model conversion
//!
//! Loading walks the flat section list left to right, reconstructing doors
//! at the accumulated cursor and summing the panel width. Emitting derives
//! the segment list from the geometry and writes one section per segment.
//! Loads are tolerant: degenerate sections are skipped and missing door
//! heights fall back to the default, each with a logged warning, so a bad
//! record degrades instead of failing.

use crate::{PanelRecord, SectionRecord};
use layout_engine::compute_segments;
use panel_model::{
    cm_to_m, m_to_cm, Door, PanelSide, PhotoRef, SideState, DEFAULT_DOOR_HEIGHT,
    MIN_PANEL_WIDTH,
};

/// Reconstruct a side's state from a persisted record
pub fn side_from_record(record: &PanelRecord, side: PanelSide) -> SideState {
    let mut state = SideState::new(side);
    state.height = SideState::clamp_height(m_to_cm(record.height));

    let mut cursor = 0.0_f32;
    for section in &record.layout_sections {
        let width = m_to_cm(section.width);
        if width <= 0.0 {
            tracing::warn!(
                side = side.display_name(),
                position = section.position,
                "skipping section with non-positive width"
            );
            continue;
        }

        if section.is_door && side.supports_doors() {
            let door_height = match section.door_height {
                Some(h) => m_to_cm(h),
                None => {
                    tracing::warn!(
                        side = side.display_name(),
                        position = section.position,
                        "door section without height, using default"
                    );
                    DEFAULT_DOOR_HEIGHT
                }
            };
            let door_height = state.clamp_door_height(door_height);
            state.doors.push(Door::new(cursor, width, door_height));
        } else if section.is_door {
            tracing::warn!(
                side = side.display_name(),
                position = section.position,
                "door section on a doorless panel, treating as plain"
            );
        }

        cursor += width;
    }

    state.total_width = if cursor > 0.0 {
        cursor.max(MIN_PANEL_WIDTH)
    } else {
        side.default_width()
    };
    state.sort_doors();
    state
}

/// Derive a persistable record from a side's current state
pub fn record_from_side(state: &SideState, photo: Option<&PhotoRef>) -> PanelRecord {
    let segments = compute_segments(&state.doors, state.total_width);

    let layout_sections = segments
        .iter()
        .enumerate()
        .map(|(index, segment)| SectionRecord {
            width: cm_to_m(segment.width()),
            is_door: segment.is_door(),
            door_height: segment
                .door
                .as_ref()
                .map(|door| cm_to_m(door.door_height)),
            position: index as u32,
        })
        .collect();

    PanelRecord {
        height: cm_to_m(state.height),
        layout_sections,
        photo_id: photo.and_then(PhotoRef::photo_id).map(str::to_string),
        photo_uri: photo.and_then(PhotoRef::uri).map(str::to_string),
    }
}
