//! Lane-position table.
//!
//! A lane is a serial processing resource on the sortation loop; one
//! order occupies its lane for the full service interval. The layout
//! maps each lane to a fixed position on the loop's distance coordinate.
//!
//! Per-lane runtime state (`last_end`, `total_busy`) is *not* stored
//! here — the decoder keeps those as values local to one invocation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Physical layout of the sortation lanes.
///
/// Maps `lane_id → position` (scalar distance coordinate on the loop).
/// Unknown lanes resolve to position 0.0 rather than failing; a missing
/// table entry is a data gap, not a scheduling error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LaneLayout {
    positions: HashMap<u32, f64>,
}

impl LaneLayout {
    /// Creates an empty layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a lane at the given position.
    pub fn with_lane(mut self, lane: u32, position: f64) -> Self {
        self.positions.insert(lane, position);
        self
    }

    /// Builds a layout of `count` lanes spaced `spacing` apart,
    /// numbered from 1: lane `i` sits at `(i - 1) * spacing`.
    pub fn evenly_spaced(count: u32, spacing: f64) -> Self {
        let positions = (1..=count)
            .map(|i| (i, f64::from(i - 1) * spacing))
            .collect();
        Self { positions }
    }

    /// Position of a lane; 0.0 for lanes absent from the table.
    pub fn position(&self, lane: u32) -> f64 {
        self.positions.get(&lane).copied().unwrap_or(0.0)
    }

    /// Whether the lane appears in the table.
    pub fn contains(&self, lane: u32) -> bool {
        self.positions.contains_key(&lane)
    }

    /// Number of lanes in the table.
    pub fn lane_count(&self) -> usize {
        self.positions.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
