//! Wall field generation and recycling
//!
//! Walls alternate between a left band and a right band, each segment offset
//! vertically by half the configured spacing from the previous one, producing
//! a zig-zag climbable shaft. The field is an oldest-first ring: new pairs are
//! pushed on the back as the player climbs, bottom-most segments are popped
//! off the front once the retention cap is hit.

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::state::Viewport;
use crate::tuning::Tuning;

/// A static rectangular obstacle the player can collide with or jump off of.
/// Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallSegment {
    pub pos: Vec2,
    pub size: Vec2,
}

impl WallSegment {
    pub fn bounds(&self) -> Rect {
        Rect::from_parts(self.pos, self.size)
    }
}

/// Ordered collection of wall segments, oldest (bottom-most) first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WallField {
    segments: VecDeque<WallSegment>,
}

impl WallField {
    /// Produce the initial field: `wall_pair_count` left/right pairs starting
    /// at the canvas bottom and climbing upward by one spacing per pair.
    pub fn generate(tuning: &Tuning, view: Viewport) -> Self {
        let mut field = Self {
            segments: VecDeque::new(),
        };
        for i in 0..tuning.wall_pair_count {
            let left_y = view.h - i as f32 * tuning.wall_spacing;
            field.push_pair(tuning, view.w, left_y);
        }
        field
    }

    fn push_pair(&mut self, tuning: &Tuning, view_w: f32, left_y: f32) {
        let size = Vec2::new(tuning.wall_width, tuning.wall_height);
        self.segments.push_back(WallSegment {
            pos: Vec2::new(view_w * tuning.left_band, left_y),
            size,
        });
        self.segments.push_back(WallSegment {
            pos: Vec2::new(
                view_w * tuning.right_band - tuning.wall_width,
                left_y - tuning.wall_spacing / 2.0,
            ),
            size,
        });
    }

    /// y of the most recently generated (topmost) segment.
    pub fn newest_y(&self) -> Option<f32> {
        self.segments.back().map(|w| w.pos.y)
    }

    /// Append one new left/right pair above the current topmost segment,
    /// keeping consecutive same-side segments exactly one spacing apart.
    pub fn extend(&mut self, tuning: &Tuning, view_w: f32) {
        let Some(top_y) = self.newest_y() else { return };
        self.push_pair(tuning, view_w, top_y - tuning.wall_spacing / 2.0);
    }

    /// Drop the oldest segments until the field fits the retention cap.
    pub fn prune(&mut self, cap: usize) {
        while self.segments.len() > cap {
            self.segments.pop_front();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &WallSegment> {
        self.segments.iter()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
