//! Catch and miss detection
//!
//! Bodies and the collector share one z plane, so every test here is 2D in x/y.
//! Bodies never collide with each other.

use glam::Vec3;

use super::state::{Collector, FallingBody};

/// Outcome for a body this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Inside the collector's hitbox
    Catch,
    /// Left the play area without being caught
    Miss,
}

/// Play area limits for misses
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    /// Bodies at or below this y are gone
    pub lower: f32,
    /// Bodies with |x| at or beyond this are gone
    pub horizontal: f32,
}

/// Closed axis-aligned box test against the collector's hitbox (z ignored)
#[inline]
pub fn overlaps(pos: Vec3, collector: &Collector) -> bool {
    let diff = pos.truncate() - collector.pos.truncate();
    diff.x.abs() <= collector.hitbox.x && diff.y.abs() <= collector.hitbox.y
}

#[inline]
pub fn out_of_bounds(pos: Vec3, bounds: &Bounds) -> bool {
    pos.y <= bounds.lower || pos.x.abs() >= bounds.horizontal
}

/// Classify an Active body; a catch wins over a miss in the same tick
pub fn detect(body: &FallingBody, collector: &Collector, bounds: &Bounds) -> Option<Contact> {
    if !body.is_active() {
        return None;
    }
    if overlaps(body.pos, collector) {
        Some(Contact::Catch)
    } else if out_of_bounds(body.pos, bounds) {
        Some(Contact::Miss)
    } else {
        None
    }
}
