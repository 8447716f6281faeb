//! Core state types for the black-hole toy.
//!
//! Defines the runtime bodies:
//! - `Attractor` — the fixed central mass at the origin
//! - `Body`      — an orbiting particle with trail and fragmentation depth
//!
//! plus the read-only view structs handed to the renderer.

use nalgebra::Vector2;
use std::collections::VecDeque;

pub type NVec2 = Vector2<f64>;

/// Number of recent positions kept per particle for trail drawing.
pub const TRAIL_LEN: usize = 50;

/// The fixed central mass. Never moves, never removed.
#[derive(Debug, Clone)]
pub struct Attractor {
    pub x: NVec2, // position (m), pinned at the origin
    pub m: f64, // mass (kg)
    pub radius: f64, // visual radius (px)
    pub color: [u8; 3],
}

/// An orbiting particle.
#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position (m)
    pub v: NVec2, // velocity (m/s)
    pub m: f64, // mass (kg), always > 0
    pub radius: f64, // visual radius (px), not physically load-bearing
    pub color: [u8; 3],
    pub trail: VecDeque<NVec2>, // most recent positions, oldest first
    pub depth: u32, // fragmentation depth, bounded by max_fragment_depth
}

impl Body {
    /// Append the current position to the trail, dropping the oldest
    /// entry once the trail is full.
    pub fn record_trail(&mut self) {
        self.trail.push_back(self.x);
        if self.trail.len() > TRAIL_LEN {
            self.trail.pop_front();
        }
    }
}

// =========================================================================================
// Render view snapshot
// =========================================================================================

/// Read-only snapshot of the world for the renderer. Positions stay in
/// simulation units (m); the viewer applies its own screen mapping.
#[derive(Debug, Clone)]
pub struct RenderView {
    pub attractor: AttractorView,
    pub particles: Vec<ParticleView>,
}

#[derive(Debug, Clone)]
pub struct AttractorView {
    pub position: NVec2,
    pub radius: f64,
    pub color: [u8; 3],
}

#[derive(Debug, Clone)]
pub struct ParticleView {
    pub position: NVec2,
    pub radius: f64,
    pub color: [u8; 3],
    pub trail: Vec<NVec2>, // oldest first, ends at the current position
}
