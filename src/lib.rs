//! Circle Game - an orbit-hopping arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (orbits, characters, collisions, game loop)
//! - `input`: Raw input events and their translation into per-tick input
//! - `ui`: Declarative on-screen buttons
//! - `renderer`: Renderer-neutral draw lists and vertex tessellation
//! - `platform`: Frame pacing and event sources
//! - `settings`: Data-driven tunables

pub mod input;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Simulation rate (ticks per second)
    pub const TICK_RATE_HZ: u32 = 10;

    /// Default viewport
    pub const VIEWPORT_WIDTH: u32 = 800;
    pub const VIEWPORT_HEIGHT: u32 = 600;

    /// Pixels between neighbouring orbits
    pub const ORBIT_SPACING: u32 = 50;

    /// Degrees a moving character advances per tick
    pub const ANGLE_STEP: i32 = 5;
    /// Maximum angular distance (degrees) at which two characters on the same
    /// orbit touch. Equal to one step so a head-on pair closing at two steps
    /// per tick cannot pass through each other.
    pub const COLLISION_TOLERANCE: u16 = 5;

    /// Character dot radius in pixels
    pub const DOT_RADIUS: f32 = 10.0;
    /// Orbit guide line thickness in pixels
    pub const ORBIT_LINE_WIDTH: f32 = 1.0;

    /// HUD text size in pixels
    pub const TEXT_SIZE: f32 = 30.0;

    pub const FULL_TURN: i32 = 360;
}

/// Normalize a degree angle into [0, 360)
#[inline]
pub fn normalize_degrees(angle: i32) -> u16 {
    angle.rem_euclid(consts::FULL_TURN) as u16
}

/// Shortest angular distance between two normalized degree angles, in [0, 180]
#[inline]
pub fn angular_distance(a: u16, b: u16) -> u16 {
    let diff = (i32::from(a) - i32::from(b)).rem_euclid(consts::FULL_TURN);
    diff.min(consts::FULL_TURN - diff) as u16
}

/// Convert polar (r, degrees) to cartesian (x, y) relative to the origin
#[inline]
pub fn polar_to_cartesian(r: f32, degrees: f32) -> Vec2 {
    let theta = degrees.to_radians();
    Vec2::new(r * theta.cos(), r * theta.sin())
}
