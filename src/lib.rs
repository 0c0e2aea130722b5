//! Paddle core for a brick-breaking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic paddle simulation (boundaries, bounce response, timed effects)
//! - `tuning`: Data-driven paddle balance
//! - `demo`: Scripted driver for headless/demo runs

pub mod demo;
pub mod sim;
pub mod tuning;

pub use tuning::{PaddleTuning, TuningError};

use glam::Vec2;

/// Paddle configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth physics)
    pub const SIM_DT: f32 = 1.0 / 120.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 2.0;
    /// Resting height above the bottom screen edge
    pub const VERTICAL_OFFSET: f32 = 0.5;
    /// Gap kept between the paddle edge and the screen edge
    pub const HORIZONTAL_EDGE_OFFSET: f32 = 0.1;
    /// Hardest deflection off the paddle face (radians, ~75 degrees)
    pub const MAX_BOUNCE_ANGLE: f32 = 1.308_997;

    /// Trigger collider overhang relative to the solid collider
    pub const TRIGGER_SKIN: f32 = 1.1;
    /// Neutral control value (paddle centered)
    pub const NEUTRAL_CONTROL: f32 = 0.5;
}

/// Linear interpolation from `a` to `b` by `t`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Where `v` sits between `a` and `b`, clamped to [0, 1]
#[inline]
pub fn inverse_lerp(a: f32, b: f32, v: f32) -> f32 {
    let span = b - a;
    if span.abs() <= f32::EPSILON {
        0.0
    } else {
        ((v - a) / span).clamp(0.0, 1.0)
    }
}

/// Signed angle from the up axis to `v` (radians, counterclockwise positive)
#[inline]
pub fn signed_angle_from_up(v: Vec2) -> f32 {
    (-v.x).atan2(v.y)
}

/// Unit vector `angle` radians counterclockwise from the up axis
#[inline]
pub fn dir_from_up(angle: f32) -> Vec2 {
    Vec2::new(-angle.sin(), angle.cos())
}
