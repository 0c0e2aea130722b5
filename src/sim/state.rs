//! Shared paddle data model
//!
//! Plain snapshot types passed between the paddle, the collision subsystem,
//! and the ball. Geometry is owned by the paddle controller; everything here
//! is data, not behavior.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::TRIGGER_SKIN;

/// Live paddle geometry
///
/// `center_x` is mutated only by the motion controller, `half_width` only by
/// the expansion effect, `vertical_y` only from boundary output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleGeometry {
    /// Horizontal center position
    pub center_x: f32,
    /// Half of the current paddle width
    pub half_width: f32,
    /// Resting height near the bottom edge
    pub vertical_y: f32,
}

impl PaddleGeometry {
    pub fn new(half_width: f32) -> Self {
        Self {
            center_x: 0.0,
            half_width,
            vertical_y: 0.0,
        }
    }

    /// Full paddle width
    #[inline]
    pub fn width(&self) -> f32 {
        self.half_width * 2.0
    }

    /// Collider sizes derived from the current width
    #[inline]
    pub fn colliders(&self) -> ColliderSizes {
        ColliderSizes::from_width(self.width())
    }
}

/// Horizontal sizes of the paddle's colliders, published for the collision
/// subsystem. The trigger collider (power-up catch area) overhangs the solid
/// one slightly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColliderSizes {
    /// Solid collider width (ball bounces here)
    pub solid: f32,
    /// Trigger collider width (power-ups caught here)
    pub trigger: f32,
}

impl ColliderSizes {
    #[inline]
    pub fn from_width(width: f32) -> Self {
        Self {
            solid: width,
            trigger: width * TRIGGER_SKIN,
        }
    }
}

/// Paddle-ball contact, as reported by the collision subsystem
///
/// Consumed once by the bounce responder. The paddle's own center comes from
/// the [`PaddleGeometry`] snapshot, not from the event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContactEvent {
    /// Horizontal position of the contact point
    pub contact_x: f32,
    /// Ball velocity at the moment of contact
    pub velocity: Vec2,
}

/// Size power-up payload: scale the paddle by `factor` for `duration` seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectDescriptor {
    /// Target width factor relative to the base width
    pub factor: f32,
    /// Seconds until the effect reverts
    pub duration: f32,
}

/// Events the collision subsystem delivers to the paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PaddleEvent {
    /// Solid ball contact on the paddle face
    Solid(ContactEvent),
    /// A power-up touched the trigger collider
    PowerUp(EffectDescriptor),
}

/// Signals the paddle emits for its collaborators, drained per tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PaddleSignal {
    /// First control input since construction or reset: start the ball's
    /// launch sequence. Fired exactly once per round.
    LaunchRequested,
    /// New ball velocity computed from a solid contact
    Deflected(Vec2),
}
