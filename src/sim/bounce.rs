//! Ball deflection off the paddle face
//!
//! Angle-based response: the contact offset from the paddle center steers the
//! outgoing direction, and the result is always within the maximum bounce
//! angle of vertical. Stateless; operates on snapshots passed by value.

use glam::Vec2;

use super::state::{ContactEvent, PaddleGeometry};
use crate::{dir_from_up, signed_angle_from_up};

/// Compute the ball's outgoing velocity for a paddle contact
///
/// The offset is normalized by the paddle half-width and deliberately not
/// clamped to [-1, 1]: a fast ball can report a contact point past the
/// paddle's nominal edge, and the extra deflection is kept. The final angle
/// clamp alone bounds the result, so the ball can never leave on a
/// near-horizontal trajectory.
///
/// Speed is preserved exactly; only direction changes. A zero-speed contact
/// has no direction to preserve and returns `None`.
pub fn respond(
    contact: ContactEvent,
    paddle: &PaddleGeometry,
    max_bounce_angle: f32,
) -> Option<Vec2> {
    let speed = contact.velocity.length();
    if speed <= f32::EPSILON {
        log::debug!("ignoring zero-speed paddle contact at x={}", contact.contact_x);
        return None;
    }

    let offset = contact.contact_x - paddle.center_x;
    let normalized = offset / paddle.half_width;

    let current_angle = signed_angle_from_up(contact.velocity);
    let bounce_angle = normalized * max_bounce_angle;
    let new_angle = (current_angle + bounce_angle).clamp(-max_bounce_angle, max_bounce_angle);

    Some(dir_from_up(new_angle) * speed)
}
