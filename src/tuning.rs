//! Data-driven paddle balance
//!
//! Tuning values ship as JSON and are validated before they reach the sim.
//! Defaults match the shipped game balance.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts;

/// Paddle balance values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleTuning {
    /// Full paddle width in world units
    pub paddle_width: f32,
    /// Resting height above the bottom screen edge
    pub vertical_offset: f32,
    /// Gap kept between the paddle edge and the screen edge
    pub horizontal_edge_offset: f32,
    /// Hardest deflection off the paddle face (radians)
    pub max_bounce_angle: f32,
}

impl Default for PaddleTuning {
    fn default() -> Self {
        Self {
            paddle_width: consts::PADDLE_WIDTH,
            vertical_offset: consts::VERTICAL_OFFSET,
            horizontal_edge_offset: consts::HORIZONTAL_EDGE_OFFSET,
            max_bounce_angle: consts::MAX_BOUNCE_ANGLE,
        }
    }
}

/// Rejected tuning values
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("paddle width must be positive and finite, got {0}")]
    InvalidWidth(f32),
    #[error("max bounce angle must be in (0, 90°), got {0} rad")]
    InvalidBounceAngle(f32),
    #[error("vertical offset must be finite, got {0}")]
    InvalidVerticalOffset(f32),
    #[error("horizontal edge offset must be non-negative and finite, got {0}")]
    InvalidEdgeOffset(f32),
    #[error("invalid tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl PaddleTuning {
    /// Half of the configured paddle width
    #[inline]
    pub fn half_width(&self) -> f32 {
        self.paddle_width / 2.0
    }

    /// Check every value before it reaches the sim
    pub fn validate(&self) -> Result<(), TuningError> {
        if !(self.paddle_width > 0.0 && self.paddle_width.is_finite()) {
            return Err(TuningError::InvalidWidth(self.paddle_width));
        }
        // A max angle at or past 90° would allow horizontal, unwinnable
        // trajectories
        if !(self.max_bounce_angle > 0.0 && self.max_bounce_angle < std::f32::consts::FRAC_PI_2) {
            return Err(TuningError::InvalidBounceAngle(self.max_bounce_angle));
        }
        if !self.vertical_offset.is_finite() {
            return Err(TuningError::InvalidVerticalOffset(self.vertical_offset));
        }
        if !(self.horizontal_edge_offset >= 0.0 && self.horizontal_edge_offset.is_finite()) {
            return Err(TuningError::InvalidEdgeOffset(self.horizontal_edge_offset));
        }
        Ok(())
    }

    /// Parse and validate tuning from JSON; absent fields keep defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(PaddleTuning::default().validate().is_ok());
    }

    #[test]
    fn test_from_json_partial_keeps_defaults() {
        let tuning = PaddleTuning::from_json(r#"{"paddle_width": 3.0}"#).unwrap();
        assert!((tuning.paddle_width - 3.0).abs() < 1e-6);
        assert!((tuning.horizontal_edge_offset - consts::HORIZONTAL_EDGE_OFFSET).abs() < 1e-6);
    }

    #[test]
    fn test_rejects_non_positive_width() {
        let tuning = PaddleTuning {
            paddle_width: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::InvalidWidth(_))
        ));
    }

    #[test]
    fn test_rejects_horizontal_bounce_angle() {
        let tuning = PaddleTuning {
            max_bounce_angle: std::f32::consts::FRAC_PI_2,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::InvalidBounceAngle(_))
        ));
    }

    #[test]
    fn test_rejects_negative_edge_offset() {
        let json = r#"{"horizontal_edge_offset": -0.5}"#;
        assert!(matches!(
            PaddleTuning::from_json(json),
            Err(TuningError::InvalidEdgeOffset(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let tuning = PaddleTuning::default();
        let json = serde_json::to_string(&tuning).unwrap();
        assert_eq!(PaddleTuning::from_json(&json).unwrap(), tuning);
    }
}
