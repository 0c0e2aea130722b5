//! Scripted paddle driver for demo/attract mode
//!
//! Drives the paddle through the same `auto_move` path a human input takes:
//! tracks the ball while it is falling, otherwise wanders between seeded
//! random targets. Deterministic for a given seed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::bounds::BoundaryRange;

/// Non-human paddle driver
pub struct DemoDriver {
    rng: Pcg32,
    target_x: f32,
    until_retarget: f32,
}

impl DemoDriver {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            target_x: 0.0,
            until_retarget: 0.0,
        }
    }

    /// Pick this frame's `auto_move` target
    ///
    /// `ball_x` is the ball's horizontal position when it is worth chasing
    /// (falling toward the paddle); clamping into the travel range is the
    /// controller's job.
    pub fn tick(&mut self, dt: f32, bounds: BoundaryRange, ball_x: Option<f32>) -> f32 {
        if let Some(x) = ball_x {
            return x;
        }

        self.until_retarget -= dt;
        if self.until_retarget <= 0.0 {
            self.until_retarget = self.rng.random_range(0.4..1.2);
            self.target_x = if bounds.span() > 0.0 {
                self.rng.random_range(bounds.min_x..bounds.max_x)
            } else {
                bounds.min_x
            };
        }
        self.target_x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> BoundaryRange {
        BoundaryRange {
            min_x: -7.0,
            max_x: 7.0,
        }
    }

    #[test]
    fn test_same_seed_same_targets() {
        let mut a = DemoDriver::new(7);
        let mut b = DemoDriver::new(7);
        for _ in 0..200 {
            assert_eq!(a.tick(0.1, bounds(), None), b.tick(0.1, bounds(), None));
        }
    }

    #[test]
    fn test_wander_targets_stay_in_bounds() {
        let mut driver = DemoDriver::new(99);
        for _ in 0..500 {
            let target = driver.tick(0.1, bounds(), None);
            assert!(target >= bounds().min_x && target <= bounds().max_x);
        }
    }

    #[test]
    fn test_tracks_falling_ball() {
        let mut driver = DemoDriver::new(1);
        assert_eq!(driver.tick(0.1, bounds(), Some(3.25)), 3.25);
    }
}
