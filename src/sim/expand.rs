//! Temporary paddle expansion
//!
//! Single-slot timed state machine: a power-up scales the paddle width now
//! and schedules one revert for later. Re-triggering cancels the pending
//! revert and resolves the new factor relative to the current size, so
//! rapid pickups never compound the scale or leak a second timer.

use serde::{Deserialize, Serialize};

use super::scheduler::{TickScheduler, TimerHandle};
use super::state::{EffectDescriptor, PaddleGeometry};

/// Scheduler payload for delayed effect work
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectExpiry {
    RevertExpansion,
}

/// Width-scaling effect, at most one revert pending at any time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpansionEffect {
    /// Half-width to restore when the effect ends
    base_half_width: f32,
    /// Scale currently applied, relative to the base width
    current_factor: f32,
    #[serde(skip)]
    pending: Option<TimerHandle>,
}

impl ExpansionEffect {
    pub fn new(base_half_width: f32) -> Self {
        Self {
            base_half_width,
            current_factor: 1.0,
            pending: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.pending.is_some()
    }

    pub fn current_factor(&self) -> f32 {
        self.current_factor
    }

    pub fn base_half_width(&self) -> f32 {
        self.base_half_width
    }

    /// Timer that will revert the effect, if one is pending
    pub fn pending_revert(&self) -> Option<TimerHandle> {
        self.pending
    }

    /// Apply a size effect now and schedule its revert
    ///
    /// Supersedes any in-flight effect: the earlier revert is cancelled
    /// before the new one is scheduled. The width change is applied to
    /// `geometry` before returning; the caller recomputes boundaries
    /// immediately after.
    pub fn trigger(
        &mut self,
        effect: EffectDescriptor,
        geometry: &mut PaddleGeometry,
        timers: &mut TickScheduler<EffectExpiry>,
    ) {
        if !(effect.factor > 0.0 && effect.factor.is_finite()) {
            log::warn!("ignoring expansion with factor {}", effect.factor);
            return;
        }

        if let Some(handle) = self.pending.take() {
            timers.cancel(handle);
        }

        // Resolve relative to the current size, not the base, so an active
        // effect is replaced instead of compounded
        let relative = effect.factor / self.current_factor;
        geometry.half_width *= relative;
        self.current_factor = effect.factor;

        self.pending = Some(timers.schedule_after(effect.duration, EffectExpiry::RevertExpansion));
        log::info!(
            "paddle expansion: factor {} for {}s",
            effect.factor,
            effect.duration
        );
    }

    /// Natural expiry: restore the base width and return to idle
    pub fn expire(&mut self, geometry: &mut PaddleGeometry) {
        geometry.half_width = self.base_half_width;
        self.current_factor = 1.0;
        self.pending = None;
        log::info!("paddle expansion reverted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rig() -> (ExpansionEffect, PaddleGeometry, TickScheduler<EffectExpiry>) {
        (
            ExpansionEffect::new(1.0),
            PaddleGeometry::new(1.0),
            TickScheduler::new(),
        )
    }

    #[test]
    fn test_trigger_scales_and_expiry_restores() {
        let (mut effect, mut geometry, mut timers) = rig();

        effect.trigger(
            EffectDescriptor {
                factor: 2.0,
                duration: 1.0,
            },
            &mut geometry,
            &mut timers,
        );
        assert!(effect.is_active());
        assert!((geometry.half_width - 2.0).abs() < 1e-6);

        assert!(timers.advance(0.5).is_empty());
        let fired = timers.advance(0.5);
        assert_eq!(fired, vec![EffectExpiry::RevertExpansion]);

        effect.expire(&mut geometry);
        assert!(!effect.is_active());
        assert!((geometry.half_width - 1.0).abs() < 1e-6);
        assert!((effect.current_factor() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_retrigger_replaces_instead_of_compounding() {
        let (mut effect, mut geometry, mut timers) = rig();

        effect.trigger(
            EffectDescriptor {
                factor: 2.0,
                duration: 1.0,
            },
            &mut geometry,
            &mut timers,
        );
        effect.trigger(
            EffectDescriptor {
                factor: 3.0,
                duration: 1.0,
            },
            &mut geometry,
            &mut timers,
        );

        // 3x the base, not 6x
        assert!((geometry.half_width - 3.0).abs() < 1e-6);
        assert!((effect.current_factor() - 3.0).abs() < 1e-6);
        // Exactly one revert pending
        assert_eq!(timers.len(), 1);
    }

    #[test]
    fn test_revert_scheduled_from_last_trigger() {
        let (mut effect, mut geometry, mut timers) = rig();

        effect.trigger(
            EffectDescriptor {
                factor: 2.0,
                duration: 1.0,
            },
            &mut geometry,
            &mut timers,
        );
        timers.advance(0.6);
        effect.trigger(
            EffectDescriptor {
                factor: 3.0,
                duration: 1.0,
            },
            &mut geometry,
            &mut timers,
        );

        // The superseded revert would have fired at t=1.0; the replacement
        // fires a full duration after the second trigger
        assert!(timers.advance(0.9).is_empty());
        assert_eq!(timers.advance(0.2), vec![EffectExpiry::RevertExpansion]);

        effect.expire(&mut geometry);
        assert!((geometry.half_width - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_non_positive_duration_reverts_next_tick() {
        let (mut effect, mut geometry, mut timers) = rig();

        effect.trigger(
            EffectDescriptor {
                factor: 2.0,
                duration: 0.0,
            },
            &mut geometry,
            &mut timers,
        );
        // Applied now, reverted on the next advance
        assert!((geometry.half_width - 2.0).abs() < 1e-6);
        assert_eq!(timers.advance(0.0), vec![EffectExpiry::RevertExpansion]);
    }

    #[test]
    fn test_bogus_factor_is_ignored() {
        let (mut effect, mut geometry, mut timers) = rig();

        effect.trigger(
            EffectDescriptor {
                factor: 0.0,
                duration: 1.0,
            },
            &mut geometry,
            &mut timers,
        );
        assert!(!effect.is_active());
        assert!((geometry.half_width - 1.0).abs() < 1e-6);
        assert!(timers.is_empty());
    }
}
