//! Player paddle: control mapping, boundary upkeep, and event handling
//!
//! The controller owns the paddle geometry and is the only writer of its
//! center position. Collaborators are injected at build time: the control
//! device (UI slider equivalent), the viewport source, and tuning. All
//! mutation happens on the per-frame tick or on synchronous event entry
//! points; nothing here is shared across threads.

use thiserror::Error;

use super::bounce;
use super::bounds::{self, BoundaryRange, ViewportSource};
use super::expand::{EffectExpiry, ExpansionEffect};
use super::scheduler::TickScheduler;
use super::state::{ColliderSizes, PaddleEvent, PaddleGeometry, PaddleSignal};
use crate::consts::NEUTRAL_CONTROL;
use crate::tuning::{PaddleTuning, TuningError};
use crate::{inverse_lerp, lerp};

/// Normalized control input device (the UI slider)
///
/// `set_value` queues a change notification which the controller drains —
/// the device's value-changed callback, flattened into a poll. The silent
/// path updates the display only and can never re-enter the controller, so
/// boundary resyncs cannot loop or re-fire the launch latch.
pub trait ControlInput {
    /// Currently displayed value in [0, 1]
    fn value(&self) -> f32;
    /// Write a value and queue a change notification
    fn set_value(&mut self, value: f32);
    /// Update the displayed value without notifying
    fn set_value_silently(&mut self, value: f32);
    /// Drain the pending change notification, if any
    fn poll_change(&mut self) -> Option<f32>;
}

/// In-memory control device for headless runs and tests
#[derive(Debug, Clone)]
pub struct SliderState {
    value: f32,
    pending: Option<f32>,
}

impl SliderState {
    pub fn new() -> Self {
        Self {
            value: NEUTRAL_CONTROL,
            pending: None,
        }
    }
}

impl Default for SliderState {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlInput for SliderState {
    fn value(&self) -> f32 {
        self.value
    }

    fn set_value(&mut self, value: f32) {
        self.value = value.clamp(0.0, 1.0);
        self.pending = Some(self.value);
    }

    fn set_value_silently(&mut self, value: f32) {
        self.value = value.clamp(0.0, 1.0);
    }

    fn poll_change(&mut self) -> Option<f32> {
        self.pending.take()
    }
}

/// Configuration failures when assembling the paddle rig
#[derive(Debug, Error)]
pub enum PaddleError {
    #[error("control input device not supplied")]
    MissingControlInput,
    #[error("viewport source not supplied")]
    MissingViewport,
    #[error(transparent)]
    Tuning(#[from] TuningError),
}

/// Builder injecting the paddle's collaborators
#[derive(Default)]
pub struct PaddleControllerBuilder {
    control: Option<Box<dyn ControlInput>>,
    viewport: Option<Box<dyn ViewportSource>>,
    tuning: PaddleTuning,
}

impl PaddleControllerBuilder {
    pub fn control(mut self, device: impl ControlInput + 'static) -> Self {
        self.control = Some(Box::new(device));
        self
    }

    pub fn viewport(mut self, source: impl ViewportSource + 'static) -> Self {
        self.viewport = Some(Box::new(source));
        self
    }

    pub fn tuning(mut self, tuning: PaddleTuning) -> Self {
        self.tuning = tuning;
        self
    }

    /// Assemble the controller. Motion is meaningless without a device and
    /// a viewport, so a missing collaborator is an error, not a default.
    pub fn build(self) -> Result<PaddleController, PaddleError> {
        let control = self.control.ok_or(PaddleError::MissingControlInput)?;
        let viewport = self.viewport.ok_or(PaddleError::MissingViewport)?;
        self.tuning.validate()?;
        Ok(PaddleController::assemble(control, viewport, self.tuning))
    }
}

/// Paddle motion controller
pub struct PaddleController {
    tuning: PaddleTuning,
    control: Box<dyn ControlInput>,
    viewport: Box<dyn ViewportSource>,
    geometry: PaddleGeometry,
    bounds: BoundaryRange,
    expansion: ExpansionEffect,
    timers: TickScheduler<EffectExpiry>,
    launched: bool,
    warned_degenerate: bool,
    signals: Vec<PaddleSignal>,
}

impl PaddleController {
    pub fn builder() -> PaddleControllerBuilder {
        PaddleControllerBuilder::default()
    }

    fn assemble(
        control: Box<dyn ControlInput>,
        viewport: Box<dyn ViewportSource>,
        tuning: PaddleTuning,
    ) -> Self {
        let half_width = tuning.half_width();
        let mut controller = Self {
            tuning,
            control,
            viewport,
            geometry: PaddleGeometry::new(half_width),
            bounds: BoundaryRange {
                min_x: 0.0,
                max_x: 0.0,
            },
            expansion: ExpansionEffect::new(half_width),
            timers: TickScheduler::new(),
            launched: false,
            warned_degenerate: false,
            signals: Vec::new(),
        };
        controller.refresh_bounds();
        controller.recenter();
        controller
    }

    /// Advance one frame: fire due timers, re-derive boundaries from the
    /// live viewport, re-clamp, and drain pending control input
    pub fn tick(&mut self, dt: f32) {
        for expiry in self.timers.advance(dt) {
            match expiry {
                EffectExpiry::RevertExpansion => self.expansion.expire(&mut self.geometry),
            }
        }
        self.refresh_bounds();
        self.pump_control();
    }

    /// Control device callback: map a normalized value to a paddle position
    ///
    /// The first call after construction or [`reset`](Self::reset) also
    /// emits [`PaddleSignal::LaunchRequested`], exactly once.
    pub fn set_control_value(&mut self, value: f32) {
        self.apply_control(value);
    }

    /// Drive the paddle toward `target_x` through the control device
    ///
    /// The target is clamped into the travel range and written to the device
    /// as a normalized value; motion happens via the device's resulting
    /// change notification, same as a human input.
    pub fn auto_move(&mut self, target_x: f32) {
        let clamped = self.bounds.clamp(target_x);
        let value = inverse_lerp(self.bounds.min_x, self.bounds.max_x, clamped);
        self.control.set_value(value);
        self.pump_control();
    }

    /// Round-restart synchronization: re-arm the launch latch and recenter
    /// without firing it
    pub fn reset(&mut self) {
        self.launched = false;
        self.recenter();
    }

    /// Event from the collision subsystem
    pub fn on_event(&mut self, event: PaddleEvent) {
        match event {
            PaddleEvent::Solid(contact) => {
                if let Some(velocity) =
                    bounce::respond(contact, &self.geometry, self.tuning.max_bounce_angle)
                {
                    self.signals.push(PaddleSignal::Deflected(velocity));
                }
            }
            PaddleEvent::PowerUp(effect) => {
                self.expansion
                    .trigger(effect, &mut self.geometry, &mut self.timers);
                // The narrower travel range must be visible before we return
                self.refresh_bounds();
            }
        }
    }

    /// Drain signals for the ball/launch collaborators
    pub fn take_signals(&mut self) -> Vec<PaddleSignal> {
        std::mem::take(&mut self.signals)
    }

    pub fn geometry(&self) -> &PaddleGeometry {
        &self.geometry
    }

    pub fn bounds(&self) -> BoundaryRange {
        self.bounds
    }

    /// Collider sizes published for the collision subsystem
    pub fn colliders(&self) -> ColliderSizes {
        self.geometry.colliders()
    }

    pub fn expansion_active(&self) -> bool {
        self.expansion.is_active()
    }

    /// Value currently displayed on the control device
    pub fn control_value(&self) -> f32 {
        self.control.value()
    }

    fn apply_control(&mut self, value: f32) {
        let value = value.clamp(0.0, 1.0);
        self.geometry.center_x = lerp(self.bounds.min_x, self.bounds.max_x, value);
        if !self.launched {
            self.launched = true;
            self.signals.push(PaddleSignal::LaunchRequested);
        }
    }

    fn pump_control(&mut self) {
        while let Some(value) = self.control.poll_change() {
            self.apply_control(value);
        }
    }

    fn recenter(&mut self) {
        self.geometry.center_x = lerp(self.bounds.min_x, self.bounds.max_x, NEUTRAL_CONTROL);
        self.control.set_value_silently(NEUTRAL_CONTROL);
    }

    /// Re-derive the travel range from the live viewport and current width,
    /// re-clamp the paddle, and resync the device display silently
    fn refresh_bounds(&mut self) {
        let metrics = self.viewport.metrics();
        let bounds = bounds::compute_bounds(
            metrics,
            self.geometry.half_width,
            self.tuning.vertical_offset,
            self.tuning.horizontal_edge_offset,
        );

        if bounds.degenerate {
            if !self.warned_degenerate {
                log::warn!(
                    "paddle travel range is empty (viewport {}x{}, half width {}); pinning to x={}",
                    metrics.width,
                    metrics.height,
                    self.geometry.half_width,
                    bounds.range.min_x
                );
                self.warned_degenerate = true;
            }
        } else {
            self.warned_degenerate = false;
        }

        self.bounds = bounds.range;
        self.geometry.vertical_y = bounds.vertical_y;
        self.geometry.center_x = self.bounds.clamp(self.geometry.center_x);

        if self.bounds.span() > 0.0 {
            let shown = inverse_lerp(self.bounds.min_x, self.bounds.max_x, self.geometry.center_x);
            self.control.set_value_silently(shown);
        }
    }
}
