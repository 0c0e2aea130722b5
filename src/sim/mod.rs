//! Deterministic paddle simulation
//!
//! All paddle logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Single-threaded mutation (frame tick plus synchronous event entry points)
//! - No rendering or platform dependencies

pub mod bounce;
pub mod bounds;
pub mod expand;
pub mod paddle;
pub mod scheduler;
pub mod state;

pub use bounds::{
    BoundaryRange, FixedViewport, PaddleBounds, ViewportMetrics, ViewportSource, compute_bounds,
};
pub use expand::{EffectExpiry, ExpansionEffect};
pub use paddle::{
    ControlInput, PaddleController, PaddleControllerBuilder, PaddleError, SliderState,
};
pub use scheduler::{TickScheduler, TimerHandle};
pub use state::{
    ColliderSizes, ContactEvent, EffectDescriptor, PaddleEvent, PaddleGeometry, PaddleSignal,
};
