//! Single-threaded timer scheduling for delayed effects
//!
//! Timed gameplay effects suspend logically without occupying the thread:
//! the work is stored as a payload and fired from a future frame tick. All
//! scheduling and firing happens on the one thread that drives `advance`,
//! so cancellation is unconditional: a cancelled handle can never fire.

/// Opaque handle to a pending timer. Handles are unique for the lifetime of
/// the scheduler and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

struct PendingTimer<T> {
    handle: TimerHandle,
    remaining: f32,
    payload: T,
}

/// Timer store driven by the frame tick
pub struct TickScheduler<T> {
    next_id: u64,
    pending: Vec<PendingTimer<T>>,
}

impl<T> Default for TickScheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TickScheduler<T> {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            pending: Vec::new(),
        }
    }

    /// Schedule `payload` to fire `duration` seconds from now
    ///
    /// A non-positive duration fires on the next `advance` call.
    pub fn schedule_after(&mut self, duration: f32, payload: T) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(PendingTimer {
            handle,
            remaining: duration.max(0.0),
            payload,
        });
        handle
    }

    /// Remove a pending timer. Returns false if it already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|timer| timer.handle != handle);
        self.pending.len() != before
    }

    /// Whether a handle still refers to a pending timer
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.iter().any(|timer| timer.handle == handle)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Advance all timers by `dt` and drain the due payloads, in
    /// scheduling order
    pub fn advance(&mut self, dt: f32) -> Vec<T> {
        for timer in &mut self.pending {
            timer.remaining -= dt;
        }

        let mut fired = Vec::new();
        let mut index = 0;
        while index < self.pending.len() {
            if self.pending[index].remaining <= 0.0 {
                fired.push(self.pending.remove(index).payload);
            } else {
                index += 1;
            }
        }
        fired
    }
}
