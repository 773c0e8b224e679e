//! Simulated upload progress.
//!
//! Nothing is transferred: each tick adds an increment drawn from a
//! [`ProgressSource`] until the entry saturates at 100.
//!
//! - [`RandomProgress`] - Uniform increments in `[0, 30)`
//! - [`FixedStep`] - Same increment every tick
//! - [`Scripted`] - Increments from a list, then zero

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Progress value of a finished entry.
pub const COMPLETE: f64 = 100.0;

/// Upper bound (exclusive) of a random tick increment.
pub const MAX_STEP: f64 = 30.0;

/// Milliseconds between two ticks of one entry.
pub const TICK_INTERVAL_MS: u32 = 300;

/// Supplies the progress increment for each tick.
pub trait ProgressSource {
    /// Next increment, in percent. Must be non-negative.
    fn next_step(&mut self) -> f64;
}

impl<P: ProgressSource + ?Sized> ProgressSource for Box<P> {
    fn next_step(&mut self) -> f64 {
        (**self).next_step()
    }
}

/// Uniformly random increments in `[0, MAX_STEP)`.
#[derive(Debug, Clone)]
pub struct RandomProgress {
    rng: StdRng,
}

impl RandomProgress {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence of increments.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSource for RandomProgress {
    fn next_step(&mut self) -> f64 {
        self.rng.gen_range(0.0..MAX_STEP)
    }
}

/// Constant increment every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedStep(pub f64);

impl ProgressSource for FixedStep {
    fn next_step(&mut self) -> f64 {
        self.0
    }
}

/// Plays back a list of increments, then yields zero forever.
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    steps: VecDeque<f64>,
}

impl Scripted {
    pub fn new(steps: impl IntoIterator<Item = f64>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
        }
    }
}

impl ProgressSource for Scripted {
    fn next_step(&mut self) -> f64 {
        self.steps.pop_front().unwrap_or(0.0)
    }
}

/// Outcome of one tick for one entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tick {
    /// Still uploading, now at this percentage.
    Advanced(f64),
    /// Reached 100 and is now `Success`. Stop ticking.
    Completed,
    /// No uploading entry with this id (removed, replaced or terminal).
    /// Stop ticking.
    Gone,
}

impl Tick {
    /// True when the driver should cancel this entry's timer.
    pub fn is_final(&self) -> bool {
        !matches!(self, Tick::Advanced(_))
    }
}

/// Add `step` to `progress`, saturating at [`COMPLETE`].
///
/// Returns the new value and whether it saturated.
pub fn advance(progress: f64, step: f64) -> (f64, bool) {
    let next = progress + step.max(0.0);
    if next >= COMPLETE {
        (COMPLETE, true)
    } else {
        (next, false)
    }
}
