#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{rng, SplitMix64};

/// Everything a node may learn about "now" during one tick.
///
/// The host owns the clock: `time_seconds` is whatever timeline the host wants
/// gates and leaves to observe (scaled game time, unscaled real time, a fake
/// clock in tests). The runtime never reads a global clock.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TickContext {
    pub tick: u64,
    pub dt_seconds: f32,
    pub time_seconds: f32,
    pub seed: u64,
}

impl TickContext {
    pub fn new(tick: u64, time_seconds: f32) -> Self {
        Self {
            tick,
            dt_seconds: 0.0,
            time_seconds,
            seed: 0,
        }
    }

    pub fn with_dt(mut self, dt_seconds: f32) -> Self {
        self.dt_seconds = dt_seconds;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Context for the following step, advancing the clock by `dt_seconds`.
    pub fn next(self, dt_seconds: f32) -> Self {
        Self {
            tick: self.tick.wrapping_add(1),
            dt_seconds,
            time_seconds: self.time_seconds + dt_seconds,
            seed: self.seed,
        }
    }

    pub fn rng_for_stream(&self, stream: u64) -> SplitMix64 {
        SplitMix64::new(rng::derive_seed(self.seed, stream))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_advances_tick_and_clock() {
        let ctx = TickContext::new(4, 1.5).with_seed(9);
        let next = ctx.next(0.25);

        assert_eq!(next.tick, 5);
        assert_eq!(next.dt_seconds, 0.25);
        assert_eq!(next.time_seconds, 1.75);
        assert_eq!(next.seed, 9);
    }
}
