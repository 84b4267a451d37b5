#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use bt_core::{DeterministicRng, SplitMix64, TickContext};

use crate::{Conditional, TreeError};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct LimitConfig {
    /// Base time budget of one run, in seconds of the host clock.
    pub limit_seconds: f32,

    /// Maximum jitter applied to the budget; each run draws uniformly from
    /// `[-deviation_seconds, +deviation_seconds)`.
    pub deviation_seconds: f32,

    /// Seed for the default jitter RNG. Ignored by [`Limit::with_rng`].
    pub seed: u64,
}

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            limit_seconds: 1.0,
            deviation_seconds: 0.0,
            seed: 0,
        }
    }
}

impl LimitConfig {
    pub fn new(limit_seconds: f32) -> Self {
        Self {
            limit_seconds,
            ..Self::default()
        }
    }

    pub fn with_deviation(mut self, deviation_seconds: f32) -> Self {
        self.deviation_seconds = deviation_seconds;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<(), TreeError> {
        check("limit_seconds", self.limit_seconds)?;
        check("deviation_seconds", self.deviation_seconds)
    }
}

fn check(field: &'static str, value: f32) -> Result<(), TreeError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(TreeError::InvalidLimit { field, value })
    }
}

/// Gate that halts the guarded node once its time budget runs out.
///
/// Starting the guarded node arms a deadline of
/// `now + limit_seconds + jitter`; the gate allows execution while that
/// deadline lies in the future. An unarmed gate allows execution, so a fresh
/// run always gets its first tick. The deadline is cleared when the run
/// finishes or is aborted, and re-armed with fresh jitter on the next start.
///
/// Enforcement needs a parent that re-checks gates while the node is running
/// ([`Node::decorated_execute`](crate::Node::decorated_execute), as used by
/// [`Parallel`](crate::Parallel)).
#[derive(Debug, Clone)]
pub struct Limit<R = SplitMix64> {
    config: LimitConfig,
    rng: R,
    deadline: Option<f32>,
}

impl Limit<SplitMix64> {
    /// # Panics
    ///
    /// Panics if `limit_seconds` is negative or not finite.
    pub fn new(limit_seconds: f32) -> Self {
        match Self::try_new(LimitConfig::new(limit_seconds)) {
            Ok(limit) => limit,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_new(config: LimitConfig) -> Result<Self, TreeError> {
        Self::with_rng(config, SplitMix64::new(config.seed))
    }
}

impl<R> Limit<R>
where
    R: DeterministicRng,
{
    pub fn with_rng(config: LimitConfig, rng: R) -> Result<Self, TreeError> {
        config.validate()?;
        Ok(Self {
            config,
            rng,
            deadline: None,
        })
    }

    pub fn config(&self) -> &LimitConfig {
        &self.config
    }

    pub fn deadline(&self) -> Option<f32> {
        self.deadline
    }

    /// Time left before the deadline; `None` while unarmed.
    pub fn remaining(&self, ctx: &TickContext) -> Option<f32> {
        self.deadline.map(|deadline| deadline - ctx.time_seconds)
    }
}

impl<R> Conditional for Limit<R>
where
    R: DeterministicRng + 'static,
{
    fn name(&self) -> &str {
        "Limit"
    }

    fn can_execute(&self, ctx: &TickContext) -> bool {
        self.remaining(ctx).map_or(true, |left| left > 0.0)
    }

    fn on_start(&mut self, ctx: &TickContext) {
        let deviation = self.config.deviation_seconds;
        let jitter = self.rng.next_f32_range(-deviation, deviation);
        self.deadline = Some(ctx.time_seconds + self.config.limit_seconds + jitter);
    }

    fn on_finish(&mut self, _ctx: &TickContext) {
        self.deadline = None;
    }
}
