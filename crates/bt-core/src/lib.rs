//! Deterministic, engine-agnostic primitives shared by the behavior tree runtime.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod blackboard;
pub mod rng;
pub mod tick;

pub use blackboard::{BbKey, Blackboard};
pub use rng::{DeterministicRng, SplitMix64};
pub use tick::TickContext;
