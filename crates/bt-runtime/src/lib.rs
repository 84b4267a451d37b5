//! Tick-driven behavior tree runtime built on `bt-core`.
//!
//! A tree is a [`Node`] hierarchy driven once per step through [`Tree::tick`].
//! Every node follows the same `start → update → finish` lifecycle with an
//! `abort` edge; composites ([`Parallel`], [`Race`], [`Sequence`], [`Selector`])
//! guarantee that no child is left `Running` once they stop driving it.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod conditional;
pub mod error;
pub mod leaf;
pub mod limit;
pub mod node;
pub mod parallel;
pub mod race;
pub mod sequence;
pub mod status;
pub mod tree;

pub use behavior::Behavior;
pub use composite::Composite;
pub use conditional::Conditional;
pub use error::TreeError;
pub use leaf::{Action, Condition};
pub use limit::{Limit, LimitConfig};
pub use node::Node;
pub use parallel::Parallel;
pub use race::Race;
pub use sequence::{Selector, Sequence};
pub use status::Status;
pub use tree::Tree;
