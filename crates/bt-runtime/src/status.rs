#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of executing a node for one tick.
///
/// `Running` is the only value that carries meaning across ticks: the node
/// wants to be executed again on the next step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    Success,
    Failure,
    Running,
}

impl Status {
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// `true` for `Success` and `Failure`.
    #[inline]
    pub fn is_done(self) -> bool {
        !self.is_running()
    }
}
