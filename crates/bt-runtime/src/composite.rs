//! Shared plumbing for nodes that own an ordered set of children.

use bt_core::{Blackboard, TickContext};

use crate::{Node, Status, TreeError};

/// How a composite executes a child during a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Execution {
    /// Gates are checked only before a child starts a run.
    Wrapped,
    /// Gates are checked every tick; a closed gate aborts a running child.
    Decorated,
}

/// Ordered, fixed children plus the per-run cursor bookkeeping.
///
/// Children with an index below `cursor` have already settled for the current
/// run and are never executed again until the composite restarts. `ran`
/// records whether the first sweep of the run has happened: on the first
/// sweep every child at or after the cursor gets executed, afterwards only the
/// ones still `Running`.
#[derive(Debug)]
pub struct Composite<W>
where
    W: 'static,
{
    kind: &'static str,
    children: Vec<Node<W>>,
    cursor: usize,
    ran: bool,
}

impl<W> Composite<W>
where
    W: 'static,
{
    pub fn try_new(kind: &'static str, children: Vec<Node<W>>) -> Result<Self, TreeError> {
        if children.is_empty() {
            return Err(TreeError::EmptyComposite { kind });
        }
        Ok(Self {
            kind,
            children,
            cursor: 0,
            ran: false,
        })
    }

    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(kind: &'static str, children: Vec<Node<W>>) -> Self {
        match Self::try_new(kind, children) {
            Ok(composite) => composite,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn children(&self) -> &[Node<W>] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn has_run_once(&self) -> bool {
        self.ran
    }

    pub fn start(&mut self) {
        self.cursor = 0;
        self.ran = false;
    }

    /// One pass over the eligible children.
    ///
    /// A child is executed if it is `Running` or this is the first sweep of
    /// the run. The cursor moves past a child only when it reports `settle`
    /// while sitting exactly at the cursor. `fold` sees every executed child's
    /// index and result in order.
    pub fn sweep(
        &mut self,
        execution: Execution,
        settle: Status,
        ctx: &TickContext,
        world: &mut W,
        blackboard: &mut Blackboard,
        mut fold: impl FnMut(usize, Status),
    ) {
        for i in self.cursor..self.children.len() {
            let child = &mut self.children[i];
            if !(child.is_running() || !self.ran) {
                continue;
            }

            let result = match execution {
                Execution::Wrapped => child.wrapped_execute(ctx, world, blackboard),
                Execution::Decorated => child.decorated_execute(ctx, world, blackboard),
            };

            if result == settle && self.cursor == i {
                self.cursor += 1;
            }
            fold(i, result);
        }

        self.ran = true;
    }

    /// Step through children from the cursor, stopping at the first one that
    /// does not report `advance_on`.
    ///
    /// Used by the ordered composites: the child at the cursor is the one
    /// currently being driven.
    pub fn step_ordered(
        &mut self,
        advance_on: Status,
        ctx: &TickContext,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> Status {
        while let Some(child) = self.children.get_mut(self.cursor) {
            let result = child.wrapped_execute(ctx, world, blackboard);
            if result != advance_on {
                return result;
            }
            self.cursor += 1;
        }
        self.ran = true;
        advance_on
    }

    /// Abort every child at or after the cursor whose last status is `Running`.
    ///
    /// Returns how many children were aborted.
    pub fn abort_running(
        &mut self,
        ctx: &TickContext,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> usize {
        let mut aborted = 0;
        for child in self.children[self.cursor..].iter_mut() {
            if child.is_running() {
                child.abort(ctx, world, blackboard);
                aborted += 1;
            }
        }
        aborted
    }
}
