use bt_core::{Blackboard, TickContext};

use crate::composite::Composite;
use crate::{Behavior, Node, Status, TreeError};

/// Executes children in order until one fails (memory variant).
///
/// A `Running` child is resumed on the next tick without re-running the
/// children before it.
#[derive(Debug)]
pub struct Sequence<W>
where
    W: 'static,
{
    base: Composite<W>,
}

impl<W> Sequence<W>
where
    W: 'static,
{
    pub fn try_new(children: Vec<Node<W>>) -> Result<Self, TreeError> {
        Ok(Self {
            base: Composite::try_new("Sequence", children)?,
        })
    }

    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Vec<Node<W>>) -> Self {
        Self {
            base: Composite::new("Sequence", children),
        }
    }

    pub fn composite(&self) -> &Composite<W> {
        &self.base
    }
}

impl<W> Behavior<W> for Sequence<W>
where
    W: 'static,
{
    fn on_start(&mut self, _ctx: &TickContext, _world: &mut W, _blackboard: &mut Blackboard) {
        self.base.start();
    }

    fn on_update(
        &mut self,
        ctx: &TickContext,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> Status {
        self.base.step_ordered(Status::Success, ctx, world, blackboard)
    }

    fn on_abort(&mut self, ctx: &TickContext, world: &mut W, blackboard: &mut Blackboard) {
        self.base.abort_running(ctx, world, blackboard);
    }
}

/// Executes children in order until one succeeds (memory variant).
#[derive(Debug)]
pub struct Selector<W>
where
    W: 'static,
{
    base: Composite<W>,
}

impl<W> Selector<W>
where
    W: 'static,
{
    pub fn try_new(children: Vec<Node<W>>) -> Result<Self, TreeError> {
        Ok(Self {
            base: Composite::try_new("Selector", children)?,
        })
    }

    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Vec<Node<W>>) -> Self {
        Self {
            base: Composite::new("Selector", children),
        }
    }

    pub fn composite(&self) -> &Composite<W> {
        &self.base
    }
}

impl<W> Behavior<W> for Selector<W>
where
    W: 'static,
{
    fn on_start(&mut self, _ctx: &TickContext, _world: &mut W, _blackboard: &mut Blackboard) {
        self.base.start();
    }

    fn on_update(
        &mut self,
        ctx: &TickContext,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> Status {
        self.base.step_ordered(Status::Failure, ctx, world, blackboard)
    }

    fn on_abort(&mut self, ctx: &TickContext, world: &mut W, blackboard: &mut Blackboard) {
        self.base.abort_running(ctx, world, blackboard);
    }
}
