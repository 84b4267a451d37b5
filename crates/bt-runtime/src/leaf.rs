use bt_core::{Blackboard, TickContext};

use crate::{Behavior, Status};

/// Leaf that runs a closure every tick and reports its status.
pub struct Action<F> {
    run: F,
}

impl<F> Action<F> {
    pub fn new(run: F) -> Self {
        Self { run }
    }
}

impl<F, W> Behavior<W> for Action<F>
where
    F: FnMut(&TickContext, &mut W, &mut Blackboard) -> Status + 'static,
    W: 'static,
{
    fn on_update(
        &mut self,
        ctx: &TickContext,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> Status {
        (self.run)(ctx, world, blackboard)
    }
}

/// Leaf that maps a predicate to `Success` / `Failure`. Never `Running`.
pub struct Condition<F> {
    cond: F,
}

impl<F> Condition<F> {
    pub fn new(cond: F) -> Self {
        Self { cond }
    }
}

impl<F, W> Behavior<W> for Condition<F>
where
    F: FnMut(&TickContext, &W, &Blackboard) -> bool + 'static,
    W: 'static,
{
    fn on_update(
        &mut self,
        ctx: &TickContext,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> Status {
        if (self.cond)(ctx, &*world, &*blackboard) {
            Status::Success
        } else {
            Status::Failure
        }
    }
}
