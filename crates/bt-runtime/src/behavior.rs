use bt_core::{Blackboard, TickContext};

use crate::Status;

/// The capability set every node kind implements.
///
/// Hooks are never called directly by user code; [`Node`](crate::Node) drives
/// them and enforces the lifecycle:
///
/// - `on_start` runs exactly once per run, before the first `on_update`.
/// - `on_update` runs once per tick while the run is active.
/// - exactly one of `on_finish` (the update returned `Success`/`Failure`) or
///   `on_abort` (the run was cut short) closes the run.
///
/// `W` is the host's world type; leaves read and mutate it, composites pass it
/// through to their children.
pub trait Behavior<W>: 'static
where
    W: 'static,
{
    fn on_start(&mut self, _ctx: &TickContext, _world: &mut W, _blackboard: &mut Blackboard) {}

    fn on_update(&mut self, ctx: &TickContext, world: &mut W, blackboard: &mut Blackboard)
        -> Status;

    fn on_finish(
        &mut self,
        _status: Status,
        _ctx: &TickContext,
        _world: &mut W,
        _blackboard: &mut Blackboard,
    ) {
    }

    /// Cleanup for a run that is terminated without reaching a result.
    ///
    /// Defaults to finishing with `Failure`.
    fn on_abort(&mut self, ctx: &TickContext, world: &mut W, blackboard: &mut Blackboard) {
        self.on_finish(Status::Failure, ctx, world, blackboard);
    }
}

impl<W> Behavior<W> for Box<dyn Behavior<W>>
where
    W: 'static,
{
    fn on_start(&mut self, ctx: &TickContext, world: &mut W, blackboard: &mut Blackboard) {
        (**self).on_start(ctx, world, blackboard);
    }

    fn on_update(
        &mut self,
        ctx: &TickContext,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> Status {
        (**self).on_update(ctx, world, blackboard)
    }

    fn on_finish(
        &mut self,
        status: Status,
        ctx: &TickContext,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) {
        (**self).on_finish(status, ctx, world, blackboard);
    }

    fn on_abort(&mut self, ctx: &TickContext, world: &mut W, blackboard: &mut Blackboard) {
        (**self).on_abort(ctx, world, blackboard);
    }
}
