use bt_core::{Blackboard, TickContext};
use bt_tools::{emit as trace_emit, TraceEvent};

use crate::composite::{Composite, Execution};
use crate::{Behavior, Node, Status, TreeError};

/// Runs every child each tick; the first child to succeed wins the race.
///
/// # Semantics
///
/// - First sweep of a run: every child is executed once.
/// - Later sweeps: only children still `Running` are executed again; a child
///   that failed is used up and never retried within the run.
/// - Aggregate per tick: `Success` beats `Running` beats `Failure`, so the race
///   fails only once every child has failed.
/// - Once the race is decided (winner or total failure) and on abort, every
///   child still `Running` is aborted.
#[derive(Debug)]
pub struct Race<W>
where
    W: 'static,
{
    base: Composite<W>,
}

impl<W> Race<W>
where
    W: 'static,
{
    pub fn try_new(children: Vec<Node<W>>) -> Result<Self, TreeError> {
        Ok(Self {
            base: Composite::try_new("Race", children)?,
        })
    }

    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Vec<Node<W>>) -> Self {
        Self {
            base: Composite::new("Race", children),
        }
    }

    pub fn composite(&self) -> &Composite<W> {
        &self.base
    }
}

impl<W> Behavior<W> for Race<W>
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
        let mut status = Status::Failure;
        let mut winner = None;

        self.base.sweep(
            Execution::Wrapped,
            Status::Failure,
            ctx,
            world,
            blackboard,
            |i, result| match result {
                Status::Success => {
                    status = Status::Success;
                    if winner.is_none() {
                        winner = Some(i);
                    }
                }
                Status::Running => {
                    if status != Status::Success {
                        status = Status::Running;
                    }
                }
                Status::Failure => {}
            },
        );

        match (status, winner) {
            (Status::Success, Some(i)) => {
                tracing::debug!(tick = ctx.tick, child = i, "race won");
                trace_emit(
                    blackboard,
                    TraceEvent::new(ctx.tick, "bt.race.won")
                        .with_a(i as u64)
                        .with_b(self.base.cursor() as u64),
                );
            }
            (Status::Failure, _) => {
                tracing::debug!(tick = ctx.tick, "race exhausted");
                trace_emit(
                    blackboard,
                    TraceEvent::new(ctx.tick, "bt.race.exhausted")
                        .with_b(self.base.cursor() as u64),
                );
            }
            _ => {}
        }

        status
    }

    fn on_finish(
        &mut self,
        _status: Status,
        ctx: &TickContext,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) {
        self.base.abort_running(ctx, world, blackboard);
    }
}
