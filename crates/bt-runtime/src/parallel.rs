use bt_core::{Blackboard, TickContext};
use bt_tools::{emit as trace_emit, TraceEvent};

use crate::composite::{Composite, Execution};
use crate::{Behavior, Node, Status, TreeError};

/// Runs every child each tick; all must succeed, any failure fails the group.
///
/// # Semantics
///
/// - First sweep of a run: every child is executed once.
/// - Later sweeps: only children still `Running` are executed again.
/// - Aggregate per tick: `Failure` beats `Running` beats `Success`.
/// - On `Failure`, every child still `Running` is aborted before the tick
///   returns, so the group never leaves orphans behind.
///
/// Children are executed with [`Node::decorated_execute`]: their gates are
/// re-checked every tick, which lets a gate such as [`Limit`](crate::Limit)
/// cut a long-running branch short.
#[derive(Debug)]
pub struct Parallel<W>
where
    W: 'static,
{
    base: Composite<W>,
}

impl<W> Parallel<W>
where
    W: 'static,
{
    pub fn try_new(children: Vec<Node<W>>) -> Result<Self, TreeError> {
        Ok(Self {
            base: Composite::try_new("Parallel", children)?,
        })
    }

    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Vec<Node<W>>) -> Self {
        Self {
            base: Composite::new("Parallel", children),
        }
    }

    pub fn composite(&self) -> &Composite<W> {
        &self.base
    }
}

impl<W> Behavior<W> for Parallel<W>
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
        let mut status = Status::Success;
        let mut first_failure = None;

        self.base.sweep(
            Execution::Decorated,
            Status::Success,
            ctx,
            world,
            blackboard,
            |i, result| match result {
                Status::Failure => {
                    status = Status::Failure;
                    if first_failure.is_none() {
                        first_failure = Some(i);
                    }
                }
                Status::Running => {
                    if status != Status::Failure {
                        status = Status::Running;
                    }
                }
                Status::Success => {}
            },
        );

        if let Some(i) = first_failure {
            let aborted = self.base.abort_running(ctx, world, blackboard);
            tracing::debug!(tick = ctx.tick, child = i, aborted, "parallel failed");
            trace_emit(
                blackboard,
                TraceEvent::new(ctx.tick, "bt.parallel.failure")
                    .with_a(i as u64)
                    .with_b(aborted as u64),
            );
        }

        status
    }

    fn on_abort(&mut self, ctx: &TickContext, world: &mut W, blackboard: &mut Blackboard) {
        self.base.abort_running(ctx, world, blackboard);
    }
}
