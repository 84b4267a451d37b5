use std::borrow::Cow;
use std::fmt;

use bt_core::{Blackboard, TickContext};
use bt_tools::{emit as trace_emit, TraceEvent};

use crate::{Behavior, Conditional, Status};

/// A behavior plus its gates and lifecycle bookkeeping.
///
/// `Node` is what parents hold and execute. It owns the `started` flag and the
/// last computed status so the behavior itself never has to track whether it
/// is mid-run.
pub struct Node<W>
where
    W: 'static,
{
    name: Cow<'static, str>,
    behavior: Box<dyn Behavior<W>>,
    gates: Vec<Box<dyn Conditional>>,
    status: Option<Status>,
    started: bool,
}

impl<W> fmt::Debug for Node<W>
where
    W: 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("name", &self.name)
            .field("gates", &self.gates.iter().map(|g| g.name()).collect::<Vec<_>>())
            .field("status", &self.status)
            .field("started", &self.started)
            .finish()
    }
}

impl<W> Node<W>
where
    W: 'static,
{
    pub fn new(name: impl Into<Cow<'static, str>>, behavior: impl Behavior<W>) -> Self {
        Self::from_boxed(name, Box::new(behavior))
    }

    pub fn from_boxed(name: impl Into<Cow<'static, str>>, behavior: Box<dyn Behavior<W>>) -> Self {
        Self {
            name: name.into(),
            behavior,
            gates: Vec::new(),
            status: None,
            started: false,
        }
    }

    /// Guard this node with an additional gate. All gates must allow execution.
    pub fn with_gate(mut self, gate: impl Conditional) -> Self {
        self.gates.push(Box::new(gate));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Last computed status, `None` before the first execution.
    pub fn status(&self) -> Option<Status> {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == Some(Status::Running)
    }

    /// `true` between `on_start` and the matching finish/abort.
    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn gates_allow(&self, ctx: &TickContext) -> bool {
        self.gates.iter().all(|g| g.can_execute(ctx))
    }

    /// Execute for one tick, consulting gates only before a new run starts.
    ///
    /// A node that is already `Running` keeps running even if a gate has since
    /// closed.
    pub fn wrapped_execute(
        &mut self,
        ctx: &TickContext,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> Status {
        if !self.is_running() && !self.gates_allow(ctx) {
            return self.deny(ctx, world, blackboard);
        }
        self.run(ctx, world, blackboard)
    }

    /// Execute for one tick, consulting gates on every tick.
    ///
    /// A `Running` node whose gate closes is aborted and reports `Failure`.
    pub fn decorated_execute(
        &mut self,
        ctx: &TickContext,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> Status {
        if !self.gates_allow(ctx) {
            return self.deny(ctx, world, blackboard);
        }
        self.run(ctx, world, blackboard)
    }

    /// Terminate the current run without an update. No-op on an idle node.
    pub fn abort(&mut self, ctx: &TickContext, world: &mut W, blackboard: &mut Blackboard) {
        if !self.started {
            return;
        }

        tracing::trace!(node = %self.name, tick = ctx.tick, "abort");
        trace_emit(blackboard, TraceEvent::new(ctx.tick, "bt.node.abort"));

        self.started = false;
        self.status = Some(Status::Failure);
        self.behavior.on_abort(ctx, world, blackboard);
        for gate in self.gates.iter_mut() {
            gate.on_finish(ctx);
        }
    }

    fn deny(&mut self, ctx: &TickContext, world: &mut W, blackboard: &mut Blackboard) -> Status {
        tracing::trace!(node = %self.name, tick = ctx.tick, "gate denied execution");
        trace_emit(
            blackboard,
            TraceEvent::new(ctx.tick, "bt.gate.denied").with_a(self.started as u64),
        );

        self.abort(ctx, world, blackboard);
        self.status = Some(Status::Failure);
        Status::Failure
    }

    fn run(&mut self, ctx: &TickContext, world: &mut W, blackboard: &mut Blackboard) -> Status {
        if !self.started {
            for gate in self.gates.iter_mut() {
                gate.on_start(ctx);
            }
            self.behavior.on_start(ctx, world, blackboard);
            self.started = true;
        }

        let status = self.behavior.on_update(ctx, world, blackboard);
        self.status = Some(status);

        if status.is_done() {
            self.started = false;
            self.behavior.on_finish(status, ctx, world, blackboard);
            for gate in self.gates.iter_mut() {
                gate.on_finish(ctx);
            }
            tracing::trace!(node = %self.name, tick = ctx.tick, ?status, "finished");
        }

        status
    }
}
