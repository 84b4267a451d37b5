use bt_core::{Blackboard, TickContext};

use crate::{Node, Status};

/// Owner of a root node; the host's entry point for driving a tree.
///
/// Call [`tick`](Self::tick) once per scheduling step. Call
/// [`abort`](Self::abort) before discarding a tree that may still be running so
/// leaves get a chance to release what they hold.
#[derive(Debug)]
pub struct Tree<W>
where
    W: 'static,
{
    root: Node<W>,
    last: Option<Status>,
}

impl<W> Tree<W>
where
    W: 'static,
{
    pub fn new(root: Node<W>) -> Self {
        Self { root, last: None }
    }

    pub fn root(&self) -> &Node<W> {
        &self.root
    }

    pub fn last_status(&self) -> Option<Status> {
        self.last
    }

    pub fn is_running(&self) -> bool {
        self.root.is_running()
    }

    pub fn tick(&mut self, ctx: &TickContext, world: &mut W, blackboard: &mut Blackboard) -> Status {
        let status = self.root.wrapped_execute(ctx, world, blackboard);
        self.last = Some(status);
        tracing::trace!(tree = %self.root.name(), tick = ctx.tick, ?status, "tick");
        status
    }

    /// Settle the whole tree. Every running descendant is aborted before this
    /// returns; calling it on an idle tree does nothing.
    pub fn abort(&mut self, ctx: &TickContext, world: &mut W, blackboard: &mut Blackboard) {
        if self.root.is_started() {
            tracing::debug!(tree = %self.root.name(), tick = ctx.tick, "aborting tree");
        }
        self.root.abort(ctx, world, blackboard);
        self.last = self.root.status();
    }
}

impl<W> Drop for Tree<W>
where
    W: 'static,
{
    fn drop(&mut self) {
        if self.root.is_started() {
            tracing::warn!(
                tree = %self.root.name(),
                "behavior tree dropped while running; abort it first to release leaf resources"
            );
        }
    }
}
