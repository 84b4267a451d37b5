use bt_core::TickContext;

/// A gate consulted before a node is granted execution on a tick.
///
/// Gates share the lifecycle of the node they guard: `on_start` when the node
/// starts a run, `on_finish` when that run finishes or is aborted.
/// `can_execute` must be cheap and free of side effects; it may be called
/// every tick.
pub trait Conditional: 'static {
    fn name(&self) -> &str {
        "Conditional"
    }

    fn can_execute(&self, ctx: &TickContext) -> bool;

    fn on_start(&mut self, _ctx: &TickContext) {}

    fn on_finish(&mut self, _ctx: &TickContext) {}
}
