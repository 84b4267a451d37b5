#![allow(dead_code)]

use std::cell::Cell;
use std::collections::BTreeMap;
use std::rc::Rc;

use bt_core::{Blackboard, TickContext};
use bt_runtime::{Behavior, Conditional, Node, Status};

/// World whose leaves report whatever the test scripted for them this tick.
#[derive(Debug, Default)]
pub struct Stage {
    outcomes: BTreeMap<&'static str, Status>,
    pub log: Vec<String>,
}

impl Stage {
    pub fn set(&mut self, name: &'static str, status: Status) {
        self.outcomes.insert(name, status);
    }

    pub fn count(&self, event: &str) -> usize {
        self.log.iter().filter(|e| e.as_str() == event).count()
    }

    pub fn clear_log(&mut self) {
        self.log.clear();
    }
}

/// Leaf driven by [`Stage`]; defaults to `Running` until scripted otherwise.
pub struct Puppet {
    name: &'static str,
}

impl Behavior<Stage> for Puppet {
    fn on_start(&mut self, _ctx: &TickContext, world: &mut Stage, _bb: &mut Blackboard) {
        world.log.push(format!("{}:start", self.name));
    }

    fn on_update(&mut self, _ctx: &TickContext, world: &mut Stage, _bb: &mut Blackboard) -> Status {
        world.log.push(format!("{}:update", self.name));
        world
            .outcomes
            .get(self.name)
            .copied()
            .unwrap_or(Status::Running)
    }

    fn on_finish(&mut self, status: Status, _ctx: &TickContext, world: &mut Stage, _bb: &mut Blackboard) {
        world.log.push(format!("{}:finish:{status:?}", self.name));
    }

    fn on_abort(&mut self, _ctx: &TickContext, world: &mut Stage, _bb: &mut Blackboard) {
        world.log.push(format!("{}:abort", self.name));
    }
}

pub fn puppet(name: &'static str) -> Node<Stage> {
    Node::new(name, Puppet { name })
}

/// Gate toggled from the test through a shared flag.
#[derive(Clone, Default)]
pub struct Switch {
    pub closed: Rc<Cell<bool>>,
    pub starts: Rc<Cell<u32>>,
    pub finishes: Rc<Cell<u32>>,
}

impl Conditional for Switch {
    fn name(&self) -> &str {
        "Switch"
    }

    fn can_execute(&self, _ctx: &TickContext) -> bool {
        !self.closed.get()
    }

    fn on_start(&mut self, _ctx: &TickContext) {
        self.starts.set(self.starts.get() + 1);
    }

    fn on_finish(&mut self, _ctx: &TickContext) {
        self.finishes.set(self.finishes.get() + 1);
    }
}

/// Tick `n` of a fixed half-second step clock.
pub fn ctx(tick: u64) -> TickContext {
    TickContext::new(tick, tick as f32 * 0.5).with_dt(0.5)
}
