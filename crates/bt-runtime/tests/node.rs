mod common;

use bt_core::Blackboard;
use bt_runtime::Status;

use common::{ctx, puppet, Stage, Switch};

#[test]
fn start_runs_once_per_run() {
    let mut world = Stage::default();
    let mut bb = Blackboard::new();
    let mut node = puppet("A");
    assert_eq!(node.status(), None);

    assert_eq!(node.wrapped_execute(&ctx(0), &mut world, &mut bb), Status::Running);
    assert_eq!(node.wrapped_execute(&ctx(1), &mut world, &mut bb), Status::Running);
    world.set("A", Status::Success);
    assert_eq!(node.wrapped_execute(&ctx(2), &mut world, &mut bb), Status::Success);

    assert_eq!(
        world.log,
        vec!["A:start", "A:update", "A:update", "A:update", "A:finish:Success"]
    );
    assert!(!node.is_started());

    node.wrapped_execute(&ctx(3), &mut world, &mut bb);
    assert_eq!(world.count("A:start"), 2);
}

#[test]
fn abort_on_idle_node_is_a_no_op() {
    let mut world = Stage::default();
    let mut bb = Blackboard::new();
    let mut node = puppet("A");

    node.abort(&ctx(0), &mut world, &mut bb);
    assert_eq!(node.status(), None);
    assert!(world.log.is_empty());

    world.set("A", Status::Success);
    node.wrapped_execute(&ctx(1), &mut world, &mut bb);
    node.abort(&ctx(2), &mut world, &mut bb);
    assert_eq!(node.status(), Some(Status::Success));
    assert_eq!(world.count("A:abort"), 0);
}

#[test]
fn abort_closes_the_run_exactly_once() {
    let mut world = Stage::default();
    let mut bb = Blackboard::new();
    let mut node = puppet("A");

    node.wrapped_execute(&ctx(0), &mut world, &mut bb);
    node.abort(&ctx(1), &mut world, &mut bb);
    node.abort(&ctx(2), &mut world, &mut bb);

    assert_eq!(world.count("A:abort"), 1);
    assert_eq!(world.count("A:finish:Failure"), 0);
    assert_eq!(node.status(), Some(Status::Failure));
    assert!(!node.is_running());
}

#[test]
fn wrapped_execute_ignores_a_gate_closing_mid_run() {
    let mut world = Stage::default();
    let mut bb = Blackboard::new();
    let gate = Switch::default();
    let mut node = puppet("A").with_gate(gate.clone());

    assert_eq!(node.wrapped_execute(&ctx(0), &mut world, &mut bb), Status::Running);
    gate.closed.set(true);
    assert_eq!(node.wrapped_execute(&ctx(1), &mut world, &mut bb), Status::Running);
    assert_eq!(world.count("A:update"), 2);
}

#[test]
fn decorated_execute_aborts_when_the_gate_closes() {
    let mut world = Stage::default();
    let mut bb = Blackboard::new();
    let gate = Switch::default();
    let mut node = puppet("A").with_gate(gate.clone());

    assert_eq!(node.decorated_execute(&ctx(0), &mut world, &mut bb), Status::Running);
    gate.closed.set(true);
    assert_eq!(node.decorated_execute(&ctx(1), &mut world, &mut bb), Status::Failure);

    assert_eq!(world.count("A:update"), 1);
    assert_eq!(world.count("A:abort"), 1);
    assert_eq!(gate.starts.get(), 1);
    assert_eq!(gate.finishes.get(), 1);
}

#[test]
fn closed_gate_keeps_an_idle_node_idle() {
    let mut world = Stage::default();
    let mut bb = Blackboard::new();
    let gate = Switch::default();
    gate.closed.set(true);
    let mut node = puppet("A").with_gate(gate.clone());

    assert_eq!(node.wrapped_execute(&ctx(0), &mut world, &mut bb), Status::Failure);
    assert_eq!(node.decorated_execute(&ctx(1), &mut world, &mut bb), Status::Failure);

    assert!(world.log.is_empty());
    assert_eq!(gate.starts.get(), 0);
    assert_eq!(gate.finishes.get(), 0);
    assert_eq!(node.status(), Some(Status::Failure));
}

#[test]
fn gates_follow_the_node_lifecycle() {
    let mut world = Stage::default();
    let mut bb = Blackboard::new();
    let gate = Switch::default();
    let mut node = puppet("A").with_gate(gate.clone());

    world.set("A", Status::Success);
    node.wrapped_execute(&ctx(0), &mut world, &mut bb);
    node.wrapped_execute(&ctx(1), &mut world, &mut bb);

    assert_eq!(gate.starts.get(), 2);
    assert_eq!(gate.finishes.get(), 2);
}
