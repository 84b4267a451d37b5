mod common;

use bt_core::{BbKey, Blackboard};
use bt_runtime::builder::{action, condition, parallel, race, selector, sequence};
use bt_runtime::{Selector, Sequence, Status, Tree, TreeError};
use bt_tools::{TraceLog, TRACE_LOG};

use common::{ctx, puppet, Stage};

const ARMED: BbKey<bool> = BbKey::new(1);

#[test]
fn sequence_resumes_the_running_child() {
    let mut world = Stage::default();
    let mut bb = Blackboard::new();
    let mut tree = Tree::new(sequence(vec![puppet("A"), puppet("B")]));

    assert_eq!(tree.tick(&ctx(0), &mut world, &mut bb), Status::Running);

    world.set("A", Status::Success);
    assert_eq!(tree.tick(&ctx(1), &mut world, &mut bb), Status::Running);

    world.set("B", Status::Success);
    assert_eq!(tree.tick(&ctx(2), &mut world, &mut bb), Status::Success);

    assert_eq!(world.count("A:update"), 2);
    assert_eq!(world.count("B:update"), 2);
}

#[test]
fn sequence_stops_at_the_first_failure() {
    let mut world = Stage::default();
    let mut bb = Blackboard::new();
    let mut tree = Tree::new(sequence(vec![puppet("A"), puppet("B")]));

    world.set("A", Status::Failure);
    assert_eq!(tree.tick(&ctx(0), &mut world, &mut bb), Status::Failure);
    assert_eq!(world.count("B:start"), 0);
}

#[test]
fn selector_abort_reaches_the_running_child() {
    let mut world = Stage::default();
    let mut bb = Blackboard::new();
    let mut tree = Tree::new(selector(vec![puppet("A"), puppet("B")]));

    world.set("A", Status::Failure);
    assert_eq!(tree.tick(&ctx(0), &mut world, &mut bb), Status::Running);

    tree.abort(&ctx(1), &mut world, &mut bb);
    assert_eq!(world.count("B:abort"), 1);
    assert_eq!(world.count("A:abort"), 0);
    assert!(!tree.is_running());
}

#[test]
fn abort_reaches_nested_composites() {
    let mut world = Stage::default();
    let mut bb = Blackboard::new();
    bb.set(TRACE_LOG, TraceLog::default());
    let mut tree = Tree::new(parallel(vec![
        race(vec![puppet("A"), puppet("B")]),
        sequence(vec![puppet("C"), puppet("D")]),
    ]));

    assert_eq!(tree.tick(&ctx(0), &mut world, &mut bb), Status::Running);
    tree.abort(&ctx(1), &mut world, &mut bb);

    for name in ["A", "B", "C"] {
        assert_eq!(world.count(&format!("{name}:abort")), 1, "{name} not aborted");
    }
    assert_eq!(world.count("D:start"), 0);
    // Root, race, sequence and three leaves.
    assert_eq!(bb.get(TRACE_LOG).unwrap().count("bt.node.abort"), 6);
}

#[test]
fn leaves_read_the_blackboard() {
    let mut world = Stage::default();
    let mut bb = Blackboard::new();
    let mut tree = Tree::new(sequence(vec![
        condition("armed", |_, _: &Stage, bb: &Blackboard| {
            bb.get(ARMED).copied().unwrap_or(false)
        }),
        action("fire", |_, world: &mut Stage, _| {
            world.log.push("fire".to_string());
            Status::Success
        }),
    ]));

    assert_eq!(tree.tick(&ctx(0), &mut world, &mut bb), Status::Failure);
    bb.set(ARMED, true);
    assert_eq!(tree.tick(&ctx(1), &mut world, &mut bb), Status::Success);
    assert_eq!(tree.last_status(), Some(Status::Success));
    assert_eq!(world.count("fire"), 1);
}

#[test]
fn ordered_composites_reject_empty_children() {
    assert_eq!(
        Sequence::<Stage>::try_new(Vec::new()).unwrap_err(),
        TreeError::EmptyComposite { kind: "Sequence" }
    );
    assert_eq!(
        Selector::<Stage>::try_new(Vec::new()).unwrap_err().to_string(),
        "Selector must have at least one child"
    );
}
