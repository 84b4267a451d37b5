//! Shorthands for assembling trees.
//!
//! Instead of `Node::new("Race", Race::new(vec![...]))` write `race(vec![...])`.

use std::borrow::Cow;

use bt_core::{Blackboard, TickContext};

use crate::{Action, Condition, Node, Parallel, Race, Selector, Sequence, Status};

#[inline]
pub fn parallel<W: 'static>(children: Vec<Node<W>>) -> Node<W> {
    Node::new("Parallel", Parallel::new(children))
}

#[inline]
pub fn race<W: 'static>(children: Vec<Node<W>>) -> Node<W> {
    Node::new("Race", Race::new(children))
}

#[inline]
pub fn sequence<W: 'static>(children: Vec<Node<W>>) -> Node<W> {
    Node::new("Sequence", Sequence::new(children))
}

#[inline]
pub fn selector<W: 'static>(children: Vec<Node<W>>) -> Node<W> {
    Node::new("Selector", Selector::new(children))
}

#[inline]
pub fn action<W, F>(name: impl Into<Cow<'static, str>>, run: F) -> Node<W>
where
    W: 'static,
    F: FnMut(&TickContext, &mut W, &mut Blackboard) -> Status + 'static,
{
    Node::new(name, Action::new(run))
}

#[inline]
pub fn condition<W, F>(name: impl Into<Cow<'static, str>>, cond: F) -> Node<W>
where
    W: 'static,
    F: FnMut(&TickContext, &W, &Blackboard) -> bool + 'static,
{
    Node::new(name, Condition::new(cond))
}
