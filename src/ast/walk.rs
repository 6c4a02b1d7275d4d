//! Whole-tree walks.
//!
//! Both walks borrow the tree and keep their own cursor, so each call starts
//! a fresh, independent traversal.

use super::NodeRef;
use std::collections::VecDeque;

/// Post-order walk: every descendant of a list is yielded before the list.
pub struct DepthFirst<'a> {
    // (node, index of the next child to descend into)
    stack: Vec<(NodeRef<'a>, usize)>,
}

/// Level-order walk: the root, then its children, then theirs.
pub struct BreadthFirst<'a> {
    queue: VecDeque<NodeRef<'a>>,
}

pub fn depth_first<'a>(node: impl Into<NodeRef<'a>>) -> DepthFirst<'a> {
    DepthFirst::new(node.into())
}

pub fn breadth_first<'a>(root: impl Into<NodeRef<'a>>) -> BreadthFirst<'a> {
    BreadthFirst::new(root.into())
}

impl<'a> DepthFirst<'a> {
    pub fn new(node: NodeRef<'a>) -> Self {
        Self {
            stack: vec![(node, 0)],
        }
    }
}

impl<'a> Iterator for DepthFirst<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, cursor) = self.stack.last_mut()?;
            let child = match *node {
                NodeRef::List(list) => list.items().get(*cursor),
                NodeRef::Atom(_) => None,
            };
            match child {
                Some(child) => {
                    *cursor += 1;
                    self.stack.push((NodeRef::from(child), 0));
                }
                None => return self.stack.pop().map(|(node, _)| node),
            }
        }
    }
}

impl<'a> BreadthFirst<'a> {
    pub fn new(root: NodeRef<'a>) -> Self {
        Self {
            queue: VecDeque::from([root]),
        }
    }
}

impl<'a> Iterator for BreadthFirst<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        if let NodeRef::List(list) = node {
            self.queue.extend(list.items().iter().map(NodeRef::from));
        }
        Some(node)
    }
}
