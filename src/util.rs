use std::collections::VecDeque;

use crate::tree::{Node, Tree};

/// Breadth-first walk over a tree yielding one full level at a time, left to right.
pub(crate) struct Levels<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> Levels<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>) -> Self {
        Self {
            queue: tree.root().into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for Levels<'a, T> {
    type Item = Vec<&'a Node<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.queue.is_empty() {
            return None;
        }

        // Everything queued right now is exactly the current level.
        let level: Vec<_> = self.queue.drain(..).collect();
        for node in &level {
            self.queue.extend(node.left());
            self.queue.extend(node.right());
        }
        Some(level)
    }
}
