//! Pre-order (stack) and level-order (queue) iterators over a bracket, plus the recursive pre-order walk.

use crate::models::Match;
use std::collections::VecDeque;
use std::iter::FusedIterator;

/// Depth-first, pre-order iterator backed by an explicit stack.
///
/// Right brackets are pushed before left ones, so a left subtree is exhausted before
/// anything from the right subtree is yielded.
#[derive(Clone, Debug)]
pub struct Dfs<'a> {
    stack: Vec<&'a Match>,
}

impl<'a> Dfs<'a> {
    pub fn new(root: &'a Match) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a> Iterator for Dfs<'a> {
    type Item = &'a Match;

    fn next(&mut self) -> Option<&'a Match> {
        let node = self.stack.pop()?;
        if let Some((left, right)) = node.brackets() {
            self.stack.push(right);
            self.stack.push(left);
        }
        Some(node)
    }
}

impl FusedIterator for Dfs<'_> {}

/// Breadth-first (level-order) iterator backed by a queue.
#[derive(Clone, Debug)]
pub struct Bfs<'a> {
    queue: VecDeque<&'a Match>,
}

impl<'a> Bfs<'a> {
    pub fn new(root: &'a Match) -> Self {
        Self {
            queue: VecDeque::from([root]),
        }
    }
}

impl<'a> Iterator for Bfs<'a> {
    type Item = &'a Match;

    fn next(&mut self) -> Option<&'a Match> {
        let node = self.queue.pop_front()?;
        if let Some((left, right)) = node.brackets() {
            self.queue.push_back(left);
            self.queue.push_back(right);
        }
        Some(node)
    }
}

impl FusedIterator for Bfs<'_> {}

impl Match {
    /// Fresh pre-order iterator rooted at this match.
    pub fn dfs(&self) -> Dfs<'_> {
        Dfs::new(self)
    }

    /// Fresh level-order iterator rooted at this match.
    pub fn bfs(&self) -> Bfs<'_> {
        Bfs::new(self)
    }

    /// Recursive pre-order walk: the node, then its left bracket, then its right bracket.
    /// Bounded by the call stack, unlike [`Match::dfs`].
    pub fn walk_preorder<F: FnMut(&Match)>(&self, mut f: F) {
        walk_preorder(self, &mut f);
    }
}

fn walk_preorder<F: FnMut(&Match)>(node: &Match, f: &mut F) {
    f(node);
    if let Some((left, right)) = node.brackets() {
        walk_preorder(left, f);
        walk_preorder(right, f);
    }
}

/// One line of output: every node as `[a, b]`, separated by spaces.
pub fn format_walk<'a, I>(nodes: I) -> String
where
    I: IntoIterator<Item = &'a Match>,
{
    nodes
        .into_iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
