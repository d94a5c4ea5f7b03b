//! Per-variant operations over a bracket: the `MatchVisitor` trait and the depth printer.

use crate::models::Match;

/// An operation with one entry point per node kind.
///
/// [`Match::accept`] picks the entry point from the node's shape, so callers never
/// inspect the variant themselves. Tournament visitors decide whether (and in which order)
/// to descend by calling `accept` on the brackets they are handed.
pub trait MatchVisitor {
    fn visit_single(&mut self, single: &Match);
    fn visit_tournament(&mut self, tournament: &Match, left: &Match, right: &Match);
}

impl Match {
    pub fn accept<V: MatchVisitor + ?Sized>(&self, visitor: &mut V) {
        match self.brackets() {
            None => visitor.visit_single(self),
            Some((left, right)) => visitor.visit_tournament(self, left, right),
        }
    }

    /// Pre-order walk that hands each node its depth (root = 0).
    ///
    /// Depth travels as an argument rather than shared state, so each bracket could be
    /// walked independently.
    pub fn walk_with_depth<F: FnMut(&Match, usize)>(&self, mut f: F) {
        walk_with_depth(self, 0, &mut f);
    }
}

fn walk_with_depth<F: FnMut(&Match, usize)>(node: &Match, depth: usize, f: &mut F) {
    f(node, depth);
    if let Some((left, right)) = node.brackets() {
        walk_with_depth(left, depth + 1, f);
        walk_with_depth(right, depth + 1, f);
    }
}

/// Records `[a, b, depth=D]` for every node in pre-order.
#[derive(Clone, Debug, Default)]
pub struct DepthPrinter {
    depth: usize,
    lines: Vec<String>,
}

impl DepthPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting from `depth` instead of 0 (for visiting a subtree in place).
    pub fn starting_at(depth: usize) -> Self {
        Self {
            depth,
            lines: Vec::new(),
        }
    }

    /// Current depth; back to its starting value once a visit returns.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl MatchVisitor for DepthPrinter {
    fn visit_single(&mut self, single: &Match) {
        self.lines.push(single.info(self.depth));
    }

    fn visit_tournament(&mut self, tournament: &Match, left: &Match, right: &Match) {
        self.lines.push(tournament.info(self.depth));
        // Both brackets sit one level down; restore once after the pair.
        self.depth += 1;
        left.accept(self);
        right.accept(self);
        self.depth -= 1;
    }
}
