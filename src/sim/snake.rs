//! Segment chain

use serde::{Deserialize, Serialize};

use super::grid::Cell;
use super::state::Direction;

/// Ordered body cells, head at index 0. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    segments: Vec<Cell>,
}

impl Snake {
    /// Single-segment snake
    pub fn new(head: Cell) -> Self {
        Self {
            segments: vec![head],
        }
    }

    /// Build from explicit segments (head first). Returns None when empty.
    pub fn from_segments(segments: Vec<Cell>) -> Option<Self> {
        if segments.is_empty() {
            None
        } else {
            Some(Self { segments })
        }
    }

    pub fn head(&self) -> Cell {
        self.segments[0]
    }

    pub fn tail(&self) -> Cell {
        self.segments[self.segments.len() - 1]
    }

    pub fn segments(&self) -> &[Cell] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Never true for a constructed snake
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.segments.contains(&cell)
    }

    /// Where the head would land moving one step in `direction`
    pub fn next_head(&self, direction: Direction) -> Cell {
        self.head() + direction.delta()
    }

    /// True if `candidate` hits any current segment, tail included.
    ///
    /// The tail is checked before it would be trimmed, so stepping into the
    /// cell the tail is about to vacate counts as a collision.
    pub fn collides(&self, candidate: Cell) -> bool {
        self.contains(candidate)
    }

    /// Next chain: head moved one step, tail dropped unless `grew`
    pub fn advanced(&self, direction: Direction, grew: bool) -> Snake {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.push(self.next_head(direction));
        segments.extend_from_slice(&self.segments);
        if !grew {
            segments.pop();
        }
        Snake { segments }
    }

    /// True if no two segments share a cell
    pub fn is_self_disjoint(&self) -> bool {
        self.segments
            .iter()
            .enumerate()
            .all(|(i, a)| !self.segments[i + 1..].contains(a))
    }
}
