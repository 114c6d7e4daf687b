//! Frontier containers: the discovered-but-not-yet-expanded cells.
//!
//! The engine only talks to [`Frontier`]; each algorithm picks the
//! container that gives it its visiting order.

use std::collections::{BinaryHeap, VecDeque};

use maze_core::Point;

/// A container of cells waiting to be dequeued.
pub trait Frontier {
    /// Add `p`. Containers without an ordering ignore `priority`.
    fn push(&mut self, p: Point, priority: i32);

    /// Remove the next cell to dequeue.
    fn pop(&mut self) -> Option<Point>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First in, first out (breadth-first).
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<Point>,
}

impl Frontier for FifoFrontier {
    fn push(&mut self, p: Point, _priority: i32) {
        self.queue.push_back(p);
    }

    fn pop(&mut self) -> Option<Point> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Last in, first out (depth-first).
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<Point>,
}

impl Frontier for LifoFrontier {
    fn push(&mut self, p: Point, _priority: i32) {
        self.stack.push(p);
    }

    fn pop(&mut self) -> Option<Point> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

/// Heap entry ordered by priority, then by insertion sequence.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Entry {
    priority: i32,
    seq: u64,
    pos: Point,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest priority first,
        // and the earliest insertion among equals.
        other
            .priority
            .cmp(&self.priority)
            .then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue with stable ordering among equal priorities.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<Entry>,
    seq: u64,
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, pos: Point, priority: i32) {
        self.heap.push(Entry {
            priority,
            seq: self.seq,
            pos,
        });
        self.seq += 1;
    }

    fn pop(&mut self) -> Option<Point> {
        self.heap.pop().map(|e| e.pos)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
