use std::collections::VecDeque;

use crate::geometry::{Direction, Grid, Position};

/// The player's segment chain. The body is stored tail first, so the head is
/// always the back of the deque.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    next_direction: Direction,
    length: usize,
    cell_size: i32,
}

impl Snake {
    /// A single segment in the middle of the grid, standing still.
    pub fn new(grid: &Grid) -> Self {
        Self::from_segments(grid, [grid.center()], Direction::None)
    }

    /// Builds a snake from explicit segments, tail first. The target length is
    /// the number of segments given.
    ///
    /// # Panics
    ///
    /// Panics if `segments` is empty.
    pub fn from_segments(
        grid: &Grid,
        segments: impl IntoIterator<Item = Position>,
        direction: Direction,
    ) -> Self {
        let body: VecDeque<Position> = segments.into_iter().collect();
        assert!(!body.is_empty(), "a snake needs at least one segment");
        Self {
            length: body.len(),
            body,
            direction,
            next_direction: direction,
            cell_size: grid.cell_size(),
        }
    }

    /// Queues a turn for the next [`advance`](Self::advance). A turn straight
    /// back onto the body is refused; the return value says whether the turn
    /// was taken.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if !self.direction.is_none() && direction == self.direction.opposite() {
            return false;
        }
        self.next_direction = direction;
        true
    }

    /// Moves the head one cell along the queued direction and drops the tail
    /// once the body is longer than the target length.
    pub fn advance(&mut self) {
        self.direction = self.next_direction;
        if self.direction.is_none() {
            return;
        }
        let new_head = self.head().step(self.direction, self.cell_size);
        self.body.push_back(new_head);
        while self.body.len() > self.length {
            self.body.pop_front();
        }
    }

    /// True when the head has left the grid or overlaps another segment.
    pub fn has_collided(&self, grid: &Grid) -> bool {
        let head = self.head();
        if !grid.contains(head) {
            return true;
        }
        self.body.iter().rev().skip(1).any(|segment| *segment == head)
    }

    /// Lets the body keep one more segment from the next move on.
    pub fn grow(&mut self) {
        self.length += 1;
    }

    pub fn head(&self) -> Position {
        // The body is never empty: it starts with a segment and advance()
        // only trims down to `length`, which is at least one.
        self.body[self.body.len() - 1]
    }

    /// Segments from tail to head.
    pub fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn target_length(&self) -> usize {
        self.length
    }

    /// The direction the snake last moved in.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The direction the next move will take.
    pub fn queued_direction(&self) -> Direction {
        self.next_direction
    }
}
