use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::input::{Direction, direction_change_is_valid};

/// Grid position in logical cell coordinates.
///
/// Coordinates are signed so that a prospective head one step past the
/// border can be represented and rejected.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring position one step in `direction`.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Ordered snake body (head first) and its travel direction.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
}

impl Snake {
    /// Creates a one-cell snake at `start` with the provided direction.
    #[must_use]
    pub fn new(start: Position, direction: Direction) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self { body, direction }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// Returns `None` for an empty body.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }

        Some(Self {
            body: VecDeque::from(segments),
            direction,
        })
    }

    /// Returns the head position for the next movement in `direction`.
    #[must_use]
    pub fn next_head(&self, direction: Direction) -> Position {
        self.head().stepped(direction)
    }

    /// Moves the body onto `next_head`.
    ///
    /// Without food the tail is dropped and returned so the caller can clear
    /// its cell. With food nothing is dropped and the length grows by one.
    pub fn advance(&mut self, next_head: Position, ate_food: bool) -> Option<Position> {
        self.body.push_front(next_head);
        if ate_food {
            None
        } else {
            self.body.pop_back()
        }
    }

    /// Changes travel direction unless it would reverse onto the neck.
    ///
    /// Returns whether the change was applied.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if !direction_change_is_valid(self.direction, direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
