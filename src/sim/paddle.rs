//! Paddle as seen by the physics core
//!
//! The game loop owns paddle movement; the core only reads the rectangle.

use serde::{Deserialize, Serialize};

use super::geometry::{Rect, Side};

/// A player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paddle {
    side: Side,
    rect: Rect,
}

impl Paddle {
    pub fn new(side: Side, rect: Rect) -> Self {
        Self { side, rect }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn x(&self) -> i32 {
        self.rect.x
    }

    pub fn y(&self) -> i32 {
        self.rect.y
    }

    pub(crate) fn set_y(&mut self, y: i32) {
        self.rect.y = y;
    }
}
