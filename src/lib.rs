//! Rally Core - swept-collision physics for a rectangular Pong arena
//!
//! Core modules:
//! - `sim`: Deterministic simulation (hit detection, arena, ball, AI, match loop)
//! - `tuning`: Data-driven arena and ball balance

pub mod sim;
pub mod tuning;

pub use sim::{
    Arena, ArtificialIntelligence, Ball, Collision, HitDetector, Match, Paddle, PaddleMove, Rect,
    Side, SweptAabb,
};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Arena origin (top-left corner of the top and left walls)
    pub const ENVIRONMENT_X: i32 = 20;
    pub const ENVIRONMENT_Y: i32 = 20;

    /// Arena walls - every wall shares the same length and thickness
    pub const WALL_LENGTH: i32 = 500;
    pub const WALL_WIDTH: i32 = 20;

    /// Paddle defaults
    pub const PADDLE_WIDTH: i32 = 10;
    pub const PADDLE_LENGTH: i32 = 80;
    /// Paddle travel per tick (pixels)
    pub const PADDLE_SPEED: i32 = 4;

    /// Ball defaults - the ball is a square
    pub const BALL_DIMENSION: i32 = 10;

    /// Horizontal speed multiplier applied on every paddle rebound
    pub const PADDLE_REBOUND_FACTOR: f64 = 1.05;
    /// Exclusive upper bound for the re-randomized vertical speed
    pub const MAX_VERTICAL_SPEED: i32 = 5;

    /// Points needed to win a match
    pub const WIN_SCORE: u8 = 11;
}
