//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One discrete step per tick
//! - Seeded RNG only
//! - Integer geometry throughout
//! - No rendering or platform dependencies

pub mod ai;
pub mod arena;
pub mod ball;
pub mod collision;
pub mod geometry;
pub mod paddle;
pub mod rally;

pub use ai::{ArtificialIntelligence, PaddleMove, Prediction};
pub use arena::Arena;
pub use ball::Ball;
pub use collision::{Collision, HitDetector, SweptAabb};
pub use geometry::{Rect, Side};
pub use paddle::Paddle;
pub use rally::{Controller, Match, Score, TickEvent, TickInput};
