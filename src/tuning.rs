//! Data-driven arena and ball balance
//!
//! Defaults come from [`crate::consts`]; any field may be overridden from JSON.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating tuning data
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("invalid tuning json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid tuning value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Arena geometry and ball response tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Arena origin
    pub environment_x: i32,
    pub environment_y: i32,

    // === Walls ===
    pub wall_length: i32,
    pub wall_width: i32,

    // === Paddles ===
    pub paddle_width: i32,
    pub paddle_length: i32,
    pub paddle_speed: i32,

    // === Ball ===
    pub ball_dimension: i32,
    /// Multiplier applied to the horizontal speed on a paddle rebound
    pub paddle_rebound_factor: f64,
    /// Exclusive bound of the vertical speed picked on a paddle rebound
    pub max_vertical_speed: i32,

    // === Match ===
    pub win_score: u8,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            environment_x: ENVIRONMENT_X,
            environment_y: ENVIRONMENT_Y,

            wall_length: WALL_LENGTH,
            wall_width: WALL_WIDTH,

            paddle_width: PADDLE_WIDTH,
            paddle_length: PADDLE_LENGTH,
            paddle_speed: PADDLE_SPEED,

            ball_dimension: BALL_DIMENSION,
            paddle_rebound_factor: PADDLE_REBOUND_FACTOR,
            max_vertical_speed: MAX_VERTICAL_SPEED,

            win_score: WIN_SCORE,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        log::info!(
            "Loaded tuning: arena {}x{}, ball {}",
            tuning.wall_length,
            tuning.wall_length,
            tuning.ball_dimension
        );
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject geometry the physics cannot work with
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("wall_length", self.wall_length),
            ("wall_width", self.wall_width),
            ("paddle_width", self.paddle_width),
            ("paddle_length", self.paddle_length),
            ("paddle_speed", self.paddle_speed),
            ("ball_dimension", self.ball_dimension),
            ("max_vertical_speed", self.max_vertical_speed),
        ];
        for (field, value) in positive {
            if value <= 0 {
                return Err(TuningError::Invalid {
                    field,
                    reason: "must be positive",
                });
            }
        }

        if self.paddle_rebound_factor < 1.0 || !self.paddle_rebound_factor.is_finite() {
            return Err(TuningError::Invalid {
                field: "paddle_rebound_factor",
                reason: "must be a finite value of at least 1.0",
            });
        }

        // Walls, two paddles with their gaps and the ball must fit across the arena
        let inner_width = self.wall_length - 2 * self.wall_width;
        if inner_width <= 4 * self.paddle_width + self.ball_dimension {
            return Err(TuningError::Invalid {
                field: "wall_length",
                reason: "arena too narrow for paddles and ball",
            });
        }
        if self.paddle_length >= self.wall_length - self.wall_width {
            return Err(TuningError::Invalid {
                field: "paddle_length",
                reason: "paddle longer than the arena",
            });
        }

        if self.win_score == 0 {
            return Err(TuningError::Invalid {
                field: "win_score",
                reason: "must be at least 1",
            });
        }

        Ok(())
    }

    /// Length of the arena diagonal, rounded up
    pub fn arena_diagonal(&self) -> u32 {
        let side = f64::from(self.wall_length + self.wall_width);
        (side * std::f64::consts::SQRT_2).ceil() as u32
    }
}
