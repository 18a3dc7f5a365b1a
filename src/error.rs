use thiserror::Error;

use crate::env::Pos;

/// Rejected training configuration
///
/// Every variant is fatal at construction: a [`Trainer`](crate::trainer::Trainer)
/// refuses to start rather than run with these values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("grid size must be at least 2, got {0}")]
    GridTooSmall(usize),

    #[error("{name} state ({},{}) lies outside the {size}x{size} grid", .state.0, .state.1)]
    StateOutOfBounds {
        name: &'static str,
        state: Pos,
        size: usize,
    },

    #[error("learning rate must be in (0, 1], got {0}")]
    InvalidLearningRate(f32),

    #[error("discount factor must be in [0, 1], got {0}")]
    InvalidDiscountFactor(f32),

    #[error("exploration rate must be in [0, 1], got {0}")]
    InvalidExplorationRate(f32),

    #[error("episode count must be positive")]
    NoEpisodes,

    #[error("step limit must be positive")]
    NoStepLimit,
}

/// Rejected decay schedule: the value cannot reach its terminal in the given direction
#[derive(Error, Debug, Clone, PartialEq)]
#[error("decay from {initial} to {terminal} is inconsistent with rate {rate}")]
pub struct DecayError {
    pub rate: f32,
    pub initial: f32,
    pub terminal: f32,
}
