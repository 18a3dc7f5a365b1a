/// Trainer configuration
pub mod config;

/// Implementations of strategies for time-decaying hyperparameters
pub mod decay;

/// Gridworld environment
pub mod env;

/// Error types
pub mod error;

/// Exploration policies
pub mod exploration;

/// Dense action-value table
pub mod q_table;

/// Episode training loop
pub mod trainer;

/// Per-episode trajectory capture
pub mod trajectory;
