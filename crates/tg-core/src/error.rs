//! Error types for configuration, generation, and dice parsing

use thiserror::Error;

/// Invalid generator settings
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },

    #[error("{low} ({low_value}) must not exceed {high} ({high_value})")]
    InvertedRange {
        low: &'static str,
        low_value: usize,
        high: &'static str,
        high_value: usize,
    },

    #[error("{field} must be a probability in [0, 1], got {value}")]
    Probability { field: &'static str, value: f64 },
}

/// Fatal generation failures
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(
        "placed {placed} of {required} required rooms; try a larger grid or smaller rooms"
    )]
    InsufficientRooms { placed: usize, required: usize },
}

/// Malformed hit-dice expression
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceError {
    #[error("hit dice '{0}' is missing the 'd' separator")]
    MissingSeparator(String),

    #[error("hit dice '{expr}' has an invalid number '{part}'")]
    InvalidNumber { expr: String, part: String },

    #[error("hit dice '{0}' needs at least one die with at least one side")]
    Empty(String),

    #[error("hit dice '{expr}' exceeds {max_count} dice of {max_sides} sides")]
    TooLarge {
        expr: String,
        max_count: u32,
        max_sides: u32,
    },
}

/// Monster template that cannot be placed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("monster '{name}' has size {size}; sizes run from 1 to {max}")]
    Size { name: String, size: u32, max: u32 },

    #[error("monster '{name}': {source}")]
    Dice { name: String, source: DiceError },
}
