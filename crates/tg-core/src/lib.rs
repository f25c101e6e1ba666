//! tg-core: Procedural dungeon generation for Thor-Grid maps
//!
//! Builds a grid of floor and wall cells from rooms and corridors, then
//! places tokens on it. Everything here is pure: randomness comes from an
//! explicit [`GameRng`] and nothing touches the filesystem.

pub mod config;
pub mod dungeon;
pub mod error;
pub mod populate;

mod consts;
mod rng;

pub use config::GeneratorConfig;
pub use consts::*;
pub use error::{ConfigError, DiceError, GenerationError, TemplateError};
pub use rng::GameRng;
