//! Generator settings
//!
//! One record drives the whole pipeline. Defaults match the advanced-features
//! generator; `validate` is the single gate every entry point goes through.

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_ROOM_BUFFER, MAX_ENCOUNTER_MONSTERS, MAX_GRID_DIM, MAX_ROOM_BUFFER, MAX_ROOMS,
    MIN_GRID_DIM, MIN_ROOM_SIZE, MIN_ROOMS, PLACEMENT_ATTEMPTS_PER_ROOM,
};
use crate::dungeon::{ConnectionStrategy, DoorHeuristic};
use crate::error::ConfigError;

/// Dungeon generation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Grid width in cells
    pub width: usize,
    /// Grid height in cells
    pub height: usize,
    /// Rooms to attempt
    pub max_rooms: usize,
    /// When set, the room target is drawn from `min_rooms..=max_rooms` and
    /// placing fewer than `min_rooms` is fatal
    pub min_rooms: Option<usize>,
    /// Smallest room side
    pub min_size: usize,
    /// Largest room side
    pub max_size: usize,
    /// Required clearance between rooms
    pub buffer: usize,

    /// Rooms that receive a monster encounter
    pub num_encounters: usize,
    pub min_monsters: usize,
    pub max_monsters: usize,
    pub num_treasures: usize,
    pub num_traps: usize,
    pub num_secret_doors: usize,

    /// Chance that a carved wall becomes a door
    pub door_probability: f64,
    pub wide_corridor_chance: f64,
    pub cavern_chance: f64,
    /// Chance that a large enough room gets pillars or a pool
    pub room_feature_chance: f64,

    pub connection: ConnectionStrategy,
    pub doors: DoorHeuristic,
    /// Join jittered cavern cells so the corridor stays 4-connected
    pub stitch_caverns: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 60,
            max_rooms: 10,
            min_rooms: None,
            min_size: 6,
            max_size: 12,
            buffer: DEFAULT_ROOM_BUFFER,
            num_encounters: 4,
            min_monsters: 1,
            max_monsters: 4,
            num_treasures: 2,
            num_traps: 3,
            num_secret_doors: 2,
            door_probability: 0.8,
            wide_corridor_chance: 0.2,
            cavern_chance: 0.15,
            room_feature_chance: 0.4,
            connection: ConnectionStrategy::default(),
            doors: DoorHeuristic::default(),
            stitch_caverns: true,
        }
    }
}

impl GeneratorConfig {
    /// Check every field against its allowed range
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("width", self.width, MIN_GRID_DIM, MAX_GRID_DIM)?;
        check_range("height", self.height, MIN_GRID_DIM, MAX_GRID_DIM)?;
        check_range("max_rooms", self.max_rooms, MIN_ROOMS, MAX_ROOMS)?;
        if let Some(min_rooms) = self.min_rooms {
            check_order("min_rooms", min_rooms, "max_rooms", self.max_rooms)?;
        }
        check_range("min_size", self.min_size, MIN_ROOM_SIZE, MAX_GRID_DIM)?;
        check_range("max_size", self.max_size, MIN_ROOM_SIZE, MAX_GRID_DIM)?;
        check_order("min_size", self.min_size, "max_size", self.max_size)?;
        check_range("buffer", self.buffer, 0, MAX_ROOM_BUFFER)?;
        check_range("min_monsters", self.min_monsters, 1, MAX_ENCOUNTER_MONSTERS)?;
        check_range("max_monsters", self.max_monsters, 1, MAX_ENCOUNTER_MONSTERS)?;
        check_order("min_monsters", self.min_monsters, "max_monsters", self.max_monsters)?;

        check_probability("door_probability", self.door_probability)?;
        check_probability("wide_corridor_chance", self.wide_corridor_chance)?;
        check_probability("cavern_chance", self.cavern_chance)?;
        check_probability("room_feature_chance", self.room_feature_chance)?;
        Ok(())
    }

    /// Fewest rooms a successful generation may produce
    pub fn required_rooms(&self) -> usize {
        self.min_rooms.unwrap_or(0).max(MIN_ROOMS)
    }

    /// Placement attempt budget for a given room target
    pub fn placement_attempts(target: usize) -> usize {
        target.saturating_mul(PLACEMENT_ATTEMPTS_PER_ROOM)
    }
}

fn check_range(
    field: &'static str,
    value: usize,
    min: usize,
    max: usize,
) -> Result<(), ConfigError> {
    if value < min || value > max {
        return Err(ConfigError::OutOfRange { field, value, min, max });
    }
    Ok(())
}

fn check_order(
    low: &'static str,
    low_value: usize,
    high: &'static str,
    high_value: usize,
) -> Result<(), ConfigError> {
    if low_value > high_value {
        return Err(ConfigError::InvertedRange { low, low_value, high, high_value });
    }
    Ok(())
}

fn check_probability(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::Probability { field, value });
    }
    Ok(())
}
