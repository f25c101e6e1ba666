//! Generator constants
//!
//! Limits and defaults shared by the pipeline stages and the settings layer.

/// Grid dimension limits (both axes)
pub const MIN_GRID_DIM: usize = 20;
pub const MAX_GRID_DIM: usize = 1000;

/// Smallest legal room side
pub const MIN_ROOM_SIZE: usize = 4;

/// A dungeon needs at least a start room and an exit room
pub const MIN_ROOMS: usize = 2;

/// Most rooms a config may ask for: smallest rooms one cell apart on the
/// largest grid
pub const MAX_ROOMS: usize =
    (MAX_GRID_DIM / (MIN_ROOM_SIZE + 1)) * (MAX_GRID_DIM / (MIN_ROOM_SIZE + 1));

/// Largest room clearance a config may ask for
pub const MAX_ROOM_BUFFER: usize = MAX_GRID_DIM;

/// Most monsters a single encounter may ask for
pub const MAX_ENCOUNTER_MONSTERS: usize = 1000;

/// Largest monster footprint side
pub const MAX_MONSTER_SIZE: u32 = MAX_GRID_DIM as u32;

/// Hit-dice limits accepted from roster files
pub const MAX_DICE_COUNT: u32 = 1000;
pub const MAX_DICE_SIDES: u32 = 1000;

/// Placement attempts granted per requested room
pub const PLACEMENT_ATTEMPTS_PER_ROOM: usize = 20;

/// Default clearance between rooms, in cells
pub const DEFAULT_ROOM_BUFFER: usize = 2;

/// Rooms smaller than this on either side get no pillars or pools
pub const MIN_FEATURE_ROOM_SIZE: i32 = 5;

/// Pillars attempted per pillared room
pub const MIN_PILLARS: i32 = 2;
pub const MAX_PILLARS: i32 = 4;

/// Random draws spent looking for a free treasure spot before using the room center
pub const TREASURE_SPOT_ATTEMPTS: usize = 10;

/// Initiative die
pub const INITIATIVE_DIE: u32 = 20;

/// Owner assigned to every generated token
pub const DM_OWNER: &str = "DM";

/// Format tag written to the map document
pub const MAP_VERSION: &str = "vtt-advanced-features-1.0";
