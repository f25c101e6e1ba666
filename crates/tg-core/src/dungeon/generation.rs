//! Dungeon layout generation
//!
//! Runs the topology pipeline: room placement, connection, corridor carving,
//! wall inference, door detection, room features and secret doors.

use std::collections::BTreeSet;

use log::{debug, info};

use crate::config::GeneratorConfig;
use crate::error::GenerationError;
use crate::rng::GameRng;

use super::{
    add_room_features, carve_cells, carve_rooms, connect_rooms, detect_destroyed_wall_doors,
    infer_walls, pick_secret_doors, place_rooms, room_interior_tiles, target_room_count,
    CellType, ConnectivityTracker, CorridorStyle, DoorHeuristic, Grid, LPath, PlacementParams,
    Pos, Rectangle, RoomFeature,
};

/// A generated dungeon before population
#[derive(Debug, Clone)]
pub struct DungeonLayout {
    /// Final grid
    pub grid: Grid,
    /// Grid after rooms and their walls were built, before any corridor
    pub pre_corridor: Grid,
    /// Rooms sorted by center x
    pub rooms: Vec<Rectangle>,
    /// Room index pairs joined by a corridor, in carving order
    pub connections: Vec<(usize, usize)>,
    /// Every cell carved as corridor
    pub path_tiles: BTreeSet<Pos>,
    pub doors: BTreeSet<Pos>,
    pub secret_doors: Vec<Pos>,
    pub features: Vec<RoomFeature>,
}

impl DungeonLayout {
    /// Leftmost room
    pub fn start_room(&self) -> Option<&Rectangle> {
        self.rooms.first()
    }

    /// Rightmost room
    pub fn exit_room(&self) -> Option<&Rectangle> {
        self.rooms.last()
    }

    /// Every room-interior coordinate
    pub fn room_tiles(&self) -> BTreeSet<Pos> {
        room_interior_tiles(&self.rooms)
    }

    /// Pools produced by room features
    pub fn pools(&self) -> impl Iterator<Item = &Rectangle> + '_ {
        self.features.iter().filter_map(|f| match f {
            RoomFeature::Pool(area) => Some(area),
            RoomFeature::Pillars(_) => None,
        })
    }
}

/// Generate a dungeon layout
///
/// Fails if the config is invalid or too few rooms fit on the grid.
pub fn generate_layout(
    config: &GeneratorConfig,
    rng: &mut GameRng,
) -> Result<DungeonLayout, GenerationError> {
    config.validate()?;

    let target = target_room_count(config, rng);
    let rooms = place_rooms(&PlacementParams::from_config(config, target), rng);
    let required = config.required_rooms();
    if rooms.len() < required {
        return Err(GenerationError::InsufficientRooms {
            placed: rooms.len(),
            required,
        });
    }
    info!("placed {} rooms", rooms.len());

    let mut grid = Grid::new(config.width, config.height);
    carve_rooms(&mut grid, &rooms);
    let pre_corridor = grid.clone();

    let connections = connect_rooms(&rooms, config.connection);
    debug_assert!(ConnectivityTracker::from_connections(rooms.len(), &connections).all_connected());
    info!(
        "carving {} corridors ({} connection)",
        connections.len(),
        config.connection
    );

    let door_chance = match config.doors {
        DoorHeuristic::Carve => Some(config.door_probability),
        DoorHeuristic::DestroyedWall => None,
    };
    let mut path_tiles = BTreeSet::new();
    let mut doors = BTreeSet::new();
    for &(a, b) in &connections {
        let style = CorridorStyle::roll(rng, config.wide_corridor_chance, config.cavern_chance);
        let path = LPath::random(rooms[a].center(), rooms[b].center(), rng);
        let cells = path.rasterize(style, config.stitch_caverns, rng);
        let carved = carve_cells(&mut grid, &cells, door_chance, rng, &mut path_tiles, &mut doors);
        debug!("corridor {a} -> {b}: {style}, {:?}, {carved} cells", path.elbow);
    }

    infer_walls(&mut grid);
    debug!(
        "{} floor and {} wall cells",
        grid.count(CellType::Floor),
        grid.count(CellType::Wall)
    );

    if config.doors == DoorHeuristic::DestroyedWall {
        doors = detect_destroyed_wall_doors(
            &pre_corridor,
            &grid,
            &room_interior_tiles(&rooms),
            config.door_probability,
            rng,
        );
    }
    info!("{} doors", doors.len());

    let features = add_room_features(&mut grid, &rooms, config.room_feature_chance, rng);
    let secret_doors = pick_secret_doors(&grid, config.num_secret_doors, rng);

    Ok(DungeonLayout {
        grid,
        pre_corridor,
        rooms,
        connections,
        path_tiles,
        doors,
        secret_doors,
        features,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let mut rng = GameRng::new(42);
        let layout = generate_layout(&GeneratorConfig::default(), &mut rng).unwrap();
        assert!(layout.rooms.len() >= 2);
        assert_eq!(layout.connections.len(), layout.rooms.len() - 1);
        assert_eq!(layout.grid.width(), 80);
        assert_eq!(layout.grid.height(), 60);
        assert!(layout.start_room().is_some());
        assert_ne!(layout.start_room(), layout.exit_room());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut rng = GameRng::new(42);
        let config = GeneratorConfig {
            width: 10,
            ..Default::default()
        };
        assert!(matches!(
            generate_layout(&config, &mut rng),
            Err(GenerationError::Config(_))
        ));
    }

    #[test]
    fn test_insufficient_rooms() {
        let mut rng = GameRng::new(42);
        let config = GeneratorConfig {
            width: 20,
            height: 20,
            max_rooms: 2,
            min_size: 12,
            max_size: 12,
            ..Default::default()
        };
        assert!(matches!(
            generate_layout(&config, &mut rng),
            Err(GenerationError::InsufficientRooms { required: 2, .. })
        ));
    }

    #[test]
    fn test_same_seed_same_layout() {
        let config = GeneratorConfig::default();
        let a = generate_layout(&config, &mut GameRng::new(99)).unwrap();
        let b = generate_layout(&config, &mut GameRng::new(99)).unwrap();
        assert_eq!(a.grid, b.grid);
        assert_eq!(a.rooms, b.rooms);
        assert_eq!(a.doors, b.doors);
        assert_eq!(a.secret_doors, b.secret_doors);
    }

    #[test]
    fn test_doors_were_walls() {
        for doors in [DoorHeuristic::Carve, DoorHeuristic::DestroyedWall] {
            let config = GeneratorConfig {
                doors,
                door_probability: 1.0,
                ..Default::default()
            };
            let layout = generate_layout(&config, &mut GameRng::new(5)).unwrap();
            for &(x, y) in &layout.doors {
                assert!(layout.pre_corridor.is(x, y, CellType::Wall));
                assert!(layout.grid.is(x, y, CellType::Floor));
            }
        }
    }

    #[test]
    fn test_pre_corridor_has_only_rooms() {
        let layout = generate_layout(&GeneratorConfig::default(), &mut GameRng::new(8)).unwrap();
        let tiles = layout.room_tiles();
        let floor: BTreeSet<Pos> = layout.pre_corridor.positions_of(CellType::Floor).collect();
        assert_eq!(floor, tiles);
    }
}
