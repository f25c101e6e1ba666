//! tg-export: Thor-Grid map documents
//!
//! Builds the JSON map document from a generated dungeon and writes it to
//! disk.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use tg_core::dungeon::{generate_layout, DungeonLayout, Grid};
use tg_core::populate::{populate, MonsterTemplate, Token};
use tg_core::{GameRng, GenerationError, GeneratorConfig, MAP_VERSION};
use tg_data::RosterError;

/// Filename used when none is given
pub const DEFAULT_FILENAME: &str = "advanced_dungeon.json";

/// Directory created under the desktop for generated maps
pub const OUTPUT_DIR_NAME: &str = "VTT_Dungeons";

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    RosterLoad(#[from] RosterError),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> ExportError + '_ {
    move |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Map dimensions in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub width: usize,
    pub height: usize,
}

/// Map document read by the Thor-Grid viewer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapDocument {
    pub tokens: Vec<Token>,
    /// Row-major wall mask, 1 = wall
    pub walls: Vec<Vec<u8>>,
    pub is_grid_visible: bool,
    pub is_map_fully_visible: bool,
    pub background_image_url: String,
    pub grid_size: GridSize,
    pub version: String,
}

impl MapDocument {
    pub fn new(layout: &DungeonLayout, tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            walls: layout.grid.wall_mask(),
            is_grid_visible: true,
            is_map_fully_visible: false,
            background_image_url: String::new(),
            grid_size: GridSize {
                width: layout.grid.width(),
                height: layout.grid.height(),
            },
            version: MAP_VERSION.to_string(),
        }
    }

    /// Wall/non-wall grid rebuilt from the mask
    pub fn grid(&self) -> Option<Grid> {
        Grid::from_wall_mask(&self.walls)
    }

    pub fn to_json_pretty(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Generate and populate a dungeon
pub fn generate_map(
    config: &GeneratorConfig,
    roster: &[MonsterTemplate],
    rng: &mut GameRng,
) -> Result<MapDocument, GenerationError> {
    let layout = generate_layout(config, rng)?;
    let tokens = populate(&layout, config, roster, rng);
    Ok(MapDocument::new(&layout, tokens))
}

/// Write a map document as pretty-printed JSON
pub fn write_map(doc: &MapDocument, path: impl AsRef<Path>) -> Result<(), ExportError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(io_error(path))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, doc)?;
    writer.flush().map_err(io_error(path))?;
    Ok(())
}

/// Load a map document
pub fn load_map(path: impl AsRef<Path>) -> Result<MapDocument, ExportError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(io_error(path))?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

/// `VTT_Dungeons` under the desktop, falling back to home, then the
/// current directory
pub fn default_output_dir() -> PathBuf {
    dirs::desktop_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(OUTPUT_DIR_NAME)
}

/// Append `.json` unless the name already ends with it
pub fn ensure_json_extension(filename: &str) -> String {
    if filename.ends_with(".json") {
        filename.to_string()
    } else {
        format!("{filename}.json")
    }
}

/// Full output path, creating the directory if needed
pub fn resolve_output_path(dir: Option<&Path>, filename: &str) -> Result<PathBuf, ExportError> {
    let dir = dir.map_or_else(default_output_dir, Path::to_path_buf);
    std::fs::create_dir_all(&dir).map_err(io_error(&dir))?;
    Ok(dir.join(ensure_json_extension(filename)))
}

/// Generate a dungeon and write it to `path`
///
/// Nothing is written when generation fails.
pub fn export_dungeon(
    config: &GeneratorConfig,
    roster: &[MonsterTemplate],
    rng: &mut GameRng,
    path: impl AsRef<Path>,
) -> Result<MapDocument, ExportError> {
    let doc = generate_map(config, roster, rng)?;
    write_map(&doc, &path)?;
    info!(
        "dungeon saved to {} ({} tokens)",
        path.as_ref().display(),
        doc.tokens.len()
    );
    Ok(doc)
}
