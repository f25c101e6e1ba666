//! Settings collection
//!
//! Defaults, then an optional JSON config file, then command-line flags,
//! then interactive prompts.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use tg_core::{ConfigError, GeneratorConfig, MAX_GRID_DIM, MIN_GRID_DIM, MIN_ROOM_SIZE, MIN_ROOMS};

/// Settings errors
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: io::Error,
    },

    #[error("invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid settings: {0}")]
    Invalid(#[from] ConfigError),

    #[error("prompt failed: {0}")]
    Prompt(#[from] io::Error),
}

/// Load a JSON config file; missing fields keep their defaults
pub fn load_config_file(path: &Path) -> Result<GeneratorConfig, SettingsError> {
    let file = File::open(path).map_err(|source| SettingsError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| SettingsError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Convert a percentage to a probability
pub fn percent(value: u8) -> f64 {
    f64::from(value) / 100.0
}

fn as_percent(p: f64) -> i64 {
    (p * 100.0).round() as i64
}

/// Line-based question and answer over any reader and writer
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_answer(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{question}: ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim().to_string())
    }

    /// Ask for a whole number in `min..=max`
    ///
    /// An empty answer takes the default; anything else malformed or out of
    /// range is asked again.
    pub fn ask_int(&mut self, label: &str, default: i64, min: i64, max: i64) -> io::Result<i64> {
        loop {
            let answer = self.read_answer(&format!("{label} [default: {default}]"))?;
            if answer.is_empty() {
                return Ok(default);
            }
            match answer.parse::<i64>() {
                Ok(v) if (min..=max).contains(&v) => return Ok(v),
                Ok(_) => writeln!(self.output, "Please enter a number between {min} and {max}.")?,
                Err(_) => writeln!(self.output, "Invalid input. Please enter a whole number.")?,
            }
        }
    }

    fn ask_usize(
        &mut self,
        label: &str,
        default: usize,
        min: usize,
        max: usize,
    ) -> io::Result<usize> {
        let v = self.ask_int(label, default as i64, min as i64, max as i64)?;
        Ok(v as usize)
    }

    /// Ask for a percentage, returned as a probability
    pub fn ask_percent(&mut self, label: &str, default: f64) -> io::Result<f64> {
        let v = self.ask_int(&format!("{label} %"), as_percent(default), 0, 100)?;
        Ok(v as f64 / 100.0)
    }

    /// Ask for free text, falling back to the default on an empty answer
    pub fn ask_text(&mut self, label: &str, default: &str) -> io::Result<String> {
        let answer = self.read_answer(&format!("{label} [default: {default}]"))?;
        Ok(if answer.is_empty() {
            default.to_string()
        } else {
            answer
        })
    }

    fn section(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.output, "\n--- {title} ---")
    }

    /// Walk through every setting, using the current values as defaults
    ///
    /// Lower bounds of paired settings follow the answer already given, so
    /// the result never has an inverted range.
    pub fn prompt_settings(
        &mut self,
        config: &mut GeneratorConfig,
        filename: &mut String,
    ) -> io::Result<()> {
        const NO_LIMIT: usize = 1000;

        writeln!(self.output, "--- Thor-Grid Dungeon Generator ---")?;

        self.section("Basic Layout")?;
        config.width = self.ask_usize("Grid Width", config.width, MIN_GRID_DIM, MAX_GRID_DIM)?;
        config.height = self.ask_usize("Grid Height", config.height, MIN_GRID_DIM, MAX_GRID_DIM)?;
        config.max_rooms =
            self.ask_usize("Number of Rooms", config.max_rooms, MIN_ROOMS, NO_LIMIT)?;
        if let Some(min_rooms) = config.min_rooms {
            config.min_rooms = Some(self.ask_usize(
                "Minimum Rooms",
                min_rooms.min(config.max_rooms),
                MIN_ROOMS,
                config.max_rooms,
            )?);
        }
        config.min_size =
            self.ask_usize("Min Room Size", config.min_size, MIN_ROOM_SIZE, NO_LIMIT)?;
        config.max_size = self.ask_usize(
            "Max Room Size",
            config.max_size.max(config.min_size),
            config.min_size,
            NO_LIMIT,
        )?;

        self.section("Dungeon Content")?;
        config.num_encounters = self.ask_usize(
            "Number of Monster Encounter Rooms",
            config.num_encounters,
            0,
            NO_LIMIT,
        )?;
        config.min_monsters =
            self.ask_usize("Min monsters per encounter", config.min_monsters, 1, NO_LIMIT)?;
        config.max_monsters = self.ask_usize(
            "Max monsters per encounter",
            config.max_monsters.max(config.min_monsters),
            config.min_monsters,
            NO_LIMIT,
        )?;
        config.num_treasures =
            self.ask_usize("Number of Treasures", config.num_treasures, 0, NO_LIMIT)?;

        self.section("Advanced Features")?;
        config.door_probability = self.ask_percent("Door Chance", config.door_probability)?;
        config.wide_corridor_chance =
            self.ask_percent("Wide Corridor Chance", config.wide_corridor_chance)?;
        config.cavern_chance =
            self.ask_percent("Jagged Corridor (Cavern) Chance", config.cavern_chance)?;
        config.room_feature_chance =
            self.ask_percent("Room Feature (Pillars/Pools) Chance", config.room_feature_chance)?;
        config.num_traps = self.ask_usize("Number of Traps", config.num_traps, 0, NO_LIMIT)?;
        config.num_secret_doors =
            self.ask_usize("Number of Secret Doors", config.num_secret_doors, 0, NO_LIMIT)?;

        writeln!(self.output)?;
        *filename = self.ask_text("Enter output filename", filename)?;
        Ok(())
    }
}
