//! Thor-Grid dungeon generator
//!
//! Command-line entry point: collects settings, generates one dungeon and
//! writes it as a Thor-Grid map file.

mod settings;

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;
use thiserror::Error;

use tg_core::dungeon::{ConnectionStrategy, DoorHeuristic};
use tg_core::{GameRng, GeneratorConfig};
use tg_data::roster_or_manual;
use tg_export::{export_dungeon, resolve_output_path, ExportError, DEFAULT_FILENAME};

use settings::{load_config_file, percent, Prompter, SettingsError};

/// Procedural dungeon generator for Thor-Grid
#[derive(Parser, Debug)]
#[command(name = "thorgrid")]
#[command(
    author,
    version,
    about = "Generate a dungeon map for the Thor-Grid tabletop",
    long_about = None
)]
struct Args {
    /// JSON file with generator settings
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// JSON monster roster replacing the built-in manual
    #[arg(short = 'r', long = "roster")]
    roster: Option<PathBuf>,

    /// Directory to write the map into (default: VTT_Dungeons on the desktop)
    #[arg(short = 'o', long = "output-dir")]
    output_dir: Option<PathBuf>,

    /// Output filename; `.json` is appended if missing
    #[arg(short = 'f', long = "filename")]
    filename: Option<String>,

    /// Seed for a reproducible map
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Ask for every setting on the terminal
    #[arg(short = 'i', long = "interactive")]
    interactive: bool,

    #[arg(long)]
    width: Option<usize>,

    #[arg(long)]
    height: Option<usize>,

    /// Rooms to attempt
    #[arg(long = "rooms")]
    max_rooms: Option<usize>,

    /// Fewest rooms to accept; the target is drawn between this and --rooms
    #[arg(long = "min-rooms")]
    min_rooms: Option<usize>,

    #[arg(long)]
    min_size: Option<usize>,

    #[arg(long)]
    max_size: Option<usize>,

    /// Clearance between rooms, in cells
    #[arg(long)]
    buffer: Option<usize>,

    /// Rooms that receive a monster encounter
    #[arg(long = "encounters")]
    num_encounters: Option<usize>,

    #[arg(long)]
    min_monsters: Option<usize>,

    #[arg(long)]
    max_monsters: Option<usize>,

    #[arg(long = "treasures")]
    num_treasures: Option<usize>,

    #[arg(long = "traps")]
    num_traps: Option<usize>,

    #[arg(long = "secret-doors")]
    num_secret_doors: Option<usize>,

    /// Door chance in percent
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    door_chance: Option<u8>,

    /// Wide corridor chance in percent
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    wide_chance: Option<u8>,

    /// Cavern corridor chance in percent
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    cavern_chance: Option<u8>,

    /// Pillar or pool chance per room, in percent
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    feature_chance: Option<u8>,

    /// Room connection strategy (sequential, mst)
    #[arg(long)]
    connection: Option<ConnectionStrategy>,

    /// Door detection (carve, destroyed-wall)
    #[arg(long)]
    doors: Option<DoorHeuristic>,

    /// Leave cavern corridors unstitched
    #[arg(long)]
    no_stitch: bool,

    /// Debug logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

impl Args {
    /// Overlay the flags that were given onto a config
    fn apply(&self, config: &mut GeneratorConfig) {
        fn set<T: Copy>(slot: &mut T, value: Option<T>) {
            if let Some(v) = value {
                *slot = v;
            }
        }

        set(&mut config.width, self.width);
        set(&mut config.height, self.height);
        set(&mut config.max_rooms, self.max_rooms);
        if self.min_rooms.is_some() {
            config.min_rooms = self.min_rooms;
        }
        set(&mut config.min_size, self.min_size);
        set(&mut config.max_size, self.max_size);
        set(&mut config.buffer, self.buffer);
        set(&mut config.num_encounters, self.num_encounters);
        set(&mut config.min_monsters, self.min_monsters);
        set(&mut config.max_monsters, self.max_monsters);
        set(&mut config.num_treasures, self.num_treasures);
        set(&mut config.num_traps, self.num_traps);
        set(&mut config.num_secret_doors, self.num_secret_doors);
        set(&mut config.door_probability, self.door_chance.map(percent));
        set(&mut config.wide_corridor_chance, self.wide_chance.map(percent));
        set(&mut config.cavern_chance, self.cavern_chance.map(percent));
        set(&mut config.room_feature_chance, self.feature_chance.map(percent));
        set(&mut config.connection, self.connection);
        set(&mut config.doors, self.doors);
        if self.no_stitch {
            config.stitch_caverns = false;
        }
    }
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(args: &Args) -> Result<PathBuf, AppError> {
    let mut config = match &args.config {
        Some(path) => load_config_file(path)?,
        None => GeneratorConfig::default(),
    };
    args.apply(&mut config);

    let mut filename = args
        .filename
        .clone()
        .unwrap_or_else(|| DEFAULT_FILENAME.to_string());
    if args.interactive {
        let stdin = io::stdin();
        let mut prompter = Prompter::new(stdin.lock(), io::stdout());
        prompter
            .prompt_settings(&mut config, &mut filename)
            .map_err(SettingsError::from)?;
    }
    config.validate().map_err(SettingsError::from)?;

    let roster = roster_or_manual(args.roster.as_deref()).map_err(ExportError::from)?;
    let path = resolve_output_path(args.output_dir.as_deref(), &filename)?;

    let mut rng = args.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    info!("seed {}", rng.seed());

    export_dungeon(&config, &roster, &mut rng, &path)?;
    Ok(path)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let code = match run(&args) {
        Ok(path) => {
            println!("Success! Dungeon saved to:\n{}", path.display());
            ExitCode::SUCCESS
        }
        Err(AppError::Settings(SettingsError::Prompt(e)))
            if e.kind() == io::ErrorKind::UnexpectedEof =>
        {
            println!("\nGeneration cancelled.");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    };

    if args.interactive && atty::is(atty::Stream::Stdin) {
        println!("\nPress Enter to exit.");
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line).ok();
    }
    code
}
