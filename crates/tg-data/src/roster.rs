//! Roster files
//!
//! A roster is a JSON array of monster templates in the same shape as the
//! built-in manual. It replaces the manual for one run.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::info;
use thiserror::Error;

use tg_core::populate::MonsterTemplate;
use tg_core::TemplateError;

use crate::MONSTER_MANUAL;

/// Roster loading errors
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("cannot read roster {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid roster {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("roster {0} has no monsters")]
    Empty(PathBuf),

    #[error("invalid roster {path}: {source}")]
    InvalidTemplate {
        path: PathBuf,
        source: TemplateError,
    },
}

/// Load monster templates from a JSON roster
pub fn load_roster(path: impl AsRef<Path>) -> Result<Vec<MonsterTemplate>, RosterError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| RosterError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let roster: Vec<MonsterTemplate> =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| RosterError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    if roster.is_empty() {
        return Err(RosterError::Empty(path.to_path_buf()));
    }
    for template in &roster {
        template.validate().map_err(|source| RosterError::InvalidTemplate {
            path: path.to_path_buf(),
            source,
        })?;
    }
    info!("loaded {} monsters from {}", roster.len(), path.display());
    Ok(roster)
}

/// The roster at `path` if given, otherwise the built-in manual
pub fn roster_or_manual(path: Option<&Path>) -> Result<Vec<MonsterTemplate>, RosterError> {
    match path {
        Some(p) => load_roster(p),
        None => Ok(MONSTER_MANUAL.to_vec()),
    }
}
