//! tg-data: Static monster data for Thor-Grid dungeons
//!
//! The built-in monster manual and loading of replacement rosters.

pub mod monsters;
pub mod roster;

pub use monsters::MONSTER_MANUAL;
pub use roster::{load_roster, roster_or_manual, RosterError};
