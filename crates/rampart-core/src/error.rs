//! Rejections for player actions.
//!
//! None of these are fatal: a rejected action leaves the simulation
//! unchanged apart from the status line that explains it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::GridCoord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Rejection {
    InsufficientFunds { needed: u32, available: u32 },
    TileOccupied { cell: GridCoord },
    TileOutOfBounds { cell: GridCoord },
    NoMapSelected,
    MaxLevelReached,
    WaveAlreadyInProgress,
    NoTowerSelected,
    GameIsOver,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientFunds { needed, available } => {
                write!(f, "Not enough money (need {needed}, have {available}).")
            }
            Self::TileOccupied { .. } => write!(f, "This tile is occupied or part of the path."),
            Self::TileOutOfBounds { cell } => {
                write!(f, "Tile ({}, {}) is outside the map.", cell.row, cell.col)
            }
            Self::NoMapSelected => write!(f, "Select a map first."),
            Self::MaxLevelReached => write!(f, "This tower is already at max level."),
            Self::WaveAlreadyInProgress => write!(f, "A wave is already in progress."),
            Self::NoTowerSelected => write!(f, "No tower selected."),
            Self::GameIsOver => write!(f, "The base has fallen. Restart to play again."),
        }
    }
}

impl std::error::Error for Rejection {}
