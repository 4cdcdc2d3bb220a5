//! Player commands sent from a driver to the simulation.
//!
//! Each command maps onto one engine operation and is validated when executed.

use serde::{Deserialize, Serialize};

use crate::enums::TowerKind;
use crate::types::TowerId;

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Building ---
    /// Build a tower on an empty cell.
    PlaceTower {
        row: usize,
        col: usize,
        kind: TowerKind,
    },
    /// Upgrade a tower by one level.
    UpgradeTower { tower_id: TowerId },
    /// Sell a tower for a partial refund.
    SellTower { tower_id: TowerId },
    /// Select a tower for the detail panel, or clear the selection.
    SelectTower { tower_id: Option<TowerId> },

    // --- Waves ---
    /// Send the next wave.
    StartNextWave,

    // --- Simulation control ---
    Pause,
    Resume,
    TogglePause,
    /// Restart the run on the current map.
    ResetRun,
}
