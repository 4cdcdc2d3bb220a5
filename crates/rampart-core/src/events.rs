//! Events emitted by the simulation for audio, visual, and UI feedback.
//!
//! The core never performs I/O; it records intents here and the
//! presentation layer renders or plays them.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{Position, TowerId};

/// Everything that happened during a tick (or a player action) that a
/// front end may want to react to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// Play a sound.
    Sound { cue: SoundCue },
    /// Show a status line for `duration_ticks` ticks.
    Status { text: String, duration_ticks: u32 },
    /// Draw an explosion starting at `position`.
    ExplosionSpawned { position: Position },
    EnemySpawned { kind: EnemyKind },
    EnemyKilled {
        kind: EnemyKind,
        reward: u32,
        score: u32,
    },
    EnemyLeaked { kind: EnemyKind, life_damage: u32 },
    TowerPlaced {
        tower_id: TowerId,
        kind: TowerKind,
        row: usize,
        col: usize,
    },
    TowerUpgraded {
        tower_id: TowerId,
        level: u8,
        cost: u32,
    },
    TowerSold { tower_id: TowerId, refund: u32 },
    WaveStarted { wave: u32, size: usize },
    WaveCleared { wave: u32, bonus: u32 },
    GameOver { final_score: u32, wave: u32 },
}

/// The status line currently on screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub text: String,
    pub remaining_ticks: u32,
}
