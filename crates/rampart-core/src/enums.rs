//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// State of one grid cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// Buildable ground.
    #[default]
    Empty,
    /// Part of the enemy path. Never changes after a map is loaded.
    Path,
    /// Holds a tower.
    Occupied,
}

impl CellState {
    /// Numeric layout code: 0 = empty, 1 = path, 2 = occupied.
    pub fn code(self) -> u8 {
        match self {
            CellState::Empty => 0,
            CellState::Path => 1,
            CellState::Occupied => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(CellState::Empty),
            1 => Some(CellState::Path),
            2 => Some(CellState::Occupied),
            _ => None,
        }
    }
}

/// Enemy variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyKind {
    Basic,
    Fast,
    Tank,
    Swarm,
    Boss,
}

impl EnemyKind {
    /// All variants in declaration order.
    pub const ALL: [EnemyKind; 5] = [
        EnemyKind::Basic,
        EnemyKind::Fast,
        EnemyKind::Tank,
        EnemyKind::Swarm,
        EnemyKind::Boss,
    ];

    /// Player-facing label.
    pub fn label(self) -> &'static str {
        match self {
            EnemyKind::Basic => "Basic",
            EnemyKind::Fast => "Fast",
            EnemyKind::Tank => "Armored",
            EnemyKind::Swarm => "Swarm",
            EnemyKind::Boss => "Boss",
        }
    }
}

/// Tower variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TowerKind {
    Basic,
    Rapid,
    Sniper,
    Frost,
}

impl TowerKind {
    pub const ALL: [TowerKind; 4] = [
        TowerKind::Basic,
        TowerKind::Rapid,
        TowerKind::Sniper,
        TowerKind::Frost,
    ];
}

/// Enemy lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyPhase {
    /// Alive and walking the path.
    #[default]
    Walking,
    /// Health reached zero; reward paid.
    Killed,
    /// Reached the end of the path; lives deducted.
    ReachedGoal,
}

impl EnemyPhase {
    pub fn is_alive(self) -> bool {
        self == EnemyPhase::Walking
    }
}

/// Top-level game phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No map loaded yet.
    #[default]
    NoMap,
    /// Between waves; towers can be built and the next wave started.
    Building,
    /// Spawn queue draining and/or enemies alive.
    InProgress,
    /// Lives reached zero. Terminal until the run is reset.
    GameOver,
}

/// Sound cue identifiers for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundCue {
    Shoot,
    Explosion,
    PlaceTower,
    GameOver,
}
