//! Game state snapshot: the complete visible state handed to the front end each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{GameEvent, StatusMessage};
use crate::types::{Position, SimTime, TowerId};

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub paused: bool,
    pub map: Option<MapView>,
    pub grid: GridView,
    pub enemies: Vec<EnemyView>,
    pub towers: Vec<TowerView>,
    pub projectiles: Vec<ProjectileView>,
    pub explosions: Vec<ExplosionView>,
    pub run: RunView,
    pub wave: WaveView,
    pub selected_tower: Option<TowerDetailView>,
    pub status: Option<StatusMessage>,
    /// Events emitted since the previous snapshot.
    pub events: Vec<GameEvent>,
}

/// Identity of the loaded map.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapView {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// Grid cells, row-major.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GridView {
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<CellState>,
}

impl GridView {
    pub fn cell(&self, row: usize, col: usize) -> Option<CellState> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col).copied()
    }
}

/// A live enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub kind: EnemyKind,
    pub position: Position,
    pub health: f64,
    pub max_health: f64,
    pub size: f64,
    pub color: String,
    pub path_index: usize,
    pub slowed: bool,
}

/// A placed tower.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TowerView {
    pub id: TowerId,
    pub kind: TowerKind,
    pub level: u8,
    pub row: usize,
    pub col: usize,
    pub position: Position,
    pub range: f64,
    pub color: String,
    pub selected: bool,
}

/// A projectile in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Position,
    pub color: String,
    pub splash_radius: f64,
}

/// A cosmetic explosion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplosionView {
    pub position: Position,
    pub radius: f64,
    pub life: f64,
}

/// Money, lives, score, and wave counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunView {
    pub money: u32,
    pub lives: u32,
    pub score: u32,
    pub wave: u32,
}

/// One line of a wave composition summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaveGroupView {
    pub kind: EnemyKind,
    pub label: String,
    pub count: u32,
}

/// Wave progress and composition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveView {
    pub in_progress: bool,
    pub next_wave_ready: bool,
    /// Enemies alive plus enemies still queued.
    pub remaining_enemies: usize,
    pub current: Vec<WaveGroupView>,
    pub upcoming: Vec<WaveGroupView>,
    pub progress_label: String,
}

/// Detail panel for the selected tower.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TowerDetailView {
    pub id: TowerId,
    pub kind: TowerKind,
    pub name: String,
    pub description: String,
    pub level: u8,
    pub max_level: u8,
    pub range: f64,
    pub damage: f64,
    pub fire_rate_ticks: u32,
    pub shots_per_sec: f64,
    pub dps: f64,
    /// None at max level.
    pub upgrade_cost: Option<u32>,
    pub can_afford_upgrade: bool,
    pub sell_value: u32,
}
