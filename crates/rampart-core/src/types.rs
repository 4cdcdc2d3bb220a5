//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::TILE_SIZE;

/// 2D position in pixel space. x grows right (columns), y grows down (rows).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A grid cell address.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCoord {
    pub row: usize,
    pub col: usize,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each simulated tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds at the nominal tick rate.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position in pixels.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.as_dvec2().distance(other.as_dvec2())
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Move up to `step` pixels toward `target`.
    /// Returns `true` (and lands exactly on `target`) when the remaining
    /// distance is within one step.
    pub fn step_towards(&mut self, target: &Position, step: f64) -> bool {
        let here = self.as_dvec2();
        let delta = target.as_dvec2() - here;
        let dist = delta.length();
        if dist <= step {
            *self = *target;
            return true;
        }
        *self = (here + delta / dist * step).into();
        false
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl GridCoord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Pixel-space center of this cell.
    pub fn center(&self) -> Position {
        Position::new(
            self.col as f64 * TILE_SIZE + TILE_SIZE / 2.0,
            self.row as f64 * TILE_SIZE + TILE_SIZE / 2.0,
        )
    }

    /// Whether `other` shares an edge with this cell.
    pub fn is_adjacent(&self, other: &GridCoord) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl SimTime {
    /// Seconds per tick at the nominal tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}

/// Stable tower identifier, assigned in placement order.
pub type TowerId = u32;
