//! Run bookkeeping kept outside the ECS: economy, lives, and wave progress.
//!
//! Owned by `SimulationEngine`, reset on every new run.

use std::collections::VecDeque;

use rampart_core::enums::EnemyKind;
use rampart_core::error::Rejection;
use rampart_core::state::RunView;

/// Money, lives, score, and the current wave number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunState {
    pub money: u32,
    pub lives: u32,
    pub score: u32,
    /// Last wave started; 0 before the first.
    pub wave: u32,
}

impl RunState {
    pub fn new(starting_money: u32, starting_lives: u32) -> Self {
        Self {
            money: starting_money,
            lives: starting_lives,
            score: 0,
            wave: 0,
        }
    }

    /// Check that `cost` is affordable without spending it.
    pub fn can_afford(&self, cost: u32) -> Result<(), Rejection> {
        if self.money < cost {
            return Err(Rejection::InsufficientFunds {
                needed: cost,
                available: self.money,
            });
        }
        Ok(())
    }

    pub fn spend(&mut self, cost: u32) -> Result<(), Rejection> {
        self.can_afford(cost)?;
        self.money -= cost;
        Ok(())
    }

    /// Deduct lives, stopping at zero.
    pub fn lose_lives(&mut self, amount: u32) {
        self.lives = self.lives.saturating_sub(amount);
    }

    pub fn view(&self) -> RunView {
        RunView {
            money: self.money,
            lives: self.lives,
            score: self.score,
            wave: self.wave,
        }
    }
}

/// Spawn queue and wave flags.
#[derive(Debug, Clone, Default)]
pub struct WaveState {
    /// Enemies still to spawn this wave, front first.
    pub queue: VecDeque<EnemyKind>,
    /// Ticks until the next spawn.
    pub spawn_cooldown: u32,
    pub in_progress: bool,
    /// Whether the player may send the next wave.
    pub next_wave_ready: bool,
    /// Blueprint of the running wave; emptied when it is cleared.
    pub current: Vec<EnemyKind>,
    /// Blueprint the next wave will use.
    pub upcoming: Vec<EnemyKind>,
}
