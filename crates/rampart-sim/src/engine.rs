//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, the run state, and the RNG,
//! validates player actions, runs all systems, and produces
//! `GameStateSnapshot`s. Completely headless, enabling deterministic testing.

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use rampart_core::commands::PlayerCommand;
use rampart_core::components::{Enemy, Tower};
use rampart_core::constants::*;
use rampart_core::enums::{GamePhase, SoundCue, TowerKind};
use rampart_core::error::Rejection;
use rampart_core::events::{GameEvent, StatusMessage};
use rampart_core::state::{GameStateSnapshot, RunView};
use rampart_core::types::{GridCoord, SimTime, TowerId};
use rampart_map::{Grid, LoadedMap, MapDefinition, MapError};
use rampart_rules::tower_tables;
use rampart_rules::waves::{create_wave_blueprint, wave_clear_bonus};

use crate::feedback::Feedback;
use crate::placement;
use crate::run_state::{RunState, WaveState};
use crate::systems;
use crate::world_setup;

/// Configuration for a simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed and same actions = same game.
    pub seed: u64,
    pub starting_money: u32,
    pub starting_lives: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            starting_money: STARTING_MONEY,
            starting_lives: STARTING_LIVES,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    config: SimConfig,
    world: World,
    time: SimTime,
    phase: GamePhase,
    paused: bool,
    rng: ChaCha8Rng,
    /// The loaded map, with its pristine grid.
    map: Option<LoadedMap>,
    /// Live grid including tower occupancy.
    grid: Grid,
    run: RunState,
    waves: WaveState,
    feedback: Feedback,
    selected_tower: Option<TowerId>,
    next_tower_id: TowerId,
    next_spawn_seq: u64,
    despawn_buffer: Vec<hecs::Entity>,
}

impl SimulationEngine {
    /// Create an engine with no map loaded.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            paused: false,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            map: None,
            grid: Grid::default(),
            run: RunState::new(config.starting_money, config.starting_lives),
            waves: WaveState::default(),
            feedback: Feedback::default(),
            selected_tower: None,
            next_tower_id: 1,
            next_spawn_seq: 0,
            despawn_buffer: Vec::new(),
            config,
        }
    }

    // ---- Map & run lifecycle ----

    /// Validate and load a map, then start a fresh run on it.
    /// On error the engine keeps whatever map it had before.
    pub fn load_map(&mut self, definition: &MapDefinition) -> Result<(), MapError> {
        let map = LoadedMap::load(definition).inspect_err(|err| {
            warn!(id = %definition.id, error = %err, "map rejected");
        })?;

        info!(
            id = %map.id,
            rows = map.grid.rows(),
            cols = map.grid.cols(),
            path_len = map.path.len(),
            "map loaded"
        );
        let name = map.name.clone();
        self.map = Some(map);
        self.restart();
        self.feedback.status(
            format!("{name} loaded. Build your defenses and press \"Start Wave 1\" when ready."),
            STATUS_MAP_LOADED_TICKS,
        );
        Ok(())
    }

    /// Restart the run on the current map.
    pub fn reset_run(&mut self) -> Result<(), Rejection> {
        if self.map.is_none() {
            return self.reject(Rejection::NoMapSelected);
        }
        self.restart();
        self.feedback.status(
            "Build your defenses and press \"Start Wave 1\" when ready.",
            STATUS_LONG_TICKS,
        );
        Ok(())
    }

    fn restart(&mut self) {
        if let Some(map) = &self.map {
            self.grid = map.grid.clone();
        }
        self.world.clear();
        self.time = SimTime::default();
        self.phase = GamePhase::Building;
        self.paused = false;
        self.run = RunState::new(self.config.starting_money, self.config.starting_lives);
        self.waves = WaveState {
            upcoming: create_wave_blueprint(1, &mut self.rng),
            next_wave_ready: true,
            ..Default::default()
        };
        self.selected_tower = None;
        self.next_tower_id = 1;
        self.next_spawn_seq = 0;

        debug!(money = self.run.money, lives = self.run.lives, "run reset");
    }

    // ---- Ticking ----

    /// Advance the simulation by one tick and return the resulting snapshot.
    /// Nothing moves while no map is loaded, while paused, or after game over.
    pub fn tick(&mut self) -> GameStateSnapshot {
        if self.is_running() {
            self.run_systems();
            self.time.advance();
        }
        self.snapshot()
    }

    /// Snapshot the current state, draining events emitted since the last one.
    pub fn snapshot(&mut self) -> GameStateSnapshot {
        let events = self.feedback.drain_events();
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.paused,
            self.map.as_ref(),
            &self.grid,
            &self.run,
            &self.waves,
            self.selected_tower,
            self.feedback.current_status(),
            events,
        )
    }

    fn is_running(&self) -> bool {
        !self.paused && matches!(self.phase, GamePhase::Building | GamePhase::InProgress)
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let Some(map) = &self.map else {
            return;
        };

        // 1. Wave spawning
        systems::wave_spawner::run(
            &mut self.world,
            &mut self.waves,
            self.run.wave,
            map.path.start(),
            &mut self.next_spawn_seq,
            &mut self.feedback,
        );
        // 2. Enemy movement, then drop dead and leaked enemies
        systems::enemy_movement::run(
            &mut self.world,
            &map.path,
            &mut self.run,
            &mut self.feedback,
        );
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);

        // 3. Loss check; nothing else happens on the tick the base falls
        if self.run.lives == 0 {
            self.trigger_game_over();
            return;
        }

        // 4. Towers
        systems::fire_control::run(&mut self.world, &mut self.feedback);
        // 5. Projectiles
        systems::projectiles::run(
            &mut self.world,
            &mut self.run,
            &mut self.feedback,
            &mut self.despawn_buffer,
        );
        // 6. Explosions
        systems::explosions::run(&mut self.world, &mut self.despawn_buffer);

        // 7. Wave completion
        if self.waves.in_progress && self.waves.queue.is_empty() && !self.any_enemy_alive() {
            self.complete_wave();
        }

        // 8. Status line
        self.feedback.tick_status();
    }

    fn any_enemy_alive(&self) -> bool {
        self.world
            .query::<&Enemy>()
            .iter()
            .any(|(_, enemy)| enemy.phase.is_alive())
    }

    fn complete_wave(&mut self) {
        let wave = self.run.wave;
        let bonus = wave_clear_bonus(wave);
        self.run.money += bonus;

        self.waves.in_progress = false;
        self.waves.current.clear();
        self.waves.upcoming = create_wave_blueprint(wave + 1, &mut self.rng);
        self.waves.next_wave_ready = true;
        self.phase = GamePhase::Building;

        info!(
            wave,
            bonus,
            money = self.run.money,
            lives = self.run.lives,
            "wave cleared"
        );
        self.feedback.status(
            format!("Wave {wave} defeated! Bonus: {bonus}"),
            STATUS_WAVE_CLEARED_TICKS,
        );
        self.feedback.emit(GameEvent::WaveCleared { wave, bonus });
    }

    fn trigger_game_over(&mut self) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.waves.next_wave_ready = false;

        info!(
            wave = self.run.wave,
            score = self.run.score,
            "the base has fallen"
        );
        self.feedback.sound(SoundCue::GameOver);
        self.feedback.status("The base has fallen...", STATUS_LONG_TICKS);
        self.feedback.emit(GameEvent::GameOver {
            final_score: self.run.score,
            wave: self.run.wave,
        });
    }

    // ---- Player actions ----

    /// Send the next wave. Returns the new wave number.
    pub fn start_next_wave(&mut self) -> Result<u32, Rejection> {
        if let Err(rejection) = self.ensure_playable() {
            return self.reject(rejection);
        }
        if !self.waves.next_wave_ready {
            return self.reject(Rejection::WaveAlreadyInProgress);
        }

        self.run.wave += 1;
        let wave = self.run.wave;
        let blueprint = if self.waves.upcoming.is_empty() {
            create_wave_blueprint(wave, &mut self.rng)
        } else {
            std::mem::take(&mut self.waves.upcoming)
        };

        self.waves.queue = blueprint.iter().copied().collect();
        self.waves.current = blueprint;
        self.waves.spawn_cooldown = SPAWN_INTERVAL_BASE;
        self.waves.in_progress = true;
        self.waves.next_wave_ready = false;
        self.waves.upcoming = create_wave_blueprint(wave + 1, &mut self.rng);
        self.phase = GamePhase::InProgress;

        let size = self.waves.current.len();
        info!(wave, size, "wave started");
        self.feedback.status(format!("Wave {wave} started!"), STATUS_MEDIUM_TICKS);
        self.feedback.emit(GameEvent::WaveStarted { wave, size });
        Ok(wave)
    }

    /// Build a tower on an empty cell. The new tower becomes the selection.
    pub fn place_tower(
        &mut self,
        row: usize,
        col: usize,
        kind: TowerKind,
    ) -> Result<TowerId, Rejection> {
        let cell = GridCoord::new(row, col);
        let spec = tower_tables::get_spec(kind);

        let checked = self
            .ensure_playable()
            .and_then(|()| placement::check_site(&self.grid, cell))
            .and_then(|()| self.run.spend(spec.cost));
        if let Err(rejection) = checked {
            return self.reject(rejection);
        }

        self.grid.occupy(cell);
        let id = self.next_tower_id;
        self.next_tower_id += 1;
        world_setup::spawn_tower(&mut self.world, id, kind, cell);
        self.selected_tower = Some(id);

        debug!(id, ?kind, row, col, money = self.run.money, "tower placed");
        self.feedback.sound(SoundCue::PlaceTower);
        self.feedback.status(format!("{} placed!", spec.name), STATUS_SHORT_TICKS);
        self.feedback.emit(GameEvent::TowerPlaced {
            tower_id: id,
            kind,
            row,
            col,
        });
        Ok(id)
    }

    /// Upgrade a tower by one level. Returns the new level.
    pub fn upgrade_tower(&mut self, id: TowerId) -> Result<u8, Rejection> {
        let (entity, tower) = match self.playable_tower(id) {
            Ok(found) => found,
            Err(rejection) => return self.reject(rejection),
        };

        let Some(cost) = tower_tables::upgrade_cost(tower.kind, tower.level) else {
            return self.reject(Rejection::MaxLevelReached);
        };
        if let Err(rejection) = self.run.spend(cost) {
            return self.reject(rejection);
        }

        let level = tower.level + 1;
        if let Ok(mut tower) = self.world.get::<&mut Tower>(entity) {
            tower.level = level;
            tower.total_invested += cost;
        }

        let name = tower_tables::get_spec(tower.kind).name;
        debug!(id, level, cost, money = self.run.money, "tower upgraded");
        self.feedback.sound(SoundCue::PlaceTower);
        self.feedback.status(
            format!("{name} upgraded to level {level}!"),
            STATUS_MEDIUM_TICKS,
        );
        self.feedback.emit(GameEvent::TowerUpgraded {
            tower_id: id,
            level,
            cost,
        });
        Ok(level)
    }

    /// Sell a tower and free its cell. Returns the refund.
    pub fn sell_tower(&mut self, id: TowerId) -> Result<u32, Rejection> {
        let (entity, tower) = match self.playable_tower(id) {
            Ok(found) => found,
            Err(rejection) => return self.reject(rejection),
        };

        let refund = tower_tables::sell_value(tower.total_invested);
        let _ = self.world.despawn(entity);
        self.grid.vacate(tower.cell);
        self.run.money += refund;
        self.selected_tower = None;

        let name = tower_tables::get_spec(tower.kind).name;
        debug!(id, refund, money = self.run.money, "tower sold");
        self.feedback.status(format!("{name} sold for {refund}."), STATUS_MEDIUM_TICKS);
        self.feedback.emit(GameEvent::TowerSold {
            tower_id: id,
            refund,
        });
        Ok(refund)
    }

    /// Select a tower for the detail panel, or clear the selection.
    pub fn select_tower(&mut self, id: Option<TowerId>) -> Result<(), Rejection> {
        if let Some(id) = id {
            if placement::find_tower(&self.world, id).is_none() {
                return self.reject(Rejection::NoTowerSelected);
            }
        }
        self.selected_tower = id;
        Ok(())
    }

    pub fn set_paused(&mut self, paused: bool) {
        if self.paused == paused {
            return;
        }
        self.paused = paused;
        let text = if paused {
            "Game paused."
        } else {
            "Game resumed."
        };
        self.feedback.status(text, STATUS_PAUSE_TICKS);
    }

    /// Flip the pause flag. Returns the new value.
    pub fn toggle_pause(&mut self) -> bool {
        self.set_paused(!self.paused);
        self.paused
    }

    /// Apply a serialized player command.
    pub fn execute(&mut self, command: PlayerCommand) -> Result<(), Rejection> {
        match command {
            PlayerCommand::PlaceTower { row, col, kind } => {
                self.place_tower(row, col, kind).map(|_| ())
            }
            PlayerCommand::UpgradeTower { tower_id } => self.upgrade_tower(tower_id).map(|_| ()),
            PlayerCommand::SellTower { tower_id } => self.sell_tower(tower_id).map(|_| ()),
            PlayerCommand::SelectTower { tower_id } => self.select_tower(tower_id),
            PlayerCommand::StartNextWave => self.start_next_wave().map(|_| ()),
            PlayerCommand::Pause => {
                self.set_paused(true);
                Ok(())
            }
            PlayerCommand::Resume => {
                self.set_paused(false);
                Ok(())
            }
            PlayerCommand::TogglePause => {
                self.toggle_pause();
                Ok(())
            }
            PlayerCommand::ResetRun => self.reset_run(),
        }
    }

    fn ensure_playable(&self) -> Result<(), Rejection> {
        match self.phase {
            GamePhase::NoMap => Err(Rejection::NoMapSelected),
            GamePhase::GameOver => Err(Rejection::GameIsOver),
            GamePhase::Building | GamePhase::InProgress => Ok(()),
        }
    }

    fn playable_tower(&self, id: TowerId) -> Result<(hecs::Entity, Tower), Rejection> {
        self.ensure_playable()?;
        placement::find_tower(&self.world, id).ok_or(Rejection::NoTowerSelected)
    }

    /// Surface a rejection on the status line and return it.
    fn reject<T>(&mut self, rejection: Rejection) -> Result<T, Rejection> {
        debug!(%rejection, "action rejected");
        self.feedback.status(rejection.to_string(), STATUS_SHORT_TICKS);
        Err(rejection)
    }

    // ---- Queries ----

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn run_view(&self) -> RunView {
        self.run.view()
    }

    pub fn map(&self) -> Option<&LoadedMap> {
        self.map.as_ref()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.feedback.current_status()
    }

    pub fn selected_tower(&self) -> Option<TowerId> {
        self.selected_tower
    }

    /// Id of the tower on a cell, if any.
    pub fn tower_at(&self, row: usize, col: usize) -> Option<TowerId> {
        placement::tower_on(&self.world, GridCoord::new(row, col))
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    // ---- Test hooks ----

    #[cfg(test)]
    pub fn set_money(&mut self, money: u32) {
        self.run.money = money;
    }

    #[cfg(test)]
    pub fn set_lives(&mut self, lives: u32) {
        self.run.lives = lives;
    }

    /// Spawn an enemy at the path start outside of any wave.
    #[cfg(test)]
    pub fn spawn_test_enemy(&mut self, kind: rampart_core::enums::EnemyKind) -> hecs::Entity {
        let start = self
            .map
            .as_ref()
            .map(|m| m.path.start())
            .unwrap_or_default();
        let seq = self.next_spawn_seq;
        self.next_spawn_seq += 1;
        world_setup::spawn_enemy(&mut self.world, kind, self.run.wave, start, seq)
    }

    /// Number of enemies in the world that are still walking.
    #[cfg(test)]
    pub fn live_enemy_count(&self) -> usize {
        self.world
            .query::<&Enemy>()
            .iter()
            .filter(|(_, e)| e.phase.is_alive())
            .count()
    }
}
