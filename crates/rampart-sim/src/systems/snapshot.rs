//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only. It never modifies the world.

use hecs::World;

use rampart_core::components::*;
use rampart_core::enums::*;
use rampart_core::events::{GameEvent, StatusMessage};
use rampart_core::state::*;
use rampart_core::types::{Position, SimTime, TowerId};
use rampart_map::{Grid, LoadedMap};
use rampart_rules::{enemy_profiles, tower_tables, waves};

use crate::components::Projectile;
use crate::run_state::{RunState, WaveState};

/// Build a complete GameStateSnapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    paused: bool,
    map: Option<&LoadedMap>,
    grid: &Grid,
    run: &RunState,
    wave_state: &WaveState,
    selected: Option<TowerId>,
    status: Option<&StatusMessage>,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    let enemies = build_enemies(world);
    let remaining_enemies = enemies.len() + wave_state.queue.len();

    GameStateSnapshot {
        time: *time,
        phase,
        paused,
        map: map.map(|m| MapView {
            id: m.id.clone(),
            name: m.name.clone(),
            description: m.description.clone(),
        }),
        grid: GridView {
            rows: grid.rows(),
            cols: grid.cols(),
            cells: grid.cells().to_vec(),
        },
        enemies,
        towers: build_towers(world, selected),
        projectiles: build_projectiles(world),
        explosions: build_explosions(world),
        run: run.view(),
        wave: build_wave(run.wave, wave_state, remaining_enemies),
        selected_tower: selected.and_then(|id| build_tower_detail(world, id, run.money)),
        status: status.cloned(),
        events,
    }
}

/// Walking enemies, in spawn order.
fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<(u64, EnemyView)> = world
        .query::<(&Position, &Enemy, &SlowEffect)>()
        .iter()
        .filter(|(_, (_, enemy, _))| enemy.phase.is_alive())
        .map(|(_, (pos, enemy, slow))| {
            let view = EnemyView {
                kind: enemy.kind,
                position: *pos,
                health: enemy.health,
                max_health: enemy.max_health,
                size: enemy.size,
                color: enemy_profiles::color(enemy.kind).to_string(),
                path_index: enemy.path_index,
                slowed: slow.remaining_ticks > 0,
            };
            (enemy.spawn_seq, view)
        })
        .collect();

    enemies.sort_by_key(|(seq, _)| *seq);
    enemies.into_iter().map(|(_, view)| view).collect()
}

fn build_towers(world: &World, selected: Option<TowerId>) -> Vec<TowerView> {
    let mut towers: Vec<TowerView> = world
        .query::<(&Position, &Tower)>()
        .iter()
        .map(|(_, (pos, tower))| TowerView {
            id: tower.id,
            kind: tower.kind,
            level: tower.level,
            row: tower.cell.row,
            col: tower.cell.col,
            position: *pos,
            range: tower_tables::level_stats(tower.kind, tower.level).range,
            color: tower_tables::get_spec(tower.kind).body_color.to_string(),
            selected: selected == Some(tower.id),
        })
        .collect();

    towers.sort_by_key(|t| t.id);
    towers
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<(&Position, &Projectile)>()
        .iter()
        .map(|(_, (pos, projectile))| ProjectileView {
            position: *pos,
            color: projectile.color.to_string(),
            splash_radius: projectile.splash_radius,
        })
        .collect()
}

fn build_explosions(world: &World) -> Vec<ExplosionView> {
    world
        .query::<(&Position, &Explosion)>()
        .iter()
        .map(|(_, (pos, explosion))| ExplosionView {
            position: *pos,
            radius: explosion.radius,
            life: explosion.life,
        })
        .collect()
}

fn build_wave(wave: u32, state: &WaveState, remaining_enemies: usize) -> WaveView {
    let progress_label = if state.in_progress {
        format!("Wave {wave}: {remaining_enemies} enemies")
    } else if wave == 0 {
        "No wave in progress".to_string()
    } else {
        format!("Wave {wave} cleared")
    };

    WaveView {
        in_progress: state.in_progress,
        next_wave_ready: state.next_wave_ready,
        remaining_enemies,
        current: summarize(&state.current),
        upcoming: summarize(&state.upcoming),
        progress_label,
    }
}

fn summarize(blueprint: &[EnemyKind]) -> Vec<WaveGroupView> {
    waves::summarize(blueprint)
        .into_iter()
        .map(|(kind, count)| WaveGroupView {
            kind,
            label: kind.label().to_string(),
            count,
        })
        .collect()
}

/// Detail panel for tower `id`, or None if it no longer exists.
fn build_tower_detail(world: &World, id: TowerId, money: u32) -> Option<TowerDetailView> {
    let mut query = world.query::<&Tower>();
    let (_, tower) = query.iter().find(|(_, tower)| tower.id == id)?;

    let spec = tower_tables::get_spec(tower.kind);
    let stats = tower_tables::level_stats(tower.kind, tower.level);
    let upgrade_cost = tower_tables::upgrade_cost(tower.kind, tower.level);

    Some(TowerDetailView {
        id: tower.id,
        kind: tower.kind,
        name: spec.name.to_string(),
        description: spec.description.to_string(),
        level: tower.level,
        max_level: rampart_core::constants::MAX_TOWER_LEVEL,
        range: stats.range,
        damage: stats.damage,
        fire_rate_ticks: stats.fire_rate_ticks,
        shots_per_sec: stats.shots_per_sec(),
        dps: stats.dps(),
        upgrade_cost,
        can_afford_upgrade: upgrade_cost.is_some_and(|cost| money >= cost),
        sell_value: tower_tables::sell_value(tower.total_invested),
    })
}
