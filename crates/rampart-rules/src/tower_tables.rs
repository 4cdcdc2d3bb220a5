//! Tower stat tables: per-level stats, prices, and display metadata.

use rampart_core::components::OnHitEffect;
use rampart_core::constants::{MAX_TOWER_LEVEL, SELL_REFUND_RATIO, TICK_RATE};
use rampart_core::enums::TowerKind;

/// Stats for one tower level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelStats {
    /// Targeting radius in pixels, measured center to center.
    pub range: f64,
    /// Ticks between shots.
    pub fire_rate_ticks: u32,
    pub damage: f64,
    /// Projectile pixels per tick.
    pub projectile_speed: f64,
    /// Area damage radius on impact. 0 means single-target.
    pub splash_radius: f64,
    pub on_hit: Option<OnHitEffect>,
}

impl LevelStats {
    pub fn shots_per_sec(&self) -> f64 {
        TICK_RATE as f64 / self.fire_rate_ticks as f64
    }

    pub fn dps(&self) -> f64 {
        self.shots_per_sec() * self.damage
    }
}

/// Everything static about a tower kind.
#[derive(Debug, Clone, PartialEq)]
pub struct TowerSpec {
    pub name: &'static str,
    pub description: &'static str,
    /// Purchase price.
    pub cost: u32,
    pub body_color: &'static str,
    pub projectile_color: &'static str,
    pub levels: [LevelStats; MAX_TOWER_LEVEL as usize],
    /// Price of reaching level 2 and level 3.
    pub upgrade_costs: [u32; MAX_TOWER_LEVEL as usize - 1],
}

fn level(range: f64, fire_rate_ticks: u32, damage: f64, projectile_speed: f64) -> LevelStats {
    LevelStats {
        range,
        fire_rate_ticks,
        damage,
        projectile_speed,
        splash_radius: 0.0,
        on_hit: None,
    }
}

fn frost_level(
    range: f64,
    fire_rate_ticks: u32,
    damage: f64,
    projectile_speed: f64,
    factor: f64,
    duration_ticks: u32,
) -> LevelStats {
    LevelStats {
        on_hit: Some(OnHitEffect::Slow {
            factor,
            duration_ticks,
        }),
        ..level(range, fire_rate_ticks, damage, projectile_speed)
    }
}

/// Static table entry for a tower kind.
pub fn get_spec(kind: TowerKind) -> TowerSpec {
    match kind {
        TowerKind::Basic => TowerSpec {
            name: "Basic Tower",
            description: "Balanced range and damage to support every strategy.",
            cost: 100,
            body_color: "#3f51b5",
            projectile_color: "#ffeb3b",
            levels: [
                level(110.0, 70, 3.0, 6.0),
                level(125.0, 60, 4.0, 7.0),
                level(140.0, 48, 5.0, 8.0),
            ],
            upgrade_costs: [90, 140],
        },
        TowerKind::Rapid => TowerSpec {
            name: "Rapid Tower",
            description: "Fires quickly with lower damage per shot.",
            cost: 150,
            body_color: "#f44336",
            projectile_color: "#ff9800",
            levels: [
                level(95.0, 35, 2.0, 6.0),
                level(110.0, 28, 2.8, 7.0),
                level(125.0, 22, 3.4, 7.5),
            ],
            upgrade_costs: [120, 170],
        },
        TowerKind::Sniper => TowerSpec {
            name: "Sniper Tower",
            description: "Extreme range and high damage with a slower fire rate.",
            cost: 220,
            body_color: "#673ab7",
            projectile_color: "#d1c4e9",
            levels: [
                level(180.0, 140, 10.0, 9.0),
                level(200.0, 120, 14.0, 10.0),
                level(220.0, 100, 18.0, 12.0),
            ],
            upgrade_costs: [160, 220],
        },
        TowerKind::Frost => TowerSpec {
            name: "Frost Tower",
            description: "Slows enemies to give your other towers more time.",
            cost: 170,
            body_color: "#00acc1",
            projectile_color: "#b2ebf2",
            levels: [
                frost_level(120.0, 75, 2.0, 6.0, 0.6, 120),
                frost_level(135.0, 65, 3.0, 6.5, 0.5, 150),
                frost_level(150.0, 60, 4.0, 7.0, 0.45, 180),
            ],
            upgrade_costs: [130, 190],
        },
    }
}

/// Stats for `kind` at `level` (1-based, clamped to the table).
pub fn level_stats(kind: TowerKind, level: u8) -> LevelStats {
    let idx = level.clamp(1, MAX_TOWER_LEVEL) as usize - 1;
    get_spec(kind).levels[idx]
}

/// Purchase price.
pub fn cost(kind: TowerKind) -> u32 {
    get_spec(kind).cost
}

/// Price of going from `level` to `level + 1`. None at max level.
pub fn upgrade_cost(kind: TowerKind, level: u8) -> Option<u32> {
    if level == 0 || level >= MAX_TOWER_LEVEL {
        return None;
    }
    Some(get_spec(kind).upgrade_costs[level as usize - 1])
}

/// Refund for selling a tower with the given total investment.
pub fn sell_value(total_invested: u32) -> u32 {
    (total_invested as f64 * SELL_REFUND_RATIO).round() as u32
}
