//! Wave composition, blueprints, and pacing.

use rand::seq::SliceRandom;
use rand::Rng;

use rampart_core::constants::*;
use rampart_core::enums::EnemyKind;

/// Enemy counts for one wave.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WaveComposition {
    pub basic: u32,
    pub fast: u32,
    pub tank: u32,
    pub swarm: u32,
    pub boss: u32,
}

impl WaveComposition {
    pub fn count(&self, kind: EnemyKind) -> u32 {
        match kind {
            EnemyKind::Basic => self.basic,
            EnemyKind::Fast => self.fast,
            EnemyKind::Tank => self.tank,
            EnemyKind::Swarm => self.swarm,
            EnemyKind::Boss => self.boss,
        }
    }

    pub fn total(&self) -> u32 {
        EnemyKind::ALL.iter().map(|&k| self.count(k)).sum()
    }
}

/// Number of each enemy kind in wave `wave`. Integer arithmetic throughout.
pub fn wave_composition(wave: u32) -> WaveComposition {
    let mut comp = WaveComposition {
        basic: 6 + wave * 3 / 2,
        ..Default::default()
    };

    if wave >= 2 {
        comp.fast = (wave * 5 / 8).max(2);
    }
    if wave >= 4 {
        comp.swarm = wave / 2;
    }
    if wave >= 5 {
        comp.tank = ((wave - 3) * 5 / 9).max(1);
    }
    // Every eighth wave brings an extra armored pair, every tenth a boss.
    if wave > 0 && wave % 8 == 0 {
        comp.tank += 2;
    }
    if wave > 0 && wave % 10 == 0 {
        comp.boss += 1;
    }

    comp
}

/// Spawn order for wave `wave`: the composition expanded and shuffled.
pub fn create_wave_blueprint<R: Rng + ?Sized>(wave: u32, rng: &mut R) -> Vec<EnemyKind> {
    let comp = wave_composition(wave);
    let mut blueprint = Vec::with_capacity(comp.total() as usize);
    for kind in [
        EnemyKind::Basic,
        EnemyKind::Fast,
        EnemyKind::Swarm,
        EnemyKind::Tank,
        EnemyKind::Boss,
    ] {
        blueprint.extend(std::iter::repeat(kind).take(comp.count(kind) as usize));
    }
    blueprint.shuffle(rng);
    blueprint
}

/// Per-kind counts in declaration order, omitting kinds that do not appear.
pub fn summarize(blueprint: &[EnemyKind]) -> Vec<(EnemyKind, u32)> {
    EnemyKind::ALL
        .iter()
        .map(|&kind| {
            let count = blueprint.iter().filter(|&&k| k == kind).count() as u32;
            (kind, count)
        })
        .filter(|&(_, count)| count > 0)
        .collect()
}

/// Ticks between spawns during wave `wave`.
pub fn spawn_interval(wave: u32) -> u32 {
    SPAWN_INTERVAL_BASE
        .saturating_sub(wave.saturating_mul(SPAWN_INTERVAL_PER_WAVE))
        .max(SPAWN_INTERVAL_MIN)
}

/// Money paid for clearing wave `wave`.
pub fn wave_clear_bonus(wave: u32) -> u32 {
    WAVE_CLEAR_BONUS_BASE + WAVE_CLEAR_BONUS_PER_WAVE * wave
}
