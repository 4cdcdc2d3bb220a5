//! Simulation constants and tuning parameters.

/// Nominal tick rate (Hz). The driver owns wall-clock pacing; this is used
/// for display figures such as shots per second.
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Grid ---

/// Edge length of one grid cell in pixels.
pub const TILE_SIZE: f64 = 40.0;

// --- Run state ---

/// Money at the start of a run.
pub const STARTING_MONEY: u32 = 200;

/// Lives at the start of a run.
pub const STARTING_LIVES: u32 = 10;

// --- Economy ---

/// Fraction of total tower investment refunded on sale.
pub const SELL_REFUND_RATIO: f64 = 0.65;

/// Flat part of the wave-clear bonus.
pub const WAVE_CLEAR_BONUS_BASE: u32 = 80;

/// Per-wave part of the wave-clear bonus.
pub const WAVE_CLEAR_BONUS_PER_WAVE: u32 = 15;

// --- Spawning ---

/// Spawn cooldown at the start of a wave, and the base of the per-wave interval.
pub const SPAWN_INTERVAL_BASE: u32 = 45;

/// Spawn interval never drops below this many ticks.
pub const SPAWN_INTERVAL_MIN: u32 = 15;

/// Spawn interval reduction per wave number.
pub const SPAWN_INTERVAL_PER_WAVE: u32 = 2;

// --- Enemy scaling ---

/// Per-wave health growth rate.
pub const HEALTH_SCALE_PER_WAVE: f64 = 0.12;

/// Per-wave reward growth rate.
pub const REWARD_SCALE_PER_WAVE: f64 = 0.05;

/// Per-wave score growth rate.
pub const SCORE_SCALE_PER_WAVE: f64 = 0.04;

/// Scaled reward and score never drop below this.
pub const MIN_REWARD_AND_SCORE: u32 = 5;

/// Difficulty multiplier applied to boss scaling (boss base stats are already large).
pub const BOSS_SCALING_MULTIPLIER: f64 = 0.6;

/// Slow factor meaning "no slow".
pub const NEUTRAL_SLOW_FACTOR: f64 = 1.0;

// --- Explosions ---

/// Initial explosion radius (pixels).
pub const EXPLOSION_START_RADIUS: f64 = 6.0;

/// Explosion radius growth per tick.
pub const EXPLOSION_GROWTH_PER_TICK: f64 = 2.4;

/// Explosion life lost per tick (starts at 1.0).
pub const EXPLOSION_DECAY_PER_TICK: f64 = 0.06;

// --- Status messages (durations in ticks) ---

pub const STATUS_SHORT_TICKS: u32 = 120;
pub const STATUS_MEDIUM_TICKS: u32 = 150;
pub const STATUS_PAUSE_TICKS: u32 = 90;
pub const STATUS_WAVE_CLEARED_TICKS: u32 = 240;
pub const STATUS_LONG_TICKS: u32 = 300;
pub const STATUS_MAP_LOADED_TICKS: u32 = 360;

// --- Towers ---

/// Highest tower level.
pub const MAX_TOWER_LEVEL: u8 = 3;
