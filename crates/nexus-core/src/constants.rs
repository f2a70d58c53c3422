//! Simulation constants and tuning parameters.

/// Nominal period of the game loop timer (milliseconds).
pub const TICK_PERIOD_MS: f64 = 20.0;

// --- Field ---

/// Default logical field width (pixels).
pub const FIELD_WIDTH: f64 = 800.0;

/// Default logical field height (pixels).
pub const FIELD_HEIGHT: f64 = 600.0;

// --- Drones ---

/// Speed of a Normal-class drone (pixels per millisecond).
pub const NORMAL_SPEED: f64 = 0.05;

/// Speed of a Fast-class drone (pixels per millisecond).
pub const FAST_SPEED: f64 = 0.1;

/// Half the side length of an unlinked drone's bounding box (pixels).
pub const BASE_HALF_EXTENT: f64 = 20.0;

/// Half-extent growth per link, capped at `LINK_SIZE_CAP` links.
pub const HALF_EXTENT_SCALING: f64 = 2.0;

/// Link count beyond which the footprint stops growing.
pub const LINK_SIZE_CAP: usize = 3;

/// Link count at which a drone becomes immobile.
pub const MAX_LINKS: usize = 5;

// --- Collision response ---

/// Pseudo-delta fed through the movement routine to push a colliding pair
/// apart (milliseconds of travel at normal drone speed).
pub const SEPARATION_NUDGE_MS: f64 = 120.0;

// --- Spawning ---

/// Placement attempts before the spawner gives up for the cycle.
pub const MAX_SPAWN_TRIALS: u32 = 10;

/// Spawn-timer credit at session start, in multiples of the spawn
/// interval. Populates the field over the first few ticks.
pub const INITIAL_SPAWN_CREDITS: u32 = 4;

// --- Scoring & damage ---

/// Hull damage dealt per drone per millisecond, before the exponential
/// link multiplier.
pub const PER_MS_DAMAGE: f64 = 0.05;

/// Base reward for destroying a drone; multiplied by (1 + link count).
pub const PER_DRONE_POINTS: f64 = 50.0;

/// Starting nexus hull.
pub const STARTING_HULL: f64 = 10_000.0;

// --- Hull severity tiers (cosmetic, for UI feedback only) ---

/// Hull at or above this reads Nominal.
pub const HULL_NOMINAL_FLOOR: f64 = 7_000.0;

/// Hull at or above this (and below Nominal) reads Caution.
pub const HULL_CAUTION_FLOOR: f64 = 5_000.0;

/// Hull at or above this (and below Caution) reads Warning; below is Critical.
pub const HULL_WARNING_FLOOR: f64 = 2_000.0;

// --- Effects ---

/// Total runtime of an explosion animation (milliseconds).
pub const EXPLOSION_DURATION_MS: f64 = 750.0;

/// Explosion sprite sheet layout: columns and rows of frames.
pub const EXPLOSION_FRAME_COLS: u32 = 4;
pub const EXPLOSION_FRAME_ROWS: u32 = 4;

/// Pixel dimensions of one explosion frame.
pub const EXPLOSION_FRAME_SIZE: f64 = 64.0;

/// Total runtime of a floating score text (milliseconds).
pub const SCORE_TEXT_DURATION_MS: f64 = 1_000.0;

/// Upward drift of floating score text (pixels per millisecond).
pub const SCORE_TEXT_RISE: f64 = 0.04;
