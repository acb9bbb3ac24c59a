//! Ski Shooter - a downhill skiing arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, entities, collisions, session state)
//! - `highscores`: Top-5 leaderboard persisted to LocalStorage
//! - `settings`: Sound preference persisted to LocalStorage
//!
//! Rendering, audio playback and input devices are external collaborators:
//! they push intents into [`sim::TickInput`] and read the published
//! [`sim::Snapshot`] plus the drained [`sim::GameEvent`]s back out.

pub mod highscores;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Seconds per level before the difficulty ramps
    pub const LEVEL_DURATION_SECS: u32 = 15;
    /// Depth units advanced per millisecond at level 1
    pub const INITIAL_SPEED: f32 = 0.05;
    /// Added to the speed scalar on every level-up
    pub const SPEED_INCREMENT: f32 = 0.01;
    /// Far boundary of the simulation band (spawn horizon is depth 0)
    pub const MAX_DEPTH: f32 = 100.0;
    /// Entities below this depth are culled (projectiles may overshoot the horizon)
    pub const MIN_DEPTH: f32 = -5.0;

    /// Player physics
    pub const JUMP_FORCE: f32 = 2.5;
    pub const GRAVITY: f32 = 0.1;
    pub const PLAYER_MOVE_SPEED: f32 = 0.8;
    /// The skier's fixed depth on the slope
    pub const PLAYER_DEPTH: f32 = MAX_DEPTH - 5.0;
    /// Lateral clamp for the player; patrol entities bounce at the same bound
    pub const LATERAL_LIMIT: f32 = 45.0;
    /// Spawns land in [-SPAWN_LATERAL_RANGE, SPAWN_LATERAL_RANGE]
    pub const SPAWN_LATERAL_RANGE: f32 = 40.0;

    /// Scoring & lives
    pub const INITIAL_LIVES: i32 = 5;
    pub const COLLISION_PENALTY: u32 = 100;
    pub const CARROT_SCORE: u32 = 10;
    pub const SNOWMAN_SCORE: u32 = 50;
    pub const HUSKY_SCORE: u32 = 75;
    pub const CAT_SCORE: u32 = 100;
    pub const FOX_SCORE: u32 = 150;
    pub const POLAR_BEAR_SCORE: u32 = 200;

    /// Object widths (lateral units, for collision)
    pub const PLAYER_WIDTH: f32 = 8.0;
    pub const PLAYER_HEIGHT: f32 = 10.0;
    pub const SNOWMAN_WIDTH: f32 = 10.0;
    pub const HUSKY_WIDTH: f32 = 12.0;
    pub const CAT_WIDTH: f32 = 6.0;
    pub const FOX_WIDTH: f32 = 8.0;
    pub const POLAR_BEAR_WIDTH: f32 = 14.0;
    pub const CARROT_WIDTH: f32 = 5.0;
    pub const POWERUP_WIDTH: f32 = 6.0;
    pub const PROJECTILE_WIDTH: f32 = 3.0;

    /// Projectiles travel away from the camera this many times faster
    /// than the slope scrolls
    pub const PROJECTILE_SPEED_MULTIPLIER: f32 = 5.0;
    /// Depth closeness for a projectile-obstacle hit
    pub const PROJECTILE_HIT_RANGE: f32 = 5.0;
    /// Depth band around PLAYER_DEPTH within which player collisions are tested
    pub const COLLISION_BAND: f32 = 5.0;

    /// Spawner: base milliseconds between spawns, divided by the level
    pub const BASE_SPAWN_INTERVAL_MS: f32 = 1500.0;

    /// Fire cadence (milliseconds between shots)
    pub const FIRE_INTERVAL_MS: f32 = 250.0;
    pub const TURBO_FIRE_INTERVAL_MS: f32 = 80.0;
    /// How long a power-up pickup keeps turbo active
    pub const TURBO_DURATION_MS: f32 = 5000.0;

    /// Visual ski-trail fade time
    pub const TRAIL_FADE_MS: f32 = 400.0;
}
