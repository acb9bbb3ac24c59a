//! Session state and core simulation types
//!
//! Everything that drives gameplay lives on [`GameState`]; the host only
//! ever reads it back through [`Snapshot`] and the drained event queue.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::entity::Entity;
use super::player::PlayerState;
use crate::consts::*;

/// Top-level session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GameStatus {
    /// Waiting for the first start intent
    Idle,
    /// Active gameplay
    Playing,
    /// Simulation suspended, only resume is accepted
    Paused,
    /// Run ended, waiting for a restart intent
    GameOver,
}

/// Fire-and-forget notifications for the audio collaborator.
///
/// Drained by the host each frame; the core never queries them back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Session started (also the level-up fanfare in the original)
    Start,
    Jump,
    Shoot,
    /// Carrot collected
    Collect,
    /// Player rammed an obstacle, or a projectile destroyed one
    Hit,
    PowerUp,
    LevelUp,
    /// Run ended; carries the score to hand off to the leaderboard
    GameOver { final_score: u32 },
}

/// Complete simulation state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub status: GameStatus,
    /// Never goes negative; penalties floor at 0
    pub score: u32,
    /// 1-based; spawn rate and speed ramp with it
    pub level: u32,
    /// Can exceed INITIAL_LIVES via level-up bonus; game over at <= 0
    pub lives: i32,
    /// Seconds remaining in the current level
    pub time_left: u32,
    /// Depth units per millisecond, ramps with level
    pub game_speed: f32,
    pub player: PlayerState,
    /// Live entities in insertion order (ids are monotonic, never reused)
    pub entities: Vec<Entity>,
    /// Pending notifications, drained by the host after each tick
    pub events: Vec<GameEvent>,
    /// Turbo countdown; > 0 means active. Re-armed to TURBO_DURATION_MS on
    /// pickup, zeroed whenever the session leaves Playing.
    pub turbo_ms_left: f32,
    /// Fire-trigger accumulator (ms since last shot)
    pub since_last_shot_ms: f32,
    /// Spawner accumulator (ms since last spawn)
    pub since_last_spawn_ms: f32,
    /// Level-timer accumulator; fires one whole second at a time
    pub level_timer_ms: f32,
    /// Session RNG (spawn rolls only)
    pub rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Create a fresh session in the Idle state
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            status: GameStatus::Idle,
            score: 0,
            level: 1,
            lives: INITIAL_LIVES,
            time_left: LEVEL_DURATION_SECS,
            game_speed: INITIAL_SPEED,
            player: PlayerState::default(),
            entities: Vec::new(),
            events: Vec::new(),
            turbo_ms_left: 0.0,
            since_last_shot_ms: 0.0,
            since_last_spawn_ms: 0.0,
            level_timer_ms: 0.0,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID (monotonic, never reused within a session)
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn turbo_active(&self) -> bool {
        self.turbo_ms_left > 0.0
    }

    /// Cancel any pending turbo expiry. Called on every transition out of
    /// Playing so turbo never persists across a non-playing state.
    pub fn cancel_turbo(&mut self) {
        self.turbo_ms_left = 0.0;
    }

    /// Reset all session scalars and begin playing.
    ///
    /// Valid from Idle and GameOver; the caller gates on status. The RNG is
    /// not reseeded, so restarts within one session stay on the same stream.
    pub fn start(&mut self) {
        self.score = 0;
        self.level = 1;
        self.lives = INITIAL_LIVES;
        self.time_left = LEVEL_DURATION_SECS;
        self.game_speed = INITIAL_SPEED;
        self.player = PlayerState::default();
        self.entities.clear();
        self.turbo_ms_left = 0.0;
        self.since_last_shot_ms = 0.0;
        self.since_last_spawn_ms = 0.0;
        self.level_timer_ms = 0.0;
        self.status = GameStatus::Playing;
        self.events.push(GameEvent::Start);
    }

    /// Take all pending events, leaving the queue empty
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Read-only view published after each tick for the rendering collaborator
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            status: self.status,
            score: self.score,
            level: self.level,
            lives: self.lives,
            time_left: self.time_left,
            turbo_active: self.turbo_active(),
            player: &self.player,
            entities: &self.entities,
        }
    }
}

/// Immutable per-frame state snapshot.
///
/// The renderer subscribes to snapshot-updated notifications and never
/// feeds anything back into the simulation.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub status: GameStatus,
    pub score: u32,
    pub level: u32,
    pub lives: i32,
    pub time_left: u32,
    pub turbo_active: bool,
    pub player: &'a PlayerState,
    pub entities: &'a [Entity],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_idle() {
        let state = GameState::new(42);
        assert_eq!(state.status, GameStatus::Idle);
        assert_eq!(state.lives, INITIAL_LIVES);
        assert!(state.entities.is_empty());
    }

    #[test]
    fn test_entity_ids_monotonic() {
        let mut state = GameState::new(42);
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        assert!(b > a);
    }

    #[test]
    fn test_start_resets_session_scalars() {
        let mut state = GameState::new(42);
        state.score = 500;
        state.level = 3;
        state.lives = 1;
        state.game_speed = 0.09;
        state.turbo_ms_left = 2000.0;
        state.status = GameStatus::GameOver;

        state.start();

        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.lives, INITIAL_LIVES);
        assert_eq!(state.time_left, LEVEL_DURATION_SECS);
        assert!(!state.turbo_active());
        assert!(state.entities.is_empty());
        assert_eq!(state.drain_events(), vec![GameEvent::Start]);
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::new(7);
        let json = serde_json::to_string(&state.snapshot()).unwrap();
        assert!(json.contains("\"idle\""));
    }
}
