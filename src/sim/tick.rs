//! Per-frame simulation tick
//!
//! Within one tick the order is fixed: player physics, entity bulk advance,
//! fire trigger, spawner, collision resolution, state publish. The level
//! timer and turbo expiry are explicit accumulators checked here rather
//! than host timer callbacks, so pause/resume and re-arming need no
//! cancellation handshake.

use super::collision::{self, Resolution};
use super::entity::{self, Entity};
use super::spawn;
use super::state::{GameEvent, GameState, GameStatus};
use crate::consts::*;

/// Input intents for a single tick.
///
/// `move_left`/`move_right`/`fire` are held while the key is down;
/// `jump`/`pause`/`start` are one-shot and cleared by the host after the
/// tick consumes them.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub fire: bool,
    pub jump: bool,
    pub pause: bool,
    pub start: bool,
}

/// Advance the session by one frame of `dt` milliseconds.
///
/// Intent routing: while Idle/GameOver only `start` is accepted, while
/// Paused only the pause toggle, while Playing everything. The transition
/// frame itself never advances the simulation, and a `dt` of 0 (the first
/// frame after start/resume) is a no-op advance so paused wall-clock time
/// is discarded rather than caught up.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.start && matches!(state.status, GameStatus::Idle | GameStatus::GameOver) {
        state.start();
        log::info!("session started (seed {})", state.seed);
        return;
    }

    if input.pause {
        match state.status {
            GameStatus::Playing => {
                state.status = GameStatus::Paused;
                // Turbo never persists across a non-playing state
                state.cancel_turbo();
                return;
            }
            GameStatus::Paused => {
                state.status = GameStatus::Playing;
                return;
            }
            _ => {}
        }
    }

    if state.status != GameStatus::Playing {
        return;
    }

    // Jump is edge-triggered and rejected while airborne
    if input.jump && state.player.try_jump() {
        state.events.push(GameEvent::Jump);
    }

    if dt <= 0.0 {
        return;
    }

    // 1. Player physics (jump arc and lateral speed are per-call)
    let landed = state.player.advance(input.move_left, input.move_right);
    if landed {
        let id = state.next_entity_id();
        let lateral = state.player.lateral;
        state.entities.push(Entity::trail(id, lateral));
    }

    // 2. Entity bulk advance + depth culling
    entity::advance_all(&mut state.entities, dt, state.game_speed);

    // 3. Continuous-fire trigger
    state.since_last_shot_ms += dt;
    let fire_interval = if state.turbo_active() {
        TURBO_FIRE_INTERVAL_MS
    } else {
        FIRE_INTERVAL_MS
    };
    if input.fire && state.since_last_shot_ms > fire_interval {
        state.since_last_shot_ms = 0.0;
        let id = state.next_entity_id();
        let lateral = state.player.lateral;
        state.entities.push(Entity::projectile(id, lateral));
        state.events.push(GameEvent::Shoot);
    }

    // 4. Spawner
    spawn::maybe_spawn(state, dt);

    // 5. Collision resolution, applied in one step
    let res = collision::resolve(&state.player, &state.entities);
    apply_resolution(state, res);

    #[cfg(debug_assertions)]
    {
        let mut seen = std::collections::HashSet::new();
        debug_assert!(
            state.entities.iter().all(|e| seen.insert(e.id)),
            "duplicate entity id in store"
        );
    }

    // 6. Turbo countdown
    if state.turbo_ms_left > 0.0 {
        state.turbo_ms_left = (state.turbo_ms_left - dt).max(0.0);
    }

    // 7. Level timer: one-second cadence via accumulator
    state.level_timer_ms += dt;
    while state.level_timer_ms >= 1000.0 && state.status == GameStatus::Playing {
        state.level_timer_ms -= 1000.0;
        second_elapsed(state);
    }
}

/// Apply an aggregated collision outcome to the session.
fn apply_resolution(state: &mut GameState, res: Resolution) {
    debug_assert!(
        res.removed
            .iter()
            .all(|id| state.entities.iter().any(|e| e.id == *id)),
        "resolution marked an entity that is not in the store"
    );

    // Pickups re-arm the countdown even while already active: duration
    // resets, it never stacks.
    if res.powerups > 0 {
        state.turbo_ms_left = TURBO_DURATION_MS;
    }

    // The leaderboard gets the score as it stood before the fatal hit
    let score_before = state.score;
    for _ in 0..res.obstacle_hits {
        state.score = state.score.saturating_sub(COLLISION_PENALTY);
        state.lives -= 1;
    }

    state.score += res.score_gain;

    if !res.removed.is_empty() {
        state.entities.retain(|e| !res.removed.contains(&e.id));
    }
    state.events.extend(res.events);

    if res.obstacle_hits > 0 && state.lives <= 0 {
        state.status = GameStatus::GameOver;
        state.cancel_turbo();
        state.events.push(GameEvent::GameOver {
            final_score: score_before,
        });
        log::info!(
            "game over at level {} with final score {}",
            state.level,
            score_before
        );
    }
}

/// One real-time second of play elapsed: count the level down and ramp the
/// difficulty when it hits zero.
fn second_elapsed(state: &mut GameState) {
    if state.time_left <= 1 {
        state.level += 1;
        state.lives += 1;
        state.game_speed += SPEED_INCREMENT;
        state.time_left = LEVEL_DURATION_SECS;
        state.events.push(GameEvent::LevelUp);
        log::debug!("level up to {} (speed {:.2})", state.level, state.game_speed);
    } else {
        state.time_left -= 1;
    }
}
