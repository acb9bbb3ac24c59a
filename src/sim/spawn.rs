//! Probabilistic entity spawner
//!
//! One spawn at most per interval; the interval shrinks linearly with the
//! level so later levels get denser slopes.

use rand::Rng;

use super::entity::{Entity, EntityKind};
use super::state::GameState;
use crate::consts::*;

/// Map a uniform [0,1) roll onto the cumulative kind table.
///
/// The power-up bucket is suppressed while turbo is already active and
/// falls through to the collectible bucket, so pickups never stack.
pub fn draw_kind(roll: f32, turbo_active: bool) -> EntityKind {
    if roll < 0.20 {
        EntityKind::Snowman
    } else if roll < 0.30 {
        EntityKind::Husky
    } else if roll < 0.35 {
        EntityKind::Cat
    } else if roll < 0.45 {
        EntityKind::Fox
    } else if roll < 0.50 {
        EntityKind::PolarBear
    } else if roll < 0.55 && !turbo_active {
        EntityKind::PowerUp
    } else {
        EntityKind::Carrot
    }
}

/// Accumulate elapsed time and spawn one entity at the far horizon once the
/// level-dependent interval has passed.
pub fn maybe_spawn(state: &mut GameState, dt: f32) {
    state.since_last_spawn_ms += dt;
    let interval = BASE_SPAWN_INTERVAL_MS / state.level as f32;
    if state.since_last_spawn_ms <= interval {
        return;
    }
    state.since_last_spawn_ms = 0.0;

    let roll: f32 = state.rng.random();
    let kind = draw_kind(roll, state.turbo_active());
    let lateral = state.rng.random_range(-SPAWN_LATERAL_RANGE..=SPAWN_LATERAL_RANGE);

    let id = state.next_entity_id();
    let mut entity = Entity::spawned(id, kind, lateral);
    entity.variant = state.rng.random_range(0..3);

    if kind == EntityKind::Fox {
        let speed = 0.2 + state.rng.random::<f32>() * 0.2;
        let sign = if state.rng.random::<bool>() { 1.0 } else { -1.0 };
        entity.lateral_velocity = Some(speed * sign);
    }

    state.entities.push(entity);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::GameStatus;

    #[test]
    fn test_draw_kind_table() {
        assert_eq!(draw_kind(0.0, false), EntityKind::Snowman);
        assert_eq!(draw_kind(0.19, false), EntityKind::Snowman);
        assert_eq!(draw_kind(0.25, false), EntityKind::Husky);
        assert_eq!(draw_kind(0.32, false), EntityKind::Cat);
        assert_eq!(draw_kind(0.40, false), EntityKind::Fox);
        assert_eq!(draw_kind(0.47, false), EntityKind::PolarBear);
        assert_eq!(draw_kind(0.52, false), EntityKind::PowerUp);
        assert_eq!(draw_kind(0.60, false), EntityKind::Carrot);
        assert_eq!(draw_kind(0.999, false), EntityKind::Carrot);
    }

    #[test]
    fn test_powerup_suppressed_while_turbo() {
        assert_eq!(draw_kind(0.52, true), EntityKind::Carrot);
    }

    #[test]
    fn test_spawn_waits_for_interval() {
        let mut state = GameState::new(1);
        state.status = GameStatus::Playing;

        maybe_spawn(&mut state, 100.0);
        assert!(state.entities.is_empty());

        maybe_spawn(&mut state, BASE_SPAWN_INTERVAL_MS);
        assert_eq!(state.entities.len(), 1);
        assert_eq!(state.entities[0].depth, 0.0);
        assert!(state.entities[0].lateral.abs() <= SPAWN_LATERAL_RANGE);
        // Accumulator resets: the next small dt must not spawn again
        maybe_spawn(&mut state, 100.0);
        assert_eq!(state.entities.len(), 1);
    }

    #[test]
    fn test_interval_shrinks_with_level() {
        let mut state = GameState::new(1);
        state.status = GameStatus::Playing;
        state.level = 3;
        maybe_spawn(&mut state, BASE_SPAWN_INTERVAL_MS / 3.0 + 1.0);
        assert_eq!(state.entities.len(), 1);
    }

    #[test]
    fn test_no_powerups_spawn_under_turbo() {
        let mut state = GameState::new(99);
        state.status = GameStatus::Playing;
        state.turbo_ms_left = TURBO_DURATION_MS;
        for _ in 0..500 {
            maybe_spawn(&mut state, BASE_SPAWN_INTERVAL_MS + 1.0);
        }
        assert!(
            state
                .entities
                .iter()
                .all(|e| e.kind != EntityKind::PowerUp)
        );
        // Foxes picked up a patrol velocity
        assert!(
            state
                .entities
                .iter()
                .filter(|e| e.kind == EntityKind::Fox)
                .all(|e| e.lateral_velocity.is_some())
        );
    }
}
