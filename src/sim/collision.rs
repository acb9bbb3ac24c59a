//! Collision detection and scoring resolution
//!
//! Two independent passes over the entities in the depth band around the
//! player, both pure: the outcome is aggregated into a [`Resolution`] and
//! applied to the session by the tick orchestrator in one step.

use std::collections::HashSet;

use super::entity::{Entity, EntityKind};
use super::player::PlayerState;
use super::state::GameEvent;
use crate::consts::*;

/// Aggregated outcome of one collision resolution
#[derive(Debug, Default)]
pub struct Resolution {
    /// Total points gained this tick (collects + kills), applied once
    pub score_gain: u32,
    /// Obstacles the player rammed; each costs a life and a score penalty
    pub obstacle_hits: u32,
    /// Power-ups picked up; each re-arms the turbo countdown
    pub powerups: u32,
    /// Ids to remove from the entity store in one filter pass
    pub removed: HashSet<u32>,
    pub events: Vec<GameEvent>,
}

/// Resolve player-entity and projectile-obstacle overlaps for this tick.
///
/// Pass 1 (player vs. band) runs first and its removal marks take
/// precedence: an obstacle removed by ramming the player cannot also
/// register a projectile hit in the same tick. Iteration is insertion
/// order; once a projectile or obstacle is marked removed it is skipped
/// for all later pairings.
pub fn resolve(player: &PlayerState, entities: &[Entity]) -> Resolution {
    let mut res = Resolution::default();

    // Pass 1: player vs. everything in the collision band
    for e in entities {
        if (e.depth - PLAYER_DEPTH).abs() >= COLLISION_BAND {
            continue;
        }
        let overlap =
            (e.lateral - player.lateral).abs() < (PLAYER_WIDTH + e.kind.collision_width()) / 2.0;
        if !overlap {
            continue;
        }

        if e.kind.is_obstacle() {
            // Jumping high enough clears the obstacle unharmed
            if player.height < PLAYER_HEIGHT {
                res.obstacle_hits += 1;
                res.removed.insert(e.id);
                res.events.push(GameEvent::Hit);
            }
        } else if e.kind == EntityKind::Carrot {
            res.score_gain += CARROT_SCORE;
            res.removed.insert(e.id);
            res.events.push(GameEvent::Collect);
        } else if e.kind == EntityKind::PowerUp {
            res.powerups += 1;
            res.removed.insert(e.id);
            res.events.push(GameEvent::PowerUp);
        }
    }

    // Pass 2: projectiles vs. obstacles, pairwise in insertion order
    for p in entities.iter().filter(|e| e.kind == EntityKind::Projectile) {
        if res.removed.contains(&p.id) {
            continue;
        }
        for o in entities.iter().filter(|e| e.kind.is_obstacle()) {
            if res.removed.contains(&o.id) {
                continue;
            }
            let depth_close = (p.depth - o.depth).abs() < PROJECTILE_HIT_RANGE;
            let lateral_close = (p.lateral - o.lateral).abs()
                < (PROJECTILE_WIDTH + o.kind.collision_width()) / 2.0;
            if depth_close && lateral_close {
                res.score_gain += o.kind.kill_score();
                res.removed.insert(p.id);
                res.removed.insert(o.id);
                res.events.push(GameEvent::Hit);
                // This projectile is spent; no double-scoring
                break;
            }
        }
    }

    res
}
