//! Slope entities: obstacles, collectibles, projectiles and visual trails
//!
//! One canonical table per concern (collision width, kill score) instead of
//! inline kind branching in each collision pass.

use serde::Serialize;

use crate::consts::*;

/// Tagged entity kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Snowman,
    Husky,
    Cat,
    /// Patrols laterally, bouncing off the slope bounds
    Fox,
    PolarBear,
    /// Collectible
    Carrot,
    PowerUp,
    Projectile,
    /// Decaying visual-only ski trail; never collides
    Trail,
}

impl EntityKind {
    /// Whether colliding with (or shooting) this kind damages/scores
    pub fn is_obstacle(self) -> bool {
        matches!(
            self,
            EntityKind::Snowman
                | EntityKind::Husky
                | EntityKind::Cat
                | EntityKind::Fox
                | EntityKind::PolarBear
        )
    }

    /// Lateral extent used by both collision passes.
    /// Visual-only kinds are width 0 and therefore can never collide.
    pub fn collision_width(self) -> f32 {
        match self {
            EntityKind::Snowman => SNOWMAN_WIDTH,
            EntityKind::Husky => HUSKY_WIDTH,
            EntityKind::Cat => CAT_WIDTH,
            EntityKind::Fox => FOX_WIDTH,
            EntityKind::PolarBear => POLAR_BEAR_WIDTH,
            EntityKind::Carrot => CARROT_WIDTH,
            EntityKind::PowerUp => POWERUP_WIDTH,
            EntityKind::Projectile => PROJECTILE_WIDTH,
            EntityKind::Trail => 0.0,
        }
    }

    /// Points awarded for destroying this kind with a projectile
    pub fn kill_score(self) -> u32 {
        match self {
            EntityKind::Snowman => SNOWMAN_SCORE,
            EntityKind::Husky => HUSKY_SCORE,
            EntityKind::Cat => CAT_SCORE,
            EntityKind::Fox => FOX_SCORE,
            EntityKind::PolarBear => POLAR_BEAR_SCORE,
            _ => 0,
        }
    }
}

/// One spawned or fired object on the slope
#[derive(Debug, Clone, Serialize)]
pub struct Entity {
    pub id: u32,
    pub kind: EntityKind,
    /// Shared lateral coordinate space with the player; only the player is
    /// clamped - entities may drift out and get culled
    pub lateral: f32,
    /// 0 = spawn horizon; grows toward the camera for everything except
    /// projectiles, which travel away
    pub depth: f32,
    /// Vertical offset, visual only for most kinds
    pub height: f32,
    /// Oscillating patrol velocity (Fox); sign flips at the lateral bounds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lateral_velocity: Option<f32>,
    /// Remaining lifetime fraction for decaying visual kinds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub life: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_life: Option<f32>,
    /// Cosmetic sprite variation, never consulted by the sim
    pub variant: u8,
}

impl Entity {
    /// A freshly spawned slope entity at the far horizon
    pub fn spawned(id: u32, kind: EntityKind, lateral: f32) -> Self {
        Self {
            id,
            kind,
            lateral,
            depth: 0.0,
            height: 0.0,
            lateral_velocity: None,
            life: None,
            max_life: None,
            variant: 0,
        }
    }

    /// A projectile fired from the player's position
    pub fn projectile(id: u32, lateral: f32) -> Self {
        Self {
            id,
            kind: EntityKind::Projectile,
            lateral,
            depth: PLAYER_DEPTH - 1.0,
            height: PLAYER_HEIGHT / 2.0,
            lateral_velocity: None,
            life: None,
            max_life: None,
            variant: 0,
        }
    }

    /// A fading ski-trail puff left where the skier landed
    pub fn trail(id: u32, lateral: f32) -> Self {
        Self {
            id,
            kind: EntityKind::Trail,
            lateral,
            depth: PLAYER_DEPTH,
            height: 0.0,
            lateral_velocity: None,
            life: Some(1.0),
            max_life: Some(1.0),
            variant: 0,
        }
    }
}

/// Bulk advance-and-filter for the entity store.
///
/// Projectiles move toward the spawn horizon, everything else scrolls
/// toward the camera, both frame-rate independent via `dt` (milliseconds).
/// Entities whose depth leaves (MIN_DEPTH, MAX_DEPTH) are culled, as are
/// fully faded trails.
pub fn advance_all(entities: &mut Vec<Entity>, dt: f32, game_speed: f32) {
    for e in entities.iter_mut() {
        e.depth += if e.kind == EntityKind::Projectile {
            -game_speed * PROJECTILE_SPEED_MULTIPLIER * dt
        } else {
            game_speed * dt
        };

        if let Some(vx) = e.lateral_velocity {
            e.lateral += vx * (dt / 16.0);
            // Bounce, don't clamp: reverse patrol direction at the bounds
            if (e.lateral > LATERAL_LIMIT && vx > 0.0) || (e.lateral < -LATERAL_LIMIT && vx < 0.0)
            {
                e.lateral_velocity = Some(-vx);
            }
        }

        if let Some(life) = e.life {
            e.life = Some(life - dt / TRAIL_FADE_MS);
        }
    }

    entities.retain(|e| {
        e.depth > MIN_DEPTH && e.depth < MAX_DEPTH && e.life.is_none_or(|l| l > 0.0)
    });
}
