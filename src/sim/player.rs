//! Player physics: jump arc and lateral movement
//!
//! Jump integration is per-call, not dt-scaled - the jump arc is coupled to
//! the frame rate on purpose. Scaling it by wall-clock time changes the
//! game feel the original shipped with, so the quirk is preserved; depth
//! scrolling elsewhere IS dt-scaled.

use serde::Serialize;

use crate::consts::*;

/// The skier. Singleton, mutated only by [`PlayerState::advance`] and the
/// jump intent handler.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct PlayerState {
    /// Left-right position, clamped to ±LATERAL_LIMIT
    pub lateral: f32,
    /// Height off the ground; 0 = grounded
    pub height: f32,
    pub is_jumping: bool,
    pub jump_velocity: f32,
}

impl PlayerState {
    /// Advance one tick of player physics from the held movement intents.
    ///
    /// Returns true when this tick ended a jump (the skier touched down).
    pub fn advance(&mut self, move_left: bool, move_right: bool) -> bool {
        let mut landed = false;
        if self.is_jumping {
            self.height += self.jump_velocity;
            self.jump_velocity -= GRAVITY;
            if self.height <= 0.0 {
                self.height = 0.0;
                self.is_jumping = false;
                self.jump_velocity = 0.0;
                landed = true;
            }
        }

        if move_left {
            self.lateral -= PLAYER_MOVE_SPEED;
        }
        if move_right {
            self.lateral += PLAYER_MOVE_SPEED;
        }
        self.lateral = self.lateral.clamp(-LATERAL_LIMIT, LATERAL_LIMIT);

        landed
    }

    /// Start a jump. Rejected (returns false) while already airborne.
    pub fn try_jump(&mut self) -> bool {
        if self.is_jumping {
            return false;
        }
        self.is_jumping = true;
        self.jump_velocity = JUMP_FORCE;
        true
    }

    /// Set lateral position directly (pointer input), clamped like movement
    pub fn set_lateral(&mut self, lateral: f32) {
        self.lateral = lateral.clamp(-LATERAL_LIMIT, LATERAL_LIMIT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_jump_matches_closed_form() {
        let mut p = PlayerState::default();
        assert!(p.try_jump());

        // h(n) = n*J - g*n*(n-1)/2 for per-call integration
        for n in 1u32..=20 {
            p.advance(false, false);
            let expected = n as f32 * JUMP_FORCE - GRAVITY * (n * (n - 1)) as f32 / 2.0;
            assert!(
                (p.height - expected).abs() < 1e-3,
                "tick {}: {} vs {}",
                n,
                p.height,
                expected
            );
        }
    }

    #[test]
    fn test_lands_exactly_at_zero() {
        let mut p = PlayerState::default();
        p.try_jump();

        let mut ticks = 0;
        while p.is_jumping {
            let landed = p.advance(false, false);
            ticks += 1;
            assert!(ticks < 1000, "never landed");
            if landed {
                break;
            }
        }
        assert_eq!(p.height, 0.0);
        assert!(!p.is_jumping);
        assert_eq!(p.jump_velocity, 0.0);
    }

    #[test]
    fn test_jump_rejected_while_airborne() {
        let mut p = PlayerState::default();
        assert!(p.try_jump());
        p.advance(false, false);
        assert!(!p.try_jump());
    }

    #[test]
    fn test_lateral_clamped() {
        let mut p = PlayerState::default();
        for _ in 0..200 {
            p.advance(true, false);
        }
        assert_eq!(p.lateral, -LATERAL_LIMIT);
        for _ in 0..400 {
            p.advance(false, true);
        }
        assert_eq!(p.lateral, LATERAL_LIMIT);
    }

    proptest! {
        #[test]
        fn prop_lateral_always_in_bounds(moves in proptest::collection::vec(any::<(bool, bool)>(), 0..300)) {
            let mut p = PlayerState::default();
            for (left, right) in moves {
                p.advance(left, right);
                prop_assert!((-LATERAL_LIMIT..=LATERAL_LIMIT).contains(&p.lateral));
            }
        }

        #[test]
        fn prop_height_never_negative(jump_at in proptest::collection::vec(0u32..50, 0..10)) {
            let mut p = PlayerState::default();
            for n in 0..200u32 {
                if jump_at.contains(&n) {
                    p.try_jump();
                }
                p.advance(false, false);
                prop_assert!(p.height >= 0.0);
            }
        }
    }
}
