//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Wall-clock dt comes in through `tick`, never read directly
//! - Seeded RNG only
//! - Stable iteration order (entities kept in insertion order)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod entity;
pub mod player;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Resolution, resolve};
pub use entity::{Entity, EntityKind, advance_all};
pub use player::PlayerState;
pub use state::{GameEvent, GameState, GameStatus, Snapshot};
pub use tick::{TickInput, tick};
