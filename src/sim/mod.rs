//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only
//! - Seeded RNG only
//! - Stable draw order (insertion order, tracked by entity id)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::hits_any;
pub use entity::{Decoration, EntityId, Obstacle, Player, Rect};
pub use spawn::{SpawnTimer, Spawner};
pub use state::{GameState, Phase};
pub use tick::{TickOutput, tick};
