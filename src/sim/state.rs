//! Game state and phase machine
//!
//! All mutable session state lives here and is owned by the simulation
//! loop. Entity collections are kept in insertion order (ids increase
//! monotonically), which gives the draw pass its stable ordering.

use super::entity::{Decoration, EntityId, Obstacle, Player};
use super::spawn::Spawner;
use crate::config::Config;

/// Loop phase. `Terminated` is terminal: no further updates occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Running,
    Terminated,
}

/// Complete per-session simulation state.
///
/// The obstacle and decoration vectors are the variant-specific subsets of
/// the conceptual all-entities set; the draw pass reconstructs the union in
/// id (insertion) order. Removing an entity removes it from both views
/// atomically - there is exactly one owner.
pub struct GameState {
    /// Session seed, for log lines and deterministic replay
    pub seed: u64,
    pub config: Config,
    pub phase: Phase,
    /// Ticks advanced so far
    pub time_ticks: u64,
    pub player: Player,
    /// Destroying the player is always paired with `Phase::Terminated`
    pub player_alive: bool,
    /// Collision set; disjoint from `decorations`
    pub obstacles: Vec<Obstacle>,
    /// Background drift set; never collision-tested
    pub decorations: Vec<Decoration>,
    pub spawner: Spawner,
    /// Obstacles that left the screen without hitting the player
    pub dodged: u64,
    next_id: EntityId,
}

impl GameState {
    /// Build a fresh session. Panics on an invalid config (programming
    /// fault, not a recoverable error).
    pub fn new(config: Config, seed: u64) -> Self {
        config.validate();
        let player = Player::new(&config);
        let spawner = Spawner::new(seed, &config);
        Self {
            seed,
            config,
            phase: Phase::Running,
            time_ticks: 0,
            player,
            player_alive: true,
            obstacles: Vec::new(),
            decorations: Vec::new(),
            spawner,
            dodged: 0,
            next_id: 1,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Allocate the next entity id (insertion-order draw key)
    pub fn next_entity_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn one obstacle and register it in the collision set
    pub fn spawn_obstacle(&mut self) {
        let id = self.next_entity_id();
        let obstacle = self.spawner.spawn_obstacle(&self.config, id);
        self.obstacles.push(obstacle);
    }

    /// Spawn one decoration and register it in the drift set
    pub fn spawn_decoration(&mut self) {
        let id = self.next_entity_id();
        let decoration = self.spawner.spawn_decoration(&self.config, id);
        self.decorations.push(decoration);
    }
}
