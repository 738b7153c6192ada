//! Time-driven entity spawning
//!
//! Two periodic timers run on the tick clock; each elapse produces exactly
//! one entity at a randomized position just past the right screen edge.
//! The RNG is injected and seedable so spawn sequences replay exactly.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::entity::{Decoration, EntityId, Obstacle, Rect};
use crate::config::Config;

/// A periodic millisecond timer advanced once per tick.
///
/// Periods repeat indefinitely; `advance` reports how many elapsed this
/// tick (normally 0 or 1, more only when the period is shorter than the
/// tick interval).
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnTimer {
    period_ms: f32,
    elapsed_ms: f32,
}

impl SpawnTimer {
    pub fn new(period_ms: u32) -> Self {
        assert!(period_ms > 0, "spawn timer period must be positive");
        Self {
            period_ms: period_ms as f32,
            elapsed_ms: 0.0,
        }
    }

    pub fn advance(&mut self, dt_ms: f32) -> u32 {
        self.elapsed_ms += dt_ms;
        let mut due = 0;
        while self.elapsed_ms >= self.period_ms {
            self.elapsed_ms -= self.period_ms;
            due += 1;
        }
        due
    }
}

/// Produces obstacles and decorations on a fixed schedule.
///
/// Spawning never fails; invalid screen dimensions are caught up front by
/// `Config::validate`.
#[derive(Clone)]
pub struct Spawner {
    rng: Pcg32,
    obstacle_timer: SpawnTimer,
    decoration_timer: SpawnTimer,
}

impl Spawner {
    pub fn new(seed: u64, config: &Config) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            obstacle_timer: SpawnTimer::new(config.obstacle_period_ms),
            decoration_timer: SpawnTimer::new(config.decoration_period_ms),
        }
    }

    /// Advance both timers by one tick's worth of milliseconds.
    ///
    /// Returns `(obstacles_due, decorations_due)`.
    pub fn poll(&mut self, dt_ms: f32) -> (u32, u32) {
        (
            self.obstacle_timer.advance(dt_ms),
            self.decoration_timer.advance(dt_ms),
        )
    }

    /// Random spawn center: just off-screen-right with jitter, anywhere on
    /// the vertical extent. Both ranges are inclusive.
    fn spawn_center(&mut self, config: &Config) -> IVec2 {
        let x = config.screen_width
            + self
                .rng
                .random_range(config.spawn_offset_min..=config.spawn_offset_max);
        let y = self.rng.random_range(0..=config.screen_height);
        IVec2::new(x, y)
    }

    pub fn spawn_obstacle(&mut self, config: &Config, id: EntityId) -> Obstacle {
        let center = self.spawn_center(config);
        let speed = self
            .rng
            .random_range(config.obstacle_speed_min..=config.obstacle_speed_max);
        Obstacle {
            id,
            rect: Rect::from_center(center, config.obstacle_size),
            speed,
        }
    }

    pub fn spawn_decoration(&mut self, config: &Config, id: EntityId) -> Decoration {
        let center = self.spawn_center(config);
        Decoration {
            id,
            rect: Rect::from_center(center, config.decoration_size),
        }
    }
}
