//! Session configuration
//!
//! One `Config` is built at startup and threaded through the spawner,
//! movement code and session runner. No ambient globals.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::render::Rgb;

/// All tunables for one session.
///
/// `Default` mirrors the classic 800x600 setup. Screen dimensions and the
/// tick rate must be positive; `validate` panics otherwise since an invalid
/// config is a programming fault, not a runtime condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Horizontal screen extent in world units
    pub screen_width: i32,
    /// Vertical screen extent in world units
    pub screen_height: i32,
    /// Target tick rate (ticks per second)
    pub tick_rate: u32,
    /// Player translation per active direction per tick
    pub move_step: i32,
    /// Obstacle spawn timer period (milliseconds on the tick clock)
    pub obstacle_period_ms: u32,
    /// Decoration spawn timer period (milliseconds on the tick clock)
    pub decoration_period_ms: u32,
    /// Obstacle speed range, inclusive on both ends (units per tick)
    pub obstacle_speed_min: i32,
    pub obstacle_speed_max: i32,
    /// Constant decoration drift speed (units per tick)
    pub decoration_speed: i32,
    /// Spawn jitter past the right screen edge, inclusive
    pub spawn_offset_min: i32,
    pub spawn_offset_max: i32,
    /// Sprite bounds
    pub player_size: IVec2,
    pub obstacle_size: IVec2,
    pub decoration_size: IVec2,
    /// Background fill color
    pub background: Rgb,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            tick_rate: TICK_RATE,
            move_step: MOVE_STEP,
            obstacle_period_ms: OBSTACLE_PERIOD_MS,
            decoration_period_ms: DECORATION_PERIOD_MS,
            obstacle_speed_min: OBSTACLE_SPEED_MIN,
            obstacle_speed_max: OBSTACLE_SPEED_MAX,
            decoration_speed: DECORATION_SPEED,
            spawn_offset_min: SPAWN_OFFSET_MIN,
            spawn_offset_max: SPAWN_OFFSET_MAX,
            player_size: IVec2::new(50, 30),
            obstacle_size: IVec2::new(50, 30),
            decoration_size: IVec2::new(100, 60),
            background: Rgb::SKY_BLUE,
        }
    }
}

impl Config {
    /// Assert invariants that the simulation relies on.
    ///
    /// Called once from `GameState::new`; failures abort loudly.
    pub fn validate(&self) {
        assert!(
            self.screen_width > 0 && self.screen_height > 0,
            "screen dimensions must be positive (got {}x{})",
            self.screen_width,
            self.screen_height
        );
        assert!(self.tick_rate > 0, "tick rate must be positive");
        assert!(
            self.obstacle_speed_min <= self.obstacle_speed_max,
            "obstacle speed range is inverted"
        );
        assert!(
            self.spawn_offset_min <= self.spawn_offset_max,
            "spawn offset range is inverted"
        );
        assert!(
            self.player_size.x > 0 && self.player_size.y > 0,
            "player bounds must have positive extents"
        );
    }

    /// Milliseconds of simulated time advanced per tick
    pub fn ms_per_tick(&self) -> f32 {
        1000.0 / self.tick_rate as f32
    }

    /// Serialize to JSON (settings files, replay headers)
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON, falling back to defaults on error
    pub fn from_json_or_default(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to parse config ({e}), using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_consts() {
        let cfg = Config::default();
        cfg.validate();
        assert_eq!(cfg.screen_width, 800);
        assert_eq!(cfg.screen_height, 600);
        assert_eq!(cfg.tick_rate, 60);
        assert_eq!(cfg.move_step, 5);
    }

    #[test]
    fn test_json_round_trip() {
        let cfg = Config::default();
        let json = cfg.to_json().unwrap();
        let back = Config::from_json_or_default(&json);
        assert_eq!(cfg, back);
    }

    #[test]
    fn test_bad_json_falls_back_to_default() {
        let cfg = Config::from_json_or_default("{not json");
        assert_eq!(cfg, Config::default());
    }

    #[test]
    #[should_panic(expected = "screen dimensions must be positive")]
    fn test_validate_rejects_zero_screen() {
        let cfg = Config {
            screen_width: 0,
            ..Default::default()
        };
        cfg.validate();
    }

    #[test]
    #[should_panic(expected = "tick rate must be positive")]
    fn test_validate_rejects_zero_tick_rate() {
        let cfg = Config {
            tick_rate: 0,
            ..Default::default()
        };
        cfg.validate();
    }
}
