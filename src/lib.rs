//! Sky Dodge - a side-scrolling dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collision, tick)
//! - `config`: Session configuration
//! - `input` / `render` / `audio`: collaborator boundaries (traits only)
//! - `runner`: tick-paced session loop
//!
//! The crate is headless: rendering, audio playback and input polling live
//! behind traits and are supplied by the embedding platform.

pub mod audio;
pub mod config;
pub mod input;
pub mod render;
pub mod runner;
pub mod sim;

pub use config::Config;
pub use runner::{Pacer, Session, SessionSummary, StdPacer};

/// Game configuration defaults
pub mod consts {
    /// Screen extents in world units
    pub const SCREEN_WIDTH: i32 = 800;
    pub const SCREEN_HEIGHT: i32 = 600;

    /// Target tick rate (ticks per second)
    pub const TICK_RATE: u32 = 60;

    /// Player translation per active direction per tick
    pub const MOVE_STEP: i32 = 5;

    /// Spawn timer periods, measured on the tick clock (milliseconds)
    pub const OBSTACLE_PERIOD_MS: u32 = 250;
    pub const DECORATION_PERIOD_MS: u32 = 1000;

    /// Obstacle horizontal speed range (inclusive, units per tick)
    pub const OBSTACLE_SPEED_MIN: i32 = 5;
    pub const OBSTACLE_SPEED_MAX: i32 = 20;
    /// Decorations all drift at the same speed
    pub const DECORATION_SPEED: i32 = 5;

    /// Spawn jitter past the right screen edge (inclusive)
    pub const SPAWN_OFFSET_MIN: i32 = 20;
    pub const SPAWN_OFFSET_MAX: i32 = 100;
}
