//! Renderer boundary
//!
//! The core never draws anything itself. Once per tick it hands the
//! embedding platform a background color and the sprites to blit, in a
//! stable order.

use serde::{Deserialize, Serialize};

use crate::sim::Rect;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Classic daytime-sky background
    pub const SKY_BLUE: Rgb = Rgb {
        r: 135,
        g: 206,
        b: 250,
    };
}

/// Which sprite to draw for an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Jet,
    Missile,
    Cloud,
}

/// One draw request: blit `kind` at `rect`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawRequest {
    pub kind: SpriteKind,
    pub rect: Rect,
}

/// Accepts one frame's worth of draw requests.
///
/// Failures on the platform side are fatal to the session and handled
/// outside the core, so the contract is infallible here.
pub trait Renderer {
    fn draw_frame(&mut self, background: Rgb, sprites: &[DrawRequest]);
}

/// Discards every frame. Used by tests and headless runs.
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw_frame(&mut self, _background: Rgb, _sprites: &[DrawRequest]) {}
}
