//! Entities and their per-variant update rules
//!
//! The original inheritance-style sprite hierarchy is flattened into three
//! plain structs with explicit update methods; shared geometry lives in
//! `Rect`.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::audio::{AudioRequest, SoundId};
use crate::config::Config;
use crate::input::InputState;

/// Monotonically increasing per-session entity id.
///
/// Ids double as insertion order, which is what keeps the draw pass stable.
pub type EntityId = u32;

/// Axis-aligned integer rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: IVec2,
    pub size: IVec2,
}

impl Rect {
    /// Panics on negative extents; every live entity must be a valid AABB.
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        assert!(w >= 0 && h >= 0, "rect extents must be non-negative ({w}x{h})");
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(w, h),
        }
    }

    pub fn from_center(center: IVec2, size: IVec2) -> Self {
        Self::new(center.x - size.x / 2, center.y - size.y / 2, size.x, size.y)
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    pub fn set_left(&mut self, left: i32) {
        self.pos.x = left;
    }

    pub fn set_right(&mut self, right: i32) {
        self.pos.x = right - self.size.x;
    }

    pub fn set_top(&mut self, top: i32) {
        self.pos.y = top;
    }

    pub fn set_bottom(&mut self, bottom: i32) {
        self.pos.y = bottom - self.size.y;
    }

    /// Move in place by `delta`
    pub fn translate(&mut self, delta: IVec2) {
        self.pos += delta;
    }

    /// AABB overlap test: both projections must overlap with non-zero extent
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// The player-controlled jet. Exactly one per session, never recreated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
}

impl Player {
    pub fn new(config: &Config) -> Self {
        Self {
            rect: Rect::new(0, 0, config.player_size.x, config.player_size.y),
        }
    }

    /// Translate by one step per active direction, then clamp on-screen.
    ///
    /// Directions apply independently, so a diagonal moves the full step on
    /// both axes. Up/down movement requests its movement sound; left/right
    /// is silent.
    pub fn apply_input(
        &mut self,
        input: &InputState,
        config: &Config,
        sounds: &mut Vec<AudioRequest>,
    ) {
        let step = config.move_step;
        if input.up {
            self.rect.translate(IVec2::new(0, -step));
            sounds.push(AudioRequest::Play(SoundId::MoveUp));
        }
        if input.down {
            self.rect.translate(IVec2::new(0, step));
            sounds.push(AudioRequest::Play(SoundId::MoveDown));
        }
        if input.left {
            self.rect.translate(IVec2::new(-step, 0));
        }
        if input.right {
            self.rect.translate(IVec2::new(step, 0));
        }

        // Keep the jet fully on screen. Top/bottom use inclusive
        // comparisons and clamp even when merely touching the edge.
        if self.rect.left() < 0 {
            self.rect.set_left(0);
        }
        if self.rect.right() > config.screen_width {
            self.rect.set_right(config.screen_width);
        }
        if self.rect.top() <= 0 {
            self.rect.set_top(0);
        }
        if self.rect.bottom() >= config.screen_height {
            self.rect.set_bottom(config.screen_height);
        }
    }
}

/// A missile sweeping right-to-left at a per-instance speed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: EntityId,
    pub rect: Rect,
    /// Assigned at spawn from the configured range, fixed for the lifetime
    pub speed: i32,
}

impl Obstacle {
    /// Advance one tick. Returns false once the right edge has fully
    /// crossed the left screen boundary and the missile should be removed.
    pub fn advance(&mut self) -> bool {
        self.rect.translate(IVec2::new(-self.speed, 0));
        self.rect.right() >= 0
    }
}

/// A cloud drifting right-to-left at the shared decoration speed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decoration {
    pub id: EntityId,
    pub rect: Rect,
}

impl Decoration {
    /// Advance one tick; same off-screen rule as obstacles.
    pub fn advance(&mut self, speed: i32) -> bool {
        self.rect.translate(IVec2::new(-speed, 0));
        self.rect.right() >= 0
    }
}
