//! Input boundary
//!
//! The core consumes abstract direction signals and a drained event queue;
//! it never touches a keyboard or window API.

/// Currently-active directional signals, sampled once per tick.
///
/// Each direction is independent: several may be active at once, which is
/// what makes diagonal movement possible (and intentionally faster than
/// axial movement - no normalization).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl InputState {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// Discrete external events, drained in arrival order once per tick.
///
/// The spawn variants model externally-driven periodic timers (the
/// in-simulation spawn timers fire independently of these).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Window close / external shutdown request
    Quit,
    /// Escape key pressed
    Escape,
    /// Obstacle spawn timer elapsed
    SpawnObstacle,
    /// Decoration spawn timer elapsed
    SpawnDecoration,
}

/// Source of input for a session: pressed-state sampling plus an ordered
/// event queue.
pub trait InputSource {
    /// Drain all pending events into `out`, preserving arrival order.
    fn drain_events(&mut self, out: &mut Vec<GameEvent>);

    /// Sample the currently-active directional signals.
    fn pressed(&self) -> InputState;
}

/// One scripted tick of input
#[derive(Debug, Clone, Default)]
pub struct ScriptFrame {
    pub pressed: InputState,
    pub events: Vec<GameEvent>,
}

impl ScriptFrame {
    pub fn held(pressed: InputState) -> Self {
        Self {
            pressed,
            events: Vec::new(),
        }
    }

    pub fn event(event: GameEvent) -> Self {
        Self {
            pressed: InputState::none(),
            events: vec![event],
        }
    }
}

/// Plays back a fixed per-tick script, then reports `Quit`.
///
/// Used by tests and the headless demo binary.
#[derive(Debug, Clone)]
pub struct ScriptedInput {
    frames: Vec<ScriptFrame>,
    cursor: usize,
    current: InputState,
}

impl ScriptedInput {
    pub fn new(frames: Vec<ScriptFrame>) -> Self {
        Self {
            frames,
            cursor: 0,
            current: InputState::none(),
        }
    }

    /// A script that holds `pressed` for `ticks` ticks.
    pub fn hold(pressed: InputState, ticks: usize) -> Self {
        Self::new(vec![ScriptFrame::held(pressed); ticks])
    }
}

impl InputSource for ScriptedInput {
    fn drain_events(&mut self, out: &mut Vec<GameEvent>) {
        if let Some(frame) = self.frames.get(self.cursor) {
            out.extend_from_slice(&frame.events);
            self.current = frame.pressed;
            self.cursor += 1;
        } else {
            // Script exhausted: request shutdown so sessions always end
            out.push(GameEvent::Quit);
            self.current = InputState::none();
        }
    }

    fn pressed(&self) -> InputState {
        self.current
    }
}
