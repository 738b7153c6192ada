//! Per-tick simulation advance
//!
//! The control-flow hub: drains events, applies input, fires spawn timers,
//! integrates movement, checks collisions and emits the frame's draw and
//! audio requests. Pure with respect to its collaborators - the session
//! runner forwards the output to the renderer and audio sink.

use super::collision::hits_any;
use super::state::{GameState, Phase};
use crate::audio::{AudioRequest, SoundId};
use crate::input::{GameEvent, InputState};
use crate::render::{DrawRequest, Rgb, SpriteKind};

/// Everything one tick asks of the outside world
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickOutput {
    /// Background fill for this frame
    pub background: Rgb,
    /// Draw requests in stable insertion order (player first)
    pub draws: Vec<DrawRequest>,
    /// Audio requests in emission order
    pub sounds: Vec<AudioRequest>,
    /// False once the session has terminated; the loop exits after this
    /// tick instead of waiting for the next one
    pub running: bool,
}

/// Advance the simulation by one tick.
///
/// Sequence: drain `events` in arrival order, apply player movement from
/// the sampled `input`, fire due spawn timers, advance obstacles and
/// decorations (removing off-screen entities atomically), test collisions,
/// then emit draw requests for every surviving entity.
///
/// A terminated state performs no further updates and emits nothing.
pub fn tick(state: &mut GameState, input: &InputState, events: &[GameEvent]) -> TickOutput {
    if !state.is_running() {
        return TickOutput {
            background: state.config.background,
            draws: Vec::new(),
            sounds: Vec::new(),
            running: false,
        };
    }

    state.time_ticks += 1;
    let mut sounds = Vec::new();
    let mut shutdown = false;

    // External events, in arrival order. Quit/escape let the tick finish
    // and terminate afterwards, matching the draw-then-exit behavior.
    for event in events {
        match event {
            GameEvent::Quit | GameEvent::Escape => shutdown = true,
            GameEvent::SpawnObstacle => state.spawn_obstacle(),
            GameEvent::SpawnDecoration => state.spawn_decoration(),
        }
    }

    // Player movement from the sampled input
    state.player.apply_input(input, &state.config, &mut sounds);

    // Internal spawn timers
    let (obstacles_due, decorations_due) = state.spawner.poll(state.config.ms_per_tick());
    for _ in 0..obstacles_due {
        state.spawn_obstacle();
    }
    for _ in 0..decorations_due {
        state.spawn_decoration();
    }

    // Integrate movement; off-screen entities leave both the variant set
    // and the draw pass in the same step.
    let mut dodged = 0;
    state.obstacles.retain_mut(|o| {
        let keep = o.advance();
        if !keep {
            dodged += 1;
        }
        keep
    });
    state.dodged += dodged;

    let drift = state.config.decoration_speed;
    state.decorations.retain_mut(|d| d.advance(drift));

    // Collision ends the session: silence movement sounds, play the crash,
    // destroy the player.
    if hits_any(&state.player.rect, &state.obstacles) {
        sounds.push(AudioRequest::Stop(SoundId::MoveUp));
        sounds.push(AudioRequest::Stop(SoundId::MoveDown));
        sounds.push(AudioRequest::Play(SoundId::Collision));
        state.player_alive = false;
        state.phase = Phase::Terminated;
        log::info!(
            "collision after {} ticks ({} obstacles dodged)",
            state.time_ticks,
            state.dodged
        );
    }

    let draws = collect_draws(state);

    if shutdown {
        state.phase = Phase::Terminated;
        log::info!("shutdown requested after {} ticks", state.time_ticks);
    }

    TickOutput {
        background: state.config.background,
        draws,
        sounds,
        running: state.is_running(),
    }
}

/// Draw requests for every live entity, player first, then obstacles and
/// decorations merged by id (ids are insertion order within each vec).
fn collect_draws(state: &GameState) -> Vec<DrawRequest> {
    let mut draws =
        Vec::with_capacity(1 + state.obstacles.len() + state.decorations.len());

    if state.player_alive {
        draws.push(DrawRequest {
            kind: SpriteKind::Jet,
            rect: state.player.rect,
        });
    }

    let mut oi = 0;
    let mut di = 0;
    while oi < state.obstacles.len() || di < state.decorations.len() {
        let take_obstacle = match (state.obstacles.get(oi), state.decorations.get(di)) {
            (Some(o), Some(d)) => o.id < d.id,
            (Some(_), None) => true,
            (None, _) => false,
        };
        if take_obstacle {
            draws.push(DrawRequest {
                kind: SpriteKind::Missile,
                rect: state.obstacles[oi].rect,
            });
            oi += 1;
        } else {
            draws.push(DrawRequest {
                kind: SpriteKind::Cloud,
                rect: state.decorations[di].rect,
            });
            di += 1;
        }
    }

    draws
}
