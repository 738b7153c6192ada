//! Sky Dodge entry point (headless demo)
//!
//! Runs one scripted ten-second session with logging collaborators. Real
//! rendering, audio and input backends plug in through the traits in
//! `render`, `audio` and `input`.

use std::time::{SystemTime, UNIX_EPOCH};

use sky_dodge::audio::{AudioSink, SoundId};
use sky_dodge::input::{InputState, ScriptFrame, ScriptedInput};
use sky_dodge::render::{DrawRequest, Renderer, Rgb};
use sky_dodge::{Config, Session, StdPacer};

/// Logs a frame summary once a second.
struct LogRenderer {
    frame: u64,
    tick_rate: u32,
}

impl Renderer for LogRenderer {
    fn draw_frame(&mut self, _background: Rgb, sprites: &[DrawRequest]) {
        self.frame += 1;
        if self.frame % self.tick_rate as u64 == 0 {
            log::info!("tick {}: {} sprites on screen", self.frame, sprites.len());
        }
    }
}

struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, sound: SoundId) {
        log::debug!("audio play {sound:?}");
    }
    fn stop(&mut self, sound: SoundId) {
        log::debug!("audio stop {sound:?}");
    }
}

/// A weave pattern: climb right, cruise, dive, fall back - repeat.
fn demo_script(ticks: usize) -> ScriptedInput {
    let mut frames = Vec::with_capacity(ticks);
    for i in 0..ticks {
        let pressed = match (i / 30) % 4 {
            0 => InputState {
                up: true,
                right: true,
                ..Default::default()
            },
            1 => InputState {
                right: true,
                ..Default::default()
            },
            2 => InputState {
                down: true,
                ..Default::default()
            },
            _ => InputState {
                left: true,
                ..Default::default()
            },
        };
        frames.push(ScriptFrame::held(pressed));
    }
    ScriptedInput::new(frames)
}

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let config = Config::default();
    let tick_rate = config.tick_rate;

    log::info!("Sky Dodge demo starting (seed {seed})");

    let session = Session::new(
        config,
        seed,
        demo_script(10 * tick_rate as usize),
        LogRenderer {
            frame: 0,
            tick_rate,
        },
        LogAudio,
        StdPacer::new(tick_rate),
    );
    let summary = session.run();

    log::info!(
        "survived {} ticks, dodged {} obstacles",
        summary.ticks,
        summary.obstacles_dodged
    );
}
