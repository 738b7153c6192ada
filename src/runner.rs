//! Tick-paced session loop
//!
//! Owns the game state and the four collaborator boundaries (input,
//! renderer, audio, pacer) for the duration of one session. Single
//! threaded and cooperative: termination is only observed between ticks,
//! or mid-tick on collision.

use std::thread;
use std::time::{Duration, Instant};

use crate::audio::{AudioSink, SoundId};
use crate::config::Config;
use crate::input::{GameEvent, InputSource};
use crate::render::Renderer;
use crate::sim::{GameState, tick};

/// Spaces consecutive ticks at a fixed target interval.
pub trait Pacer {
    /// Block until the next tick boundary.
    fn wait_for_next_tick(&mut self);
}

/// Wall-clock pacer: sleeps the remainder of the interval when ahead of
/// schedule. When a tick overruns, the next one proceeds immediately and
/// the schedule restarts from now - frame time drifts under load rather
/// than double-stepping to catch up.
#[derive(Debug)]
pub struct StdPacer {
    interval: Duration,
    deadline: Instant,
}

impl StdPacer {
    pub fn new(tick_rate: u32) -> Self {
        assert!(tick_rate > 0, "tick rate must be positive");
        let interval = Duration::from_secs_f64(1.0 / tick_rate as f64);
        Self {
            interval,
            deadline: Instant::now() + interval,
        }
    }
}

impl Pacer for StdPacer {
    fn wait_for_next_tick(&mut self) {
        let now = Instant::now();
        if now < self.deadline {
            thread::sleep(self.deadline - now);
            self.deadline += self.interval;
        } else {
            self.deadline = now + self.interval;
        }
    }
}

/// No-op pacer for tests and batch replays.
#[derive(Debug, Default)]
pub struct NullPacer;

impl Pacer for NullPacer {
    fn wait_for_next_tick(&mut self) {}
}

/// What a finished session reports back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Ticks the session lasted
    pub ticks: u64,
    /// Obstacles that left the screen without hitting the player
    pub obstacles_dodged: u64,
}

/// One full run of the simulation, from `Running` to `Terminated`.
pub struct Session<I, R, A, P> {
    state: GameState,
    input: I,
    renderer: R,
    audio: A,
    pacer: P,
    events: Vec<GameEvent>,
}

impl<I, R, A, P> Session<I, R, A, P>
where
    I: InputSource,
    R: Renderer,
    A: AudioSink,
    P: Pacer,
{
    pub fn new(config: Config, seed: u64, input: I, renderer: R, audio: A, pacer: P) -> Self {
        Self {
            state: GameState::new(config, seed),
            input,
            renderer,
            audio,
            pacer,
            events: Vec::new(),
        }
    }

    /// Read-only view of the simulation state (for embedders and tests).
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Run the session to termination.
    ///
    /// Starts the looping background track, then per tick: drain events,
    /// sample input, advance the simulation, forward audio and draw
    /// requests, pace. Exits after the terminating tick without waiting
    /// for the next boundary, then stops the music.
    pub fn run(mut self) -> SessionSummary {
        log::info!("session start (seed {})", self.state.seed);
        self.audio.play(SoundId::Music);

        loop {
            self.events.clear();
            self.input.drain_events(&mut self.events);
            let pressed = self.input.pressed();

            let out = tick(&mut self.state, &pressed, &self.events);

            for request in &out.sounds {
                self.audio.submit(*request);
            }
            self.renderer.draw_frame(out.background, &out.draws);

            if !out.running {
                break;
            }
            self.pacer.wait_for_next_tick();
        }

        self.audio.stop(SoundId::Music);

        let summary = SessionSummary {
            ticks: self.state.time_ticks,
            obstacles_dodged: self.state.dodged,
        };
        log::info!(
            "session over: {} ticks, {} obstacles dodged",
            summary.ticks,
            summary.obstacles_dodged
        );
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::AudioRequest;
    use crate::input::{InputState, ScriptFrame, ScriptedInput};
    use crate::render::{DrawRequest, Rgb};

    /// Records every audio request in order.
    #[derive(Default)]
    struct RecordingAudio {
        requests: std::rc::Rc<std::cell::RefCell<Vec<AudioRequest>>>,
    }

    impl AudioSink for RecordingAudio {
        fn play(&mut self, sound: SoundId) {
            self.requests.borrow_mut().push(AudioRequest::Play(sound));
        }
        fn stop(&mut self, sound: SoundId) {
            self.requests.borrow_mut().push(AudioRequest::Stop(sound));
        }
    }

    /// Counts frames and remembers the last one.
    #[derive(Default)]
    struct RecordingRenderer {
        frames: std::rc::Rc<std::cell::RefCell<(usize, Vec<DrawRequest>)>>,
    }

    impl Renderer for RecordingRenderer {
        fn draw_frame(&mut self, _background: Rgb, sprites: &[DrawRequest]) {
            let mut frames = self.frames.borrow_mut();
            frames.0 += 1;
            frames.1 = sprites.to_vec();
        }
    }

    fn quiet_config() -> Config {
        Config {
            obstacle_period_ms: 1_000_000,
            decoration_period_ms: 1_000_000,
            ..Default::default()
        }
    }

    #[test]
    fn test_session_ends_when_script_quits() {
        let input = ScriptedInput::hold(InputState::none(), 10);
        let session = Session::new(
            quiet_config(),
            1,
            input,
            crate::render::NullRenderer,
            crate::audio::NullAudio,
            NullPacer,
        );
        let summary = session.run();
        // 10 scripted idle ticks plus the tick that processed the quit
        assert_eq!(summary.ticks, 11);
    }

    #[test]
    fn test_music_brackets_the_session() {
        let audio = RecordingAudio::default();
        let requests = audio.requests.clone();

        let input = ScriptedInput::hold(InputState::none(), 2);
        let session = Session::new(
            quiet_config(),
            1,
            input,
            crate::render::NullRenderer,
            audio,
            NullPacer,
        );
        session.run();

        let requests = requests.borrow();
        assert_eq!(requests.first(), Some(&AudioRequest::Play(SoundId::Music)));
        assert_eq!(requests.last(), Some(&AudioRequest::Stop(SoundId::Music)));
    }

    #[test]
    fn test_one_frame_per_tick_including_the_last() {
        let renderer = RecordingRenderer::default();
        let frames = renderer.frames.clone();

        let input = ScriptedInput::hold(InputState::none(), 5);
        let session = Session::new(
            quiet_config(),
            1,
            input,
            renderer,
            crate::audio::NullAudio,
            NullPacer,
        );
        let summary = session.run();

        assert_eq!(frames.borrow().0 as u64, summary.ticks);
    }

    #[test]
    fn test_summary_reports_ticks_survived() {
        let frames: Vec<ScriptFrame> = std::iter::repeat_with(|| {
            ScriptFrame::held(InputState {
                right: true,
                ..Default::default()
            })
        })
        .take(20)
        .collect();

        let session = Session::new(
            quiet_config(),
            42,
            ScriptedInput::new(frames),
            crate::render::NullRenderer,
            crate::audio::NullAudio,
            NullPacer,
        );
        let summary = session.run();
        assert_eq!(summary.ticks, 21);
        assert_eq!(summary.obstacles_dodged, 0);
    }

    #[test]
    fn test_std_pacer_spaces_ticks() {
        let mut pacer = StdPacer::new(200); // 5 ms interval
        let start = Instant::now();
        for _ in 0..4 {
            pacer.wait_for_next_tick();
        }
        // Four waits at 5 ms each; generous upper bound for CI jitter
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(15), "elapsed {elapsed:?}");
    }
}
