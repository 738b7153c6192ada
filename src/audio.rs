//! Audio boundary
//!
//! The simulation emits discrete play/stop requests; mixing and decoding
//! happen on the platform side.

/// Sound effect and music identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundId {
    /// Player moved up this tick
    MoveUp,
    /// Player moved down this tick
    MoveDown,
    /// Player hit an obstacle
    Collision,
    /// Looping background track
    Music,
}

/// A discrete audio request emitted by the tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioRequest {
    Play(SoundId),
    Stop(SoundId),
}

/// Accepts audio requests. Infallible from the core's perspective; device
/// failures are fatal session errors handled by the platform.
pub trait AudioSink {
    fn play(&mut self, sound: SoundId);
    fn stop(&mut self, sound: SoundId);

    fn submit(&mut self, request: AudioRequest) {
        match request {
            AudioRequest::Play(id) => self.play(id),
            AudioRequest::Stop(id) => self.stop(id),
        }
    }
}

/// Swallows all requests. Used by tests and headless runs.
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _sound: SoundId) {}
    fn stop(&mut self, _sound: SoundId) {}
}
