//! Audio cues for simulation events
//!
//! Short procedurally generated tones - no external files needed. The sim
//! only emits `GameEvent`s; `SoundBoard` turns them into tones and hands them
//! to a `ToneSink`. Sinks swallow their own failures: audio can never affect
//! the game.

use crate::sim::GameEvent;

/// Oscillator shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

/// A single fire-and-forget tone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    /// Hz
    pub frequency: f32,
    /// Seconds
    pub duration: f32,
    pub waveform: Waveform,
}

/// Ball bounced off a paddle or wall
pub const BOUNCE: Tone = Tone {
    frequency: 800.0,
    duration: 0.1,
    waveform: Waveform::Square,
};

/// Countdown start and each positive step
pub const COUNTDOWN: Tone = Tone {
    frequency: 600.0,
    duration: 0.15,
    waveform: Waveform::Sine,
};

/// Countdown reached zero
pub const COUNTDOWN_FINAL: Tone = Tone {
    frequency: 800.0,
    duration: 0.2,
    waveform: Waveform::Sine,
};

/// Envelope start gain
pub const GAIN: f32 = 0.3;
/// Envelope end gain (exponential ramp target, must stay above zero)
pub const GAIN_END: f32 = 0.01;
/// Minimum seconds between two bounce tones
pub const BOUNCE_COOLDOWN: f32 = 0.1;

/// Anything that can play a tone
pub trait ToneSink {
    fn play(&mut self, tone: &Tone);
}

/// Sink for headless runs
#[derive(Debug, Default)]
pub struct SilentSink;

impl ToneSink for SilentSink {
    fn play(&mut self, tone: &Tone) {
        log::trace!("tone {:?} {} Hz for {}s", tone.waveform, tone.frequency, tone.duration);
    }
}

/// Maps game events to tones
pub struct SoundBoard<S> {
    sink: S,
    bounce_cooldown: f32,
    muted: bool,
}

impl<S: ToneSink> SoundBoard<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            bounce_cooldown: 0.0,
            muted: false,
        }
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Advance cooldowns by one frame
    pub fn update(&mut self, dt: f32) {
        if self.bounce_cooldown > 0.0 {
            self.bounce_cooldown -= dt;
        }
    }

    /// Play whatever `event` calls for
    pub fn handle(&mut self, event: &GameEvent) {
        if self.muted {
            return;
        }
        match event {
            GameEvent::PaddleHit(_) | GameEvent::WallHit => {
                if self.bounce_cooldown > 0.0 {
                    return;
                }
                self.bounce_cooldown = BOUNCE_COOLDOWN;
                self.sink.play(&BOUNCE);
            }
            GameEvent::RoundStarted { .. } | GameEvent::CountdownTick(_) => {
                self.sink.play(&COUNTDOWN);
            }
            GameEvent::CountdownFinal => self.sink.play(&COUNTDOWN_FINAL),
            GameEvent::Launched | GameEvent::Scored { .. } | GameEvent::MatchOver { .. } => {}
        }
    }

    pub fn handle_all(&mut self, events: &[GameEvent]) {
        for event in events {
            self.handle(event);
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::WebAudio;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{GAIN, GAIN_END, Tone, ToneSink, Waveform};

    /// Web Audio API sink
    pub struct WebAudio {
        ctx: Option<AudioContext>,
        volume: f32,
    }

    impl Default for WebAudio {
        fn default() -> Self {
            Self::new()
        }
    }

    impl WebAudio {
        pub fn new() -> Self {
            // May fail outside a secure context
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self { ctx, volume: 1.0 }
        }

        /// Set volume (0.0 - 1.0)
        pub fn set_volume(&mut self, vol: f32) {
            self.volume = vol.clamp(0.0, 1.0);
        }

        fn create_osc(
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }
    }

    fn oscillator_type(waveform: Waveform) -> OscillatorType {
        match waveform {
            Waveform::Sine => OscillatorType::Sine,
            Waveform::Square => OscillatorType::Square,
            Waveform::Sawtooth => OscillatorType::Sawtooth,
            Waveform::Triangle => OscillatorType::Triangle,
        }
    }

    impl ToneSink for WebAudio {
        fn play(&mut self, tone: &Tone) {
            if self.volume <= 0.0 {
                return;
            }
            let Some(ctx) = &self.ctx else { return };

            // Browsers keep the context suspended until a user gesture
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            let Some((osc, gain)) =
                Self::create_osc(ctx, tone.frequency, oscillator_type(tone.waveform))
            else {
                return;
            };
            let t = ctx.current_time();
            let end = t + tone.duration as f64;

            gain.gain().set_value_at_time(GAIN * self.volume, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(GAIN_END, end)
                .ok();

            osc.start_with_when(t).ok();
            osc.stop_with_when(end).ok();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Side;

    #[derive(Default)]
    struct Recorder(Vec<Tone>);

    impl ToneSink for Recorder {
        fn play(&mut self, tone: &Tone) {
            self.0.push(*tone);
        }
    }

    #[test]
    fn test_countdown_cues() {
        let mut board = SoundBoard::new(Recorder::default());
        board.handle_all(&[
            GameEvent::RoundStarted { countdown: 3 },
            GameEvent::CountdownTick(2),
            GameEvent::CountdownTick(1),
            GameEvent::CountdownFinal,
            GameEvent::Launched,
        ]);
        assert_eq!(
            board.sink().0,
            vec![COUNTDOWN, COUNTDOWN, COUNTDOWN, COUNTDOWN_FINAL]
        );
    }

    #[test]
    fn test_bounce_cooldown() {
        let mut board = SoundBoard::new(Recorder::default());
        board.handle(&GameEvent::PaddleHit(Side::Left));
        board.handle(&GameEvent::WallHit);
        assert_eq!(board.sink().0.len(), 1);

        board.update(0.05);
        board.handle(&GameEvent::WallHit);
        assert_eq!(board.sink().0.len(), 1);

        board.update(0.06);
        board.handle(&GameEvent::WallHit);
        assert_eq!(board.sink().0, vec![BOUNCE, BOUNCE]);
    }

    #[test]
    fn test_silent_events() {
        let mut board = SoundBoard::new(Recorder::default());
        board.handle(&GameEvent::Scored { scorer: Side::Right });
        board.handle(&GameEvent::MatchOver { winner: Side::Right });
        assert!(board.sink().0.is_empty());
    }

    #[test]
    fn test_muted() {
        let mut board = SoundBoard::new(Recorder::default());
        board.set_muted(true);
        board.handle(&GameEvent::CountdownFinal);
        assert!(board.sink().0.is_empty());
    }
}
