//! Sound cues
//!
//! The simulation only ever calls [`CueSink::play`]; it never learns whether
//! a sound actually came out. On the web the cues are procedurally generated
//! with the Web Audio API, no external files needed.

/// Sound cue identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// A kick connected
    Kick,
    /// A goal was scored
    Goal,
}

/// Anything that can (try to) play a cue
pub trait CueSink {
    /// Fire and forget. Implementations swallow their own failures.
    fn play(&mut self, cue: Cue);
}

/// Drops every cue
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAudio;

impl CueSink for SilentAudio {
    fn play(&mut self, _cue: Cue) {}
}

/// Keeps every cue in order, for tests and the headless exhibition
#[derive(Debug, Clone, Default)]
pub struct CueRecorder {
    pub cues: Vec<Cue>,
}

impl CueRecorder {
    pub fn count(&self, cue: Cue) -> usize {
        self.cues.iter().filter(|&&c| c == cue).count()
    }
}

impl CueSink for CueRecorder {
    fn play(&mut self, cue: Cue) {
        log::debug!("cue: {:?}", cue);
        self.cues.push(cue);
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{Cue, CueSink};
    use crate::settings::Settings;

    /// Web Audio backed cue player
    pub struct AudioManager {
        ctx: Option<AudioContext>,
        /// Volume and mute state
        settings: Settings,
    }

    impl AudioManager {
        pub fn new(settings: &Settings) -> Self {
            // May fail outside a secure context
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                settings: settings.clone(),
            }
        }

        /// Resume audio context (required after user gesture)
        pub fn resume(&self) {
            if let Some(ctx) = &self.ctx {
                let _ = ctx.resume();
            }
        }

        /// Flip mute, returning the new state
        pub fn toggle_mute(&mut self) -> bool {
            self.settings.muted = !self.settings.muted;
            self.settings.muted
        }

        fn create_osc(
            &self,
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

        /// Kick - short leather thump
        fn play_kick(&self, ctx: &AudioContext, vol: f32) {
            let t = ctx.current_time();

            if let Some((osc, gain)) = self.create_osc(ctx, 180.0, OscillatorType::Sine) {
                gain.gain().set_value_at_time(vol * 0.6, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.12)
                    .ok();
                osc.frequency().set_value_at_time(180.0, t).ok();
                osc.frequency()
                    .exponential_ramp_to_value_at_time(55.0, t + 0.12)
                    .ok();
                osc.start().ok();
                osc.stop_with_when(t + 0.15).ok();
            }

            // Click of the boot
            if let Some((osc, gain)) = self.create_osc(ctx, 900.0, OscillatorType::Square) {
                gain.gain().set_value_at_time(vol * 0.1, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.03)
                    .ok();
                osc.start().ok();
                osc.stop_with_when(t + 0.04).ok();
            }
        }

        /// Goal - rising fanfare
        fn play_goal(&self, ctx: &AudioContext, vol: f32) {
            for (i, freq) in [523.0, 659.0, 784.0, 1047.0].iter().enumerate() {
                let delay = i as f64 * 0.1;
                if let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Triangle) {
                    let t = ctx.current_time() + delay;
                    gain.gain().set_value_at_time(vol * 0.3, t).ok();
                    gain.gain()
                        .exponential_ramp_to_value_at_time(0.01, t + 0.4)
                        .ok();
                    osc.start_with_when(t).ok();
                    osc.stop_with_when(t + 0.5).ok();
                }
            }
        }
    }

    impl CueSink for AudioManager {
        fn play(&mut self, cue: Cue) {
            let vol = self.settings.effective_volume();
            if vol <= 0.0 {
                return;
            }

            let Some(ctx) = &self.ctx else { return };

            // Browsers keep the context suspended until a user gesture
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            match cue {
                Cue::Kick => self.play_kick(ctx, vol),
                Cue::Goal => self.play_goal(ctx, vol),
            }
        }
    }
}
