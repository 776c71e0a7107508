//! Audio system using Web Audio API
//!
//! Procedurally generated sound effects and a looping background drone, no
//! external files needed.

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

use crate::platform::{AudioCue, AudioSink};
use crate::settings::Settings;
use crate::sim::CollectibleKind;

/// Background drone: two detuned oscillators through one gain node
struct Music {
    voices: Vec<OscillatorNode>,
    gain: GainNode,
}

/// Audio manager for the game
pub struct AudioManager {
    ctx: Option<AudioContext>,
    sfx_volume: f32,
    music_volume: f32,
    music: Option<Music>,
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
            sfx_volume: settings.effective_sfx_volume(),
            music_volume: settings.effective_music_volume(),
            music: None,
        }
    }

    /// Resume audio context (required after user gesture)
    pub fn resume(&self) {
        if let Some(ctx) = &self.ctx {
            let _ = ctx.resume();
        }
    }

    /// Pick up volume and mute changes; running music follows immediately
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.sfx_volume = settings.effective_sfx_volume();
        self.music_volume = settings.effective_music_volume();
        if let Some(music) = &self.music {
            music.gain.gain().set_value(self.music_volume * 0.15);
        }
    }

    /// Muting stops the music; unmuting restarts it only mid-session
    pub fn mute_changed(&mut self, settings: &Settings, session_active: bool) {
        self.apply_settings(settings);
        if settings.muted {
            self.stop_music();
        } else if session_active && self.music.is_none() {
            self.start_music();
        }
    }

    fn context(&self) -> Option<&AudioContext> {
        let ctx = self.ctx.as_ref()?;
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }
        Some(ctx)
    }

    /// Create an oscillator with gain envelope
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

    fn start_music(&mut self) {
        self.stop_music();
        let Some(ctx) = self.context() else { return };
        let Ok(gain) = ctx.create_gain() else { return };
        if gain.connect_with_audio_node(&ctx.destination()).is_err() {
            return;
        }
        gain.gain().set_value(self.music_volume * 0.15);

        let mut voices = Vec::new();
        for (freq, osc_type) in [(110.0, OscillatorType::Sine), (164.8, OscillatorType::Triangle)] {
            let Ok(osc) = ctx.create_oscillator() else { continue };
            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            if osc.connect_with_audio_node(&gain).is_ok() && osc.start().is_ok() {
                voices.push(osc);
            }
        }
        self.music = Some(Music { voices, gain });
    }

    fn stop_music(&mut self) {
        if let Some(music) = self.music.take() {
            for osc in music.voices {
                osc.stop().ok();
            }
        }
    }

    /// Nugget - quick two-note chirp
    fn play_nugget(ctx: &AudioContext, vol: f32) {
        for (i, freq) in [700.0, 950.0].iter().enumerate() {
            let delay = i as f64 * 0.06;
            if let Some((osc, gain)) = Self::create_osc(ctx, *freq, OscillatorType::Sine) {
                let t = ctx.current_time() + delay;
                gain.gain().set_value_at_time(vol * 0.25, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.12)
                    .ok();
                osc.start_with_when(t).ok();
                osc.stop_with_when(t + 0.15).ok();
            }
        }
    }

    /// Finger - rising sweep for the boost
    fn play_finger(ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = Self::create_osc(ctx, 300.0, OscillatorType::Triangle) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.3, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.35)
            .ok();
        osc.frequency().set_value_at_time(300.0, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(1200.0, t + 0.3)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.4).ok();
    }

    /// Crash - low splintering thud
    fn play_crash(ctx: &AudioContext, vol: f32) {
        for (freq, osc_type) in [(120.0, OscillatorType::Sawtooth), (80.0, OscillatorType::Square)] {
            if let Some((osc, gain)) = Self::create_osc(ctx, freq, osc_type) {
                let t = ctx.current_time();
                gain.gain().set_value_at_time(vol * 0.35, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.5)
                    .ok();
                osc.frequency().set_value_at_time(freq, t).ok();
                osc.frequency()
                    .exponential_ramp_to_value_at_time(30.0, t + 0.5)
                    .ok();
                osc.start().ok();
                osc.stop_with_when(t + 0.6).ok();
            }
        }
    }
}

impl AudioSink for AudioManager {
    fn play(&mut self, cue: AudioCue) {
        let vol = self.sfx_volume;
        match cue {
            AudioCue::SessionStarted => self.start_music(),
            AudioCue::SessionStopped => self.stop_music(),
            AudioCue::Collected(_) | AudioCue::Crashed if vol <= 0.0 => {}
            AudioCue::Collected(kind) => {
                let Some(ctx) = self.context() else { return };
                match kind {
                    CollectibleKind::Nugget => Self::play_nugget(ctx, vol),
                    CollectibleKind::Finger => Self::play_finger(ctx, vol),
                }
            }
            AudioCue::Crashed => {
                let Some(ctx) = self.context() else { return };
                Self::play_crash(ctx, vol);
            }
        }
    }
}
