//! Delay-time modulators for swept delay effects.
//!
//! Both modulators are phase accumulators that map the wrapped phase straight
//! to a delay time in samples, one value per call. The phase is advanced
//! *before* the output is computed, so the first value of a fresh modulator
//! already reflects one sample of progress.
//!
//! - [`SineModulator`] sweeps smoothly over `[0, max_delay]`: the flanger's
//!   comb sweep.
//! - [`RampModulator`] produces a linear ramp that restarts each cycle with a
//!   discontinuity: the Doppler sweep of the pitch shifter, used in
//!   anti-phase pairs with a crossfade envelope masking the reset.
//!
//! Every channel of an effect owns its own modulator; phase is never shared
//! across channels, which keeps cross-channel correlation artifacts out of
//! the stereo image.

use core::f32::consts::TAU;
use libm::sinf;

/// Sweep direction of a [`RampModulator`].
///
/// `Down` ramps the delay from 0 up to `max_delay` (reads fall progressively
/// further behind: pitch drops). `Up` runs the ramp in reverse (reads catch
/// up to the cursor: pitch rises).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PitchDirection {
    /// Delay ramps `max_delay → 0`, shifting pitch up.
    Up,
    /// Delay ramps `0 → max_delay`, shifting pitch down.
    #[default]
    Down,
}

/// Sine delay-time modulator.
///
/// Each call to [`advance`](Self::advance) steps the phase by
/// `frequency / sample_rate`, wraps it at 1.0, and returns
/// `(max_delay / 2) · (sin(2π·phase) + 1)`, a delay time oscillating over
/// `[0, max_delay]` samples.
///
/// # Example
///
/// ```rust
/// use remolino_core::SineModulator;
///
/// let mut lfo = SineModulator::new(44100.0, 0.5);
/// let delay = lfo.advance(220.0);
/// assert!((0.0..=220.0).contains(&delay));
/// ```
#[derive(Debug, Clone)]
pub struct SineModulator {
    /// Current phase position [0.0, 1.0)
    phase: f32,
    /// Phase increment per sample
    phase_inc: f32,
    /// Sample rate in Hz
    sample_rate: f32,
}

impl SineModulator {
    /// Create a new modulator with the given sample rate and frequency.
    pub fn new(sample_rate: f32, freq_hz: f32) -> Self {
        Self {
            phase: 0.0,
            phase_inc: freq_hz / sample_rate,
            sample_rate,
        }
    }

    /// Set frequency in Hz.
    pub fn set_frequency(&mut self, freq_hz: f32) {
        self.phase_inc = freq_hz / self.sample_rate;
    }

    /// Get current frequency in Hz.
    pub fn frequency(&self) -> f32 {
        self.phase_inc * self.sample_rate
    }

    /// Sync phase to a specific value (0.0 - 1.0).
    pub fn set_phase(&mut self, phase: f32) {
        self.phase = phase.clamp(0.0, 1.0);
    }

    /// Get current phase (0.0 - 1.0).
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Reset phase to 0.
    pub fn reset(&mut self) {
        self.phase = 0.0;
    }

    /// Set sample rate, preserving the configured frequency.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        let freq = self.phase_inc * self.sample_rate;
        self.sample_rate = sample_rate;
        self.set_frequency(freq);
    }

    /// Advance one sample and return the delay time in `[0, max_delay_samples]`.
    #[inline]
    pub fn advance(&mut self, max_delay_samples: f32) -> f32 {
        self.phase += self.phase_inc;
        if self.phase >= 1.0 {
            self.phase -= 1.0;
        }
        (max_delay_samples * 0.5) * (sinf(TAU * self.phase) + 1.0)
    }
}

/// Sawtooth delay-time modulator.
///
/// Each call to [`advance`](Self::advance) steps and wraps the phase like
/// [`SineModulator`], then returns `max_delay · phase`
/// ([`PitchDirection::Down`]) or `max_delay · (1 − phase)`
/// ([`PitchDirection::Up`]), a linear ramp over `[0, max_delay]` samples
/// restarting every cycle.
///
/// The pitch shifter runs two of these per channel, the second constructed
/// with [`with_phase`](Self::with_phase)`(…, 0.5)`. They start in anti-phase
/// and evolve independently; as long as both receive the same frequency their
/// ramp resets stay half a cycle apart.
#[derive(Debug, Clone)]
pub struct RampModulator {
    /// Current phase position [0.0, 1.0)
    phase: f32,
    /// Phase increment per sample
    phase_inc: f32,
    /// Sample rate in Hz
    sample_rate: f32,
}

impl RampModulator {
    /// Create a new modulator with the given sample rate and frequency.
    pub fn new(sample_rate: f32, freq_hz: f32) -> Self {
        Self::with_phase(sample_rate, freq_hz, 0.0)
    }

    /// Create a modulator starting at a specific phase (0.0 - 1.0).
    pub fn with_phase(sample_rate: f32, freq_hz: f32, phase: f32) -> Self {
        Self {
            phase: phase.clamp(0.0, 1.0),
            phase_inc: freq_hz / sample_rate,
            sample_rate,
        }
    }

    /// Set frequency in Hz.
    pub fn set_frequency(&mut self, freq_hz: f32) {
        self.phase_inc = freq_hz / self.sample_rate;
    }

    /// Get current frequency in Hz.
    pub fn frequency(&self) -> f32 {
        self.phase_inc * self.sample_rate
    }

    /// Sync phase to a specific value (0.0 - 1.0).
    pub fn set_phase(&mut self, phase: f32) {
        self.phase = phase.clamp(0.0, 1.0);
    }

    /// Get current phase (0.0 - 1.0).
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Reset phase to the given value.
    pub fn reset_to(&mut self, phase: f32) {
        self.phase = phase.clamp(0.0, 1.0);
    }

    /// Set sample rate, preserving the configured frequency.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        let freq = self.phase_inc * self.sample_rate;
        self.sample_rate = sample_rate;
        self.set_frequency(freq);
    }

    /// Advance one sample and return the delay time in `[0, max_delay_samples]`.
    #[inline]
    pub fn advance(&mut self, max_delay_samples: f32, direction: PitchDirection) -> f32 {
        self.phase += self.phase_inc;
        if self.phase >= 1.0 {
            self.phase -= 1.0;
        }
        match direction {
            PitchDirection::Down => max_delay_samples * self.phase,
            PitchDirection::Up => max_delay_samples * (1.0 - self.phase),
        }
    }
}
