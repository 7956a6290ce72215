//! Doppler pitch shifter built on two crossfaded delay taps.
//!
//! A delay tap whose delay time ramps linearly resamples the signal: the read
//! head moves at a different speed than the write head, shifting pitch like a
//! passing siren. The ramp has to reset every cycle, which would click, so
//! the engine runs two taps driven by anti-phase sawtooth ramps and gives
//! each a sine envelope that is zero exactly where its ramp resets. One tap
//! always masks the other's discontinuity, and since the envelopes are half a
//! cycle apart the summed power stays roughly constant.
//!
//! Wet-only: no dry signal is mixed into the output.

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std as alloc;

use alloc::vec::Vec;

use remolino_core::{
    BlockDelayBuffer, PitchDirection, RampModulator, crossfade_gain, transposition_range_samples,
};

/// Phase offset between the two ramp modulators of each channel.
const TAP_PHASE_OFFSET: f32 = 0.5;

/// Pitch shifter engine: one delay ring, two ramped taps per channel.
///
/// Storage is sized `block_size + transposition_range` (10 ms of headroom) at
/// construction and never reallocated. Like the flanger, processing is
/// per-channel with a deferred, shared cursor commit.
///
/// The two ramps per channel start half a cycle apart and evolve
/// independently afterwards; they keep their anti-phase relationship as long
/// as both run at the same frequency, which [`set_rate`](Self::set_rate)
/// guarantees by always updating them together.
///
/// # Example
///
/// ```rust
/// use remolino_effects::{PitchDirection, PitchShifterEngine};
///
/// let mut shifter = PitchShifterEngine::new(512, 44100.0);
/// shifter.set_rate(5.0);
/// shifter.set_direction(PitchDirection::Up);
///
/// let mut left = [0.1f32; 512];
/// let mut right = [0.1f32; 512];
/// shifter.process(&mut left, 100, 0, 1.0);
/// shifter.process(&mut right, 100, 1, 1.0);
/// shifter.advance_delay_write_position(512);
/// ```
#[derive(Debug, Clone)]
pub struct PitchShifterEngine {
    delay: BlockDelayBuffer,
    /// First ramp per channel, phase 0 at start.
    ramps_a: Vec<RampModulator>,
    /// Second ramp per channel, anti-phase at start.
    ramps_b: Vec<RampModulator>,
    direction: PitchDirection,
    sample_rate: f32,
    /// Largest usable `max_delay_samples`; reads beyond this would alias.
    transposition_range: usize,
    /// Block-commit bookkeeping for the two-phase write protocol.
    delay_pending: bool,
}

impl PitchShifterEngine {
    /// Creates a stereo pitch shifter sized for `block_size`-sample blocks.
    ///
    /// # Panics
    ///
    /// Panics if `block_size` is 0.
    pub fn new(block_size: usize, sample_rate: f32) -> Self {
        Self::with_channels(block_size, sample_rate, 2)
    }

    /// Creates a pitch shifter with an explicit channel count.
    ///
    /// # Panics
    ///
    /// Panics if `block_size` or `channels` is 0.
    pub fn with_channels(block_size: usize, sample_rate: f32, channels: usize) -> Self {
        assert!(block_size > 0, "Block size must be > 0");

        let transposition_range = transposition_range_samples(sample_rate);
        let capacity = block_size + transposition_range;

        Self {
            delay: BlockDelayBuffer::new(channels, capacity),
            ramps_a: (0..channels)
                .map(|_| RampModulator::new(sample_rate, 0.0))
                .collect(),
            ramps_b: (0..channels)
                .map(|_| RampModulator::with_phase(sample_rate, 0.0, TAP_PHASE_OFFSET))
                .collect(),
            direction: PitchDirection::default(),
            sample_rate,
            transposition_range,
            delay_pending: false,
        }
    }

    /// Processes one channel's block in place.
    ///
    /// The slice is copied into the delay ring (cursor untouched), then each
    /// sample is replaced by the sum of the two ramped taps, each scaled by
    /// its sine crossfade envelope and finally by `output_gain`. Delay times
    /// are truncated to whole samples; the taps are not interpolated.
    ///
    /// `max_delay_samples` is clamped to the allocated transposition range
    /// and must be at least 1 (the crossfade envelope divides by it).
    ///
    /// Call once per channel per block, then commit the cursor with
    /// [`advance_delay_write_position`](Self::advance_delay_write_position).
    ///
    /// # Panics
    ///
    /// Panics if `channel` is out of range. In debug builds, asserts the
    /// slice fits the allocated ring.
    pub fn process(
        &mut self,
        block: &mut [f32],
        max_delay_samples: usize,
        channel: usize,
        output_gain: f32,
    ) {
        assert!(channel < self.delay.channels(), "Channel out of range");
        let max_delay = max_delay_samples.min(self.transposition_range) as f32;

        self.delay.write_block(channel, block, 1.0);
        self.delay_pending = true;

        for (i, sample) in block.iter_mut().enumerate() {
            let time_a = self.ramps_a[channel].advance(max_delay, self.direction);
            let time_b = self.ramps_b[channel].advance(max_delay, self.direction);

            // Envelopes come from the un-truncated ramp value, so a gain hits
            // exactly zero at the reset the truncated read lands on.
            let gain_a = crossfade_gain(time_a, max_delay);
            let gain_b = crossfade_gain(time_b, max_delay);

            let tap_a = self
                .delay
                .read_at(channel, time_a as isize - i as isize);
            let tap_b = self
                .delay
                .read_at(channel, time_b as isize - i as isize);

            *sample = output_gain * (gain_a * tap_a + gain_b * tap_b);
        }
    }

    /// Advances the delay ring's shared write cursor.
    ///
    /// Call exactly once per block, after every channel has been processed.
    /// In debug builds, committing twice (or without an intervening
    /// `process`) trips an assertion.
    pub fn advance_delay_write_position(&mut self, num_samples: usize) {
        debug_assert!(
            self.delay_pending,
            "Delay cursor committed with no block pending"
        );
        self.delay.commit_advance(num_samples);
        self.delay_pending = false;
    }

    /// Set the shift direction.
    pub fn set_direction(&mut self, direction: PitchDirection) {
        self.direction = direction;
    }

    /// Get the current shift direction.
    pub fn direction(&self) -> PitchDirection {
        self.direction
    }

    /// Set the ramp rate in Hz for both taps of every channel.
    ///
    /// Updating both taps together is what keeps their resets half a cycle
    /// apart; the ramps are never re-synchronized otherwise.
    pub fn set_rate(&mut self, rate_hz: f32) {
        for ramp in self.ramps_a.iter_mut().chain(self.ramps_b.iter_mut()) {
            ramp.set_frequency(rate_hz);
        }
    }

    /// Get the current ramp rate in Hz.
    pub fn rate(&self) -> f32 {
        self.ramps_a[0].frequency()
    }

    /// Number of channels this engine was built for.
    pub fn channels(&self) -> usize {
        self.delay.channels()
    }

    /// Largest usable `max_delay_samples` (10 ms at the configured rate).
    pub fn transposition_range(&self) -> usize {
        self.transposition_range
    }

    /// Sample rate the engine was built for.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Clears the ring and restores the anti-phase ramp pair; parameters
    /// keep their values.
    pub fn reset(&mut self) {
        self.delay.clear();
        for ramp in &mut self.ramps_a {
            ramp.reset_to(0.0);
        }
        for ramp in &mut self.ramps_b {
            ramp.reset_to(TAP_PHASE_OFFSET);
        }
        self.delay_pending = false;
    }
}
