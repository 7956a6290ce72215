//! Comb-filter flanger with optional feedback.
//!
//! The flanger recombines the live signal with a single delay line whose
//! delay time is swept by a sine modulator, producing frequency-dependent
//! cancellation and reinforcement (an FIR comb filter). A second ring holds
//! the processed output; mixing it back in at the swept tap turns the comb
//! IIR for a more resonant sweep.
//!
//! Processing is block-oriented and per-channel: the host loops over
//! channels calling [`FlangerEngine::process`], then commits the shared
//! write cursors once via
//! [`advance_delay_write_position`](FlangerEngine::advance_delay_write_position)
//! and
//! [`advance_feedback_write_position`](FlangerEngine::advance_feedback_write_position).

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std as alloc;

use alloc::vec::Vec;

use remolino_core::{BlockDelayBuffer, SineModulator, lerp, transposition_range_samples};

/// Flanger engine: one swept delay line plus a feedback line per channel set.
///
/// The engine owns all storage; nothing allocates after construction. Delay
/// and feedback rings are sized `block_size + transposition_range`, where the
/// transposition range is a fixed 10 ms of headroom at the given sample rate
/// and bounds the `max_delay_samples` a `process` call may use.
///
/// Parameters are plain fields read mid-block: setters perform no validation
/// and no smoothing, and may be called from a control thread with the usual
/// single-writer caveats (a torn update is heard as one block of staleness,
/// never corruption).
///
/// # Example
///
/// ```rust
/// use remolino_effects::FlangerEngine;
///
/// let mut flanger = FlangerEngine::new(512, 44100.0);
/// flanger.set_depth(0.5);
/// flanger.set_rate(0.25);
///
/// let mut left = [0.1f32; 512];
/// let mut right = [0.1f32; 512];
/// flanger.process(&mut left, 220, 0, 1.0);
/// flanger.process(&mut right, 220, 1, 1.0);
/// flanger.advance_delay_write_position(512);
/// flanger.advance_feedback_write_position(512);
/// ```
#[derive(Debug, Clone)]
pub struct FlangerEngine {
    delay: BlockDelayBuffer,
    feedback: BlockDelayBuffer,
    /// One sweep LFO per channel; phases never shared.
    modulators: Vec<SineModulator>,
    /// Wet mix gain applied to the swept delay tap.
    depth: f32,
    /// Feedback ring gain. Must stay below 1.0 for stability.
    feedback_level: f32,
    sample_rate: f32,
    /// Largest usable `max_delay_samples`; reads beyond this would alias.
    transposition_range: usize,
    /// Block-commit bookkeeping for the two-phase write protocol.
    delay_pending: bool,
    feedback_pending: bool,
}

impl FlangerEngine {
    /// Creates a stereo flanger sized for `block_size`-sample host blocks.
    ///
    /// # Panics
    ///
    /// Panics if `block_size` is 0.
    pub fn new(block_size: usize, sample_rate: f32) -> Self {
        Self::with_channels(block_size, sample_rate, 2)
    }

    /// Creates a flanger with an explicit channel count.
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
            feedback: BlockDelayBuffer::new(channels, capacity),
            modulators: (0..channels)
                .map(|_| SineModulator::new(sample_rate, 0.0))
                .collect(),
            depth: 0.0,
            feedback_level: 0.0,
            sample_rate,
            transposition_range,
            delay_pending: false,
            feedback_pending: false,
        }
    }

    /// Processes one channel's block in place.
    ///
    /// The whole slice is copied into the delay ring (cursor untouched), then
    /// each sample is replaced by the comb output: the dry sample plus the
    /// sine-swept, linearly interpolated delay tap scaled by `depth`, plus
    /// the matching feedback tap scaled by the feedback level. When the
    /// feedback level is nonzero the dry term is omitted and the effect runs
    /// wet-only; the switch is deliberately abrupt at exactly 0.0.
    ///
    /// `max_delay_samples` is clamped to the allocated transposition range;
    /// an over-long sweep would otherwise read back into the block being
    /// written. Every processed sample is finally scaled by `output_gain`.
    ///
    /// Call once per channel per block, then commit both cursors.
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
        self.feedback_pending = true;

        let lfo = &mut self.modulators[channel];

        for (i, sample) in block.iter_mut().enumerate() {
            let delay_time = lfo.advance(max_delay);
            let whole = delay_time as usize;
            let frac = delay_time - whole as f32;

            // Offsets track the advancing write position within the block:
            // sample i of this block sits i slots ahead of the cursor.
            let near = whole as isize - i as isize;
            let far = near + 1;

            let delay_tap = lerp(
                self.delay.read_at(channel, near),
                self.delay.read_at(channel, far),
                frac,
            );
            let feedback_tap = lerp(
                self.feedback.read_at(channel, near),
                self.feedback.read_at(channel, far),
                frac,
            );

            let wet = self.depth * delay_tap + self.feedback_level * feedback_tap;
            let mixed = if self.feedback_level == 0.0 {
                *sample + wet
            } else {
                wet
            };

            self.feedback.write_at(channel, i, mixed);
            *sample = output_gain * mixed;
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

    /// Advances the feedback ring's shared write cursor.
    ///
    /// Same once-per-block discipline as
    /// [`advance_delay_write_position`](Self::advance_delay_write_position);
    /// the two cursors must be advanced by the same amount to keep the
    /// feedback taps aligned with the delay taps.
    pub fn advance_feedback_write_position(&mut self, num_samples: usize) {
        debug_assert!(
            self.feedback_pending,
            "Feedback cursor committed with no block pending"
        );
        self.feedback.commit_advance(num_samples);
        self.feedback_pending = false;
    }

    /// Set the wet mix gain applied to the delay tap.
    pub fn set_depth(&mut self, depth: f32) {
        self.depth = depth;
    }

    /// Get the current depth.
    pub fn depth(&self) -> f32 {
        self.depth
    }

    /// Set the feedback ring gain.
    ///
    /// Levels at or above 1.0 make the feedback path grow without bound; the
    /// engine does not detect or clamp this.
    pub fn set_feedback(&mut self, level: f32) {
        self.feedback_level = level;
    }

    /// Get the current feedback level.
    pub fn feedback(&self) -> f32 {
        self.feedback_level
    }

    /// Set the sweep rate in Hz for every channel's modulator.
    pub fn set_rate(&mut self, rate_hz: f32) {
        for lfo in &mut self.modulators {
            lfo.set_frequency(rate_hz);
        }
    }

    /// Get the current sweep rate in Hz.
    pub fn rate(&self) -> f32 {
        self.modulators[0].frequency()
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

    /// Clears both rings and rewinds the modulator phases; parameters keep
    /// their values.
    pub fn reset(&mut self) {
        self.delay.clear();
        self.feedback.clear();
        for lfo in &mut self.modulators {
            lfo.reset();
        }
        self.delay_pending = false;
        self.feedback_pending = false;
    }
}
