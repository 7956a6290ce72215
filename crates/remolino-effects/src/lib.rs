//! Remolino Effects - modulated delay-line audio effects
//!
//! This crate provides the two remolino engines built on `remolino-core`:
//!
//! - [`FlangerEngine`] - Swept comb filter with optional feedback
//! - [`PitchShifterEngine`] - Doppler pitch shifter with crossfaded dual taps
//!
//! ## Processing model
//!
//! Both engines process one channel at a time, in place, against delay rings
//! whose write cursor is shared across channels. The host loop therefore has
//! three steps per block:
//!
//! ```rust
//! use remolino_effects::FlangerEngine;
//!
//! let mut flanger = FlangerEngine::new(256, 48000.0);
//! flanger.set_depth(0.5);
//! flanger.set_rate(0.3);
//!
//! let mut channels = [[0.0f32; 256], [0.0f32; 256]];
//!
//! // 1. process every channel...
//! for (ch, block) in channels.iter_mut().enumerate() {
//!     flanger.process(block, 220, ch, 1.0);
//! }
//! // 2. ...then commit the shared cursors exactly once.
//! flanger.advance_delay_write_position(256);
//! flanger.advance_feedback_write_position(256);
//! ```
//!
//! Committing per channel instead of per block shifts the delay taps of the
//! channels processed later; the deferred commit is load-bearing, not a
//! convenience.
//!
//! ## Real-time guarantees
//!
//! All storage is allocated in the constructors. `process`, the commit
//! methods, and every parameter setter are allocation-free, lock-free and
//! bounded-time. Setters are plain stores with no validation; see each
//! engine's documentation for the caller-side preconditions (feedback below
//! 1.0, max delay within the 10 ms transposition range).

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod flanger;
pub mod pitch_shifter;

// Re-export main types at crate root
pub use flanger::FlangerEngine;
pub use pitch_shifter::PitchShifterEngine;
pub use remolino_core::PitchDirection;
