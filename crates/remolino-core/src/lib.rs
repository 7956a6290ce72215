//! Remolino Core - delay-line DSP primitives
//!
//! This crate provides the building blocks shared by the remolino delay
//! effects, designed for real-time audio processing with zero allocation in
//! the audio path.
//!
//! # Core Abstractions
//!
//! ## Block Delay Storage
//!
//! - [`BlockDelayBuffer`] - Multi-channel circular buffer written a block at
//!   a time, read at arbitrary offsets behind a shared write cursor, with
//!   cursor advancement deferred to an explicit per-block commit
//!
//! ## Delay-Time Modulators
//!
//! - [`SineModulator`] - Smooth periodic sweep over `[0, max_delay]`
//! - [`RampModulator`] - Sawtooth sweep with per-cycle reset, run in
//!   anti-phase pairs for Doppler pitch shifting
//!
//! ## Utilities
//!
//! - [`lerp`] - Linear blend for fractional delay taps
//! - [`crossfade_gain`] - Sine envelope masking sawtooth resets
//! - [`transposition_range_samples`] - Fixed 10 ms delay headroom
//!
//! # Write/Commit Discipline
//!
//! A [`BlockDelayBuffer`] is shared across channels, so its cursor moves only
//! when the owner says the block is done: write every channel's block, read
//! taps while processing, then call
//! [`commit_advance`](BlockDelayBuffer::commit_advance) exactly once. The
//! engines in `remolino-effects` wrap this discipline behind their
//! `advance_*_write_position` methods.
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible for embedded audio applications.
//! Disable the default `std` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! remolino-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Design Principles
//!
//! - **Real-time safe**: No allocations in audio processing paths
//! - **No dependencies on std**: Pure `no_std` with `libm` for math
//! - **Pure numeric helpers**: Interpolation and crossfade math live in
//!   standalone functions, testable without buffer plumbing

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod buffer;
pub mod math;
pub mod modulator;

// Re-export main types at crate root
pub use buffer::BlockDelayBuffer;
pub use math::{
    TRANSPOSITION_RANGE_SECONDS, crossfade_gain, lerp, transposition_range_samples,
};
pub use modulator::{PitchDirection, RampModulator, SineModulator};
