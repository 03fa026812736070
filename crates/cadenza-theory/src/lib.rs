//! Shared harmony vocabulary for Cadenza.
//!
//! This crate holds the types every other Cadenza crate speaks in:
//!
//! - [`PitchName`]: the twelve canonical pitch-class spellings
//! - [`Mode`]: the seven diatonic modes
//! - [`ChordQuality`] / [`HarmonicFunction`]: triad qualities and
//!   scale-degree roles
//! - [`normalize`]: enharmonic spelling → canonical pitch name
//! - [`ScaleSource`] / [`TemperedScales`]: modal scale construction, as a
//!   trait seam so the fact generator never hardcodes a tuning
//!
//! Everything here is plain data: no I/O, no state, no allocation beyond
//! the raw spellings a [`ScaleSource`] returns.

use thiserror::Error;

pub mod chord;
pub mod mode;
pub mod pitch;
pub mod scale;

pub use chord::{ChordQuality, HarmonicFunction};
pub use mode::Mode;
pub use pitch::{normalize, PitchName};
pub use scale::{ScaleSource, TemperedScales};

/// Errors for vocabulary parsing and scale construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    #[error("unrecognized pitch spelling `{raw}`")]
    UnknownPitch { raw: String },
    #[error("unrecognized mode name `{raw}`")]
    UnknownMode { raw: String },
    #[error("unrecognized chord quality `{raw}` (expected maj/min/dim)")]
    UnknownQuality { raw: String },
    #[error("unrecognized harmonic function `{raw}`")]
    UnknownFunction { raw: String },
}
