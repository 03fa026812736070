//! Modal scale construction behind a trait seam.
//!
//! The fact generator consumes scales and spellings through [`ScaleSource`]
//! rather than calling concrete functions, so tests can inject degenerate
//! sources (wrong-length scales, odd spellings) and the generator's
//! fail-fast paths stay reachable. [`TemperedScales`] is the default
//! implementation used everywhere else.

use crate::pitch::{self, PitchName};
use crate::{Mode, TheoryError};

/// Supplier of raw scale spellings and enharmonic normalization.
pub trait ScaleSource {
    /// The seven degree spellings of `mode` built on `root`, in ascending
    /// degree order. Spellings are raw: they may use sharps or mixed case
    /// and are only comparable after [`ScaleSource::normalize`].
    fn scale(&self, root: PitchName, mode: Mode) -> Result<Vec<String>, TheoryError>;

    /// Canonical flat-preferred name for any enharmonic spelling.
    fn normalize(&self, raw: &str) -> Result<PitchName, TheoryError>;
}

/// Twelve-tone equal-tempered scales over [`Mode::intervals`].
///
/// Degree pitches are computed by pitch-class arithmetic and spelled with
/// a sharp bias, mirroring how chromatic note tables are usually written;
/// normalization downstream respells them with the flat preference the
/// fact table is keyed on.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemperedScales;

const SHARP_SPELLINGS: [&str; 12] = [
    "c", "c#", "d", "d#", "e", "f", "f#", "g", "g#", "a", "a#", "b",
];

impl ScaleSource for TemperedScales {
    fn scale(&self, root: PitchName, mode: Mode) -> Result<Vec<String>, TheoryError> {
        Ok(mode
            .intervals()
            .iter()
            .map(|&step| SHARP_SPELLINGS[((root.pc() + step) % 12) as usize].to_string())
            .collect())
    }

    fn normalize(&self, raw: &str) -> Result<PitchName, TheoryError> {
        pitch::normalize(raw)
    }
}
