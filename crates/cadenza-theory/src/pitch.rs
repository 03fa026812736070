//! Canonical pitch-class names and enharmonic normalization.
//!
//! Cadenza keys every fact on one of twelve canonical spellings: lowercase,
//! flat-preferred (`c db d eb e f gb g ab a bb b`). Any enharmonic input
//! (`F#`, `e#`, `Cbb`, `gx`) maps onto this set by pitch-class arithmetic,
//! so equality on [`PitchName`] is equality of pitch class.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::TheoryError;

/// One of the twelve canonical pitch-class names.
///
/// Variant order is ascending chromatic order from C; black keys carry
/// their flat spelling. This order is load-bearing: the fact generator
/// iterates [`PitchName::CHROMATIC`] as its outer loop, which pins the
/// reproducible ordering of the whole fact table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PitchName {
    C,
    Db,
    D,
    Eb,
    E,
    F,
    Gb,
    G,
    Ab,
    A,
    Bb,
    B,
}

impl PitchName {
    /// All twelve names in ascending chromatic order from C.
    pub const CHROMATIC: [PitchName; 12] = [
        PitchName::C,
        PitchName::Db,
        PitchName::D,
        PitchName::Eb,
        PitchName::E,
        PitchName::F,
        PitchName::Gb,
        PitchName::G,
        PitchName::Ab,
        PitchName::A,
        PitchName::Bb,
        PitchName::B,
    ];

    /// Pitch class, 0..=11 with C = 0.
    pub const fn pc(self) -> u8 {
        self as u8
    }

    /// Canonical name for a pitch class (reduced mod 12).
    pub const fn from_pc(pc: u8) -> PitchName {
        Self::CHROMATIC[(pc % 12) as usize]
    }

    /// The canonical lowercase spelling.
    pub const fn name(self) -> &'static str {
        match self {
            PitchName::C => "c",
            PitchName::Db => "db",
            PitchName::D => "d",
            PitchName::Eb => "eb",
            PitchName::E => "e",
            PitchName::F => "f",
            PitchName::Gb => "gb",
            PitchName::G => "g",
            PitchName::Ab => "ab",
            PitchName::A => "a",
            PitchName::Bb => "bb",
            PitchName::B => "b",
        }
    }
}

impl fmt::Display for PitchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PitchName {
    type Err = TheoryError;

    /// Accepts any enharmonic spelling, not just the canonical twelve.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize(s)
    }
}

/// Map any enharmonic spelling to its canonical flat-preferred name.
///
/// The grammar is a letter `a`..=`g` followed by zero or more accidentals:
/// `#` (sharp, +1), `b` (flat, -1), `x` (double sharp, +2). Case is
/// ignored. Accidentals stack, so `c##`, `dx`, and `fbb` all resolve.
/// Sharp spellings come out respelled as flats (`f#` → `gb`), which is the
/// flat preference the fact table is keyed on.
pub fn normalize(raw: &str) -> Result<PitchName, TheoryError> {
    let unknown = || TheoryError::UnknownPitch {
        raw: raw.to_string(),
    };

    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    let letter = chars.next().ok_or_else(unknown)?;
    let base: i32 = match letter.to_ascii_lowercase() {
        'c' => 0,
        'd' => 2,
        'e' => 4,
        'f' => 5,
        'g' => 7,
        'a' => 9,
        'b' => 11,
        _ => return Err(unknown()),
    };

    let mut pc = base;
    for c in chars {
        match c.to_ascii_lowercase() {
            '#' => pc += 1,
            'b' => pc -= 1,
            'x' => pc += 2,
            _ => return Err(unknown()),
        }
    }

    Ok(PitchName::from_pc(pc.rem_euclid(12) as u8))
}
