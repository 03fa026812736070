//! The seven diatonic modes and their interval patterns.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::TheoryError;

/// One of the seven diatonic rotations of the major scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Natural minor: `a b c d e f g` on A.
    Aeolian,
    /// Minor with raised 6th: `d e f g a b c` on D.
    Dorian,
    /// The major scale: `c d e f g a b` on C.
    Ionian,
    /// Diminished tonic, lowered 2nd and 5th: `b c d e f g a` on B.
    Locrian,
    /// Major with raised 4th: `f g a b c d e` on F.
    Lydian,
    /// Major with lowered 7th: `g a b c d e f` on G.
    Mixolydian,
    /// Minor with lowered 2nd: `e f g a b c d` on E.
    Phrygian,
}

impl Mode {
    /// All seven modes in lexicographic name order.
    ///
    /// This is the fact generator's inner-loop order, so it is part of the
    /// reproducible-ordering contract on the fact table.
    pub const ALL: [Mode; 7] = [
        Mode::Aeolian,
        Mode::Dorian,
        Mode::Ionian,
        Mode::Locrian,
        Mode::Lydian,
        Mode::Mixolydian,
        Mode::Phrygian,
    ];

    /// Semitone offsets from the tonic for degrees 1..=7.
    pub const fn intervals(self) -> [u8; 7] {
        match self {
            Mode::Aeolian => [0, 2, 3, 5, 7, 8, 10],
            Mode::Dorian => [0, 2, 3, 5, 7, 9, 10],
            Mode::Ionian => [0, 2, 4, 5, 7, 9, 11],
            Mode::Locrian => [0, 1, 3, 5, 6, 8, 10],
            Mode::Lydian => [0, 2, 4, 6, 7, 9, 11],
            Mode::Mixolydian => [0, 2, 4, 5, 7, 9, 10],
            Mode::Phrygian => [0, 1, 3, 5, 7, 8, 10],
        }
    }

    /// The lowercase mode name.
    pub const fn name(self) -> &'static str {
        match self {
            Mode::Aeolian => "aeolian",
            Mode::Dorian => "dorian",
            Mode::Ionian => "ionian",
            Mode::Locrian => "locrian",
            Mode::Lydian => "lydian",
            Mode::Mixolydian => "mixolydian",
            Mode::Phrygian => "phrygian",
        }
    }

    /// Whether degree 7 sits a half step below the octave.
    ///
    /// Decides the degree-7 harmonic function: leading tone for ionian and
    /// lydian, subtonic for the five modes with a lowered 7th.
    pub const fn has_leading_tone(self) -> bool {
        self.intervals()[6] == 11
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| TheoryError::UnknownMode { raw: s.to_string() })
    }
}
