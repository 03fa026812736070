//! Triad qualities and scale-degree harmonic functions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::TheoryError;

/// Triad quality of a diatonic scale-degree chord.
///
/// The canonical tokens are the three-letter forms `maj`/`min`/`dim`; they
/// are what `Display` emits, what `FromStr` accepts, and what serde uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChordQuality {
    Maj,
    Min,
    Dim,
}

impl ChordQuality {
    pub const fn name(self) -> &'static str {
        match self {
            ChordQuality::Maj => "maj",
            ChordQuality::Min => "min",
            ChordQuality::Dim => "dim",
        }
    }
}

impl fmt::Display for ChordQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChordQuality {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "maj" => Ok(ChordQuality::Maj),
            "min" => Ok(ChordQuality::Min),
            "dim" => Ok(ChordQuality::Dim),
            _ => Err(TheoryError::UnknownQuality { raw: s.to_string() }),
        }
    }
}

/// Harmonic role of the chord built on a scale degree.
///
/// Degrees 1..=6 map to the first six roles in order. Degree 7 is
/// [`HarmonicFunction::LeadingTone`] when it sits a half step below the
/// octave and [`HarmonicFunction::Subtonic`] otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HarmonicFunction {
    Tonic,
    Supertonic,
    Mediant,
    Subdominant,
    Dominant,
    Submediant,
    Subtonic,
    LeadingTone,
}

impl HarmonicFunction {
    pub const fn name(self) -> &'static str {
        match self {
            HarmonicFunction::Tonic => "tonic",
            HarmonicFunction::Supertonic => "supertonic",
            HarmonicFunction::Mediant => "mediant",
            HarmonicFunction::Subdominant => "subdominant",
            HarmonicFunction::Dominant => "dominant",
            HarmonicFunction::Submediant => "submediant",
            HarmonicFunction::Subtonic => "subtonic",
            HarmonicFunction::LeadingTone => "leading_tone",
        }
    }
}

impl fmt::Display for HarmonicFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HarmonicFunction {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tonic" => Ok(HarmonicFunction::Tonic),
            "supertonic" => Ok(HarmonicFunction::Supertonic),
            "mediant" => Ok(HarmonicFunction::Mediant),
            "subdominant" => Ok(HarmonicFunction::Subdominant),
            "dominant" => Ok(HarmonicFunction::Dominant),
            "submediant" => Ok(HarmonicFunction::Submediant),
            "subtonic" => Ok(HarmonicFunction::Subtonic),
            "leading_tone" => Ok(HarmonicFunction::LeadingTone),
            _ => Err(TheoryError::UnknownFunction { raw: s.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_tokens_roundtrip() {
        for q in [ChordQuality::Maj, ChordQuality::Min, ChordQuality::Dim] {
            assert_eq!(q.name().parse::<ChordQuality>().unwrap(), q);
        }
        assert!("aug".parse::<ChordQuality>().is_err());
    }

    #[test]
    fn function_tokens_roundtrip() {
        use HarmonicFunction::*;
        for f in [
            Tonic,
            Supertonic,
            Mediant,
            Subdominant,
            Dominant,
            Submediant,
            Subtonic,
            LeadingTone,
        ] {
            assert_eq!(f.name().parse::<HarmonicFunction>().unwrap(), f);
        }
    }

    #[test]
    fn serde_uses_canonical_tokens() {
        assert_eq!(
            serde_json::to_string(&HarmonicFunction::LeadingTone).unwrap(),
            "\"leading_tone\""
        );
        assert_eq!(
            serde_json::to_string(&ChordQuality::Maj).unwrap(),
            "\"maj\""
        );
    }
}
