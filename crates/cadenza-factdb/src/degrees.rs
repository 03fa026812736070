//! Static mode-definition table.
//!
//! For each of the seven modes this records, per scale degree 1..=7, the
//! triad quality, the roman-numeral label, and the harmonic function of
//! the chord built on that degree. The table is the authority the fact
//! generator pairs against scale pitches; it is `'static` data and never
//! changes after load.
//!
//! Roman numerals are degree-relative (lydian's raised fourth is `iv°`,
//! not `#iv°`): the numeral counts mode degrees and the case/`°` mark
//! carries the quality.

use cadenza_theory::ChordQuality::{Dim, Maj, Min};
use cadenza_theory::HarmonicFunction::{
    Dominant, LeadingTone, Mediant, Subdominant, Submediant, Subtonic, Supertonic, Tonic,
};
use cadenza_theory::{ChordQuality, HarmonicFunction, Mode};

/// Descriptor of the diatonic triad on one scale degree of one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DegreeChord {
    pub quality: ChordQuality,
    pub roman: &'static str,
    pub function: HarmonicFunction,
}

const fn dc(
    quality: ChordQuality,
    roman: &'static str,
    function: HarmonicFunction,
) -> DegreeChord {
    DegreeChord {
        quality,
        roman,
        function,
    }
}

const AEOLIAN: [DegreeChord; 7] = [
    dc(Min, "i", Tonic),
    dc(Dim, "ii°", Supertonic),
    dc(Maj, "III", Mediant),
    dc(Min, "iv", Subdominant),
    dc(Min, "v", Dominant),
    dc(Maj, "VI", Submediant),
    dc(Maj, "VII", Subtonic),
];

const DORIAN: [DegreeChord; 7] = [
    dc(Min, "i", Tonic),
    dc(Min, "ii", Supertonic),
    dc(Maj, "III", Mediant),
    dc(Maj, "IV", Subdominant),
    dc(Min, "v", Dominant),
    dc(Dim, "vi°", Submediant),
    dc(Maj, "VII", Subtonic),
];

const IONIAN: [DegreeChord; 7] = [
    dc(Maj, "I", Tonic),
    dc(Min, "ii", Supertonic),
    dc(Min, "iii", Mediant),
    dc(Maj, "IV", Subdominant),
    dc(Maj, "V", Dominant),
    dc(Min, "vi", Submediant),
    dc(Dim, "vii°", LeadingTone),
];

const LOCRIAN: [DegreeChord; 7] = [
    dc(Dim, "i°", Tonic),
    dc(Maj, "II", Supertonic),
    dc(Min, "iii", Mediant),
    dc(Min, "iv", Subdominant),
    // Degree 5 sits a tritone from the tonic; the catalog records it as a
    // minor v rather than a major triad on the lowered fifth.
    dc(Min, "v", Dominant),
    dc(Maj, "VI", Submediant),
    dc(Min, "vii", Subtonic),
];

const LYDIAN: [DegreeChord; 7] = [
    dc(Maj, "I", Tonic),
    dc(Maj, "II", Supertonic),
    dc(Min, "iii", Mediant),
    dc(Dim, "iv°", Subdominant),
    dc(Maj, "V", Dominant),
    dc(Min, "vi", Submediant),
    dc(Min, "vii", LeadingTone),
];

const MIXOLYDIAN: [DegreeChord; 7] = [
    dc(Maj, "I", Tonic),
    dc(Min, "ii", Supertonic),
    dc(Dim, "iii°", Mediant),
    dc(Maj, "IV", Subdominant),
    dc(Min, "v", Dominant),
    dc(Min, "vi", Submediant),
    dc(Maj, "VII", Subtonic),
];

const PHRYGIAN: [DegreeChord; 7] = [
    dc(Min, "i", Tonic),
    dc(Maj, "II", Supertonic),
    dc(Maj, "III", Mediant),
    dc(Min, "iv", Subdominant),
    dc(Dim, "v°", Dominant),
    dc(Maj, "VI", Submediant),
    dc(Min, "vii", Subtonic),
];

/// The seven degree descriptors of `mode`, in degree order 1..=7.
pub const fn degree_table(mode: Mode) -> &'static [DegreeChord; 7] {
    match mode {
        Mode::Aeolian => &AEOLIAN,
        Mode::Dorian => &DORIAN,
        Mode::Ionian => &IONIAN,
        Mode::Locrian => &LOCRIAN,
        Mode::Lydian => &LYDIAN,
        Mode::Mixolydian => &MIXOLYDIAN,
        Mode::Phrygian => &PHRYGIAN,
    }
}
