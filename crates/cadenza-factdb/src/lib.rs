//! Cadenza FactDB: a generated diatonic-harmony knowledge base.
//!
//! The database holds one base relation and two derived relations:
//!
//! 1. **`chord_key`**: 588 generated facts, one per (chromatic root x
//!    mode x scale degree), each stating "this chord, with this quality,
//!    serves this function in this key and mode under this numeral".
//! 2. **`pivot_chord_keys`**: a self-join, the same (root, quality) chord
//!    read under two key/mode contexts with differing functions.
//! 3. **`roman_key`**: (mode, numeral) pairs whose facts differ in
//!    function; deliberately unconstrained on the root columns (see
//!    [`FactDb::query_roman_key`]).
//!
//! Queries are typed patterns: structs of `Option` slots where `None`
//! matches anything and `Some(v)` matches by equality. There is no query
//! text to parse and no general resolution; each relation has exactly one
//! scan shape.
//!
//! The fact table is built once at construction from a [`ScaleSource`] and
//! is immutable afterwards, so a `&FactDb` can be shared across threads
//! without locking. Generation order (chromatic roots outer, modes in
//! lexicographic order inner, degrees 1..=7 innermost) is a contract:
//! every query enumerates results in that order.

use serde::Serialize;
use thiserror::Error;

use cadenza_theory::{
    ChordQuality, HarmonicFunction, Mode, PitchName, ScaleSource, TemperedScales, TheoryError,
};

pub mod degrees;
pub mod query;

pub use degrees::{degree_table, DegreeChord};
pub use query::{ChordKeyPattern, PivotChordKey, PivotPattern, RomanKey, RomanKeyPattern};

/// Number of facts in a well-formed table: 12 roots x 7 modes x 7 degrees.
pub const FACT_COUNT: usize = 12 * 7 * 7;

/// One row of the `chord_key` relation.
///
/// Reads as: "a `chord_quality` chord on `chord_root` is the degree chord
/// labeled `roman`, serving `function`, when the key is `key_root`
/// `mode`."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChordKeyFact {
    pub chord_root: PitchName,
    pub chord_quality: ChordQuality,
    pub key_root: PitchName,
    pub mode: Mode,
    pub function: HarmonicFunction,
    pub roman: &'static str,
}

/// Construction-time failures. There is no recoverable subset: a `FactDb`
/// either holds the complete 588-row table or does not exist.
#[derive(Debug, Error)]
pub enum FactDbError {
    #[error("scale source returned {got} degrees for {root} {mode}, expected 7")]
    ScaleLength {
        root: PitchName,
        mode: Mode,
        got: usize,
    },
    #[error(transparent)]
    Theory(#[from] TheoryError),
}

/// The immutable chord-key fact table plus its query operations.
#[derive(Debug, Clone)]
pub struct FactDb {
    facts: Vec<ChordKeyFact>,
}

impl FactDb {
    /// Generate the full fact table from `source`.
    ///
    /// Fails fast on a malformed source (wrong-length scale, unspellable
    /// pitch); no partial table is ever observable.
    pub fn new(source: &impl ScaleSource) -> Result<Self, FactDbError> {
        let mut facts = Vec::with_capacity(FACT_COUNT);

        for root in PitchName::CHROMATIC {
            for mode in Mode::ALL {
                let raw = source.scale(root, mode)?;
                if raw.len() != 7 {
                    return Err(FactDbError::ScaleLength {
                        root,
                        mode,
                        got: raw.len(),
                    });
                }
                let key_root = source.normalize(root.name())?;
                for (spelling, descriptor) in raw.iter().zip(degree_table(mode)) {
                    facts.push(ChordKeyFact {
                        chord_root: source.normalize(spelling)?,
                        chord_quality: descriptor.quality,
                        key_root,
                        mode,
                        function: descriptor.function,
                        roman: descriptor.roman,
                    });
                }
            }
        }

        debug_assert_eq!(facts.len(), FACT_COUNT);
        Ok(FactDb { facts })
    }

    /// Generate from the default equal-tempered [`ScaleSource`].
    pub fn with_tempered_scales() -> Result<Self, FactDbError> {
        Self::new(&TemperedScales)
    }

    /// The full fact table in generation order.
    pub fn facts(&self) -> &[ChordKeyFact] {
        &self.facts
    }
}
