//! Typed query patterns and the three relation scans.
//!
//! A pattern is a struct of `Option` slots mirroring its relation's tuple
//! shape: `None` is a free slot that matches anything, `Some(v)` matches a
//! tuple whose field equals `v` exactly. Because the slots are typed, a
//! wrong-arity or wrong-typed query cannot be written at all, and there is
//! no text to parse or case-folding to apply: a mis-cased roman label is a
//! non-match, not an error.
//!
//! Every scan enumerates the fact table in generation order and returns a
//! fresh `Vec`, so repeated calls with the same pattern give identical
//! sequences. An unsatisfiable pattern returns an empty vec.

use serde::Serialize;

use cadenza_theory::{ChordQuality, HarmonicFunction, Mode, PitchName};

use crate::{ChordKeyFact, FactDb};

fn slot<T: Copy + PartialEq>(want: Option<T>, got: T) -> bool {
    want.map_or(true, |w| w == got)
}

fn slot_str(want: Option<&str>, got: &str) -> bool {
    want.map_or(true, |w| w == got)
}

/// Pattern over the 6-column `chord_key` relation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChordKeyPattern {
    pub chord_root: Option<PitchName>,
    pub chord_quality: Option<ChordQuality>,
    pub key_root: Option<PitchName>,
    pub mode: Option<Mode>,
    pub function: Option<HarmonicFunction>,
    pub roman: Option<String>,
}

impl ChordKeyPattern {
    /// All slots free: matches the entire relation.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn matches(&self, fact: &ChordKeyFact) -> bool {
        slot(self.chord_root, fact.chord_root)
            && slot(self.chord_quality, fact.chord_quality)
            && slot(self.key_root, fact.key_root)
            && slot(self.mode, fact.mode)
            && slot(self.function, fact.function)
            && slot_str(self.roman.as_deref(), fact.roman)
    }
}

/// One result tuple of the `pivot_chord_keys` relation: a single chord
/// heard under two key/mode contexts with different harmonic functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PivotChordKey {
    pub chord_root: PitchName,
    pub chord_quality: ChordQuality,
    pub key1_root: PitchName,
    pub mode1: Mode,
    pub function1: HarmonicFunction,
    pub roman1: &'static str,
    pub key2_root: PitchName,
    pub mode2: Mode,
    pub function2: HarmonicFunction,
    pub roman2: &'static str,
}

/// Pattern over the 10-column `pivot_chord_keys` relation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PivotPattern {
    pub chord_root: Option<PitchName>,
    pub chord_quality: Option<ChordQuality>,
    pub key1_root: Option<PitchName>,
    pub mode1: Option<Mode>,
    pub function1: Option<HarmonicFunction>,
    pub roman1: Option<String>,
    pub key2_root: Option<PitchName>,
    pub mode2: Option<Mode>,
    pub function2: Option<HarmonicFunction>,
    pub roman2: Option<String>,
}

impl PivotPattern {
    /// All slots free: matches the entire relation.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn matches(&self, t: &PivotChordKey) -> bool {
        slot(self.chord_root, t.chord_root)
            && slot(self.chord_quality, t.chord_quality)
            && slot(self.key1_root, t.key1_root)
            && slot(self.mode1, t.mode1)
            && slot(self.function1, t.function1)
            && slot_str(self.roman1.as_deref(), t.roman1)
            && slot(self.key2_root, t.key2_root)
            && slot(self.mode2, t.mode2)
            && slot(self.function2, t.function2)
            && slot_str(self.roman2.as_deref(), t.roman2)
    }

    /// Whether `f` can serve as the first half of a matching tuple.
    /// Used as a pre-filter before the inner scan; the full `matches`
    /// check still decides each candidate.
    fn admits_first(&self, f: &ChordKeyFact) -> bool {
        slot(self.chord_root, f.chord_root)
            && slot(self.chord_quality, f.chord_quality)
            && slot(self.key1_root, f.key_root)
            && slot(self.mode1, f.mode)
            && slot(self.function1, f.function)
            && slot_str(self.roman1.as_deref(), f.roman)
    }
}

/// One result tuple of the `roman_key` relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RomanKey {
    pub mode1: Mode,
    pub roman1: &'static str,
    pub mode2: Mode,
    pub roman2: &'static str,
}

/// Pattern over the 4-column `roman_key` relation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RomanKeyPattern {
    pub mode1: Option<Mode>,
    pub roman1: Option<String>,
    pub mode2: Option<Mode>,
    pub roman2: Option<String>,
}

impl RomanKeyPattern {
    /// All slots free: matches the entire relation.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn matches(&self, t: &RomanKey) -> bool {
        slot(self.mode1, t.mode1)
            && slot_str(self.roman1.as_deref(), t.roman1)
            && slot(self.mode2, t.mode2)
            && slot_str(self.roman2.as_deref(), t.roman2)
    }
}

impl FactDb {
    /// Scan the base relation once, keeping facts the pattern admits.
    pub fn query_chord_key(&self, pattern: &ChordKeyPattern) -> Vec<ChordKeyFact> {
        self.facts()
            .iter()
            .filter(|f| pattern.matches(f))
            .copied()
            .collect()
    }

    /// Evaluate the `pivot_chord_keys` rule under `pattern`.
    ///
    /// The rule body is a self-join: ordered fact pairs `(f1, f2)` sharing
    /// `chord_root` and `chord_quality` with `f1.function != f2.function`.
    /// Both orientations of a pivot appear, since `(f2, f1)` is its own
    /// pair later in the scan. The inequality also drops `f1 == f2`.
    /// 588^2 candidate pairs is small enough that the quadratic scan stays
    /// well under a second.
    pub fn query_pivot_chord_keys(&self, pattern: &PivotPattern) -> Vec<PivotChordKey> {
        let mut out = Vec::new();
        for f1 in self.facts() {
            if !pattern.admits_first(f1) {
                continue;
            }
            for f2 in self.facts() {
                if f1.chord_root != f2.chord_root
                    || f1.chord_quality != f2.chord_quality
                    || f1.function == f2.function
                {
                    continue;
                }
                let candidate = PivotChordKey {
                    chord_root: f1.chord_root,
                    chord_quality: f1.chord_quality,
                    key1_root: f1.key_root,
                    mode1: f1.mode,
                    function1: f1.function,
                    roman1: f1.roman,
                    key2_root: f2.key_root,
                    mode2: f2.mode,
                    function2: f2.function,
                    roman2: f2.roman,
                };
                if pattern.matches(&candidate) {
                    out.push(candidate);
                }
            }
        }
        out
    }

    /// Evaluate the `roman_key` rule under `pattern`.
    ///
    /// The rule body joins nothing beyond the function inequality: any two
    /// facts with differing `function` contribute a tuple, with the root
    /// and key columns projected away. This makes the relation very broad
    /// (and full of repeated tuples); the breadth is preserved by design
    /// for compatibility with the rule as originally stated, rather than
    /// tightened to a root-sharing join.
    pub fn query_roman_key(&self, pattern: &RomanKeyPattern) -> Vec<RomanKey> {
        let mut out = Vec::new();
        for f1 in self.facts() {
            if !(slot(pattern.mode1, f1.mode) && slot_str(pattern.roman1.as_deref(), f1.roman)) {
                continue;
            }
            for f2 in self.facts() {
                if f1.function == f2.function {
                    continue;
                }
                let candidate = RomanKey {
                    mode1: f1.mode,
                    roman1: f1.roman,
                    mode2: f2.mode,
                    roman2: f2.roman,
                };
                if pattern.matches(&candidate) {
                    out.push(candidate);
                }
            }
        }
        out
    }
}
