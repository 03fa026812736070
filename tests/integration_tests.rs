//! Integration tests for the complete Cadenza pipeline
//!
//! These tests verify end-to-end behavior across crates:
//! - theory (scales, normalization) → fact generation → query engine
//! - the documented example queries, pinned exactly
//!
//! Run with: cargo test --test integration_tests

use cadenza_factdb::{
    ChordKeyPattern, FactDb, PivotPattern, RomanKeyPattern, FACT_COUNT,
};
use cadenza_theory::{ChordQuality, HarmonicFunction, Mode, PitchName};

fn db() -> FactDb {
    FactDb::with_tempered_scales().expect("generate fact table")
}

// ============================================================================
// Fact table shape
// ============================================================================

#[test]
fn full_scan_is_588_facts_in_stable_order() {
    let db = db();
    let first = db.query_chord_key(&ChordKeyPattern::any());
    let second = db.query_chord_key(&ChordKeyPattern::any());
    assert_eq!(first.len(), FACT_COUNT);
    assert_eq!(first, second);
}

#[test]
fn every_key_and_mode_covers_all_seven_functions() {
    let db = db();
    for key_root in PitchName::CHROMATIC {
        for mode in Mode::ALL {
            let facts = db.query_chord_key(&ChordKeyPattern {
                key_root: Some(key_root),
                mode: Some(mode),
                ..ChordKeyPattern::any()
            });
            assert_eq!(facts.len(), 7, "{key_root} {mode}");
            let mut functions: Vec<&str> = facts.iter().map(|f| f.function.name()).collect();
            functions.sort_unstable();
            functions.dedup();
            assert_eq!(functions.len(), 7, "{key_root} {mode}");
        }
    }
}

// ============================================================================
// Documented example queries
// ============================================================================

#[test]
fn d_major_as_dominant_example() {
    let db = db();
    let results = db.query_chord_key(&ChordKeyPattern {
        chord_root: Some(PitchName::D),
        chord_quality: Some(ChordQuality::Maj),
        function: Some(HarmonicFunction::Dominant),
        ..ChordKeyPattern::any()
    });
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].key_root, PitchName::G);
    assert_eq!(results[0].mode, Mode::Ionian);
    assert_eq!(results[1].key_root, PitchName::G);
    assert_eq!(results[1].mode, Mode::Lydian);
}

#[test]
fn g_major_pivot_between_c_ionian_dominant_and_d_subdominant() {
    let db = db();
    let forward = PivotPattern {
        chord_root: Some(PitchName::G),
        chord_quality: Some(ChordQuality::Maj),
        key1_root: Some(PitchName::C),
        mode1: Some(Mode::Ionian),
        function1: Some(HarmonicFunction::Dominant),
        key2_root: Some(PitchName::D),
        function2: Some(HarmonicFunction::Subdominant),
        ..PivotPattern::any()
    };
    let results = db.query_pivot_chord_keys(&forward);

    // G major is IV of d dorian, d ionian, and d mixolydian; in d aeolian,
    // d phrygian, and d locrian the fourth degree chord is g minor.
    let modes2: Vec<Mode> = results.iter().map(|t| t.mode2).collect();
    assert_eq!(modes2, vec![Mode::Dorian, Mode::Ionian, Mode::Mixolydian]);
    for t in &results {
        assert_eq!(t.roman1, "V");
        assert_eq!(t.roman2, "IV");
    }

    // The mirrored pattern yields the other orientation of the same three
    // pivots; together the documented example's six tuples.
    let mirrored = PivotPattern {
        chord_root: Some(PitchName::G),
        chord_quality: Some(ChordQuality::Maj),
        key1_root: Some(PitchName::D),
        function1: Some(HarmonicFunction::Subdominant),
        key2_root: Some(PitchName::C),
        mode2: Some(Mode::Ionian),
        function2: Some(HarmonicFunction::Dominant),
        ..PivotPattern::any()
    };
    let back = db.query_pivot_chord_keys(&mirrored);
    assert_eq!(results.len() + back.len(), 6);
    for t in &back {
        assert_eq!(t.roman1, "IV");
        assert_eq!(t.roman2, "V");
    }
}

// ============================================================================
// Rule semantics
// ============================================================================

#[test]
fn pivot_relation_is_symmetric_under_half_swap() {
    let db = db();
    let sample = db.query_pivot_chord_keys(&PivotPattern {
        chord_root: Some(PitchName::Bb),
        chord_quality: Some(ChordQuality::Maj),
        key1_root: Some(PitchName::Eb),
        ..PivotPattern::any()
    });
    assert!(!sample.is_empty());
    for t in &sample {
        let swapped = PivotPattern {
            chord_root: Some(t.chord_root),
            chord_quality: Some(t.chord_quality),
            key1_root: Some(t.key2_root),
            mode1: Some(t.mode2),
            function1: Some(t.function2),
            roman1: Some(t.roman2.to_string()),
            key2_root: Some(t.key1_root),
            mode2: Some(t.mode1),
            function2: Some(t.function1),
            roman2: Some(t.roman1.to_string()),
        };
        assert_eq!(db.query_pivot_chord_keys(&swapped).len(), 1);
    }
}

#[test]
fn roman_key_is_known_to_be_broad() {
    let db = db();
    // The rule projects the root columns away without joining on them, so
    // any two numerals with differing functions correspond, one tuple per
    // contributing fact pair. 12 tonic facts x 12 dominant facts here.
    let results = db.query_roman_key(&RomanKeyPattern {
        mode1: Some(Mode::Ionian),
        roman1: Some("I".to_string()),
        mode2: Some(Mode::Ionian),
        roman2: Some("V".to_string()),
    });
    assert_eq!(results.len(), 144);
}

// ============================================================================
// Empty results are not errors
// ============================================================================

#[test]
fn unsatisfiable_bindings_return_empty() {
    let db = db();
    // Ionian has no diminished tonic (only locrian does), so this pattern
    // is structurally unsatisfiable.
    let facts = db.query_chord_key(&ChordKeyPattern {
        chord_quality: Some(ChordQuality::Dim),
        mode: Some(Mode::Ionian),
        function: Some(HarmonicFunction::Tonic),
        ..ChordKeyPattern::any()
    });
    assert!(facts.is_empty());

    let pivots = db.query_pivot_chord_keys(&PivotPattern {
        roman1: Some("IX".to_string()),
        ..PivotPattern::any()
    });
    assert!(pivots.is_empty());

    let romans = db.query_roman_key(&RomanKeyPattern {
        roman1: Some("IX".to_string()),
        ..RomanKeyPattern::any()
    });
    assert!(romans.is_empty());
}

// ============================================================================
// JSON output
// ============================================================================

#[test]
fn query_results_serialize_with_canonical_tokens() {
    let db = db();
    let results = db.query_chord_key(&ChordKeyPattern {
        key_root: Some(PitchName::G),
        mode: Some(Mode::Ionian),
        function: Some(HarmonicFunction::Dominant),
        ..ChordKeyPattern::any()
    });
    assert_eq!(results.len(), 1);
    assert_eq!(
        serde_json::to_value(results[0]).unwrap(),
        serde_json::json!({
            "chord_root": "d",
            "chord_quality": "maj",
            "key_root": "g",
            "mode": "ionian",
            "function": "dominant",
            "roman": "V",
        })
    );

    let pivots = db.query_pivot_chord_keys(&PivotPattern {
        chord_root: Some(PitchName::D),
        chord_quality: Some(ChordQuality::Maj),
        key1_root: Some(PitchName::G),
        mode1: Some(Mode::Ionian),
        mode2: Some(Mode::Lydian),
        ..PivotPattern::any()
    });
    let json = serde_json::to_value(&pivots).unwrap();
    let rows = json.as_array().unwrap();
    assert!(!rows.is_empty());
    for row in rows {
        assert_eq!(row["chord_root"], "d");
        assert_eq!(row["mode1"], "ionian");
        assert_eq!(row["mode2"], "lydian");
    }
}

// ============================================================================
// Caller-side normalization
// ============================================================================

#[test]
fn enharmonic_input_normalizes_before_matching() {
    let db = db();
    // `f#` is not a canonical spelling; parsing it through the vocabulary
    // yields `gb`, which the engine then matches exactly.
    let root: PitchName = "f#".parse().expect("normalize f#");
    assert_eq!(root, PitchName::Gb);
    let facts = db.query_chord_key(&ChordKeyPattern {
        chord_root: Some(root),
        chord_quality: Some(ChordQuality::Maj),
        mode: Some(Mode::Ionian),
        function: Some(HarmonicFunction::Tonic),
        ..ChordKeyPattern::any()
    });
    assert_eq!(facts.len(), 1);
    assert_eq!(facts[0].key_root, PitchName::Gb);
}
