//! Cadenza CLI
//!
//! Command-line surface over the chord-key knowledge base:
//! - `chord-keys`: enumerate base facts under partial bindings
//! - `pivots`: find chords shared between two key/mode contexts
//! - `roman-keys`: probe the (deliberately broad) numeral correspondence
//! - `modes`: print the static mode-definition table
//!
//! Pitch flags accept any enharmonic spelling and are normalized before
//! matching; the engine itself compares canonical values only.

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use cadenza_factdb::{
    degree_table, ChordKeyPattern, FactDb, PivotPattern, RomanKeyPattern,
};
use cadenza_theory::{ChordQuality, HarmonicFunction, Mode, PitchName};

#[derive(Parser)]
#[command(name = "cadenza")]
#[command(author, version, about = "Diatonic harmony knowledge base")]
struct Cli {
    /// Emit JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enumerate chord-key facts matching the given bindings.
    ChordKeys(ChordKeyArgs),
    /// Enumerate pivot chords: one chord, two key/mode readings.
    Pivots(PivotArgs),
    /// Probe the roman/mode correspondence rule.
    RomanKeys(RomanKeyArgs),
    /// Print the static mode-definition table.
    Modes,
}

#[derive(Args)]
struct ChordKeyArgs {
    /// Chord root, any enharmonic spelling (e.g. `f#` matches `gb`).
    #[arg(long)]
    chord_root: Option<PitchName>,
    /// Chord quality: maj, min, or dim.
    #[arg(long)]
    quality: Option<ChordQuality>,
    /// Key root, any enharmonic spelling.
    #[arg(long)]
    key_root: Option<PitchName>,
    /// Mode name (ionian, dorian, ...).
    #[arg(long)]
    mode: Option<Mode>,
    /// Harmonic function (tonic, dominant, leading_tone, ...).
    #[arg(long)]
    function: Option<HarmonicFunction>,
    /// Roman numeral label, exact match (e.g. `vii°`).
    #[arg(long)]
    roman: Option<String>,
}

#[derive(Args)]
struct PivotArgs {
    #[arg(long)]
    chord_root: Option<PitchName>,
    /// Chord quality: maj, min, or dim.
    #[arg(long)]
    quality: Option<ChordQuality>,
    #[arg(long)]
    key1: Option<PitchName>,
    #[arg(long)]
    mode1: Option<Mode>,
    #[arg(long)]
    function1: Option<HarmonicFunction>,
    #[arg(long)]
    roman1: Option<String>,
    #[arg(long)]
    key2: Option<PitchName>,
    #[arg(long)]
    mode2: Option<Mode>,
    #[arg(long)]
    function2: Option<HarmonicFunction>,
    #[arg(long)]
    roman2: Option<String>,
}

#[derive(Args)]
struct RomanKeyArgs {
    #[arg(long)]
    mode1: Option<Mode>,
    #[arg(long)]
    roman1: Option<String>,
    #[arg(long)]
    mode2: Option<Mode>,
    #[arg(long)]
    roman2: Option<String>,
    /// Allow a fully unbound scan (~300k rows).
    #[arg(long)]
    all: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let db = FactDb::with_tempered_scales()?;

    match cli.command {
        Commands::ChordKeys(args) => run_chord_keys(&db, args, cli.json),
        Commands::Pivots(args) => run_pivots(&db, args, cli.json),
        Commands::RomanKeys(args) => run_roman_keys(&db, args, cli.json),
        Commands::Modes => run_modes(cli.json),
    }
}

fn run_chord_keys(db: &FactDb, args: ChordKeyArgs, json: bool) -> Result<()> {
    let pattern = ChordKeyPattern {
        chord_root: args.chord_root,
        chord_quality: args.quality,
        key_root: args.key_root,
        mode: args.mode,
        function: args.function,
        roman: args.roman,
    };
    let results = db.query_chord_key(&pattern);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }
    for f in &results {
        println!(
            "{} {} = {} ({}) in {} {}",
            f.chord_root.to_string().bold(),
            f.chord_quality,
            f.roman.cyan(),
            f.function,
            f.key_root,
            f.mode,
        );
    }
    print_count(results.len());
    Ok(())
}

fn run_pivots(db: &FactDb, args: PivotArgs, json: bool) -> Result<()> {
    let pattern = PivotPattern {
        chord_root: args.chord_root,
        chord_quality: args.quality,
        key1_root: args.key1,
        mode1: args.mode1,
        function1: args.function1,
        roman1: args.roman1,
        key2_root: args.key2,
        mode2: args.mode2,
        function2: args.function2,
        roman2: args.roman2,
    };
    let results = db.query_pivot_chord_keys(&pattern);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }
    for t in &results {
        println!(
            "{} {}: {} ({}) in {} {} <-> {} ({}) in {} {}",
            t.chord_root.to_string().bold(),
            t.chord_quality,
            t.roman1.cyan(),
            t.function1,
            t.key1_root,
            t.mode1,
            t.roman2.cyan(),
            t.function2,
            t.key2_root,
            t.mode2,
        );
    }
    print_count(results.len());
    Ok(())
}

fn run_roman_keys(db: &FactDb, args: RomanKeyArgs, json: bool) -> Result<()> {
    let pattern = RomanKeyPattern {
        mode1: args.mode1,
        roman1: args.roman1,
        mode2: args.mode2,
        roman2: args.roman2,
    };
    if pattern == RomanKeyPattern::any() && !args.all {
        bail!("unbound roman-keys scan enumerates ~300k rows; pass --all to run it anyway");
    }
    let results = db.query_roman_key(&pattern);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }
    for t in &results {
        println!(
            "{} {} <-> {} {}",
            t.mode1,
            t.roman1.cyan(),
            t.mode2,
            t.roman2.cyan(),
        );
    }
    print_count(results.len());
    Ok(())
}

fn run_modes(json: bool) -> Result<()> {
    if json {
        let table: Vec<serde_json::Value> = Mode::ALL
            .into_iter()
            .map(|mode| {
                serde_json::json!({
                    "mode": mode.name(),
                    "degrees": degree_table(mode)
                        .iter()
                        .map(|d| serde_json::json!({
                            "quality": d.quality,
                            "roman": d.roman,
                            "function": d.function,
                        }))
                        .collect::<Vec<_>>(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }
    for mode in Mode::ALL {
        println!("{}", mode.to_string().bold());
        for (degree, d) in degree_table(mode).iter().enumerate() {
            println!(
                "  {} {:5} {} {}",
                degree + 1,
                d.roman.cyan(),
                d.quality,
                d.function,
            );
        }
    }
    Ok(())
}

fn print_count(n: usize) {
    let line = format!("{n} match(es)");
    println!("{}", line.dimmed());
}
