// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use anyhow::{anyhow, Result};
use concert::config::{validate_config, ConcertFile};
use concert::music::{Mixer, MixerItem, Note, Scale};
use std::env;
use tracing::{info, warn, Level};

fn print_usage() {
    println!("Concert - chord recognition and scales");
    println!();
    println!("Usage: concert [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --play <FILE> [NOTE...]   Play a concert file through the mixer");
    println!("                            (notes given here replace its performance)");
    println!("  --validate <FILE>         Check a concert file without playing it");
    println!("  --scale <ROOT> <MODE>     Print the notes of a scale (MODE: maj or min)");
    println!("  --verbose                 Enable debug logging");
    println!("  --help                    Show this help message");
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn play(path: &str, notes: &[String]) -> Result<()> {
    let file = ConcertFile::load(path)?;
    let chords = file.build_chords()?;
    let scale = file.scale()?;

    let performance: Vec<Note> = if notes.is_empty() {
        file.performance.clone()
    } else {
        notes
            .iter()
            .map(|raw| Note::new(raw).map_err(|e| anyhow!("Invalid note on command line: {}", e)))
            .collect::<Result<_>>()?
    };

    info!(
        concert = %file.concert.name,
        chords = chords.len(),
        notes = performance.len(),
        "playing concert"
    );

    let mut mixer = Mixer::new(&chords);
    for note in performance {
        if let Some(chord) = mixer.add(note) {
            info!(%note, chord = %chord, "chord completed");
        }
    }

    println!("{} in {}", file.concert.name, scale);
    println!();
    println!("{}", mixer.describe());
    println!();

    let items = mixer.extract();
    let rendered: Vec<String> = items.iter().map(|item| item.to_string()).collect();
    println!("Extracted: [{}]", rendered.join(", "));

    for item in &items {
        let MixerItem::Chord(chord) = item else {
            continue;
        };
        let in_scale = if scale.contains_chord(chord) {
            "in scale"
        } else {
            "not in scale"
        };
        match scale.classify_chord(chord) {
            Ok(quality) => println!("  {}: {}, {}", chord, in_scale, quality),
            Err(e) => {
                warn!(chord = %chord, "classification failed: {}", e);
                println!("  {}: {}, unclassified", chord, in_scale);
            }
        }
    }

    Ok(())
}

fn validate(path: &str) -> Result<()> {
    let file = validate_config(path)?;
    println!(
        "{}: {} chords, {} performance notes, key {} {}",
        file.concert.name,
        file.chords.len(),
        file.performance.len(),
        file.concert.key,
        file.concert.scale
    );
    println!("Configuration OK");
    Ok(())
}

fn print_scale(root: &str, mode: &str) -> Result<()> {
    let scale = Scale::parse(root, mode)?;
    let notes: Vec<String> = scale.notes().iter().map(|n| n.to_string()).collect();
    println!("{}: {}", scale, notes.join(" "));
    Ok(())
}

fn main() -> Result<()> {
    let mut args: Vec<String> = env::args().collect();

    let verbose = args.iter().any(|a| a == "--verbose");
    args.retain(|a| a != "--verbose");
    init_logging(verbose);

    if args.len() < 2 {
        println!("Concert - chord recognition and scales");
        println!("Run with --help for usage information");
        return Ok(());
    }

    match args[1].as_str() {
        "--play" => {
            if args.len() < 3 {
                eprintln!("Error: --play requires a concert file");
                std::process::exit(1);
            }
            play(&args[2], &args[3..])?;
        }
        "--validate" => {
            if args.len() < 3 {
                eprintln!("Error: --validate requires a concert file");
                std::process::exit(1);
            }
            validate(&args[2])?;
        }
        "--scale" => {
            if args.len() < 4 {
                eprintln!("Error: --scale requires a root note and a mode");
                std::process::exit(1);
            }
            print_scale(&args[2], &args[3])?;
        }
        "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Unknown option: {}", args[1]);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}
