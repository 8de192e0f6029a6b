// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Concert: note normalization, chord recognition and diatonic scales.
//!
//! ```
//! use concert::music::{Chord, Chords, Mixer, Note};
//!
//! let n = |s: &str| Note::new(s).unwrap();
//!
//! let mut chords = Chords::new();
//! chords.add(Chord::new(n("E"), n("B"), "E5", None).unwrap()).unwrap();
//!
//! let mut mixer = Mixer::new(&chords);
//! mixer.add(n("E"));
//! mixer.add(n("C#"));
//! mixer.add(n("B"));
//!
//! assert_eq!(mixer.describe(), "Notes:\n  * C#\n  * E5");
//! ```

pub mod config;
pub mod music;

pub use music::{
    Chord, ChordQuality, Chords, Mixer, MixerItem, MusicError, Note, NoteCollection, Scale,
    ScaleMode,
};
