// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory core.
//!
//! This module provides normalized notes, note collections, chords with a
//! chord registry, incremental chord recognition, and diatonic scales.

pub mod chord;
pub mod collection;
pub mod mixer;
pub mod note;
pub mod scale;

pub use chord::{chord_key, Chord, ChordKey, Chords};
pub use collection::NoteCollection;
pub use mixer::{Mixer, MixerItem};
pub use note::{Alteration, Interval, Note};
pub use scale::{ChordQuality, Scale, ScaleMode};

use thiserror::Error;

/// Errors raised by the music core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MusicError {
    /// Input is not a note name (a letter with an optional `#` or `b`)
    #[error("invalid note `{0}`")]
    InvalidNote(String),

    /// Transposition only works on the letters A to G
    #[error("note letter `{0}` is outside the A-G cycle")]
    LetterOutOfCycle(char),

    /// Two notes of a chord, or a note and the chord name, are the same note
    #[error("chord `{chord}` has duplicate note names")]
    DuplicateNoteNames {
        /// Name of the rejected chord
        chord: String,
    },

    /// A chord needs 2 or 3 notes
    #[error("chord `{chord}` has {count} notes, expected 2 or 3")]
    InvalidChordSize {
        /// Name of the rejected chord
        chord: String,
        /// Number of notes given
        count: usize,
    },

    /// The note set is already registered to another chord
    #[error("chord `{chord}` overlaps with registered chord `{existing}`")]
    ChordOverlap {
        /// Name of the rejected chord
        chord: String,
        /// Name of the chord already using the note set
        existing: String,
    },

    /// Scale mode name not recognized
    #[error("unknown scale mode `{0}`, expected maj or min")]
    UnknownScaleMode(String),

    /// Chord shares no note with the major or minor scale on the root
    #[error("chord `{chord}` is not in the scale of {scale}")]
    ChordNotInScale {
        /// Name of the chord
        chord: String,
        /// Scale it was checked against
        scale: String,
    },
}
