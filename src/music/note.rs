// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Note names with enharmonic normalization.
//!
//! Flats are folded into the sharp of the previous letter when a note is
//! parsed, so `Bb` and `A#` are the same value. Equality, hashing and
//! ordering all work on that normalized form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::MusicError;

/// Letters that transposition cycles through
pub const LETTER_CYCLE: [char; 7] = ['A', 'B', 'C', 'D', 'E', 'F', 'G'];

/// Alteration of a normalized note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alteration {
    Natural,
    Sharp,
}

/// Step size used when building scales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interval {
    Half = 1,
    Whole = 2,
}

impl Interval {
    /// Build an interval from a semitone count (1 or 2)
    pub fn from_semitones(semitones: u8) -> Option<Self> {
        match semitones {
            1 => Some(Interval::Half),
            2 => Some(Interval::Whole),
            _ => None,
        }
    }

    /// Semitone size of this interval
    pub fn semitones(self) -> u8 {
        self as u8
    }
}

/// A single pitch: an uppercase letter with an optional sharp.
///
/// Field order matters: the derived `Ord` sorts by letter first and puts the
/// natural before the sharp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Note {
    letter: char,
    alteration: Alteration,
}

impl Note {
    /// Parse a note from its name (e.g., "A", "c#", "Bb").
    ///
    /// The letter is case-insensitive. A flat is rewritten to the sharp of
    /// the previous letter, with `A` wrapping to `Z` so that `Ab == Z#`.
    pub fn new(raw: &str) -> Result<Self, MusicError> {
        let invalid = || MusicError::InvalidNote(raw.to_string());
        let mut chars = raw.trim().chars();

        let letter = chars
            .next()
            .filter(|c| c.is_ascii_alphabetic())
            .ok_or_else(invalid)?
            .to_ascii_uppercase();

        let note = match chars.next() {
            None => Note::with(letter, Alteration::Natural),
            Some('#') => Note::with(letter, Alteration::Sharp),
            Some('b') | Some('B') => Note::with(previous_letter(letter), Alteration::Sharp),
            Some(_) => return Err(invalid()),
        };

        if chars.next().is_some() {
            return Err(invalid());
        }

        Ok(note)
    }

    /// A natural note on the given letter (any ASCII letter, case-insensitive)
    pub fn natural(letter: char) -> Result<Self, MusicError> {
        Ok(Self::with(checked_letter(letter)?, Alteration::Natural))
    }

    /// A sharp note on the given letter (any ASCII letter, case-insensitive)
    pub fn sharp(letter: char) -> Result<Self, MusicError> {
        Ok(Self::with(checked_letter(letter)?, Alteration::Sharp))
    }

    /// Build from a letter that is already an uppercase ASCII letter
    fn with(letter: char, alteration: Alteration) -> Self {
        Self { letter, alteration }
    }

    /// Normalized letter
    pub fn letter(&self) -> char {
        self.letter
    }

    /// Normalized alteration
    pub fn alteration(&self) -> Alteration {
        self.alteration
    }

    pub fn is_sharp(&self) -> bool {
        self.alteration == Alteration::Sharp
    }

    /// Transpose by a half or whole step, staying on letter names.
    ///
    /// A whole step moves to the next letter and keeps the alteration
    /// (`A -> B`, `A# -> B#`). A half step sharpens a natural note
    /// (`A -> A#`) or clears the sharp and moves to the next letter
    /// (`A# -> B`). Only the letters `A` to `G` can be transposed.
    pub fn transpose(&self, interval: Interval) -> Result<Note, MusicError> {
        let index = LETTER_CYCLE
            .iter()
            .position(|&l| l == self.letter)
            .ok_or(MusicError::LetterOutOfCycle(self.letter))?;
        let next_letter = LETTER_CYCLE[(index + 1) % LETTER_CYCLE.len()];

        let note = match (interval, self.alteration) {
            (Interval::Whole, alteration) => Note::with(next_letter, alteration),
            (Interval::Half, Alteration::Sharp) => Note::with(next_letter, Alteration::Natural),
            (Interval::Half, Alteration::Natural) => Note::with(self.letter, Alteration::Sharp),
        };

        Ok(note)
    }
}

/// Uppercase an ASCII letter, rejecting anything else
fn checked_letter(letter: char) -> Result<char, MusicError> {
    if letter.is_ascii_alphabetic() {
        Ok(letter.to_ascii_uppercase())
    } else {
        Err(MusicError::InvalidNote(letter.to_string()))
    }
}

/// Previous letter in the alphabet, `A` wraps to `Z`
fn previous_letter(letter: char) -> char {
    match letter {
        'A' => 'Z',
        other => (other as u8 - 1) as char,
    }
}

impl FromStr for Note {
    type Err = MusicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Note::new(s)
    }
}

impl TryFrom<String> for Note {
    type Error = MusicError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Note::new(&value)
    }
}

impl From<Note> for String {
    fn from(note: Note) -> Self {
        note.to_string()
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.alteration {
            Alteration::Natural => write!(f, "{}", self.letter),
            Alteration::Sharp => write!(f, "{}#", self.letter),
        }
    }
}
