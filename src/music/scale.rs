// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Diatonic scales and chord classification.
//!
//! Scales are built on letter names: each degree transposes the previous one
//! by a whole or half step, so A major comes out as
//! `A B C C# D# E# F#` rather than with pitch-class spelling.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::note::Interval::{self, Half, Whole};
use super::{Chord, MusicError, Note};

/// Number of notes in a diatonic scale
pub const SCALE_LENGTH: usize = 7;

/// Scale modes supported by the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleMode {
    Major,
    Minor,
}

impl ScaleMode {
    /// Step pattern for a full octave
    pub fn steps(self) -> [Interval; SCALE_LENGTH] {
        match self {
            ScaleMode::Major => [Whole, Whole, Half, Whole, Whole, Whole, Half],
            ScaleMode::Minor => [Whole, Half, Whole, Whole, Half, Whole, Whole],
        }
    }

    /// Parse a scale mode from string ("maj", "major", "min", "minor")
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "maj" | "major" => Some(ScaleMode::Major),
            "min" | "minor" => Some(ScaleMode::Minor),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScaleMode::Major => "major",
            ScaleMode::Minor => "minor",
        }
    }

    /// The other mode on the same root
    pub fn parallel(self) -> Self {
        match self {
            ScaleMode::Major => ScaleMode::Minor,
            ScaleMode::Minor => ScaleMode::Major,
        }
    }
}

impl fmt::Display for ScaleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Result of classifying a chord against a root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChordQuality {
    Major,
    Minor,
    /// Equal overlap with both modes
    PowerChord,
}

impl ChordQuality {
    pub fn name(self) -> &'static str {
        match self {
            ChordQuality::Major => "major",
            ChordQuality::Minor => "minor",
            ChordQuality::PowerChord => "powerchord",
        }
    }
}

impl fmt::Display for ChordQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A seven-note scale with root and mode
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    root: Note,
    mode: ScaleMode,
    notes: Vec<Note>,
}

impl Scale {
    /// Build a scale from its root.
    ///
    /// Each note transposes the previous one by the next step of the mode.
    /// The last step would return to the root an octave up and is skipped.
    pub fn new(root: Note, mode: ScaleMode) -> Result<Self, MusicError> {
        let mut notes = Vec::with_capacity(SCALE_LENGTH);
        notes.push(root);

        let mut current = root;
        for &step in &mode.steps()[..SCALE_LENGTH - 1] {
            current = current.transpose(step)?;
            notes.push(current);
        }

        Ok(Self { root, mode, notes })
    }

    /// Parse a scale from strings (e.g., "A", "maj")
    pub fn parse(root_str: &str, mode_str: &str) -> Result<Self, MusicError> {
        let root = Note::new(root_str)?;
        let mode = ScaleMode::from_str(mode_str)
            .ok_or_else(|| MusicError::UnknownScaleMode(mode_str.to_string()))?;
        Scale::new(root, mode)
    }

    pub fn root(&self) -> Note {
        self.root
    }

    pub fn mode(&self) -> ScaleMode {
        self.mode
    }

    /// Notes in scale order, starting at the root
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn contains(&self, note: &Note) -> bool {
        self.notes.contains(note)
    }

    /// Get the scale degree (1-based) for a note, if it's in the scale
    pub fn degree_of(&self, note: &Note) -> Option<usize> {
        self.notes.iter().position(|n| n == note).map(|i| i + 1)
    }

    /// Same root, other mode
    pub fn parallel(&self) -> Result<Scale, MusicError> {
        Scale::new(self.root, self.mode.parallel())
    }

    /// Whether every note of the chord belongs to this scale
    pub fn contains_chord(&self, chord: &Chord) -> bool {
        chord.notes().iter().all(|n| self.contains(n))
    }

    /// Classify a chord by how many of its notes fall in the major and the
    /// minor scale on this root.
    ///
    /// More major notes gives `Major`, more minor notes gives `Minor` and a
    /// tie gives `PowerChord`. A chord only partly in the scale is still
    /// classified by those counts; only a chord with no note in either
    /// scale is rejected with `ChordNotInScale`.
    pub fn classify_chord(&self, chord: &Chord) -> Result<ChordQuality, MusicError> {
        let major = Scale::new(self.root, ScaleMode::Major)?;
        let minor = Scale::new(self.root, ScaleMode::Minor)?;

        let chord_notes: HashSet<&Note> = chord.notes().iter().collect();
        let major_count = chord_notes.iter().filter(|&&n| major.contains(n)).count();
        let minor_count = chord_notes.iter().filter(|&&n| minor.contains(n)).count();

        if major_count == 0 && minor_count == 0 {
            return Err(MusicError::ChordNotInScale {
                chord: chord.name().to_string(),
                scale: self.to_string(),
            });
        }

        Ok(match major_count.cmp(&minor_count) {
            std::cmp::Ordering::Greater => ChordQuality::Major,
            std::cmp::Ordering::Less => ChordQuality::Minor,
            std::cmp::Ordering::Equal => ChordQuality::PowerChord,
        })
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.root, self.mode)
    }
}
