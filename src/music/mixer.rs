// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Incremental chord recognition.
//!
//! The mixer collects notes one at a time. Whenever the pending notes plus
//! the incoming note cover a registered chord, those notes are folded into
//! that chord instead of staying pending.

use std::fmt;

use tracing::{debug, trace};

use super::collection::describe_lines;
use super::{Chord, Chords, MusicError, Note, NoteCollection};

/// An item extracted from the mixer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MixerItem {
    /// A note that never became part of a chord
    Note(Note),
    /// A recognized chord
    Chord(Chord),
}

impl MixerItem {
    pub fn as_note(&self) -> Option<&Note> {
        match self {
            MixerItem::Note(note) => Some(note),
            MixerItem::Chord(_) => None,
        }
    }

    pub fn as_chord(&self) -> Option<&Chord> {
        match self {
            MixerItem::Note(_) => None,
            MixerItem::Chord(chord) => Some(chord),
        }
    }
}

impl fmt::Display for MixerItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MixerItem::Note(note) => write!(f, "{}", note),
            MixerItem::Chord(chord) => write!(f, "{}", chord),
        }
    }
}

/// Chord-aware note collection backed by a read-only chord registry
#[derive(Debug, Clone)]
pub struct Mixer<'a> {
    registry: &'a Chords,
    pending: NoteCollection,
    chords: Vec<Chord>,
}

impl<'a> Mixer<'a> {
    /// Create a new mixer that recognizes chords from `registry`
    pub fn new(registry: &'a Chords) -> Self {
        Self {
            registry,
            pending: NoteCollection::new(),
            chords: Vec::new(),
        }
    }

    /// Add a note, recognizing at most one chord.
    ///
    /// Registered chords are tried in registration order and the first one
    /// fully covered by the pending notes plus `note` wins. Its notes leave
    /// the pending list and `note` is consumed. Without a match the note
    /// becomes pending, unless an equal note already is.
    ///
    /// Returns the chord recognized by this call, if any.
    pub fn add(&mut self, note: Note) -> Option<&Chord> {
        let matched = self
            .registry
            .iter()
            .find(|chord| {
                chord
                    .notes()
                    .iter()
                    .all(|n| *n == note || self.pending.contains(n))
            })
            .cloned();

        match matched {
            Some(chord) => {
                for chord_note in chord.notes().iter().filter(|n| **n != note) {
                    self.pending.remove(chord_note);
                }
                debug!(chord = %chord, trigger = %note, "chord recognized");
                self.chords.push(chord);
                self.chords.last()
            }
            None => {
                if self.pending.contains(&note) {
                    trace!(%note, "note already pending");
                } else {
                    self.pending.add(note);
                }
                None
            }
        }
    }

    /// Parse and add a note, rejecting anything that is not a note name
    pub fn add_str(&mut self, raw: &str) -> Result<Option<&Chord>, MusicError> {
        let note = Note::new(raw)?;
        Ok(self.add(note))
    }

    /// Pending notes, then recognized chords; both lists are cleared
    pub fn extract(&mut self) -> Vec<MixerItem> {
        let mut items: Vec<MixerItem> = self
            .pending
            .extract()
            .into_iter()
            .map(MixerItem::Note)
            .collect();
        items.extend(self.chords.drain(..).map(MixerItem::Chord));
        items
    }

    /// Note listing followed by recognized chord names sorted alphabetically
    pub fn describe(&self) -> String {
        let mut chord_names: Vec<&str> = self.chords.iter().map(Chord::name).collect();
        chord_names.sort_unstable();

        let lines = self
            .pending
            .sorted()
            .into_iter()
            .map(|n| n.to_string())
            .chain(chord_names.into_iter().map(str::to_string));

        describe_lines(lines)
    }

    /// Notes waiting to complete a chord
    pub fn pending(&self) -> &NoteCollection {
        &self.pending
    }

    /// Chords recognized so far, in recognition order
    pub fn chords(&self) -> &[Chord] {
        &self.chords
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty() && self.chords.is_empty()
    }
}
