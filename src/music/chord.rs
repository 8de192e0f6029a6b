// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chords and the chord registry.
//!
//! A chord is a named set of two or three distinct notes. The registry maps
//! each unordered note set to at most one chord, so lookups do not depend on
//! the order the notes are given in.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use super::{MusicError, Note};

/// Sorted note set identifying a chord regardless of note order
pub type ChordKey = Vec<Note>;

/// Build the canonical key for a set of notes
pub fn chord_key(notes: &[Note]) -> ChordKey {
    let mut key = notes.to_vec();
    key.sort();
    key
}

/// An immutable named chord of 2 or 3 notes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chord {
    name: String,
    notes: Vec<Note>,
}

impl Chord {
    /// Create a chord from two notes and an optional third.
    ///
    /// Fails with `DuplicateNoteNames` if two notes normalize to the same
    /// note, or if the name itself is a note name equal to one of the notes.
    pub fn new(
        first: Note,
        second: Note,
        name: impl Into<String>,
        third: Option<Note>,
    ) -> Result<Self, MusicError> {
        let mut notes = vec![first, second];
        notes.extend(third);
        Self::build(name.into(), notes)
    }

    /// Create a chord from a slice of notes (must hold 2 or 3)
    pub fn from_notes(name: impl Into<String>, notes: &[Note]) -> Result<Self, MusicError> {
        let name = name.into();
        if !(2..=3).contains(&notes.len()) {
            return Err(MusicError::InvalidChordSize {
                chord: name,
                count: notes.len(),
            });
        }
        Self::build(name, notes.to_vec())
    }

    fn build(name: String, notes: Vec<Note>) -> Result<Self, MusicError> {
        let duplicate_note = notes
            .iter()
            .enumerate()
            .any(|(i, note)| notes[i + 1..].contains(note));

        // Names like "Amaj" are not notes and cannot clash.
        let name_clash = Note::new(&name)
            .map(|as_note| notes.contains(&as_note))
            .unwrap_or(false);

        if duplicate_note || name_clash {
            return Err(MusicError::DuplicateNoteNames { chord: name });
        }

        Ok(Self { name, notes })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Notes in construction order
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn contains(&self, note: &Note) -> bool {
        self.notes.contains(note)
    }

    /// Canonical registry key for this chord
    pub fn key(&self) -> ChordKey {
        chord_key(&self.notes)
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Registry of chords keyed by their unordered note set.
///
/// Iteration follows registration order.
#[derive(Debug, Clone, Default)]
pub struct Chords {
    chords: Vec<Chord>,
    index: HashMap<ChordKey, usize>,
}

impl Chords {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a chord.
    ///
    /// Fails with `ChordOverlap` if a chord with the same note set is
    /// already registered; the registry is left unchanged in that case.
    pub fn add(&mut self, chord: Chord) -> Result<(), MusicError> {
        let key = chord.key();

        if let Some(&existing) = self.index.get(&key) {
            return Err(MusicError::ChordOverlap {
                chord: chord.name,
                existing: self.chords[existing].name.clone(),
            });
        }

        debug!(chord = %chord, notes = ?key, "registered chord");
        self.index.insert(key, self.chords.len());
        self.chords.push(chord);
        Ok(())
    }

    /// Look up the chord made of two or three notes, in any order
    pub fn get(&self, first: &Note, second: &Note, third: Option<&Note>) -> Option<&Chord> {
        let mut notes = vec![*first, *second];
        notes.extend(third.copied());
        self.find(&notes)
    }

    /// Look up the chord made of exactly these notes, in any order
    pub fn find(&self, notes: &[Note]) -> Option<&Chord> {
        self.index
            .get(&chord_key(notes))
            .map(|&index| &self.chords[index])
    }

    /// Registered chords in registration order
    pub fn iter(&self) -> std::slice::Iter<'_, Chord> {
        self.chords.iter()
    }

    pub fn len(&self) -> usize {
        self.chords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }
}

impl<'a> IntoIterator for &'a Chords {
    type Item = &'a Chord;
    type IntoIter = std::slice::Iter<'a, Chord>;

    fn into_iter(self) -> Self::IntoIter {
        self.chords.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(s: &str) -> Note {
        Note::new(s).unwrap()
    }

    fn chord(name: &str, notes: &[&str]) -> Chord {
        let notes: Vec<Note> = notes.iter().map(|s| note(s)).collect();
        Chord::from_notes(name, &notes).unwrap()
    }

    #[test]
    fn test_chord_keeps_construction_order() {
        let c = Chord::new(note("E"), note("C#"), "Amaj", Some(note("A"))).unwrap();
        assert_eq!(c.notes(), &[note("E"), note("C#"), note("A")]);
        assert_eq!(c.name(), "Amaj");
        assert_eq!(c.to_string(), "Amaj");
        assert_eq!(c.key(), vec![note("A"), note("C#"), note("E")]);
    }

    #[test]
    fn test_duplicate_notes_rejected() {
        let result = Chord::new(note("E"), note("E"), "X", None);
        assert!(matches!(result, Err(MusicError::DuplicateNoteNames { .. })));
    }

    #[test]
    fn test_enharmonic_duplicates_rejected() {
        let result = Chord::new(note("A#"), note("C"), "X", Some(note("Bb")));
        assert!(matches!(result, Err(MusicError::DuplicateNoteNames { .. })));
    }

    #[test]
    fn test_name_clashing_with_note_rejected() {
        let result = Chord::new(note("E"), note("A"), "E", None);
        assert!(matches!(result, Err(MusicError::DuplicateNoteNames { .. })));

        let result = Chord::new(note("A#"), note("D"), "Bb", None);
        assert!(matches!(result, Err(MusicError::DuplicateNoteNames { .. })));

        assert!(Chord::new(note("E"), note("A"), "F", None).is_ok());
    }

    #[test]
    fn test_from_notes_size() {
        let one = Chord::from_notes("X", &[note("A")]);
        assert!(matches!(
            one,
            Err(MusicError::InvalidChordSize { count: 1, .. })
        ));

        let four = Chord::from_notes("X", &[note("A"), note("B"), note("C"), note("D")]);
        assert!(matches!(
            four,
            Err(MusicError::InvalidChordSize { count: 4, .. })
        ));
    }

    #[test]
    fn test_registry_lookup_any_order() {
        let mut chords = Chords::new();
        chords.add(chord("Amaj", &["A", "B", "C"])).unwrap();
        chords.add(chord("c#5", &["c#", "d#"])).unwrap();

        let abc = chords.get(&note("A"), &note("B"), Some(&note("C"))).unwrap();
        assert_eq!(abc.name(), "Amaj");
        let bca = chords.get(&note("B"), &note("C"), Some(&note("A"))).unwrap();
        assert_eq!(bca.name(), "Amaj");

        assert!(chords.get(&note("D"), &note("Z"), None).is_none());
        assert_eq!(
            chords.get(&note("C#"), &note("d#"), None).map(Chord::name),
            Some("c#5")
        );
        assert_eq!(
            chords.get(&note("Eb"), &note("Db"), None).map(Chord::name),
            Some("c#5")
        );
    }

    #[test]
    fn test_registry_pair_is_not_subset_of_triple() {
        let mut chords = Chords::new();
        chords.add(chord("Emin", &["E", "G", "B"])).unwrap();
        assert!(chords.get(&note("E"), &note("B"), None).is_none());

        chords.add(chord("E5", &["E", "B"])).unwrap();
        assert_eq!(
            chords.get(&note("e"), &note("b"), None).map(Chord::name),
            Some("E5")
        );
    }

    #[test]
    fn test_overlap_rejected() {
        let mut chords = Chords::new();
        chords.add(chord("E5", &["E", "B"])).unwrap();

        let err = chords.add(chord("Emaj7add9", &["B", "E"])).unwrap_err();
        match err {
            MusicError::ChordOverlap { chord, existing } => {
                assert_eq!(chord, "Emaj7add9");
                assert_eq!(existing, "E5");
            }
            other => panic!("unexpected error: {other}"),
        }

        assert_eq!(chords.len(), 1);
        assert_eq!(
            chords.find(&[note("B"), note("E")]).map(Chord::name),
            Some("E5")
        );
    }

    #[test]
    fn test_iteration_follows_registration() {
        let mut chords = Chords::new();
        chords.add(chord("Amaj", &["A", "C#", "E"])).unwrap();
        chords.add(chord("Emin", &["E", "G", "B"])).unwrap();
        chords.add(chord("E5", &["E", "B"])).unwrap();

        let names: Vec<&str> = chords.iter().map(Chord::name).collect();
        assert_eq!(names, vec!["Amaj", "Emin", "E5"]);
        assert!(!chords.is_empty());
    }
}
