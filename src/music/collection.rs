// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Ordered note collection.

use tracing::trace;

use super::{MusicError, Note};

/// Header line of a collection description
pub(crate) const DESCRIBE_HEADER: &str = "Notes:";

/// Body line used when there is nothing to list
pub(crate) const DESCRIBE_EMPTY: &str = "  Empty.";

/// Render a bulleted listing in the shared description format
pub(crate) fn describe_lines<I>(lines: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut content = String::from(DESCRIBE_HEADER);
    let mut empty = true;

    for line in lines {
        content.push_str("\n  * ");
        content.push_str(&line);
        empty = false;
    }

    if empty {
        content.push('\n');
        content.push_str(DESCRIBE_EMPTY);
    }

    content
}

/// Notes in insertion order. Duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteCollection {
    notes: Vec<Note>,
}

impl NoteCollection {
    /// Create a new empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a note
    pub fn add(&mut self, note: Note) {
        trace!(%note, "note added to collection");
        self.notes.push(note);
    }

    /// Parse and append a note, rejecting anything that is not a note name
    pub fn add_str(&mut self, raw: &str) -> Result<Note, MusicError> {
        let note = Note::new(raw)?;
        self.add(note);
        Ok(note)
    }

    /// Remove and return the most recently added note matching `name`.
    ///
    /// `name` is normalized like any other note, so popping "Bb" removes an
    /// `A#`. Returns `None` when no note matches or `name` is not a note.
    pub fn pop(&mut self, name: &str) -> Option<Note> {
        let target = Note::new(name).ok()?;
        let index = self.notes.iter().rposition(|n| *n == target)?;
        Some(self.notes.remove(index))
    }

    /// Remove the first occurrence of `note`, returning whether one was found
    pub(crate) fn remove(&mut self, note: &Note) -> bool {
        match self.notes.iter().position(|n| n == note) {
            Some(index) => {
                self.notes.remove(index);
                true
            }
            None => false,
        }
    }

    /// Take every note in insertion order, leaving the collection empty
    pub fn extract(&mut self) -> Vec<Note> {
        std::mem::take(&mut self.notes)
    }

    /// Human-readable listing, sorted by letter then alteration.
    ///
    /// ```text
    /// Notes:
    ///   * A
    ///   * C#
    /// ```
    pub fn describe(&self) -> String {
        describe_lines(self.sorted().into_iter().map(|n| n.to_string()))
    }

    /// Notes sorted by letter then alteration
    pub(crate) fn sorted(&self) -> Vec<Note> {
        let mut sorted = self.notes.clone();
        sorted.sort();
        sorted
    }

    pub fn contains(&self, note: &Note) -> bool {
        self.notes.contains(note)
    }

    /// Notes in insertion order
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.notes.iter()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl<'a> IntoIterator for &'a NoteCollection {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(s: &str) -> Note {
        Note::new(s).unwrap()
    }

    #[test]
    fn test_extract_keeps_insertion_order() {
        let mut collection = NoteCollection::new();
        collection.add(note("A"));
        collection.add(note("C"));
        collection.add(note("Eb"));

        assert_eq!(collection.extract(), vec![note("A"), note("C"), note("D#")]);
        assert!(collection.extract().is_empty());
        assert!(collection.is_empty());
    }

    #[test]
    fn test_duplicates_allowed() {
        let mut collection = NoteCollection::new();
        collection.add(note("A"));
        collection.add(note("A"));
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn test_add_str_validates() {
        let mut collection = NoteCollection::new();
        assert_eq!(collection.add_str("bb").unwrap(), note("A#"));
        assert!(matches!(
            collection.add_str("not a note"),
            Err(MusicError::InvalidNote(_))
        ));
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_pop_by_normalized_name() {
        let mut collection = NoteCollection::new();
        let one = note("a");
        let three = note("Eb");
        collection.add(one);
        collection.add(note("C"));
        collection.add(three);

        assert_eq!(collection.pop("a"), Some(one));
        assert_eq!(collection.pop("Eb"), Some(three));
        assert_eq!(collection.pop("D#"), None);
        assert_eq!(collection.extract(), vec![note("C")]);
    }

    #[test]
    fn test_pop_takes_most_recent_first() {
        let mut collection = NoteCollection::new();
        collection.add(note("A"));
        collection.add(note("C"));
        collection.add(note("A"));

        assert_eq!(collection.pop("A"), Some(note("A")));
        assert_eq!(collection.notes(), &[note("A"), note("C")]);
    }

    #[test]
    fn test_pop_missing_or_invalid() {
        let mut collection = NoteCollection::new();
        collection.add(note("A"));
        assert_eq!(collection.pop("B"), None);
        assert_eq!(collection.pop("??"), None);
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_describe_sorted() {
        let mut collection = NoteCollection::new();
        collection.add(note("C"));
        collection.add(note("A#"));
        collection.add(note("A"));

        assert_eq!(collection.describe(), "Notes:\n  * A\n  * A#\n  * C");
    }

    #[test]
    fn test_describe_empty() {
        let mut collection = NoteCollection::new();
        assert_eq!(collection.describe(), "Notes:\n  Empty.");

        collection.add(note("A"));
        collection.extract();
        assert_eq!(collection.describe(), "Notes:\n  Empty.");
    }
}
