// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration system for concerts.
//!
//! A concert file declares a chord catalog, the key it is played in and a
//! performance (the notes fed to the mixer, in order). Files are YAML unless
//! the path ends in `.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::music::{Chord, Chords, Note, Scale};

/// Root configuration for a concert
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConcertFile {
    /// Notes played into the mixer, in order
    #[serde(default)]
    pub performance: Vec<Note>,
    /// Concert metadata and key
    #[serde(default)]
    pub concert: ConcertConfig,
    /// Chord catalog, registered in declaration order
    #[serde(default)]
    pub chords: Vec<ChordConfig>,
}

impl ConcertFile {
    /// Load a concert configuration, choosing the format by extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if is_toml(path) {
            Self::from_toml(&contents)
        } else {
            Self::from_yaml(&contents)
        }
    }

    /// Parse a concert configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
    }

    /// Parse a concert configuration from TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML configuration")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).context("Failed to serialize configuration to TOML")
    }

    /// Save configuration, choosing the format by extension
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let text = if is_toml(path) {
            self.to_toml()?
        } else {
            self.to_yaml()?
        };
        fs::write(path, text).with_context(|| format!("Failed to write config file: {:?}", path))
    }

    /// Register every declared chord
    pub fn build_chords(&self) -> Result<Chords> {
        let mut chords = Chords::new();
        for def in &self.chords {
            let chord = def.to_chord()?;
            chords
                .add(chord)
                .with_context(|| format!("Failed to register chord '{}'", def.name))?;
        }
        debug!(count = chords.len(), "chord catalog built");
        Ok(chords)
    }

    /// The scale named by the concert key and mode
    pub fn scale(&self) -> Result<Scale> {
        Scale::parse(&self.concert.key, &self.concert.scale).with_context(|| {
            format!(
                "Invalid concert key '{} {}'",
                self.concert.key, self.concert.scale
            )
        })
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "toml")
}

/// Concert-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConcertConfig {
    /// Concert name
    #[serde(default = "default_name")]
    pub name: String,
    /// Root of the concert key (e.g., "A", "F#", "Bb")
    #[serde(default = "default_key")]
    pub key: String,
    /// Scale mode ("maj"/"major" or "min"/"minor")
    #[serde(default = "default_scale")]
    pub scale: String,
}

fn default_name() -> String {
    "Untitled".to_string()
}
fn default_key() -> String {
    "C".to_string()
}
fn default_scale() -> String {
    "major".to_string()
}

impl Default for ConcertConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            key: default_key(),
            scale: default_scale(),
        }
    }
}

/// A chord declaration in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChordConfig {
    /// Chord name
    pub name: String,
    /// Two or three notes
    pub notes: Vec<Note>,
}

impl ChordConfig {
    /// Build the chord described by this declaration
    pub fn to_chord(&self) -> Result<Chord> {
        Chord::from_notes(self.name.clone(), &self.notes)
            .with_context(|| format!("Invalid chord '{}'", self.name))
    }
}

/// Validate a configuration without playing it.
///
/// Loads the file, builds the chord catalog and the concert scale.
pub fn validate_config<P: AsRef<Path>>(path: P) -> Result<ConcertFile> {
    let file = ConcertFile::load(path)?;
    file.build_chords()?;
    file.scale()?;
    Ok(file)
}
