// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Player configuration.
//!
//! Settings for playing scales and chords on a MIDI output, loaded from a
//! YAML file. Every field has a default, so an empty file is valid.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::midi::DEFAULT_VELOCITY;
use crate::music::{Scale, ScaleType, Tone};

/// Settings for the player
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerConfig {
    /// Partial name of the MIDI output to use
    #[serde(default)]
    pub device: Option<String>,
    /// MIDI channel (1-16)
    #[serde(default = "default_channel")]
    pub channel: u8,
    /// Default note velocity (0-127)
    #[serde(default = "default_velocity")]
    pub velocity: u8,
    /// How long each note sounds, in milliseconds
    #[serde(default = "default_note_ms")]
    pub note_ms: u64,
    /// Silence after each note, in milliseconds
    #[serde(default = "default_gap_ms")]
    pub gap_ms: u64,
    /// Root of the default scale (e.g., "C", "F#", "Bb")
    #[serde(default = "default_root")]
    pub root: Tone,
    /// Default scale type (e.g., "major", "dorian")
    #[serde(default = "default_scale")]
    pub scale: ScaleType,
}

fn default_channel() -> u8 {
    1
}
fn default_velocity() -> u8 {
    DEFAULT_VELOCITY
}
fn default_note_ms() -> u64 {
    500
}
fn default_gap_ms() -> u64 {
    50
}
fn default_root() -> Tone {
    Tone::C
}
fn default_scale() -> ScaleType {
    ScaleType::Major
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            device: None,
            channel: default_channel(),
            velocity: default_velocity(),
            note_ms: default_note_ms(),
            gap_ms: default_gap_ms(),
            root: default_root(),
            scale: default_scale(),
        }
    }
}

impl PlayerConfig {
    /// Load and validate a configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        Self::from_yaml(&contents)
    }

    /// Parse and validate a configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as a mapping
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")?
        };
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))
    }

    /// Check value ranges serde can't express
    pub fn validate(&self) -> Result<()> {
        if !(1..=16).contains(&self.channel) {
            bail!("MIDI channel must be 1-16, got {}", self.channel);
        }
        if self.velocity > 127 {
            bail!("Velocity must be 0-127, got {}", self.velocity);
        }
        Ok(())
    }

    /// Zero-based channel for the wire
    pub fn midi_channel(&self) -> u8 {
        self.channel.saturating_sub(1) & 0x0F
    }

    pub fn note_duration(&self) -> Duration {
        Duration::from_millis(self.note_ms)
    }

    pub fn gap(&self) -> Duration {
        Duration::from_millis(self.gap_ms)
    }

    /// The configured default scale
    pub fn scale(&self) -> Scale {
        Scale::of(self.root, self.scale)
    }
}
