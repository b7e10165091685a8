// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Registry for custom scale rows loadable from YAML.
//!
//! The built-in tables stay the ground truth for drills; the registry is
//! the extension point for rows the tables do not ship (Gb major, modal
//! spellings for a workshop, and so on). Custom entries shadow built-ins
//! on lookup and can be checked against the mode's interval pattern
//! before use.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::note::NoteName;
use super::scale::{follows_pattern, scale_of, Mode};
use super::TheoryError;

/// A user-supplied scale row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleDefinition {
    /// Root of the scale
    pub root: NoteName,
    /// Mode the row belongs to
    pub mode: Mode,
    /// Degrees I-VII with the spellings the author wants graded
    pub degrees: [NoteName; 7],
}

/// Registry of custom scale rows, consulted before the built-in tables
#[derive(Debug, Clone, Default)]
pub struct TheoryRegistry {
    custom: HashMap<(NoteName, Mode), [NoteName; 7]>,
}

impl TheoryRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Load registry entries from a YAML file (a list of rows)
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read scale file: {:?}", path.as_ref()))?;
        Self::from_yaml(&contents)
    }

    /// Parse registry entries from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let defs: Vec<ScaleDefinition> =
            serde_yaml::from_str(yaml).context("Failed to parse scale definitions")?;
        let mut registry = Self::new();
        for def in defs {
            registry.register(def);
        }
        Ok(registry)
    }

    /// Register a custom row, replacing any previous row for (root, mode)
    pub fn register(&mut self, def: ScaleDefinition) {
        self.custom.insert((def.root, def.mode), def.degrees);
    }

    /// Number of custom rows held
    pub fn len(&self) -> usize {
        self.custom.len()
    }

    /// Check if the registry holds no custom rows
    pub fn is_empty(&self) -> bool {
        self.custom.is_empty()
    }

    /// Look up a scale row, checking custom entries before the built-ins
    pub fn scale_of(&self, root: NoteName, mode: Mode) -> Result<[NoteName; 7], TheoryError> {
        if let Some(degrees) = self.custom.get(&(root, mode)) {
            return Ok(*degrees);
        }
        scale_of(root, mode).copied()
    }

    /// Return the custom rows that break their mode's interval pattern
    ///
    /// Each offender is also logged. An empty result means every custom
    /// row walks cleanly from its root.
    pub fn validate(&self) -> Vec<ScaleDefinition> {
        let mut offenders = Vec::new();
        for (&(root, mode), degrees) in &self.custom {
            if degrees[0] != root || !follows_pattern(degrees, mode) {
                warn!("custom scale row {} {} breaks its interval pattern", root, mode);
                offenders.push(ScaleDefinition {
                    root,
                    mode,
                    degrees: *degrees,
                });
            }
        }
        offenders
    }
}
