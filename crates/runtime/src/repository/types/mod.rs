//! On-disk record layouts shared by the file repositories.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use game_core::{Character, Mission};

use super::{RepositoryError, Result};

/// Metadata written at the top of every save file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveHeader {
    pub magic: String,
    pub version: u32,
    pub saved_at: DateTime<Utc>,
}

impl SaveHeader {
    pub const MAGIC: &'static str = "DONJON";
    pub const VERSION: u32 = 1;

    /// Header stamped with the current time.
    pub fn now() -> Self {
        Self {
            magic: Self::MAGIC.to_owned(),
            version: Self::VERSION,
            saved_at: Utc::now(),
        }
    }

    /// Reject files written by something else or by an unknown format version.
    pub fn validate(&self) -> Result<()> {
        if self.magic != Self::MAGIC {
            return Err(RepositoryError::CorruptedData(format!(
                "bad magic '{}'",
                self.magic
            )));
        }
        if self.version != Self::VERSION {
            return Err(RepositoryError::UnsupportedVersion {
                found: self.version,
                expected: Self::VERSION,
            });
        }
        Ok(())
    }
}

/// A character save file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedCharacter {
    pub header: SaveHeader,
    pub character: Character,
}

/// Names of the non-repeatable missions already won.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionProgress {
    pub completed: BTreeSet<String>,
}

impl MissionProgress {
    /// Copy of `missions` with `completed` set from this record.
    pub fn apply(&self, missions: &[Mission]) -> Vec<Mission> {
        missions
            .iter()
            .cloned()
            .map(|mut mission| {
                mission.completed |= self.completed.contains(&mission.name);
                mission
            })
            .collect()
    }
}

/// File name (without extension) used for a character's save.
///
/// Letters and digits (accented ones included) are lowercased, anything else
/// becomes `_`, so "Sir Aldric" and "sir aldric" share one file. Distinct
/// names can still collide ("Sir Aldric" and "Sir_Aldric"); repositories
/// check [`same_character_name`] before trusting a slot.
pub fn character_file_stem(name: &str) -> String {
    let mut stem = String::with_capacity(name.len());
    for c in name.trim().chars() {
        if c.is_alphanumeric() {
            stem.extend(c.to_lowercase());
        } else {
            stem.push('_');
        }
    }
    stem
}

/// Character names are compared trimmed and case-insensitively.
pub fn same_character_name(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}
