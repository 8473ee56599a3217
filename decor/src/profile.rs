use std::{fs, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::DamageKind;

/// How many elements of each kind of damage a surface gets.
///
/// Profiles are stored as IDM files. Kinds left out of the file keep their
/// default counts.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Profile {
    pub light_scratch: i32,
    pub dark_scratch: i32,
    pub rust: i32,
    pub chip: i32,
    pub smudge: i32,
    pub tape: i32,
}

impl Default for Profile {
    fn default() -> Self {
        Profile {
            light_scratch: DamageKind::LightScratch.default_count(),
            dark_scratch: DamageKind::DarkScratch.default_count(),
            rust: DamageKind::Rust.default_count(),
            chip: DamageKind::Chip.default_count(),
            smudge: DamageKind::Smudge.default_count(),
            tape: DamageKind::Tape.default_count(),
        }
    }
}

impl FromStr for Profile {
    type Err = idm::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            Ok(Default::default())
        } else {
            idm::from_str(s)
        }
    }
}

impl Profile {
    /// Profile that produces no damage at all.
    pub fn none() -> Self {
        Profile {
            light_scratch: 0,
            dark_scratch: 0,
            rust: 0,
            chip: 0,
            smudge: 0,
            tape: 0,
        }
    }

    /// Load a profile from an IDM file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let profile: Profile = fs::read_to_string(path)?.parse()?;
        log::info!("loaded damage profile from {}", path.display());
        Ok(profile)
    }

    pub fn count(&self, kind: DamageKind) -> i32 {
        match kind {
            DamageKind::LightScratch => self.light_scratch,
            DamageKind::DarkScratch => self.dark_scratch,
            DamageKind::Rust => self.rust,
            DamageKind::Chip => self.chip,
            DamageKind::Smudge => self.smudge,
            DamageKind::Tape => self.tape,
        }
    }
}
