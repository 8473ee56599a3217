use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::{
    catalog::{self, Entry},
    DamageElement,
};

/// Category of surface damage.
#[derive(
    Copy,
    Clone,
    Eq,
    PartialEq,
    Hash,
    Debug,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum DamageKind {
    LightScratch,
    DarkScratch,
    Rust,
    Chip,
    Smudge,
    Tape,
}

use DamageKind::*;

impl DamageKind {
    /// How many elements a generator produces when no count is given.
    pub fn default_count(self) -> i32 {
        match self {
            LightScratch => 7,
            DarkScratch => 4,
            Rust => 6,
            Chip => 5,
            Smudge => 4,
            Tape => 4,
        }
    }

    /// Number of entries in the catalog of this kind. Generators never
    /// return more elements than this.
    pub fn pool_size(self) -> usize {
        match self {
            LightScratch => catalog::LIGHT_SCRATCHES.len(),
            DarkScratch => catalog::DARK_SCRATCHES.len(),
            Rust => catalog::RUST_SPOTS.len(),
            Chip => catalog::PAINT_CHIPS.len(),
            Smudge => catalog::SMUDGES.len(),
            Tape => catalog::TAPE_PATCHES.len(),
        }
    }

    /// Whether elements of this kind are drawn at an angle.
    pub fn is_rotated(self) -> bool {
        matches!(self, LightScratch | DarkScratch | Tape)
    }

    /// Whether elements of this kind are round, with equal width and height.
    pub fn is_round(self) -> bool {
        matches!(self, Rust | Smudge)
    }

    /// Take the first `count` catalog entries of this kind.
    ///
    /// A missing count uses the default count. Counts past the end of the
    /// catalog yield the whole catalog, zero or negative counts yield
    /// nothing.
    ///
    /// ```
    /// use decor::DamageKind;
    ///
    /// assert_eq!(DamageKind::Rust.generate(None).len(), 6);
    /// assert_eq!(DamageKind::Rust.generate(2).len(), 2);
    /// assert_eq!(DamageKind::Rust.generate(-1).len(), 0);
    /// assert_eq!(
    ///     DamageKind::Rust.generate(1000).len(),
    ///     DamageKind::Rust.pool_size()
    /// );
    /// ```
    pub fn generate(
        self,
        count: impl Into<Option<i32>>,
    ) -> Vec<DamageElement> {
        let count = count.into().unwrap_or(self.default_count());
        let n = usize::try_from(count).unwrap_or(0);

        match self {
            LightScratch => take(catalog::LIGHT_SCRATCHES, n, self),
            DarkScratch => take(catalog::DARK_SCRATCHES, n, self),
            Rust => take(catalog::RUST_SPOTS, n, self),
            Chip => take(catalog::PAINT_CHIPS, n, self),
            Smudge => take(catalog::SMUDGES, n, self),
            Tape => take(catalog::TAPE_PATCHES, n, self),
        }
    }
}

fn take<T: Entry>(
    pool: &[T],
    n: usize,
    kind: DamageKind,
) -> Vec<DamageElement> {
    pool.iter().take(n).map(|e| e.element(kind)).collect()
}
