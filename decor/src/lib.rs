//! Canned surface damage for worn equipment and case files.
//!
//! Every damage category has a fixed, ordered catalog of hand-placed
//! blemishes. Generators take a prefix of the catalog, so the same request
//! always produces the same overlay.

mod catalog;

mod element;
pub use element::{DamageElement, Horizontal, Position, Size, Vertical};

mod kind;
pub use kind::DamageKind;

mod profile;
pub use profile::Profile;

use serde::{Deserialize, Serialize};

/// Thin, faint scratches.
pub fn light_scratches(count: impl Into<Option<i32>>) -> Vec<DamageElement> {
    DamageKind::LightScratch.generate(count)
}

/// Deep, darker gouges.
pub fn dark_scratches(count: impl Into<Option<i32>>) -> Vec<DamageElement> {
    DamageKind::DarkScratch.generate(count)
}

pub fn rust_spots(count: impl Into<Option<i32>>) -> Vec<DamageElement> {
    DamageKind::Rust.generate(count)
}

/// Flaked off paint, each chip cut into a triangle.
pub fn paint_chips(count: impl Into<Option<i32>>) -> Vec<DamageElement> {
    DamageKind::Chip.generate(count)
}

pub fn fingerprints(count: impl Into<Option<i32>>) -> Vec<DamageElement> {
    DamageKind::Smudge.generate(count)
}

/// Strips of tape, some with scribbled labels.
pub fn tape_patches(count: impl Into<Option<i32>>) -> Vec<DamageElement> {
    DamageKind::Tape.generate(count)
}

/// Full set of damage overlays for one case surface.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CaseDamage {
    pub light_scratches: Vec<DamageElement>,
    pub dark_scratches: Vec<DamageElement>,
    pub rust_spots: Vec<DamageElement>,
    pub paint_chips: Vec<DamageElement>,
    pub fingerprints: Vec<DamageElement>,
    pub tape_patches: Vec<DamageElement>,
}

impl CaseDamage {
    /// Generate a damage set using the per-category counts of a profile.
    pub fn from_profile(profile: &Profile) -> Self {
        let take = |kind: DamageKind| kind.generate(profile.count(kind));
        CaseDamage {
            light_scratches: take(DamageKind::LightScratch),
            dark_scratches: take(DamageKind::DarkScratch),
            rust_spots: take(DamageKind::Rust),
            paint_chips: take(DamageKind::Chip),
            fingerprints: take(DamageKind::Smudge),
            tape_patches: take(DamageKind::Tape),
        }
    }

    /// Iterate all elements in layering order, bottom layer first.
    pub fn iter(&self) -> impl Iterator<Item = &DamageElement> + '_ {
        self.light_scratches
            .iter()
            .chain(&self.dark_scratches)
            .chain(&self.rust_spots)
            .chain(&self.paint_chips)
            .chain(&self.fingerprints)
            .chain(&self.tape_patches)
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// Damage set with every category at its default count.
pub fn generate_case_damage() -> CaseDamage {
    CaseDamage::from_profile(&Profile::default())
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn case_damage_default_counts() {
        let damage = generate_case_damage();
        assert_eq!(damage.light_scratches.len(), 7);
        assert_eq!(damage.dark_scratches.len(), 4);
        assert_eq!(damage.rust_spots.len(), 6);
        assert_eq!(damage.paint_chips.len(), 5);
        assert_eq!(damage.fingerprints.len(), 4);
        assert_eq!(damage.tape_patches.len(), 4);
        assert_eq!(damage.len(), 30);
    }

    #[test]
    fn case_damage_is_deterministic() {
        assert_eq!(generate_case_damage(), generate_case_damage());
    }

    #[test]
    fn case_damage_lists_match_generators() {
        let damage = generate_case_damage();
        assert_eq!(damage.light_scratches, light_scratches(None));
        assert_eq!(damage.dark_scratches, dark_scratches(None));
        assert_eq!(damage.rust_spots, rust_spots(None));
        assert_eq!(damage.paint_chips, paint_chips(None));
        assert_eq!(damage.fingerprints, fingerprints(None));
        assert_eq!(damage.tape_patches, tape_patches(None));
    }

    #[test]
    fn layering_order() {
        let damage = generate_case_damage();
        let kinds: Vec<DamageKind> = damage.iter().map(|e| e.kind).collect();
        let mut sorted = kinds.clone();
        sorted.sort_by_key(|&k| k as usize);
        assert_eq!(kinds, sorted);
        assert!(DamageKind::iter().all(|k| kinds.contains(&k)));
    }

    #[test]
    fn profile_counts() {
        let profile = Profile {
            light_scratch: 1,
            dark_scratch: 0,
            rust: 100,
            chip: -3,
            ..Default::default()
        };
        let damage = CaseDamage::from_profile(&profile);
        assert_eq!(damage.light_scratches.len(), 1);
        assert!(damage.dark_scratches.is_empty());
        assert_eq!(
            damage.rust_spots.len(),
            DamageKind::Rust.pool_size()
        );
        assert!(damage.paint_chips.is_empty());
        assert_eq!(damage.fingerprints.len(), 4);
        assert_eq!(damage.tape_patches.len(), 4);

        let empty = CaseDamage::from_profile(&Profile::none());
        assert!(empty.is_empty());
    }

    #[test]
    fn per_category_kinds() {
        assert!(light_scratches(None)
            .iter()
            .all(|e| e.kind == DamageKind::LightScratch));
        assert!(dark_scratches(None)
            .iter()
            .all(|e| e.kind == DamageKind::DarkScratch));
        assert!(rust_spots(None).iter().all(|e| e.kind == DamageKind::Rust));
        assert!(paint_chips(None).iter().all(|e| e.kind == DamageKind::Chip));
        assert!(fingerprints(None)
            .iter()
            .all(|e| e.kind == DamageKind::Smudge));
        assert!(tape_patches(None).iter().all(|e| e.kind == DamageKind::Tape));
    }
}
