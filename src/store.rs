//! An ordered store of captured color sets. The panel lets the artist keep any number of
//! `(harmony, colors)` pairs around, reload one of them onto the wheel, and export all of them at
//! once; this module is the data side of that list.

use crate::color::HsvColor;
use crate::derive::DerivedColorSet;
use crate::harmony::Harmony;

/// One captured color set together with the harmony that produced it. The entry keeps its own
/// copy of the harmony, so ad-hoc harmonies can be stored as well as catalog ones.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreEntry {
    harmony: Harmony,
    colors: DerivedColorSet,
}

impl StoreEntry {
    /// Captures a color set.
    pub fn new(harmony: Harmony, colors: DerivedColorSet) -> StoreEntry {
        StoreEntry { harmony, colors }
    }

    /// The harmony the colors were derived with.
    pub fn harmony(&self) -> &Harmony {
        &self.harmony
    }

    /// The captured colors, base first.
    pub fn colors(&self) -> &DerivedColorSet {
        &self.colors
    }
}

/// The list of captured color sets, in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct HarmonyStore {
    entries: Vec<StoreEntry>,
}

impl HarmonyStore {
    /// Creates an empty store.
    pub fn new() -> HarmonyStore {
        HarmonyStore::default()
    }

    /// Appends a color set and returns its index.
    pub fn add(&mut self, harmony: &Harmony, colors: DerivedColorSet) -> usize {
        self.entries.push(StoreEntry::new(harmony.clone(), colors));
        debug!(
            "stored {} set #{} ({} colors)",
            harmony.name(),
            self.entries.len() - 1,
            self.entries[self.entries.len() - 1].colors.len()
        );
        self.entries.len() - 1
    }

    /// Removes and returns the entry at `index`, shifting later entries down.
    pub fn remove(&mut self, index: usize) -> Option<StoreEntry> {
        if index < self.entries.len() {
            debug!("removed stored set #{}", index);
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    /// Removes every entry whose index is listed, as for a multi-selection. Indices refer to the
    /// store before the removal; duplicates and out-of-range indices are ignored. Returns how many
    /// entries were removed.
    pub fn remove_many(&mut self, indices: &[usize]) -> usize {
        let before = self.entries.len();
        let mut index = 0;
        self.entries.retain(|_| {
            let keep = !indices.contains(&index);
            index += 1;
            keep
        });
        let removed = before - self.entries.len();
        debug!("removed {} stored sets", removed);
        removed
    }

    /// The harmony and base color to load back onto the wheel for the entry at `index`.
    pub fn restore(&self, index: usize) -> Option<(&Harmony, HsvColor)> {
        self.entries
            .get(index)
            .map(|entry| (&entry.harmony, entry.colors.base()))
    }

    /// The entry at `index`.
    pub fn get(&self, index: usize) -> Option<&StoreEntry> {
        self.entries.get(index)
    }

    /// All entries, in order.
    pub fn entries(&self) -> &[StoreEntry] {
        &self.entries
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes everything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::derive_set;
    use crate::harmony::{find_harmony, HarmonyRule};

    fn filled() -> HarmonyStore {
        let mut store = HarmonyStore::new();
        for (i, name) in ["triad", "shades", "squares", "analogous"].iter().enumerate() {
            let harmony = find_harmony(name).unwrap();
            let base = HsvColor::new(i as f64 / 10., 0.5, 0.5).unwrap();
            store.add(harmony, derive_set(base, Some(harmony)));
        }
        store
    }

    #[test]
    fn test_add_keeps_order() {
        let store = filled();
        let names: Vec<&str> = store.entries().iter().map(|e| e.harmony().name()).collect();
        assert_eq!(names, vec!["triad", "shades", "squares", "analogous"]);
        assert_eq!(store.get(2).unwrap().colors().len(), 4);
    }

    #[test]
    fn test_remove() {
        let mut store = filled();
        let removed = store.remove(1).unwrap();
        assert_eq!(removed.harmony().name(), "shades");
        assert_eq!(store.len(), 3);
        assert!(store.remove(3).is_none());
    }

    #[test]
    fn test_remove_many() {
        let mut store = filled();
        assert_eq!(store.remove_many(&[3, 0, 0, 17]), 2);
        let names: Vec<&str> = store.entries().iter().map(|e| e.harmony().name()).collect();
        assert_eq!(names, vec!["shades", "squares"]);
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_restore() {
        let store = filled();
        let (harmony, base) = store.restore(3).unwrap();
        assert_eq!(harmony.name(), "analogous");
        assert_eq!(base, HsvColor::new(0.3, 0.5, 0.5).unwrap());
        assert!(store.restore(4).is_none());
    }

    #[test]
    fn test_ad_hoc_harmony() {
        let mut store = HarmonyStore::new();
        let index = {
            let tetrad = Harmony::new("tetrad", vec![HarmonyRule::hue(60.)], "A custom rule set.");
            let base = HsvColor::new(0.5, 1., 1.).unwrap();
            store.add(&tetrad, derive_set(base, Some(&tetrad)))
        };
        let (harmony, base) = store.restore(index).unwrap();
        assert_eq!(harmony.name(), "tetrad");
        assert_eq!(harmony.rules(), &[HarmonyRule::hue(60.)]);
        assert_eq!(base.h, 0.5);
        assert_eq!(store.get(index).unwrap().colors().len(), 2);
    }
}
