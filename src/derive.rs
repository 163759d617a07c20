//! Derivation of harmony color sets: applying [`HarmonyRule`]s to a base color.
//!
//! Everything here is a pure function of its inputs. Hue offsets are applied in degrees and
//! wrapped back into a fraction of a turn; saturation and value are scaled and clamped, since
//! scaling can overshoot the range and an overshoot simply means "as much as possible".

use std::ops::Index;
use std::slice;

use crate::bound::{clamp01, normalize01};
use crate::color::{HsvColor, RgbColor};
use crate::harmony::{Harmony, HarmonyRule};

/// Applies a single rule to a base color.
///
/// The hue is moved by `rule.hue_offset` degrees and wrapped into `[0, 1)`; saturation and value
/// are multiplied by their scales and clamped into `[0, 1]`. The identity rule returns `base`.
/// # Example
/// ```
/// # use color_harmony::prelude::*;
/// let base = HsvColor::new(0.9, 0.9, 0.5).unwrap();
/// let derived = derive_color(base, &HarmonyRule::new(180., 2., 1.));
/// assert!((derived.h - 0.4).abs() <= 1e-9);
/// assert_eq!(derived.s, 1.);
/// ```
pub fn derive_color(base: HsvColor, rule: &HarmonyRule) -> HsvColor {
    // offset in turns, so that a zero offset leaves the hue bit-for-bit unchanged
    let turns = rule.hue_offset / 360.;
    HsvColor {
        h: normalize01(base.h + turns),
        s: clamp01(base.s * rule.saturation_scale),
        v: clamp01(base.v * rule.value_scale),
    }
}

/// Derives the full color set of a harmony: the base color followed by one color per rule, in rule
/// order. With no harmony selected the set holds only the base color.
pub fn derive_set(base: HsvColor, harmony: Option<&Harmony>) -> DerivedColorSet {
    let mut colors = Vec::with_capacity(harmony.map_or(0, Harmony::len) + 1);
    colors.push(base);
    if let Some(harmony) = harmony {
        colors.extend(harmony.rules().iter().map(|rule| derive_color(base, rule)));
        trace!("derived {} colors for {}", colors.len(), harmony.name());
    }
    DerivedColorSet { colors }
}

/// The colors derived from one base color and one harmony. Element 0 is always the unmodified base
/// color and the remaining elements follow the harmony's rules in order. The set can only be
/// produced by [`derive_set`] and is never modified afterwards: a new base color means a new set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedColorSet {
    colors: Vec<HsvColor>,
}

impl DerivedColorSet {
    /// The base color the set was derived from.
    pub fn base(&self) -> HsvColor {
        self.colors[0]
    }

    /// The number of colors, including the base color. Never zero.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The colors derived from the rules, without the base color.
    pub fn derived(&self) -> &[HsvColor] {
        &self.colors[1..]
    }

    /// All colors, base first.
    pub fn as_slice(&self) -> &[HsvColor] {
        &self.colors
    }

    /// Iterates over all colors, base first.
    pub fn iter(&self) -> slice::Iter<HsvColor> {
        self.colors.iter()
    }

    /// Converts every color to RGB, keeping the order.
    pub fn to_rgb(&self) -> Vec<RgbColor> {
        self.colors.iter().map(HsvColor::to_rgb).collect()
    }
}

impl Index<usize> for DerivedColorSet {
    type Output = HsvColor;

    fn index(&self, i: usize) -> &HsvColor {
        &self.colors[i]
    }
}

impl<'a> IntoIterator for &'a DerivedColorSet {
    type Item = &'a HsvColor;
    type IntoIter = slice::Iter<'a, HsvColor>;

    fn into_iter(self) -> slice::Iter<'a, HsvColor> {
        self.colors.iter()
    }
}
