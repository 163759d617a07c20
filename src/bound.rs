//! This module describes the Bound trait, which describes the range each component of a color
//! representation may take. It is used in two opposite ways: colors handed to the library from the
//! outside are *checked* against the bounds and rejected if they fall outside, while colors the
//! library computes itself are *clamped* into them, because derivation may legitimately overshoot
//! (a saturation of 0.9 scaled by 2 is simply a fully saturated color).

use crate::error::HarmonyError;

/// How a single component behaves at the edges of its range.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Edge {
    /// The component saturates at both ends: `min` and `max` are both valid values.
    Clamped,
    /// The component wraps around, like an angle: `min` is valid and `max` is the same point as
    /// `min`, so it is excluded.
    Cyclic,
}

/// A color representation whose three components have explicit ranges.
/// # Example
/// Clamp a derived color that overshot.
///
/// ```
/// # use color_harmony::prelude::*;
/// let overshot = HsvColor::from_components_unchecked(1.25, 1.8, -0.1);
/// let fixed = HsvColor::clamp(overshot);
/// assert!((fixed.h - 0.25).abs() <= 1e-10);
/// assert_eq!((fixed.s, fixed.v), (1.0, 0.0));
/// ```
pub trait Bound: Sized {
    /// The names of the three components, used in error messages.
    const NAMES: [&'static str; 3];

    /// Returns `[(min1, max1, edge1), ...]` for the three components, in the order of
    /// [`Bound::components`].
    fn bounds() -> [(f64, f64, Edge); 3];

    /// The three components as an array.
    fn components(&self) -> [f64; 3];

    /// Builds the color from its three components without any checking.
    fn from_components_unchecked(a: f64, b: f64, c: f64) -> Self;

    /// Checks a single component against the bounds for position `i`.
    ///
    /// # Errors
    /// Returns `HarmonyError::InvalidRange` if the value is NaN or outside of the range.
    fn check_component(i: usize, value: f64) -> Result<f64, HarmonyError> {
        let (min, max, edge) = Self::bounds()[i];
        let in_range = match edge {
            Edge::Clamped => value >= min && value <= max,
            Edge::Cyclic => value >= min && value < max,
        };
        if in_range {
            Ok(value)
        } else {
            Err(HarmonyError::InvalidRange {
                component: Self::NAMES[i],
                value,
                min,
                max,
            })
        }
    }

    /// Builds the color from three raw components, rejecting anything outside of the bounds.
    ///
    /// # Errors
    /// Returns `HarmonyError::InvalidRange` naming the first offending component.
    fn from_components(a: f64, b: f64, c: f64) -> Result<Self, HarmonyError> {
        Ok(Self::from_components_unchecked(
            Self::check_component(0, a)?,
            Self::check_component(1, b)?,
            Self::check_component(2, c)?,
        ))
    }

    /// Returns `true` if every component is inside its bounds.
    fn in_bounds(&self) -> bool {
        let comps = self.components();
        (0..3).all(|i| Self::check_component(i, comps[i]).is_ok())
    }

    /// Returns a copy with every component brought into its bounds: clamped components are
    /// clamped, cyclic components are wrapped. NaN components become the lower bound.
    fn clamp(color: Self) -> Self {
        let comps = color.components();
        let mut vals = [0.; 3];
        for (i, &(min, max, edge)) in Self::bounds().iter().enumerate() {
            let component = comps[i];
            vals[i] = if component.is_nan() {
                min
            } else {
                match edge {
                    Edge::Clamped => clamp_between(component, min, max),
                    Edge::Cyclic => wrap_between(component, min, max),
                }
            };
        }
        Self::from_components_unchecked(vals[0], vals[1], vals[2])
    }
}

/// Clamps `x` into `[min, max]`.
pub(crate) fn clamp_between(x: f64, min: f64, max: f64) -> f64 {
    if x < min {
        min
    } else if x > max {
        max
    } else {
        x
    }
}

/// Clamps `x` into `[0, 1]`.
pub fn clamp01(x: f64) -> f64 {
    clamp_between(x, 0., 1.)
}

/// Wraps `x` into `[min, max)`. Floating point can land exactly on `max` for tiny negative
/// inputs, which is folded back to `min`.
pub(crate) fn wrap_between(x: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    let wrapped = (x - min).rem_euclid(span) + min;
    if wrapped >= max {
        min
    } else {
        wrapped
    }
}

/// Wraps `x` into `[0, 1)`, the range of a normalized hue.
pub fn normalize01(x: f64) -> f64 {
    wrap_between(x, 0., 1.)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{HsvColor, RgbColor};

    #[test]
    fn test_zero_one_bounds() {
        let color = RgbColor::from_components_unchecked(0.1, -0.2, 1.2);
        let clamped = RgbColor::clamp(color);
        assert_eq!((clamped.r, clamped.g, clamped.b), (0.1, 0., 1.));
        assert!(clamped.in_bounds());
        assert!(!color.in_bounds());
    }

    #[test]
    fn test_hue_bounds() {
        let color = HsvColor::from_components_unchecked(-0.25, 0.2, 0.5);
        let clamped = HsvColor::clamp(color);
        assert!((clamped.h - 0.75).abs() <= 1e-12);
        // hue 1.0 is the same point as 0.0 and therefore out of range for a raw value
        assert!(HsvColor::from_components(1.0, 0.5, 0.5).is_err());
        assert!(HsvColor::from_components(0.0, 1.0, 1.0).is_ok());
    }

    #[test]
    fn test_nan_is_rejected() {
        match HsvColor::from_components(0.5, std::f64::NAN, 0.5) {
            Err(HarmonyError::InvalidRange { component, .. }) => {
                assert_eq!(component, "saturation")
            }
            other => panic!("expected a range error, got {:?}", other),
        }
    }

    #[test]
    fn test_wrapping() {
        assert_eq!(normalize01(0.0), 0.0);
        assert!((normalize01(2.4) - 0.4).abs() <= 1e-12);
        assert!((normalize01(-0.1) - 0.9).abs() <= 1e-12);
        // -1e-18 rem_euclid 1 rounds to exactly 1.0
        assert_eq!(normalize01(-1e-18), 0.0);
        assert_eq!(clamp01(1.8), 1.0);
        assert_eq!(clamp01(-0.3), 0.0);
    }
}
