//! Random base colors. The ranges keep saturation and value away from zero so that a random pick
//! is never a near-gray or near-black whose harmony would be indistinguishable; they live in
//! [`RandomRanges`] so that they can be tuned through [`crate::config::PanelConfig`].

use rand::Rng;

use crate::bound::{clamp01, normalize01};
use crate::color::HsvColor;

/// Half-open `[low, high)` ranges each component of a random color is drawn from uniformly.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomRanges {
    /// Range of the hue, as a fraction of a turn.
    pub hue: (f64, f64),
    /// Range of the saturation.
    pub saturation: (f64, f64),
    /// Range of the value.
    pub value: (f64, f64),
}

impl Default for RandomRanges {
    fn default() -> RandomRanges {
        RandomRanges {
            hue: (0.2, 1.0),
            saturation: (0.2, 1.0),
            value: (0.4, 1.0),
        }
    }
}

impl RandomRanges {
    /// A copy with every bound clamped into `[0, 1]`. A range with a NaN bound is replaced by the
    /// default range for that component.
    pub fn clamped(&self) -> RandomRanges {
        let defaults = RandomRanges::default();
        RandomRanges {
            hue: clamp_range(self.hue, defaults.hue),
            saturation: clamp_range(self.saturation, defaults.saturation),
            value: clamp_range(self.value, defaults.value),
        }
    }
}

fn clamp_range((low, high): (f64, f64), fallback: (f64, f64)) -> (f64, f64) {
    if low.is_nan() || high.is_nan() {
        warn!("random range ({}, {}) has a NaN bound, using {:?}", low, high, fallback);
        fallback
    } else {
        (clamp01(low), clamp01(high))
    }
}

// An empty or inverted range yields its lower bound instead of panicking.
fn sample<R: Rng + ?Sized>(rng: &mut R, (low, high): (f64, f64)) -> f64 {
    if high > low {
        rng.gen_range(low..high)
    } else {
        low
    }
}

/// Draws a random color within `ranges` from `rng`. The ranges are [`RandomRanges::clamped`]
/// first, so a badly tuned configuration still yields a valid color.
pub fn randomize_with<R: Rng + ?Sized>(ranges: &RandomRanges, rng: &mut R) -> HsvColor {
    let ranges = ranges.clamped();
    let v = sample(rng, ranges.value);
    let h = sample(rng, ranges.hue);
    let s = sample(rng, ranges.saturation);
    HsvColor {
        h: normalize01(h),
        s,
        v,
    }
}

/// Draws a random color with the default ranges: hue in `[0.2, 1)`, saturation in `[0.2, 1)` and
/// value in `[0.4, 1)`.
pub fn randomize() -> HsvColor {
    randomize_with(&RandomRanges::default(), &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bound::Bound;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let c = randomize_with(&RandomRanges::default(), &mut rng);
            assert!(c.h >= 0.2 && c.h < 1.0, "{:?}", c);
            assert!(c.s >= 0.2 && c.s < 1.0, "{:?}", c);
            assert!(c.v >= 0.4 && c.v < 1.0, "{:?}", c);
        }
        assert!(randomize().in_bounds());
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let ranges = RandomRanges::default();
        let a = randomize_with(&ranges, &mut StdRng::seed_from_u64(3));
        let b = randomize_with(&ranges, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_degenerate_ranges() {
        let ranges = RandomRanges {
            hue: (0.5, 0.5),
            saturation: (0.9, 0.1),
            value: (1.0, 1.0),
        };
        let c = randomize_with(&ranges, &mut StdRng::seed_from_u64(1));
        assert_eq!((c.h, c.s, c.v), (0.5, 0.9, 1.0));
    }

    #[test]
    fn test_out_of_range_bounds() {
        let _ = env_logger::builder().is_test(true).try_init();
        let ranges = RandomRanges {
            hue: (std::f64::NAN, 1.0),
            saturation: (0.5, std::f64::INFINITY),
            value: (-1e308, 1e308),
        };
        assert_eq!(
            ranges.clamped(),
            RandomRanges {
                hue: (0.2, 1.0),
                saturation: (0.5, 1.0),
                value: (0.0, 1.0),
            }
        );
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let c = randomize_with(&ranges, &mut rng);
            assert!(c.in_bounds(), "{:?}", c);
            assert!(c.h >= 0.2 && c.s >= 0.5, "{:?}", c);
        }
    }
}
