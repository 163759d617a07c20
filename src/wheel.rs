//! The mapping between a circular color wheel on screen and HSV colors.
//!
//! The wheel shows hue as the angle around its center and saturation as the distance from it; value
//! is not part of the wheel at all and comes from a separate one-dimensional control. Hue 0 sits at
//! the top of the wheel.

use crate::bound::{normalize01, Bound};
use crate::color::HsvColor;
use crate::coord::Point;
use crate::error::HarmonyError;

/// Which pointer button produced an event. The secondary button resets the pick to white instead of
/// reading the position.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerButton {
    /// Left button, pen contact, touch: picks the color under the pointer.
    Primary,
    /// Right button: resets to white.
    Secondary,
}

/// Maps a pointer position to the color under it on a wheel centered on `center` with the given
/// `radius`. Saturation is the distance from the center relative to the radius, capped at 1 for
/// points outside of the wheel; hue is the screen angle of the pointer rotated so that the top of
/// the wheel is hue 0; value is passed through unchanged.
///
/// A wheel of radius 0 maps its center to saturation 0 and every other point to saturation 1.
/// # Example
/// ```
/// # use color_harmony::prelude::*;
/// let center = Point::new(100., 100.);
/// let picked = screen_to_hsv(Point::new(100., 0.), center, 80., 0.75);
/// assert_eq!((picked.h, picked.s, picked.v), (0., 1., 0.75));
/// ```
pub fn screen_to_hsv(pointer: Point, center: Point, radius: f64, current_value: f64) -> HsvColor {
    let offset = pointer - center;
    let distance = offset.length();
    let saturation = if distance == 0. {
        0.
    } else if radius > 0. {
        (distance / radius).min(1.)
    } else {
        1.
    };
    HsvColor {
        h: normalize01((offset.screen_angle() - 90.) / 360.),
        s: saturation,
        v: current_value,
    }
}

/// The geometry of a color wheel widget together with the value the wheel currently displays. The
/// view layer updates `center` and `radius` on resize and feeds pointer events to
/// [`ColorWheel::pick`].
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorWheel {
    /// Center of the wheel in widget coordinates.
    pub center: Point,
    /// Radius of the wheel in pixels.
    pub radius: f64,
    value: f64,
}

impl ColorWheel {
    /// Creates a wheel showing full value.
    pub fn new(center: Point, radius: f64) -> ColorWheel {
        ColorWheel {
            center,
            radius,
            value: 1.,
        }
    }

    /// Creates a wheel that fits a widget of the given size with a margin on every side, the way
    /// the wheel is laid out inside its square.
    pub fn fit(width: f64, height: f64, margin: f64) -> ColorWheel {
        let size = width.min(height) - margin * 2.;
        ColorWheel::new(Point::new(width / 2., height / 2.), (size / 2.).max(0.))
    }

    /// The value every pick is made at.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Sets the value every pick is made at, as driven by the value slider.
    ///
    /// # Errors
    /// Returns `HarmonyError::InvalidRange` if `value` is outside `[0, 1]`.
    pub fn set_value(&mut self, value: f64) -> Result<(), HarmonyError> {
        self.value = HsvColor::check_component(2, value)?;
        Ok(())
    }

    /// Maps a pointer event to a color. The secondary button yields white.
    pub fn pick(&self, pointer: Point, button: PointerButton) -> HsvColor {
        match button {
            PointerButton::Secondary => HsvColor::WHITE,
            PointerButton::Primary => screen_to_hsv(pointer, self.center, self.radius, self.value),
        }
    }

    /// Where a color sits on the wheel: the inverse of [`ColorWheel::pick`] for hue and saturation.
    /// Used to place the markers of the base and derived colors.
    pub fn position_of(&self, color: &HsvColor) -> Point {
        self.center + Point::from_polar(self.radius * color.s, 360. * color.h + 90.)
    }
}
