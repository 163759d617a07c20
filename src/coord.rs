//! This module contains a struct, [`Point`], that models a position on screen and supports the
//! limited 2D math the color wheel needs: vector arithmetic, scaling by scalars, lengths and
//! angles.
//!
//! Screen coordinates grow *downwards* on the y-axis. Angles follow the convention of most widget
//! toolkits on top of that: degrees, measured counter-clockwise *as seen on screen* from the
//! positive x-axis, in `[0, 360)`. A point straight above the origin is at 90 degrees.

use std::ops::{Add, Div, Mul, Sub};

use num::{Num, NumCast};

/// Represents a scalar value that can be easily converted, described using the common numeric
/// traits in [`num`]. Anything that falls under this category can be multiplied by a [`Point`] to
/// scale it, so integer pixel sizes work as well as floats.
pub trait Scalar: NumCast + Num {}

impl<T: NumCast + Num> Scalar for T {}

/// A point (or vector) in screen space.
///
/// # Example
/// ```
/// # use color_harmony::coord::Point;
/// let center = Point::new(50., 50.);
/// let pointer = Point::new(50., 20.);
/// let offset = pointer - center; // (0, -30): straight up on screen
/// assert_eq!(offset.length(), 30.);
/// assert_eq!(offset.screen_angle(), 90.);
/// assert_eq!(center * 2u8, Point::new(100., 100.));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct Point {
    /// Horizontal position, growing to the right.
    pub x: f64,
    /// Vertical position, growing downwards.
    pub y: f64,
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

// Scalars that can't be represented as an f64 are treated as 0; every primitive numeric type can.
impl<U: Scalar> Mul<U> for Point {
    type Output = Point;
    fn mul(self, rhs: U) -> Point {
        let r: f64 = num::cast(rhs).unwrap_or(0.);
        Point {
            x: self.x * r,
            y: self.y * r,
        }
    }
}

// Dividing by zero follows f64 semantics and produces infinities or NaN.
impl<U: Scalar> Div<U> for Point {
    type Output = Point;
    fn div(self, rhs: U) -> Point {
        let r: f64 = num::cast(rhs).unwrap_or(0.);
        Point {
            x: self.x / r,
            y: self.y / r,
        }
    }
}

impl Point {
    /// Creates a point.
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    /// Creates the point at the given distance and screen angle (in degrees) from the origin. The
    /// inverse of [`Point::length`] together with [`Point::screen_angle`].
    /// # Example
    /// ```
    /// # use color_harmony::coord::Point;
    /// let p = Point::from_polar(10., 180.);
    /// assert!((p.x + 10.).abs() <= 1e-10);
    /// assert!(p.y.abs() <= 1e-10);
    /// ```
    pub fn from_polar(length: f64, angle_degrees: f64) -> Point {
        let rad = angle_degrees.to_radians();
        // screen y points down, so a counter-clockwise angle means negative y
        Point {
            x: length * rad.cos(),
            y: -length * rad.sin(),
        }
    }

    /// The length of the vector from the origin to this point.
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// The Euclidean distance between two points.
    pub fn distance(&self, other: &Point) -> f64 {
        (*other - *self).length()
    }

    /// The screen angle of the vector from the origin to this point, in degrees in `[0, 360)`. The
    /// zero vector has angle 0.
    pub fn screen_angle(&self) -> f64 {
        if self.x == 0. && self.y == 0. {
            return 0.;
        }
        let degrees = (-self.y).atan2(self.x).to_degrees();
        crate::bound::wrap_between(degrees, 0., 360.)
    }

    /// The midpoint between two points.
    pub fn midpoint(&self, other: &Point) -> Point {
        (*self + *other) / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_angles() {
        assert_eq!(Point::new(1., 0.).screen_angle(), 0.);
        assert_eq!(Point::new(0., -1.).screen_angle(), 90.);
        assert_eq!(Point::new(-1., 0.).screen_angle(), 180.);
        assert_eq!(Point::new(0., 1.).screen_angle(), 270.);
        assert!((Point::new(1., 1.).screen_angle() - 315.).abs() <= 1e-10);
        assert_eq!(Point::default().screen_angle(), 0.);
    }

    #[test]
    fn test_polar_round_trip() {
        for &angle in &[0., 15., 90., 144., 270., 359.] {
            let p = Point::from_polar(7.5, angle);
            assert!((p.length() - 7.5).abs() <= 1e-10);
            assert!((p.screen_angle() - angle).abs() <= 1e-9);
        }
    }

    #[test]
    fn test_arithmetic() {
        let a = Point::new(1., 8.);
        let b = Point::new(7., 2.);
        assert_eq!(a + b, Point::new(8., 10.));
        assert_eq!(a - b, Point::new(-6., 6.));
        assert_eq!(a / 2., Point::new(0.5, 4.));
        assert_eq!(a.midpoint(&b), Point::new(4., 5.));
        assert!((Point::new(0., 0.).distance(&Point::new(3., 4.)) - 5.).abs() <= 1e-12);
    }
}
