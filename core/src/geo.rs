//! Geometry of regular hexagons in a 2d cartesian coordinate system.

use nalgebra::geometry::Point2;
use num_traits::bounds::Bounded;

/// The angle (in degrees) of the equilateral triangles that
/// a regular hexagon is composed of, i.e. 60 degrees.
pub const ANGLE_DEGREES: f64 = 60.0;

/// The angle (in radians) of the equilateral triangles that
/// a hexagon is composed of, i.e. 60 degrees in radians.
pub const ANGLE_RADIANS: f64 = 1.0471975511965976;

/// The two ways a regular hexagon can be oriented on a grid:
/// with a flat edge on top, or with a vertex on top.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    FlatTop,
    PointyTop
}

impl Default for Orientation {
    fn default() -> Orientation {
        Orientation::PointyTop
    }
}

/// A schematic for a regular hexagon.
#[derive(Clone, Debug)]
pub struct Schema {
    pub(crate) size: f64, // side_length
    pub(crate) width: f64,
    pub(crate) height: f64,
    pub(crate) corner_offset: f64,
    pub(crate) orientation: Orientation,
}

impl Schema {
    pub fn new(size: f64, orientation: Orientation) -> Schema {
        match orientation {
            Orientation::FlatTop => Schema {
                size,
                width: 2.0 * size,
                height: f64::sqrt(3.0) * size,
                corner_offset: 0.0,
                orientation,
            },
            Orientation::PointyTop => Schema {
                size,
                width: f64::sqrt(3.0) * size,
                height: 2.0 * size,
                corner_offset: ANGLE_RADIANS / 2.0,
                orientation,
            }
        }
    }

    // side_length
    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The distance between two opposing corners.
    pub fn corner_distance(&self) -> f64 {
        2.0 * self.size
    }

    /// The distance between the midpoints of two opposing sides.
    pub fn side_distance(&self) -> f64 {
        f64::sqrt(3.0) * self.size
    }

    /// The six corners of a hexagon with the given center, placed at
    /// 60 degree spacing on the circumcircle of radius `size`. The
    /// starting angle depends on the orientation.
    pub fn corners(&self, center: Point2<f64>) -> [Point2<f64>; 6] {
        [ self.corner(center, 0)
        , self.corner(center, 1)
        , self.corner(center, 2)
        , self.corner(center, 3)
        , self.corner(center, 4)
        , self.corner(center, 5)
        ]
    }

    fn corner(&self, center: Point2<f64>, i: u8) -> Point2<f64> {
        let angle_rad = ANGLE_RADIANS * i as f64 - self.corner_offset;
        let x = center.x + self.size * angle_rad.cos();
        let y = center.y + self.size * angle_rad.sin();
        Point2::new(x, y)
    }

    /// The center of the hexagon with cube coordinates `x` and `z`,
    /// relative to the center of the hexagon at the coordinate origin.
    pub fn to_pixel(&self, x: f64, z: f64) -> Point2<f64> {
        match self.orientation {
            Orientation::PointyTop => Point2::new(
                f64::sqrt(3.0) * self.size * (x + z / 2.0),
                1.5 * self.size * z),
            Orientation::FlatTop => Point2::new(
                1.5 * self.size * x,
                f64::sqrt(3.0) * self.size * (z + x / 2.0)),
        }
    }
}

/// A fraction in the unit interval `[0,1]`.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Frac1(f64);

impl Frac1 {
    /// Create a new fraction in the unit interval [0,1].
    /// If the numerator is greater than the denominator or if
    /// the denominator is zero, a panic is triggered.
    pub fn new(numer: f64, denom: f64) -> Frac1 {
        if numer > denom {
            panic!("numer > denom");
        }
        if denom == 0. {
            panic!("denom == 0");
        }
        Frac1(numer / denom)
    }
}

impl Bounded for Frac1 {
    fn min_value() -> Frac1 {
        Frac1(0.)
    }
    fn max_value() -> Frac1 {
        Frac1(1.)
    }
}

impl From<Frac1> for f64 {
    fn from(Frac1(f): Frac1) -> f64 { f }
}

/// Linear interpolation between two coordinate values.
pub fn lerp(a: f64, b: f64, t: Frac1) -> f64 {
    a + (b - a) * f64::from(t)
}
