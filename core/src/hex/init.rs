//! Normalization of the heterogeneous inputs accepted by the bound
//! hex constructors.

use super::Hex;
use super::coords::{ self, CubeCoords };

/// The normalized form of every input a [`HexFactory`] accepts: zero to
/// three coordinates and optional custom state. Conversions exist from
/// the unit value, bare numbers, tuples, arrays and slices of numbers,
/// coordinate snapshots and existing hexes, so construction sites rarely
/// spell this type out.
///
/// Coordinates left unset are inferred: a single coordinate is copied
/// to the other axis, none at all yields the origin hex. An explicit
/// `z` is recorded for the checked construction path but is otherwise
/// never consulted.
///
/// [`HexFactory`]: crate::factory::HexFactory
#[derive(Clone, Debug)]
pub struct HexInit<T = ()> {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
    pub data: Option<T>,
}

impl<T> Default for HexInit<T> {
    fn default() -> HexInit<T> {
        HexInit { x: None, y: None, z: None, data: None }
    }
}

impl<T> From<()> for HexInit<T> {
    fn from(_: ()) -> HexInit<T> {
        HexInit::default()
    }
}

impl<T> From<f64> for HexInit<T> {
    fn from(x: f64) -> HexInit<T> {
        HexInit { x: Some(x), ..HexInit::default() }
    }
}

impl<T> From<(f64, f64)> for HexInit<T> {
    fn from((x, y): (f64, f64)) -> HexInit<T> {
        HexInit { x: Some(x), y: Some(y), ..HexInit::default() }
    }
}

impl<T> From<(f64, f64, f64)> for HexInit<T> {
    fn from((x, y, z): (f64, f64, f64)) -> HexInit<T> {
        HexInit { x: Some(x), y: Some(y), z: Some(z), data: None }
    }
}

impl<T> From<[f64; 2]> for HexInit<T> {
    fn from([x, y]: [f64; 2]) -> HexInit<T> {
        HexInit::from((x, y))
    }
}

impl<T> From<[f64; 3]> for HexInit<T> {
    fn from([x, y, z]: [f64; 3]) -> HexInit<T> {
        HexInit::from((x, y, z))
    }
}

/// An ordered sequence of coordinates. Only the first two entries are
/// consulted; anything beyond them is discarded.
impl<'a, T> From<&'a [f64]> for HexInit<T> {
    fn from(s: &'a [f64]) -> HexInit<T> {
        HexInit {
            x: s.get(0).copied(),
            y: s.get(1).copied(),
            ..HexInit::default()
        }
    }
}

impl<T> From<CubeCoords> for HexInit<T> {
    fn from(c: CubeCoords) -> HexInit<T> {
        HexInit::from((c.x, c.y, c.z))
    }
}

/// Cloning input: the new hex carries the same coordinates and a clone
/// of the custom state of the existing one.
impl<'a, T: Clone> From<&'a Hex<T>> for HexInit<T> {
    fn from(h: &'a Hex<T>) -> HexInit<T> {
        HexInit {
            x: Some(h.x()),
            y: Some(h.y()),
            z: Some(h.z()),
            data: Some(h.data().clone()),
        }
    }
}

/// Infer the full coordinate triple from whatever the input carried.
///
/// Signed zeros are stripped from the given coordinates, a missing
/// coordinate copies the present one (the origin if both are missing),
/// and the third coordinate is always re-derived from the other two,
/// never taken from the input.
pub(crate) fn resolve<T>(init: &HexInit<T>) -> CubeCoords {
    let (x, y) = match (init.x.map(coords::unsign_zero), init.y.map(coords::unsign_zero)) {
        (Some(x), Some(y)) => (x, y),
        (Some(x), None)    => (x, x),
        (None, Some(y))    => (y, y),
        (None, None)       => (0.0, 0.0),
    };
    CubeCoords::new(x, y, coords::third_coordinate(x, y))
}
