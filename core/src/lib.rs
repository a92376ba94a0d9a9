//! A factory kit for hexagons in cube coordinates, e.g. for use as the
//! coordinate core of hexagonal maps.
//!
//! A [`HexFactory`](factory::HexFactory) binds orientation, side
//! length, pixel origin and optional custom state into a prototype
//! shared by every [`Hex`](hex::Hex) it produces. Hexes carry the
//! coordinate arithmetic (addition, rounding, interpolation, distance)
//! and derive their planar geometry (corners, dimensions, pixel
//! position) from the prototype.

extern crate nalgebra;
extern crate num_traits;
#[macro_use]
extern crate num_derive;
#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
extern crate rand;

pub mod factory;
pub mod geo;
pub mod hex;
