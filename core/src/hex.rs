//! Hexes in cube coordinates, their arithmetic and their geometry.

pub mod coords;
pub mod dir;
pub mod init;

pub use self::coords::CubeCoords;
pub use self::init::HexInit;

use crate::factory::Proto;
use crate::geo::{ self, Frac1, Orientation };

use nalgebra::geometry::{ Point2, Point3 };

use std::fmt;
use std::ops::{ Add, Sub };
use std::sync::Arc;

/// The fixed offset applied by [`Hex::nudge`]. The components sum to
/// zero, keeping nudged coordinates on the hex plane up to floating
/// point rounding.
const EPSILON: [f64; 3] = [1e-6, 1e-6, -2e-6];

/// A hexagon at a point in cube coordinate space, satisfying
/// `x + y + z = 0`.
///
/// Cube coordinates are points on a diagonal plane that "cuts through"
/// a cube grid (a cube made of many smaller cubes). The cubes intersecting
/// the plane project regular hexagons onto the plane, allowing to see the
/// plane as a hexagonal grid whereby the coordinates of each hexagon can
/// be identified with the coordinates of the cube it is projected from.
///
/// Every construction path restores the plane invariant: a missing
/// coordinate is inferred and the third coordinate is always re-derived
/// from the other two. Coordinates may be fractional (e.g. produced by
/// [`lerp`](Hex::lerp)); [`round`](Hex::round) snaps them back to the
/// nearest whole hex. A signed zero is never stored.
///
/// Hexes are produced by a [`HexFactory`] and share its prototype:
/// orientation, side length, pixel origin and default custom state.
/// All methods treat the hex as an immutable value; the one exception
/// is [`set`](Hex::set).
///
/// Guide: [Cube coordinates]
///
/// [Cube coordinates]: https://www.redblobgames.com/grids/hexagons/#coordinates-cube
/// [`HexFactory`]: crate::factory::HexFactory
#[derive(Clone, Debug)]
pub struct Hex<T = ()> {
    p: Point3<f64>,
    data: T,
    proto: Arc<Proto<T>>,
}

impl<T: Clone> Hex<T> {
    /// Materialize a hex on the given prototype. Only factories and
    /// hex methods construct hexes.
    pub(crate) fn create(init: HexInit<T>, proto: Arc<Proto<T>>) -> Hex<T> {
        let c = init::resolve(&init);
        let data = match init.data {
            Some(data) => data,
            None => proto.data.clone(),
        };
        Hex { p: Point3::new(c.x, c.y, c.z), data, proto }
    }

    /// A sibling hex on the same prototype, carrying the receiver's
    /// custom state.
    fn mk(&self, x: f64, y: f64, z: f64) -> Hex<T> {
        Hex {
            p: Point3::new(
                coords::unsign_zero(x),
                coords::unsign_zero(y),
                coords::unsign_zero(z)),
            data: self.data.clone(),
            proto: self.proto.clone(),
        }
    }

    pub fn x(&self) -> f64 { self.p.x }
    pub fn y(&self) -> f64 { self.p.y }
    pub fn z(&self) -> f64 { self.p.z }

    /// A snapshot of the coordinates, independent of the hex.
    pub fn coordinates(&self) -> CubeCoords {
        CubeCoords::new(self.p.x, self.p.y, self.p.z)
    }

    /// The custom state attached to this hex.
    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn orientation(&self) -> Orientation {
        self.proto.schema.orientation()
    }

    pub fn size(&self) -> f64 {
        self.proto.schema.size()
    }

    /// The pixel offset subtracted when converting to screen space.
    pub fn origin(&self) -> Point2<f64> {
        self.proto.origin
    }

    pub fn is_flat(&self) -> bool {
        self.orientation() == Orientation::FlatTop
    }

    pub fn is_pointy(&self) -> bool {
        self.orientation() == Orientation::PointyTop
    }

    /// Width of the bounding box of this hex.
    pub fn width(&self) -> f64 {
        self.proto.schema.width()
    }

    /// Height of the bounding box of this hex.
    pub fn height(&self) -> f64 {
        self.proto.schema.height()
    }

    /// The distance between two opposing corners of this hex.
    pub fn opposite_corner_distance(&self) -> f64 {
        self.proto.schema.corner_distance()
    }

    /// The distance between the midpoints of two opposing sides
    /// of this hex.
    pub fn opposite_side_distance(&self) -> f64 {
        self.proto.schema.side_distance()
    }

    /// The six corners of this hex, relative to its center.
    pub fn corners(&self) -> [Point2<f64>; 6] {
        self.proto.schema.corners(Point2::origin())
    }

    /// The pixel position of the center of this hex, relative to the
    /// origin of its prototype.
    pub fn to_point(&self) -> Point2<f64> {
        self.proto.schema.to_pixel(self.p.x, self.p.z) - self.origin().coords
    }

    /// Component-wise sum. The result shares this hex's prototype and
    /// carries this hex's custom state, not the argument's.
    pub fn add(&self, other: &Hex<T>) -> Hex<T> {
        self.mk(
            self.p.x + other.p.x,
            self.p.y + other.p.y,
            self.p.z + other.p.z)
    }

    /// Component-wise difference. The result shares this hex's prototype
    /// and carries this hex's custom state, not the argument's.
    pub fn subtract(&self, other: &Hex<T>) -> Hex<T> {
        self.mk(
            self.p.x - other.p.x,
            self.p.y - other.p.y,
            self.p.z - other.p.z)
    }

    /// Overwrite this hex in place and return it. The argument passes
    /// through the full coordinate inference, so partial input obeys
    /// the same rules as construction; custom state is replaced only
    /// when the input carries some.
    pub fn set<I: Into<HexInit<T>>>(&mut self, init: I) -> &mut Hex<T> {
        let init = init.into();
        let c = init::resolve(&init);
        self.p = Point3::new(c.x, c.y, c.z);
        if let Some(data) = init.data {
            self.data = data;
        }
        self
    }

    /// Round to the nearest whole hex. Each coordinate is rounded
    /// independently and the one with the largest rounding error is
    /// recomputed from the other two, so the result satisfies
    /// `x + y + z = 0` exactly.
    pub fn round(&self) -> Hex<T> {
        let c = coords::round(self.p.x, self.p.y, self.p.z);
        self.mk(c.x, c.y, c.z)
    }

    /// Linear interpolation towards `other`. The result is generally
    /// fractional; combine with [`round`](Hex::round) to obtain a whole
    /// hex and with [`nudge`](Hex::nudge) beforehand to break ties on
    /// grid boundaries.
    pub fn lerp(&self, other: &Hex<T>, t: Frac1) -> Hex<T> {
        self.mk(
            geo::lerp(self.p.x, other.p.x, t),
            geo::lerp(self.p.y, other.p.y, t),
            geo::lerp(self.p.z, other.p.z, t))
    }

    /// Offset by a small fixed epsilon, to deterministically break ties
    /// before rounding.
    pub fn nudge(&self) -> Hex<T> {
        self.mk(
            self.p.x + EPSILON[0],
            self.p.y + EPSILON[1],
            self.p.z + EPSILON[2])
    }

    /// The distance to another hex, i.e. half the sum of the absolute
    /// coordinate differences. For whole hexes this is the minimum
    /// number of steps between them.
    pub fn distance(&self, other: &Hex<T>) -> f64 {
        ( (self.p.x - other.p.x).abs() +
          (self.p.y - other.p.y).abs() +
          (self.p.z - other.p.z).abs() ) / 2.0
    }

    /// The neighbouring hex in the given direction.
    pub fn neighbour<D: dir::DirIndex>(&self, d: D) -> Hex<T> {
        let v = d.vector();
        self.mk(self.p.x + v.x, self.p.y + v.y, self.p.z + v.z)
    }

    /// Iterate over the neighbouring (adjacent) hexes.
    pub fn neighbours(&self) -> impl Iterator<Item=Hex<T>> + '_ {
        dir::CUBE_DIR_VECTORS.iter().map(move |[x, y, z]|
            self.mk(self.p.x + x, self.p.y + y, self.p.z + z))
    }

    /// Iterate over the neighbouring hexes along the diagonal axes.
    pub fn diagonal_neighbours(&self) -> impl Iterator<Item=Hex<T>> + '_ {
        dir::CUBE_DIA_VECTORS.iter().map(move |[x, y, z]|
            self.mk(self.p.x + x, self.p.y + y, self.p.z + z))
    }
}

/// Hexes compare equal on their coordinates alone; orientation, size
/// and custom state do not participate.
impl<T> PartialEq for Hex<T> {
    fn eq(&self, other: &Hex<T>) -> bool {
        self.p == other.p
    }
}

/// Renders `"x,y"`, a stable key for the position of a hex.
impl<T> fmt::Display for Hex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.p.x, self.p.y)
    }
}

impl<'a, 'b, T: Clone> Add<&'b Hex<T>> for &'a Hex<T> {
    type Output = Hex<T>;

    fn add(self, other: &'b Hex<T>) -> Hex<T> {
        Hex::add(self, other)
    }
}

impl<'a, 'b, T: Clone> Sub<&'b Hex<T>> for &'a Hex<T> {
    type Output = Hex<T>;

    fn sub(self, other: &'b Hex<T>) -> Hex<T> {
        Hex::subtract(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::{ HexFactory, HexSettings };
    use assert_approx_eq::assert_approx_eq;
    use num_traits::bounds::Bounded;
    use quickcheck::*;
    use rand::Rng;

    fn valid(h: &Hex<()>) -> bool {
        h.x() + h.y() + h.z() == 0.0
    }

    impl Arbitrary for Hex<()> {
        fn arbitrary<G: Gen>(g: &mut G) -> Hex<()> {
            let (x, y) = (g.gen::<i16>(), g.gen::<i16>());
            HexFactory::default().hex((x as f64, y as f64))
        }
    }

    #[test]
    fn prop_new_hex() {
        fn prop(h: Hex<()>) -> bool {
            valid(&h)
        }
        quickcheck(prop as fn(_) -> _);
    }

    #[test]
    fn prop_no_negative_zero() {
        fn prop(a: Hex<()>, b: Hex<()>) -> bool {
            let d = a.subtract(&b);
            [d.x(), d.y(), d.z()].iter().all(|c| *c != 0.0 || c.is_sign_positive())
        }
        quickcheck(prop as fn(_, _) -> _);
    }

    #[test]
    fn prop_add_subtract_roundtrip() {
        fn prop(a: Hex<()>, b: Hex<()>) -> bool {
            a.add(&b).subtract(&b).coordinates() == a.coordinates()
        }
        quickcheck(prop as fn(_, _) -> _);
    }

    #[test]
    fn prop_operators_match_methods() {
        fn prop(a: Hex<()>, b: Hex<()>) -> bool {
            &a + &b == a.add(&b) && &a - &b == a.subtract(&b)
        }
        quickcheck(prop as fn(_, _) -> _);
    }

    #[test]
    fn prop_distance_metric() {
        fn prop(a: Hex<()>, b: Hex<()>, c: Hex<()>) -> bool {
            a.distance(&a) == 0.0
                && a.distance(&b) == b.distance(&a)
                && a.distance(&c) <= a.distance(&b) + b.distance(&c)
        }
        quickcheck(prop as fn(_, _, _) -> _);
    }

    #[test]
    fn prop_distance_counts_steps() {
        fn prop(a: Hex<()>, b: Hex<()>) -> bool {
            let v = [b.x() - a.x(), b.y() - a.y(), b.z() - a.z()];
            let max = v.iter().fold(0.0f64, |m, c| m.max(c.abs()));
            a.distance(&b) == max
        }
        quickcheck(prop as fn(_, _) -> _);
    }

    #[test]
    fn prop_lerp_endpoints() {
        fn prop(a: Hex<()>, b: Hex<()>) -> bool {
            a.lerp(&b, Bounded::min_value()) == a &&
            a.lerp(&b, Bounded::max_value()) == b
        }
        quickcheck(prop as fn(_, _) -> _);
    }

    #[test]
    fn prop_lerp_round_valid() {
        fn prop(a: Hex<()>, b: Hex<()>, t: Frac1) -> bool {
            let r = a.nudge().lerp(&b.nudge(), t).round();
            valid(&r)
                && r.x().fract() == 0.0
                && r.y().fract() == 0.0
                && r.z().fract() == 0.0
        }
        quickcheck(prop as fn(_, _, _) -> _);
    }

    #[test]
    fn prop_round_idempotent() {
        fn prop(a: Hex<()>, b: Hex<()>, t: Frac1) -> bool {
            let r = a.lerp(&b, t).round();
            r.round() == r
        }
        quickcheck(prop as fn(_, _, _) -> _);
    }

    #[test]
    fn prop_nudge_stays_on_plane() {
        fn prop(h: Hex<()>) -> bool {
            let n = h.nudge();
            (n.x() + n.y() + n.z()).abs() < 1e-9
        }
        quickcheck(prop as fn(_) -> _);
    }

    #[test]
    fn prop_neighbours() {
        fn prop(h: Hex<()>) -> bool {
            let ns = h.neighbours().collect::<Vec<_>>();
            ns.iter().all(|n| valid(n) && h.distance(n) == 1.0)
                && ns.len() == 6
        }
        quickcheck(prop as fn(_) -> _);
    }

    #[test]
    fn prop_diagonal_neighbours() {
        fn prop(h: Hex<()>) -> bool {
            let ns = h.diagonal_neighbours().collect::<Vec<_>>();
            ns.iter().all(|n| valid(n) && h.distance(n) == 2.0)
                && ns.len() == 6
        }
        quickcheck(prop as fn(_) -> _);
    }

    #[test]
    fn prop_neighbour_by_direction() {
        fn prop(h: Hex<()>, f: dir::flat::Direction, p: dir::pointy::Direction) -> bool {
            h.distance(&h.neighbour(f)) == 1.0 && h.distance(&h.neighbour(p)) == 1.0
        }
        quickcheck(prop as fn(_, _, _) -> _);
    }

    #[test]
    fn test_neighbour_scenario() {
        let f = HexFactory::<()>::default();
        let n = f.hex(()).neighbour(dir::flat::Direction::North);
        assert_eq!(n.coordinates(), CubeCoords::new(0.0, 1.0, -1.0));
    }

    #[test]
    fn test_add_scenario() {
        let f = HexFactory::<()>::default();
        let sum = f.hex((4.0, -2.0)).add(&f.hex((3.0, -1.0)));
        assert_eq!(sum.coordinates(), CubeCoords::new(7.0, -3.0, -4.0));
    }

    #[test]
    fn test_round_scenario() {
        let f = HexFactory::<()>::default();
        let r = f.hex((1.6, 1.3, -2.9)).round();
        assert_eq!(r.coordinates(), CubeCoords::new(2.0, 1.0, -3.0));
    }

    #[test]
    fn test_set_runs_full_inference() {
        let f = HexFactory::<()>::default();
        let mut h = f.hex((1.0, 2.0));
        h.set(5.0);
        assert_eq!(h.coordinates(), CubeCoords::new(5.0, 5.0, -10.0));
        h.set(());
        assert_eq!(h.coordinates(), CubeCoords::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_set_keeps_data_unless_supplied() {
        let f = HexFactory::new(HexSettings { data: "meadow", ..HexSettings::default() });
        let mut h = f.hex((1.0, 2.0));
        h.set(3.0);
        assert_eq!(*h.data(), "meadow");
        h.set(HexInit { x: Some(0.0), data: Some("swamp"), ..HexInit::default() });
        assert_eq!(*h.data(), "swamp");
        assert_eq!(h.coordinates(), CubeCoords::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_equality_ignores_prototype_and_data() {
        let small = HexFactory::new(HexSettings::<()> { size: Some(1.0), ..HexSettings::default() });
        let large = HexFactory::new(HexSettings::<()> { size: Some(50.0), ..HexSettings::default() });
        assert_eq!(small.hex((1.0, 2.0)), large.hex((1.0, 2.0)));
        assert!(small.hex((1.0, 2.0)) != small.hex((2.0, 1.0)));
    }

    #[test]
    fn test_display_is_a_position_key() {
        let f = HexFactory::<()>::default();
        assert_eq!(f.hex((1.0, 2.0)).to_string(), "1,2");
        assert_eq!(f.hex((-1.5, 0.0)).to_string(), "-1.5,0");
    }

    #[test]
    fn test_to_point_subtracts_origin() {
        let f = HexFactory::new(HexSettings::<()> {
            size: Some(2.0),
            origin: Some(Point2::new(10.0, 20.0)),
            ..HexSettings::default()
        });
        let p = f.hex(()).to_point();
        assert_approx_eq!(p.x, -10.0);
        assert_approx_eq!(p.y, -20.0);

        let p = f.hex((1.0, 0.0)).to_point();
        assert_approx_eq!(p.x, f64::sqrt(3.0) * 2.0 * (1.0 + (-1.0) / 2.0) - 10.0);
        assert_approx_eq!(p.y, 1.5 * 2.0 * -1.0 - 20.0);
    }

    #[test]
    fn test_geometry_accessors_follow_orientation() {
        let pointy = HexFactory::new(HexSettings::<()> { size: Some(10.0), ..HexSettings::default() });
        let h = pointy.hex(());
        assert!(h.is_pointy() && !h.is_flat());
        assert_approx_eq!(h.width(), f64::sqrt(3.0) * 10.0);
        assert_approx_eq!(h.height(), 20.0);
        assert_approx_eq!(h.opposite_corner_distance(), 20.0);
        assert_approx_eq!(h.opposite_side_distance(), f64::sqrt(3.0) * 10.0);

        let flat = HexFactory::new(HexSettings::<()> {
            orientation: Some(Orientation::FlatTop),
            size: Some(10.0),
            ..HexSettings::default()
        });
        let h = flat.hex(());
        assert!(h.is_flat() && !h.is_pointy());
        assert_approx_eq!(h.width(), 20.0);
        assert_approx_eq!(h.height(), f64::sqrt(3.0) * 10.0);
    }

    #[test]
    fn test_corners_relative_to_center() {
        let f = HexFactory::new(HexSettings::<()> { size: Some(3.0), ..HexSettings::default() });
        let cs = f.hex((4.0, -1.0)).corners();
        assert_eq!(cs.len(), 6);
        for c in cs.iter() {
            assert_approx_eq!((c.x * c.x + c.y * c.y).sqrt(), 3.0);
        }
    }
}
