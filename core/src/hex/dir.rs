//! Directions in the cube coordinate system.

pub use nalgebra::base::Vector3;

/// Vectors for the displacement to a neighbouring (adjacent) cube coordinate
/// along one of the sides of a hexagon.
pub const CUBE_DIR_VECTORS: [[f64; 3]; 6] =
    [ [0.,  1., -1.], [ 1., 0., -1.], [ 1., -1., 0.]
    , [0., -1.,  1.], [-1., 0.,  1.], [-1.,  1., 0.]
    ];

/// Vectors for the displacement to the nearest cube coordinate
/// along one of the diagonal axes of a hexagon.
pub const CUBE_DIA_VECTORS: [[f64; 3]; 6] =
    [ [-1.,  2., -1.], [ 1.,  1., -2.], [ 2., -1., -1.]
    , [ 1., -2.,  1.], [-1., -1.,  2.], [-2.,  1.,  1.]
    ];

/// Displacements indexed by a direction, used to step from a hex to
/// one of its neighbours.
pub trait DirIndex: Copy {
    fn vector(self) -> Vector3<f64>;
}

/// Directions for hexagons with flat-top orientation in
/// the cube coordinate system.
pub mod flat {
    use super::*;

    /// Directions for adjacent neighbours.
    #[derive(PartialEq, Eq, Copy, Clone, PartialOrd, Ord)]
    #[derive(FromPrimitive, Debug)]
    pub enum Direction {
        North     = 0,
        NorthEast = 1,
        SouthEast = 2,
        South     = 3,
        SouthWest = 4,
        NorthWest = 5
    }

    impl DirIndex for Direction {
        fn vector(self) -> Vector3<f64> {
            Vector3::from(CUBE_DIR_VECTORS[self as usize])
        }
    }

    /// Directions for diagonal neighbours.
    #[derive(PartialEq, Eq, Copy, Clone, PartialOrd, Ord)]
    #[derive(FromPrimitive, Debug)]
    pub enum Diagonal {
        NorthWest = 0,
        NorthEast = 1,
        East      = 2,
        SouthEast = 3,
        SouthWest = 4,
        West      = 5
    }

    impl DirIndex for Diagonal {
        fn vector(self) -> Vector3<f64> {
            Vector3::from(CUBE_DIA_VECTORS[self as usize])
        }
    }
}

/// Directions for hexagons with pointy-top orientation in
/// the cube coordinate system.
pub mod pointy {
    use super::*;

    /// Directions for adjacent neighbours.
    #[derive(PartialEq, Eq, Copy, Clone, PartialOrd, Ord)]
    #[derive(FromPrimitive, Debug)]
    pub enum Direction {
        NorthWest = 0,
        NorthEast = 1,
        East      = 2,
        SouthEast = 3,
        SouthWest = 4,
        West      = 5
    }

    impl DirIndex for Direction {
        fn vector(self) -> Vector3<f64> {
            Vector3::from(CUBE_DIR_VECTORS[self as usize])
        }
    }

    /// Directions for diagonal neighbours.
    #[derive(PartialEq, Eq, Copy, Clone, PartialOrd, Ord)]
    #[derive(FromPrimitive, Debug)]
    pub enum Diagonal {
        NorthWest = 0,
        North     = 1,
        NorthEast = 2,
        SouthEast = 3,
        South     = 4,
        SouthWest = 5
    }

    impl DirIndex for Diagonal {
        fn vector(self) -> Vector3<f64> {
            Vector3::from(CUBE_DIA_VECTORS[self as usize])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::cast::FromPrimitive;
    use quickcheck::*;
    use rand::Rng;

    impl Arbitrary for flat::Direction {
        fn arbitrary<G: Gen>(g: &mut G) -> flat::Direction {
            flat::Direction::from_u8(g.gen_range(0, 6)).unwrap()
        }
    }

    impl Arbitrary for pointy::Direction {
        fn arbitrary<G: Gen>(g: &mut G) -> pointy::Direction {
            pointy::Direction::from_u8(g.gen_range(0, 6)).unwrap()
        }
    }

    #[test]
    fn test_cube_vectors_valid() {
        for [x, y, z] in &CUBE_DIR_VECTORS {
            assert!(x + y + z == 0.0)
        }
        for [x, y, z] in &CUBE_DIA_VECTORS {
            assert!(x + y + z == 0.0)
        }
    }

    #[test]
    fn prop_direction_vectors_valid() {
        fn prop(f: flat::Direction, p: pointy::Direction) -> bool {
            let fv = f.vector();
            let pv = p.vector();
            fv.x + fv.y + fv.z == 0.0 && pv.x + pv.y + pv.z == 0.0
        }
        quickcheck(prop as fn(_, _) -> _);
    }
}
