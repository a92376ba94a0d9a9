//! Factories binding a shared hexagon prototype to a construction
//! surface.

use crate::geo::{ Orientation, Schema };
use crate::hex::{ Hex, HexInit };

use anyhow::anyhow;
use nalgebra::geometry::Point2;

use std::sync::Arc;

/// Default side length of produced hexes.
const DEFAULT_SIZE: f64 = 1.0;

/// The overrides accepted by [`HexFactory::new`]. A field left unset
/// falls back to the default; a set field wins unconditionally, with
/// no collision warning.
///
/// `data` is the custom state attached to every produced hex unless
/// the construction input carries its own.
#[derive(Clone, Debug)]
pub struct HexSettings<T = ()> {
    pub orientation: Option<Orientation>,
    pub origin: Option<Point2<f64>>,
    pub size: Option<f64>,
    pub data: T,
}

impl<T: Default> Default for HexSettings<T> {
    fn default() -> HexSettings<T> {
        HexSettings {
            orientation: None,
            origin: None,
            size: None,
            data: T::default(),
        }
    }
}

/// The prototype shared by every hex of one factory: the geometry
/// schema, the pixel origin and the default custom state. Immutable
/// once the factory is built.
#[derive(Debug)]
pub(crate) struct Proto<T> {
    pub(crate) schema: Schema,
    pub(crate) origin: Point2<f64>,
    pub(crate) data: T,
}

/// A bound hex constructor.
///
/// All hexes produced by one factory share one prototype; two factories
/// never share a prototype, even when built from identical settings.
/// The factory is cheap to clone and hexes may be produced from several
/// threads at once.
#[derive(Clone, Debug)]
pub struct HexFactory<T = ()> {
    proto: Arc<Proto<T>>,
}

impl<T: Clone> HexFactory<T> {
    /// Build a factory from the given settings, merged over the
    /// defaults: pointy-top orientation, origin at the coordinate
    /// origin, size 1.
    ///
    /// Orientation, origin and size values are taken as given; no
    /// validation is performed on them.
    pub fn new(settings: HexSettings<T>) -> HexFactory<T> {
        let orientation = settings.orientation.unwrap_or_default();
        let size = settings.size.unwrap_or(DEFAULT_SIZE);
        let origin = settings.origin.unwrap_or_else(Point2::origin);
        HexFactory {
            proto: Arc::new(Proto {
                schema: Schema::new(size, orientation),
                origin,
                data: settings.data,
            })
        }
    }

    /// Construct a hex from any accepted input form. Missing
    /// coordinates are inferred and the third coordinate is always
    /// re-derived from the other two; an explicitly supplied third
    /// coordinate is never consulted.
    pub fn hex<I: Into<HexInit<T>>>(&self, init: I) -> Hex<T> {
        Hex::create(init.into(), self.proto.clone())
    }

    /// Construct a hex like [`hex`](HexFactory::hex), but fail when all
    /// three coordinates are supplied explicitly and do not sum to
    /// zero, instead of silently recomputing the third. No hex is
    /// produced on failure.
    pub fn try_hex<I: Into<HexInit<T>>>(&self, init: I) -> anyhow::Result<Hex<T>> {
        let init = init.into();
        if let (Some(x), Some(y), Some(z)) = (init.x, init.y, init.z) {
            if x + y + z != 0.0 {
                return Err(anyhow!(
                    "inconsistent cube coordinates ({}, {}, {}); must satisfy x + y + z = 0",
                    x, y, z));
            }
        }
        Ok(Hex::create(init, self.proto.clone()))
    }

    pub fn orientation(&self) -> Orientation {
        self.proto.schema.orientation()
    }

    pub fn size(&self) -> f64 {
        self.proto.schema.size()
    }

    pub fn origin(&self) -> Point2<f64> {
        self.proto.origin
    }
}

impl<T: Clone + Default> Default for HexFactory<T> {
    fn default() -> HexFactory<T> {
        HexFactory::new(HexSettings::default())
    }
}
