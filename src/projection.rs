//! Fitting geographic coordinates onto a flat drawing surface.
//!
//! The map is small enough that a plain equirectangular mapping is good
//! enough: latitude and longitude are each scaled linearly onto the height
//! and width of the surface. The region shown is determined by the points
//! to be drawn, grown by [`BOUNDS_PADDING`] so no marker sits on the edge.

use kurbo::Point;
use crate::world::{Coordinate, GeoBounds};

/// The margin in degrees added around the points on every side.
pub const BOUNDS_PADDING: f64 = 0.01;


//------------ compute_bounds ------------------------------------------------

/// Computes the region of the map for the user and the facilities.
///
/// Returns `None` if there is neither a user position nor any facility.
/// Otherwise the result is the tightest box around all points padded by
/// [`BOUNDS_PADDING`], so both ranges are always strictly positive.
pub fn compute_bounds(
    user: Option<Coordinate>,
    facilities: impl IntoIterator<Item = Coordinate>,
) -> Option<GeoBounds> {
    GeoBounds::enclosing(user.into_iter().chain(facilities)).map(|bounds| {
        bounds.padded(BOUNDS_PADDING)
    })
}


//------------ Projection ----------------------------------------------------

/// Maps coordinates within some bounds onto a surface of a given size.
///
/// Increasing latitude moves up on the surface, i.e., toward smaller y.
/// No clamping happens: coordinates outside the bounds land outside the
/// surface.
#[derive(Clone, Copy, Debug)]
pub struct Projection {
    bounds: GeoBounds,
    width: f64,
    height: f64,
}

impl Projection {
    pub fn new(bounds: GeoBounds, width: f64, height: f64) -> Self {
        Projection { bounds, width, height }
    }

    /// Returns the horizontal position of a longitude.
    pub fn x(&self, lng: f64) -> f64 {
        (lng - self.bounds.min_lng) / span(self.bounds.range_lng())
            * self.width
    }

    /// Returns the vertical position of a latitude.
    pub fn y(&self, lat: f64) -> f64 {
        self.height
            - (lat - self.bounds.min_lat) / span(self.bounds.range_lat())
                * self.height
    }

    /// Returns the surface position of a coordinate.
    pub fn project(&self, coord: Coordinate) -> Point {
        Point::new(self.x(coord.longitude), self.y(coord.latitude))
    }
}

/// Keeps hand-made zero-width bounds from dividing by zero.
fn span(range: f64) -> f64 {
    if range > 0. { range } else { 2. * BOUNDS_PADDING }
}


//============ Testing =======================================================
