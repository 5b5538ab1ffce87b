//! Types for referencing the real world.

use crate::error::Error;


//------------ Coordinate ----------------------------------------------------

/// A point on the surface of the earth.
///
/// Both angles are in degrees. The type itself does not enforce the valid
/// ranges: the ranking and projection code assumes validated input. Use
/// [`Coordinate::checked`] at the boundary where raw values come in.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Coordinate {
    /// The latitude of the point.
    ///
    /// This is the south-north position of the point or its ‘y value.’
    pub latitude: f64,

    /// The longitude of the point.
    ///
    /// This is the west-east position of the point or its ‘x value.’
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate without checking the ranges.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Coordinate { latitude, longitude }
    }

    /// Creates a new coordinate, rejecting out-of-range or NaN angles.
    pub fn checked(latitude: f64, longitude: f64) -> Result<Self, Error> {
        let res = Self::new(latitude, longitude);
        if res.is_valid() {
            Ok(res)
        }
        else {
            Err(Error::InvalidCoordinate { latitude, longitude })
        }
    }

    /// Returns whether both angles are within their valid ranges.
    ///
    /// NaN is never valid.
    pub fn is_valid(&self) -> bool {
        (-90. ..=90.).contains(&self.latitude)
            && (-180. ..=180.).contains(&self.longitude)
    }
}


//------------ GeoBounds -----------------------------------------------------

/// A rectangular region in degrees.
///
/// A value produced by [`GeoBounds::enclosing`] always has
/// `min_lat <= max_lat` and `min_lng <= max_lng`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl GeoBounds {
    /// Returns the tightest bounds enclosing all the given points.
    ///
    /// Returns `None` if the iterator is empty.
    pub fn enclosing(
        points: impl IntoIterator<Item = Coordinate>
    ) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(
            GeoBounds {
                min_lat: first.latitude,
                max_lat: first.latitude,
                min_lng: first.longitude,
                max_lng: first.longitude,
            },
            |b, c| GeoBounds {
                min_lat: f64::min(b.min_lat, c.latitude),
                max_lat: f64::max(b.max_lat, c.latitude),
                min_lng: f64::min(b.min_lng, c.longitude),
                max_lng: f64::max(b.max_lng, c.longitude),
            }
        ))
    }

    /// Returns the bounds grown by `margin` degrees on every side.
    pub fn padded(self, margin: f64) -> Self {
        GeoBounds {
            min_lat: self.min_lat - margin,
            max_lat: self.max_lat + margin,
            min_lng: self.min_lng - margin,
            max_lng: self.max_lng + margin,
        }
    }

    pub fn range_lat(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn range_lng(&self) -> f64 {
        self.max_lng - self.min_lng
    }
}


//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn checked_rejects_out_of_range() {
        assert!(Coordinate::checked(40.7, -73.9).is_ok());
        assert!(Coordinate::checked(90., 180.).is_ok());
        assert!(Coordinate::checked(90.5, 0.).is_err());
        assert!(Coordinate::checked(0., -180.1).is_err());
        assert!(Coordinate::checked(f64::NAN, 0.).is_err());
    }

    #[test]
    fn enclosing_bounds() {
        assert_eq!(GeoBounds::enclosing(std::iter::empty()), None);
        let bounds = GeoBounds::enclosing([
            Coordinate::new(1., 5.),
            Coordinate::new(-2., 7.),
            Coordinate::new(0., 3.),
        ]).unwrap();
        assert_eq!(
            bounds,
            GeoBounds { min_lat: -2., max_lat: 1., min_lng: 3., max_lng: 7. }
        );
        assert_eq!(bounds.range_lat(), 3.);
        assert_eq!(bounds.range_lng(), 4.);
    }
}
