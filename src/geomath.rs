//! Distances on the surface of the earth.

use crate::world::Coordinate;

/// The mean radius of the earth in miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.;

/// Returns the great-circle distance between two coordinates in miles.
///
/// Uses the haversine formula on a sphere of radius
/// [`EARTH_RADIUS_MILES`].
pub fn distance(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lng = (b.longitude - a.longitude).to_radians();
    let h = (d_lat / 2.).sin().powi(2)
        + a.latitude.to_radians().cos()
            * b.latitude.to_radians().cos()
            * (d_lng / 2.).sin().powi(2);

    // Rounding can push h just past 1 for antipodal points.
    let h = h.min(1.);
    EARTH_RADIUS_MILES * 2. * h.sqrt().atan2((1. - h).sqrt())
}


//============ Testing =======================================================

#[cfg(test)]
mod test {
    use proptest::prelude::*;
    use super::*;

    fn coordinate() -> impl Strategy<Value = Coordinate> {
        (-90f64..=90., -180f64..=180.).prop_map(|(lat, lng)| {
            Coordinate::new(lat, lng)
        })
    }

    #[test]
    fn known_distances() {
        let times_square = Coordinate::new(40.7589, -73.9851);
        assert!(
            (distance(times_square, Coordinate::new(40.7549, -73.984))
                - 0.2823).abs() < 0.05
        );
        assert!(
            (distance(times_square, Coordinate::new(40.7614, -73.9776))
                - 0.4289).abs() < 0.05
        );

        // Big Ben to the Statue of Liberty.
        let d = distance(
            Coordinate::new(51.5007, -0.1246),
            Coordinate::new(40.6892, -74.0445),
        );
        assert!((d - 3464.26).abs() < 1.);
    }

    #[test]
    fn antipodes() {
        let d = distance(Coordinate::new(0., 0.), Coordinate::new(0., 180.));
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_MILES).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn zero_to_itself(a in coordinate()) {
            prop_assert_eq!(distance(a, a), 0.);
        }

        #[test]
        fn symmetric(a in coordinate(), b in coordinate()) {
            let ab = distance(a, b);
            let ba = distance(b, a);
            prop_assert!((ab - ba).abs() <= 1e-9 * ab.max(1.));
            prop_assert!(ab >= 0.);
        }
    }
}
