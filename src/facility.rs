//! Emergency facilities and their ranking by distance.
//!
//! A [`Facility`] is an immutable record supplied by the caller. Ranking
//! produces fresh [`RankedFacility`] values carrying the distance to the
//! user, ordered from nearest to farthest.

use std::fmt;
use std::str::FromStr;
use crate::geomath;
use crate::world::Coordinate;


//------------ Category ------------------------------------------------------

/// The kind of an emergency facility.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Category {
    Hospital,
    Ambulance,
    BloodBank,
}

impl Category {
    /// All categories in legend order.
    pub const ALL: [Category; 3] = [
        Category::Hospital, Category::Ambulance, Category::BloodBank
    ];

    /// Returns the machine name of the category.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Hospital => "hospital",
            Category::Ambulance => "ambulance",
            Category::BloodBank => "blood_bank",
        }
    }

    /// Returns the human readable name of the category.
    pub fn label(self) -> &'static str {
        match self {
            Category::Hospital => "Hospital",
            Category::Ambulance => "Ambulance",
            Category::BloodBank => "Blood Bank",
        }
    }

    /// Returns the single letter drawn inside a map marker.
    pub fn glyph(self) -> char {
        match self {
            Category::Hospital => 'H',
            Category::Ambulance => 'A',
            Category::BloodBank => 'B',
        }
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL.into_iter().find(|cat| cat.as_str() == s).ok_or_else(|| {
            UnknownCategory(s.into())
        })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.label())
    }
}


//------------ Facility ------------------------------------------------------

/// An emergency facility.
///
/// Facilities are identified by their `id`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Facility {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub category: Category,
    #[cfg_attr(feature = "serde", serde(rename = "coordinates"))]
    pub coordinate: Coordinate,
    pub phone: String,
    pub address: String,
}

impl Facility {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        coordinate: Coordinate,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Facility {
            id: id.into(),
            name: name.into(),
            category,
            coordinate,
            phone: phone.into(),
            address: address.into(),
        }
    }
}


//------------ RankedFacility ------------------------------------------------

/// A facility together with its distance from the user in miles.
#[derive(Clone, Debug, PartialEq)]
pub struct RankedFacility {
    facility: Facility,
    distance: f64,
}

impl RankedFacility {
    pub fn facility(&self) -> &Facility {
        &self.facility
    }

    pub fn category(&self) -> Category {
        self.facility.category
    }

    pub fn coordinate(&self) -> Coordinate {
        self.facility.coordinate
    }

    /// Returns the great-circle distance from the user in miles.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Returns a rough travel time estimate in whole minutes.
    ///
    /// This assumes three minutes per mile, rounded up.
    pub fn travel_minutes(&self) -> u32 {
        (self.distance * 3.).ceil() as u32
    }

    /// Returns a link to a web map centered on the facility.
    pub fn directions_url(&self) -> String {
        format!(
            "https://maps.google.com/?q={},{}",
            self.facility.coordinate.latitude,
            self.facility.coordinate.longitude,
        )
    }
}


//------------ rank ----------------------------------------------------------

/// Ranks facilities by their distance from `user`.
///
/// The result contains every facility exactly once, nearest first.
/// Facilities at equal distance keep their relative input order.
///
/// The coordinates are assumed to be valid. Out-of-range values are not
/// detected and lead to meaningless distances.
pub fn rank(user: Coordinate, facilities: &[Facility]) -> Vec<RankedFacility> {
    let mut res: Vec<_> = facilities.iter().map(|facility| {
        RankedFacility {
            facility: facility.clone(),
            distance: geomath::distance(user, facility.coordinate),
        }
    }).collect();

    // sort_by is stable which keeps ties in input order.
    res.sort_by(|left, right| left.distance.total_cmp(&right.distance));
    tracing::debug!(count = res.len(), "ranked facilities");
    res
}


//------------ sample_facilities ---------------------------------------------

/// Returns a small built-in set of facilities in midtown Manhattan.
pub fn sample_facilities() -> Vec<Facility> {
    vec![
        Facility::new(
            "1", "City General Hospital", Category::Hospital,
            Coordinate::new(40.7589, -73.9851),
            "+1-555-0101", "123 Medical Center Dr",
        ),
        Facility::new(
            "2", "Emergency Ambulance Service", Category::Ambulance,
            Coordinate::new(40.7614, -73.9776),
            "+1-555-0911", "456 Emergency Ave",
        ),
        Facility::new(
            "3", "Red Cross Blood Bank", Category::BloodBank,
            Coordinate::new(40.7505, -73.9934),
            "+1-555-0202", "789 Donation St",
        ),
        Facility::new(
            "4", "Metro Emergency Hospital", Category::Hospital,
            Coordinate::new(40.7549, -73.984),
            "+1-555-0303", "321 Health Plaza",
        ),
    ]
}


//------------ UnknownCategory -----------------------------------------------

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown facility category '{0}'")]
pub struct UnknownCategory(String);


//============ Testing =======================================================
