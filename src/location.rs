//! The outcome of asking for the user’s position.

use std::fmt;
use std::str::FromStr;
use crate::world::Coordinate;


//------------ LocationFix ---------------------------------------------------

/// Either a position or the reason why there is none.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LocationFix {
    Located(Coordinate),
    Unavailable(Unavailable),
}

impl LocationFix {
    /// Returns the coordinate if there is one.
    ///
    /// All reasons for a missing position are treated alike from here on.
    pub fn coordinate(&self) -> Option<Coordinate> {
        match *self {
            LocationFix::Located(coord) => Some(coord),
            LocationFix::Unavailable(_) => None,
        }
    }
}

impl From<Coordinate> for LocationFix {
    fn from(coord: Coordinate) -> Self {
        LocationFix::Located(coord)
    }
}

impl From<Unavailable> for LocationFix {
    fn from(reason: Unavailable) -> Self {
        LocationFix::Unavailable(reason)
    }
}


//------------ Unavailable ---------------------------------------------------

/// Why the location provider could not supply a position.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Unavailable {
    PermissionDenied,
    PositionUnavailable,
    Timeout,
    Unsupported,
}

impl Unavailable {
    /// Returns a message suitable for showing to the user.
    pub fn message(self) -> &'static str {
        match self {
            Unavailable::PermissionDenied => {
                "Location access denied. Please enable location services."
            }
            Unavailable::PositionUnavailable => {
                "Location information is unavailable."
            }
            Unavailable::Timeout => "Location request timed out.",
            Unavailable::Unsupported => {
                "Geolocation is not supported by this browser."
            }
        }
    }
}

impl FromStr for Unavailable {
    type Err = UnknownReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "permission_denied" => Ok(Unavailable::PermissionDenied),
            "position_unavailable" => Ok(Unavailable::PositionUnavailable),
            "timeout" => Ok(Unavailable::Timeout),
            "unsupported" => Ok(Unavailable::Unsupported),
            _ => Err(UnknownReason(s.into())),
        }
    }
}

impl fmt::Display for Unavailable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.message())
    }
}


//------------ UnknownReason -------------------------------------------------

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown unavailability reason '{0}'")]
pub struct UnknownReason(String);


//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn coordinate_only_when_located() {
        let coord = Coordinate::new(1., 2.);
        assert_eq!(LocationFix::from(coord).coordinate(), Some(coord));
        assert_eq!(
            LocationFix::from(Unavailable::Timeout).coordinate(), None
        );
    }

    #[test]
    fn parse_reason() {
        assert_eq!(
            "permission_denied".parse(), Ok(Unavailable::PermissionDenied)
        );
        assert_eq!("timeout".parse(), Ok(Unavailable::Timeout));
        assert!("later".parse::<Unavailable>().is_err());
    }
}
