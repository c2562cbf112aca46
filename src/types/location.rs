//! Struct definitions and implementations for [`Location`].
//!
//! A `Location` is a decimal-degree coordinate pair. Walking routes
//! are flat; no altitude is tracked.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A geographic coordinate in decimal degrees.
///
/// [`OrderedFloat`] wraps the components so locations can be compared,
/// hashed, and used as map keys. Five decimal places of precision
/// (0.00001) narrow the error margin to about a meter, which is all
/// the route-identity scheme relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub latitude: OrderedFloat<f64>,
    pub longitude: OrderedFloat<f64>,
}

impl Location {
    /// Validates a raw coordinate pair and builds a [`Location`].
    ///
    /// This is the boundary where numbers from geocoders, map clicks,
    /// and stored records enter the system. Downstream policy code
    /// assumes coordinates are finite and in range, so non-finite or
    /// out-of-range values are rejected here.
    ///
    /// # Arguments
    /// * `latitude` - Decimal degrees in [-90, 90].
    /// * `longitude` - Decimal degrees in [-180, 180].
    pub fn new(latitude: f64, longitude: f64) -> Result<Location, Error> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(Error::LatitudeOutOfRange(latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::LongitudeOutOfRange(longitude));
        }
        Ok(Location {
            latitude: OrderedFloat(latitude),
            longitude: OrderedFloat(longitude),
        })
    }
}

#[cfg(test)]
mod location_tests {
    use super::*;

    #[test]
    fn ut_valid_coordinates() {
        let delhi = Location::new(28.61390, 77.20900).unwrap();
        assert_eq!(delhi.latitude.into_inner(), 28.61390);
        assert_eq!(delhi.longitude.into_inner(), 77.20900);

        // Poles and the antimeridian are legal.
        assert!(Location::new(90.0, 180.0).is_ok());
        assert!(Location::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn ut_rejects_out_of_range() {
        assert_eq!(
            Location::new(90.1, 0.0),
            Err(Error::LatitudeOutOfRange(90.1))
        );
        assert_eq!(
            Location::new(0.0, -180.5),
            Err(Error::LongitudeOutOfRange(-180.5))
        );
    }

    #[test]
    fn ut_rejects_non_finite() {
        assert!(Location::new(f64::NAN, 0.0).is_err());
        assert!(Location::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn ut_locations_are_hashable() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(Location::new(37.7749, -122.4194).unwrap());
        set.insert(Location::new(37.7749, -122.4194).unwrap());
        assert_eq!(set.len(), 1);
    }
}
