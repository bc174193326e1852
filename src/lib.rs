#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

//! Bidirectional conversion between geodetic coordinates and Universal
//! Transverse Mercator (UTM) coordinates on the GRS80 ellipsoid, using
//! high-order power series accurate to well below a millimeter within a
//! zone.
//!
//! The typed API lives on [`LatLon`] and [`Utm`]; the free functions
//! [`from_latlon`] and [`to_latlon`] offer the same conversions as plain
//! tuples with a `strict` switch for the domain checks.

use thiserror::Error;

pub mod latlon;
pub mod utm;
pub mod zone;

pub use latlon::LatLon;
pub use utm::{Hemisphere, Utm};
pub use zone::{latitude_to_zone_letter, latlon_to_zone_number, zone_number_to_central_longitude};

pub(crate) mod projections {
    pub mod transverse_mercator;
}

pub(crate) mod constants;

#[derive(Debug, Error)]
pub enum Error {
    /// A latitude, longitude, easting, northing, zone number or zone letter
    /// lies outside its valid domain. The message names the violated bound.
    #[error("out of range: {0}")]
    OutOfRange(String),
    /// The hemisphere selectors were combined invalidly: [`to_latlon`] needs
    /// exactly one of `zone_letter` and `northern`.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
}

/// Converts a geodetic coordinate to UTM, returning
/// `(easting, northing, zone_number, zone_letter)`.
///
/// With `strict` set, latitude must be in `[-80, 84]` and longitude in
/// `[-180, 180]`; otherwise out-of-range input is projected anyway and the
/// band letter comes back as `None`. A forced zone number bypasses zone
/// selection entirely.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] when `strict` is set and a bound is
/// violated.
///
/// # Usage
///
/// ```
/// use utmconv::from_latlon;
///
/// let (easting, northing, zone_number, zone_letter) =
///     from_latlon(50.77534556, 6.08388667, None, true).unwrap();
///
/// assert_eq!(zone_number, 32);
/// assert_eq!(zone_letter, Some('U'));
/// assert!((easting - 294408.663).abs() < 1e-3);
/// assert!((northing - 5628897.513).abs() < 1e-3);
///
/// // 85N is beyond band X: rejected when strict, extrapolated otherwise
/// assert!(from_latlon(85.0, 0.0, None, true).is_err());
/// assert!(from_latlon(85.0, 0.0, None, false).is_ok());
/// ```
pub fn from_latlon(
    latitude: f64,
    longitude: f64,
    force_zone_number: Option<i32>,
    strict: bool,
) -> Result<(f64, f64, i32, Option<char>), Error> {
    let coord = if strict {
        LatLon::create(latitude, longitude)?
    } else {
        LatLon::create_unchecked(latitude, longitude)
    };

    let utm = coord.to_utm(force_zone_number);

    Ok((
        utm.easting(),
        utm.northing(),
        utm.zone_number(),
        utm.zone_letter(),
    ))
}

/// Converts a UTM coordinate to geodetic `(latitude, longitude)`.
///
/// Exactly one of `zone_letter` and `northern` selects the hemisphere. The
/// zone number and letter are always validated; with `strict` set, easting
/// must be in `[100000, 1000000)` and northing in `[0, 10000000]`.
///
/// # Errors
///
/// Returns [`Error::InvalidArguments`] when both or neither hemisphere
/// selector is given, and [`Error::OutOfRange`] for any domain violation.
///
/// # Usage
///
/// ```
/// use utmconv::to_latlon;
///
/// let (latitude, longitude) =
///     to_latlon(294408.663, 5628897.513, 32, Some('U'), None, true).unwrap();
///
/// assert!((latitude - 50.77534556).abs() < 1e-5);
/// assert!((longitude - 6.08388667).abs() < 1e-5);
///
/// // The hemisphere must be given exactly once
/// assert!(to_latlon(294408.663, 5628897.513, 32, None, None, true).is_err());
/// assert!(to_latlon(294408.663, 5628897.513, 32, Some('U'), Some(true), true).is_err());
/// ```
pub fn to_latlon(
    easting: f64,
    northing: f64,
    zone_number: i32,
    zone_letter: Option<char>,
    northern: Option<bool>,
    strict: bool,
) -> Result<(f64, f64), Error> {
    let hemisphere = match (zone_letter, northern) {
        (Some(letter), None) => Hemisphere::Letter(letter),
        (None, Some(northp)) => Hemisphere::Northern(northp),
        (Some(_), Some(_)) => {
            return Err(Error::InvalidArguments(
                "set either zone_letter or northern, but not both".to_string(),
            ))
        }
        (None, None) => {
            return Err(Error::InvalidArguments(
                "either zone_letter or northern needs to be set".to_string(),
            ))
        }
    };

    let northp = hemisphere.is_northern()?;
    let letter = hemisphere.zone_letter();

    utm::check_zone_number(zone_number)?;
    utm::check_zone_band(zone_number, letter)?;
    if strict {
        utm::check_coords(easting, northing)?;
    }

    let coord = Utm::new(zone_number, northp, letter, easting, northing).to_latlon();

    Ok((coord.latitude(), coord.longitude()))
}
