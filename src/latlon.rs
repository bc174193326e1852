use std::fmt::Display;

use crate::{utm::Utm, Error};

/// Mean radius of Earth in meters
///
/// <https://en.wikipedia.org/wiki/Earth_radius#Arithmetic_mean_radius>
const EARTH_MEAN_RADIUS_M: f64 = 6371.0088 * 1000.0;

/// Representation of a geodetic latitude/longitude point on the GRS80
/// ellipsoid. Can be converted to/from [`Utm`].
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLon {
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub(crate) latitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lon"))]
    pub(crate) longitude: f64,
}

impl LatLon {
    /// Tries to create a latitude/longitude point from a lat/lon pair. First
    /// checks if the values lie within the UTM-projectable domain:
    /// * Latitude must be in range [-80, 84]
    /// * Longitude must be in range [-180, 180]
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if either latitude or longitude are
    /// outside those bounds.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconv::LatLon;
    ///
    /// let coord = LatLon::create(40.71435, -74.00597);
    ///
    /// assert!(coord.is_ok());
    ///
    /// let coord = coord.unwrap();
    ///
    /// assert_eq!(coord.latitude(), 40.71435);
    /// assert_eq!(coord.longitude(), -74.00597);
    ///
    /// let invalid_coord_lat = LatLon::create(85.0, 0.0);
    /// assert!(invalid_coord_lat.is_err());
    ///
    /// let invalid_coord_lon = LatLon::create(0.0, -200.0);
    /// assert!(invalid_coord_lon.is_err());
    /// ```
    pub fn create(lat: f64, lon: f64) -> Result<LatLon, Error> {
        if !(-80.0..=84.0).contains(&lat) {
            Err(Error::OutOfRange(
                "latitude out of range (must be between 80 deg S and 84 deg N)".to_string(),
            ))
        } else if !(-180.0..=180.0).contains(&lon) {
            Err(Error::OutOfRange(
                "longitude out of range (must be between 180 deg W and 180 deg E)".to_string(),
            ))
        } else {
            Ok(LatLon {
                latitude: lat,
                longitude: lon,
            })
        }
    }

    /// Creates a latitude/longitude point without any bounds check. Callers
    /// projecting out-of-band points get an extrapolated result, never a
    /// clamped one; the validity of that result is their responsibility.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconv::LatLon;
    ///
    /// // 85N is above band X, but can still be projected
    /// let coord = LatLon::create_unchecked(85.0, 0.0);
    /// let utm = coord.to_utm(None);
    ///
    /// assert_eq!(utm.zone_letter(), None);
    /// assert!(utm.northing().is_finite());
    /// ```
    pub fn create_unchecked(lat: f64, lon: f64) -> LatLon {
        Self {
            latitude: lat,
            longitude: lon,
        }
    }

    /// Returns the latitude value.
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude value.
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns whether the current point is in the northern hemisphere. The
    /// equator counts as northern, matching the false-northing rule.
    ///
    /// # Example
    ///
    /// ```
    /// use utmconv::LatLon;
    ///
    /// let coord = LatLon::create(40.71435, -74.00597).unwrap();
    /// assert!(coord.is_north());
    ///
    /// let coord = LatLon::create(-41.28646, 174.77624).unwrap();
    /// assert!(!coord.is_north());
    /// ```
    pub fn is_north(&self) -> bool {
        self.latitude >= 0.0
    }

    /// Returns the distance in meters between two [`LatLon`] points
    /// using the [haversine formula](https://en.wikipedia.org/wiki/Haversine_formula).
    /// Uses the [mean radius of the Earth](https://en.wikipedia.org/wiki/Earth_radius#Arithmetic_mean_radius)
    /// in the calculation: `6371.0088`
    pub fn haversine(&self, other: &LatLon) -> f64 {
        let lat1_r = self.latitude.to_radians();
        let lat2_r = other.latitude.to_radians();

        2.0 * EARTH_MEAN_RADIUS_M
            * (((other.latitude - self.latitude).to_radians() / 2.0).sin().powi(2)
                + lat1_r.cos()
                    * lat2_r.cos()
                    * ((other.longitude - self.longitude).to_radians() / 2.0)
                        .sin()
                        .powi(2))
            .sqrt()
            .asin()
    }

    /// Converts from [`Utm`] to [`LatLon`]
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconv::{Hemisphere, LatLon, Utm};
    ///
    /// let coord_utm = Utm::create(32, Hemisphere::Letter('U'), 294408.663, 5628897.513).unwrap();
    ///
    /// let converted = LatLon::from_utm(&coord_utm);
    ///
    /// assert!((converted.latitude() - 50.77534556).abs() < 1e-5);
    /// assert!((converted.longitude() - 6.08388667).abs() < 1e-5);
    /// ```
    pub fn from_utm(value: &Utm) -> LatLon {
        value.to_latlon()
    }

    /// Converts from [`LatLon`] to [`Utm`], optionally forcing the zone
    /// number instead of deriving it from the longitude.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconv::LatLon;
    ///
    /// let coord = LatLon::create(50.77534556, 6.08388667).unwrap();
    ///
    /// let converted = coord.to_utm(None);
    ///
    /// assert_eq!(converted.zone_number(), 32);
    /// assert_eq!(converted.zone_letter(), Some('U'));
    /// // Check against the GeographicLib reference value
    /// assert!((converted.easting() - 294408.663).abs() < 1e-3);
    /// assert!((converted.northing() - 5628897.513).abs() < 1e-3);
    /// ```
    pub fn to_utm(&self, force_zone_number: Option<i32>) -> Utm {
        Utm::from_latlon(self, force_zone_number)
    }
}

impl Display for LatLon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let lat = buf.format(self.latitude);
        let mut buf = ryu::Buffer::new();
        let lon = buf.format(self.longitude);
        write!(f, "{lat} {lon}")
    }
}
