use crate::{
    constants::{FALSE_EASTING, FALSE_NORTHING},
    latlon::LatLon,
    projections::transverse_mercator::GRS80,
    zone::{latitude_to_zone_letter, latlon_to_zone_number, zone_number_to_central_longitude},
    Error,
};

/// Hemisphere designator for a UTM coordinate: either a latitude band
/// letter, or an explicit northern-hemisphere flag. Modeling this as an enum
/// makes the "both" and "neither" states unrepresentable in the typed API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Hemisphere {
    /// Latitude band letter in `C..X` excluding `I` and `O`. Lowercase
    /// letters are accepted and normalized.
    Letter(char),
    /// `true` for the northern hemisphere.
    Northern(bool),
}

impl Hemisphere {
    /// Resolves the designator to a hemisphere flag. Letters `N` and above
    /// are northern bands.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] for a letter outside `C..X` or one of
    /// the unused letters `I` and `O`.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconv::Hemisphere;
    ///
    /// assert_eq!(Hemisphere::Letter('U').is_northern().unwrap(), true);
    /// assert_eq!(Hemisphere::Letter('h').is_northern().unwrap(), false);
    /// assert_eq!(Hemisphere::Northern(true).is_northern().unwrap(), true);
    ///
    /// assert!(Hemisphere::Letter('I').is_northern().is_err());
    /// assert!(Hemisphere::Letter('Z').is_northern().is_err());
    /// ```
    pub fn is_northern(&self) -> Result<bool, Error> {
        match *self {
            Hemisphere::Letter(letter) => {
                let letter = letter.to_ascii_uppercase();

                if !('C'..='X').contains(&letter) || letter == 'I' || letter == 'O' {
                    return Err(Error::OutOfRange(
                        "zone letter out of range (must be between C and X)".to_string(),
                    ));
                }

                Ok(letter >= 'N')
            }
            Hemisphere::Northern(northp) => Ok(northp),
        }
    }

    /// Returns the normalized band letter, or `None` for a flag designator.
    pub fn zone_letter(&self) -> Option<char> {
        match *self {
            Hemisphere::Letter(letter) => Some(letter.to_ascii_uppercase()),
            Hemisphere::Northern(_) => None,
        }
    }
}

/// Representation of a GRS80
/// [UTM](https://en.wikipedia.org/wiki/Universal_Transverse_Mercator_coordinate_system)
/// point. The band letter is carried when known (it is derived from the
/// latitude on conversion); the hemisphere flag is always present.
#[allow(clippy::module_name_repetitions)]
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Utm {
    pub(crate) zone: i32,
    #[cfg_attr(feature = "serde", serde(alias = "north", alias = "is_north"))]
    pub(crate) northp: bool,
    pub(crate) letter: Option<char>,
    pub(crate) easting: f64,
    pub(crate) northing: f64,
}

impl Utm {
    /// Internal-only constructor that doesn't check the coordinate
    pub(crate) fn new(
        zone: i32,
        northp: bool,
        letter: Option<char>,
        easting: f64,
        northing: f64,
    ) -> Utm {
        Self {
            zone,
            northp,
            letter,
            easting,
            northing,
        }
    }

    /// Tries to create a UTM point from its constituent parts, checking
    /// every component against its valid domain.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the zone is outside `[1, 60]`, the
    /// band letter is invalid (including the unused combinations 32X, 34X
    /// and 36X), the easting is outside `[100000, 1000000)` or the northing
    /// is outside `[0, 10000000]`.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconv::{Hemisphere, Utm};
    ///
    /// let coord = Utm::create(18, Hemisphere::Letter('T'), 583959.959, 4507523.087);
    ///
    /// assert!(coord.is_ok());
    ///
    /// let coord = coord.unwrap();
    ///
    /// assert_eq!(coord.zone_number(), 18);
    /// assert_eq!(coord.zone_letter(), Some('T'));
    /// assert!(coord.is_north());
    ///
    /// let invalid_zone = Utm::create(61, Hemisphere::Letter('T'), 583959.959, 4507523.087);
    /// assert!(invalid_zone.is_err());
    ///
    /// let invalid_easting = Utm::create(18, Hemisphere::Letter('T'), 99999.0, 4507523.087);
    /// assert!(invalid_easting.is_err());
    /// ```
    pub fn create(
        zone: i32,
        hemisphere: Hemisphere,
        easting: f64,
        northing: f64,
    ) -> Result<Utm, Error> {
        let northp = hemisphere.is_northern()?;
        let letter = hemisphere.zone_letter();

        check_zone_number(zone)?;
        check_zone_band(zone, letter)?;
        check_coords(easting, northing)?;

        Ok(Utm::new(zone, northp, letter, easting, northing))
    }

    /// Returns the UTM zone number.
    pub fn zone_number(&self) -> i32 {
        self.zone
    }

    /// Returns the latitude band letter, if one is known. Points built from
    /// a hemisphere flag or from an out-of-band latitude carry none.
    pub fn zone_letter(&self) -> Option<char> {
        self.letter
    }

    /// Returns whether the coordinate is in the northern hemisphere.
    pub fn is_north(&self) -> bool {
        self.northp
    }

    /// Returns the UTM easting in meters.
    pub fn easting(&self) -> f64 {
        self.easting
    }

    /// Returns the UTM northing in meters.
    pub fn northing(&self) -> f64 {
        self.northing
    }

    /// Converts from [`LatLon`] to [`Utm`]. The zone number is derived from
    /// the coordinate unless `force_zone_number` overrides it; no validity
    /// check is applied to a forced zone.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconv::{LatLon, Utm};
    ///
    /// let coord = LatLon::create(-41.28646, 174.77623611).unwrap();
    ///
    /// let converted = Utm::from_latlon(&coord, None);
    ///
    /// assert_eq!(converted.zone_number(), 60);
    /// assert_eq!(converted.zone_letter(), Some('G'));
    /// assert!(!converted.is_north());
    /// // Check against the GeographicLib reference value
    /// assert!((converted.easting() - 313783.980).abs() < 1e-3);
    /// assert!((converted.northing() - 5427057.314).abs() < 1e-3);
    /// ```
    pub fn from_latlon(value: &LatLon, force_zone_number: Option<i32>) -> Utm {
        let zone = force_zone_number
            .unwrap_or_else(|| latlon_to_zone_number(value.latitude, value.longitude));
        let letter = latitude_to_zone_letter(value.latitude);
        let northp = value.is_north();

        let lon0 = f64::from(zone_number_to_central_longitude(zone));
        let (x, y) = GRS80.from_latlon(lon0, value.latitude, value.longitude);

        let easting = x + FALSE_EASTING;
        let northing = if northp { y } else { y + FALSE_NORTHING };

        Utm {
            zone,
            northp,
            letter,
            easting,
            northing,
        }
    }

    /// Converts from [`Utm`] to [`LatLon`]
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconv::{Hemisphere, Utm};
    ///
    /// let coord = Utm::create(34, Hemisphere::Northern(false), 261877.351, 6243185.701).unwrap();
    ///
    /// let converted = coord.to_latlon();
    ///
    /// assert!((converted.latitude() - -33.92486889).abs() < 1e-5);
    /// assert!((converted.longitude() - 18.424055).abs() < 1e-5);
    /// ```
    pub fn to_latlon(&self) -> LatLon {
        let x = self.easting - FALSE_EASTING;
        let y = if self.northp {
            self.northing
        } else {
            self.northing - FALSE_NORTHING
        };

        let lon0 = f64::from(zone_number_to_central_longitude(self.zone));
        let (latitude, longitude) = GRS80.to_latlon(lon0, x, y);

        LatLon {
            latitude,
            longitude,
        }
    }
}

pub(crate) fn check_zone_number(zone: i32) -> Result<(), Error> {
    if !(1..=60).contains(&zone) {
        return Err(Error::OutOfRange(
            "zone number out of range (must be between 1 and 60)".to_string(),
        ));
    }

    Ok(())
}

// Band X skips zones 32, 34 and 36; their width is absorbed by the
// neighboring Svalbard zones.
pub(crate) fn check_zone_band(zone: i32, letter: Option<char>) -> Result<(), Error> {
    if letter == Some('X') && matches!(zone, 32 | 34 | 36) {
        return Err(Error::OutOfRange(
            "zone letter X is not used with zone numbers 32, 34 and 36".to_string(),
        ));
    }

    Ok(())
}

pub(crate) fn check_coords(easting: f64, northing: f64) -> Result<(), Error> {
    if !(100_000.0..1_000_000.0).contains(&easting) {
        return Err(Error::OutOfRange(
            "easting out of range (must be between 100,000 m and 999,999 m)".to_string(),
        ));
    }

    if !(0.0..=10_000_000.0).contains(&northing) {
        return Err(Error::OutOfRange(
            "northing out of range (must be between 0 m and 10,000,000 m)".to_string(),
        ));
    }

    Ok(())
}

impl std::fmt::Display for Utm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.letter {
            Some(letter) => write!(
                f,
                "{}{} {} {}",
                self.zone, letter, self.easting, self.northing
            ),
            None => write!(
                f,
                "{}{} {} {}",
                self.zone,
                if self.northp { "n" } else { "s" },
                self.easting,
                self.northing
            ),
        }
    }
}
