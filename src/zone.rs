//! Zone selection rules for the UTM grid: latitude band letters, zone
//! numbers (including the Norway and Svalbard exceptions), and central
//! meridians.

/// Latitude band letters from 80S to 84N, skipping I and O. The final band
/// X is 12 degrees tall, hence the doubled trailing letter.
const ZONE_LETTERS: &[u8] = b"CDEFGHJKLMNPQRSTUVWXX";

/// Returns the latitude band letter for a latitude, or `None` outside the
/// UTM band range `[-80, 84]`.
///
/// # Usage
///
/// ```
/// use utmconv::latitude_to_zone_letter;
///
/// assert_eq!(latitude_to_zone_letter(50.775), Some('U'));
/// assert_eq!(latitude_to_zone_letter(-80.0), Some('C'));
/// assert_eq!(latitude_to_zone_letter(84.0), Some('X'));
///
/// // Outside the band range there is no letter
/// assert_eq!(latitude_to_zone_letter(85.0), None);
/// assert_eq!(latitude_to_zone_letter(-80.1), None);
/// ```
pub fn latitude_to_zone_letter(latitude: f64) -> Option<char> {
    if (-80.0..=84.0).contains(&latitude) {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = ((latitude + 80.0) as usize) >> 3;
        Some(ZONE_LETTERS[index] as char)
    } else {
        None
    }
}

/// Returns the UTM zone number for a geodetic coordinate.
///
/// Handles the two irregularities of the grid: the widened zone 32V over
/// southwest Norway and the 31X/33X/35X/37X bands over Svalbard.
///
/// # Usage
///
/// ```
/// use utmconv::latlon_to_zone_number;
///
/// assert_eq!(latlon_to_zone_number(10.0, 10.0), 32);
///
/// // Norway exception
/// assert_eq!(latlon_to_zone_number(60.0, 5.0), 32);
/// // Svalbard exception
/// assert_eq!(latlon_to_zone_number(75.0, 5.0), 31);
/// ```
pub fn latlon_to_zone_number(latitude: f64, longitude: f64) -> i32 {
    // The Norway exception
    if (56.0..64.0).contains(&latitude) && (3.0..12.0).contains(&longitude) {
        return 32;
    }

    // The Svalbard exception
    if (72.0..=84.0).contains(&latitude) && longitude >= 0.0 {
        if longitude < 9.0 {
            return 31;
        } else if longitude < 21.0 {
            return 33;
        } else if longitude < 33.0 {
            return 35;
        } else if longitude < 42.0 {
            return 37;
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    let zone = ((longitude + 180.0) / 6.0) as i32 + 1;
    zone
}

/// Returns the central meridian of a zone in degrees.
///
/// # Usage
///
/// ```
/// use utmconv::zone_number_to_central_longitude;
///
/// assert_eq!(zone_number_to_central_longitude(1), -177);
/// assert_eq!(zone_number_to_central_longitude(32), 9);
/// assert_eq!(zone_number_to_central_longitude(60), 177);
/// ```
pub fn zone_number_to_central_longitude(zone_number: i32) -> i32 {
    (zone_number - 1) * 6 - 180 + 3
}
