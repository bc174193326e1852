use utmconv::{
    from_latlon, latitude_to_zone_letter, latlon_to_zone_number, to_latlon,
    zone_number_to_central_longitude, Error, LatLon,
};

/// Known UTM values were projected from latitude and longitude values using
/// GeographicLib (onto the GRS80 ellipsoid!). As that library carries a much
/// higher series expansion and a different implementation, its output is
/// treated as the reference.
struct KnownValue {
    latlon: (f64, f64),
    utm: (f64, f64, i32, char),
    northern: bool,
}

const KNOWN_VALUES: &[KnownValue] = &[
    // Aachen, Germany
    KnownValue {
        latlon: (50.77534556, 6.08388667),
        utm: (294408.662941387, 5628897.512984829, 32, 'U'),
        northern: true,
    },
    // New York, USA
    KnownValue {
        latlon: (40.71435000, -74.00597000),
        utm: (583959.959045332, 4507523.086854665, 18, 'T'),
        northern: true,
    },
    // Wellington, New Zealand
    KnownValue {
        latlon: (-41.28646000, 174.77623611),
        utm: (313783.980049117, 5427057.313755062, 60, 'G'),
        northern: false,
    },
    // Capetown, South Africa
    KnownValue {
        latlon: (-33.92486889, 18.42405500),
        utm: (261877.350976653, 6243185.700844696, 34, 'H'),
        northern: false,
    },
    // Mendoza, Argentina
    KnownValue {
        latlon: (-32.89018000, -68.84405000),
        utm: (514586.227836383, 6360876.825073616, 19, 'H'),
        northern: false,
    },
    // Fairbanks, Alaska, USA
    KnownValue {
        latlon: (64.83777806, -147.71638889),
        utm: (466013.322449279, 7190567.781669118, 6, 'W'),
        northern: true,
    },
    // Ben Nevis, Scotland, UK
    KnownValue {
        latlon: (56.79680000, -5.00601000),
        utm: (377485.765670114, 6296561.854117111, 30, 'V'),
        northern: true,
    },
    // Northern edge of band X
    KnownValue {
        latlon: (84.0, -5.00601),
        utm: (476594.34011230164, 9328501.361833721, 30, 'X'),
        northern: true,
    },
];

fn assert_utm_close(
    actual: (f64, f64, i32, Option<char>),
    expected: (f64, f64, i32, char),
    tol: f64,
) {
    assert!(
        (actual.0 - expected.0).abs() < tol,
        "easting {} differs from {} by more than {tol}",
        actual.0,
        expected.0,
    );
    assert!(
        (actual.1 - expected.1).abs() < tol,
        "northing {} differs from {} by more than {tol}",
        actual.1,
        expected.1,
    );
    assert_eq!(actual.2, expected.2);
    assert_eq!(actual.3, Some(expected.3));
}

fn assert_latlon_close(actual: (f64, f64), expected: (f64, f64), tol: f64) {
    assert!(
        (actual.0 - expected.0).abs() < tol,
        "latitude {} differs from {} by more than {tol}",
        actual.0,
        expected.0,
    );
    assert!(
        (actual.1 - expected.1).abs() < tol,
        "longitude {} differs from {} by more than {tol}",
        actual.1,
        expected.1,
    );
}

fn assert_zone(lat: f64, lon: f64, number: i32, letter: char) {
    let (_, _, zone_number, zone_letter) = from_latlon(lat, lon, None, true).unwrap();
    assert_eq!(zone_number, number, "zone number for ({lat}, {lon})");
    assert_eq!(zone_letter, Some(letter), "zone letter for ({lat}, {lon})");
}

#[test]
fn from_latlon_known_values() {
    for known in KNOWN_VALUES {
        let result = from_latlon(known.latlon.0, known.latlon.1, None, true).unwrap();
        assert_utm_close(result, known.utm, 1e-5);
    }
}

#[test]
fn to_latlon_known_values() {
    for known in KNOWN_VALUES {
        let (easting, northing, zone_number, zone_letter) = known.utm;

        // Hemisphere by band letter
        let result =
            to_latlon(easting, northing, zone_number, Some(zone_letter), None, true).unwrap();
        assert_latlon_close(result, known.latlon, 1e-5);

        // Hemisphere by flag
        let result =
            to_latlon(easting, northing, zone_number, None, Some(known.northern), true).unwrap();
        assert_latlon_close(result, known.latlon, 1e-5);
    }
}

#[test]
fn lowercase_zone_letter_is_accepted() {
    let known = &KNOWN_VALUES[4]; // Mendoza, southern hemisphere
    let (easting, northing, zone_number, _) = known.utm;

    let result = to_latlon(easting, northing, zone_number, Some('h'), None, true).unwrap();
    assert_latlon_close(result, known.latlon, 1e-5);
}

#[test]
fn from_latlon_roundtrip() {
    for known in KNOWN_VALUES {
        let (easting, northing, zone_number, _) =
            from_latlon(known.latlon.0, known.latlon.1, None, true).unwrap();
        let result = to_latlon(
            easting,
            northing,
            zone_number,
            None,
            Some(known.northern),
            true,
        )
        .unwrap();

        assert_latlon_close(result, known.latlon, 1e-5);
    }
}

// The series expansion for the inverse direction is worse than the forward
// one, so the same accuracy cannot be expected here.
#[test]
fn to_latlon_roundtrip() {
    for known in KNOWN_VALUES {
        let (easting, northing, zone_number, zone_letter) = known.utm;
        let (lat, lon) =
            to_latlon(easting, northing, zone_number, Some(zone_letter), None, true).unwrap();

        // The strict check must stay off: the roundtrip of the band-X edge
        // case comes back as 84.00000016 degrees, just outside the domain.
        let result = from_latlon(lat, lon, None, false).unwrap();

        assert!((result.0 - easting).abs() < 0.5);
        assert!((result.1 - northing).abs() < 0.5);
        assert_eq!(result.2, zone_number);
    }
}

#[test]
fn roundtrip_is_sub_millimeter_mid_zone() {
    for known in &KNOWN_VALUES[..2] {
        let origin = LatLon::create(known.latlon.0, known.latlon.1).unwrap();
        let roundtrip = origin.to_utm(None).to_latlon();

        assert!(origin.haversine(&roundtrip) < 1e-3);
    }
}

#[test]
fn from_latlon_range_checks() {
    for lat in [-100.0, -80.1, 84.1, 100.0] {
        let err = from_latlon(lat, 0.0, None, true).unwrap_err();
        assert!(matches!(err, Error::OutOfRange(_)));
        assert!(err.to_string().contains("latitude"));
    }

    for lon in [-300.0, -180.1, 180.1, 300.0] {
        let err = from_latlon(0.0, lon, None, true).unwrap_err();
        assert!(matches!(err, Error::OutOfRange(_)));
        assert!(err.to_string().contains("longitude"));
    }

    // Both out of range still fails
    for (lat, lon) in [(-100.0, -300.0), (100.0, -300.0), (-100.0, 300.0), (100.0, 300.0)] {
        assert!(from_latlon(lat, lon, None, true).is_err());
    }

    // The whole valid domain converts
    for i in -8000..=8400 {
        from_latlon(f64::from(i) / 100.0, 0.0, None, true).unwrap();
    }
    for i in -18000..=18000 {
        from_latlon(0.0, f64::from(i) / 100.0, None, true).unwrap();
    }
}

#[test]
fn from_latlon_strict_disabled() {
    // Out-of-range input is projected as-is, with no band letter and no
    // clamping
    let (_, _, _, zone_letter) = from_latlon(85.0, 0.0, None, false).unwrap();
    assert_eq!(zone_letter, None);

    let (easting, northing, _, _) = from_latlon(-100.0, 0.0, None, false).unwrap();
    assert!(easting.is_finite());
    assert!(northing.is_finite());
}

#[test]
fn to_latlon_hemisphere_arguments() {
    // Neither selector
    let err = to_latlon(500_000.0, 5_000_000.0, 32, None, None, true).unwrap_err();
    assert!(matches!(err, Error::InvalidArguments(_)));

    // Both selectors
    let err = to_latlon(500_000.0, 5_000_000.0, 32, Some('U'), Some(true), true).unwrap_err();
    assert!(matches!(err, Error::InvalidArguments(_)));

    // The flag alone works, even where no band letter exists
    let result = to_latlon(500_000.0, 100_000.0, 32, None, Some(true), true).unwrap();
    assert_latlon_close(result, (0.904730614584, 9.0), 1e-5);
}

#[test]
fn to_latlon_easting_range() {
    for easting in [0.0, 99_999.0] {
        let err = to_latlon(easting, 5_000_000.0, 32, Some('U'), None, true).unwrap_err();
        assert!(matches!(err, Error::OutOfRange(_)));
        assert!(err.to_string().contains("easting"));
    }

    for easting in (100_000..1_000_000).step_by(1000) {
        to_latlon(f64::from(easting), 5_000_000.0, 32, Some('U'), None, true).unwrap();
    }

    for easting in [1_000_000.0, 100_000_000_000.0] {
        assert!(to_latlon(easting, 5_000_000.0, 32, Some('U'), None, true).is_err());
    }
}

#[test]
fn to_latlon_northing_range() {
    for northing in [-100_000.0, -1.0] {
        let err = to_latlon(500_000.0, northing, 32, Some('U'), None, true).unwrap_err();
        assert!(matches!(err, Error::OutOfRange(_)));
        assert!(err.to_string().contains("northing"));
    }

    for northing in (10..10_000_000).step_by(1000) {
        to_latlon(500_000.0, f64::from(northing), 32, Some('U'), None, true).unwrap();
    }

    for northing in [10_000_001.0, 50_000_000.0] {
        assert!(to_latlon(500_000.0, northing, 32, Some('U'), None, true).is_err());
    }
}

#[test]
fn to_latlon_zone_number_range() {
    for zone in [-1, 0, 61, 1000] {
        let err = to_latlon(500_000.0, 5_000_000.0, zone, Some('U'), None, true).unwrap_err();
        assert!(matches!(err, Error::OutOfRange(_)));
        assert!(err.to_string().contains("zone number"));
    }

    // Zone number is checked even without strict
    assert!(to_latlon(500_000.0, 5_000_000.0, 61, Some('U'), None, false).is_err());

    for zone in 1..=60 {
        to_latlon(500_000.0, 5_000_000.0, zone, Some('U'), None, true).unwrap();
    }
}

#[test]
fn to_latlon_zone_letter_range() {
    for letter in ['A', 'B', 'I', 'O', 'Y', 'Z'] {
        let err = to_latlon(500_000.0, 5_000_000.0, 31, Some(letter), None, true).unwrap_err();
        assert!(matches!(err, Error::OutOfRange(_)));
        assert!(err.to_string().contains("zone letter"));
    }

    // There are no zone numbers 32, 34 and 36 in band X
    for zone in [32, 34, 36] {
        assert!(to_latlon(500_000.0, 5_000_000.0, zone, Some('X'), None, true).is_err());
    }

    for letter in 'C'..'X' {
        if letter != 'I' && letter != 'O' {
            to_latlon(500_000.0, 5_000_000.0, 32, Some(letter), None, true).unwrap();
        }
    }
}

#[test]
fn forced_zone_number_is_returned() {
    for forced in [1, 17, 33, 60] {
        let (_, _, zone_number, zone_letter) =
            from_latlon(50.77534556, 6.08388667, Some(forced), true).unwrap();
        assert_eq!(zone_number, forced);
        assert_eq!(zone_letter, Some('U'));
    }
}

// Zones 31X, 33X, 35X and 37X cover Svalbard
#[test]
fn svalbard_zones() {
    // Lower left and upper left of each widened zone
    assert_zone(72.0, 0.0, 31, 'X');
    assert_zone(72.0, 9.0, 33, 'X');
    assert_zone(72.0, 21.0, 35, 'X');
    assert_zone(72.0, 33.0, 37, 'X');
    assert_zone(72.0, 42.0, 38, 'X');

    assert_zone(84.0, 0.0, 31, 'X');
    assert_zone(84.0, 9.0, 33, 'X');
    assert_zone(84.0, 21.0, 35, 'X');
    assert_zone(84.0, 33.0, 37, 'X');
    assert_zone(84.0, 42.0, 38, 'X');

    // Inside
    assert_zone(72.0, 6.0, 31, 'X');
    assert_zone(72.0, 12.0, 33, 'X');
    assert_zone(72.0, 18.0, 33, 'X');
    assert_zone(72.0, 24.0, 35, 'X');
    assert_zone(72.0, 30.0, 35, 'X');
    assert_zone(72.0, 36.0, 37, 'X');
}

// Zone 32V is widened at the expense of 31V over southwest Norway
#[test]
fn norway_zones() {
    assert_zone(56.0, 0.0, 31, 'V');
    assert_zone(56.0, 2.999999, 31, 'V');

    assert_zone(56.0, 3.0, 32, 'V');
    assert_zone(56.0, 6.0, 32, 'V');
    assert_zone(56.0, 9.0, 32, 'V');
    assert_zone(56.0, 11.999999, 32, 'V');

    assert_zone(60.0, 3.0, 32, 'V');
    assert_zone(60.0, 11.999999, 32, 'V');

    assert_zone(63.999999, 3.0, 32, 'V');
    assert_zone(63.999999, 11.999999, 32, 'V');
}

#[test]
fn norway_zone_boundaries() {
    // Left of the widened band
    assert_zone(55.999999, 2.999999, 31, 'U');
    assert_zone(56.0, 2.999999, 31, 'V');
    assert_zone(60.0, 2.999999, 31, 'V');
    assert_zone(63.999999, 2.999999, 31, 'V');
    assert_zone(64.0, 2.999999, 31, 'W');

    // Right of it
    assert_zone(55.999999, 12.0, 33, 'U');
    assert_zone(56.0, 12.0, 33, 'V');
    assert_zone(60.0, 12.0, 33, 'V');
    assert_zone(63.999999, 12.0, 33, 'V');
    assert_zone(64.0, 12.0, 33, 'W');

    // Below it
    assert_zone(55.999999, 3.0, 31, 'U');
    assert_zone(55.999999, 6.0, 32, 'U');
    assert_zone(55.999999, 9.0, 32, 'U');
    assert_zone(55.999999, 11.999999, 32, 'U');
    assert_zone(55.999999, 12.0, 33, 'U');

    // Above it
    assert_zone(64.0, 3.0, 31, 'W');
    assert_zone(64.0, 6.0, 32, 'W');
    assert_zone(64.0, 9.0, 32, 'W');
    assert_zone(64.0, 11.999999, 32, 'W');
    assert_zone(64.0, 12.0, 33, 'W');
}

#[test]
fn zone_letter_bands() {
    assert_eq!(latitude_to_zone_letter(-80.0), Some('C'));
    assert_eq!(latitude_to_zone_letter(-72.0), Some('D'));
    assert_eq!(latitude_to_zone_letter(0.0), Some('N'));
    assert_eq!(latitude_to_zone_letter(64.0), Some('W'));
    assert_eq!(latitude_to_zone_letter(72.0), Some('X'));
    assert_eq!(latitude_to_zone_letter(84.0), Some('X'));

    assert_eq!(latitude_to_zone_letter(-80.1), None);
    assert_eq!(latitude_to_zone_letter(85.0), None);
}

#[test]
fn zone_numbers() {
    assert_eq!(latlon_to_zone_number(10.0, 10.0), 32);
    assert_eq!(latlon_to_zone_number(0.0, -180.0), 1);
    assert_eq!(latlon_to_zone_number(0.0, 179.999999), 60);

    // Norway and Svalbard exceptions
    assert_eq!(latlon_to_zone_number(60.0, 5.0), 32);
    assert_eq!(latlon_to_zone_number(75.0, 5.0), 31);
}

#[test]
fn central_longitudes() {
    assert_eq!(zone_number_to_central_longitude(1), -177);
    assert_eq!(zone_number_to_central_longitude(32), 9);
    assert_eq!(zone_number_to_central_longitude(60), 177);
}
