use lazy_static::lazy_static;

use crate::constants::{GRS80_A, GRS80_F, UTM_K0};

lazy_static! {
    /// Shared projection engine. All derived constants are computed once on
    /// first use and never mutated, so concurrent access needs no locking.
    pub(crate) static ref GRS80: TransverseMercator = TransverseMercator::grs80();
}

/// Transverse Mercator projection on an ellipsoid, formulated as truncated
/// power series in the footpoint/central-meridian offsets.
///
/// Every field is a pure function of the semi-major axis and flattening;
/// swapping the ellipsoid means rebuilding the whole struct.
pub(crate) struct TransverseMercator {
    a: f64,
    k0: f64,
    // First numerical eccentricity squared (e^2)
    e: f64,
    // Second numerical eccentricity squared (e'^2)
    e_p2: f64,
    // Third flattening n
    e_third: f64,
    // Meridian distance from latitude
    m1: f64,
    m2: f64,
    m3: f64,
    m4: f64,
    m5: f64,
    m6: f64,
    // Latitude from meridian distance
    p2: f64,
    p3: f64,
    p4: f64,
    p5: f64,
    p6: f64,
}

impl TransverseMercator {
    pub fn grs80() -> TransverseMercator {
        let e = 2.0 * GRS80_F - GRS80_F * GRS80_F;
        let e2 = e * e;
        let e3 = e2 * e;
        let e4 = e3 * e;
        let e5 = e4 * e;
        let e_p2 = e / (1.0 - e);

        let sqrt_e = (1.0 - e).sqrt();
        let e_third = (1.0 - sqrt_e) / (1.0 + sqrt_e);
        let et2 = e_third * e_third;
        let et3 = et2 * e_third;
        let et4 = et3 * e_third;
        let et5 = et4 * e_third;

        // Deakin, R. E. (2006): Meridian Distance, School of Mathematical &
        //   Geospatial Sciences, RMIT University, Melbourne, March 2006.
        // Weintritt, A. (2013): So, What is Actually the Distance from the
        //   Equator to the Pole? - Overview of Meridian Distance
        //   Approximations, TransNav, Volume 7, Number 2, June 2013.
        let m1 = 1.0 - e / 4.0 - 3.0 * e2 / 64.0 - 5.0 * e3 / 256.0
            - 175.0 * e4 / 16384.0
            - 441.0 * e5 / 65536.0;
        let m2 = 3.0 / 8.0
            * (e + e2 / 4.0 + 15.0 * e3 / 128.0 + 35.0 * e4 / 512.0 + 735.0 * e5 / 16384.0);
        let m3 = 15.0 / 256.0 * (e2 + 3.0 * e3 / 4.0 + 35.0 * e4 / 64.0 + 105.0 * e5 / 256.0);
        let m4 = 35.0 / 3072.0 * (e3 + 5.0 * e4 / 4.0 + 315.0 * e5 / 256.0);
        let m5 = 315.0 / 131_072.0 * (e4 + 7.0 * e5 / 4.0);
        let m6 = 693.0 / 1_310_720.0 * e5;

        // Deakin, R. E. (2012): Great Elliptic Arc Distance, School of
        //   Mathematical & Geospatial Sciences, RMIT University, Melbourne,
        //   January 2012.
        let p2 = 3.0 / 2.0 * e_third - 27.0 / 32.0 * et3 + 269.0 / 512.0 * et5;
        let p3 = 21.0 / 16.0 * et2 - 55.0 / 32.0 * et4;
        let p4 = 151.0 / 96.0 * et3 - 417.0 / 128.0 * et5;
        let p5 = 1097.0 / 512.0 * et4;
        let p6 = 8011.0 / 2560.0 * et5;

        Self {
            a: GRS80_A,
            k0: UTM_K0,
            e,
            e_p2,
            e_third,
            m1,
            m2,
            m3,
            m4,
            m5,
            m6,
            p2,
            p3,
            p4,
            p5,
            p6,
        }
    }

    /// Forward projection. Takes the central meridian of the zone and a
    /// geodetic coordinate in degrees, and returns raw (x, y) in meters
    /// relative to the central meridian and the equator; false easting and
    /// northing are the caller's concern.
    ///
    /// Kelly, Kevin M. (1986): Coordinate Transformations - Universal
    ///   Transverse Mercator/Geographic. Ontario Ministry of Natural
    ///   Resources. March 1986.
    /// Snyder, John P. (1987): Map Projections - A Working Manual, U.S.
    ///   Geological Survey Professional Paper 1395, p.60ff, Washington.
    /// Hofmann-Wellenhof, B.; Kienast, G.; Lichtenegger, H. (1994): GPS in
    ///   der Praxis, Springer-Verlag Wien New York, p.97ff, Wien.
    pub fn from_latlon(&self, lon0: f64, lat: f64, lon: f64) -> (f64, f64) {
        let lat_rad = lat.to_radians();
        let lat_sin = lat_rad.sin();
        let lat_cos = lat_rad.cos();

        let lat_tan = lat_rad.tan();
        let lat_tan2 = lat_tan * lat_tan;
        let lat_tan4 = lat_tan2 * lat_tan2;
        let lat_tan6 = lat_tan4 * lat_tan2;

        let n = self.a / (1.0 - self.e * lat_sin * lat_sin).sqrt();
        let c = self.e_p2 * lat_cos * lat_cos;
        let c2 = c * c;
        let c3 = c2 * c;
        let c4 = c3 * c;

        let a = lat_cos * (lon.to_radians() - lon0.to_radians());

        let m = self.a
            * (self.m1 * lat_rad - self.m2 * (2.0 * lat_rad).sin()
                + self.m3 * (4.0 * lat_rad).sin()
                - self.m4 * (6.0 * lat_rad).sin()
                + self.m5 * (8.0 * lat_rad).sin()
                - self.m6 * (10.0 * lat_rad).sin());

        let x = self.k0
            * n
            * (a + a.powi(3) / 6.0 * (1.0 - lat_tan2 + c)
                + a.powi(5) / 120.0
                    * (5.0 - 18.0 * lat_tan2 + lat_tan4 + 14.0 * c + 13.0 * c2 + 4.0 * c3
                        - 58.0 * c * lat_tan2
                        - 64.0 * c2 * lat_tan2
                        - 24.0 * lat_tan2 * c3)
                + a.powi(7) / 5040.0 * (61.0 - 479.0 * lat_tan2 + 179.0 * lat_tan4 - lat_tan6));

        let y = self.k0
            * (m + n
                * lat_tan
                * (a.powi(2) / 2.0
                    + a.powi(4) / 24.0 * (5.0 - lat_tan2 + 9.0 * c + 4.0 * c2)
                    + a.powi(6) / 720.0
                        * (61.0 - 58.0 * lat_tan2 + lat_tan4 + 270.0 * c + 445.0 * c2
                            + 324.0 * c3
                            + 88.0 * c4
                            - 330.0 * c * lat_tan2
                            - 680.0 * lat_tan2 * c2
                            - 600.0 * lat_tan2 * c3
                            - 192.0 * lat_tan2 * c4)
                    + a.powi(8) / 40320.0
                        * (1385.0 - 3111.0 * lat_tan2 + 543.0 * lat_tan4 - lat_tan6)));

        (x, y)
    }

    /// Inverse projection. Takes the central meridian of the zone and raw
    /// (x, y) in meters (false offsets already removed, y negative south of
    /// the equator), and returns (latitude, longitude) in degrees.
    pub fn to_latlon(&self, lon0: f64, x: f64, y: f64) -> (f64, f64) {
        let m = y / self.k0;
        let mu = m / (self.a * self.m1);

        // Footpoint latitude
        let p_rad = mu
            + self.p2 * (2.0 * mu).sin()
            + self.p3 * (4.0 * mu).sin()
            + self.p4 * (6.0 * mu).sin()
            + self.p5 * (8.0 * mu).sin()
            + self.p6 * (10.0 * mu).sin();

        let p_sin = p_rad.sin();
        let p_sin2 = p_sin * p_sin;
        let p_cos = p_rad.cos();

        let p_tan = p_rad.tan();
        let p_tan2 = p_tan * p_tan;
        let p_tan4 = p_tan2 * p_tan2;
        let p_tan6 = p_tan4 * p_tan2;

        let n = self.a / (1.0 - self.e * p_sin2).sqrt();
        let r = (1.0 - self.e) / (1.0 - self.e * p_sin2);

        let c = self.e_third * p_cos * p_cos;
        let c2 = c * c;
        let c3 = c2 * c;
        let c4 = c3 * c;

        let d = x / (n * self.k0);

        let latitude = p_rad
            - (p_tan / r)
                * (d.powi(2) / 2.0
                    - d.powi(4) / 24.0 * (5.0 + 3.0 * p_tan2 + c - 4.0 * c2 - 9.0 * p_tan2 * c)
                    + d.powi(6) / 720.0
                        * (61.0 + 90.0 * p_tan2 + 45.0 * p_tan4 + 46.0 * c - 3.0 * c2
                            + 100.0 * c3
                            + 88.0 * c4
                            - 252.0 * p_tan2 * c
                            - 66.0 * p_tan2 * c2
                            + 84.0 * p_tan4 * c3
                            - 192.0 * p_tan2 * c4
                            - 90.0 * p_tan4 * c
                            + 225.0 * p_tan4 * c2)
                    - d.powi(8) / 40320.0
                        * (1385.0 + 3633.0 * p_tan2 + 4095.0 * p_tan4 + 1575.0 * p_tan6));

        let longitude = (d - d.powi(3) / 6.0 * (1.0 + 2.0 * p_tan2 + c)
            + d.powi(5) / 120.0
                * (5.0 + 28.0 * p_tan2 + 24.0 * p_tan4 + 6.0 * c - 3.0 * c2 - 4.0 * c3
                    + 8.0 * p_tan2 * c
                    + 4.0 * p_tan2 * c2
                    + 24.0 * p_tan2 * c3)
            - d.powi(7) / 5040.0 * (61.0 + 662.0 * p_tan2 + 1320.0 * p_tan4 + 720.0 * p_tan6))
            / p_cos;

        (latitude.to_degrees(), longitude.to_degrees() + lon0)
    }
}
