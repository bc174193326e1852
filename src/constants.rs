// GRS80 semi-major axis a
pub(crate) const GRS80_A: f64 = 6_378_137.;
// GRS80 flattening
#[allow(clippy::unreadable_literal)]
pub(crate) const GRS80_F: f64 = 1.0 / 298.257222101;

// UTM central scale factor
pub(crate) const UTM_K0: f64 = 9996.0 / 10_000.;

// Offsets keeping projected values positive within a zone/hemisphere
pub(crate) const FALSE_EASTING: f64 = 500_000.;
pub(crate) const FALSE_NORTHING: f64 = 10_000_000.;
