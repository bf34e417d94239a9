/// Mean body radii in kilometres
pub const EARTH_RADIUS_KM: f64 = 6371.0;
pub const MARS_RADIUS_KM: f64 = 3389.5;
pub const MOON_RADIUS_KM: f64 = 1737.4;

/// Geographic bounds (degrees)
pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
/// Longitudes are accepted in both the ±180 and the 0..360 east-positive conventions.
pub const MIN_LONGITUDE: f64 = -360.0;
pub const MAX_LONGITUDE: f64 = 360.0;

/// Sexagesimal units
pub const MINUTES_PER_DEGREE: f64 = 60.0;
pub const SECONDS_PER_DEGREE: f64 = 3600.0;

/// Decimal places kept for arc-seconds when rendering DMS strings
pub const DMS_SECONDS_PRECISION: usize = 3;

/// Input defaults
pub const DEFAULT_DELIMITER: u8 = b',';
pub const LANDING_SITES_FILE: &str = "data/mars_landing_sites.csv";
