use crate::error::{Result, SiteError};
use crate::utils::constants::{MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};
use crate::utils::coordinates::parse_coordinate;
use serde::Serialize;
use std::cmp::Ordering;
use std::str::FromStr;
use validator::Validate;

/// A point on a sphere in decimal degrees.
///
/// Longitude accepts both the ±180 and the 0..360 east-positive conventions,
/// since Mars catalogues commonly use the latter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Validate)]
pub struct GeoPoint {
    #[validate(range(min = MIN_LATITUDE, max = MAX_LATITUDE))]
    latitude: f64,

    #[validate(range(min = MIN_LONGITUDE, max = MAX_LONGITUDE))]
    longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(SiteError::location_pair(
                &format!("({}, {})", latitude, longitude),
                "latitude and longitude must be finite",
            ));
        }

        let point = Self {
            latitude,
            longitude,
        };
        point.validate()?;
        Ok(point)
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Total order on (latitude, longitude), used to evaluate distances in a fixed order
    pub(crate) fn canonical_cmp(&self, other: &GeoPoint) -> Ordering {
        self.latitude
            .total_cmp(&other.latitude)
            .then_with(|| self.longitude.total_cmp(&other.longitude))
    }
}

impl FromStr for GeoPoint {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self> {
        parse_location(s)
    }
}

/// Parse a `(<latitude>, <longitude>)` pair such as `(51°30'N, 0°08'W)`.
///
/// The enclosing parentheses are optional, but must be balanced when present.
pub fn parse_location(location: &str) -> Result<GeoPoint> {
    let trimmed = location.trim();

    let inner = match (trimmed.strip_prefix('('), trimmed.ends_with(')')) {
        (Some(rest), true) => &rest[..rest.len() - 1],
        (None, false) => trimmed,
        _ => {
            return Err(SiteError::location_pair(
                location,
                "unbalanced parentheses",
            ))
        }
    };

    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    if parts.len() != 2 {
        return Err(SiteError::location_pair(
            location,
            format!(
                "expected a latitude and a longitude separated by a comma, found {} part(s)",
                parts.len()
            ),
        ));
    }

    let latitude = parse_coordinate(parts[0])?;
    let longitude = parse_coordinate(parts[1])?;

    GeoPoint::new(latitude, longitude)
}
