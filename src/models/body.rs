use crate::error::{Result, SiteError};
use crate::models::geo_point::{parse_location, GeoPoint};
use crate::utils::constants::{EARTH_RADIUS_KM, MARS_RADIUS_KM, MOON_RADIUS_KM};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A spherical world, parameterised by its mean radius in kilometres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Body {
    radius_km: f64,
}

impl Body {
    pub const EARTH: Body = Body {
        radius_km: EARTH_RADIUS_KM,
    };
    pub const MARS: Body = Body {
        radius_km: MARS_RADIUS_KM,
    };
    pub const MOON: Body = Body {
        radius_km: MOON_RADIUS_KM,
    };

    pub fn new(radius_km: f64) -> Result<Self> {
        if !radius_km.is_finite() || radius_km <= 0.0 {
            return Err(SiteError::InvalidRadius(radius_km));
        }
        Ok(Self { radius_km })
    }

    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }

    /// Central angle between two points in radians (spherical law of cosines).
    ///
    /// Points are evaluated in a canonical order so `a→b` and `b→a` agree to the bit,
    /// and identical points are exactly zero apart.
    pub fn central_angle(a: &GeoPoint, b: &GeoPoint) -> f64 {
        let (first, second) = match a.canonical_cmp(b) {
            Ordering::Equal => return 0.0,
            Ordering::Less => (a, b),
            Ordering::Greater => (b, a),
        };

        let (sin_lat1, cos_lat1) = first.latitude().to_radians().sin_cos();
        let (sin_lat2, cos_lat2) = second.latitude().to_radians().sin_cos();
        let cos_delta_lon = (first.longitude() - second.longitude()).to_radians().cos();

        // Rounding can push the argument just past ±1 for near-identical or antipodal points.
        let cos_angle =
            (sin_lat1 * sin_lat2 + cos_lat1 * cos_lat2 * cos_delta_lon).clamp(-1.0, 1.0);
        cos_angle.acos()
    }

    /// Great-circle distance between two points in kilometres
    pub fn distance(&self, a: &GeoPoint, b: &GeoPoint) -> f64 {
        self.radius_km * Self::central_angle(a, b)
    }

    /// Distance between two location strings such as `(51°30'N, 0°08'W)`.
    ///
    /// Any parse failure is returned to the caller.
    pub fn distance_between_location_strings(&self, from: &str, to: &str) -> Result<f64> {
        let from = parse_location(from)?;
        let to = parse_location(to)?;
        Ok(self.distance(&from, &to))
    }
}

/// Bodies with a well-known mean radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum KnownBody {
    Earth,
    Mars,
    Moon,
}

impl KnownBody {
    pub fn body(&self) -> Body {
        match self {
            KnownBody::Earth => Body::EARTH,
            KnownBody::Mars => Body::MARS,
            KnownBody::Moon => Body::MOON,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            KnownBody::Earth => "Earth",
            KnownBody::Mars => "Mars",
            KnownBody::Moon => "Moon",
        }
    }
}

impl std::fmt::Display for KnownBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn point(latitude: f64, longitude: f64) -> GeoPoint {
        GeoPoint::new(latitude, longitude).unwrap()
    }

    #[test]
    fn test_london_to_paris() {
        let distance = Body::EARTH
            .distance_between_location_strings("(51°30'N, 0°08'W)", "(48°51'N, 2°21'E)")
            .unwrap();
        assert!((distance - 343.615_051_753).abs() < 1e-6, "{distance}");
    }

    #[test]
    fn test_mount_sharp_to_olympus_mons() {
        let distance = Body::MARS
            .distance_between_location_strings("(5°4'48\"S, 137°51'E)", "(18°39'N, 226°12'E)")
            .unwrap();
        assert!((distance - 5328.082_175_770).abs() < 1e-6, "{distance}");
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let samples = [
            point(51.5, -0.133333),
            point(-4.5895, 137.4417),
            point(89.9999, 12.0),
            point(0.1, 0.1),
            point(-33.8688, 151.2093),
        ];
        for p in samples {
            assert_eq!(Body::EARTH.distance(&p, &p), 0.0, "{p:?}");
        }
    }

    #[test]
    fn test_distance_is_symmetric() {
        let samples = [
            point(51.5, -0.133333),
            point(48.85, 2.35),
            point(-4.5895, 137.4417),
            point(18.65, 226.2),
            point(-89.0, -179.5),
        ];
        for a in &samples {
            for b in &samples {
                assert_eq!(Body::MARS.distance(a, b), Body::MARS.distance(b, a));
            }
        }
    }

    #[test]
    fn test_triangle_inequality() {
        let samples = [
            point(51.5, -0.133333),
            point(48.85, 2.35),
            point(-33.8688, 151.2093),
            point(0.0, 0.0),
            point(0.0, 180.0),
            point(90.0, 0.0),
        ];
        for a in &samples {
            for b in &samples {
                for c in &samples {
                    let ab = Body::EARTH.distance(a, b);
                    let bc = Body::EARTH.distance(b, c);
                    let ac = Body::EARTH.distance(a, c);
                    assert!(ac <= ab + bc + 1e-3, "{a:?} {b:?} {c:?}");
                }
            }
        }
    }

    #[test]
    fn test_antipodal_points() {
        let distance = Body::EARTH.distance(&point(0.0, 0.0), &point(0.0, 180.0));
        assert!((distance - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_radius() {
        assert!(matches!(Body::new(0.0), Err(SiteError::InvalidRadius(_))));
        assert!(matches!(Body::new(-1.0), Err(SiteError::InvalidRadius(_))));
        assert!(Body::new(f64::NAN).is_err());
        assert_eq!(Body::new(3389.5).unwrap(), Body::MARS);
    }

    #[test]
    fn test_query_surfaces_parse_errors() {
        assert!(matches!(
            Body::EARTH.distance_between_location_strings("(1234xyz, 0)", "(0, 0)"),
            Err(SiteError::MalformedCoordinate { .. })
        ));
        assert!(matches!(
            Body::EARTH.distance_between_location_strings("(0, 0)", "0"),
            Err(SiteError::MalformedLocationPair { .. })
        ));
    }

    fn any_point() -> impl Strategy<Value = GeoPoint> {
        (-90.0..=90.0f64, -180.0..=180.0f64).prop_map(|(lat, lon)| point(lat, lon))
    }

    proptest! {
        #[test]
        fn prop_distance_is_symmetric(a in any_point(), b in any_point()) {
            prop_assert_eq!(Body::MARS.distance(&a, &b), Body::MARS.distance(&b, &a));
        }

        #[test]
        fn prop_distance_is_bounded(a in any_point(), b in any_point()) {
            let distance = Body::EARTH.distance(&a, &b);
            prop_assert!(distance >= 0.0);
            prop_assert!(distance <= std::f64::consts::PI * Body::EARTH.radius_km() + 1e-9);
        }

        #[test]
        fn prop_triangle_inequality(a in any_point(), b in any_point(), c in any_point()) {
            let ab = Body::EARTH.distance(&a, &b);
            let bc = Body::EARTH.distance(&b, &c);
            let ac = Body::EARTH.distance(&a, &c);
            prop_assert!(ac <= ab + bc + 1e-3, "{} > {} + {}", ac, ab, bc);
        }

        #[test]
        fn prop_distance_to_self_is_zero(a in any_point()) {
            prop_assert_eq!(Body::EARTH.distance(&a, &a), 0.0);
        }
    }
}
