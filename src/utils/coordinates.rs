use crate::error::{CoordinateIssue, Result, SiteError};
use crate::utils::constants::{DMS_SECONDS_PRECISION, MINUTES_PER_DEGREE, SECONDS_PER_DEGREE};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Shape of a degrees/minutes/seconds coordinate.
///
/// Degrees and minutes must be separated by a degree symbol or whitespace, so a
/// bare integer such as `135` is never mistaken for `1°35'`.
const DMS_PATTERN: &str = concat!(
    r"^[+-]?[0-9]{1,3}(?:\.[0-9]+)?",
    r"(?:°\s*|\s+)[0-9]{1,2}(?:\.[0-9]+)?",
    r#"(?:['′]|(?:['′]\s*|\s+)[0-9]{1,2}(?:\.[0-9]+)?["″]?)?"#,
    r"\s*[NSEW]?$",
);

fn dms_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(DMS_PATTERN).expect("DMS pattern is a valid regex"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompassDirection {
    N,
    S,
    E,
    W,
}

impl CompassDirection {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'N' => Some(CompassDirection::N),
            'S' => Some(CompassDirection::S),
            'E' => Some(CompassDirection::E),
            'W' => Some(CompassDirection::W),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            CompassDirection::N => 'N',
            CompassDirection::S => 'S',
            CompassDirection::E => 'E',
            CompassDirection::W => 'W',
        }
    }

    /// South and west are the negative hemispheres.
    pub fn is_negative(&self) -> bool {
        matches!(self, CompassDirection::S | CompassDirection::W)
    }
}

impl fmt::Display for CompassDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Which compass letters apply when rendering a decimal value as DMS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    fn direction_for(&self, decimal: f64) -> CompassDirection {
        match (self, decimal < 0.0) {
            (Axis::Latitude, false) => CompassDirection::N,
            (Axis::Latitude, true) => CompassDirection::S,
            (Axis::Longitude, false) => CompassDirection::E,
            (Axis::Longitude, true) => CompassDirection::W,
        }
    }
}

/// An angle in degrees, minutes and seconds with an optional hemisphere letter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DmsAngle {
    pub degrees: f64,
    pub minutes: f64,
    pub seconds: f64,
    pub direction: Option<CompassDirection>,
}

impl DmsAngle {
    pub fn new(
        degrees: f64,
        minutes: f64,
        seconds: f64,
        direction: Option<CompassDirection>,
    ) -> std::result::Result<Self, CoordinateIssue> {
        if !degrees.is_finite() || !minutes.is_finite() || !seconds.is_finite() {
            return Err(CoordinateIssue::NonFinite);
        }

        // The sign lives in the direction (or the caller), never in the magnitude.
        if degrees < 0.0 {
            return Err(CoordinateIssue::OutOfRange {
                component: "degrees",
                value: degrees,
            });
        }

        if !(0.0..MINUTES_PER_DEGREE).contains(&minutes) {
            return Err(CoordinateIssue::OutOfRange {
                component: "minutes",
                value: minutes,
            });
        }

        if !(0.0..60.0).contains(&seconds) {
            return Err(CoordinateIssue::OutOfRange {
                component: "seconds",
                value: seconds,
            });
        }

        Ok(Self {
            degrees,
            minutes,
            seconds,
            direction,
        })
    }

    /// Split a signed decimal value into DMS, choosing the hemisphere from `axis`.
    pub fn from_decimal(decimal: f64, axis: Axis) -> Self {
        let direction = axis.direction_for(decimal);
        let abs_decimal = decimal.abs();

        let degrees = abs_decimal.floor();
        let minutes_decimal = (abs_decimal - degrees) * MINUTES_PER_DEGREE;
        let minutes = minutes_decimal.floor();
        let seconds = (minutes_decimal - minutes) * 60.0;

        Self {
            degrees,
            minutes,
            seconds,
            direction: Some(direction),
        }
    }

    /// Signed decimal degrees; S and W are negative.
    pub fn to_decimal(&self) -> f64 {
        let decimal =
            self.degrees + self.minutes / MINUTES_PER_DEGREE + self.seconds / SECONDS_PER_DEGREE;

        match self.direction {
            Some(direction) if direction.is_negative() => -decimal,
            _ => decimal,
        }
    }
}

impl fmt::Display for DmsAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Round once on the total so that 59.9996" carries into the next minute.
        let scale = 10f64.powi(DMS_SECONDS_PRECISION as i32);
        let total = ((self.degrees * SECONDS_PER_DEGREE + self.minutes * 60.0 + self.seconds)
            * scale)
            .round();

        let degrees = (total / (SECONDS_PER_DEGREE * scale)).floor();
        let remainder = total - degrees * SECONDS_PER_DEGREE * scale;
        let minutes = (remainder / (60.0 * scale)).floor();
        let seconds = (remainder - minutes * 60.0 * scale) / scale;

        write!(
            f,
            "{}°{}'{:.*}\"",
            degrees as u64, minutes as u64, DMS_SECONDS_PRECISION, seconds
        )?;

        if let Some(direction) = self.direction {
            write!(f, "{}", direction)?;
        }

        Ok(())
    }
}

/// Returns true when the (trimmed) text has the shape of a DMS coordinate
pub fn is_dms_coordinate(coord_str: &str) -> bool {
    dms_pattern().is_match(coord_str)
}

fn is_dms_symbol(c: char) -> bool {
    matches!(c, '°' | '\'' | '"' | '′' | '″')
}

/// Parse a DMS string into its sign and angle.
///
/// The sign is reported separately because a DMS angle only carries a hemisphere.
pub fn parse_dms(coord_str: &str) -> Result<(bool, DmsAngle)> {
    let trimmed = coord_str.trim();

    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let direction = unsigned
        .chars()
        .next_back()
        .and_then(CompassDirection::from_char);
    let body = match direction {
        // Compass letters are ASCII, so dropping one byte keeps a char boundary.
        Some(_) => &unsigned[..unsigned.len() - 1],
        None => unsigned,
    };

    if negative && direction.is_some() {
        return Err(SiteError::coordinate(
            coord_str,
            CoordinateIssue::ConflictingSign,
        ));
    }

    let cleaned: String = body
        .chars()
        .map(|c| if is_dms_symbol(c) { ' ' } else { c })
        .collect();
    let fields: Vec<&str> = cleaned.split_whitespace().collect();

    if !(2..=3).contains(&fields.len()) {
        return Err(SiteError::coordinate(
            coord_str,
            CoordinateIssue::UnexpectedFieldCount {
                count: fields.len(),
            },
        ));
    }

    let values = fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            field.parse::<f64>().map_err(|_| {
                SiteError::coordinate(
                    coord_str,
                    CoordinateIssue::InvalidField {
                        field: field.to_string(),
                        position: index + 1,
                    },
                )
            })
        })
        .collect::<Result<Vec<f64>>>()?;

    let seconds = values.get(2).copied().unwrap_or(0.0);
    let angle = DmsAngle::new(values[0], values[1], seconds, direction)
        .map_err(|issue| SiteError::coordinate(coord_str, issue))?;

    Ok((negative, angle))
}

/// Parse a coordinate that might be in DMS or decimal format
///
/// # Examples
/// ```
/// use landing_sites::utils::parse_coordinate;
///
/// let decimal = parse_coordinate("135°54'0\" E").unwrap();
/// assert!((decimal - 135.9).abs() < 1e-9);
/// assert_eq!(parse_coordinate("-12.25").unwrap(), -12.25);
/// ```
pub fn parse_coordinate(coord_str: &str) -> Result<f64> {
    let trimmed = coord_str.trim();

    if is_dms_coordinate(trimmed) {
        let (negative, angle) = parse_dms(trimmed)?;
        let decimal = angle.to_decimal();
        return Ok(if negative { -decimal } else { decimal });
    }

    let value = trimmed
        .parse::<f64>()
        .map_err(|_| SiteError::coordinate(coord_str, CoordinateIssue::UnrecognisedFormat))?;

    if !value.is_finite() {
        return Err(SiteError::coordinate(coord_str, CoordinateIssue::NonFinite));
    }

    Ok(value)
}

/// Convert decimal degrees to a DMS string such as `51°30'0.000"N`
pub fn decimal_to_dms(decimal: f64, axis: Axis) -> String {
    DmsAngle::from_decimal(decimal, axis).to_string()
}
