use crate::error::{Result, SiteError};
use crate::models::geo_point::GeoPoint;
use crate::utils::coordinates::parse_coordinate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// One delimited record as handed over by the reader, with its source line.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub line: u64,
    pub fields: Vec<String>,
}

impl RawRow {
    pub fn new(line: u64, fields: Vec<String>) -> Self {
        Self { line, fields }
    }

    /// Convenience for building rows from string literals
    pub fn from_fields<S: AsRef<str>>(line: u64, fields: &[S]) -> Self {
        Self {
            line,
            fields: fields.iter().map(|f| f.as_ref().to_string()).collect(),
        }
    }
}

/// Column positions of a catalogue variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordLayout {
    field_count: usize,
    identifier: usize,
    label: Option<usize>,
    latitude: usize,
    longitude: usize,
}

impl RecordLayout {
    /// `rover, site, latitude, longitude`, keyed by site name
    pub const LANDING_SITES: RecordLayout = RecordLayout {
        field_count: 4,
        identifier: 1,
        label: Some(0),
        latitude: 2,
        longitude: 3,
    };

    /// `name, latitude, longitude`
    pub const POINTS: RecordLayout = RecordLayout {
        field_count: 3,
        identifier: 0,
        label: None,
        latitude: 1,
        longitude: 2,
    };

    pub fn new(
        field_count: usize,
        identifier: usize,
        label: Option<usize>,
        latitude: usize,
        longitude: usize,
    ) -> Result<Self> {
        let columns = [Some(identifier), label, Some(latitude), Some(longitude)];
        let used: Vec<usize> = columns.into_iter().flatten().collect();

        if let Some(column) = used.iter().find(|&&column| column >= field_count) {
            return Err(SiteError::Config(format!(
                "Column {} is outside a {}-field record",
                column, field_count
            )));
        }

        for (i, column) in used.iter().enumerate() {
            if used[i + 1..].contains(column) {
                return Err(SiteError::Config(format!(
                    "Column {} is assigned to more than one field",
                    column
                )));
            }
        }

        Ok(Self {
            field_count,
            identifier,
            label,
            latitude,
            longitude,
        })
    }

    pub fn field_count(&self) -> usize {
        self.field_count
    }
}

impl Default for RecordLayout {
    fn default() -> Self {
        Self::LANDING_SITES
    }
}

/// Named record layouts selectable from the command line or settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutKind {
    #[default]
    LandingSites,
    Points,
}

impl LayoutKind {
    pub fn layout(&self) -> RecordLayout {
        match self {
            LayoutKind::LandingSites => RecordLayout::LANDING_SITES,
            LayoutKind::Points => RecordLayout::POINTS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct Site {
    #[validate(length(min = 1))]
    pub identifier: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(flatten)]
    pub location: GeoPoint,
}

impl Site {
    pub fn new(identifier: String, label: Option<String>, location: GeoPoint) -> Result<Self> {
        let site = Self {
            identifier,
            label,
            location,
        };
        site.validate()?;
        Ok(site)
    }

    /// Build a site from a raw record; every failure is returned, never logged
    pub fn from_row(row: &RawRow, layout: &RecordLayout) -> Result<Self> {
        if row.fields.len() != layout.field_count {
            return Err(SiteError::MalformedRow {
                expected: layout.field_count,
                found: row.fields.len(),
            });
        }

        let identifier = row.fields[layout.identifier].trim();
        if identifier.is_empty() {
            return Err(SiteError::EmptyIdentifier);
        }

        let label = layout
            .label
            .map(|column| row.fields[column].trim().to_string())
            .filter(|label| !label.is_empty());

        let latitude = parse_coordinate(&row.fields[layout.latitude])?;
        let longitude = parse_coordinate(&row.fields[layout.longitude])?;

        Self::new(
            identifier.to_string(),
            label,
            GeoPoint::new(latitude, longitude)?,
        )
    }

    pub fn latitude(&self) -> f64 {
        self.location.latitude()
    }

    pub fn longitude(&self) -> f64 {
        self.location.longitude()
    }
}
