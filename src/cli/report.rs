use crate::models::{Body, Site};
use crate::processors::{DistanceEntry, DistanceMap, PairKey, RowRejection};
use crate::utils::{decimal_to_dms, Axis};
use serde::Serialize;

/// Everything `sites --json` prints.
#[derive(Debug, Serialize)]
pub struct CatalogReport<'a> {
    pub radius_km: f64,
    pub sites: &'a [Site],
    pub distances: Vec<DistanceEntry>,
    pub closest: Option<DistanceEntry>,
    pub farthest: Option<DistanceEntry>,
    pub rejected_rows: usize,
}

impl<'a> CatalogReport<'a> {
    pub fn new(
        body: &Body,
        sites: &'a [Site],
        distances: &DistanceMap,
        rejected_rows: usize,
    ) -> Self {
        Self {
            radius_km: body.radius_km(),
            sites,
            distances: distances.entries(),
            closest: distances.closest().map(to_entry),
            farthest: distances.farthest().map(to_entry),
            rejected_rows,
        }
    }
}

fn to_entry((key, distance_km): (&PairKey, f64)) -> DistanceEntry {
    DistanceEntry {
        from: key.first().to_string(),
        to: key.second().to_string(),
        distance_km,
    }
}

/// Left-aligned columns separated by two spaces, like a tab writer.
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut output = render_row(headers.iter().copied(), &widths);
    for row in rows {
        output.push('\n');
        output.push_str(&render_row(row.iter().map(String::as_str), &widths));
    }
    output
}

fn render_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let line: String = cells
        .zip(widths)
        .map(|(cell, &width)| {
            let padding = width.saturating_sub(cell.chars().count());
            format!("{}{}  ", cell, " ".repeat(padding))
        })
        .collect();
    line.trim_end().to_string()
}

pub fn sites_table(sites: &[Site]) -> String {
    let with_labels = sites.iter().any(|s| s.label.is_some());

    let rows: Vec<Vec<String>> = sites
        .iter()
        .map(|site| {
            let mut row = Vec::with_capacity(4);
            if with_labels {
                row.push(site.label.clone().unwrap_or_default());
            }
            row.push(site.identifier.clone());
            row.push(format!("{:.6}", site.latitude()));
            row.push(format!("{:.6}", site.longitude()));
            row
        })
        .collect();

    let headers: &[&str] = if with_labels {
        &["Rover", "Site", "Latitude", "Longitude"]
    } else {
        &["Site", "Latitude", "Longitude"]
    };

    render_table(headers, &rows)
}

pub fn distances_table(distances: &DistanceMap) -> String {
    let rows: Vec<Vec<String>> = distances
        .iter()
        .map(|(key, distance)| {
            vec![
                key.first().to_string(),
                key.second().to_string(),
                format!("{:.3}", distance),
            ]
        })
        .collect();

    render_table(&["From", "To", "Distance (km)"], &rows)
}

/// One-line summary such as "Closest landing sites are 'A' and 'B' with a distance of 1.000 km"
pub fn extreme_summary(kind: &str, pair: Option<(&PairKey, f64)>) -> String {
    match pair {
        Some((key, distance)) => format!(
            "{} landing sites are '{}' and '{}' with a distance of {:.3} km",
            kind,
            key.first(),
            key.second(),
            distance
        ),
        None => format!("{} landing sites: fewer than two sites to compare", kind),
    }
}

/// Rows that were skipped, one per line with the source line number
pub fn rejections_summary(rejected: &[RowRejection]) -> String {
    let mut summary = format!("Skipped {} row(s):", rejected.len());
    for rejection in rejected {
        summary.push_str(&format!("\n  line {}: {}", rejection.line, rejection.error));
    }
    summary
}

pub fn distance_summary(from: &str, to: &str, body: &Body, distance: f64) -> String {
    format!(
        "Distance from {} to {} is {:.3} km (radius {} km)",
        from,
        to,
        distance,
        body.radius_km()
    )
}

pub fn conversion_summary(input: &str, decimal: f64, axis: Axis) -> String {
    format!(
        "Input:   {}\nDecimal: {:.6}\nDMS:     {}",
        input.trim(),
        decimal,
        decimal_to_dms(decimal, axis)
    )
}
