use crate::error::SiteError;
use crate::models::{RawRow, RecordLayout, Site};
use std::collections::HashSet;

/// A row that did not become a site, and why.
#[derive(Debug)]
pub struct RowRejection {
    pub line: u64,
    pub error: SiteError,
}

/// Sites built from a batch of rows, plus every row that was turned away.
#[derive(Debug, Default)]
pub struct CatalogBuild {
    pub sites: Vec<Site>,
    pub rejected: Vec<RowRejection>,
}

impl CatalogBuild {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

pub struct CatalogBuilder {
    layout: RecordLayout,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self {
            layout: RecordLayout::LANDING_SITES,
        }
    }

    pub fn with_layout(layout: RecordLayout) -> Self {
        Self { layout }
    }

    /// Validate each row into a site; bad rows are collected, never fatal.
    ///
    /// Identifiers are unique within a catalogue: the first row wins and later
    /// rows with the same identifier are rejected as duplicates.
    pub fn build<'a, I>(&self, rows: I) -> CatalogBuild
    where
        I: IntoIterator<Item = &'a RawRow>,
    {
        let mut build = CatalogBuild::default();
        let mut seen: HashSet<String> = HashSet::new();

        for row in rows {
            let outcome = Site::from_row(row, &self.layout).and_then(|site| {
                if seen.insert(site.identifier.clone()) {
                    Ok(site)
                } else {
                    Err(SiteError::DuplicateIdentifier(site.identifier))
                }
            });

            match outcome {
                Ok(site) => build.sites.push(site),
                Err(error) => build.rejected.push(RowRejection {
                    line: row.line,
                    error,
                }),
            }
        }

        build
    }
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a catalogue from raw rows using `layout`
pub fn build_catalog(rows: &[RawRow], layout: &RecordLayout) -> CatalogBuild {
    CatalogBuilder::with_layout(*layout).build(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<RawRow> {
        vec![
            RawRow::from_fields(2, &["Spirit", "Gusev Crater", "14°34'6.2\"S", "175°28'21.5\"E"]),
            RawRow::from_fields(3, &["Opportunity", "Meridiani Planum", "1.9462", "354.4734"]),
            RawRow::from_fields(4, &["Sojourner", "19.13", "-33.22"]),
            RawRow::from_fields(5, &["Curiosity", "Gale Crater", "4°35'31\"S", "137°26'25\"E"]),
            RawRow::from_fields(6, &["Phoenix", "Green Valley", "1234xyz", "234.25"]),
        ]
    }

    #[test]
    fn test_build_skips_bad_rows() {
        let build = build_catalog(&rows(), &RecordLayout::LANDING_SITES);

        let identifiers: Vec<&str> = build.sites.iter().map(|s| s.identifier.as_str()).collect();
        assert_eq!(
            identifiers,
            vec!["Gusev Crater", "Meridiani Planum", "Gale Crater"]
        );

        assert_eq!(build.rejected.len(), 2);
        assert_eq!(build.rejected[0].line, 4);
        assert!(matches!(
            build.rejected[0].error,
            SiteError::MalformedRow {
                expected: 4,
                found: 3
            }
        ));
        assert_eq!(build.rejected[1].line, 6);
        assert!(matches!(
            build.rejected[1].error,
            SiteError::MalformedCoordinate { .. }
        ));
        assert!(!build.is_clean());
    }

    #[test]
    fn test_duplicate_identifier_first_wins() {
        let rows = vec![
            RawRow::from_fields(1, &["Viking 1", "Chryse Planitia", "22.27", "312.05"]),
            RawRow::from_fields(2, &["Pathfinder", "Chryse Planitia", "19.13", "326.78"]),
        ];
        let build = CatalogBuilder::new().build(&rows);

        assert_eq!(build.sites.len(), 1);
        assert_eq!(build.sites[0].label.as_deref(), Some("Viking 1"));
        assert_eq!(build.rejected.len(), 1);
        assert!(matches!(
            &build.rejected[0].error,
            SiteError::DuplicateIdentifier(id) if id == "Chryse Planitia"
        ));
    }

    #[test]
    fn test_empty_input() {
        let rows: Vec<RawRow> = Vec::new();
        let build = CatalogBuilder::default().build(&rows);
        assert!(build.sites.is_empty());
        assert!(build.is_clean());
    }
}
