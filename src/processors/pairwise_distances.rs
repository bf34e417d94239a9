use crate::error::{Result, SiteError};
use crate::models::{Body, Site};
use serde::Serialize;
use std::collections::btree_map::{self, Entry};
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// Order-independent key for a pair of distinct site identifiers.
///
/// `first` is always the lexicographically smaller identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct PairKey {
    first: String,
    second: String,
}

impl PairKey {
    /// Returns `None` when both identifiers are the same site
    pub fn new(a: &str, b: &str) -> Option<Self> {
        let (first, second) = match a.cmp(b) {
            std::cmp::Ordering::Equal => return None,
            std::cmp::Ordering::Less => (a, b),
            std::cmp::Ordering::Greater => (b, a),
        };
        Some(Self {
            first: first.to_string(),
            second: second.to_string(),
        })
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.first, self.second)
    }
}

/// Flat record of one pairwise distance, for presentation and serialisation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceEntry {
    pub from: String,
    pub to: String,
    pub distance_km: f64,
}

/// One distance per unordered pair of sites, iterated in canonical key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DistanceMap {
    distances: BTreeMap<PairKey, f64>,
}

impl DistanceMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Distance between two sites in either order
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        PairKey::new(a, b).and_then(|key| self.distances.get(&key).copied())
    }

    pub fn iter(&self) -> btree_map::Iter<'_, PairKey, f64> {
        self.distances.iter()
    }

    /// Record a distance; a pair may only be recorded once.
    pub fn insert(&mut self, key: PairKey, distance: f64) -> Result<()> {
        match self.distances.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(distance);
                Ok(())
            }
            Entry::Occupied(slot) => {
                Err(SiteError::DuplicateIdentifier(slot.key().to_string()))
            }
        }
    }

    pub fn entries(&self) -> Vec<DistanceEntry> {
        self.distances
            .iter()
            .map(|(key, &distance_km)| DistanceEntry {
                from: key.first.clone(),
                to: key.second.clone(),
                distance_km,
            })
            .collect()
    }

    /// Smallest distance; ties go to the lexicographically smallest pair
    pub fn closest(&self) -> Option<(&PairKey, f64)> {
        self.extreme(|candidate, best| candidate < best)
    }

    /// Largest distance; ties go to the lexicographically smallest pair
    pub fn farthest(&self) -> Option<(&PairKey, f64)> {
        self.extreme(|candidate, best| candidate > best)
    }

    // Strict comparison while walking keys in order keeps the first of equal values.
    fn extreme<F>(&self, better: F) -> Option<(&PairKey, f64)>
    where
        F: Fn(f64, f64) -> bool,
    {
        let mut best: Option<(&PairKey, f64)> = None;
        for (key, &distance) in &self.distances {
            match best {
                Some((_, current)) if !better(distance, current) => {}
                _ => best = Some((key, distance)),
            }
        }
        best
    }
}

impl<'a> IntoIterator for &'a DistanceMap {
    type Item = (&'a PairKey, &'a f64);
    type IntoIter = btree_map::Iter<'a, PairKey, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.distances.iter()
    }
}

/// Great-circle distance for every unordered pair of distinct sites.
///
/// Produces `n * (n - 1) / 2` entries for `n` sites. Identifiers must be unique;
/// a repeated identifier is reported as [`SiteError::DuplicateIdentifier`].
/// Cost grows quadratically with the number of sites.
pub fn pairwise_distances(body: &Body, sites: &[Site]) -> Result<DistanceMap> {
    let mut seen = HashSet::with_capacity(sites.len());
    if let Some(duplicate) = sites
        .iter()
        .find(|site| !seen.insert(site.identifier.as_str()))
    {
        return Err(SiteError::DuplicateIdentifier(duplicate.identifier.clone()));
    }

    let mut distances = DistanceMap::new();

    for (i, site_one) in sites.iter().enumerate() {
        for site_two in &sites[i + 1..] {
            let key = PairKey::new(&site_one.identifier, &site_two.identifier)
                .ok_or_else(|| SiteError::DuplicateIdentifier(site_one.identifier.clone()))?;
            let distance = body.distance(&site_one.location, &site_two.location);
            distances.insert(key, distance)?;
        }
    }

    Ok(distances)
}

pub fn closest_pair(distances: &DistanceMap) -> Option<(&PairKey, f64)> {
    distances.closest()
}

pub fn farthest_pair(distances: &DistanceMap) -> Option<(&PairKey, f64)> {
    distances.farthest()
}
