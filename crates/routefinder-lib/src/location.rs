use std::collections::HashMap;

use serde::Serialize;

use crate::error::{Error, Result};

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// A named point on the globe, in decimal degrees.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    /// Create a location, rejecting coordinates outside -90..=90 / -180..=180.
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Result<Self> {
        let name = name.into();
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);
        if !valid {
            return Err(Error::InvalidCoordinates {
                name,
                latitude,
                longitude,
            });
        }

        Ok(Self {
            name,
            latitude,
            longitude,
        })
    }
}

/// Lookup table from location name to its coordinates.
#[derive(Debug, Clone, Default)]
pub struct LocationRegistry {
    locations: HashMap<String, Location>,
}

impl LocationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a location, replacing any earlier entry with the same name.
    pub fn insert(&mut self, location: Location) -> Option<Location> {
        self.locations.insert(location.name.clone(), location)
    }

    /// Lookup a location by its case-sensitive name.
    pub fn get(&self, name: &str) -> Option<&Location> {
        self.locations.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.locations.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Iterate over all registered names in arbitrary order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.locations.keys().map(String::as_str)
    }
}

impl FromIterator<Location> for LocationRegistry {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        let mut registry = Self::new();
        for location in iter {
            registry.insert(location);
        }
        registry
    }
}

/// Rank `candidates` by Jaro-Winkler similarity to `name`, dropping weak matches.
pub(crate) fn rank_similar<'a>(
    name: &str,
    candidates: impl Iterator<Item = &'a str>,
    limit: usize,
) -> Vec<String> {
    let needle = name.to_lowercase();
    let mut scored: Vec<(f64, &str)> = candidates
        .map(|candidate| {
            let score = strsim::jaro_winkler(&needle, &candidate.to_lowercase());
            (score, candidate)
        })
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
