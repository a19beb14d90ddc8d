use crate::series_key::SeriesKey;
use serde::{Deserialize, Serialize};

/// Computed averages keyed by output key, in the order the keys became
/// ready.
///
/// Keys are unique: inserting under an existing key overwrites the stored
/// value in place without disturbing the original position. In normal
/// operation every key is sourced from a distinct input key (plus synthetic
/// drain keys), so overwrites do not occur in practice, but the container
/// supports them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AverageSeries {
    entries: Vec<(SeriesKey, f64)>,
}

impl AverageSeries {
    /// Creates an empty series.
    pub fn new() -> Self {
        AverageSeries {
            entries: Vec::new(),
        }
    }

    /// Inserts a key→average pair, appending at the end or overwriting an
    /// existing entry for the same key.
    pub fn insert(&mut self, key: SeriesKey, value: f64) {
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Looks up the average stored for a key.
    pub fn get(&self, key: &SeriesKey) -> Option<f64> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| *v)
    }

    /// Returns the number of stored pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no pairs are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(SeriesKey, f64)> {
        self.entries.iter()
    }

    /// Iterates keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &SeriesKey> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Iterates values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|(_, v)| *v)
    }
}

impl IntoIterator for AverageSeries {
    type Item = (SeriesKey, f64);
    type IntoIter = std::vec::IntoIter<(SeriesKey, f64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromIterator<(SeriesKey, f64)> for AverageSeries {
    fn from_iter<I: IntoIterator<Item = (SeriesKey, f64)>>(iter: I) -> Self {
        let mut series = AverageSeries::new();
        for (key, value) in iter {
            series.insert(key, value);
        }
        series
    }
}
