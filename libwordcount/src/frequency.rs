use std::collections::btree_map;
use std::collections::BTreeMap;

use errors::*;

/// `FrequencyTable` maps a normalised word to the number of times it was seen.
///
/// Words are kept sorted so that two equal tables always serialise to identical bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    counts: BTreeMap<String, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Default::default()
    }

    /// Records one more occurrence of `word`.
    pub fn increment(&mut self, word: &str) {
        if let Some(count) = self.counts.get_mut(word) {
            *count += 1;
            return;
        }
        self.counts.insert(word.to_owned(), 1);
    }

    /// Adds `count` occurrences of `word`, failing instead of wrapping on overflow.
    pub fn add(&mut self, word: &str, count: u64) -> Result<()> {
        let entry = self.counts.entry(word.to_owned()).or_insert(0);
        *entry = entry.checked_add(count).chain_err(
            || ErrorKind::CountOverflow(word.to_owned()),
        )?;
        Ok(())
    }

    /// Sums every count of `other` into this table. Words present in both tables end up with the
    /// sum of both counts.
    pub fn merge(&mut self, other: &FrequencyTable) -> Result<()> {
        for (word, count) in other.iter() {
            self.add(word, *count)?;
        }
        Ok(())
    }

    pub fn get(&self, word: &str) -> u64 {
        self.counts.get(word).cloned().unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.counts.values().fold(0, |acc, count| acc.saturating_add(*count))
    }

    pub fn iter(&self) -> btree_map::Iter<String, u64> {
        self.counts.iter()
    }
}
