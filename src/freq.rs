// src/freq.rs

use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Case-insensitive word tally. Counts are keyed by the lower-cased token;
/// the spelling shown in the report is whichever casing was seen first.
/// Every counted key has an exemplar — both are written under one entry
/// lookup, so the maps cannot drift apart.
pub struct Tally {
    counts: HashMap<String, u32>,
    exemplars: HashMap<String, String>,
}

impl Tally {
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
            exemplars: HashMap::new(),
        }
    }

    /// Count one token. Numerals (ASCII digits only, any length) and
    /// single-character tokens are dropped; both checks look at the token
    /// as delivered, before case folding.
    pub fn push(&mut self, word: &str) {
        if !word.is_empty() && word.chars().all(|c| c.is_ascii_digit()) {
            return;
        }
        if word.chars().nth(1).is_none() {
            return;
        }

        match self.counts.entry(word.to_lowercase()) {
            Entry::Occupied(mut e) => *e.get_mut() += 1,
            Entry::Vacant(e) => {
                self.exemplars.insert(e.key().clone(), s!(word));
                e.insert(1);
            }
        }
    }

    pub fn extend<'a, I: IntoIterator<Item = &'a str>>(&mut self, word_list: I) {
        for word in word_list {
            self.push(word);
        }
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    #[cfg(test)]
    fn count(&self, key: &str) -> Option<u32> {
        self.counts.get(key).copied()
    }

    /// Consume the tally into (exemplar, count) rows, highest count first.
    /// Relative order of equal counts is not specified.
    pub fn into_rows(self) -> Vec<(String, u32)> {
        let Tally { counts, mut exemplars } = self;

        let mut rows: Vec<(String, u32)> = counts
            .into_iter()
            .map(|(key, n)| {
                let shown = exemplars.remove(&key).unwrap_or(key);
                (shown, n)
            })
            .collect();

        rows.sort_by(|a, b| b.1.cmp(&a.1));
        rows
    }
}
