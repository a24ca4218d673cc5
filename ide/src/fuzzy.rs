//! Fuzzy matching of a typed pattern against dotted property ids.
//!
//! Core idea: subsequence match (not substring).
//! - `pattern` matches `id` if every pattern character appears in `id` in order.
//! - Matching is ASCII-case-insensitive.
//!
//! Every matched character earns a weight; the total is normalised by the id length so
//! the score lands in `(0, 1]`. A score of `0.0` means "no match".

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::Arc;

/// Matched character continuing an unbroken run from the start of the id.
const W_LEADING: u32 = 4;
/// Matched character right after the previous matched character.
const W_RUN: u32 = 3;
/// Matched character at a word start (`server.port`, `bannerMode`, `banner-mode`).
const W_BOUNDARY: u32 = 2;
/// Any other matched character.
const W_SCATTERED: u32 = 1;

/// A scored reference from a query to a map entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Match<E> {
    pub data: E,
    /// In `(0, 1]`; higher is better.
    pub score: f64,
}

impl<E> Match<E> {
    pub fn new(data: E, score: f64) -> Self {
        Self { data, score }
    }
}

/// Scores `pattern` against `id`.
///
/// Scoring details:
/// - Greedy subsequence match: each pattern char takes the earliest next occurrence.
///   A later word-boundary occurrence is not looked for, so `po` against `xpyz.port`
///   takes the `p` at index 1 and scores as scattered.
/// - An exact prefix earns `W_LEADING` per char and beats a word-boundary match, which
///   beats a scattered one.
/// - Because the total is divided by the id length, the shorter id wins between two
///   structurally equal matches.
/// - Extending the pattern only adds weight, so a longer pattern never scores below its
///   prefix unless it stops matching.
///
/// An empty pattern matches everything with `1.0`.
pub fn match_score(pattern: &str, id: &str) -> f64 {
    if pattern.is_empty() {
        return 1.0;
    }
    let id_chars: Vec<char> = id.chars().collect();
    if id_chars.is_empty() {
        return 0.0;
    }

    let mut total = 0u32;
    let mut prev: Option<usize> = None;
    let mut j = 0usize;
    for (i, qc) in pattern.chars().map(|c| c.to_ascii_lowercase()).enumerate() {
        while j < id_chars.len() && id_chars[j].to_ascii_lowercase() != qc {
            j += 1;
        }
        if j == id_chars.len() {
            return 0.0;
        }
        total += if j == i {
            W_LEADING
        } else if prev.is_some_and(|p| j == p + 1) {
            W_RUN
        } else if is_word_start(&id_chars, j) {
            W_BOUNDARY
        } else {
            W_SCATTERED
        };
        prev = Some(j);
        j += 1;
    }

    f64::from(total) / (f64::from(W_LEADING) * id_chars.len() as f64)
}

fn is_word_start(chars: &[char], pos: usize) -> bool {
    let Some(prev) = pos.checked_sub(1).map(|p| chars[p]) else {
        return true;
    };
    matches!(prev, '.' | '-' | '_' | '[' | ']' | ' ')
        || (prev.is_ascii_lowercase() && chars[pos].is_ascii_uppercase())
}

/// Key under which a value is stored in a [`FuzzyMap`].
pub trait FuzzyKey {
    fn fuzzy_key(&self) -> &str;
}

impl FuzzyKey for String {
    fn fuzzy_key(&self) -> &str {
        self
    }
}

impl<T: FuzzyKey + ?Sized> FuzzyKey for Arc<T> {
    fn fuzzy_key(&self) -> &str {
        (**self).fuzzy_key()
    }
}

/// Values indexed by key, searchable by fuzzy pattern and by key prefix.
#[derive(Debug, Clone)]
pub struct FuzzyMap<E> {
    entries: BTreeMap<String, E>,
}

impl<E> Default for FuzzyMap<E> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<E: FuzzyKey> FuzzyMap<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under its key, returning the value it replaced.
    pub fn add(&mut self, value: E) -> Option<E> {
        self.entries.insert(value.fuzzy_key().to_string(), value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&E> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut E> {
        self.entries.get_mut(key)
    }

    /// Values in key order.
    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.entries.values()
    }

    /// Every entry matching `pattern`, in key order.
    pub fn find(&self, pattern: &str) -> Vec<Match<E>>
    where
        E: Clone,
    {
        self.entries
            .iter()
            .filter_map(|(key, value)| {
                let score = match_score(pattern, key);
                (score > 0.0).then(|| Match::new(value.clone(), score))
            })
            .collect()
    }

    /// Longest prefix of `name` that is also a prefix of some key.
    pub fn find_longest_valid_prefix<'a>(&self, name: &'a str) -> &'a str {
        let mut end = name.len();
        loop {
            let prefix = &name[..end];
            if self.has_key_with_prefix(prefix) {
                return prefix;
            }
            match prefix.char_indices().next_back() {
                Some((idx, _)) => end = idx,
                None => return "",
            }
        }
    }

    fn has_key_with_prefix(&self, prefix: &str) -> bool {
        self.entries
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .next()
            .is_some_and(|(key, _)| key.starts_with(prefix))
    }
}

impl<E: FuzzyKey> FromIterator<E> for FuzzyMap<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut map = FuzzyMap::new();
        for value in iter {
            map.add(value);
        }
        map
    }
}
