//! Paths into the conceptual YAML tree.

use std::fmt;

/// One step of a [`YamlPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum YamlPathSegment {
    /// The value at this key.
    ValAtKey(String),
}

impl YamlPathSegment {
    pub fn val_at_key(key: impl Into<String>) -> Self {
        YamlPathSegment::ValAtKey(key.into())
    }

    /// Key text to emit into a document. Emitted verbatim, no quoting.
    pub fn to_prop_string(&self) -> &str {
        match self {
            YamlPathSegment::ValAtKey(key) => key,
        }
    }
}

impl fmt::Display for YamlPathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_prop_string())
    }
}

/// Immutable, ordered sequence of key segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct YamlPath {
    segments: Vec<YamlPathSegment>,
}

impl YamlPath {
    pub fn new(segments: Vec<YamlPathSegment>) -> Self {
        Self { segments }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Splits a dotted property id (`server.port`) into key segments.
    pub fn from_property(id: &str) -> Self {
        Self {
            segments: id
                .split('.')
                .filter(|part| !part.is_empty())
                .map(YamlPathSegment::val_at_key)
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn size(&self) -> usize {
        self.segments.len()
    }

    pub fn segment(&self, index: usize) -> Option<&YamlPathSegment> {
        self.segments.get(index)
    }

    pub fn segments(&self) -> impl Iterator<Item = &YamlPathSegment> {
        self.segments.iter()
    }

    /// The path without its first segment.
    pub fn tail(&self) -> YamlPath {
        Self {
            segments: self.segments.iter().skip(1).cloned().collect(),
        }
    }

    pub fn prepend(&self, segment: YamlPathSegment) -> YamlPath {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.push(segment);
        segments.extend(self.segments.iter().cloned());
        Self { segments }
    }

    pub fn append(&self, segment: YamlPathSegment) -> YamlPath {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }

    pub fn starts_with(&self, prefix: &YamlPath) -> bool {
        self.segments.starts_with(&prefix.segments)
    }

    /// The remainder of this path after `prefix`, if `prefix` is a prefix of it.
    pub fn drop_prefix(&self, prefix: &YamlPath) -> Option<YamlPath> {
        self.starts_with(prefix).then(|| Self {
            segments: self.segments[prefix.size()..].to_vec(),
        })
    }

    /// The dotted property form, e.g. `server.port`.
    pub fn to_prop_string(&self) -> String {
        self.segments
            .iter()
            .map(YamlPathSegment::to_prop_string)
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl fmt::Display for YamlPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_prop_string())
    }
}

impl FromIterator<YamlPathSegment> for YamlPath {
    fn from_iter<I: IntoIterator<Item = YamlPathSegment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}
