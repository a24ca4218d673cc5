//! Read-only property metadata and the fuzzy index over it.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fuzzy::{FuzzyKey, FuzzyMap, Match};

/// Metadata of one configuration property.
///
/// Deserializes from Spring `additional-spring-configuration-metadata.json` entries,
/// where the id is called `name`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyInfo {
    #[serde(alias = "name")]
    pub id: String,
    /// Java type name, e.g. `java.util.Map<java.lang.String,java.lang.Integer>`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Known values, offered when completing the value of this property.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<String>,
    #[serde(default)]
    pub deprecated: bool,
}

impl PropertyInfo {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_type(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    pub fn with_default(mut self, value: impl Into<serde_json::Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_hints<I, S>(mut self, hints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hints.extend(hints.into_iter().map(Into::into));
        self
    }

    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    pub fn property_type(&self) -> PropertyType {
        PropertyType::classify(self.ty.as_deref())
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self.ty.as_deref(), Some("boolean" | "java.lang.Boolean"))
    }
}

impl FuzzyKey for PropertyInfo {
    fn fuzzy_key(&self) -> &str {
        &self.id
    }
}

/// Shape of a property value, which decides what follows the key when completing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyType {
    /// Scalars: the value goes on the key line.
    Atomic,
    /// Nested keys on the following lines.
    Map,
    /// `- ` entries on the following lines.
    Sequence,
}

impl PropertyType {
    pub fn classify(ty: Option<&str>) -> PropertyType {
        let Some(ty) = ty else {
            return PropertyType::Atomic;
        };
        let ty = ty.trim();
        if ty.ends_with("[]") {
            return PropertyType::Sequence;
        }
        let base = ty.split('<').next().unwrap_or(ty);
        let simple = base.rsplit('.').next().unwrap_or(base);
        if simple.ends_with("Map") || simple == "Properties" {
            PropertyType::Map
        } else if simple.ends_with("List")
            || simple.ends_with("Set")
            || simple.ends_with("Collection")
            || simple == "Iterable"
        {
            PropertyType::Sequence
        } else {
            PropertyType::Atomic
        }
    }
}

/// Strips package prefixes from every type name in `ty`.
///
/// `java.util.Map<java.lang.String,java.lang.Integer>` becomes `Map<String, Integer>`.
pub fn format_java_type(ty: &str) -> String {
    fn flush(ident: &mut String, out: &mut String) {
        out.push_str(ident.rsplit('.').next().unwrap_or_default());
        ident.clear();
    }

    let mut out = String::with_capacity(ty.len());
    let mut ident = String::new();
    let mut chars = ty.chars().peekable();
    while let Some(c) = chars.next() {
        if c.is_alphanumeric() || matches!(c, '.' | '_' | '$') {
            ident.push(c);
            continue;
        }
        flush(&mut ident, &mut out);
        if c == ',' {
            out.push_str(", ");
            while chars.next_if(|c| c.is_whitespace()).is_some() {}
        } else {
            out.push(c);
        }
    }
    flush(&mut ident, &mut out);
    out
}

#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("invalid property metadata: {0}")]
    Metadata(#[from] serde_json::Error),
}

/// Immutable store of property metadata. Shared read-only, usually through `Arc`.
#[derive(Debug, Clone, Default)]
pub struct PropertyCatalogue {
    index: FuzzyMap<Arc<PropertyInfo>>,
}

#[derive(Debug, Deserialize)]
struct Metadata {
    #[serde(default)]
    properties: Vec<PropertyInfo>,
    #[serde(default)]
    hints: Vec<HintMetadata>,
}

#[derive(Debug, Deserialize)]
struct HintMetadata {
    name: String,
    #[serde(default)]
    values: Vec<HintValue>,
}

#[derive(Debug, Deserialize)]
struct HintValue {
    value: serde_json::Value,
}

impl PropertyCatalogue {
    pub fn new<I>(properties: I) -> Self
    where
        I: IntoIterator<Item = PropertyInfo>,
    {
        Self {
            index: properties.into_iter().map(Arc::new).collect(),
        }
    }

    /// Reads Spring configuration metadata: `{"properties": [...], "hints": [...]}`.
    ///
    /// Hint values are attached to the property with the same name; hints for unknown
    /// properties are skipped.
    pub fn from_metadata_json(json: &str) -> Result<Self, CatalogueError> {
        let metadata: Metadata = serde_json::from_str(json)?;
        let mut properties: FuzzyMap<PropertyInfo> = metadata.properties.into_iter().collect();
        for hint in metadata.hints {
            let Some(info) = properties.get_mut(&hint.name) else {
                tracing::debug!(name = %hint.name, "hint for unknown property");
                continue;
            };
            info.hints.extend(hint.values.into_iter().map(|v| match v.value {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            }));
        }
        let catalogue = Self::new(properties.iter().cloned());
        tracing::debug!(properties = catalogue.len(), "loaded property metadata");
        Ok(catalogue)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Properties whose id matches `pattern`, in id order.
    pub fn find(&self, pattern: &str) -> Vec<Match<Arc<PropertyInfo>>> {
        self.index.find(pattern)
    }

    pub fn get(&self, id: &str) -> Option<&Arc<PropertyInfo>> {
        self.index.get(id)
    }

    /// Longest prefix of `name` shared with some property id.
    pub fn find_longest_valid_prefix<'a>(&self, name: &'a str) -> &'a str {
        self.index.find_longest_valid_prefix(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<PropertyInfo>> {
        self.index.iter()
    }
}
