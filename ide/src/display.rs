//! Display formatting for completion proposals and hover text.
//!
//! This is the single place that decides how a property looks in a proposal list:
//! `id=default : Type Short description.`

use serde::{Deserialize, Serialize};

use crate::catalogue::{PropertyInfo, format_java_type};
use crate::project::ProjectHandle;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "PascalCase")]
pub enum DisplaySegment {
    Name { text: String },
    Operator { text: String },
    Value { text: String },
    Punct { text: String },
    Type { text: String },
    Description { text: String },
}

impl DisplaySegment {
    pub fn text(&self) -> &str {
        match self {
            DisplaySegment::Name { text }
            | DisplaySegment::Operator { text }
            | DisplaySegment::Value { text }
            | DisplaySegment::Punct { text }
            | DisplaySegment::Type { text }
            | DisplaySegment::Description { text } => text,
        }
    }
}

/// Concatenates the segment texts.
pub fn plain_text(segments: &[DisplaySegment]) -> String {
    segments.iter().map(DisplaySegment::text).collect()
}

/// Builds the styled proposal label for `info`.
pub fn property_segments(info: &PropertyInfo) -> Vec<DisplaySegment> {
    let mut out = vec![DisplaySegment::Name {
        text: info.id.clone(),
    }];

    if let Some(default) = info.default_value.as_ref().and_then(format_default_value) {
        out.push(DisplaySegment::Operator {
            text: "=".to_string(),
        });
        out.push(DisplaySegment::Value { text: default });
    }

    if let Some(ty) = info.ty.as_deref() {
        out.push(DisplaySegment::Punct {
            text: " : ".to_string(),
        });
        out.push(DisplaySegment::Type {
            text: format_java_type(ty),
        });
    }

    if let Some(description) = info.description.as_deref().map(short_description) {
        let description = description.trim();
        if !description.is_empty() {
            out.push(DisplaySegment::Punct {
                text: " ".to_string(),
            });
            out.push(DisplaySegment::Description {
                text: description.to_string(),
            });
        }
    }

    out
}

/// Renders a default value for display. `null` and empty arrays have no rendering.
pub fn format_default_value(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Array(items) if items.is_empty() => None,
        serde_json::Value::Array(items) => Some(
            items
                .iter()
                .map(|item| format_default_value(item).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(","),
        ),
        other => Some(other.to_string()),
    }
}

/// First sentence of `description` (up to and including the first `.`), with control
/// characters such as line breaks removed.
pub fn short_description(description: &str) -> String {
    let sentence = match description.find('.') {
        Some(dot) => &description[..=dot],
        None => description,
    };
    sentence.chars().filter(|c| !c.is_control()).collect()
}

/// HTML hover text for `info`.
pub fn hover_html(info: &PropertyInfo) -> String {
    let mut html = format!("<b>{}</b>", escape_html(&info.id));
    if let Some(ty) = info.ty.as_deref() {
        html.push_str(&format!("<br><code>{}</code>", escape_html(ty)));
    }
    if let Some(default) = info.default_value.as_ref().and_then(format_default_value) {
        html.push_str(&format!(
            "<br><br>Default: <i>{}</i>",
            escape_html(&default)
        ));
    }
    if info.deprecated {
        html.push_str("<br><br><b>Deprecated</b>");
    }
    if let Some(description) = info.description.as_deref() {
        html.push_str(&format!("<br><br>{}", escape_html(description)));
    }
    html
}

/// Hover payload: the property plus the project it was resolved in.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverInfo {
    pub project: Option<ProjectHandle>,
    pub property: PropertyInfo,
}

impl HoverInfo {
    pub fn html(&self) -> String {
        hover_html(&self.property)
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
