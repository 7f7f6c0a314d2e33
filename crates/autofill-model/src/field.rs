//! Form field records produced by the page scraper.
//!
//! A form field is a read-only input to the mapping pipeline: an identifier
//! (`name`, falling back to `id`), an input type, and a small bag of
//! descriptive attributes. No DOM knowledge lives here.

use serde::{Deserialize, Serialize};

/// Input type assumed when a record does not carry one.
pub const DEFAULT_FIELD_TYPE: &str = "text";

fn default_field_type() -> String {
    DEFAULT_FIELD_TYPE.to_string()
}

/// Descriptive attributes of a form field.
///
/// The attribute order is fixed (placeholder, label, class, title) and is the
/// order in which attribute-based matching and scoring consult them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl FieldAttributes {
    /// Attribute names in consultation order.
    pub const ORDER: [&'static str; 4] = ["placeholder", "label", "class", "title"];

    /// Returns `(name, value)` pairs for every non-empty attribute, in
    /// consultation order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        let values = [
            self.placeholder.as_deref(),
            self.label.as_deref(),
            self.class.as_deref(),
            self.title.as_deref(),
        ];
        Self::ORDER
            .into_iter()
            .zip(values)
            .filter_map(|(name, value)| match value {
                Some(value) if !value.is_empty() => Some((name, value)),
                _ => None,
            })
    }

    /// Returns the non-empty attribute values in consultation order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(_, value)| value)
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Sets an attribute by name. Unknown names are ignored and reported as `false`.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        let slot = match name {
            "placeholder" => &mut self.placeholder,
            "label" => &mut self.label,
            "class" => &mut self.class,
            "title" => &mut self.title,
            _ => return false,
        };
        *slot = Some(value.into());
        true
    }

    /// Fills every attribute missing here from `fallback`.
    #[must_use]
    pub fn or(mut self, fallback: &FieldAttributes) -> Self {
        fn fill(slot: &mut Option<String>, fallback: &Option<String>) {
            if slot.as_deref().is_none_or(str::is_empty) && fallback.is_some() {
                slot.clone_from(fallback);
            }
        }
        fill(&mut self.placeholder, &fallback.placeholder);
        fill(&mut self.label, &fallback.label);
        fill(&mut self.class, &fallback.class);
        fill(&mut self.title, &fallback.title);
        self
    }
}

/// A scraped form field.
///
/// Attributes may arrive nested under `attributes` or as flat top-level keys;
/// nested values win per key (see [`FormField::effective_attributes`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default = "default_field_type")]
    pub field_type: String,
    #[serde(default, skip_serializing_if = "FieldAttributes::is_empty")]
    pub attributes: FieldAttributes,
    #[serde(flatten)]
    pub inline_attributes: FieldAttributes,
}

impl Default for FormField {
    fn default() -> Self {
        Self {
            name: None,
            id: None,
            field_type: default_field_type(),
            attributes: FieldAttributes::default(),
            inline_attributes: FieldAttributes::default(),
        }
    }
}

impl FormField {
    /// Creates a text field with the given name and no attributes.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_type(mut self, field_type: impl Into<String>) -> Self {
        self.field_type = field_type.into();
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.set(name, value);
        self
    }

    /// The identifier used for mapping: `name`, else `id`, else empty.
    pub fn identifier(&self) -> &str {
        self.name
            .as_deref()
            .or(self.id.as_deref())
            .unwrap_or_default()
    }

    /// Nested attributes with flat top-level keys filling the gaps.
    pub fn effective_attributes(&self) -> FieldAttributes {
        self.attributes.clone().or(&self.inline_attributes)
    }
}
