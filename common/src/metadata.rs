//! Loosely typed metadata items carried in an artefact manifest.
//!
//! Metadata items are the artefact's declarative annotation surface: each
//! item has an identity string and an ordered list of positional argument
//! values. Consumers match arguments by type position (first boolean, first
//! string) rather than by name, so the value model stays deliberately small.

use serde::{Deserialize, Serialize};

/// A positional metadata argument value.
///
/// Serialises untagged, so a manifest argument list reads as plain JSON
/// scalars: `[true, "vendor"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    /// A boolean argument.
    Bool(bool),
    /// A string argument.
    Text(String),
}

impl MetaValue {
    /// Return the boolean payload, if this value is a boolean.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    /// Return the string payload, if this value is a string.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Bool(_) => None,
            Self::Text(value) => Some(value),
        }
    }
}

impl From<bool> for MetaValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for MetaValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for MetaValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// One metadata item: an identity plus positional arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataItem {
    /// Identity string naming what the item declares.
    pub identity: String,
    /// Ordered positional argument values.
    #[serde(default)]
    pub args: Vec<MetaValue>,
}

impl MetadataItem {
    /// Create a metadata item from an identity and argument list.
    #[must_use]
    pub fn new(identity: impl Into<String>, args: Vec<MetaValue>) -> Self {
        Self {
            identity: identity.into(),
            args,
        }
    }

    /// Return the first boolean-typed argument, if any.
    #[must_use]
    pub fn first_bool(&self) -> Option<bool> {
        self.args.iter().find_map(MetaValue::as_bool)
    }

    /// Return the first string-typed argument, if any.
    #[must_use]
    pub fn first_text(&self) -> Option<&str> {
        self.args.iter().find_map(MetaValue::as_text)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for positional argument matching and serde shape.

    use super::*;
    use rstest::rstest;

    #[test]
    fn first_bool_skips_leading_text() {
        let item = MetadataItem::new("x", vec!["name".into(), true.into()]);
        assert_eq!(item.first_bool(), Some(true));
    }

    #[test]
    fn first_text_skips_leading_bool() {
        let item = MetadataItem::new("x", vec![false.into(), "vendor".into()]);
        assert_eq!(item.first_text(), Some("vendor"));
    }

    #[rstest]
    #[case::empty(Vec::new())]
    #[case::bool_only(vec![MetaValue::Bool(true)])]
    fn first_text_absent(#[case] args: Vec<MetaValue>) {
        let item = MetadataItem::new("x", args);
        assert_eq!(item.first_text(), None);
    }

    #[test]
    fn first_of_each_type_wins() {
        let item = MetadataItem::new("x", vec![true.into(), false.into(), "a".into(), "b".into()]);
        assert_eq!(item.first_bool(), Some(true));
        assert_eq!(item.first_text(), Some("a"));
    }

    #[test]
    fn values_serialise_as_plain_scalars() {
        let item = MetadataItem::new("refembed.config", vec![true.into(), "vendor".into()]);
        let json = serde_json::to_string(&item).expect("serialise");
        assert_eq!(
            json,
            r#"{"identity":"refembed.config","args":[true,"vendor"]}"#
        );
    }

    #[test]
    fn values_deserialise_untagged() {
        let item: MetadataItem =
            serde_json::from_str(r#"{"identity":"refembed.exclude","args":["noisy"]}"#)
                .expect("deserialise");
        assert_eq!(item.identity, "refembed.exclude");
        assert_eq!(item.first_text(), Some("noisy"));
        assert_eq!(item.first_bool(), None);
    }

    #[test]
    fn missing_args_default_to_empty() {
        let item: MetadataItem =
            serde_json::from_str(r#"{"identity":"refembed.include_all"}"#).expect("deserialise");
        assert!(item.args.is_empty());
    }
}
