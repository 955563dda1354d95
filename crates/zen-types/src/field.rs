//! Field values and the field-map rendering capability.
//!
//! Every record kind renders itself as a [`FieldMap`]: field name to
//! [`FieldValue`]. Indexing and relation resolution only ever see this
//! rendered form, never the typed record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Value held by a single record field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A single string, already in canonical form (`"42"`, `"true"`).
    Scalar(String),
    /// An ordered sequence of strings (tags, domain names).
    Multi(Vec<String>),
}

impl FieldValue {
    /// Empty scalar, used for absent optional values.
    pub fn empty() -> Self {
        FieldValue::Scalar(String::new())
    }

    /// Iterate the values held; a scalar yields exactly one item.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        let slice: &[String] = match self {
            FieldValue::Scalar(s) => std::slice::from_ref(s),
            FieldValue::Multi(v) => v.as_slice(),
        };
        slice.iter().map(String::as_str)
    }

    /// True for an empty multi-value or an empty scalar.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Scalar(s) => s.is_empty(),
            FieldValue::Multi(v) => v.is_empty(),
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Scalar(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Scalar(value.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Scalar(value.to_string())
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        FieldValue::Scalar(value.to_string())
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_else(FieldValue::empty)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::Multi(value)
    }
}

/// A record rendered as field name -> value.
///
/// Backed by a `BTreeMap`, so fields always iterate in lexicographic order.
/// That order is the canonical traversal order for relation resolution.
pub type FieldMap = BTreeMap<String, FieldValue>;

/// Capability implemented by every indexable record kind.
pub trait ToFieldMap {
    /// Render the full record, one entry per schema field.
    fn to_field_map(&self) -> FieldMap;

    /// Fields every record of this kind carries, known without a record.
    ///
    /// Schemaless kinds return nothing and take their fields from the data.
    fn field_names() -> Vec<String>
    where
        Self: Sized,
    {
        Vec::new()
    }
}

impl ToFieldMap for FieldMap {
    fn to_field_map(&self) -> FieldMap {
        self.clone()
    }
}

/// Case-normalize a value for index keys and lookups.
pub fn normalize(value: &str) -> String {
    value.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_yields_one_value() {
        let value = FieldValue::from("Acme");
        assert_eq!(value.values().collect::<Vec<_>>(), vec!["Acme"]);
    }

    #[test]
    fn test_multi_yields_each_value() {
        let value = FieldValue::from(vec!["a.com".to_string(), "b.com".to_string()]);
        assert_eq!(value.values().collect::<Vec<_>>(), vec!["a.com", "b.com"]);
        assert!(!value.is_empty());
        assert!(FieldValue::Multi(vec![]).is_empty());
    }

    #[test]
    fn test_canonical_formatting() {
        assert_eq!(FieldValue::from(true), FieldValue::Scalar("true".into()));
        assert_eq!(FieldValue::from(101u64), FieldValue::Scalar("101".into()));
        assert_eq!(FieldValue::from(None::<u64>), FieldValue::empty());
    }

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize("ACME.Com"), "acme.com");
    }

    #[test]
    fn test_field_value_json_shape() {
        let json = serde_json::to_string(&FieldValue::from(vec!["x".to_string()])).unwrap();
        assert_eq!(json, r#"["x"]"#);
        let decoded: FieldValue = serde_json::from_str(r#""y""#).unwrap();
        assert_eq!(decoded, FieldValue::from("y"));
    }
}
