//! Records of arbitrary groups, loaded straight from JSON objects.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::field::{FieldMap, FieldValue, ToFieldMap};

/// A record whose schema is whatever keys its JSON object carries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonRecord(pub Map<String, Value>);

impl ToFieldMap for JsonRecord {
    fn to_field_map(&self) -> FieldMap {
        self.0
            .iter()
            .map(|(name, value)| (name.clone(), json_to_field(value)))
            .collect()
    }
}

/// Arrays become multi-values; everything else a canonical scalar.
fn json_to_field(value: &Value) -> FieldValue {
    match value {
        Value::Array(items) => FieldValue::Multi(items.iter().map(scalar_text).collect()),
        other => FieldValue::Scalar(scalar_text(other)),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_record_canonical_values() {
        let record: JsonRecord = serde_json::from_str(
            r#"{"_id": 5, "active": true, "name": null, "tags": ["A", 2], "meta": {"k": 1}}"#,
        )
        .unwrap();
        let m = record.to_field_map();
        assert_eq!(m["_id"], FieldValue::from("5"));
        assert_eq!(m["active"], FieldValue::from("true"));
        assert_eq!(m["name"], FieldValue::empty());
        assert_eq!(m["tags"], FieldValue::Multi(vec!["A".into(), "2".into()]));
        assert_eq!(m["meta"], FieldValue::from(r#"{"k":1}"#));
    }
}
