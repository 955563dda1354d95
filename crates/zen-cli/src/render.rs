//! Plain-text presentation of records and search results.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::sync::Arc;

use serde::Serialize;

use zen_index::RelatedRecords;
use zen_types::{FieldMap, FieldValue};

/// One matched record together with its related records.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub record: Arc<FieldMap>,
    pub related: RelatedRecords,
}

fn field_text(value: &FieldValue) -> String {
    match value {
        FieldValue::Scalar(s) => s.clone(),
        FieldValue::Multi(v) => format!("[{}]", v.join(", ")),
    }
}

/// Render one record as aligned `field  value` lines.
pub fn record(out: &mut String, record: &FieldMap, indent: usize) {
    let width = record.keys().map(String::len).max().unwrap_or(0);
    for (name, value) in record {
        let _ = writeln!(
            out,
            "{:indent$}{:<width$}  {}",
            "",
            name,
            field_text(value),
            indent = indent,
            width = width
        );
    }
}

/// Render search hits, related records nested under each match.
pub fn hits(hits: &[SearchHit]) -> String {
    if hits.is_empty() {
        return "No results found.\n".to_string();
    }

    let mut out = String::new();
    for (i, hit) in hits.iter().enumerate() {
        let _ = writeln!(out, "=== Match {} ===", i + 1);
        record(&mut out, &hit.record, 2);
        for (group, matches) in &hit.related {
            for m in matches {
                for r in &m.records {
                    let _ = writeln!(out, "  --- related {} (via {}) ---", group, m.field);
                    record(&mut out, r, 4);
                }
            }
        }
    }
    out
}

/// Render each group's searchable terms.
pub fn terms(terms: &BTreeMap<String, Vec<String>>) -> String {
    let mut out = String::new();
    for (group, fields) in terms {
        let _ = writeln!(out, "Search {} with:", group);
        for f in fields {
            let _ = writeln!(out, "  {}", f);
        }
    }
    out
}
