//! Per-group reverse index.
//!
//! Maps field name -> normalized value -> records holding that value.
//! Built once from a snapshot of the group's records and never mutated.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

use tracing::debug;
use zen_types::{normalize, FieldMap, ToFieldMap};

/// Records sharing one normalized value, in insertion order.
pub type Bucket = Vec<Arc<FieldMap>>;

/// Reverse index over a single group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupIndex {
    fields: BTreeMap<String, HashMap<String, Bucket>>,
    len: usize,
}

impl GroupIndex {
    /// Build the index for one group.
    ///
    /// Scalars are indexed under their normalized text (the empty string
    /// included); multi-values once per element. Every field a record
    /// carries becomes a term, even when it contributes no entries, and a
    /// fixed record kind registers its whole schema even with no records.
    pub fn build<R: ToFieldMap>(records: &[R]) -> Self {
        let mut fields: BTreeMap<String, HashMap<String, Bucket>> = R::field_names()
            .into_iter()
            .map(|name| (name, HashMap::new()))
            .collect();

        for record in records {
            let rendered = Arc::new(record.to_field_map());
            for (name, value) in rendered.iter() {
                let by_value = fields.entry(name.clone()).or_default();
                for v in value.values() {
                    by_value
                        .entry(normalize(v))
                        .or_default()
                        .push(Arc::clone(&rendered));
                }
            }
        }

        debug!(records = records.len(), fields = fields.len(), "Built group index");

        Self {
            fields,
            len: records.len(),
        }
    }

    /// Number of records indexed.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Field names usable as search terms.
    pub fn terms(&self) -> BTreeSet<String> {
        self.fields.keys().cloned().collect()
    }

    pub fn has_term(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Iterate fields and their value maps in field-name order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &HashMap<String, Bucket>)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Records holding `value` in `field`.
    ///
    /// `None` when the field is unknown; an empty slice when nothing matches.
    pub fn lookup(&self, field: &str, value: &str) -> Option<&[Arc<FieldMap>]> {
        let by_value = self.fields.get(field)?;
        Some(
            by_value
                .get(&normalize(value))
                .map(Vec::as_slice)
                .unwrap_or(&[]),
        )
    }
}
