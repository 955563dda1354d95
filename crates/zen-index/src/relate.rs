//! Cross-group relation resolution.
//!
//! Given one record's field map, finds records in every other group that
//! hold any of its values in any field. This approximates foreign-key joins
//! (`tickets.organization_id` -> `organisations._id`) without declaring them.
//!
//! Traversal order is fixed: source fields (name order), then each field's
//! values, then target groups (name order), then target fields (name order).
//! Matches reached through different source fields are kept as separate
//! entries.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;
use zen_types::{normalize, FieldMap};

use crate::catalog::Catalog;
use crate::error::IndexError;

/// Records of one target field that matched a source value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldMatch {
    /// Field of the target group that held the value
    pub field: String,
    /// Matching records, in insertion order
    pub records: Vec<Arc<FieldMap>>,
}

/// Related records keyed by target group.
pub type RelatedRecords = BTreeMap<String, Vec<FieldMatch>>;

impl Catalog {
    /// Find records in other groups sharing a value with `record`.
    ///
    /// `group` is the record's own group and is never searched. Fields
    /// missing from `record` are skipped, as are empty values.
    pub fn find_related(
        &self,
        group: &str,
        record: &FieldMap,
    ) -> Result<RelatedRecords, IndexError> {
        self.group(group)?;

        let mut related = RelatedRecords::new();
        for (source_field, value) in record {
            for v in value.values().filter(|v| !v.is_empty()) {
                let key = normalize(v);
                for (other, index) in self.indexes().filter(|(name, _)| *name != group) {
                    for (target_field, by_value) in index.fields() {
                        if let Some(bucket) = by_value.get(&key) {
                            debug!(
                                source_field = %source_field,
                                group = other,
                                target_field,
                                matches = bucket.len(),
                                "Related records"
                            );
                            related.entry(other.to_string()).or_default().push(FieldMatch {
                                field: target_field.to_string(),
                                records: bucket.clone(),
                            });
                        }
                    }
                }
            }
        }

        Ok(related)
    }
}
