//! Catalog of group indexes and the exact-match query surface.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use tracing::{debug, info};
use zen_types::{FieldMap, ToFieldMap};

use crate::error::IndexError;
use crate::index::GroupIndex;

/// Read-only set of group indexes.
///
/// Built once through [`CatalogBuilder`]. Reloading means building a new
/// catalog and swapping the `Arc` callers hold.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    groups: BTreeMap<String, GroupIndex>,
}

/// Collects per-group indexes before freezing them into a [`Catalog`].
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    groups: BTreeMap<String, GroupIndex>,
}

impl CatalogBuilder {
    /// Index `records` under `name`. A repeated name replaces the earlier group.
    pub fn group<R: ToFieldMap>(mut self, name: impl Into<String>, records: &[R]) -> Self {
        let name = name.into();
        debug!(group = %name, records = records.len(), "Indexing group");
        self.groups.insert(name, GroupIndex::build(records));
        self
    }

    /// Add an index built elsewhere.
    pub fn with_index(mut self, name: impl Into<String>, index: GroupIndex) -> Self {
        self.groups.insert(name.into(), index);
        self
    }

    pub fn build(self) -> Catalog {
        info!(
            groups = self.groups.len(),
            records = self.groups.values().map(GroupIndex::len).sum::<usize>(),
            "Catalog ready"
        );
        Catalog {
            groups: self.groups,
        }
    }
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Names of all loaded groups, sorted.
    pub fn groups(&self) -> Vec<String> {
        self.groups.keys().cloned().collect()
    }

    /// Index of a single group.
    pub fn group(&self, group: &str) -> Result<&GroupIndex, IndexError> {
        self.groups
            .get(group)
            .ok_or_else(|| IndexError::GroupNotFound(group.to_string()))
    }

    /// Searchable field names of `group`.
    pub fn terms(&self, group: &str) -> Result<BTreeSet<String>, IndexError> {
        Ok(self.group(group)?.terms())
    }

    /// Terms of every group, each list sorted.
    pub fn all_terms(&self) -> BTreeMap<String, Vec<String>> {
        self.groups
            .iter()
            .map(|(name, index)| (name.clone(), index.terms().into_iter().collect()))
            .collect()
    }

    /// Records of `group` whose `field` equals `value`, ignoring case.
    ///
    /// No match is an empty result, not an error.
    pub fn find_matches(
        &self,
        group: &str,
        field: &str,
        value: &str,
    ) -> Result<Vec<Arc<FieldMap>>, IndexError> {
        let index = self.group(group)?;
        let matches = index
            .lookup(field, value)
            .ok_or_else(|| IndexError::FieldNotFound {
                group: group.to_string(),
                field: field.to_string(),
            })?
            .to_vec();

        debug!(group, field, value, matches = matches.len(), "Exact match lookup");
        Ok(matches)
    }

    pub(crate) fn indexes(&self) -> impl Iterator<Item = (&str, &GroupIndex)> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v))
    }
}
