//! Record store: loads each configured group from `<data_dir>/<group>.json`.
//!
//! Organisations, tickets and users deserialize into their typed records;
//! any other group name loads as schemaless [`JsonRecord`]s.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use zen_index::{Catalog, CatalogBuilder};
use zen_types::{JsonRecord, Organisation, Settings, Ticket, User, ZenError};

/// Read a JSON array of records.
pub fn read_records<R: DeserializeOwned>(path: &Path) -> Result<Vec<R>, ZenError> {
    let bytes = fs::read(path)?;
    let records: Vec<R> = serde_json::from_slice(&bytes)?;
    info!(path = %path.display(), records = records.len(), "Loaded records");
    Ok(records)
}

fn add_group(
    builder: CatalogBuilder,
    group: &str,
    path: &Path,
) -> Result<CatalogBuilder, ZenError> {
    let builder = match group {
        "organisations" => builder.group(group, &read_records::<Organisation>(path)?),
        "tickets" => builder.group(group, &read_records::<Ticket>(path)?),
        "users" => builder.group(group, &read_records::<User>(path)?),
        _ => builder.group(group, &read_records::<JsonRecord>(path)?),
    };
    Ok(builder)
}

/// Load every configured group and build the catalog.
pub fn load_catalog(settings: &Settings) -> Result<Catalog, ZenError> {
    let mut builder = Catalog::builder();
    for group in &settings.groups {
        let path = settings.group_path(group);
        builder = add_group(builder, group, &path).map_err(|e| match e {
            ZenError::Io(io) => ZenError::InvalidInput(format!(
                "cannot read group '{}' from {}: {}",
                group,
                path.display(),
                io
            )),
            other => other,
        })?;
    }
    Ok(builder.build())
}
