//! Command implementations.
//!
//! Each command writes to a caller-supplied writer so it can run against a
//! buffer in tests.

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use zen_index::Catalog;
use zen_types::Settings;

use crate::cli::{Cli, Commands};
use crate::render::{self, SearchHit};
use crate::session::Session;
use crate::store::load_catalog;
use crate::ui::TerminalUi;

/// Install the global tracing subscriber on stderr.
///
/// `RUST_LOG` wins over the configured level.
pub fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;
    Ok(())
}

/// Load configuration and apply CLI overrides.
pub fn resolve_settings(cli: &Cli) -> Result<Settings> {
    let mut settings =
        Settings::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(data_dir) = &cli.data_dir {
        settings.data_dir = data_dir.clone();
    }
    if let Some(log_level) = &cli.log_level {
        settings.log_level = log_level.clone();
    }
    Ok(settings)
}

/// Entry point shared by the binary: config, logging, load, dispatch.
pub fn run(cli: Cli) -> Result<()> {
    let settings = resolve_settings(&cli)?;
    init_logging(&settings.log_level)?;

    info!(data_dir = %settings.data_dir, groups = ?settings.groups, "Loading records");
    let catalog = Arc::new(load_catalog(&settings).context("Failed to load records")?);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            let ui = TerminalUi::new(io::stdin().lock(), out);
            Session::new(catalog, ui, settings.max_tries)
                .run()
                .context("Interactive session failed")?;
        }
        Commands::Groups => list_groups(&catalog, &mut out)?,
        Commands::Terms { group } => list_terms(&catalog, group.as_deref(), &mut out)?,
        Commands::Search {
            group,
            field,
            value,
            related,
            json,
        } => search(&catalog, &group, &field, &value, related, json, &mut out)?,
        Commands::Related {
            group,
            field,
            value,
            json,
        } => search(&catalog, &group, &field, &value, true, json, &mut out)?,
    }
    Ok(())
}

pub fn list_groups(catalog: &Catalog, out: &mut impl Write) -> Result<()> {
    for group in catalog.groups() {
        writeln!(out, "{}", group)?;
    }
    Ok(())
}

pub fn list_terms(catalog: &Catalog, group: Option<&str>, out: &mut impl Write) -> Result<()> {
    let terms = match group {
        Some(g) => {
            let mut one = BTreeMap::new();
            one.insert(g.to_string(), catalog.terms(g)?.into_iter().collect());
            one
        }
        None => catalog.all_terms(),
    };
    write!(out, "{}", render::terms(&terms))?;
    Ok(())
}

/// Exact-match search, optionally expanding related records.
pub fn search(
    catalog: &Catalog,
    group: &str,
    field: &str,
    value: &str,
    related: bool,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let hits = catalog
        .find_matches(group, field, value)?
        .into_iter()
        .map(|record| {
            let related = if related {
                catalog.find_related(group, &record)?
            } else {
                Default::default()
            };
            Ok(SearchHit { record, related })
        })
        .collect::<Result<Vec<_>>>()?;

    if json {
        serde_json::to_writer_pretty(&mut *out, &hits)?;
        writeln!(out)?;
    } else {
        write!(out, "{}", render::hits(&hits))?;
    }
    Ok(())
}
