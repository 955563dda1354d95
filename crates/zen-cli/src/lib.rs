//! zen-search command-line front end.
//!
//! # Modules
//!
//! - `cli`: Command-line argument parsing with clap
//! - `commands`: Command implementations and logging setup
//! - `store`: Loads `<group>.json` files into a catalog
//! - `session`: Interactive menu loop
//! - `ui`: Prompt/presentation seam and the terminal implementation
//! - `render`: Plain-text formatting of results

pub mod cli;
pub mod commands;
pub mod render;
pub mod session;
pub mod store;
pub mod ui;

pub use cli::{Cli, Commands};
pub use commands::{init_logging, list_groups, list_terms, resolve_settings, run, search};
pub use render::SearchHit;
pub use session::{Outcome, Prompt, Session};
pub use store::{load_catalog, read_records};
pub use ui::{Question, TerminalUi, Ui};
