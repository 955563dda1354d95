//! zen-search
//!
//! # Usage
//!
//! ```bash
//! zen [--data-dir DIR]                       # interactive menu
//! zen search organisations name Acme --related
//! zen terms tickets
//! ```
//!
//! # Configuration
//!
//! Configuration is loaded in order (later sources override earlier):
//! 1. Built-in defaults
//! 2. Config file (~/.config/zen-search/config.toml)
//! 3. Environment variables (ZEN_*)
//! 4. CLI flags

use anyhow::Result;
use clap::Parser;

use zen_cli::{run, Cli};

fn main() -> Result<()> {
    run(Cli::parse())
}
