//! Terminal driver for the tic-tac-toe engine.
//!
//! # Architecture
//!
//! - **Cli**: `clap` argument definitions
//! - **Config**: optional TOML file with play settings
//! - **Commands**: play, self-play and analysis over any reader and writer

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod commands;
mod config;

pub use cli::{Cli, Command};
pub use commands::{analyze, parse_move, play, selfplay, write_legend, write_values};
pub use config::{ConfigError, PlayConfig};
