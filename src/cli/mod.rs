//! CLI module
//!
//! Command-line interface over the pagination controller.
//!
//! # Commands
//!
//! - `browse` - Interactive list that loads more as you scroll
//! - `fetch` - Load N pages and print them
//! - `config` - Show the effective configuration

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
