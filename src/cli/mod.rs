//! CLI module
//!
//! Command-line interface and HTTP host for the page loaders.
//!
//! # Commands
//!
//! - `albums` / `tracks` / `artists` - Load one listing page and print the view model
//! - `album` - Load one album with its tracks
//! - `serve` - Start HTTP server mode
//! - `config` - Print the effective configuration

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands, OutputFormat, PageArgs};
pub use runner::Runner;
pub use server::{router, serve};
