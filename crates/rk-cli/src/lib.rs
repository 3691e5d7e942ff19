//! Runkeeper archive CLI library.
//!
//! This crate provides the CLI interface for classifying and reporting on an
//! exported post archive.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands};
pub use config::{Config, ReportTimeZone};
