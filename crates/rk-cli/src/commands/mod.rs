//! CLI subcommand implementations.

pub mod about;
pub mod activities;
pub mod classify;
pub mod search;
pub mod util;
