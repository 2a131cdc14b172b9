//! Garage navigation CLI library.
//!
//! Subcommand handlers, output formatting and terminal styling used by the
//! `garagenav-cli` binary.

pub mod commands;
pub mod output;
pub mod terminal;
