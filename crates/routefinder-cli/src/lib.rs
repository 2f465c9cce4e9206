//! Routefinder CLI library.
//!
//! Subcommand handlers, output formatting and terminal styling for the
//! `routefinder` binary. Handlers write to any [`std::io::Write`] so they can
//! be driven from tests without a terminal.

pub mod commands;
pub mod output;
pub mod terminal;
