//! Algorithms command handler.

use std::io::Write;

use anyhow::{Context, Result};

use crate::output::OutputFormat;

/// Write the supported search strategies in menu order.
pub fn handle_algorithms_command<W: Write>(format: OutputFormat, out: &mut W) -> Result<()> {
    format
        .render_algorithms(out)
        .context("failed to write algorithm list")
}
