//! Paths command handler.
//!
//! Displays the resolved storage context for diagnostics.

use std::io::Write;

use anyhow::Result;
use deepdrive_core::DeepdriveContext;

/// Print `ctx` as `key = value` lines, or as pretty JSON.
pub fn execute(ctx: &DeepdriveContext, json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, ctx)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{ctx}")?;
    }
    Ok(())
}
