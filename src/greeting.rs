//! Greeting output.
//!
//! This module owns the greeting text and the write path that emits it.
//! The emit is generic over [`std::io::Write`] so tests can capture the
//! output in an in-memory buffer instead of touching the process stdout.

use std::io::Write;

use tracing::debug;

use crate::Result;

/// The greeting text, without the trailing line terminator.
pub const GREETING: &str = "Hello, World!";

/// Get the greeting text.
pub fn greeting() -> &'static str {
    GREETING
}

/// Write the greeting plus a line terminator to the given writer.
///
/// The writer is flushed before returning so the line is visible even on
/// buffered sinks.
pub fn write_greeting<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{GREETING}")?;
    out.flush()?;
    Ok(())
}

/// Write the greeting to standard output.
///
/// The stdout lock is held only for the duration of the write and released
/// on every return path.
pub fn print_greeting() -> Result<()> {
    debug!("emitting greeting to stdout");
    let mut stdout = std::io::stdout().lock();
    write_greeting(&mut stdout)
}
