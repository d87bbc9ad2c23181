//! Minimal greeter.
//!
//! Emits the fixed text `Hello, World!`, newline-terminated, to standard
//! output. The library exposes the greeting and a writer-generic emit so the
//! output can be verified against an in-memory buffer; the binary wires it
//! to the real stdout.

pub mod error;
pub mod greeting;

pub use error::{GreeterError, Result};
pub use greeting::{GREETING, greeting, print_greeting, write_greeting};

/// Run the greeter: write the greeting to standard output.
pub fn run() -> Result<()> {
    greeting::print_greeting()
}
