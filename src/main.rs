//! Greeter binary entry point.

use tracing_subscriber::EnvFilter;

fn main() {
    // Diagnostics go to stderr; stdout carries only the greeting.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = hello_world::run() {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
