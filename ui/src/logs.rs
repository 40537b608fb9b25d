//! Tracing output routed to the javascript console.

use tracing_subscriber::{EnvFilter, prelude::*};
use tracing_web::MakeWebConsoleWriter;

/// Install the console subscriber. Call once, before the first render.
pub fn init_logging() {
    // App crates at debug, everything else errors only.
    let env_filter = EnvFilter::new("error,ui=debug,livestore=debug");

    // No timestamps (std::time is unavailable in browsers) and no ansi
    // colors (inconsistent console support).
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new().with_pretty_level())
        .with_level(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::info!("console logging ready");
}
