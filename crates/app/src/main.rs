//! Subnoto launcher extension - Main entry point
//!
//! Stands in for the launcher host: one command per invocation, rendered
//! as plain text. The heavy lifting lives in the application and
//! infrastructure crates.

use std::process::ExitCode;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so command output stays pipeable.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match commands::run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
