//! Binary entrypoint for the `modgen` CLI.

use std::io::{self, BufWriter};
use std::process::ExitCode;

use modgen::Error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // RUST_LOG may come from a local .env file.
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut out = BufWriter::new(io::stdout().lock());
    match modgen::run(std::env::args(), &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Args(err)) => err.exit(),
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
