//! Core library entry for the `modgen` fixture generator.

pub mod cli;
pub mod driver;
pub mod error;
pub mod template;

use std::io::Write;

use clap::Parser;

pub use error::{Error, Result};

/// Run the CLI with the provided arguments, writing blocks to `out`.
///
/// # Errors
///
/// Returns an error when argument parsing fails or the sink fails.
pub fn run<I, T, W>(args: I, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    W: Write + ?Sized,
{
    let cli = cli::Cli::try_parse_from(args)?;
    driver::run(out, cli.count)?;
    Ok(())
}
