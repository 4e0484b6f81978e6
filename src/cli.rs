//! CLI argument definitions.

use clap::Parser;

use crate::driver::DEFAULT_COUNT;

/// Top-level CLI parser for `modgen`.
#[derive(Debug, Parser)]
#[command(name = "modgen", version, about = "Write synthetic module definitions to stdout")]
pub struct Cli {
    /// Number of module blocks to write.
    #[arg(short = 'n', long, value_name = "COUNT", default_value_t = DEFAULT_COUNT)]
    pub count: u32,
}
