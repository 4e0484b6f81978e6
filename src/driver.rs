//! Emits the run of module blocks.

use std::io::{self, Write};

use tracing::{debug, info};

use crate::template::write_block;

/// Number of blocks written when no count is given.
pub const DEFAULT_COUNT: u32 = 2000;

/// Writes blocks `0..count` to `out` in increasing order, then flushes it.
///
/// # Errors
///
/// Stops at the first sink error and returns it unchanged.
pub fn run<W: Write + ?Sized>(out: &mut W, count: u32) -> io::Result<()> {
    info!(count, "generating modules");
    for n in 0..i64::from(count) {
        write_block(out, n)?;
    }
    out.flush()?;
    debug!(count, "generation complete");
    Ok(())
}
