//! Logging to stdout in both wire formats.
//!
//! Run with: cargo run --example simple

use ctlog::{ctlog_error, ctlog_info, ctlog_warn, Logger, LoggerOptions};
use std::error::Error;
use std::io;

const MAIN: u32 = 0;
const SENSOR: u32 = 1;

fn main() -> Result<(), Box<dyn Error>> {
    let tokenized = Logger::tokenized(LoggerOptions::new().with_enabled(true));
    tokenized.set_sink(io::stdout());

    ctlog_info!(tokenized, MAIN, "Enter main")?;
    for reading in [17u32, 21, 96] {
        if reading > 90 {
            ctlog_warn!(tokenized, SENSOR, "reading %u over limit", reading)?;
        } else {
            ctlog_info!(tokenized, SENSOR, "reading %u", reading)?;
        }
    }

    // Calls made while disabled still take a sequence number.
    tokenized.set_enabled(false);
    ctlog_info!(tokenized, MAIN, "not sent")?;
    tokenized.set_enabled(true);
    ctlog_error!(tokenized, MAIN, "exit with %s", "status \"ok\"")?;
    tokenized.flush()?;

    let json = Logger::json(LoggerOptions::new().with_enabled(true));
    json.set_sink(io::stdout());
    ctlog_info!(json, SENSOR, "calibrated=%t offset=%d", true, -3)?;
    json.flush()?;

    Ok(())
}
