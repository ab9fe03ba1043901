//! `log` facade wired to the serial port.

use crate::serial_println;
use log::{LevelFilter, Log, Metadata, Record};

/// `Log` implementation writing to COM1.
struct SerialLogger;

/// The static logger instance handed to `log::set_logger`.
static LOGGER: SerialLogger = SerialLogger;

/// Verbosity: everything in debug builds, info and up in release.
const LEVEL_FILTER: LevelFilter = if cfg!(debug_assertions) {
    LevelFilter::Debug
} else {
    LevelFilter::Info
};

impl Log for SerialLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            serial_println!(
                "[{:5}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

/// Routes the `log` macros to the serial port.
///
/// Idempotent: a second call loses the `set_logger` race and changes
/// nothing.
pub fn init() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LEVEL_FILTER);
    }
}
