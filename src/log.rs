//! Simple file-based logging for debugging
//!
//! Logging is opt-in: nothing is written until `init` (or `init_at`) has
//! opened the log file. Library callers that never initialize it pay only a
//! mutex check per `log!` call.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use parking_lot::Mutex;

static LOG_FILE: Mutex<Option<File>> = Mutex::new(None);

/// Default log file location: next to the current working directory
fn default_log_path() -> PathBuf {
    PathBuf::from("storefront.log")
}

/// Initialize logging to the default log file
pub fn init() {
    init_at(&default_log_path());
}

/// Initialize logging to a specific file, truncating any previous contents
pub fn init_at(path: &Path) {
    if let Ok(file) = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
    {
        *LOG_FILE.lock() = Some(file);
    }

    log("=== Storefront log started ===");
}

/// Log a message to the file, if logging has been initialized
pub fn log(msg: &str) {
    let mut guard = LOG_FILE.lock();
    if let Some(ref mut file) = *guard {
        let ts = Local::now().format("%H:%M:%S%.3f");
        let _ = writeln!(file, "[{}] {}", ts, msg);
        let _ = file.flush();
    }
}

/// Log a formatted message
#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::log::log(&format!($($arg)*))
    };
}
