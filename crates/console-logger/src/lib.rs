//! Console Logger
//!
//! `log` backend for WASM frontends. Records go to `console.debug/info/warn/error`
//! so the browser's own level filter works.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;

struct ConsoleLogger {
    level: LevelFilter,
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f").to_string();
        let line = format_line(&timestamp, record.level(), record.target(), &record.args().to_string());
        let value = JsValue::from_str(&line);

        match record.level() {
            Level::Error => web_sys::console::error_1(&value),
            Level::Warn => web_sys::console::warn_1(&value),
            Level::Info => web_sys::console::info_1(&value),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger as the global `log` backend.
///
/// Fails if another logger was installed first.
pub fn init_logger(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ConsoleLogger { level }))?;
    log::set_max_level(level);
    Ok(())
}

/// Parse a level name such as `"info"`; unknown names yield `None`
pub fn parse_level(raw: &str) -> Option<LevelFilter> {
    raw.trim().parse::<LevelFilter>().ok()
}

fn format_line(timestamp: &str, level: Level, target: &str, message: &str) -> String {
    // Crate-relative targets are noise in the console
    let target = target.split("::").skip(1).collect::<Vec<_>>().join("::");
    if target.is_empty() {
        format!("[{timestamp}] {level:<5} {message}")
    } else {
        format!("[{timestamp}] {level:<5} {target}: {message}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_strips_crate_name() {
        let line = format_line("12:00:00.000", Level::Info, "rewards_ui::api", "GET /app-tasks/");
        assert_eq!(line, "[12:00:00.000] INFO  api: GET /app-tasks/");
    }

    #[test]
    fn test_format_line_crate_root_target() {
        let line = format_line("12:00:00.000", Level::Warn, "rewards_ui", "config fallback");
        assert_eq!(line, "[12:00:00.000] WARN  config fallback");
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_level(" WARN "), Some(LevelFilter::Warn));
        assert_eq!(parse_level("loud"), None);
    }
}
