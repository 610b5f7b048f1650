//! Console Logging
//!
//! Routes `tracing` output through the rolling logger into the browser console.

use rolling_logger::{LogBuffer, LogSink, LoggerConfig};
use tracing::Level;
use wasm_bindgen::JsValue;
use web_sys::console;

/// Writes each line with the console method matching its level
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn write(&self, level: Level, line: &str) {
        let line = JsValue::from_str(line);
        match level {
            Level::ERROR => console::error_1(&line),
            Level::WARN => console::warn_1(&line),
            Level::INFO => console::info_1(&line),
            _ => console::debug_1(&line),
        }
    }
}

/// Install the logger; the returned buffer backs the "Recent logs" panel
pub fn init() -> Option<LogBuffer> {
    match rolling_logger::init(LoggerConfig::default(), ConsoleSink) {
        Ok(buffer) => Some(buffer),
        Err(err) => {
            console::warn_1(&JsValue::from_str(&err.to_string()));
            None
        }
    }
}
