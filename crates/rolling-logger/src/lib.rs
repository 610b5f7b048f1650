//! Rolling Logger
//!
//! A `tracing` layer that formats each event into one line, keeps the most
//! recent lines in a bounded buffer and hands every line to a [`LogSink`].
//! The app plugs in the browser console; tests plug in a vector.

mod buffer;
mod layer;

pub use buffer::{LogBuffer, LogRecord};
pub use layer::{LogSink, RollingLayer};

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

/// Default number of lines kept in memory
pub const DEFAULT_CAPACITY: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Maximum buffered records; the oldest is dropped first
    pub capacity: usize,
    /// Most verbose level recorded
    pub level: Level,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            level: if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO },
        }
    }
}

#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("global logger already installed: {0}")]
    AlreadyInitialized(#[from] TryInitError),
}

/// Install the rolling layer as the global subscriber.
/// Returns a handle to the shared buffer.
pub fn init<K: LogSink>(config: LoggerConfig, sink: K) -> Result<LogBuffer, LoggerError> {
    let buffer = LogBuffer::new(config.capacity);
    let layer = RollingLayer::new(buffer.clone(), sink);

    tracing_subscriber::registry()
        .with(LevelFilter::from_level(config.level))
        .with(layer)
        .try_init()?;

    Ok(buffer)
}
