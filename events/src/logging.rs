//! A `log` sink that forwards records over a channel.
//!
//! Handlers typically report through the `log` facade. Installing a [`ChannelLogger`] lets the
//! owner of the receiving end decide where those lines end up (a terminal, a test assertion).

use crossbeam::channel::{Receiver, Sender, unbounded};
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogMessage {
    pub level: Level,
    pub target: String,
    pub message: String,
}

pub struct ChannelLogger {
    sender: Sender<LogMessage>,
    level: LevelFilter,
}

impl log::Log for ChannelLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // A dropped receiver just means nobody is listening anymore.
            let _ = self.sender.try_send(LogMessage {
                level: record.level(),
                target: record.target().to_owned(),
                message: format!("{}", record.args()),
            });
        }
    }

    fn flush(&self) {}
}

impl ChannelLogger {
    pub fn new(sender: Sender<LogMessage>, level: LevelFilter) -> Self {
        Self { sender, level }
    }

    pub fn with_receiver(level: LevelFilter) -> (Self, Receiver<LogMessage>) {
        let (sender, receiver) = unbounded();
        (Self::new(sender, level), receiver)
    }
}

/// Installs a [`ChannelLogger`] as the global logger and returns the receiving end.
///
/// Fails if a global logger has already been set.
pub fn init(level: LevelFilter) -> Result<Receiver<LogMessage>, SetLoggerError> {
    let (logger, receiver) = ChannelLogger::with_receiver(level);
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(level);
    Ok(receiver)
}
