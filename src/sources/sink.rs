use super::MessageSink;
use crate::errors::{AppError, AppResult};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Separator written between two messages in the outbox file
pub const OUTBOX_SEPARATOR: &str = "\n\n-----\n\n";

/// Prints the message to stdout.
pub struct ConsoleSink;

impl MessageSink for ConsoleSink {
    fn deliver(&self, text: &str) -> AppResult<bool> {
        println!("{}", text);
        Ok(true)
    }
}

/// Hands the message back through the run result only. Used when the
/// caller prints the whole result (`brief --json`) to the console.
pub struct ResultOnlySink;

impl MessageSink for ResultOnlySink {
    fn deliver(&self, _text: &str) -> AppResult<bool> {
        Ok(true)
    }
}

/// Appends every delivered message to a local outbox file.
pub struct OutboxSink {
    path: PathBuf,
}

impl OutboxSink {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl MessageSink for OutboxSink {
    fn deliver(&self, text: &str) -> AppResult<bool> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| AppError::Delivery(format!("cannot open {}: {}", self.path.display(), e)))?;

        let is_empty = file
            .metadata()
            .map(|m| m.len() == 0)
            .map_err(|e| AppError::Delivery(e.to_string()))?;
        if !is_empty {
            file.write_all(OUTBOX_SEPARATOR.as_bytes())
                .map_err(|e| AppError::Delivery(e.to_string()))?;
        }

        file.write_all(text.as_bytes()).map_err(|e| {
            AppError::Delivery(format!("cannot write {}: {}", self.path.display(), e))
        })?;
        Ok(true)
    }
}
