use crate::core::OutputSink;
use crate::utils::error::{GreetError, Result};
use std::sync::Mutex;

/// Capturing sink: buffers messages in memory instead of emitting them.
/// Serves as the test double for anything holding an `OutputSink`.
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().map(|m| m.clone()).unwrap_or_default()
    }

    pub fn last_message(&self) -> Option<String> {
        self.messages.lock().ok().and_then(|m| m.last().cloned())
    }
}

impl OutputSink for MemorySink {
    fn write_line(&self, message: &str) -> Result<()> {
        let mut messages = self.messages.lock().map_err(|_| GreetError::SinkError {
            message: "memory sink buffer poisoned".to_string(),
        })?;
        messages.push(message.to_string());
        Ok(())
    }
}
