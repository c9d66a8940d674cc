use crate::core::{Greeting, OutputSink};
use crate::utils::error::Result;

/// Decorator sink: encodes each message as a one-line JSON greeting and
/// forwards it to the inner sink.
pub struct JsonSink<S: OutputSink> {
    inner: S,
}

impl<S: OutputSink> JsonSink<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: OutputSink> OutputSink for JsonSink<S> {
    fn write_line(&self, message: &str) -> Result<()> {
        let line = serde_json::to_string(&Greeting::new(message))?;
        self.inner.write_line(&line)
    }
}
