use crate::core::OutputSink;
use crate::utils::error::Result;
use std::io::{self, Write};

/// Production sink: writes each message to standard output, one line per call.
#[derive(Debug, Clone, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }

    pub fn write_to<W: Write>(mut out: W, message: &str) -> Result<()> {
        writeln!(out, "{}", message)?;
        Ok(())
    }
}

impl OutputSink for ConsoleSink {
    fn write_line(&self, message: &str) -> Result<()> {
        let stdout = io::stdout();
        Self::write_to(stdout.lock(), message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_a_line_terminator() {
        let mut buf = Vec::new();
        ConsoleSink::write_to(&mut buf, "Hello World").unwrap();
        assert_eq!(buf, b"Hello World\n");
    }
}
