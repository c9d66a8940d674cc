use crate::utils::error::Result;
use std::sync::Arc;

/// Capability for emitting one line of output somewhere. Side effects are
/// implementation-defined: console, file, in-memory capture.
pub trait OutputSink: Send + Sync {
    fn write_line(&self, message: &str) -> Result<()>;
}

impl<T: OutputSink + ?Sized> OutputSink for &T {
    fn write_line(&self, message: &str) -> Result<()> {
        (**self).write_line(message)
    }
}

impl<T: OutputSink + ?Sized> OutputSink for Box<T> {
    fn write_line(&self, message: &str) -> Result<()> {
        (**self).write_line(message)
    }
}

impl<T: OutputSink + ?Sized> OutputSink for Arc<T> {
    fn write_line(&self, message: &str) -> Result<()> {
        (**self).write_line(message)
    }
}

pub trait Greet: Send + Sync {
    fn say_hello(&self) -> Result<()>;
}

pub trait GreetConfig: Send + Sync {
    fn repeat(&self) -> usize;
    fn output_path(&self) -> Option<&str>;
    fn json(&self) -> bool;
    fn verbose(&self) -> bool;
}
