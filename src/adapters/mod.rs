// Adapters layer: concrete sink implementations for external targets (console, file, json, memory).

pub mod console;
pub mod file;
pub mod json;
pub mod memory;

pub use console::ConsoleSink;
pub use file::FileSink;
pub use json::JsonSink;
pub use memory::MemorySink;

use crate::core::{GreetConfig, OutputSink};

// Composition-root selection: an output path wins over the console, and the
// json flag wraps whichever base sink was chosen.
pub fn build_sink<C: GreetConfig>(config: &C) -> Box<dyn OutputSink> {
    let base: Box<dyn OutputSink> = match config.output_path() {
        Some(path) => Box::new(FileSink::new(path)),
        None => Box::new(ConsoleSink::new()),
    };

    if config.json() {
        Box::new(JsonSink::new(base))
    } else {
        base
    }
}
