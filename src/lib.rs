pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{ConsoleSink, FileSink, JsonSink, MemorySink};
pub use crate::core::{engine::GreetEngine, greeter::Greeter};
pub use crate::utils::error::{GreetError, Result};
