pub mod engine;
pub mod greeter;

pub use crate::domain::model::{Greeting, HELLO_WORLD};
pub use crate::domain::ports::{Greet, GreetConfig, OutputSink};
pub use crate::utils::error::Result;
