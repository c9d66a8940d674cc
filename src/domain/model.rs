use serde::{Deserialize, Serialize};

/// The one message this system emits. Passed through sinks unmodified.
pub const HELLO_WORLD: &str = "Hello World";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Greeting {
    pub message: String,
}

impl Greeting {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
