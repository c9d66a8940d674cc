use crate::core::{Greet, OutputSink, HELLO_WORLD};
use crate::utils::error::Result;

pub struct Greeter<S: OutputSink> {
    sink: S,
}

impl<S: OutputSink> Greeter<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    // One emission per call; repeated calls emit independently.
    pub fn say_hello(&self) -> Result<()> {
        self.sink.write_line(HELLO_WORLD)
    }
}

impl<S: OutputSink> Greet for Greeter<S> {
    fn say_hello(&self) -> Result<()> {
        Greeter::say_hello(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::GreetError;

    struct FailingSink;

    impl OutputSink for FailingSink {
        fn write_line(&self, _message: &str) -> Result<()> {
            Err(GreetError::SinkError {
                message: "sink unavailable".to_string(),
            })
        }
    }

    #[test]
    fn sink_errors_propagate_to_the_caller() {
        let greeter = Greeter::new(FailingSink);
        assert!(greeter.say_hello().is_err());
    }
}
