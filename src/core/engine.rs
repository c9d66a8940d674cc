use crate::core::Greet;
use crate::utils::error::Result;

pub struct GreetEngine<G: Greet> {
    greeter: G,
    repeat: usize,
}

impl<G: Greet> GreetEngine<G> {
    pub fn new(greeter: G) -> Self {
        Self { greeter, repeat: 1 }
    }

    pub fn new_with_repeat(greeter: G, repeat: usize) -> Self {
        Self { greeter, repeat }
    }

    pub fn run(&self) -> Result<usize> {
        tracing::info!("Starting greeting run");

        for round in 1..=self.repeat {
            tracing::debug!("Greeting {} of {}", round, self.repeat);
            self.greeter.say_hello()?;
        }

        tracing::info!("Emitted {} greeting(s)", self.repeat);
        Ok(self.repeat)
    }
}
