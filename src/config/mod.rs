use crate::core::GreetConfig;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "small-greet")]
#[command(about = "A small greeting tool with swappable output sinks")]
pub struct CliConfig {
    #[arg(long, help = "Append greetings to this file instead of stdout")]
    pub output: Option<String>,

    #[arg(long, help = "Emit each greeting as a JSON line")]
    pub json: bool,

    #[arg(long, default_value = "1", help = "Number of times to emit the greeting")]
    pub repeat: usize,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl GreetConfig for CliConfig {
    fn repeat(&self) -> usize {
        self.repeat
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }

    fn json(&self) -> bool {
        self.json
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_positive_number("repeat", self.repeat, 1)?;

        if let Some(output) = &self.output {
            validation::validate_path("output", output)?;
        }

        Ok(())
    }
}
