//! Configuration and CLI argument handling

use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "microwave-control")]
#[command(about = "Microwave countdown and control state machine served over HTTP")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Capacity of the command queue into the appliance task
    #[arg(long, default_value = "32", value_parser = clap::value_parser!(u16).range(1..))]
    pub queue_depth: u16,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["microwave-control"]).unwrap();
        assert_eq!(config.address(), "0.0.0.0:20554");
        assert_eq!(config.queue_depth, 32);
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn verbose_switches_to_debug() {
        let config = Config::try_parse_from(["microwave-control", "-v", "-p", "8080", "--host", "127.0.0.1"]).unwrap();
        assert_eq!(config.address(), "127.0.0.1:8080");
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn rejects_zero_queue_depth() {
        assert!(Config::try_parse_from(["microwave-control", "--queue-depth", "0"]).is_err());
    }
}
