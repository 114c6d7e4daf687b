//! Service settings and their command-line form.

use std::time::Duration;

use clap::Args;
use maze_core::cell::{MAX_COST, MIN_COST};
use maze_gen::GenConfig;

use crate::error::{Result, ServiceError};

pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Settings shared by every request.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    /// Mazes generated per request before giving up on finding a solvable one.
    pub max_attempts: u32,
    /// Wall-clock limit on one solve.
    pub request_timeout: Duration,
    pub generator: GenConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            generator: GenConfig::default(),
        }
    }
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_attempts == 0 {
            return Err(ServiceError::InvalidConfig(
                "max attempts must be at least 1".to_string(),
            ));
        }
        if self.request_timeout.is_zero() {
            return Err(ServiceError::InvalidConfig(
                "request timeout must be positive".to_string(),
            ));
        }
        self.generator
            .validate()
            .map_err(|e| ServiceError::InvalidConfig(e.to_string()))
    }
}

/// Command-line flags for [`ServiceConfig`].
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Mazes generated per request before giving up
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,

    /// Share of cells turned into obstructions by the scatter layout
    #[arg(long, global = true, default_value_t = 0.25)]
    pub density: f64,

    /// Smallest random cell cost
    #[arg(long, global = true, default_value_t = MIN_COST)]
    pub cost_min: u8,

    /// Largest random cell cost
    #[arg(long, global = true, default_value_t = MAX_COST)]
    pub cost_max: u8,

    /// Per-request solve timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

impl ConfigArgs {
    /// Build and validate the service configuration.
    pub fn into_config(self) -> Result<ServiceConfig> {
        let config = ServiceConfig {
            max_attempts: self.max_attempts,
            request_timeout: Duration::from_secs(self.timeout_secs),
            generator: GenConfig {
                obstruction_density: self.density,
                cost_min: self.cost_min,
                cost_max: self.cost_max,
            },
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        config: ConfigArgs,
    }

    fn parse(args: &[&str]) -> Result<ServiceConfig> {
        let cli = Cli::try_parse_from(std::iter::once("maze-server").chain(args.iter().copied()))
            .map_err(|e| ServiceError::InvalidConfig(e.to_string()))?;
        cli.config.into_config()
    }

    #[test]
    fn defaults_match_service_defaults() {
        assert_eq!(parse(&[]), Ok(ServiceConfig::default()));
    }

    #[test]
    fn flags_override_defaults() {
        let c = parse(&["--max-attempts", "2", "--density", "0.4", "--cost-max", "5"]).unwrap();
        assert_eq!(c.max_attempts, 2);
        assert_eq!(c.generator.obstruction_density, 0.4);
        assert_eq!(c.generator.cost_max, 5);
        assert_eq!(c.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            parse(&["--max-attempts", "0"]),
            Err(ServiceError::InvalidConfig(_))
        ));
        assert!(matches!(
            parse(&["--density", "1.0"]),
            Err(ServiceError::InvalidConfig(_))
        ));
        assert!(matches!(
            parse(&["--cost-min", "7", "--cost-max", "3"]),
            Err(ServiceError::InvalidConfig(_))
        ));
        assert!(matches!(
            parse(&["--timeout-secs", "0"]),
            Err(ServiceError::InvalidConfig(_))
        ));
    }
}
