use clap::Parser;
use std::error::Error;
use std::fmt;
use std::path::PathBuf;

const DEFAULT_DATA_PATH: &str = "data/campaigns.json";

#[derive(Parser, Debug)]
#[command(name = "campaign-mcpd", version, about = "Email campaign MCP daemon.")]
struct CliArgs {
    /// Path to the campaign record set consumed by queries.
    #[arg(long, env = "CAMPAIGN_DATA_PATH", default_value = DEFAULT_DATA_PATH)]
    data_path: PathBuf,
}

/// Runtime configuration loaded from CLI arguments and environment variables.
#[derive(Clone, Debug)]
pub struct CampaignConfig {
    pub data_path: PathBuf,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidSetting { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSetting { name, value } => {
                write!(f, "invalid {name} value: {value:?}")
            }
        }
    }
}

impl Error for ConfigError {}

impl CampaignConfig {
    /// Parses configuration from the process arguments and environment.
    ///
    /// # Errors
    /// Returns `ConfigError` when a setting fails validation.
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::try_from(args)
    }
}

impl TryFrom<CliArgs> for CampaignConfig {
    type Error = ConfigError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.data_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidSetting {
                name: "CAMPAIGN_DATA_PATH",
                value: String::new(),
            });
        }
        Ok(Self {
            data_path: args.data_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_data_path_is_accepted() {
        let args = CliArgs {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
        };

        let config = CampaignConfig::try_from(args).expect("config should parse");

        assert_eq!(config.data_path, PathBuf::from(DEFAULT_DATA_PATH));
    }

    #[test]
    fn empty_data_path_is_rejected() {
        let args = CliArgs {
            data_path: PathBuf::new(),
        };

        let err = CampaignConfig::try_from(args).expect_err("config should be rejected");

        assert!(matches!(
            err,
            ConfigError::InvalidSetting {
                name: "CAMPAIGN_DATA_PATH",
                ..
            }
        ));
    }
}
