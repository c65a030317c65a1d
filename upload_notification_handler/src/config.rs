use anyhow::Context;
use aws_config::{BehaviorVersion, Region, SdkConfig, meta::region::RegionProviderChain};

/// The region used when nothing in the default provider chain resolves one
pub const DEFAULT_REGION: &str = "us-east-1";

/// The configuration parameters for the application.
///
/// These are pulled from environment variables, which is how the lambda is configured at deploy
/// time. A `.env` file is honoured when running locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The ARN of the SNS topic that upload notifications are published to
    pub topic_arn: String,
}

impl Config {
    pub fn new(topic_arn: &str) -> Self {
        Config {
            topic_arn: topic_arn.to_string(),
        }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        let topic_arn = std::env::var("SNS_TOPIC_ARN").context("SNS_TOPIC_ARN must be provided")?;

        Ok(Config::new(topic_arn.as_str()))
    }
}

pub async fn load_aws_config() -> SdkConfig {
    let region_provider =
        RegionProviderChain::default_provider().or_else(Region::new(DEFAULT_REGION));
    aws_config::defaults(BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_keeps_topic_arn_verbatim() {
        let config = Config::new("arn:aws:sns:us-east-1:123456789012:s3-upload-notifications");
        assert_eq!(
            config.topic_arn,
            "arn:aws:sns:us-east-1:123456789012:s3-upload-notifications"
        );
    }
}
