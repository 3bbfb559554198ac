//! CLI configuration

use clap::Parser;
use nlip::ClientOptions;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "nlip-cli")]
#[command(about = "Line-oriented chat front-end for an NLIP endpoint")]
pub struct CliConfig {
    /// NLIP endpoint URL
    #[arg(long, env = "NLIP_URL", default_value = "http://localhost:8010/nlip/")]
    pub url: String,

    /// Round-trip timeout in milliseconds
    #[arg(long, env = "NLIP_TIMEOUT_MS", default_value = "30000")]
    pub timeout_ms: u64,

    /// Language of the reply text to display
    #[arg(long, env = "NLIP_LANGUAGE", default_value = "english")]
    pub language: String,
}

impl CliConfig {
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            timeout: Duration::from_millis(self.timeout_ms),
        }
    }
}
