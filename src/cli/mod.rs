//
//  app-directory
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod api;
mod apps;
mod checks;
mod config;
mod docs;
mod keys;
mod moderate;
mod reviews;
mod stats;
mod webhooks;

pub use api::ApiCommand;
pub use apps::AppsCommand;
pub use checks::ChecksCommand;
pub use config::ConfigCommand;
pub use docs::DocsCommand;
pub use keys::KeysCommand;
pub use moderate::ModerateCommand;
pub use reviews::ReviewsCommand;
pub use stats::StatsCommand;
pub use webhooks::WebhooksCommand;

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::api::DirectoryClient;
use crate::config::{ClientConfig, Settings};
use crate::output::OutputWriter;

/// App Directory CLI - browse, submit and moderate apps from the command line
#[derive(Parser, Debug)]
#[command(
    name = "ad",
    version,
    about = "Work with an App Directory server from the command line",
    long_about = "ad is a CLI for the App Directory API.\n\n\
                  It lists, searches and submits apps, and gives admins moderation, \
                  health check, webhook and API key management.",
    propagate_version = true,
    after_help = "Use 'ad <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Server base URL [default: http://localhost:3003]
    #[arg(long, global = true, env = "APP_DIRECTORY_URL")]
    pub base_url: Option<String>,

    /// Admin API key, sent as a bearer token on privileged commands
    #[arg(long, global = true, env = "APP_DIRECTORY_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Default edit token for update and delete
    #[arg(long, global = true, env = "APP_DIRECTORY_EDIT_TOKEN", hide_env_values = true)]
    pub edit_token: Option<String>,

    /// Request timeout in seconds [default: 30]
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

impl GlobalOptions {
    /// Merges flags (and their environment variables) over the settings
    /// file and returns the resulting configuration.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let settings = Settings::load()?;
        Ok(self.merge(&settings)?)
    }

    pub fn client(&self) -> Result<DirectoryClient> {
        let config = self.client_config()?;
        debug!("using {:?}", config);
        Ok(DirectoryClient::new(config)?)
    }

    pub fn writer(&self) -> OutputWriter {
        OutputWriter::for_flag(self.json)
    }

    fn merge(&self, settings: &Settings) -> crate::Result<ClientConfig> {
        let mut builder = ClientConfig::builder();

        if let Some(url) = self.base_url.as_ref().or(settings.base_url.as_ref()) {
            builder = builder.base_url(url);
        }
        if let Some(key) = self.api_key.as_ref().or(settings.api_key.as_ref()) {
            builder = builder.api_key(key);
        }
        if let Some(token) = self.edit_token.as_ref().or(settings.edit_token.as_ref()) {
            builder = builder.edit_token(token);
        }
        if let Some(secs) = self.timeout.or(settings.timeout_secs) {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        // clap already folded the environment into the flags
        builder.build_with_env(|_| None)
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check that the server is up
    Health,

    /// Browse, submit and edit apps
    #[command(visible_alias = "app")]
    Apps(AppsCommand),

    /// Approve, reject and deprecate apps (admin)
    #[command(visible_alias = "mod")]
    Moderate(ModerateCommand),

    /// Submit and read reviews
    Reviews(ReviewsCommand),

    /// List categories with app counts
    Categories,

    /// View statistics and trending apps
    Stats(StatsCommand),

    /// Run and inspect app health checks
    Checks(ChecksCommand),

    /// Manage webhooks (admin)
    Webhooks(WebhooksCommand),

    /// Manage API keys (admin)
    Keys(KeysCommand),

    /// Fetch discovery documents
    Docs(DocsCommand),

    /// Make a raw API request
    Api(ApiCommand),

    /// Manage CLI settings
    Config(ConfigCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_beat_settings() {
        let global = GlobalOptions {
            base_url: Some("http://flag.example".into()),
            timeout: Some(5),
            ..Default::default()
        };
        let settings = Settings {
            base_url: Some("http://file.example".into()),
            api_key: Some("file-key".into()),
            timeout_secs: Some(60),
            ..Default::default()
        };

        let config = global.merge(&settings).unwrap();
        assert_eq!(config.base_url(), "http://flag.example");
        assert_eq!(config.api_key(), Some("file-key"));
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_defaults_without_flags_or_settings() {
        let config = GlobalOptions::default().merge(&Settings::default()).unwrap();
        assert_eq!(config.base_url(), crate::config::DEFAULT_BASE_URL);
        assert_eq!(config.api_key(), None);
        assert_eq!(config.timeout(), crate::config::DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["ad", "apps", "get", "weather-api", "--json", "--timeout", "3"]).unwrap();
        assert!(cli.global.json);
        assert_eq!(cli.global.timeout, Some(3));
    }
}
