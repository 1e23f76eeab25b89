//
//  app-directory
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI settings commands
//!
//! Settings are defaults for the global flags, stored in a TOML file.
//! Flags and environment variables always win over them.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use crate::config::{Settings, SETTINGS_KEYS};

use super::GlobalOptions;

/// Manage CLI settings
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Show the settings file path
    Path,

    /// Show stored settings and the resolved configuration
    #[command(visible_alias = "list")]
    Show,

    /// Set a setting; an empty value removes it
    Set(SetArgs),
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Setting key (base_url, api_key, edit_token, timeout_secs)
    pub key: String,

    /// Setting value
    pub value: String,
}

/// Secrets are shown only by presence.
fn display_value(key: &str, value: Option<String>) -> Option<String> {
    match key {
        "api_key" | "edit_token" => value.map(|_| "<redacted>".to_string()),
        _ => value,
    }
}

impl ConfigCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConfigSubcommand::Path => {
                println!("{}", Settings::path()?.display());
                Ok(())
            }
            ConfigSubcommand::Show => self.show(global),
            ConfigSubcommand::Set(args) => self.set(args, global),
        }
    }

    fn show(&self, global: &GlobalOptions) -> Result<()> {
        let settings = Settings::load()?;
        let resolved = global.client_config()?;

        if global.json {
            let mut stored = serde_json::Map::new();
            for key in SETTINGS_KEYS {
                if let Some(value) = display_value(key, settings.get(key)) {
                    stored.insert((*key).to_string(), value.into());
                }
            }
            let result = serde_json::json!({
                "path": Settings::path()?.display().to_string(),
                "settings": stored,
                "resolved": {
                    "base_url": resolved.base_url(),
                    "api_key": resolved.api_key().is_some(),
                    "edit_token": resolved.edit_token().is_some(),
                    "timeout_secs": resolved.timeout().as_secs(),
                },
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        println!("{}", style("Settings").bold());
        for key in SETTINGS_KEYS {
            let value = display_value(key, settings.get(key)).unwrap_or_else(|| "(not set)".to_string());
            println!("  {}: {}", style(key).dim(), value);
        }
        println!();
        println!("{}", style("Resolved").bold());
        println!("  {}: {}", style("base_url").dim(), resolved.base_url());
        println!("  {}: {}", style("api_key").dim(), if resolved.api_key().is_some() { "set" } else { "not set" });
        println!("  {}: {}", style("edit_token").dim(), if resolved.edit_token().is_some() { "set" } else { "not set" });
        println!("  {}: {}s", style("timeout").dim(), resolved.timeout().as_secs());
        Ok(())
    }

    fn set(&self, args: &SetArgs, global: &GlobalOptions) -> Result<()> {
        let mut settings = Settings::load()?;
        settings.set(&args.key, &args.value)?;
        settings.save()?;

        if global.json {
            let result = serde_json::json!({
                "success": true,
                "key": args.key,
                "value": display_value(&args.key, settings.get(&args.key)),
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("{} Set {}", style("✓").green(), args.key);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_value_hides_secrets() {
        assert_eq!(display_value("api_key", Some("k".into())).as_deref(), Some("<redacted>"));
        assert_eq!(display_value("api_key", None), None);
        assert_eq!(display_value("base_url", Some("http://x".into())).as_deref(), Some("http://x"));
    }
}
