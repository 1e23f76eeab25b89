//
//  app-directory
//  cli/webhooks.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Webhook management commands
//!
//! Webhooks notify external services about directory events. All commands
//! require an admin API key.
//!
//! ## Examples
//!
//! ```bash
//! # Register a webhook for two events
//! ad webhooks create --url https://example.com/hook --events app.submitted,app.approved
//!
//! # Pause it
//! ad webhooks update <id> --active false
//! ```

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use crate::api::{NewWebhook, WebhookUpdate, WEBHOOK_EVENTS};

use super::GlobalOptions;

/// Manage webhooks
#[derive(Args, Debug)]
pub struct WebhooksCommand {
    #[command(subcommand)]
    pub command: WebhooksSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum WebhooksSubcommand {
    /// Register a webhook
    Create(CreateArgs),

    /// List webhooks
    #[command(visible_alias = "ls")]
    List,

    /// Change a webhook
    Update(UpdateArgs),

    /// Delete a webhook
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Delivery URL
    #[arg(long, short = 'u')]
    pub url: String,

    /// Events to subscribe to (comma-separated); all events when omitted
    #[arg(long, short = 'e', value_delimiter = ',')]
    pub events: Vec<String>,

    /// Secret for payload signatures
    #[arg(long, short = 's')]
    pub secret: Option<String>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Webhook ID
    pub id: String,

    /// New delivery URL
    #[arg(long, short = 'u')]
    pub url: Option<String>,

    /// Replace the subscribed events (comma-separated)
    #[arg(long, short = 'e', value_delimiter = ',')]
    pub events: Option<Vec<String>>,

    /// Enable or disable delivery
    #[arg(long)]
    pub active: Option<bool>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Webhook ID
    pub id: String,
}

impl WebhooksCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            WebhooksSubcommand::Create(args) => self.create(args, global),
            WebhooksSubcommand::List => {
                let hooks = global.client()?.list_webhooks()?;
                global.writer().write_value(&hooks)
            }
            WebhooksSubcommand::Update(args) => self.update(args, global),
            WebhooksSubcommand::Delete(args) => {
                let result = global.client()?.delete_webhook(&args.id)?;
                let writer = global.writer();
                if global.json {
                    writer.write_value(&result)
                } else {
                    writer.write_success(&format!("Deleted webhook {}", args.id));
                    Ok(())
                }
            }
        }
    }

    fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let writer = global.writer();
        warn_unknown_events(&args.events, |msg| writer.write_warning(msg));

        let mut webhook = NewWebhook::new(&args.url);
        if !args.events.is_empty() {
            webhook = webhook.with_events(&args.events);
        }
        if let Some(secret) = &args.secret {
            webhook = webhook.with_secret(secret);
        }

        let created = global.client()?.create_webhook(&webhook)?;
        writer.write_value(&created)
    }

    fn update(&self, args: &UpdateArgs, global: &GlobalOptions) -> Result<()> {
        if args.url.is_none() && args.events.is_none() && args.active.is_none() {
            bail!("Nothing to update. Pass --url, --events or --active.");
        }
        let writer = global.writer();
        if let Some(events) = &args.events {
            warn_unknown_events(events, |msg| writer.write_warning(msg));
        }

        let update = WebhookUpdate {
            url: args.url.clone(),
            events: args.events.clone(),
            active: args.active,
        };
        let updated = global.client()?.update_webhook(&args.id, &update)?;
        writer.write_value(&updated)
    }
}

/// Unknown names are still sent; the server is the authority on events.
fn warn_unknown_events(events: &[String], mut warn: impl FnMut(&str)) {
    for event in events {
        if !WEBHOOK_EVENTS.contains(&event.as_str()) {
            warn(&format!("Unknown event '{event}'. Known events: {}", WEBHOOK_EVENTS.join(", ")));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warn_unknown_events() {
        let mut warnings = Vec::new();
        warn_unknown_events(
            &["app.approved".to_string(), "app.exploded".to_string()],
            |msg| warnings.push(msg.to_string()),
        );
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("app.exploded"));
    }
}
