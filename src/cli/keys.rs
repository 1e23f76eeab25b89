//
//  app-directory
//  cli/keys.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! API key management commands (admin)

use anyhow::Result;
use clap::{Args, Subcommand};
use serde_json::Value;

use crate::api::NewKey;

use super::GlobalOptions;

/// Manage API keys
#[derive(Args, Debug)]
pub struct KeysCommand {
    #[command(subcommand)]
    pub command: KeysSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum KeysSubcommand {
    /// List API keys
    #[command(visible_alias = "ls")]
    List,

    /// Create an API key
    Create(CreateArgs),

    /// Revoke an API key
    Revoke(RevokeArgs),
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Label for the key
    pub name: String,

    /// Grant admin rights
    #[arg(long)]
    pub admin: bool,

    /// Requests per minute
    #[arg(long)]
    pub rate_limit: Option<u32>,
}

#[derive(Args, Debug)]
pub struct RevokeArgs {
    /// Key ID
    pub id: String,
}

impl KeysCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let writer = global.writer();

        match &self.command {
            KeysSubcommand::List => writer.write_value(&client.list_keys()?),
            KeysSubcommand::Create(args) => {
                let mut key = NewKey::new(&args.name);
                if args.admin {
                    key = key.admin(true);
                }
                if let Some(limit) = args.rate_limit {
                    key = key.with_rate_limit(limit);
                }
                let created = client.create_key(&key)?;
                if global.json {
                    return writer.write_value(&created);
                }
                if let Some(secret) = created.get("key").and_then(Value::as_str) {
                    writer.write_success(&format!("Created key {}", args.name));
                    writer.write_info(secret);
                    writer.write_warning("Store the key now; it is only shown once.");
                    Ok(())
                } else {
                    writer.write_value(&created)
                }
            }
            KeysSubcommand::Revoke(args) => {
                let result = client.revoke_key(&args.id)?;
                if global.json {
                    writer.write_value(&result)
                } else {
                    writer.write_success(&format!("Revoked key {}", args.id));
                    Ok(())
                }
            }
        }
    }
}
