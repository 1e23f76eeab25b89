//
//  app-directory
//  cli/moderate.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Moderation commands. All of them require an admin API key.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::Deprecation;

use super::GlobalOptions;

/// Approve, reject and deprecate apps
#[derive(Args, Debug)]
pub struct ModerateCommand {
    #[command(subcommand)]
    pub command: ModerateSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ModerateSubcommand {
    /// Approve a pending app
    Approve(ApproveArgs),

    /// Reject a pending app
    Reject(RejectArgs),

    /// Mark an approved app as deprecated
    Deprecate(DeprecateArgs),

    /// Lift a deprecation
    Undeprecate(IdArgs),
}

#[derive(Args, Debug)]
pub struct IdArgs {
    /// App ID
    pub id: String,
}

#[derive(Args, Debug)]
pub struct ApproveArgs {
    /// App ID
    pub id: String,

    /// Note for the author
    #[arg(long, short = 'n')]
    pub note: Option<String>,
}

#[derive(Args, Debug)]
pub struct RejectArgs {
    /// App ID
    pub id: String,

    /// Why the app was rejected
    #[arg(long, short = 'r')]
    pub reason: String,
}

#[derive(Args, Debug)]
pub struct DeprecateArgs {
    /// App ID
    pub id: String,

    /// Why the app is deprecated
    #[arg(long, short = 'r')]
    pub reason: String,

    /// ID of the app replacing this one
    #[arg(long)]
    pub replacement: Option<String>,

    /// When the app stops working (ISO 8601)
    #[arg(long)]
    pub sunset_at: Option<String>,
}

impl ModerateCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let (result, done) = match &self.command {
            ModerateSubcommand::Approve(args) => {
                (client.approve(&args.id, args.note.as_deref())?, format!("Approved {}", args.id))
            }
            ModerateSubcommand::Reject(args) => {
                (client.reject(&args.id, &args.reason)?, format!("Rejected {}", args.id))
            }
            ModerateSubcommand::Deprecate(args) => {
                let mut deprecation = Deprecation::new(&args.reason);
                if let Some(replacement) = &args.replacement {
                    deprecation = deprecation.with_replacement(replacement);
                }
                if let Some(sunset) = &args.sunset_at {
                    deprecation = deprecation.with_sunset(sunset);
                }
                (client.deprecate(&args.id, &deprecation)?, format!("Deprecated {}", args.id))
            }
            ModerateSubcommand::Undeprecate(args) => {
                (client.undeprecate(&args.id)?, format!("Restored {}", args.id))
            }
        };

        let writer = global.writer();
        if global.json {
            writer.write_value(&result)
        } else {
            writer.write_success(&done);
            Ok(())
        }
    }
}
