//
//  app-directory
//  cli/checks.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Health check commands
//!
//! ```bash
//! # Probe one app now
//! ad checks run <app-id>
//!
//! # Probe several, or every approved app when no IDs are given
//! ad checks batch id1 id2
//! ```

use anyhow::Result;
use clap::{Args, Subcommand};

use super::apps::PageArgs;
use super::GlobalOptions;

/// Run and inspect app health checks
#[derive(Args, Debug)]
pub struct ChecksCommand {
    #[command(subcommand)]
    pub command: ChecksSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ChecksSubcommand {
    /// Check one app now (admin)
    Run(RunArgs),

    /// Check several apps, or all approved apps (admin)
    Batch(BatchArgs),

    /// Past check results for an app
    History(HistoryArgs),

    /// Latest status counts across all apps
    Summary,

    /// Run the scheduled check cycle now (admin)
    Schedule,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// App ID
    pub app_id: String,
}

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// App IDs; all approved apps when omitted
    pub app_ids: Vec<String>,
}

#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// App ID
    pub app_id: String,

    #[command(flatten)]
    pub page: PageArgs,
}

impl ChecksCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let result = match &self.command {
            ChecksSubcommand::Run(args) => client.health_check(&args.app_id)?,
            ChecksSubcommand::Batch(args) => {
                let ids = (!args.app_ids.is_empty()).then_some(args.app_ids.as_slice());
                client.health_check_batch(ids)?
            }
            ChecksSubcommand::History(args) => client.health_history(&args.app_id, args.page.to_page())?,
            ChecksSubcommand::Summary => client.health_summary()?,
            ChecksSubcommand::Schedule => client.health_schedule()?,
        };
        global.writer().write_value(&result)
    }
}
