//
//  app-directory
//  cli/stats.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::{Args, Subcommand};

use super::GlobalOptions;

/// View statistics and trending apps
#[derive(Args, Debug)]
pub struct StatsCommand {
    #[command(subcommand)]
    pub command: StatsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum StatsSubcommand {
    /// View counts for one app
    App(AppArgs),

    /// Most viewed apps
    Trending(TrendingArgs),
}

#[derive(Args, Debug)]
pub struct AppArgs {
    /// App ID or slug
    pub id: String,
}

#[derive(Args, Debug)]
pub struct TrendingArgs {
    /// Look-back window in days
    #[arg(long, short = 'd')]
    pub days: Option<u32>,

    /// Number of apps to return
    #[arg(long, short = 'l')]
    pub limit: Option<u32>,
}

impl StatsCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let result = match &self.command {
            StatsSubcommand::App(args) => client.app_stats(&args.id)?,
            StatsSubcommand::Trending(args) => client.trending(args.days, args.limit)?,
        };
        global.writer().write_value(&result)
    }
}
