//
//  app-directory
//  cli/reviews.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Review commands

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::NewReview;

use super::apps::PageArgs;
use super::GlobalOptions;

/// Submit and read reviews
#[derive(Args, Debug)]
pub struct ReviewsCommand {
    #[command(subcommand)]
    pub command: ReviewsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ReviewsSubcommand {
    /// Review an app
    Add(AddArgs),

    /// List reviews of an app
    #[command(visible_alias = "ls")]
    List(ListArgs),
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// App ID
    pub app_id: String,

    /// Rating from 1 to 5
    #[arg(long, short = 'r')]
    pub rating: u8,

    #[arg(long, short = 't')]
    pub title: Option<String>,

    #[arg(long, short = 'b')]
    pub body: Option<String>,

    /// Name shown next to the review
    #[arg(long)]
    pub reviewer_name: Option<String>,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// App ID
    pub app_id: String,

    #[command(flatten)]
    pub page: PageArgs,
}

impl ReviewsCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        match &self.command {
            ReviewsSubcommand::Add(args) => {
                let mut review = NewReview::new(args.rating);
                if let Some(title) = &args.title {
                    review = review.with_title(title);
                }
                if let Some(body) = &args.body {
                    review = review.with_body(body);
                }
                if let Some(name) = &args.reviewer_name {
                    review = review.with_reviewer(name);
                }
                let created = client.submit_review(&args.app_id, &review)?;
                global.writer().write_value(&created)
            }
            ReviewsSubcommand::List(args) => {
                let reviews = client.list_reviews(&args.app_id, args.page.to_page())?;
                global.writer().write_value(&reviews)
            }
        }
    }
}
