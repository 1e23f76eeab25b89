//
//  app-directory
//  cli/docs.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Discovery document commands. Text documents are printed verbatim,
//! regardless of `--json`.

use anyhow::Result;
use clap::{Args, Subcommand};

use super::GlobalOptions;

/// Fetch discovery documents
#[derive(Args, Debug)]
pub struct DocsCommand {
    #[command(subcommand)]
    pub command: DocsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum DocsSubcommand {
    /// LLM-oriented documentation (llms.txt)
    Llms(LlmsArgs),

    /// OpenAPI document
    Openapi,

    /// Skills index
    Skills,

    /// The App Directory SKILL.md
    Skill(SkillArgs),
}

#[derive(Args, Debug)]
pub struct LlmsArgs {
    /// Fetch the root-level /llms.txt instead of the API one
    #[arg(long)]
    pub root: bool,
}

#[derive(Args, Debug)]
pub struct SkillArgs {
    /// Fetch the copy served under /api/v1
    #[arg(long)]
    pub v1: bool,
}

impl DocsCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let writer = global.writer();

        match &self.command {
            DocsSubcommand::Llms(args) => {
                let text = if args.root {
                    client.llms_txt_root()?
                } else {
                    client.llms_txt()?
                };
                writer.write_text(&text);
                Ok(())
            }
            DocsSubcommand::Openapi => writer.write_value(&client.openapi()?),
            DocsSubcommand::Skills => writer.write_value(&client.skills()?),
            DocsSubcommand::Skill(args) => {
                let text = if args.v1 {
                    client.skill_md_v1()?
                } else {
                    client.skill_md()?
                };
                writer.write_text(&text);
                Ok(())
            }
        }
    }
}
