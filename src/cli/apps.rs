//
//  app-directory
//  cli/apps.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! App listing commands
//!
//! ## Examples
//!
//! ```bash
//! # Browse approved apps
//! ad apps list --protocol rest --sort rating
//!
//! # Full-text search
//! ad apps search monitoring
//!
//! # Submit an app and keep the returned edit token
//! ad apps submit --name "My Service" --short-description "A useful tool" \
//!     --description "Full description" --author-name Alice --protocol rest
//!
//! # Edit it later
//! ad apps update my-service --token <token> --set short_description="Better"
//! ad apps update my-service --token <token> --set-json tags='["weather","forecast"]'
//! ```

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use serde_json::Value;

use crate::api::{AppUpdate, ListAppsQuery, NewApp, Page, SearchQuery};

use super::GlobalOptions;

/// Browse, submit and edit apps
#[derive(Args, Debug)]
pub struct AppsCommand {
    #[command(subcommand)]
    pub command: AppsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AppsSubcommand {
    /// List apps
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show one app by ID or slug
    #[command(visible_alias = "view")]
    Get(GetArgs),

    /// Full-text search
    Search(SearchArgs),

    /// List apps owned by the API key
    Mine,

    /// List apps awaiting moderation (admin)
    Pending(PageArgs),

    /// Submit a new app
    Submit(SubmitArgs),

    /// Update fields of an app
    Update(UpdateArgs),

    /// Delete an app
    Delete(DeleteArgs),

    /// Find an app by exact name (case-insensitive)
    Find(FindArgs),
}

#[derive(Args, Debug, Default)]
pub struct PageArgs {
    /// Page number
    #[arg(long)]
    pub page: Option<u32>,

    /// Results per page
    #[arg(long)]
    pub per_page: Option<u32>,
}

impl PageArgs {
    pub fn to_page(&self) -> Page {
        Page {
            page: self.page,
            per_page: self.per_page,
        }
    }
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Filter by category
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Filter by protocol (rest, graphql, grpc, mcp, a2a, websocket, other)
    #[arg(long, short = 'p')]
    pub protocol: Option<String>,

    /// Filter by status (pending, approved, rejected, deprecated, all)
    #[arg(long, short = 's')]
    pub status: Option<String>,

    /// Filter by featured flag (bare flag means true)
    #[arg(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub featured: Option<bool>,

    /// Filter by verified flag (bare flag means true)
    #[arg(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub verified: Option<bool>,

    /// Filter by latest health check result
    #[arg(long)]
    pub health: Option<String>,

    /// Sort order (name, newest, oldest, rating)
    #[arg(long)]
    pub sort: Option<String>,

    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// App ID or slug
    pub id: String,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search terms
    pub query: String,

    /// Filter by category
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Filter by protocol
    #[arg(long, short = 'p')]
    pub protocol: Option<String>,

    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// App name
    #[arg(long)]
    pub name: String,

    /// One-line summary
    #[arg(long)]
    pub short_description: String,

    /// Full description
    #[arg(long)]
    pub description: String,

    /// Author name
    #[arg(long)]
    pub author_name: String,

    /// API protocol
    #[arg(long, short = 'p')]
    pub protocol: Option<String>,

    /// Category
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Tags (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub tags: Vec<String>,

    #[arg(long)]
    pub homepage_url: Option<String>,

    #[arg(long)]
    pub api_url: Option<String>,

    #[arg(long)]
    pub api_spec_url: Option<String>,

    #[arg(long)]
    pub logo_url: Option<String>,

    #[arg(long)]
    pub author_url: Option<String>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// App ID
    pub id: String,

    /// Field to change, as FIELD=VALUE; VALUE is sent as a string. Repeatable.
    #[arg(
        long = "set",
        value_name = "FIELD=VALUE",
        action = clap::ArgAction::Append,
        required_unless_present = "json_fields"
    )]
    pub fields: Vec<String>,

    /// Field to change, as FIELD=JSON (numbers, booleans, arrays). Repeatable.
    #[arg(long = "set-json", value_name = "FIELD=JSON", action = clap::ArgAction::Append)]
    pub json_fields: Vec<String>,

    /// Edit token for this app; wins over the admin key
    #[arg(long, value_name = "TOKEN")]
    pub token: Option<String>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// App ID
    pub id: String,

    /// Edit token for this app; wins over the admin key
    #[arg(long, value_name = "TOKEN")]
    pub token: Option<String>,
}

#[derive(Args, Debug)]
pub struct FindArgs {
    /// Exact app name
    pub name: String,
}

impl AppsCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            AppsSubcommand::List(args) => self.list(args, global),
            AppsSubcommand::Get(args) => self.get(args, global),
            AppsSubcommand::Search(args) => self.search(args, global),
            AppsSubcommand::Mine => self.mine(global),
            AppsSubcommand::Pending(args) => self.pending(args, global),
            AppsSubcommand::Submit(args) => self.submit(args, global),
            AppsSubcommand::Update(args) => self.update(args, global),
            AppsSubcommand::Delete(args) => self.delete(args, global),
            AppsSubcommand::Find(args) => self.find(args, global),
        }
    }

    fn list(&self, args: &ListArgs, global: &GlobalOptions) -> Result<()> {
        let query = ListAppsQuery {
            category: args.category.clone(),
            protocol: args.protocol.clone(),
            status: args.status.clone(),
            featured: args.featured,
            verified: args.verified,
            health: args.health.clone(),
            sort: args.sort.clone(),
            page: args.page.page,
            per_page: args.page.per_page,
        };
        let apps = global.client()?.list_apps(&query)?;
        global.writer().write_value(&apps)
    }

    fn get(&self, args: &GetArgs, global: &GlobalOptions) -> Result<()> {
        let app = global.client()?.get_app(&args.id)?;
        global.writer().write_value(&app)
    }

    fn search(&self, args: &SearchArgs, global: &GlobalOptions) -> Result<()> {
        let query = SearchQuery {
            q: args.query.clone(),
            category: args.category.clone(),
            protocol: args.protocol.clone(),
            page: args.page.page,
            per_page: args.page.per_page,
        };
        let results = global.client()?.search(&query)?;
        global.writer().write_value(&results)
    }

    fn mine(&self, global: &GlobalOptions) -> Result<()> {
        let apps = global.client()?.my_apps()?;
        global.writer().write_value(&apps)
    }

    fn pending(&self, args: &PageArgs, global: &GlobalOptions) -> Result<()> {
        let apps = global.client()?.pending(args.to_page())?;
        global.writer().write_value(&apps)
    }

    fn submit(&self, args: &SubmitArgs, global: &GlobalOptions) -> Result<()> {
        let mut app = NewApp::new(
            &args.name,
            &args.short_description,
            &args.description,
            &args.author_name,
        );
        if let Some(protocol) = &args.protocol {
            app = app.with_protocol(protocol);
        }
        if let Some(category) = &args.category {
            app = app.with_category(category);
        }
        if !args.tags.is_empty() {
            app = app.with_tags(&args.tags);
        }
        if let Some(url) = &args.homepage_url {
            app = app.with_homepage_url(url);
        }
        if let Some(url) = &args.api_url {
            app = app.with_api_url(url);
        }
        if let Some(url) = &args.api_spec_url {
            app = app.with_api_spec_url(url);
        }
        if let Some(url) = &args.logo_url {
            app = app.with_logo_url(url);
        }
        if let Some(url) = &args.author_url {
            app = app.with_author_url(url);
        }

        let created = global.client()?.submit(&app)?;
        let writer = global.writer();

        if global.json {
            return writer.write_value(&created);
        }

        let id = created.get("id").and_then(Value::as_str).unwrap_or_default();
        writer.write_success(&format!("Submitted {} ({id})", args.name));
        if let Some(token) = created.get("edit_token").and_then(Value::as_str) {
            writer.write_info(&format!("Edit token: {token}"));
            writer.write_warning("Store the edit token now; it is only shown once.");
        }
        Ok(())
    }

    fn update(&self, args: &UpdateArgs, global: &GlobalOptions) -> Result<()> {
        let fields = parse_fields(&args.fields, &args.json_fields)?;
        // The global edit token is only the client default; --token is explicit.
        let updated = global
            .client()?
            .update_app(&args.id, &fields, args.token.as_deref())?;
        global.writer().write_value(&updated)
    }

    fn delete(&self, args: &DeleteArgs, global: &GlobalOptions) -> Result<()> {
        let result = global
            .client()?
            .delete_app(&args.id, args.token.as_deref())?;
        let writer = global.writer();
        if global.json {
            writer.write_value(&result)
        } else {
            writer.write_success(&format!("Deleted {}", args.id));
            Ok(())
        }
    }

    fn find(&self, args: &FindArgs, global: &GlobalOptions) -> Result<()> {
        match global.client()?.find_by_name(&args.name)? {
            Some(app) => global.writer().write_value(&app),
            None => bail!("No app named '{}'", args.name),
        }
    }
}

fn split_field(pair: &str) -> Result<(&str, &str)> {
    let (field, raw) = pair
        .split_once('=')
        .with_context(|| format!("Expected FIELD=VALUE, got '{pair}'"))?;
    let field = field.trim();
    if field.is_empty() {
        bail!("Empty field name in '{pair}'");
    }
    Ok((field, raw))
}

/// Builds an update body from `--set` (string) and `--set-json` pairs.
fn parse_fields(strings: &[String], json: &[String]) -> Result<AppUpdate> {
    let mut update = AppUpdate::new();
    for pair in strings {
        let (field, raw) = split_field(pair)?;
        update = update.set(field, Value::String(raw.to_string()));
    }
    for pair in json {
        let (field, raw) = split_field(pair)?;
        let value: Value =
            serde_json::from_str(raw).with_context(|| format!("Invalid JSON for '{field}': {raw}"))?;
        update = update.set(field, value);
    }
    Ok(update)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::cli::{Cli, Commands};
    use clap::Parser;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_fields() {
        let update = parse_fields(
            &strings(&["short_description=Better summary", "name=123"]),
            &strings(&["tags=[\"a\",\"b\"]", "is_featured=true"]),
        )
        .unwrap();

        assert_eq!(update.get("short_description"), Some(&json!("Better summary")));
        assert_eq!(update.get("name"), Some(&json!("123")));
        assert_eq!(update.get("tags"), Some(&json!(["a", "b"])));
        assert_eq!(update.get("is_featured"), Some(&json!(true)));
    }

    #[test]
    fn test_parse_fields_rejects_bad_input() {
        assert!(parse_fields(&strings(&["name"]), &[]).is_err());
        assert!(parse_fields(&strings(&["=x"]), &[]).is_err());
        assert!(parse_fields(&[], &strings(&["tags=[unclosed"])).is_err());
    }

    fn parse_list(args: &[&str]) -> ListArgs {
        let argv = ["ad", "apps", "list"].iter().chain(args).copied();
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Apps(AppsCommand {
                command: AppsSubcommand::List(list),
            }) => list,
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_featured_and_verified_take_optional_bools() {
        let list = parse_list(&["--featured", "--verified=false"]);
        assert_eq!(list.featured, Some(true));
        assert_eq!(list.verified, Some(false));

        let list = parse_list(&["--featured", "false"]);
        assert_eq!(list.featured, Some(false));

        let list = parse_list(&[]);
        assert_eq!(list.featured, None);
        assert_eq!(list.verified, None);
    }

    #[test]
    fn test_update_token_is_per_command() {
        let cli = Cli::try_parse_from([
            "ad", "--edit-token", "default", "apps", "update", "a1", "--token", "per-call", "--set", "name=x",
        ])
        .unwrap();
        assert_eq!(cli.global.edit_token.as_deref(), Some("default"));
        match cli.command {
            Commands::Apps(AppsCommand {
                command: AppsSubcommand::Update(update),
            }) => assert_eq!(update.token.as_deref(), Some("per-call")),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
