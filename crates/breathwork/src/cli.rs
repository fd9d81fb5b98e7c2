//! Clap derive structures for the `breathwork` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use breathwork_core::DEFAULT_LIST_LIMIT;

// ── Top-Level CLI ────────────────────────────────────────────────────

/// breathwork -- serve and inspect the breathwork site's CMS content
#[derive(Debug, Parser)]
#[command(
    name = "breathwork",
    version,
    about = "Serve and inspect the breathwork site's content",
    long_about = "Content service for the breathwork marketing site.\n\n\
        Reads site sections and blog posts from Contentful, serves them as JSON,\n\
        and accepts visitor testimonials as unapproved drafts.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Config file (defaults to the platform config dir)
    #[arg(long, env = "BREATHWORK_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Read draft content from the Preview API
    #[arg(long, global = true)]
    pub preview: bool,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "BREATHWORK_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
}

// ── Commands ─────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve(ServeArgs),

    /// Print landing-page content
    #[command(alias = "c")]
    Content(ContentArgs),

    /// Print blog posts
    #[command(alias = "b")]
    Blog(BlogArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Listen address (overrides server.bind)
    #[arg(long, short = 'b')]
    pub bind: Option<String>,
}

#[derive(Debug, Args)]
pub struct ContentArgs {
    #[command(subcommand)]
    pub command: ContentCommand,
}

#[derive(Debug, Subcommand)]
pub enum ContentCommand {
    /// Every section at once, as served by GET /api/content
    Site,
    /// Hero banner
    Hero,
    /// About section
    About,
    /// Services, in display order
    Services,
    /// Testimonials
    Testimonials {
        /// Max testimonials
        #[arg(long, short = 'l', default_value_t = DEFAULT_LIST_LIMIT)]
        limit: u32,
    },
    /// Contact details
    Contact,
    /// Gallery sections
    Gallery,
}

#[derive(Debug, Args)]
pub struct BlogArgs {
    #[command(subcommand)]
    pub command: BlogCommand,
}

#[derive(Debug, Subcommand)]
pub enum BlogCommand {
    /// Posts, newest first
    #[command(alias = "ls")]
    List {
        /// Max posts
        #[arg(long, short = 'l', default_value_t = DEFAULT_LIST_LIMIT)]
        limit: u32,
    },
    /// A single post by slug
    Show {
        /// URL slug of the post
        slug: String,
    },
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell
    pub shell: clap_complete::Shell,
}
