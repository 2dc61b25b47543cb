//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "strata",
    bin_name = "strata",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Map-server style catalogue inspection",
    long_about = "Strata discovers style templates (bundled + override directory), \
                  scans their placeholders, and reports the resulting descriptor table.",
    after_help = "EXAMPLES:\n\
        \x20 strata list\n\
        \x20 strata list --styles-dir ./styles --format json\n\
        \x20 strata scan my-style.xml\n\
        \x20 strata completions bash > /usr/share/bash-completion/completions/strata",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run style discovery and print the descriptor table.
    #[command(
        visible_alias = "ls",
        about = "List discovered styles",
        after_help = "EXAMPLES:\n\
            \x20 strata list\n\
            \x20 strata list --styles-dir ./overrides\n\
            \x20 strata list --format names"
    )]
    List(ListArgs),

    /// Scan one style template file and print its descriptor.
    #[command(
        about = "Scan a single style template",
        after_help = "EXAMPLES:\n\
            \x20 strata scan styles/default.xml\n\
            \x20 strata scan custom.xml --format json"
    )]
    Scan(ScanArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 strata completions bash > ~/.local/share/bash-completion/completions/strata\n\
            \x20 strata completions zsh  > ~/.zfunc/_strata\n\
            \x20 strata completions fish > ~/.config/fish/completions/strata.fish"
    )]
    Completions(CompletionsArgs),
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `strata list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Override styles directory.  Files here replace bundled styles with the
    /// same name.
    #[arg(
        short = 's',
        long = "styles-dir",
        value_name = "DIR",
        env = "STRATA_STYLES_DIR",
        help = "Directory of override style templates"
    )]
    pub styles_dir: Option<PathBuf>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` and `scan` commands.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    Names,
    /// JSON array.
    Json,
}

// ── scan ──────────────────────────────────────────────────────────────────────

/// Arguments for `strata scan`.
#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Template file to scan.  The file stem becomes the style name.
    #[arg(value_name = "FILE", help = "Style template file")]
    pub file: PathBuf,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ScanFormat,
}

/// Output format for the `scan` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ScanFormat {
    /// Human-readable summary.
    Table,
    /// JSON object.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `strata completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
