//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "tailor",
    bin_name = "tailor",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{2702} Turn a project template into your project",
    long_about = "Tailor rewrites a checked-out project template under a new name: \
                  it swaps the template's placeholder identity (package name, author, \
                  e-mail, description, GitHub username) in every relevant file and \
                  renames the package directory.",
    after_help = "EXAMPLES:\n\
        \x20 tailor customize --name mylib --description \"My library\" --author \"Ada\" \\\n\
        \x20                  --email ada@example.com --github-username ada\n\
        \x20 tailor customize -n mylib -d \"My library\" --dry-run\n\
        \x20 tailor check\n\
        \x20 tailor completions bash > /usr/share/bash-completion/completions/tailor",
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
    /// Rewrite the template in place for a new project.
    #[command(
        visible_alias = "c",
        about = "Customize the template for a new project",
        after_help = "EXAMPLES:\n\
            \x20 tailor customize -n mylib -d \"Tools for X\" -a \"Ada Lovelace\" -e ada@example.com -g ada\n\
            \x20 tailor customize -n mylib -d \"Tools for X\" --root ../pypackage_template --yes\n\
            \x20 tailor customize -n mylib -d \"Tools for X\" --dry-run --output-format json"
    )]
    Customize(CustomizeArgs),

    /// Report template strings still present.
    #[command(
        about = "Find leftover template strings",
        after_help = "EXAMPLES:\n\
            \x20 tailor check\n\
            \x20 tailor check --root ../mylib --output-format json"
    )]
    Check(CheckArgs),

    /// Write the built-in profile as `tailor.toml`.
    #[command(
        about = "Write a tailor.toml describing the template",
        after_help = "EXAMPLES:\n\
            \x20 tailor init\n\
            \x20 tailor init --root ../my_template --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 tailor completions bash > ~/.local/share/bash-completion/completions/tailor\n\
            \x20 tailor completions zsh  > ~/.zfunc/_tailor\n\
            \x20 tailor completions fish > ~/.config/fish/completions/tailor.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Tailor configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 tailor config get identity.author\n\
            \x20 tailor config list\n\
            \x20 tailor config path"
    )]
    Config(ConfigCommands),
}

// ── customize ─────────────────────────────────────────────────────────────────

/// Arguments for `tailor customize`.
#[derive(Debug, Args)]
pub struct CustomizeArgs {
    /// New package name; also the new package directory name.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "New package name")]
    pub name: String,

    #[arg(
        short = 'd',
        long = "description",
        value_name = "TEXT",
        help = "One-line project description"
    )]
    pub description: String,

    /// Falls back to `identity.author` from the config.
    #[arg(short = 'a', long = "author", value_name = "NAME", help = "Author name")]
    pub author: Option<String>,

    /// Falls back to `identity.email` from the config.
    #[arg(short = 'e', long = "email", value_name = "EMAIL", help = "Author e-mail")]
    pub email: Option<String>,

    /// Falls back to `identity.github_username` from the config.
    #[arg(
        short = 'g',
        long = "github-username",
        value_name = "USER",
        help = "GitHub username"
    )]
    pub github_username: Option<String>,

    #[command(flatten)]
    pub target: TargetArgs,

    /// Skip the confirmation prompt.
    #[arg(short = 'y', long = "yes", help = "Skip confirmation and customize immediately")]
    pub yes: bool,

    /// Compute and print the report without writing anything.
    #[arg(long = "dry-run", help = "Show what would change without changing it")]
    pub dry_run: bool,
}

/// Where the template lives and how it is described.
#[derive(Debug, Args)]
pub struct TargetArgs {
    #[arg(
        short = 'r',
        long = "root",
        value_name = "DIR",
        default_value = ".",
        help = "Template root directory"
    )]
    pub root: PathBuf,

    /// Defaults to `<root>/tailor.toml`, then to the built-in Python profile.
    #[arg(
        short = 'p',
        long = "profile",
        value_name = "FILE",
        help = "Profile file describing the template"
    )]
    pub profile: Option<PathBuf>,
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `tailor check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub target: TargetArgs,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `tailor init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(
        short = 'r',
        long = "root",
        value_name = "DIR",
        default_value = ".",
        help = "Template root directory"
    )]
    pub root: PathBuf,

    /// Overwrite an existing `tailor.toml`.
    #[arg(short = 'f', long = "force", help = "Overwrite existing tailor.toml")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `tailor completions`.
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

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `tailor config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `identity.author`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
