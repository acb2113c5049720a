// Command-line interface definitions and parsing for archivecli

use crate::config::CliConfig;
use clap::{ArgAction, Parser};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(
    name = "archive",
    author,
    version,
    about = "A command-line tool to find and open archived versions of web pages.",
    long_about = None,
    after_help = "Example: archive https://example.com",
    disable_version_flag = true
)]
pub struct Cli {
    /// URL to find in archive
    #[arg(required_unless_present_any = ["list_blocked", "save_blocklist", "completions"])]
    pub url: Option<String>,

    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: Option<bool>,

    // Core Options
    /// Timeout per network request in seconds (default: 10)
    #[arg(
        short = 't',
        long,
        value_name = "SECONDS",
        help_heading = "Core Options"
    )]
    pub timeout: Option<u64>,

    /// Report that creating a snapshot is unsupported when none exists
    #[arg(long, help_heading = "Core Options")]
    pub create: bool,

    /// Print the archive URL instead of opening a browser
    #[arg(long, help_heading = "Core Options")]
    pub no_browser: bool,

    // Output & Verbosity
    /// Suppress non-error output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    // Network
    /// Archive service base URL (default: https://archive.is)
    #[arg(long, value_name = "URL", help_heading = "Network")]
    pub archive_url: Option<String>,

    /// Custom User-Agent for the reachability check
    #[arg(long, value_name = "AGENT", help_heading = "Network")]
    pub user_agent: Option<String>,

    // Domain Blocklist
    /// Load blocked domains from a JSON or TOML file
    #[arg(long, value_name = "FILE", help_heading = "Domain Blocklist")]
    pub blocklist: Option<String>,

    /// Block a domain (repeatable)
    #[arg(long, value_name = "DOMAIN", help_heading = "Domain Blocklist")]
    pub block: Vec<String>,

    /// Unblock a domain (repeatable)
    #[arg(long, value_name = "DOMAIN", help_heading = "Domain Blocklist")]
    pub unblock: Vec<String>,

    /// Save the resulting blocklist to a file
    #[arg(long, value_name = "FILE", help_heading = "Domain Blocklist")]
    pub save_blocklist: Option<String>,

    /// Print the blocked domains
    #[arg(long, help_heading = "Domain Blocklist")]
    pub list_blocked: bool,

    /// Skip the blocked domain check
    #[arg(long, help_heading = "Domain Blocklist")]
    pub no_blocklist: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,

    /// Print a shell completion script
    #[arg(long, value_name = "SHELL", value_enum, help_heading = "Configuration")]
    pub completions: Option<Shell>,
}

/// Convert CLI arguments into the config overrides they carry
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        timeout: cli.timeout,
        user_agent: cli.user_agent.clone(),
        archive_url: cli.archive_url.clone(),
        no_blocklist: cli.no_blocklist,
        blocklist_file: cli.blocklist.clone(),
        block: cli.block.clone(),
        quiet: cli.quiet,
        verbose: cli.verbose,
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}
