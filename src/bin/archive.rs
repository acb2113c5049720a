use archivecli::config::{CliConfig, Config};
use archivecli::core::constants::exit_codes;
use archivecli::reporting::logging;
use archivecli::ui::{Cli, cli_to_config, print_completions, print_error, success_message};
use archivecli::{
    ArchiveClient, Archiver, HttpReachabilityChecker, LookupMode, Result, SystemBrowser,
};

use clap::{CommandFactory, Parser};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut app = Cli::command();
        print_completions(shell, &mut app);
        std::process::exit(exit_codes::SUCCESS);
    }

    match run_archive_logic(&cli).await {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            print_error(&e, cli.url.as_deref().unwrap_or_default());
            std::process::exit(e.exit_code());
        }
    }
}

/// Main archive logic extracted from main() for testing
pub async fn run_archive_logic(cli: &Cli) -> Result<()> {
    let cli_config = cli_to_config(cli);
    let config = load_and_merge_config(&cli_config)?;

    logging::init_logger(config.verbose.unwrap_or(false), cli.quiet);
    logging::log_config_info(&config);

    let mut blocklist = config.build_blocklist()?;
    for domain in &cli.unblock {
        blocklist.remove(domain)?;
    }
    if let Some(ref path) = cli.save_blocklist {
        blocklist.save(path)?;
        if !cli.quiet {
            println!("Saved {} blocked domain(s) to {path}", blocklist.len());
        }
    }
    if cli.list_blocked {
        for domain in blocklist.sorted() {
            println!("{domain}");
        }
    }

    let Some(url) = cli.url.as_deref() else {
        return Ok(());
    };

    let mode = if cli.create {
        LookupMode::GetOrCreate
    } else {
        LookupMode::Latest
    };
    let mut archiver = Archiver::new(
        Box::new(HttpReachabilityChecker::new(config.user_agent.as_deref())?),
        Box::new(ArchiveClient::with_base_url(config.archive_base_url())?),
        Box::new(SystemBrowser),
    )
    .with_timeout(config.timeout_duration())
    .with_mode(mode);

    if config.use_blocklist.unwrap_or(true) {
        logging::log_blocklist_info(blocklist.len());
        archiver = archiver.with_blocklist(blocklist);
    }

    if cli.no_browser {
        let archive_url = archiver.find_archive(url).await?;
        println!("{archive_url}");
    } else {
        let archive_url = archiver.archive_url(url).await?;
        if !cli.quiet {
            println!("{}", success_message(&archive_url));
        }
    }

    Ok(())
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file)?
    } else {
        Config::load_from_standard_locations()?
    };

    // CLI takes precedence
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}
