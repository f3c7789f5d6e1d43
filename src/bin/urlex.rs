use clap::Parser;

use urlex::client::build_client;
use urlex::config::{CliConfig, Config};
use urlex::core::constants::messages;
use urlex::logging;
use urlex::output;
use urlex::scanner::{ScanPage, Scanner};
use urlex::targets::{normalize_target, read_targets};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    // Core Options
    /// File containing targets, one per line
    #[arg(short = 'f', long, value_name = "FILE", help_heading = "Core Options")]
    file: Option<String>,

    // Request Options
    /// Cookie string sent verbatim as the Cookie header
    #[arg(
        short = 'c',
        long,
        value_name = "COOKIE",
        help_heading = "Request Options"
    )]
    cookie: Option<String>,

    /// One custom header in 'Name: Value' form
    #[arg(
        short = 'r',
        long,
        value_name = "NAME: VALUE",
        help_heading = "Request Options"
    )]
    header: Option<String>,

    // Network & Security
    /// HTTP/HTTPS proxy URL
    #[arg(
        short = 'p',
        long,
        value_name = "URL",
        help_heading = "Network & Security"
    )]
    proxy: Option<String>,

    /// Skip TLS certificate verification
    #[arg(long, help_heading = "Network & Security")]
    insecure: bool,

    // Output & Verbosity
    /// Extract only URLs
    #[arg(long, help_heading = "Output & Verbosity")]
    url_only: bool,

    /// Extract only paths
    #[arg(long, help_heading = "Output & Verbosity")]
    path_only: bool,

    /// Silent mode (suppress banner and section headers)
    #[arg(short = 's', long, help_heading = "Output & Verbosity")]
    silent: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    verbose: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    no_config: bool,
}

/// Collect CLI arguments into the config layer's CLI structure
fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        file: cli.file.clone(),
        cookie: cli.cookie.clone(),
        header: cli.header.clone(),
        proxy: cli.proxy.clone(),
        url_only: cli.url_only,
        path_only: cli.path_only,
        silent: cli.silent,
        insecure: cli.insecure,
        verbose: cli.verbose,
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}

/// Load configuration from file or standard locations and merge with CLI
/// config (CLI takes precedence)
fn load_config(cli_config: &CliConfig) -> urlex::Result<Config> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations()
    };

    config.merge_with_cli(cli_config);
    Ok(config)
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let cli_config = cli_to_config(&cli);

    logging::init_logger(cli_config.verbose, cli_config.silent);

    // Errors are reported as plain lines on stdout and the process exits 0;
    // the tool's contract is forward progress, not exit-code signaling.
    match load_config(&cli_config) {
        Ok(config) => run(&cli_config, config).await,
        Err(err) => println!("Error loading configuration: {err}"),
    }
}

async fn run(cli_config: &CliConfig, config: Config) {
    if !config.silent() {
        println!("{}", output::banner());
    }

    let Some(ref file) = cli_config.file else {
        println!("{}", messages::NO_INPUT_FILE);
        return;
    };

    let targets = match read_targets(file) {
        Ok(targets) => targets,
        Err(err) => {
            println!("Error opening file: {err}");
            return;
        }
    };

    let client = match build_client(&config) {
        Ok(client) => client,
        Err(err) => {
            println!("Error building HTTP client: {err}");
            return;
        }
    };

    logging::log_run_info(targets.len(), config.proxy.as_deref());

    // One target is fully fetched, extracted, and reported before the
    // next begins; a failing target never stops the run.
    let scanner = Scanner::new(client, config.clone());
    for target in &targets {
        process_target(target, &scanner, &config).await;
    }
}

async fn process_target(target: &str, scanner: &Scanner, config: &Config) {
    let url = match normalize_target(target) {
        Ok(url) => url,
        Err(err) => {
            println!("Error validating URL: {err}");
            return;
        }
    };

    match scanner.scan_page(&url).await {
        Ok(refs) => {
            logging::log_page_result(&url, refs.urls.len(), refs.paths.len());
            print!("{}", output::render_results(&refs, config));
        }
        Err(err) => println!("Error making HTTP request: {err}"),
    }
}
