//! mailvet: client and export tool for the mailvet email validation service.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use mailvet::{
    cli,
    config::{
        BulkConfig, CheckConfig, ExportConfig, ExportOptions, LintConfig, OutputConfig,
        ServerConfig,
    },
    export::ExportFormat,
    output::exit_codes,
    reports::ReportFormat,
};
use std::io::{self, Write as _};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mailvet")]
#[command(version)]
#[command(about = "Validate email addresses and export the results", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  All addresses valid and existing
    1  At least one address invalid or non-existing
    3  Error occurred

EXAMPLES:
    # Validate a couple of addresses
    mailvet check alice@example.com bob@example.com

    # Validate a whole file and keep the results CSV
    mailvet bulk subscribers.csv --save results.csv

    # Export only the addresses confirmed to exist
    mailvet export results.csv --format txt --only-existing

    # Offline format check before burning a validation run
    mailvet lint < addresses.txt")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Arguments for the `check` subcommand
#[derive(Parser)]
struct CheckArgs {
    /// Addresses to validate (reads stdin when omitted and piped)
    emails: Vec<String>,

    #[command(flatten)]
    common: CommonRunArgs,
}

/// Arguments for the `bulk` subcommand
#[derive(Parser)]
struct BulkArgs {
    /// File of addresses to upload (.csv or .txt, one address per line)
    file: PathBuf,

    #[command(flatten)]
    common: CommonRunArgs,
}

/// Flags shared by `check` and `bulk`
#[derive(Parser)]
struct CommonRunArgs {
    /// Base URL of the validation service
    #[arg(long, env = "MAILVET_SERVER")]
    server: Option<String>,

    /// API timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Output format
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Save the service's results CSV to this path for later export
    #[arg(long, value_name = "PATH")]
    save: Option<PathBuf>,

    /// Also export the results in this format
    #[arg(long, value_name = "FORMAT")]
    export: Option<ExportFormat>,

    /// Restrict the export to addresses flagged as existing
    #[arg(long, requires = "export")]
    only_existing: bool,

    /// Export file path (format's canonical file name if not specified)
    #[arg(long, requires = "export", value_name = "PATH")]
    export_file: Option<PathBuf>,
}

/// Arguments for the `export` subcommand
#[derive(Parser)]
struct ExportArgs {
    /// Saved results CSV to export from
    results: PathBuf,

    /// Export payload format
    #[arg(short, long, default_value = "csv")]
    format: ExportFormat,

    /// Restrict output to addresses flagged as existing
    #[arg(long)]
    only_existing: bool,

    /// Output file path (format's canonical file name if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Arguments for the `lint` subcommand
#[derive(Parser)]
struct LintArgs {
    /// Addresses to check (reads stdin when omitted and piped)
    emails: Vec<String>,

    /// Output format
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate email addresses via the service
    Check(CheckArgs),

    /// Validate a file of addresses via the service
    Bulk(BulkArgs),

    /// Export a saved results CSV as filtered CSV or TXT
    Export(ExportArgs),

    /// Check address formats offline
    Lint(LintArgs),

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Print config file search paths
    Path,
    /// Write an example config file to the current directory
    Init,
}

fn main() -> Result<()> {
    let Cli {
        verbose,
        quiet,
        no_color,
        config: config_path,
        command,
    } = Cli::parse();

    // Initialize logging
    let log_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let (app_config, _loaded_from) = mailvet::config::load_or_default(config_path.as_deref());

    // Dispatch to command handlers
    let result = match command {
        Commands::Check(args) => {
            let config = CheckConfig {
                emails: args.emails,
                server: merge_server(&app_config, &args.common),
                output: merge_output(
                    &app_config,
                    args.common.output,
                    args.common.output_file.clone(),
                    no_color,
                    quiet,
                ),
                save: args.common.save.clone(),
                export: merge_export(&args.common),
            };
            cli::run_check(config)
        }

        Commands::Bulk(args) => {
            let config = BulkConfig {
                input: args.file,
                server: merge_server(&app_config, &args.common),
                output: merge_output(
                    &app_config,
                    args.common.output,
                    args.common.output_file.clone(),
                    no_color,
                    quiet,
                ),
                save: args.common.save.clone(),
                export: merge_export(&args.common),
            };
            cli::run_bulk(config)
        }

        Commands::Export(args) => {
            let config = ExportConfig {
                results: args.results,
                options: ExportOptions {
                    format: args.format,
                    only_existing: args.only_existing,
                    file: args.output_file,
                },
                quiet,
            };
            cli::run_export(config)
        }

        Commands::Lint(args) => {
            let config = LintConfig {
                emails: args.emails,
                output: merge_output(&app_config, args.output, args.output_file, no_color, quiet),
            };
            cli::run_lint(config)
        }

        Commands::Config { action } => {
            run_config_action(action, config_path.as_deref())?;
            Ok(exit_codes::SUCCESS)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "mailvet", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

/// Merge server settings: CLI flags override the config file.
fn merge_server(app_config: &mailvet::AppConfig, args: &CommonRunArgs) -> ServerConfig {
    ServerConfig {
        base_url: args
            .server
            .clone()
            .unwrap_or_else(|| app_config.server.base_url.clone()),
        timeout_secs: args.timeout.unwrap_or(app_config.server.timeout_secs),
    }
}

/// Merge output settings: CLI flags override the config file.
fn merge_output(
    app_config: &mailvet::AppConfig,
    format: Option<ReportFormat>,
    file: Option<PathBuf>,
    no_color: bool,
    quiet: bool,
) -> OutputConfig {
    OutputConfig {
        format: format.unwrap_or(app_config.output.format),
        file,
        no_color: no_color || app_config.output.no_color,
        quiet,
    }
}

/// Build export options when `--export` was given.
fn merge_export(args: &CommonRunArgs) -> Option<ExportOptions> {
    args.export.map(|format| ExportOptions {
        format,
        only_existing: args.only_existing,
        file: args.export_file.clone(),
    })
}

/// Handle the `config` subcommand actions.
fn run_config_action(action: ConfigAction, config_path: Option<&std::path::Path>) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let (config, loaded_from) = mailvet::config::load_or_default(config_path);
            if let Some(path) = &loaded_from {
                eprintln!("# Loaded from: {}", path.display());
            } else {
                eprintln!("# No config file found; showing defaults");
            }
            let yaml = serde_yaml_ng::to_string(&config)
                .map_err(|e| anyhow::anyhow!("failed to serialize config: {e}"))?;
            print!("{yaml}");
            io::stdout().flush()?;
            Ok(())
        }
        ConfigAction::Path => {
            let search_paths: [Option<String>; 3] = [
                std::env::current_dir()
                    .ok()
                    .map(|p| p.display().to_string()),
                dirs::config_dir().map(|p| p.join("mailvet").display().to_string()),
                dirs::home_dir().map(|p| p.display().to_string()),
            ];
            eprintln!("Config file search paths (in order):");
            for path in search_paths.into_iter().flatten() {
                eprintln!("  {path}");
            }
            eprintln!();
            eprintln!("Recognized file names:");
            for name in &[
                ".mailvet.yaml",
                ".mailvet.yml",
                "mailvet.yaml",
                "mailvet.yml",
                ".mailvetrc",
            ] {
                eprintln!("  {name}");
            }
            eprintln!();
            match mailvet::config::discover_config_file(config_path) {
                Some(path) => eprintln!("Active config file: {}", path.display()),
                None => eprintln!("No config file found."),
            }
            Ok(())
        }
        ConfigAction::Init => {
            let target = std::env::current_dir()?.join(".mailvet.yaml");
            if target.exists() {
                anyhow::bail!(
                    "{} already exists. Remove it first to re-initialize.",
                    target.display()
                );
            }
            let content = mailvet::config::generate_example_config();
            std::fs::write(&target, content)?;
            eprintln!("Created {}", target.display());
            Ok(())
        }
    }
}
