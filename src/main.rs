//! hydroprognosis: structured extraction for flood risk reports
//!
//! Parses free-text risk reports into sections and renders them as JSON,
//! Markdown or a terminal summary.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use hydroprognosis::{
    cli,
    config::{AppConfig, ConfigPreset, ParseConfig},
    pipeline::exit_codes,
    DuplicatePolicy, ReportFormat,
};
use std::io::{self, Write as _};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with section support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nRecognized Sections:",
        "\n  flood_risk, cloudburst_probability, key_factors, historical_context,",
        "\n  recommendations, future_prediction, monitoring_recommendations",
        "\n\nOutput Formats:",
        "\n  json, markdown, summary"
    )
}

#[derive(Parser)]
#[command(name = "hydroprognosis")]
#[command(version, long_version = build_long_version())]
#[command(about = "Structured extraction for flood and cloudburst risk reports", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Every report had recognizable sections (or no --fail-on-unstructured)
    1  A report had no recognizable sections (with --fail-on-unstructured)
    3  Error occurred

EXAMPLES:
    # Summarize a report on the terminal
    hydroprognosis parse report.txt

    # Unwrap an /analysis response and export JSON
    curl -s $API/analysis | hydroprognosis parse - -o json > report.json

    # Markdown with the vulnerability index alongside
    hydroprognosis parse report.txt --fvi fvi.json -o markdown -O report.md

    # Debug why a header is not recognized
    hydroprognosis classify report.txt")]
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
    #[arg(long, global = true, env = "HYDROPROGNOSIS_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Arguments for the `parse` subcommand
#[derive(Parser)]
struct ParseArgs {
    /// Report files to parse (`-` reads stdin)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format (auto detects TTY: summary if interactive, json otherwise)
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Vulnerability summary JSON (FVI) to show alongside each report
    #[arg(long, value_name = "FILE")]
    fvi: Option<PathBuf>,

    /// How a repeated section header is handled
    #[arg(long, default_value = "overwrite")]
    duplicates: DuplicatePolicy,

    /// Exit with code 1 if a report has no recognizable sections
    #[arg(long)]
    fail_on_unstructured: bool,

    /// Include the normalized report text in JSON output
    #[arg(long)]
    include_raw: bool,

    /// Start from a named preset (default, strict, lenient)
    #[arg(long)]
    preset: Option<String>,
}

/// Arguments for the `classify` subcommand
#[derive(Parser)]
struct ClassifyArgs {
    /// Report file to classify (`-` reads stdin)
    file: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract sections from one or more reports
    Parse(ParseArgs),

    /// Show how each line of a report is classified
    Classify(ClassifyArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the JSON Schema for the configuration file
    ConfigSchema {
        /// Write the schema to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Inspect or create configuration files
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate a man page
    Man,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Show where configuration files are searched
    Path,
    /// Create a commented .hydroprognosis.yaml in the current directory
    Init,
}

fn main() {
    let code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            exit_codes::ERROR
        }
    };
    if code != exit_codes::SUCCESS {
        std::process::exit(code);
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    // Dispatch to command handlers
    match cli.command {
        Commands::Parse(args) => {
            let mut overrides = match args.preset.as_deref() {
                Some(name) => ConfigPreset::from_name(name)
                    .map(AppConfig::from_preset)
                    .with_context(|| {
                        format!("Unknown preset '{name}'. Valid options: default, strict, lenient")
                    })?,
                None => AppConfig::default(),
            };
            let cli_config = AppConfig::builder()
                .output_format(args.output)
                .output_file(args.output_file)
                .no_color(cli.no_color)
                .duplicates(args.duplicates)
                .fail_on_unstructured(args.fail_on_unstructured)
                .quiet(cli.quiet)
                .build();
            overrides.merge(&cli_config);
            overrides.output.include_raw |= args.include_raw;

            let (app, loaded_from) =
                AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides);
            if let Some(path) = &loaded_from {
                tracing::debug!("Loaded config from {}", path.display());
            }

            let config = ParseConfig::new(args.files, app).with_vulnerability(args.fvi);
            cli::run_parse(config)
        }

        Commands::Classify(args) => {
            let (mut app, _) = hydroprognosis::config::load_or_default(cli.config.as_deref());
            app.output.no_color |= cli.no_color;
            app.behavior.quiet |= cli.quiet;
            cli::run_classify(&args.file, &app)?;
            Ok(exit_codes::SUCCESS)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "hydroprognosis", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = hydroprognosis::config::generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => {
            run_config_action(action, cli.config.as_deref())?;
            Ok(exit_codes::SUCCESS)
        }

        Commands::Man => {
            let cmd = Cli::command();
            let man = clap_mangen::Man::new(cmd);
            let mut buf = Vec::new();
            man.render(&mut buf).context("failed to render man page")?;
            io::stdout().write_all(&buf)?;
            Ok(exit_codes::SUCCESS)
        }
    }
}

fn run_config_action(action: ConfigAction, explicit: Option<&std::path::Path>) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let (config, loaded_from) = hydroprognosis::config::load_or_default(explicit);
            if let Some(path) = &loaded_from {
                eprintln!("# Loaded from: {}", path.display());
            } else {
                eprintln!("# No config file found; showing defaults");
            }
            let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
            print!("{yaml}");
        }
        ConfigAction::Path => {
            let search_paths: [Option<String>; 3] = [
                std::env::current_dir()
                    .ok()
                    .map(|p| p.display().to_string()),
                dirs::config_dir().map(|p| p.join("hydroprognosis").display().to_string()),
                dirs::home_dir().map(|p| p.display().to_string()),
            ];
            eprintln!("Config file search paths (in order):");
            for path in search_paths.into_iter().flatten() {
                eprintln!("  {path}");
            }
            eprintln!();
            eprintln!("Recognized file names:");
            for name in hydroprognosis::config::file::CONFIG_FILE_NAMES {
                eprintln!("  {name}");
            }
            eprintln!();
            match hydroprognosis::config::discover_config_file(explicit) {
                Some(path) => eprintln!("Active config file: {}", path.display()),
                None => eprintln!("No config file found."),
            }
        }
        ConfigAction::Init => {
            let target = std::env::current_dir()
                .context("cannot determine current directory")?
                .join(".hydroprognosis.yaml");
            if target.exists() {
                anyhow::bail!(
                    "{} already exists. Remove it first to re-initialize.",
                    target.display()
                );
            }
            let content = hydroprognosis::config::generate_full_example_config();
            std::fs::write(&target, content)
                .with_context(|| format!("failed to write {}", target.display()))?;
            eprintln!("Created {}", target.display());
        }
    }
    Ok(())
}
