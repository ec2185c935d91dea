//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use cocktaildex_core::pipeline::{PipelineConfig, ProgressReporter, RunSummary};
use cocktaildex_lexicon::Lexicon;
use cocktaildex_shared::{
    AppConfig, FetchConfig, init_config, load_config, load_config_from, validate_base_url,
};
use color_eyre::eyre::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// cocktaildex — build a localized drinks catalog from the public database.
#[derive(Parser)]
#[command(
    name = "cocktaildex",
    version,
    about = "Fetch the public drinks database and write a localized catalog artifact.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file path (defaults to ./cocktaildex.toml when present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands. Running with no subcommand is `run`.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Fetch all records and write the localized catalog (the default).
    Run {
        /// Output path for the catalog artifact (overrides config).
        #[arg(short, long)]
        out: Option<String>,

        /// External lexicon TOML replacing the built-in tables.
        #[arg(long)]
        lexicon: Option<String>,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "cocktaildex=info",
        1 => "cocktaildex=debug",
        _ => "cocktaildex=trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config;
    match cli.command {
        None => cmd_run(config_path.as_deref(), None, None).await,
        Some(Command::Run { out, lexicon }) => {
            cmd_run(config_path.as_deref(), out.as_deref(), lexicon.as_deref()).await
        }
        Some(Command::Config { action }) => match action {
            ConfigAction::Init => cmd_config_init().await,
            ConfigAction::Show => cmd_config_show(config_path.as_deref()).await,
        },
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

async fn cmd_run(
    config_path: Option<&Path>,
    out: Option<&str>,
    lexicon_path: Option<&str>,
) -> Result<()> {
    let config = resolve_config(config_path)?;
    validate_base_url(&config)?;

    // CLI flag wins, then config, then the compiled-in tables.
    let lexicon = match lexicon_path.or(config.lexicon.path.as_deref()) {
        Some(path) => Lexicon::from_path(Path::new(path))?,
        None => Lexicon::builtin().clone(),
    };

    let output_path = match out {
        Some(p) => PathBuf::from(p),
        None => PathBuf::from(&config.output.path),
    };

    let pipeline_config = PipelineConfig {
        fetch: FetchConfig::from(&config),
        output_path,
    };

    info!(
        base_url = %config.source.base_url,
        output = %pipeline_config.output_path.display(),
        "starting catalog run"
    );

    // Set up progress reporting
    let reporter = CliProgress::new();

    let result = cocktaildex_core::pipeline::run(&pipeline_config, &lexicon, &reporter).await?;

    // Print summary
    println!();
    println!("  Catalog written successfully!");
    println!("  Entries:  {}", result.entry_count);
    println!("  Curated:  {}", result.overridden);
    println!("  Path:     {}", result.output_path.display());
    println!(
        "  Time:     {:.1}s",
        result.elapsed.as_secs_f64()
    );
    if !result.failed_keys.is_empty() {
        println!("  Failed keys:");
        for (key, message) in &result.failed_keys {
            println!("    '{key}': {message}");
        }
    }
    println!();

    Ok(())
}

fn resolve_config(config_path: Option<&Path>) -> Result<AppConfig> {
    let config = match config_path {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };
    Ok(config)
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using an indicatif spinner.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner }
    }
}

impl ProgressReporter for CliProgress {
    fn phase(&self, name: &str) {
        self.spinner.set_message(name.to_string());
    }

    fn done(&self, _summary: &RunSummary) {
        self.spinner.finish_and_clear();
    }
}

async fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

async fn cmd_config_show(config_path: Option<&Path>) -> Result<()> {
    let config: AppConfig = resolve_config(config_path)?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}
