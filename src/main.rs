//! Blockfold - fold declarative blocks of segments into text
//!
//! A CLI that evaluates block documents with result builders and renders
//! the aggregate as ANSI, HTML, plain text or JSON.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Runtime error (bad document, unknown flag, I/O failure, etc.)

use anyhow::{Context, Result};
use blockfold::cli::Args;
use blockfold::compose::{self, BuilderOverrides};
use blockfold::config::{Config, CONFIG_FILE};
use blockfold::models::{BlockDocument, Flags};
use blockfold::render;
use blockfold::scanner::{self, ScanConfig};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    // Load configuration before logging so `[general] verbose` applies
    let config = match load_config(&args) {
        Ok(mut config) => {
            config.merge_with_args(&args);
            config
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    init_logging(config.log_level(&args));

    info!("Blockfold v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);
    debug!("Configuration: {:?}", config);

    if let Err(e) = run(args, config) {
        error!("Run failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Handle --init-config: generate a default .blockfold.toml.
fn handle_init_config() -> Result<()> {
    let path = Path::new(CONFIG_FILE);

    if path.exists() {
        eprintln!("{} already exists. Remove it first or edit it manually.", CONFIG_FILE);
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content).with_context(|| format!("Failed to write {}", CONFIG_FILE))?;

    println!("Created {} with default settings.", CONFIG_FILE);
    Ok(())
}

/// Initialize logging at the given level.
///
/// Logs go to stderr so rendered output on stdout stays clean. `RUST_LOG`
/// takes precedence over the verbosity settings.
fn init_logging(level: tracing::Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Evaluate and render every input document.
fn run(args: Args, config: Config) -> Result<()> {
    config.render.color.apply();

    let input = args
        .input
        .clone()
        .context("An input document or directory is required")?;
    let flags = args.parsed_flags()?;

    let scan_config = ScanConfig::from(&config.scanner);
    let documents = scanner::collect_inputs(&input, &scan_config)?;
    if documents.is_empty() {
        warn!("No block documents found under {}", input.display());
        return Ok(());
    }
    info!("Rendering {} document(s)", documents.len());

    if args.dry_run {
        return handle_dry_run(&documents, &flags);
    }

    let overrides = BuilderOverrides {
        separator: args.separator.clone(),
        salutation: args.salutation.clone(),
        default_separator: config.builders.separator.clone(),
        default_salutation: config.builders.salutation.clone(),
    };
    let options = config.render.options();

    let mut outputs = Vec::with_capacity(documents.len());
    for path in &documents {
        let document = BlockDocument::load(path)?;
        let composed = compose::evaluate(&document, &flags, &overrides)
            .with_context(|| format!("Failed to evaluate {}", path.display()))?;
        outputs.push(render::render(&composed, config.render.format, &options)?);
    }

    let output = outputs.join("\n\n");
    match config.general.output {
        Some(ref path) => {
            let path = PathBuf::from(path);
            std::fs::write(&path, &output)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            info!("Output saved to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", output).context("Failed to write to stdout")?;
        }
    }

    Ok(())
}

/// Handle --dry-run: resolve conditions and list segments without folding.
fn handle_dry_run(documents: &[PathBuf], flags: &Flags) -> Result<()> {
    for path in documents {
        let document = BlockDocument::load(path)?;
        let planned = compose::plan(&document, flags)
            .with_context(|| format!("Failed to evaluate {}", path.display()))?;

        println!(
            "{} ({} builder, {} segments, {} conditional)",
            path.display(),
            document.builder,
            document.segments.len(),
            document.conditional_count()
        );
        for segment in &planned {
            let guard = segment
                .condition
                .as_deref()
                .map(|c| format!(" [when {}]", c))
                .unwrap_or_default();
            match segment.text {
                Some(ref text) if segment.otherwise => {
                    println!("  {:>3}. {:?} (otherwise){}", segment.index, text, guard)
                }
                Some(ref text) => println!("  {:>3}. {:?}{}", segment.index, text, guard),
                None => println!("  {:>3}. (skipped){}", segment.index, guard),
            }
        }
    }

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        return Config::load(config_path);
    }

    // Try default location; logging is not up yet
    match Config::load_default() {
        Ok(Some(config)) => Ok(config),
        Ok(None) => Ok(Config::default()),
        Err(e) => {
            eprintln!("Warning: failed to load {}: {:#}", CONFIG_FILE, e);
            Ok(Config::default())
        }
    }
}
