//! Intake CLI - run local files through the upload intake
//!
//! ```bash
//! intake check report.pdf scan.png          # Validate a selection, print entries
//! intake simulate a.pdf b.jpg --multiple    # Validate, then drive simulated uploads
//! intake hint --accept .svs,.ndpi --multiple
//! intake hint --config slides.json --single  # Override the file's `multiple`
//! ```
//!
//! Configuration: defaults, then the JSON file given by `--config` (or the
//! `INTAKE_CONFIG` environment variable, `.env` honoured), then flags.

use clap::{Args, Parser, Subcommand};
use intake::{
    guess_media_type, CandidateFile, ConfigError, Entry, EntryStatus, IntakeConfig,
    RandomProgress, Tick, UploadIntake, TICK_INTERVAL_MS,
};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "intake")]
#[command(about = "Validate files and simulate uploads the way the intake widget does", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a selection of files and print the resulting entries
    Check {
        /// Files, in selection order
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        config: ConfigArgs,

        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a selection, then simulate every upload to completion
    Simulate {
        /// Files, in selection order
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        config: ConfigArgs,

        /// Seed for reproducible progress
        #[arg(long)]
        seed: Option<u64>,

        /// Milliseconds between ticks
        #[arg(long, default_value_t = TICK_INTERVAL_MS as u64)]
        interval_ms: u64,
    },

    /// Print the drop-zone hint for a configuration
    Hint {
        #[command(flatten)]
        config: ConfigArgs,
    },
}

#[derive(Args)]
struct ConfigArgs {
    /// JSON config file (falls back to INTAKE_CONFIG)
    #[arg(short, long, env = "INTAKE_CONFIG")]
    config: Option<PathBuf>,

    /// Accepted types, comma separated (e.g. ".pdf,.jpg,image/png")
    #[arg(short, long)]
    accept: Option<String>,

    /// Per-file size limit in MB
    #[arg(long)]
    max_size: Option<u64>,

    /// Maximum number of entries
    #[arg(long)]
    max_files: Option<usize>,

    /// Append selections instead of replacing
    #[arg(short, long, overrides_with = "single")]
    multiple: bool,

    /// Replace on every selection, even if the config file says otherwise
    #[arg(long, overrides_with = "multiple")]
    single: bool,
}

impl ConfigArgs {
    fn resolve(&self) -> Result<IntakeConfig, ConfigError> {
        let config = match &self.config {
            Some(path) => IntakeConfig::from_file(path)?,
            None => IntakeConfig::default(),
        };
        let config = self.apply(config);
        config.validate()?;
        log::debug!("Effective config: {:?}", config);
        Ok(config)
    }

    /// Layer the flags over `config`.
    fn apply(&self, mut config: IntakeConfig) -> IntakeConfig {
        if let Some(accept) = &self.accept {
            config.accept = accept.clone();
        }
        if let Some(max_size) = self.max_size {
            config.max_size_mb = max_size;
        }
        if let Some(max_files) = self.max_files {
            config.max_files = max_files;
        }
        if self.multiple {
            config.multiple = true;
        } else if self.single {
            config.multiple = false;
        }
        config
    }
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            files,
            config,
            json,
        } => cmd_check(&files, &config, json),

        Commands::Simulate {
            files,
            config,
            seed,
            interval_ms,
        } => cmd_simulate(&files, &config, seed, interval_ms).await,

        Commands::Hint { config } => cmd_hint(&config),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_check(
    paths: &[PathBuf],
    args: &ConfigArgs,
    as_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.resolve()?;
    let selection = read_selection(paths)?;

    let mut intake = UploadIntake::new(config);
    intake.select(selection);

    if as_json {
        let entries: Vec<Value> = intake.entries().iter().map(entry_json).collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        eprintln!("📋 {} of {} file(s) kept", intake.len(), paths.len());
        for entry in intake.entries() {
            print_entry(entry);
        }
    }

    if intake.entries().iter().any(|e| e.error().is_some()) {
        std::process::exit(2);
    }
    Ok(())
}

async fn cmd_simulate(
    paths: &[PathBuf],
    args: &ConfigArgs,
    seed: Option<u64>,
    interval_ms: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.resolve()?;
    let selection = read_selection(paths)?;

    let progress = match seed {
        Some(seed) => RandomProgress::seeded(seed),
        None => RandomProgress::new(),
    };
    let mut intake: UploadIntake<CandidateFile, RandomProgress> =
        UploadIntake::with_progress(config, progress);
    intake.on_files_change(|files| {
        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
        eprintln!("📎 File set: [{}]", names.join(", "));
    });

    let mut pending = intake.select(selection);
    for entry in intake.entries() {
        if let Some(reason) = entry.error() {
            eprintln!("   ❌ {}: {}", entry.file.name, reason);
        }
    }

    let mut interval = tokio::time::interval(Duration::from_millis(interval_ms.max(1)));
    let mut ticks = 0usize;
    while !pending.is_empty() {
        interval.tick().await;
        ticks += 1;

        pending.retain(|&id| {
            let name = intake
                .entry(id)
                .map(|e| e.file.name.clone())
                .unwrap_or_default();
            match intake.tick(id) {
                Tick::Advanced(progress) => {
                    eprintln!("   ⏳ {} {:>5.1}%", name, progress);
                    true
                }
                Tick::Completed => {
                    eprintln!("   ✅ {} uploaded", name);
                    false
                }
                Tick::Gone => false,
            }
        });
    }

    eprintln!("\n✨ Settled after {} tick(s)", ticks);
    for entry in intake.entries() {
        print_entry(entry);
    }
    Ok(())
}

fn cmd_hint(args: &ConfigArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.resolve()?;
    println!("{}", config.hint());
    Ok(())
}

/// Describe local files the way a browser would hand them over.
fn read_selection(paths: &[PathBuf]) -> Result<Vec<CandidateFile>, Box<dyn std::error::Error>> {
    paths.iter().map(|p| candidate_from_path(p)).collect()
}

fn candidate_from_path(path: &Path) -> Result<CandidateFile, Box<dyn std::error::Error>> {
    let metadata = fs::metadata(path)
        .map_err(|e| format!("{}: {}", path.display(), e))?;
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| format!("Not a file name: {}", path.display()))?
        .to_string();
    let media_type = guess_media_type(&name);
    Ok(CandidateFile::new(name, metadata.len(), media_type))
}

fn print_entry(entry: &Entry<CandidateFile>) {
    let marker = match entry.status {
        EntryStatus::Uploading => "⏳",
        EntryStatus::Success => "✅",
        EntryStatus::Error(_) => "❌",
    };
    print!(
        "{} {} {} ({}, {:.0}%)",
        marker,
        entry.kind().icon(),
        entry.file.name,
        entry.size_label(),
        entry.progress
    );
    match entry.error() {
        Some(reason) => println!(" - {}", reason),
        None => println!(),
    }
}

fn entry_json(entry: &Entry<CandidateFile>) -> Value {
    json!({
        "id": entry.id.0,
        "name": entry.file.name,
        "size": entry.file.size,
        "mediaType": entry.file.media_type,
        "status": entry.status.label(),
        "progress": entry.progress,
        "error": entry.error().map(|e| e.to_string()),
    })
}
