use anyhow::{Context, Result};
use carstream::{render_json, render_text, Pipeline, PipelineConfig};
use chrono::Local;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Generate vehicle records, skip-filter them and report price statistics
#[derive(Parser, Debug)]
#[command(name = "carstream", version, about, long_about = None)]
struct Cli {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the record generator
    #[arg(long)]
    seed: Option<u64>,

    /// Number of records to keep after skip filtering
    #[arg(short = 'n', long)]
    take: Option<usize>,

    /// Brand whose first records are skipped
    #[arg(long)]
    skip_brand: Option<String>,

    /// How many records of the skip brand to drop
    #[arg(long)]
    skip_count: Option<usize>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn load_config(&self) -> Result<PipelineConfig> {
        let mut config = match &self.config {
            Some(path) => PipelineConfig::from_json_file(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => PipelineConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(take) = self.take {
            config.take = take;
        }
        if let Some(brand) = &self.skip_brand {
            config.skip_brand = brand.clone();
        }
        if let Some(count) = self.skip_count {
            config.skip_count = count;
        }

        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.load_config()?;
    let pipeline = Pipeline::new(config, Local::now().date_naive()).context("invalid configuration")?;
    let report = pipeline.run()?;

    if cli.json {
        println!("{}", render_json(&report)?);
    } else {
        print!("{}", render_text(&report));
    }

    Ok(())
}
