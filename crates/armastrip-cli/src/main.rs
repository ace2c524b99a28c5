//! armastrip CLI - plan perforated strips and fastener cutters.
//!
//! Geometry comes in as a JSON job file (the strip's circular edges and the
//! target part's bounds); cutter descriptors go out as JSON for a geometry
//! kernel to build and subtract.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use armastrip::holes::extract_holes;
use armastrip::strip::plan_strip;
use armastrip::{
    plan_bolt_holes, plan_nut_pockets, Bounds3, Circle, CutterSpec, FastenerConfig,
};

#[derive(Parser)]
#[command(name = "armastrip")]
#[command(about = "Plan ArmaStrip strips, bolt holes and nut pockets", long_about = None)]
struct Cli {
    /// TOML configuration file; missing keys take their defaults
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan a strip and print its layout, body and hole solids
    Strip,
    /// List the de-duplicated hole centers found in a job's strip circles
    Holes {
        /// Job file (.json)
        job: PathBuf,
        /// Center merge tolerance in mm (default: bolt_holes.center_tol)
        #[arg(long)]
        tol: Option<f64>,
    },
    /// Plan bolt hole cutters through a job's part
    BoltHoles {
        /// Job file (.json)
        job: PathBuf,
    },
    /// Plan hex nut pocket cutters into a job's part
    NutPockets {
        /// Job file (.json)
        job: PathBuf,
    },
    /// Print the effective configuration as TOML
    Config,
}

/// Geometry handed over by the host: strip edges and target part bounds.
#[derive(Debug, Deserialize)]
struct Job {
    circles: Vec<Circle>,
    bounds: Bounds3,
}

#[derive(Serialize)]
struct StripReport<'a> {
    plan: &'a armastrip::strip::StripPlan,
    body: CutterSpec,
    holes: Vec<CutterSpec>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Strip => {
            let plan = plan_strip(&config.strip)?;
            print_json(&StripReport {
                plan: &plan,
                body: plan.body_spec(),
                holes: plan.hole_specs(),
            })?;
        }
        Commands::Holes { job, tol } => {
            let job = read_job(&job)?;
            let tol = tol.unwrap_or(config.bolt_holes.center_tol);
            print_json(&extract_holes(&job.circles, tol)?)?;
        }
        Commands::BoltHoles { job } => {
            let job = read_job(&job)?;
            let cutters = plan_bolt_holes(&job.circles, job.bounds.z_extent(), &config.bolt_holes)?;
            print_json(&cutters)?;
        }
        Commands::NutPockets { job } => {
            let job = read_job(&job)?;
            let cutters = plan_nut_pockets(&job.circles, job.bounds.z_extent(), &config.nut_pockets)?;
            print_json(&cutters)?;
        }
        Commands::Config => {
            print!("{}", config.to_toml_string()?);
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<FastenerConfig> {
    let Some(path) = path else {
        tracing::debug!("No config file given, using defaults");
        return Ok(FastenerConfig::default());
    };
    let config = FastenerConfig::load(path)
        .with_context(|| format!("failed to load config {}", path.display()))?;
    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}

fn read_job(path: &Path) -> Result<Job> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read job {}", path.display()))?;
    let job = parse_job(&json).with_context(|| format!("invalid job {}", path.display()))?;
    tracing::info!(
        "Read {} circles from {} (part z: {} to {})",
        job.circles.len(),
        path.display(),
        job.bounds.min.z,
        job.bounds.max.z
    );
    Ok(job)
}

fn parse_job(json: &str) -> Result<Job> {
    Ok(serde_json::from_str(json)?)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
