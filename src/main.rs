mod cli;

use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::{AdviceArgs, Cli, Commands};
use cropwise::config::{Config, OutputFormat};
use cropwise::display;
use cropwise::logic::{catalogue, prescription, roadmap, scoring, soil_insight, AdvisoryEngine};
use cropwise::models::{FieldProfile, SensorReading, UNKNOWN_SOIL};
use serde::Serialize;
use std::io::Read;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Logs go to stderr so stdout stays pipeable
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Init => {
            Config::setup_interactive(config_path)?;
        }
        Commands::Check => run_check(config_path)?,
        Commands::Crops => {
            println!("{}", display::render_catalogue(catalogue::catalogue()));
        }
        Commands::Recommend { input, explain } => {
            let req = Request::resolve(config_path, &input)?;
            let ranked = scoring::score_crops(&req.field.soil_type, &req.reading);
            let top = &ranked[..req.top_n.min(ranked.len())];

            if explain {
                req.emit(top, || {
                    let recs: Vec<_> = top.iter().map(|s| s.to_recommendation()).collect();
                    format!(
                        "{}\n\n{}",
                        display::render_recommendations(&recs),
                        display::render_breakdown(top)
                    )
                })?;
            } else {
                let recs = scoring::recommend(&req.field, &req.reading, req.top_n);
                req.emit(&recs, || display::render_recommendations(&recs))?;
            }
        }
        Commands::Insight { input } => {
            let req = Request::resolve(config_path, &input)?;
            let insight = soil_insight(&req.field, &req.reading);
            req.emit(&insight, || display::render_insight(&insight))?;
        }
        Commands::Prescribe { input } => {
            let req = Request::resolve(config_path, &input)?;
            let plan = prescription(&req.field, &req.reading);
            req.emit(&plan, || display::render_prescription(&plan))?;
        }
        Commands::Roadmap { input } => {
            let req = Request::resolve(config_path, &input)?;
            let tasks = roadmap(&req.field, &req.reading);
            req.emit(&tasks, || display::render_roadmap(&tasks))?;
        }
        Commands::Report { input } => {
            let req = Request::resolve(config_path, &input)?;
            let engine = AdvisoryEngine::new().with_top_n(req.top_n);
            let advice = engine.advise(&req.field, &req.reading);
            req.emit(&advice, || {
                display::render_report(&req.field, &req.reading, &advice)
            })?;
        }
    }

    Ok(())
}

fn run_check(config_path: Option<&Path>) -> Result<()> {
    let config = Config::load(config_path).context("Failed to load configuration")?;
    let field = config.field_profile();

    println!("Field: {}", field.name);
    match field.known_soil() {
        Some(soil) => println!("Soil type: {}", soil),
        None if field.soil_type == UNKNOWN_SOIL => {
            println!("Soil type: Unknown (half soil points for every crop)")
        }
        None => println!(
            "Soil type: '{}' is not a known soil and will earn no soil points",
            field.soil_type
        ),
    }
    println!("Crops recommended: {}", config.advisor.top_n);

    catalogue::validate_catalogue(catalogue::catalogue())
        .context("Crop knowledge base failed validation")?;
    println!("Knowledge base: {} crops OK", catalogue::catalogue().len());

    Ok(())
}

/// Field, reading and output options resolved from config plus CLI flags.
struct Request {
    field: FieldProfile,
    reading: SensorReading,
    top_n: usize,
    json: bool,
}

impl Request {
    fn resolve(config_path: Option<&Path>, args: &AdviceArgs) -> Result<Self> {
        let config = Config::load(config_path).context("Failed to load configuration")?;

        let mut field = config.field_profile();
        if let Some(soil) = &args.soil_type {
            field = field.with_soil_type(soil.clone());
        }

        let base = match &args.reading {
            Some(path) => read_reading(path)?,
            None => SensorReading::new(),
        };
        let overrides = SensorReading {
            temperature: args.temperature,
            moisture: args.moisture,
            ph_level: args.ph,
            npk_n: args.nitrogen,
            npk_p: args.phosphorus,
            npk_k: args.potassium,
            recorded_at: None,
        };
        let reading = base.merge(&overrides);
        reading.validate()?;

        if reading.is_empty() {
            tracing::info!("No sensor values supplied, scoring with neutral factors");
        }

        let top_n = args.top.unwrap_or(config.advisor.top_n);
        if top_n == 0 {
            bail!("--top must be at least 1");
        }

        Ok(Self {
            field,
            reading,
            top_n,
            json: args.json || config.advisor.output == OutputFormat::Json,
        })
    }

    fn emit<T: Serialize + ?Sized>(&self, value: &T, text: impl FnOnce() -> String) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            println!("{}", text());
        }
        Ok(())
    }
}

fn read_reading(path: &Path) -> Result<SensorReading> {
    let json = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read sensor reading from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read sensor reading {}", path.display()))?
    };

    SensorReading::from_json(&json).with_context(|| format!("Invalid sensor reading {}", path.display()))
}
