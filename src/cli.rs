use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cropwise",
    version,
    about = "Crop suitability and field management advisor"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive setup of the field profile
    Init,
    /// Validate config and the crop knowledge base
    Check,
    /// List the crop knowledge base
    Crops,
    /// Rank crops for the field
    Recommend {
        #[command(flatten)]
        input: AdviceArgs,

        /// Show the per-attribute score breakdown
        #[arg(long)]
        explain: bool,
    },
    /// Soil health summary and amendment strategy
    Insight {
        #[command(flatten)]
        input: AdviceArgs,
    },
    /// Irrigation and nutrient prescription
    Prescribe {
        #[command(flatten)]
        input: AdviceArgs,
    },
    /// Season management roadmap
    Roadmap {
        #[command(flatten)]
        input: AdviceArgs,
    },
    /// Everything above in one report
    Report {
        #[command(flatten)]
        input: AdviceArgs,
    },
}

#[derive(Args, Debug, Default)]
pub struct AdviceArgs {
    /// Sensor reading JSON file ("-" for stdin)
    #[arg(short, long)]
    pub reading: Option<PathBuf>,

    /// Override the configured field soil type
    #[arg(long)]
    pub soil_type: Option<String>,

    /// Number of crops to recommend
    #[arg(long)]
    pub top: Option<usize>,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Air temperature (°C)
    #[arg(long)]
    pub temperature: Option<f64>,

    /// Soil moisture (%)
    #[arg(long)]
    pub moisture: Option<f64>,

    /// Soil pH
    #[arg(long)]
    pub ph: Option<f64>,

    /// Nitrogen (ppm)
    #[arg(long)]
    pub nitrogen: Option<f64>,

    /// Phosphorus (ppm)
    #[arg(long)]
    pub phosphorus: Option<f64>,

    /// Potassium (ppm)
    #[arg(long)]
    pub potassium: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_recommend_with_overrides() {
        let cli = Cli::try_parse_from([
            "cropwise",
            "recommend",
            "--soil-type",
            "Clay",
            "--ph",
            "5.5",
            "--moisture",
            "80",
            "--top",
            "5",
            "--explain",
        ])
        .unwrap();

        match cli.command {
            Commands::Recommend { input, explain } => {
                assert!(explain);
                assert_eq!(input.soil_type.as_deref(), Some("Clay"));
                assert_eq!(input.ph, Some(5.5));
                assert_eq!(input.moisture, Some(80.0));
                assert_eq!(input.top, Some(5));
                assert!(input.temperature.is_none());
            }
            _ => panic!("expected recommend"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["cropwise", "report", "-vv", "--config", "f.yaml"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("f.yaml")));
    }

    #[test]
    fn rejects_non_numeric_reading() {
        assert!(Cli::try_parse_from(["cropwise", "insight", "--ph", "sour"]).is_err());
    }

    #[test]
    fn subcommand_required() {
        assert!(Cli::try_parse_from(["cropwise"]).is_err());
    }
}
