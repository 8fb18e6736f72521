use crate::adapters::SensorStub;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "rule-drills")]
#[command(about = "Color map, t-shirt size and weather report drills")]
pub struct Cli {
    /// Path to a TOML file overriding the default thresholds
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Emit log lines as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the 25-entry color pair table
    ColorMap {
        /// Pad columns so the separators line up
        #[arg(long)]
        aligned: bool,
    },

    /// Classify chest measurements (cm) into S, M or L
    Tshirt {
        #[arg(required = true, allow_negative_numbers = true)]
        cms: Vec<f64>,
    },

    /// Report the weather for a set of sensor readings
    Weather {
        /// Use a canned set of readings
        #[arg(long, value_enum, conflicts_with_all = ["temperature", "precipitation", "humidity", "wind"])]
        preset: Option<Preset>,

        #[arg(long, allow_negative_numbers = true)]
        temperature: Option<f64>,

        #[arg(long, allow_negative_numbers = true)]
        precipitation: Option<i32>,

        #[arg(long, allow_negative_numbers = true)]
        humidity: Option<i32>,

        /// Wind speed in km/h
        #[arg(long, allow_negative_numbers = true)]
        wind: Option<i32>,
    },

    /// Run the sample scenarios of all three drills
    Demo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    Sunny,
    PartlyCloudy,
    Stormy,
    Rainy,
}

impl Preset {
    /// Heading used when the preset's report is printed.
    pub fn label(&self) -> &'static str {
        match self {
            Preset::Sunny => "sunny",
            Preset::PartlyCloudy => "partly cloudy",
            Preset::Stormy => "stormy",
            Preset::Rainy => "rainy",
        }
    }
}

impl From<Preset> for SensorStub {
    fn from(preset: Preset) -> Self {
        match preset {
            Preset::Sunny => SensorStub::sunny(),
            Preset::PartlyCloudy => SensorStub::partly_cloudy(),
            Preset::Stormy => SensorStub::stormy(),
            Preset::Rainy => SensorStub::high_precipitation_low_wind(),
        }
    }
}
