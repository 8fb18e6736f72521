pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::Cli;
pub use config::DrillsConfig;

pub use adapters::{ConsoleWriter, PipeFormatter, SensorStub};
pub use crate::core::{
    color_map::ColorMapGenerator,
    tshirt::{Tshirt, TshirtSizeClassifier},
    weather::{RuleWeatherReporter, Weather},
};
pub use domain::model::{Size, SizeThresholds, WeatherReport, WeatherThresholds};
pub use utils::error::{DrillError, Result};
