#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{Cli, Command, Preset};
pub use toml_config::{ColorMapConfig, DrillsConfig, TshirtConfig, WeatherConfig};
