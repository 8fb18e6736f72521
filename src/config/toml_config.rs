use crate::core::{SizeThresholds, WeatherThresholds};
use crate::utils::error::Result;
use crate::utils::validation::{validate_finite_config, validate_strictly_ordered, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrillsConfig {
    pub tshirt: TshirtConfig,
    pub weather: WeatherConfig,
    pub color_map: ColorMapConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TshirtConfig {
    pub small_below: f64,
    pub large_above: f64,
}

impl Default for TshirtConfig {
    fn default() -> Self {
        let defaults = SizeThresholds::default();
        Self {
            small_below: defaults.small_below,
            large_above: defaults.large_above,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    pub warm_threshold_c: f64,
    pub precipitation_low: i32,
    pub precipitation_high: i32,
    pub storm_wind_kmph: i32,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        let defaults = WeatherThresholds::default();
        Self {
            warm_threshold_c: defaults.warm_c,
            precipitation_low: defaults.precipitation_low,
            precipitation_high: defaults.precipitation_high,
            storm_wind_kmph: defaults.storm_wind_kmph,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorMapConfig {
    pub aligned: bool,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"))
}

impl DrillsConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed)?)
    }

    /// Replaces `${VAR}` with the variable's value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn size_thresholds(&self) -> SizeThresholds {
        SizeThresholds {
            small_below: self.tshirt.small_below,
            large_above: self.tshirt.large_above,
        }
    }

    pub fn weather_thresholds(&self) -> WeatherThresholds {
        WeatherThresholds {
            warm_c: self.weather.warm_threshold_c,
            precipitation_low: self.weather.precipitation_low,
            precipitation_high: self.weather.precipitation_high,
            storm_wind_kmph: self.weather.storm_wind_kmph,
        }
    }
}

impl Validate for DrillsConfig {
    fn validate(&self) -> Result<()> {
        validate_finite_config("tshirt.small_below", self.tshirt.small_below)?;
        validate_finite_config("tshirt.large_above", self.tshirt.large_above)?;
        validate_strictly_ordered(
            "tshirt.small_below",
            self.tshirt.small_below,
            "tshirt.large_above",
            self.tshirt.large_above,
        )?;

        validate_finite_config("weather.warm_threshold_c", self.weather.warm_threshold_c)?;
        validate_strictly_ordered(
            "weather.precipitation_low",
            self.weather.precipitation_low,
            "weather.precipitation_high",
            self.weather.precipitation_high,
        )?;

        Ok(())
    }
}
