use serde::Serialize;
use std::fmt;

pub const MAJOR_COLORS: [&str; 5] = ["White", "Red", "Black", "Yellow", "Violet"];
pub const MINOR_COLORS: [&str; 5] = ["Blue", "Orange", "Green", "Brown", "Slate"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Size {
    #[serde(rename = "S")]
    Small,
    #[serde(rename = "M")]
    Medium,
    #[serde(rename = "L")]
    Large,
}

impl Size {
    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Small => "S",
            Size::Medium => "M",
            Size::Large => "L",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Measurements below `small_below` are S, above `large_above` are L, and
/// everything in between (both ends included) is M.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeThresholds {
    pub small_below: f64,
    pub large_above: f64,
}

impl Default for SizeThresholds {
    fn default() -> Self {
        Self {
            small_below: 38.0,
            large_above: 42.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WeatherReport {
    #[serde(rename = "Sunny Day")]
    SunnyDay,
    #[serde(rename = "Partly Cloudy")]
    PartlyCloudy,
    #[serde(rename = "Rainy Day")]
    RainyDay,
    #[serde(rename = "Alert, Stormy with heavy rain")]
    Stormy,
}

impl WeatherReport {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherReport::SunnyDay => "Sunny Day",
            WeatherReport::PartlyCloudy => "Partly Cloudy",
            WeatherReport::RainyDay => "Rainy Day",
            WeatherReport::Stormy => "Alert, Stormy with heavy rain",
        }
    }
}

impl fmt::Display for WeatherReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherThresholds {
    /// At or below this temperature (°C) the day is reported sunny.
    pub warm_c: f64,
    /// Lower edge of the moderate band, inclusive.
    pub precipitation_low: i32,
    /// Upper edge of the moderate band, exclusive; heavy precipitation from here on.
    pub precipitation_high: i32,
    /// Wind strictly above this speed (km/h) turns heavy rain into a storm.
    pub storm_wind_kmph: i32,
}

impl Default for WeatherThresholds {
    fn default() -> Self {
        Self {
            warm_c: 25.0,
            precipitation_low: 20,
            precipitation_high: 60,
            storm_wind_kmph: 50,
        }
    }
}
