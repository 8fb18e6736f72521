use crate::core::WeatherSensor;
use serde::Serialize;

/// Fixed sensor readings, so the reporter can be exercised without hardware.
///
/// The defaults describe a warm, wet and windy day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SensorStub {
    pub temperature_c: f64,
    pub precipitation: i32,
    pub humidity: i32,
    pub wind_speed_kmph: i32,
}

impl Default for SensorStub {
    fn default() -> Self {
        Self {
            temperature_c: 26.0,
            precipitation: 70,
            humidity: 72,
            wind_speed_kmph: 52,
        }
    }
}

impl SensorStub {
    pub fn new(temperature_c: f64, precipitation: i32, humidity: i32, wind_speed_kmph: i32) -> Self {
        Self {
            temperature_c,
            precipitation,
            humidity,
            wind_speed_kmph,
        }
    }

    pub fn with_temperature(mut self, temperature_c: f64) -> Self {
        self.temperature_c = temperature_c;
        self
    }

    pub fn with_precipitation(mut self, precipitation: i32) -> Self {
        self.precipitation = precipitation;
        self
    }

    pub fn with_humidity(mut self, humidity: i32) -> Self {
        self.humidity = humidity;
        self
    }

    pub fn with_wind_speed(mut self, wind_speed_kmph: i32) -> Self {
        self.wind_speed_kmph = wind_speed_kmph;
        self
    }

    pub fn sunny() -> Self {
        Self::default().with_temperature(20.0).with_precipitation(10)
    }

    pub fn partly_cloudy() -> Self {
        Self::new(27.0, 40, 65, 25)
    }

    pub fn stormy() -> Self {
        Self::new(28.0, 80, 90, 60)
    }

    pub fn high_precipitation_low_wind() -> Self {
        Self::new(30.0, 70, 80, 30)
    }
}

impl WeatherSensor for SensorStub {
    fn temperature_c(&self) -> f64 {
        self.temperature_c
    }

    fn precipitation(&self) -> i32 {
        self.precipitation
    }

    fn humidity(&self) -> i32 {
        self.humidity
    }

    fn wind_speed_kmph(&self) -> i32 {
        self.wind_speed_kmph
    }
}
