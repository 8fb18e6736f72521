use crate::core::{WeatherReport, WeatherReporter, WeatherSensor, WeatherThresholds};

/// Rule table for the weather report.
///
/// Evaluated in order:
/// 1. not warmer than `warm_c` → sunny, whatever else the sensor says
/// 2. precipitation in `[precipitation_low, precipitation_high)` → partly cloudy
/// 3. precipitation at or above `precipitation_high` → stormy when the wind is
///    above `storm_wind_kmph`, rainy otherwise
/// 4. anything drier → sunny
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleWeatherReporter {
    thresholds: WeatherThresholds,
}

impl RuleWeatherReporter {
    pub fn new(thresholds: WeatherThresholds) -> Self {
        Self { thresholds }
    }
}

impl WeatherReporter for RuleWeatherReporter {
    /// # Panics
    ///
    /// Panics if the sensor's temperature is `NaN`.
    fn report(&self, sensor: &dyn WeatherSensor) -> WeatherReport {
        let t = &self.thresholds;
        let temperature = sensor.temperature_c();
        assert!(!temperature.is_nan(), "temperature reading must be a number");

        let report = if temperature <= t.warm_c {
            WeatherReport::SunnyDay
        } else {
            let precipitation = sensor.precipitation();
            if precipitation >= t.precipitation_high {
                if sensor.wind_speed_kmph() > t.storm_wind_kmph {
                    WeatherReport::Stormy
                } else {
                    WeatherReport::RainyDay
                }
            } else if precipitation >= t.precipitation_low {
                WeatherReport::PartlyCloudy
            } else {
                WeatherReport::SunnyDay
            }
        };

        tracing::debug!(temperature, report = report.as_str(), "weather reported");
        report
    }
}

/// Forwards every report to the injected reporter.
pub struct Weather<R: WeatherReporter> {
    reporter: R,
}

impl<R: WeatherReporter> Weather<R> {
    pub fn new(reporter: R) -> Self {
        Self { reporter }
    }

    pub fn get_report(&self, sensor: &dyn WeatherSensor) -> WeatherReport {
        self.reporter.report(sensor)
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }
}

/// Reports with the default thresholds.
pub fn report(sensor: &dyn WeatherSensor) -> WeatherReport {
    RuleWeatherReporter::default().report(sensor)
}
