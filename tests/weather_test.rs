use rule_drills::core::weather::report;
use rule_drills::core::{WeatherReporter, WeatherSensor};
use rule_drills::{RuleWeatherReporter, SensorStub, Weather, WeatherReport};
use std::cell::Cell;

struct MockWeatherReporter {
    calls: Cell<usize>,
}

impl WeatherReporter for MockWeatherReporter {
    fn report(&self, _sensor: &dyn WeatherSensor) -> WeatherReport {
        self.calls.set(self.calls.get() + 1);
        WeatherReport::PartlyCloudy
    }
}

/// Records humidity reads.
#[derive(Default)]
struct CountingSensor {
    temperature: f64,
    precipitation: i32,
    wind: i32,
    humidity_reads: Cell<usize>,
}

impl WeatherSensor for CountingSensor {
    fn temperature_c(&self) -> f64 {
        self.temperature
    }
    fn precipitation(&self) -> i32 {
        self.precipitation
    }
    fn humidity(&self) -> i32 {
        self.humidity_reads.set(self.humidity_reads.get() + 1);
        0
    }
    fn wind_speed_kmph(&self) -> i32 {
        self.wind
    }
}

fn reading(temperature: f64, precipitation: i32, wind: i32) -> SensorStub {
    SensorStub::default()
        .with_temperature(temperature)
        .with_precipitation(precipitation)
        .with_wind_speed(wind)
}

#[test]
fn test_sunny_day_for_low_temperature() {
    let reporter = RuleWeatherReporter::default();
    for wind in [0, 30, 51, 120] {
        assert_eq!(reporter.report(&reading(20.0, 10, wind)), WeatherReport::SunnyDay);
    }
}

#[test]
fn test_partly_cloudy_for_warm_moderate_precipitation() {
    let reporter = RuleWeatherReporter::default();
    assert_eq!(
        reporter.report(&reading(30.0, 40, 25)),
        WeatherReport::PartlyCloudy
    );
}

#[test]
fn test_stormy_for_heavy_rain_and_wind() {
    let result = RuleWeatherReporter::default().report(&reading(30.0, 80, 60));
    assert_eq!(result.to_string(), "Alert, Stormy with heavy rain");
}

#[test]
fn test_heavy_rain_with_low_wind_predicts_rain() {
    let result = RuleWeatherReporter::default().report(&reading(30.0, 70, 30));
    assert_ne!(result, WeatherReport::SunnyDay);
    assert!(result.as_str().to_lowercase().contains("rain"));
}

#[test]
fn test_precipitation_sixty_is_heavy() {
    let result = RuleWeatherReporter::default().report(&reading(30.0, 60, 30));
    assert_ne!(result, WeatherReport::SunnyDay);
    assert_eq!(result, WeatherReport::RainyDay);
}

#[test]
fn test_sensor_presets() {
    assert_eq!(report(&SensorStub::sunny()), WeatherReport::SunnyDay);
    assert_eq!(report(&SensorStub::partly_cloudy()), WeatherReport::PartlyCloudy);
    assert_eq!(report(&SensorStub::stormy()), WeatherReport::Stormy);
    assert_eq!(
        report(&SensorStub::high_precipitation_low_wind()),
        WeatherReport::RainyDay
    );
    assert_eq!(report(&SensorStub::default()), WeatherReport::Stormy);
}

#[test]
fn test_every_combination_maps_to_a_report() {
    let reporter = RuleWeatherReporter::default();
    for temperature in [-10.0, 24.9, 25.0, 25.1, 40.0] {
        for precipitation in [-1, 0, 19, 20, 59, 60, 61, 100] {
            for wind in [0, 49, 50, 51, 200] {
                let result = reporter.report(&reading(temperature, precipitation, wind));
                let dry = temperature <= 25.0 || precipitation < 20;
                assert_eq!(
                    result == WeatherReport::SunnyDay,
                    dry,
                    "t={} p={} w={} gave {}",
                    temperature,
                    precipitation,
                    wind,
                    result
                );
            }
        }
    }
}

#[test]
fn test_humidity_is_not_consulted() {
    let sensor = CountingSensor {
        temperature: 30.0,
        precipitation: 70,
        wind: 10,
        ..Default::default()
    };
    assert_eq!(report(&sensor), WeatherReport::RainyDay);
    assert_eq!(sensor.humidity_reads.get(), 0);
}

#[test]
fn test_facade_forwards_to_injected_reporter_once() {
    let weather = Weather::new(MockWeatherReporter {
        calls: Cell::new(0),
    });

    // Stub readings would be stormy; the mock's answer must win.
    let result = weather.get_report(&SensorStub::default());

    assert_eq!(result, WeatherReport::PartlyCloudy);
    assert_eq!(weather.reporter().calls.get(), 1);
}
