use crate::config::{Cli, Command, DrillsConfig};
use crate::core::{OutputWriter, Size, WeatherReport};
use crate::utils::error::Result;
use crate::utils::validation::{validate_finite, Validate};
use crate::{
    ColorMapGenerator, PipeFormatter, RuleWeatherReporter, SensorStub, Tshirt,
    TshirtSizeClassifier, Weather,
};
use serde_json::{json, Value};
use std::path::Path;

pub fn load_config(path: Option<&Path>) -> Result<DrillsConfig> {
    let config = match path {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            DrillsConfig::from_file(path)?
        }
        None => DrillsConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

/// Runs the parsed command and writes everything it prints to `out`.
///
/// With `--json` the whole result is written as one JSON document.
pub fn run<W: OutputWriter>(cli: &Cli, out: &mut W) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let formatter = if config.color_map.aligned {
        PipeFormatter::aligned()
    } else {
        PipeFormatter::new()
    };

    match &cli.command {
        Command::ColorMap { aligned } => {
            let formatter = if *aligned {
                PipeFormatter::aligned()
            } else {
                formatter
            };
            if cli.json {
                let entries = ColorMapGenerator::new(formatter, Vec::<String>::new()).generate();
                emit_json(out, &color_map_json(&entries))
            } else {
                color_map_text(formatter, out);
                Ok(())
            }
        }
        Command::Tshirt { cms } => {
            let sizes = classify(&config, cms)?;
            if cli.json {
                emit_json(out, &tshirt_json(&sizes))
            } else {
                tshirt_text(&sizes, out);
                Ok(())
            }
        }
        Command::Weather {
            preset,
            temperature,
            precipitation,
            humidity,
            wind,
        } => {
            let (label, sensor) = match preset {
                Some(preset) => (preset.label(), SensorStub::from(*preset)),
                None => {
                    let mut sensor = SensorStub::default();
                    if let Some(t) = temperature {
                        validate_finite("temperature", *t)?;
                        sensor = sensor.with_temperature(*t);
                    }
                    if let Some(p) = precipitation {
                        sensor = sensor.with_precipitation(*p);
                    }
                    if let Some(h) = humidity {
                        sensor = sensor.with_humidity(*h);
                    }
                    if let Some(w) = wind {
                        sensor = sensor.with_wind_speed(*w);
                    }
                    ("custom", sensor)
                }
            };
            let reports = report(&config, &[(label, sensor)]);
            if cli.json {
                emit_json(out, &weather_json(&reports))
            } else {
                weather_text(&reports, out);
                Ok(())
            }
        }
        Command::Demo => {
            tracing::info!("🚀 Running all drills");
            let sizes = classify(&config, &[37.0, 40.0, 43.0])?;
            let reports = report(
                &config,
                &[
                    ("Cool", SensorStub::sunny()),
                    ("Warm", SensorStub::new(30.0, 40, 72, 52)),
                    ("Stormy", SensorStub::new(30.0, 80, 72, 60)),
                    ("Rainy", SensorStub::high_precipitation_low_wind()),
                ],
            );

            if cli.json {
                let entries = ColorMapGenerator::new(formatter, Vec::<String>::new()).generate();
                let output = json!({
                    "color_map": color_map_json(&entries),
                    "tshirt": tshirt_json(&sizes),
                    "weather": weather_json(&reports),
                });
                emit_json(out, &output)
            } else {
                color_map_text(formatter, out);
                tshirt_text(&sizes, out);
                weather_text(&reports, out);
                Ok(())
            }
        }
    }
}

fn emit_json<W: OutputWriter>(out: &mut W, value: &Value) -> Result<()> {
    out.write_line(&serde_json::to_string_pretty(value)?);
    Ok(())
}

fn color_map_json(entries: &[String]) -> Value {
    json!({ "total": entries.len(), "entries": entries })
}

fn color_map_text<W: OutputWriter>(formatter: PipeFormatter, out: &mut W) {
    out.write_line("Generating color map:");
    let count = ColorMapGenerator::new(formatter, &mut *out).generate().len();
    out.write_line("");
    out.write_line(&format!("Generated {} color entries.", count));
}

fn classify(config: &DrillsConfig, measurements: &[f64]) -> Result<Vec<(f64, Size)>> {
    let tshirt = Tshirt::new(TshirtSizeClassifier::new(config.size_thresholds()));
    measurements
        .iter()
        .map(|&cms| -> Result<(f64, Size)> {
            validate_finite("cms", cms)?;
            Ok((cms, tshirt.get_size(cms)))
        })
        .collect()
}

fn tshirt_json(sizes: &[(f64, Size)]) -> Value {
    sizes
        .iter()
        .map(|(cms, size)| json!({ "cms": cms, "size": size }))
        .collect()
}

fn tshirt_text<W: OutputWriter>(sizes: &[(f64, Size)], out: &mut W) {
    for (cms, size) in sizes {
        out.write_line(&format!("Size for {}cm: {}", cms, size));
    }
}

type LabelledReport<'a> = (&'a str, SensorStub, WeatherReport);

fn report<'a>(config: &DrillsConfig, sensors: &[(&'a str, SensorStub)]) -> Vec<LabelledReport<'a>> {
    let weather = Weather::new(RuleWeatherReporter::new(config.weather_thresholds()));
    sensors
        .iter()
        .map(|&(label, sensor)| (label, sensor, weather.get_report(&sensor)))
        .collect()
}

fn weather_json(reports: &[LabelledReport<'_>]) -> Value {
    reports
        .iter()
        .map(|(label, sensor, report)| {
            json!({ "label": label, "readings": sensor, "report": report })
        })
        .collect()
}

fn weather_text<W: OutputWriter>(reports: &[LabelledReport<'_>], out: &mut W) {
    for (label, _, report) in reports {
        out.write_line(&format!("{} weather report: {}", label, report));
    }
}
