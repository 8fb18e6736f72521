use crate::domain::model::{Size, WeatherReport};

pub trait ColorMapFormatter {
    fn format_entry(&self, index: usize, major_color: &str, minor_color: &str) -> String;
}

pub trait OutputWriter {
    fn write_line(&mut self, text: &str);
}

impl<W: OutputWriter + ?Sized> OutputWriter for &mut W {
    fn write_line(&mut self, text: &str) {
        (**self).write_line(text)
    }
}

pub trait SizeClassifier {
    fn size(&self, cms: f64) -> Size;
}

pub trait WeatherSensor {
    fn temperature_c(&self) -> f64;
    fn precipitation(&self) -> i32;
    fn humidity(&self) -> i32;
    fn wind_speed_kmph(&self) -> i32;
}

pub trait WeatherReporter {
    fn report(&self, sensor: &dyn WeatherSensor) -> WeatherReport;
}
