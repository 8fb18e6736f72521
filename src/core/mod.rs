pub mod color_map;
pub mod tshirt;
pub mod weather;

pub use crate::domain::model::{
    Size, SizeThresholds, WeatherReport, WeatherThresholds, MAJOR_COLORS, MINOR_COLORS,
};
pub use crate::domain::ports::{
    ColorMapFormatter, OutputWriter, SizeClassifier, WeatherReporter, WeatherSensor,
};
