pub mod formatter;
pub mod output;
pub mod sensor;

pub use formatter::PipeFormatter;
pub use output::ConsoleWriter;
pub use sensor::SensorStub;
