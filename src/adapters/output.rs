use crate::core::OutputWriter;

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleWriter;

impl ConsoleWriter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputWriter for ConsoleWriter {
    fn write_line(&mut self, text: &str) {
        println!("{}", text);
    }
}

/// Collects lines in memory instead of printing them.
impl OutputWriter for Vec<String> {
    fn write_line(&mut self, text: &str) {
        self.push(text.to_string());
    }
}
