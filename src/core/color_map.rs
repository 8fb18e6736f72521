use crate::core::{ColorMapFormatter, OutputWriter, MAJOR_COLORS, MINOR_COLORS};

pub struct ColorMapGenerator<F: ColorMapFormatter, W: OutputWriter> {
    formatter: F,
    writer: W,
}

impl<F: ColorMapFormatter, W: OutputWriter> ColorMapGenerator<F, W> {
    pub fn new(formatter: F, writer: W) -> Self {
        Self { formatter, writer }
    }

    /// Formats every (major, minor) pair in major-then-minor order and sends
    /// each entry to the writer as it is produced.
    pub fn generate(&mut self) -> Vec<String> {
        let mut color_map = Vec::with_capacity(self.total_entries());

        for (major_index, major) in MAJOR_COLORS.iter().enumerate() {
            for (minor_index, minor) in MINOR_COLORS.iter().enumerate() {
                let index = major_index * MINOR_COLORS.len() + minor_index;
                let entry = self.formatter.format_entry(index, major, minor);
                tracing::trace!(index, major, minor, "color pair formatted");
                self.writer.write_line(&entry);
                color_map.push(entry);
            }
        }

        tracing::debug!("Generated {} color entries", color_map.len());
        color_map
    }

    pub fn total_entries(&self) -> usize {
        MAJOR_COLORS.len() * MINOR_COLORS.len()
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_parts(self) -> (F, W) {
        (self.formatter, self.writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct IndexFormatter {
        calls: Cell<usize>,
    }

    impl ColorMapFormatter for IndexFormatter {
        fn format_entry(&self, index: usize, major_color: &str, minor_color: &str) -> String {
            self.calls.set(self.calls.get() + 1);
            format!("{}:{}:{}", index, major_color, minor_color)
        }
    }

    #[derive(Default)]
    struct Recorder {
        lines: Vec<String>,
    }

    impl OutputWriter for Recorder {
        fn write_line(&mut self, text: &str) {
            self.lines.push(text.to_string());
        }
    }

    #[test]
    fn test_indices_follow_major_then_minor() {
        let formatter = IndexFormatter { calls: Cell::new(0) };
        let mut generator = ColorMapGenerator::new(formatter, Recorder::default());

        let result = generator.generate();

        assert_eq!(result.len(), 25);
        assert_eq!(result[0], "0:White:Blue");
        assert_eq!(result[1], "1:White:Orange");
        assert_eq!(result[6], "6:Red:Orange");
        assert_eq!(result[24], "24:Violet:Slate");

        let (formatter, writer) = generator.into_parts();
        assert_eq!(formatter.calls.get(), 25);
        assert_eq!(writer.lines, result);
    }

    #[test]
    fn test_borrowed_writer_receives_lines() {
        let mut recorder = Recorder::default();
        {
            let formatter = IndexFormatter { calls: Cell::new(0) };
            let mut generator = ColorMapGenerator::new(formatter, &mut recorder);
            assert_eq!(generator.total_entries(), 25);
            generator.generate();
            assert_eq!(generator.writer().lines.len(), 25);
        }
        assert_eq!(recorder.lines.len(), 25);
    }
}
