use crate::core::ColorMapFormatter;

/// Renders `index | major | minor`.
///
/// With `aligned` set, the index and the major color are padded so the
/// separators of all 25 rows sit in the same columns.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipeFormatter {
    aligned: bool,
}

impl PipeFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn aligned() -> Self {
        Self { aligned: true }
    }
}

impl ColorMapFormatter for PipeFormatter {
    fn format_entry(&self, index: usize, major_color: &str, minor_color: &str) -> String {
        if self.aligned {
            format!("{:>2} | {:<6} | {}", index, major_color, minor_color)
        } else {
            format!("{} | {} | {}", index, major_color, minor_color)
        }
    }
}
