use crate::core::{Size, SizeClassifier, SizeThresholds};

#[derive(Debug, Clone, Copy, Default)]
pub struct TshirtSizeClassifier {
    thresholds: SizeThresholds,
}

impl TshirtSizeClassifier {
    pub fn new(thresholds: SizeThresholds) -> Self {
        Self { thresholds }
    }
}

impl SizeClassifier for TshirtSizeClassifier {
    /// # Panics
    ///
    /// Panics if `cms` is `NaN`.
    fn size(&self, cms: f64) -> Size {
        assert!(!cms.is_nan(), "t-shirt measurement must be a number");

        let size = if cms < self.thresholds.small_below {
            Size::Small
        } else if cms <= self.thresholds.large_above {
            Size::Medium
        } else {
            Size::Large
        };

        tracing::debug!(cms, size = size.as_str(), "classified measurement");
        size
    }
}

/// Forwards every lookup to the injected classifier.
pub struct Tshirt<C: SizeClassifier> {
    classifier: C,
}

impl<C: SizeClassifier> Tshirt<C> {
    pub fn new(classifier: C) -> Self {
        Self { classifier }
    }

    pub fn get_size(&self, cms: f64) -> Size {
        self.classifier.size(cms)
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_boundary_neighbour_has_one_size() {
        let classifier = TshirtSizeClassifier::default();
        let expected = [
            (37.0, Size::Small),
            (37.999, Size::Small),
            (38.0, Size::Medium),
            (39.0, Size::Medium),
            (41.0, Size::Medium),
            (42.0, Size::Medium),
            (42.001, Size::Large),
            (43.0, Size::Large),
        ];
        for (cms, size) in expected {
            assert_eq!(classifier.size(cms), size, "measurement {}", cms);
        }
    }

    #[test]
    fn test_out_of_range_values_are_classified() {
        let classifier = TshirtSizeClassifier::default();
        assert_eq!(classifier.size(-5.0), Size::Small);
        assert_eq!(classifier.size(f64::NEG_INFINITY), Size::Small);
        assert_eq!(classifier.size(f64::INFINITY), Size::Large);
    }

    #[test]
    #[should_panic(expected = "must be a number")]
    fn test_nan_is_rejected() {
        TshirtSizeClassifier::default().size(f64::NAN);
    }
}
