//! Value ranges and "nice" axis labels.

use serde::{Deserialize, Serialize};

/// Upper bound on generated labels per direction; reached only for degenerate inputs.
const MAX_LABELS_PER_SIDE: u32 = 10_000;

/// Closed numeric interval mapped onto a chart axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Position of `value` within the range, `0` at `min` and `1` at `max`. A zero-width range
    /// maps everything to `0`.
    pub fn fraction(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span == 0.0 || !span.is_finite() {
            return 0.0;
        }
        (value - self.min) / span
    }

    fn include(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }
}

/// Label values for an axis covering `range`, at a power-of-ten step (or half of one).
///
/// Zero is always the first label, followed by the positive labels in ascending order and then
/// the negative labels in descending order. At most about `max_label_count` labels are produced
/// on the dominant side.
pub fn generate_labels(range: Range, max_label_count: usize) -> Vec<f64> {
    let max_value = (-range.min).max(range.max);
    if !(max_value > 0.0) || !max_value.is_finite() {
        return vec![0.0];
    }

    let count = max_label_count.max(1) as f64;
    let mut step = 10f64.powf((max_value / count).log10().ceil());
    if step * 1.5 > max_value {
        step /= 2.0;
    }
    if !(step > 0.0) || !step.is_finite() {
        return vec![0.0];
    }

    let mut labels = Vec::new();
    let upper = range.max + step / 2.0;
    for i in 0..MAX_LABELS_PER_SIDE {
        let v = f64::from(i) * step;
        if v > upper {
            break;
        }
        labels.push(v);
    }
    let lower = range.min - step / 2.0;
    for i in 1..MAX_LABELS_PER_SIDE {
        let v = -f64::from(i) * step;
        if v < lower {
            break;
        }
        labels.push(v);
    }
    labels
}

/// Data range of a chart together with its axis labels.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisScale {
    pub range: Range,
    pub labels: Vec<f64>,
}

impl AxisScale {
    /// The range always contains zero and is widened to cover every label.
    pub fn for_values(values: impl IntoIterator<Item = f64>, max_label_count: usize) -> Self {
        let mut range = Range::new(0.0, 0.0);
        for v in values {
            if v.is_finite() {
                range.include(v);
            }
        }
        let labels = generate_labels(range, max_label_count);
        for &label in &labels {
            range.include(label);
        }
        Self { range, labels }
    }
}
