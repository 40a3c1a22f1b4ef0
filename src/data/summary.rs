use super::model::{FilteredView, Measurement, Species};

/// Tolerance used when snapping values onto histogram bin edges.
const EDGE_EPSILON: f64 = 1e-9;

/// Upper bound on the number of histogram bins.
pub const MAX_BINS: usize = 10_000;

/// Arithmetic mean; `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Linear-interpolated quantile of already sorted values, `p` in `[0, 1]`.
fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    let pos = p * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

// ---------------------------------------------------------------------------
// Box plot summary
// ---------------------------------------------------------------------------

/// Five-number summary with Tukey whiskers (1.5 × IQR).
#[derive(Debug, Clone, PartialEq)]
pub struct BoxSummary {
    pub lower_whisker: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub upper_whisker: f64,
    /// Points beyond the whiskers, ascending.
    pub outliers: Vec<f64>,
}

impl BoxSummary {
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let q1 = quantile_sorted(&sorted, 0.25);
        let median = quantile_sorted(&sorted, 0.5);
        let q3 = quantile_sorted(&sorted, 0.75);
        let iqr = q3 - q1;
        let low_fence = q1 - 1.5 * iqr;
        let high_fence = q3 + 1.5 * iqr;

        // Sorted input: the first / last values inside the fences are the whiskers.
        let lower_whisker = sorted
            .iter()
            .copied()
            .find(|&v| v >= low_fence)
            .unwrap_or(q1);
        let upper_whisker = sorted
            .iter()
            .rev()
            .copied()
            .find(|&v| v <= high_fence)
            .unwrap_or(q3);
        let outliers = sorted
            .iter()
            .copied()
            .filter(|&v| v < low_fence || v > high_fence)
            .collect();

        Some(BoxSummary {
            lower_whisker,
            q1,
            median,
            q3,
            upper_whisker,
            outliers,
        })
    }
}

// ---------------------------------------------------------------------------
// Histogram grouped by species
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    /// Inclusive lower edge; the upper edge is `start + bin_width`.
    pub start: f64,
    /// Counts indexed by [`Species::index`].
    pub counts: [usize; 3],
}

impl HistogramBin {
    pub fn count_for(&self, species: Species) -> usize {
        self.counts[species.index()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Equal-width bins shared by every species, aligned to multiples of the width.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub bin_width: f64,
    pub bins: Vec<HistogramBin>,
}

impl Histogram {
    /// Bin one measurement of `view`. An empty view, a width that is not a
    /// positive finite number, or a width so small that the range would need
    /// more than [`MAX_BINS`] bins, yields no bins.
    pub fn build(view: &FilteredView, measurement: Measurement, bin_width: f64) -> Self {
        let mut histogram = Histogram {
            bin_width,
            bins: Vec::new(),
        };
        if view.is_empty() || !(bin_width.is_finite() && bin_width > 0.0) {
            return histogram;
        }

        let values = view.values(measurement);
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let first_edge = (min / bin_width + EDGE_EPSILON).floor() * bin_width;
        let span = ((max - first_edge) / bin_width + EDGE_EPSILON).floor();
        if !span.is_finite() || span >= MAX_BINS as f64 {
            log::warn!("Histogram bin width {bin_width} needs too many bins; skipping");
            return histogram;
        }
        let n_bins = span as usize + 1;

        histogram.bins = (0..n_bins)
            .map(|i| HistogramBin {
                start: first_edge + i as f64 * bin_width,
                counts: [0; 3],
            })
            .collect();

        for record in view.records() {
            let v = record.value(measurement);
            let idx = ((v - first_edge) / bin_width + EDGE_EPSILON).floor() as usize;
            let idx = idx.min(n_bins - 1);
            histogram.bins[idx].counts[record.species.index()] += 1;
        }

        histogram
    }
}
