//! Aggregate statistics and the slice-thickness distribution.
//!
//! Computes the numbers; formatting lives in [`crate::cli::report`] and
//! any rendering backend is outside the core.

use crate::error::Result;
use crate::store::MetadataStore;

/// Default number of histogram bins
pub const HISTOGRAM_BINS: usize = 10;

/// Min/max/mean over the numerically parseable slice thickness values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThicknessStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// Summary statistics over the store
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStats {
    /// Distinct studies referenced by series rows
    pub total_studies: i64,
    /// Total series rows
    pub total_slices: i64,
    /// Mean series count per study; zero when the store is empty
    pub avg_slices_per_study: f64,
    /// `None` when no numeric slice thickness values exist
    pub thickness: Option<ThicknessStats>,
}

impl SummaryStats {
    /// Computes the summary from the store
    pub fn compute(store: &MetadataStore) -> Result<Self> {
        let total_studies = store.total_studies()?;
        let total_slices = store.total_slices()?;
        let avg_slices_per_study = store.avg_slices_per_study()?.unwrap_or(0.0);
        let thickness = ThicknessStats::from_values(&store.slice_thickness_values()?);

        Ok(Self {
            total_studies,
            total_slices,
            avg_slices_per_study,
            thickness,
        })
    }
}

impl ThicknessStats {
    /// Aggregates a value set; `None` for an empty set, guarding the
    /// empty-aggregate case
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for &v in values {
            min = min.min(v);
            max = max.max(v);
            sum += v;
        }
        Some(Self {
            min,
            max,
            mean: sum / values.len() as f64,
        })
    }
}

/// Fixed-bin histogram over the slice thickness distribution
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub min: f64,
    pub max: f64,
    pub bin_width: f64,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Builds a histogram with `bins` equal-width bins spanning the value
    /// range; `None` for an empty value set
    pub fn from_values(values: &[f64], bins: usize) -> Option<Self> {
        if values.is_empty() || bins == 0 {
            return None;
        }
        let stats = ThicknessStats::from_values(values)?;
        let (min, max) = (stats.min, stats.max);
        let bin_width = (max - min) / bins as f64;

        let mut counts = vec![0usize; bins];
        for &v in values {
            let idx = if bin_width > 0.0 {
                (((v - min) / bin_width) as usize).min(bins - 1)
            } else {
                // Degenerate range: every value lands in the first bin
                0
            };
            counts[idx] += 1;
        }

        Some(Self {
            min,
            max,
            bin_width,
            counts,
        })
    }

    /// Fetches the filtered thickness values from the store and bins them
    pub fn compute(store: &MetadataStore) -> Result<Option<Self>> {
        let values = store.slice_thickness_values()?;
        Ok(Self::from_values(&values, HISTOGRAM_BINS))
    }

    /// Lower edge of bin `idx`
    pub fn bin_start(&self, idx: usize) -> f64 {
        self.min + self.bin_width * idx as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PixelSpacing, SliceMetadata};
    use std::path::PathBuf;

    fn record(series: &str, thickness: &str) -> SliceMetadata {
        SliceMetadata {
            patient_id: "P1".to_string(),
            study_instance_uid: "S1".to_string(),
            series_instance_uid: series.to_string(),
            slice_thickness: thickness.to_string(),
            pixel_spacing: Some(PixelSpacing::new(0.5, 0.5)),
            study_date: "20240101".to_string(),
            file_path: PathBuf::from("/organized/slice.dcm"),
        }
    }

    #[test]
    fn test_thickness_stats() {
        let stats = ThicknessStats::from_values(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 3.0);
        assert_eq!(stats.mean, 2.0);
    }

    #[test]
    fn test_thickness_stats_empty() {
        assert_eq!(ThicknessStats::from_values(&[]), None);
    }

    #[test]
    fn test_summary_from_populated_store() {
        let mut store = MetadataStore::open_in_memory().unwrap();
        store
            .insert_batch(&[record("SE1", "1.0"), record("SE2", "2.0")])
            .unwrap();

        let summary = SummaryStats::compute(&store).unwrap();
        assert_eq!(summary.total_studies, 1);
        assert_eq!(summary.total_slices, 2);
        assert_eq!(summary.avg_slices_per_study, 2.0);
        let thickness = summary.thickness.unwrap();
        assert_eq!(thickness.min, 1.0);
        assert_eq!(thickness.max, 2.0);
        assert_eq!(thickness.mean, 1.5);
    }

    #[test]
    fn test_summary_from_empty_store() {
        let store = MetadataStore::open_in_memory().unwrap();
        let summary = SummaryStats::compute(&store).unwrap();
        assert_eq!(summary.total_studies, 0);
        assert_eq!(summary.total_slices, 0);
        assert_eq!(summary.avg_slices_per_study, 0.0);
        assert_eq!(summary.thickness, None);
    }

    #[test]
    fn test_summary_all_unknown_thickness() {
        let mut store = MetadataStore::open_in_memory().unwrap();
        store.insert_batch(&[record("SE1", "Unknown")]).unwrap();

        let summary = SummaryStats::compute(&store).unwrap();
        assert_eq!(summary.total_slices, 1);
        assert_eq!(summary.thickness, None);
    }

    #[test]
    fn test_histogram_binning() {
        let values = vec![0.0, 0.5, 1.0, 5.0, 10.0];
        let hist = Histogram::from_values(&values, 10).unwrap();

        assert_eq!(hist.min, 0.0);
        assert_eq!(hist.max, 10.0);
        assert_eq!(hist.counts.len(), 10);
        assert_eq!(hist.counts.iter().sum::<usize>(), values.len());
        // Maximum value lands in the last bin
        assert!(hist.counts[9] >= 1);
    }

    #[test]
    fn test_histogram_single_value() {
        let hist = Histogram::from_values(&[2.5, 2.5, 2.5], 10).unwrap();
        assert_eq!(hist.counts[0], 3);
        assert_eq!(hist.counts.iter().sum::<usize>(), 3);
    }

    #[test]
    fn test_histogram_empty() {
        assert_eq!(Histogram::from_values(&[], 10), None);
    }
}
