use crate::report::{Histogram, SummaryStats};
use std::fmt;

/// Text report formatter for summary statistics and the thickness histogram
pub struct TextReport<'a> {
    summary: &'a SummaryStats,
    histogram: Option<&'a Histogram>,
}

impl<'a> TextReport<'a> {
    /// Creates a new text report
    pub fn new(summary: &'a SummaryStats, histogram: Option<&'a Histogram>) -> Self {
        Self { summary, histogram }
    }

    fn write_histogram(f: &mut fmt::Formatter<'_>, hist: &Histogram) -> fmt::Result {
        writeln!(f, "Distribution of Slice Thickness")?;
        writeln!(f, "-------------------------------")?;
        writeln!(f, "Slice Thickness (mm) vs Frequency")?;
        writeln!(f)?;

        let peak = hist.counts.iter().copied().max().unwrap_or(0).max(1);
        for (idx, &count) in hist.counts.iter().enumerate() {
            let bar_len = count * 40 / peak;
            writeln!(
                f,
                "{:>8.2} - {:<8.2} | {:<40} {}",
                hist.bin_start(idx),
                hist.bin_start(idx + 1),
                "#".repeat(bar_len),
                count
            )?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary Statistics")?;
        writeln!(f, "==================")?;
        writeln!(f)?;
        writeln!(f, "- Total Studies: {}", self.summary.total_studies)?;
        writeln!(f, "- Total Slices: {}", self.summary.total_slices)?;
        writeln!(
            f,
            "- Average Slices per Study: {:.2}",
            self.summary.avg_slices_per_study
        )?;
        match &self.summary.thickness {
            Some(t) => writeln!(
                f,
                "- Slice Thickness: Min = {:.2}, Max = {:.2}, Mean = {:.2}",
                t.min, t.max, t.mean
            )?,
            None => writeln!(f, "- Slice Thickness: No valid data available.")?,
        }
        writeln!(f)?;

        match self.histogram {
            Some(hist) => Self::write_histogram(f, hist)?,
            None => writeln!(
                f,
                "No valid Slice Thickness data available for visualization."
            )?,
        }

        Ok(())
    }
}
