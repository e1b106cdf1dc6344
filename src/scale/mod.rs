//! Scales derived from one dataset snapshot.
//!
//! `Scales::build` is the only constructor, so axis labels, cell positions
//! and colors can never come from different datasets.

use anyhow::{bail, Result};

use crate::color::Ramp;
use crate::data::Dataset;
use crate::format::to_fixed;
use crate::logging::{log, obj, v_num, Domain, Level};
use crate::render::layout::Layout;

pub mod band;
pub mod sequential;

pub use band::BandScale;
pub use sequential::{ticks, SequentialScale};

/// Number of divisions requested from the color scale for legend swatches.
pub const LEGEND_SWATCH_TICKS: usize = 10;
/// Number of evenly spaced absolute temperatures labelled under the legend.
pub const LEGEND_LABEL_STEPS: f64 = 8.0;

#[derive(Debug, Clone)]
pub struct Scales {
    pub year: BandScale<i32>,
    pub month: BandScale<i32>,
    pub color: SequentialScale,
    pub legend: BandScale<String>,
    /// Decade years for the bottom axis, first-seen order.
    pub year_ticks: Vec<i32>,
    /// Values sampled from the color scale for the legend swatches.
    pub legend_swatches: Vec<f64>,
}

impl Scales {
    pub fn build(dataset: &Dataset, layout: &Layout) -> Result<Self> {
        let data = &dataset.monthly_variance;
        if data.is_empty() {
            bail!("cannot build scales from a dataset without observations");
        }

        let year = BandScale::new(
            data.iter().map(|d| d.year),
            (layout.margin.left, layout.width - layout.margin.right),
        );
        let month = BandScale::new(
            data.iter().map(|d| d.month),
            (layout.margin.top, layout.height - layout.margin.bottom),
        )
        .with_padding(0.0);

        let color = SequentialScale::new(
            inverted_variance_domain(data.iter().map(|d| d.variance)),
            Ramp::rd_yl_bu(),
        );
        let legend_swatches = color.ticks(LEGEND_SWATCH_TICKS);

        let legend = BandScale::new(
            legend_temperatures(dataset).into_iter().map(|t| to_fixed(t, 2)),
            (0.0, layout.legend_label_span()),
        );

        let year_ticks = decade_ticks(year.domain());

        log(
            Level::Debug,
            Domain::Scale,
            "scales.built",
            obj(&[
                ("years", v_num(year.domain().len() as f64)),
                ("months", v_num(month.domain().len() as f64)),
                ("color_start", v_num(color.domain().0)),
                ("color_end", v_num(color.domain().1)),
                ("legend_labels", v_num(legend.domain().len() as f64)),
                ("legend_swatches", v_num(legend_swatches.len() as f64)),
            ]),
        );

        Ok(Self {
            year,
            month,
            color,
            legend,
            year_ticks,
            legend_swatches,
        })
    }
}

/// Color domain with the maximum first, so the largest variance takes the
/// red end of the ramp and the smallest the blue end.
pub fn inverted_variance_domain<I: IntoIterator<Item = f64>>(variances: I) -> (f64, f64) {
    let (min, max) = min_max(variances);
    (max, min)
}

fn min_max<I: IntoIterator<Item = f64>>(values: I) -> (f64, f64) {
    values
        .into_iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)))
}

pub fn decade_ticks(years: &[i32]) -> Vec<i32> {
    years.iter().copied().filter(|y| y % 10 == 0).collect()
}

/// `[start, start + step, ...)` below `stop`.
pub fn range(start: f64, stop: f64, step: f64) -> Vec<f64> {
    let n = ((stop - start) / step).ceil();
    if !n.is_finite() || n <= 0.0 {
        return Vec::new();
    }
    (0..n as usize).map(|i| start + i as f64 * step).collect()
}

/// Absolute temperatures sampled for the legend labels.
pub fn legend_temperatures(dataset: &Dataset) -> Vec<f64> {
    let base = dataset.base_temperature;
    let (min, max) = min_max(dataset.monthly_variance.iter().map(|d| d.variance + base));
    range(min, max, (max - min) / LEGEND_LABEL_STEPS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MonthlyVariance;

    fn obs(year: i32, month: i32, variance: f64) -> MonthlyVariance {
        MonthlyVariance { year, month, variance }
    }

    fn dataset(rows: Vec<MonthlyVariance>) -> Dataset {
        Dataset {
            base_temperature: 8.66,
            monthly_variance: rows,
        }
    }

    #[test]
    fn test_color_domain_is_max_then_min() {
        assert_eq!(inverted_variance_domain(vec![0.3, -1.5, 2.25, 0.0]), (2.25, -1.5));
    }

    #[test]
    fn test_decade_ticks_keep_first_seen_order() {
        assert_eq!(decade_ticks(&[1905, 1910, 1800, 1753, 1760, 2000]), vec![1910, 1800, 1760, 2000]);
        assert!(decade_ticks(&[1753, 1754]).is_empty());
    }

    #[test]
    fn test_range_excludes_stop() {
        assert_eq!(range(0.0, 4.0, 1.0), vec![0.0, 1.0, 2.0, 3.0]);
        assert!(range(1.0, 1.0, 0.0).is_empty());
        assert!(range(2.0, 1.0, 1.0).is_empty());
    }

    #[test]
    fn test_legend_temperatures_sample_eight_points() {
        let ds = Dataset {
            base_temperature: 8.0,
            monthly_variance: vec![obs(1900, 1, -2.0), obs(1900, 2, 6.0)],
        };
        assert_eq!(legend_temperatures(&ds), vec![6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0]);
    }

    #[test]
    fn test_build_uses_layout_ranges() {
        let ds = dataset(vec![obs(1900, 1, 0.5), obs(1901, 1, -0.5), obs(1900, 2, 0.0)]);
        let scales = Scales::build(&ds, &Layout::default()).unwrap();
        assert_eq!(scales.year.domain(), &[1900, 1901]);
        assert_eq!(scales.month.domain(), &[1, 2]);
        assert_eq!(scales.year.map(&1900), Some(80.0));
        assert_eq!(scales.year.bandwidth(), 590.0);
        assert_eq!(scales.month.map(&2), Some(230.0));
        assert_eq!(scales.year_ticks, vec![1900]);
        assert_eq!(scales.color.domain(), (0.5, -0.5));
        assert_eq!(scales.legend.range(), (0.0, 260.0));
    }

    #[test]
    fn test_legend_label_and_swatch_counts_differ() {
        let ds = dataset(vec![obs(1900, 1, -6.976), obs(1900, 2, 5.228)]);
        let scales = Scales::build(&ds, &Layout::default()).unwrap();
        assert_eq!(scales.legend.domain().len(), 8);
        assert_eq!(scales.legend_swatches.len(), 12);
    }

    #[test]
    fn test_empty_dataset_fails() {
        assert!(Scales::build(&dataset(Vec::new()), &Layout::default()).is_err());
    }
}
