//! Revenue growth of a single participant
//!
//! Growth compares the earliest and the latest report that carries a
//! revenue figure. A zero starting revenue yields 0% rather than an
//! infinite or undefined ratio, so the value is always safe to average and
//! rank.

use serde::Serialize;

use crate::domain::entities::ReportPeriod;

/// One point of a participant's monthly revenue series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevenuePoint {
    pub period: ReportPeriod,
    pub revenue: Option<f64>,
}

impl RevenuePoint {
    pub fn new(year: i32, month: u32, revenue: Option<f64>) -> Self {
        Self {
            period: ReportPeriod::new(year, month),
            revenue,
        }
    }
}

/// Growth of a revenue series. Never rounded here; round for display only.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Growth {
    pub first_revenue: f64,
    pub last_revenue: f64,
    pub growth_percent: f64,
    /// Number of reports with a revenue figure
    #[serde(skip)]
    pub qualifying_reports: usize,
}

impl Growth {
    /// Compute growth over `reports`. Reports without revenue are ignored.
    ///
    /// The earliest and latest qualifying reports are found by period, so
    /// callers do not have to pre-sort; if two reports share a period the
    /// first one in input order is the earliest and the last one is the
    /// latest.
    pub fn compute(reports: &[RevenuePoint]) -> Self {
        let qualifying = || {
            reports
                .iter()
                .filter_map(|r| r.revenue.map(|revenue| (r.period, revenue)))
        };

        let first = qualifying().min_by_key(|(period, _)| *period);
        let last = qualifying().max_by_key(|(period, _)| *period);

        match (first, last) {
            (Some((_, first_revenue)), Some((_, last_revenue))) => Self {
                first_revenue,
                last_revenue,
                growth_percent: growth_percent(first_revenue, last_revenue),
                qualifying_reports: qualifying().count(),
            },
            _ => Self::default(),
        }
    }

    /// Whether at least one report carried revenue
    pub fn has_data(&self) -> bool {
        self.qualifying_reports > 0
    }
}

/// `(last - first) / first * 100`, or 0 when `first` is 0
pub fn growth_percent(first_revenue: f64, last_revenue: f64) -> f64 {
    if first_revenue == 0.0 {
        0.0
    } else {
        (last_revenue - first_revenue) / first_revenue * 100.0
    }
}

/// Mean growth percent over the growths that have data.
///
/// Participants without any qualifying report are left out of the
/// denominator. Returns `(mean, samples)`; the mean is 0 when there are no
/// samples.
pub fn mean_growth<'a, I>(growths: I) -> (f64, usize)
where
    I: IntoIterator<Item = &'a Growth>,
{
    let (sum, samples) = growths
        .into_iter()
        .filter(|g| g.has_data())
        .fold((0.0_f64, 0_usize), |(sum, n), g| (sum + g.growth_percent, n + 1));

    if samples == 0 {
        (0.0, 0)
    } else {
        (sum / samples as f64, samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(year: i32, month: u32, revenue: Option<f64>) -> RevenuePoint {
        RevenuePoint::new(year, month, revenue)
    }

    #[test]
    fn empty_series_is_all_zero() {
        let growth = Growth::compute(&[]);
        assert_eq!(growth.first_revenue, 0.0);
        assert_eq!(growth.last_revenue, 0.0);
        assert_eq!(growth.growth_percent, 0.0);
        assert!(!growth.has_data());
    }

    #[test]
    fn single_report_has_zero_growth() {
        let growth = Growth::compute(&[point(2024, 1, Some(100.0))]);
        assert_eq!(growth.first_revenue, 100.0);
        assert_eq!(growth.last_revenue, 100.0);
        assert_eq!(growth.growth_percent, 0.0);
        assert!(growth.has_data());
    }

    #[test]
    fn two_reports_compute_percent() {
        let growth = Growth::compute(&[point(2024, 1, Some(100.0)), point(2024, 2, Some(150.0))]);
        assert_eq!(growth.first_revenue, 100.0);
        assert_eq!(growth.last_revenue, 150.0);
        assert_eq!(growth.growth_percent, 50.0);
    }

    #[test]
    fn zero_first_revenue_is_guarded() {
        let growth = Growth::compute(&[point(2024, 1, Some(0.0)), point(2024, 2, Some(50.0))]);
        assert_eq!(growth.growth_percent, 0.0);
        assert!(growth.growth_percent.is_finite());

        let flat = Growth::compute(&[point(2024, 1, Some(0.0)), point(2024, 2, Some(0.0))]);
        assert_eq!(flat.growth_percent, 0.0);
    }

    #[test]
    fn null_revenue_reports_are_skipped() {
        let growth = Growth::compute(&[
            point(2024, 1, None),
            point(2024, 2, Some(200.0)),
            point(2024, 3, Some(100.0)),
            point(2024, 4, None),
        ]);
        assert_eq!(growth.first_revenue, 200.0);
        assert_eq!(growth.last_revenue, 100.0);
        assert_eq!(growth.growth_percent, -50.0);
        assert_eq!(growth.qualifying_reports, 2);
    }

    #[test]
    fn only_null_revenue_counts_as_no_data() {
        let growth = Growth::compute(&[point(2024, 1, None), point(2024, 2, None)]);
        assert_eq!(growth, Growth::default());
    }

    #[test]
    fn order_is_by_year_then_month_not_input_order() {
        let growth = Growth::compute(&[
            point(2024, 1, Some(300.0)),
            point(2023, 12, Some(100.0)),
            point(2023, 11, None),
        ]);
        assert_eq!(growth.first_revenue, 100.0);
        assert_eq!(growth.last_revenue, 300.0);
        assert_eq!(growth.growth_percent, 200.0);
    }

    #[test]
    fn mean_growth_skips_participants_without_data() {
        let a = Growth::compute(&[point(2024, 1, Some(100.0)), point(2024, 2, Some(200.0))]);
        let b = Growth::compute(&[point(2024, 1, Some(0.0)), point(2024, 2, Some(0.0))]);
        let c = Growth::compute(&[]);

        let (mean, samples) = mean_growth([&a, &b, &c]);
        assert_eq!(samples, 2);
        assert_eq!(mean, 50.0);
    }

    #[test]
    fn mean_growth_of_nothing_is_zero() {
        assert_eq!(mean_growth(std::iter::empty()), (0.0, 0));
    }

    #[test]
    fn mean_is_taken_before_any_rounding() {
        let a = Growth::compute(&[point(2024, 1, Some(3.0)), point(2024, 2, Some(4.0))]);
        let b = Growth::compute(&[point(2024, 1, Some(3.0)), point(2024, 2, Some(3.0))]);
        let (mean, _) = mean_growth([&a, &b]);
        assert!((mean - 100.0 / 6.0).abs() < 1e-12);
    }
}
