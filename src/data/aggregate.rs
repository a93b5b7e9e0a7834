use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::model::{DailyRecord, HourlyRecord, WeatherCode};

// ---------------------------------------------------------------------------
// Weather summary
// ---------------------------------------------------------------------------

/// Rental statistics for one weather code.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSummary {
    pub weather: WeatherCode,
    /// Number of rows in the group.
    pub days: usize,
    pub avg_total: f64,
    pub min_total: u32,
    pub max_total: u32,
    pub avg_casual: f64,
    pub avg_registered: f64,
}

/// Group by weather code, ascending. Codes without rows are omitted.
pub fn weather_summary(daily: &[DailyRecord]) -> Vec<WeatherSummary> {
    let mut groups: BTreeMap<WeatherCode, Vec<&DailyRecord>> = BTreeMap::new();
    for r in daily {
        groups.entry(r.weather).or_default().push(r);
    }

    groups
        .into_iter()
        .map(|(weather, rows)| {
            let n = rows.len() as f64;
            let avg = |f: fn(&DailyRecord) -> u32| {
                rows.iter().map(|r| f64::from(f(r))).sum::<f64>() / n
            };
            WeatherSummary {
                weather,
                days: rows.len(),
                avg_total: avg(|r| r.total),
                min_total: rows.iter().map(|r| r.total).min().unwrap_or(0),
                max_total: rows.iter().map(|r| r.total).max().unwrap_or(0),
                avg_casual: avg(|r| r.casual),
                avg_registered: avg(|r| r.registered),
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Daily resample
// ---------------------------------------------------------------------------

/// Summed counts for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub total: u64,
    pub casual: u64,
    pub registered: u64,
}

/// Bucket by calendar date and sum. Buckets ascend by date; dates without
/// rows are not filled in.
pub fn daily_resample(daily: &[DailyRecord]) -> Vec<DailySummary> {
    let mut buckets: BTreeMap<NaiveDate, DailySummary> = BTreeMap::new();
    for r in daily {
        let bucket = buckets.entry(r.date).or_insert(DailySummary {
            date: r.date,
            total: 0,
            casual: 0,
            registered: 0,
        });
        bucket.total += u64::from(r.total);
        bucket.casual += u64::from(r.casual);
        bucket.registered += u64::from(r.registered);
    }
    buckets.into_values().collect()
}

// ---------------------------------------------------------------------------
// Holiday summary
// ---------------------------------------------------------------------------

/// Mean daily total on holidays vs. other days. `None` when a side has no rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HolidaySummary {
    pub holiday_mean: Option<f64>,
    pub non_holiday_mean: Option<f64>,
}

/// Always called with the full, unfiltered daily dataset.
pub fn holiday_summary(daily: &[DailyRecord]) -> HolidaySummary {
    let mean_where = |holiday: bool| {
        mean(
            daily
                .iter()
                .filter(|r| r.holiday == holiday)
                .map(|r| f64::from(r.total)),
        )
    };
    HolidaySummary {
        holiday_mean: mean_where(true),
        non_holiday_mean: mean_where(false),
    }
}

/// Arithmetic mean, `None` on empty input.
pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}

// ---------------------------------------------------------------------------
// Distribution (box plot) statistics
// ---------------------------------------------------------------------------

/// Five-number summary with Tukey whiskers (1.5 × IQR).
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    /// Smallest observation within `q1 - 1.5 * iqr`.
    pub lower_whisker: f64,
    /// Largest observation within `q3 + 1.5 * iqr`.
    pub upper_whisker: f64,
    pub outliers: Vec<f64>,
}

impl BoxStats {
    /// `None` for empty input. NaN values are ignored.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut sorted: Vec<f64> = values.into_iter().filter(|v| !v.is_nan()).collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(f64::total_cmp);

        let q1 = quantile(&sorted, 0.25);
        let median = quantile(&sorted, 0.5);
        let q3 = quantile(&sorted, 0.75);
        let iqr = q3 - q1;
        let (lo_fence, hi_fence) = (q1 - 1.5 * iqr, q3 + 1.5 * iqr);

        let inside = || sorted.iter().copied().filter(|v| (lo_fence..=hi_fence).contains(v));
        let lower_whisker = inside().next().unwrap_or(q1);
        let upper_whisker = inside().last().unwrap_or(q3);
        let outliers = sorted
            .iter()
            .copied()
            .filter(|v| !(lo_fence..=hi_fence).contains(v))
            .collect();

        Some(BoxStats {
            min: sorted[0],
            q1,
            median,
            q3,
            max: sorted[sorted.len() - 1],
            lower_whisker,
            upper_whisker,
            outliers,
        })
    }
}

/// Linear interpolation between closest ranks; `sorted` must be non-empty.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

// ---------------------------------------------------------------------------
// Hour-of-day profile
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct HourlyProfile {
    pub hour: u8,
    pub avg_total: f64,
}

/// Mean rentals per hour of day, ascending by hour; absent hours omitted.
pub fn hourly_profile(hourly: &[HourlyRecord]) -> Vec<HourlyProfile> {
    let mut sums: BTreeMap<u8, (u64, usize)> = BTreeMap::new();
    for r in hourly {
        let entry = sums.entry(r.hour).or_default();
        entry.0 += u64::from(r.total);
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(hour, (sum, n))| HourlyProfile {
            hour,
            avg_total: sum as f64 / n as f64,
        })
        .collect()
}
