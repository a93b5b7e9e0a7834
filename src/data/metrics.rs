use super::aggregate::{holiday_summary, mean};
use super::model::{BikeShareData, DailyRecord, WeatherCode};

// ---------------------------------------------------------------------------
// Scalar metrics shown in the tiles
// ---------------------------------------------------------------------------

/// Sum of total rentals over the filtered view.
pub fn total_rentals(filtered: &[DailyRecord]) -> u64 {
    filtered.iter().map(|r| u64::from(r.total)).sum()
}

/// Mean total on rainy / snowy working days. `None` means no such day.
pub fn avg_workingday_rain(filtered: &[DailyRecord]) -> Option<f64> {
    mean(
        filtered
            .iter()
            .filter(|r| r.workingday && r.weather == WeatherCode::RAIN_SNOW)
            .map(|r| f64::from(r.total)),
    )
}

/// Holiday mean minus non-holiday mean over the full dataset. `None` when
/// either group is empty.
pub fn holiday_delta(daily: &[DailyRecord]) -> Option<f64> {
    let summary = holiday_summary(daily);
    Some(summary.holiday_mean? - summary.non_holiday_mean?)
}

// ---------------------------------------------------------------------------
// Dataset overview (validation section)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct DatasetOverview {
    pub holiday_days: usize,
    pub working_days: usize,
    pub weather_categories: usize,
    pub daily_missing_values: usize,
    pub hourly_missing_values: usize,
    /// Lowest and highest normalized temperature in the daily data.
    pub temperature_range: Option<(f64, f64)>,
}

impl DatasetOverview {
    pub fn compute(data: &BikeShareData) -> Self {
        let temperature_range = data
            .daily
            .iter()
            .map(|r| r.temperature)
            .filter(|t| !t.is_nan())
            .fold(None, |acc: Option<(f64, f64)>, t| match acc {
                None => Some((t, t)),
                Some((lo, hi)) => Some((lo.min(t), hi.max(t))),
            });

        DatasetOverview {
            holiday_days: data.daily.iter().filter(|r| r.holiday).count(),
            working_days: data.daily.iter().filter(|r| r.workingday).count(),
            weather_categories: data.weather_codes.len(),
            daily_missing_values: data.daily_report.missing_values,
            hourly_missing_values: data.hourly_report.missing_values,
            temperature_range,
        }
    }
}

// ---------------------------------------------------------------------------
// Display formatting
// ---------------------------------------------------------------------------

/// `1234567` → `"1,234,567"`.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Round to a whole number with thousands separators; `None` is "no data".
pub fn format_metric(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => {
            let rounded = v.round();
            let sign = if rounded < 0.0 { "-" } else { "" };
            format!("{sign}{}", format_count(rounded.abs() as u64))
        }
        _ => "no data".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::fixtures::*;

    #[test]
    fn scenario_metrics() {
        let daily = three_days();
        assert_eq!(total_rentals(&daily), 230);
        assert_eq!(avg_workingday_rain(&daily), Some(50.0));
        // holiday mean 100, regular mean (50 + 80) / 2
        assert_eq!(holiday_delta(&daily), Some(35.0));
    }

    #[test]
    fn rainy_workday_without_rows_is_no_data() {
        let daily = vec![
            day(date(2011, 1, 1), false, true, 1, 10),
            day(date(2011, 1, 2), false, false, 3, 20),
        ];
        assert_eq!(avg_workingday_rain(&daily), None);
        assert_eq!(format_metric(avg_workingday_rain(&daily)), "no data");
    }

    #[test]
    fn empty_input_metrics() {
        assert_eq!(total_rentals(&[]), 0);
        assert_eq!(avg_workingday_rain(&[]), None);
        assert_eq!(holiday_delta(&[]), None);
    }

    #[test]
    fn holiday_delta_needs_both_groups() {
        let daily = vec![day(date(2011, 1, 1), false, true, 1, 10)];
        assert_eq!(holiday_delta(&daily), None);
    }

    #[test]
    fn overview_counts() {
        let mut daily = three_days();
        daily[1].temperature = -0.1;
        daily[2].temperature = 0.8;
        let data = BikeShareData::from_records(daily, Vec::new());
        let overview = DatasetOverview::compute(&data);
        assert_eq!(overview.holiday_days, 1);
        assert_eq!(overview.working_days, 2);
        assert_eq!(overview.weather_categories, 3);
        assert_eq!(overview.temperature_range, Some((-0.1, 0.8)));
    }

    #[test]
    fn formats_with_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(985), "985");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(3292679), "3,292,679");
        assert_eq!(format_metric(Some(-1234.6)), "-1,235");
        assert_eq!(format_metric(Some(49.4)), "49");
        assert_eq!(format_metric(None), "no data");
    }
}
