use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// WeatherCode – the `weathersit` column
// ---------------------------------------------------------------------------

/// Coarse weather situation attached to every rental record.
///
/// The source only uses codes 1–3, but any integer is kept as-is so that an
/// unexpected code still shows up in filters (labelled "unknown").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeatherCode(pub u8);

impl WeatherCode {
    pub const CLEAR: WeatherCode = WeatherCode(1);
    pub const CLOUDY: WeatherCode = WeatherCode(2);
    pub const RAIN_SNOW: WeatherCode = WeatherCode(3);

    /// Human readable label used by filters and chart axes.
    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "clear",
            2 => "cloudy",
            3 => "rain/snow",
            _ => "unknown",
        }
    }
}

impl fmt::Display for WeatherCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ---------------------------------------------------------------------------
// Records – one row of `day.csv` / `hour.csv`
// ---------------------------------------------------------------------------

/// One calendar day of rentals.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRecord {
    pub date: NaiveDate,
    /// Total rentals (`cnt`), expected to equal `casual + registered`.
    pub total: u32,
    pub casual: u32,
    pub registered: u32,
    pub holiday: bool,
    pub workingday: bool,
    pub weather: WeatherCode,
    /// Normalized humidity in [0, 1].
    pub humidity: f64,
    /// Normalized windspeed in [0, 1].
    pub windspeed: f64,
    /// Normalized temperature.
    pub temperature: f64,
}

/// One hour of rentals. Same attributes as [`DailyRecord`] plus the hour.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyRecord {
    pub date: NaiveDate,
    /// Hour of day, 0–23.
    pub hour: u8,
    pub total: u32,
    pub casual: u32,
    pub registered: u32,
    pub holiday: bool,
    pub workingday: bool,
    pub weather: WeatherCode,
    pub humidity: f64,
    pub windspeed: f64,
    pub temperature: f64,
}

/// Attributes shared by daily and hourly rows that filtering and
/// aggregation need.
pub trait RentalRecord {
    fn date(&self) -> NaiveDate;
    fn weather(&self) -> WeatherCode;
    fn total(&self) -> u32;
}

impl RentalRecord for DailyRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn weather(&self) -> WeatherCode {
        self.weather
    }

    fn total(&self) -> u32 {
        self.total
    }
}

impl RentalRecord for HourlyRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn weather(&self) -> WeatherCode {
        self.weather
    }

    fn total(&self) -> u32 {
        self.total
    }
}

// ---------------------------------------------------------------------------
// LoadReport – what the loader saw in one source
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Number of data rows read.
    pub rows: usize,
    /// Empty / null cells across all columns, including ignored ones.
    pub missing_values: usize,
}

// ---------------------------------------------------------------------------
// BikeShareData – the complete loaded session data
// ---------------------------------------------------------------------------

/// Both datasets plus pre-computed indices. Built once per load and shared
/// read-only (behind an `Arc`) by everything downstream.
#[derive(Debug, Clone)]
pub struct BikeShareData {
    pub daily: Vec<DailyRecord>,
    pub hourly: Vec<HourlyRecord>,
    pub daily_report: LoadReport,
    pub hourly_report: LoadReport,
    /// Earliest and latest date in the daily dataset.
    pub date_bounds: Option<(NaiveDate, NaiveDate)>,
    /// Distinct weather codes present in the daily dataset, ascending.
    pub weather_codes: BTreeSet<WeatherCode>,
}

impl BikeShareData {
    /// Build date and weather indices from the loaded records.
    pub fn new(
        daily: Vec<DailyRecord>,
        hourly: Vec<HourlyRecord>,
        daily_report: LoadReport,
        hourly_report: LoadReport,
    ) -> Self {
        let date_bounds = daily.iter().map(|r| r.date).fold(None, |acc, d| match acc {
            None => Some((d, d)),
            Some((lo, hi)) => Some((lo.min(d), hi.max(d))),
        });
        let weather_codes = daily.iter().map(|r| r.weather).collect();

        BikeShareData {
            daily,
            hourly,
            daily_report,
            hourly_report,
            date_bounds,
            weather_codes,
        }
    }

    /// Convenience constructor for in-memory data (tests, generated data).
    pub fn from_records(daily: Vec<DailyRecord>, hourly: Vec<HourlyRecord>) -> Self {
        let daily_report = LoadReport {
            rows: daily.len(),
            missing_values: 0,
        };
        let hourly_report = LoadReport {
            rows: hourly.len(),
            missing_values: 0,
        };
        Self::new(daily, hourly, daily_report, hourly_report)
    }

    /// Whether the daily dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.daily.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Test fixtures shared by the data modules
// ---------------------------------------------------------------------------
