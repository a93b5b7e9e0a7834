use std::collections::VecDeque;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::color::WeatherColors;
use crate::config::DashboardConfig;
use crate::data::aggregate::{
    daily_resample, holiday_summary, hourly_profile, weather_summary, BoxStats, DailySummary,
    HolidaySummary, HourlyProfile, WeatherSummary,
};
use crate::data::filter::{filter, filter_records, init_filter_state, FilterState};
use crate::data::loader;
use crate::data::metrics::{avg_workingday_rain, holiday_delta, total_rentals, DatasetOverview};
use crate::data::model::{BikeShareData, DailyRecord, WeatherCode};
use crate::data::validate::{validate, ValidationReport};

/// How many filter selections keep their computed view around.
const VIEW_CACHE_CAPACITY: usize = 16;

// ---------------------------------------------------------------------------
// Derived data
// ---------------------------------------------------------------------------

/// Everything that depends on the current filter selection.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub filtered: Vec<DailyRecord>,
    pub daily: Vec<DailySummary>,
    pub weather: Vec<WeatherSummary>,
    pub hourly_profile: Vec<HourlyProfile>,
    pub total_rentals: u64,
    pub avg_workingday_rain: Option<f64>,
}

impl DashboardView {
    pub fn compute(data: &BikeShareData, filters: &FilterState) -> Self {
        let filtered = filter(&data.daily, &filters.range, &filters.weather);
        let hourly = filter_records(&data.hourly, &filters.range, &filters.weather);

        DashboardView {
            daily: daily_resample(&filtered),
            weather: weather_summary(&filtered),
            hourly_profile: hourly_profile(&hourly),
            total_rentals: total_rentals(&filtered),
            avg_workingday_rain: avg_workingday_rain(&filtered),
            filtered,
        }
    }
}

/// Figures computed once per load over the unfiltered daily data. The
/// holiday comparison deliberately ignores the side panel filters.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub validation: ValidationReport,
    pub holidays: HolidaySummary,
    pub holiday_delta: Option<f64>,
    pub humidity: Option<BoxStats>,
    pub windspeed: Option<BoxStats>,
    pub overview: DatasetOverview,
}

impl SessionSummary {
    pub fn compute(data: &BikeShareData) -> Self {
        SessionSummary {
            validation: validate(&data.daily),
            holidays: holiday_summary(&data.daily),
            holiday_delta: holiday_delta(&data.daily),
            humidity: BoxStats::from_values(data.daily.iter().map(|r| r.humidity)),
            windspeed: BoxStats::from_values(data.daily.iter().map(|r| r.windspeed)),
            overview: DatasetOverview::compute(data),
        }
    }
}

// ---------------------------------------------------------------------------
// Memoized views
// ---------------------------------------------------------------------------

/// Small FIFO memo of computed views keyed by filter selection.
#[derive(Debug)]
pub struct ViewCache {
    capacity: usize,
    entries: VecDeque<(FilterState, Arc<DashboardView>)>,
}

impl ViewCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: VecDeque::new(),
        }
    }

    pub fn get_or_compute(
        &mut self,
        key: &FilterState,
        compute: impl FnOnce() -> DashboardView,
    ) -> Arc<DashboardView> {
        if let Some((_, view)) = self.entries.iter().find(|(k, _)| k == key) {
            log::debug!("view cache hit for {:?}", key.range);
            return Arc::clone(view);
        }

        log::debug!("view cache miss for {:?}, recomputing", key.range);
        let view = Arc::new(compute());
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back((key.clone(), Arc::clone(&view)));
        view
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Where the current data came from; reused by "Open data folder…".
    pub config: DashboardConfig,

    /// Loaded datasets, shared read-only.
    pub data: Arc<BikeShareData>,

    /// Unfiltered figures for the current data.
    pub session: SessionSummary,

    /// Side panel selections.
    pub filters: FilterState,

    /// View for the current `filters`.
    pub view: Arc<DashboardView>,

    /// Bar colours per weather code.
    pub weather_colors: WeatherColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    cache: ViewCache,
}

impl AppState {
    pub fn new(config: DashboardConfig, data: BikeShareData) -> Self {
        let data = Arc::new(data);
        let filters = init_filter_state(&data);
        let mut cache = ViewCache::new(VIEW_CACHE_CAPACITY);
        let view = cache.get_or_compute(&filters, || DashboardView::compute(&data, &filters));

        let state = Self {
            config,
            session: SessionSummary::compute(&data),
            weather_colors: WeatherColors::new(&data.weather_codes),
            filters,
            view,
            data,
            status_message: None,
            cache,
        };
        state.report_validation();
        state
    }

    /// Ingest a newly loaded dataset, reset filters and drop cached views.
    pub fn set_data(&mut self, data: BikeShareData) {
        let data = Arc::new(data);
        self.filters = init_filter_state(&data);
        self.session = SessionSummary::compute(&data);
        self.weather_colors = WeatherColors::new(&data.weather_codes);
        self.data = data;
        self.cache.clear();
        self.status_message = None;
        self.refresh();
        self.report_validation();
    }

    /// Load both sources from another folder, keeping the configured names.
    /// On failure the current data stays in place.
    pub fn reload_from(&mut self, dir: &Path) -> Result<()> {
        let config = self.config.with_data_dir(dir);
        let data = loader::load(&config.daily_path(), &config.hourly_path())
            .with_context(|| format!("loading rental data from {}", dir.display()))?;
        self.config = config;
        self.set_data(data);
        Ok(())
    }

    /// Bring `view` up to date with `filters`, reusing a cached view when
    /// this selection was seen before.
    pub fn refresh(&mut self) {
        let data = &self.data;
        let filters = &self.filters;
        self.view = self
            .cache
            .get_or_compute(filters, || DashboardView::compute(data, filters));
    }

    /// Set the date range, clamped to the span of the loaded data.
    pub fn set_range(&mut self, start: NaiveDate, end: NaiveDate) {
        self.filters.range.start = self.clamp_date(start);
        self.filters.range.end = self.clamp_date(end);
        self.refresh();
    }

    fn clamp_date(&self, date: NaiveDate) -> NaiveDate {
        match self.data.date_bounds {
            Some((min, max)) => date.clamp(min, max),
            None => date,
        }
    }

    /// Toggle a single weather code in the selection.
    pub fn toggle_weather(&mut self, code: WeatherCode) {
        if !self.filters.weather.remove(&code) {
            self.filters.weather.insert(code);
        }
        self.refresh();
    }

    /// Select every weather code present in the data.
    pub fn select_all_weather(&mut self) {
        self.filters.weather = self.data.weather_codes.clone();
        self.refresh();
    }

    /// Deselect every weather code.
    pub fn select_no_weather(&mut self) {
        self.filters.weather.clear();
        self.refresh();
    }

    fn report_validation(&self) {
        let report = &self.session.validation;
        if report.inconsistent_count() > 0 {
            log::warn!(
                "{} day(s) marked both holiday and working day",
                report.inconsistent_count()
            );
        }
        if !report.count_mismatches.is_empty() {
            log::warn!(
                "{} day(s) where total rentals differ from casual + registered",
                report.count_mismatches.len()
            );
        }
    }
}
