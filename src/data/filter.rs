use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::model::{BikeShareData, DailyRecord, RentalRecord, WeatherCode};

// ---------------------------------------------------------------------------
// Filter predicate: date range + selected weather codes
// ---------------------------------------------------------------------------

/// Inclusive on both ends. An inverted range matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateRangeFilter {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRangeFilter {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Selected weather codes. Empty means nothing is shown.
pub type WeatherFilter = BTreeSet<WeatherCode>;

/// Everything the side panel controls. Also the key of the view cache.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FilterState {
    pub range: DateRangeFilter,
    pub weather: WeatherFilter,
}

/// Initialise a [`FilterState`] that shows everything: the full date span of
/// the daily data and every weather code present.
pub fn init_filter_state(data: &BikeShareData) -> FilterState {
    let range = match data.date_bounds {
        Some((start, end)) => DateRangeFilter::new(start, end),
        None => {
            let today = chrono::Local::now().date_naive();
            DateRangeFilter::new(today, today)
        }
    };
    FilterState {
        range,
        weather: data.weather_codes.clone(),
    }
}

/// Records whose date lies in `range` and whose weather code is selected,
/// in input order.
pub fn filter_records<R>(records: &[R], range: &DateRangeFilter, weather: &WeatherFilter) -> Vec<R>
where
    R: RentalRecord + Clone,
{
    records
        .iter()
        .filter(|r| range.contains(r.date()) && weather.contains(&r.weather()))
        .cloned()
        .collect()
}

/// The daily view the charts and metric tiles work on.
pub fn filter(
    daily: &[DailyRecord],
    range: &DateRangeFilter,
    weather: &WeatherFilter,
) -> Vec<DailyRecord> {
    filter_records(daily, range, weather)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::fixtures::*;

    fn codes(c: &[u8]) -> WeatherFilter {
        c.iter().map(|&c| WeatherCode(c)).collect()
    }

    #[test]
    fn filters_by_weather_and_keeps_order() {
        let daily = three_days();
        let range = DateRangeFilter::new(date(2011, 1, 1), date(2011, 1, 3));
        let out = filter(&daily, &range, &codes(&[1, 2]));
        let dates: Vec<_> = out.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![date(2011, 1, 1), date(2011, 1, 3)]);
        assert_eq!(out.iter().map(|r| r.total).sum::<u32>(), 180);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let daily = three_days();
        let range = DateRangeFilter::new(date(2011, 1, 2), date(2011, 1, 3));
        let out = filter(&daily, &range, &codes(&[1, 2, 3]));
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|r| range.contains(r.date)));
    }

    #[test]
    fn inverted_range_is_empty() {
        let daily = three_days();
        let range = DateRangeFilter::new(date(2011, 1, 3), date(2011, 1, 1));
        assert!(filter(&daily, &range, &codes(&[1, 2, 3])).is_empty());
    }

    #[test]
    fn empty_weather_selection_is_empty() {
        let daily = three_days();
        let range = DateRangeFilter::new(date(2011, 1, 1), date(2011, 1, 3));
        assert!(filter(&daily, &range, &WeatherFilter::new()).is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let daily = three_days();
        let range = DateRangeFilter::new(date(2011, 1, 1), date(2011, 1, 2));
        let weather = codes(&[1, 3]);
        let first = filter(&daily, &range, &weather);
        let second = filter(&daily, &range, &weather);
        assert_eq!(first, second);
        assert_eq!(daily, three_days());
    }

    #[test]
    fn hourly_records_use_the_same_engine() {
        let hourly = vec![
            hour(date(2011, 1, 1), 0, 1, 16),
            hour(date(2011, 1, 1), 1, 3, 40),
            hour(date(2011, 1, 2), 0, 1, 17),
        ];
        let range = DateRangeFilter::new(date(2011, 1, 1), date(2011, 1, 1));
        let out = filter_records(&hourly, &range, &codes(&[1]));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].total, 16);
    }

    #[test]
    fn initial_state_selects_everything() {
        let data = BikeShareData::from_records(three_days(), Vec::new());
        let state = init_filter_state(&data);
        assert_eq!(state.range, DateRangeFilter::new(date(2011, 1, 1), date(2011, 1, 3)));
        assert_eq!(state.weather, codes(&[1, 2, 3]));
        assert_eq!(filter(&data.daily, &state.range, &state.weather).len(), 3);
    }
}
