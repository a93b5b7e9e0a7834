use eframe::egui::{RichText, Ui};

use crate::data::metrics::{format_count, format_metric};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Metric tiles
// ---------------------------------------------------------------------------

fn metric(ui: &mut Ui, label: &str, value: String) {
    ui.group(|ui: &mut Ui| {
        ui.set_min_width(ui.available_width());
        ui.label(label);
        ui.label(RichText::new(value).size(24.0).strong());
    });
}

/// Total rentals and the rainy working-day mean follow the filters; the
/// holiday delta always covers the whole dataset.
pub fn metric_tiles(ui: &mut Ui, state: &AppState) {
    ui.columns(3, |columns| {
        metric(&mut columns[0], "Total rentals", format_count(state.view.total_rentals));
        metric(
            &mut columns[1],
            "Avg rentals on rainy working days",
            format_metric(state.view.avg_workingday_rain),
        );
        metric(
            &mut columns[2],
            "Holiday vs regular day difference",
            format_metric(state.session.holiday_delta),
        );
    });
}

// ---------------------------------------------------------------------------
// Data validation section
// ---------------------------------------------------------------------------

pub fn validation_section(ui: &mut Ui, state: &AppState) {
    let overview = &state.session.overview;

    ui.heading("Data validation");
    ui.columns(3, |columns| {
        let ui = &mut columns[0];
        ui.strong("Data checks");
        metric(ui, "Total holidays", overview.holiday_days.to_string());
        metric(ui, "Missing values (day)", overview.daily_missing_values.to_string());

        let ui = &mut columns[1];
        ui.strong("Consistency");
        metric(ui, "Distinct weather categories", overview.weather_categories.to_string());
        metric(ui, "Missing values (hour)", overview.hourly_missing_values.to_string());

        let ui = &mut columns[2];
        ui.strong("Descriptive statistics");
        ui.label(format!("Total working days: {}", overview.working_days));
        match overview.temperature_range {
            Some((lo, hi)) => ui.label(format!("Temperature range: {lo:.2} - {hi:.2}")),
            None => ui.label("Temperature range: no data"),
        };
    });
}
