use chrono::Datelike;
use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::DatePickerButton;

use crate::state::AppState;
use crate::ui::{metrics, plot};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let Some((min, max)) = state.data.date_bounds else {
        ui.label("No rental days loaded.");
        return;
    };

    // ---- Date range ----
    ui.strong("Date range");
    let mut start = state.filters.range.start;
    let mut end = state.filters.range.end;
    egui::Grid::new("date_range").num_columns(2).show(ui, |ui: &mut Ui| {
        ui.label("From");
        ui.add(
            DatePickerButton::new(&mut start)
                .id_salt("start_date")
                .start_end_years(min.year()..=max.year()),
        );
        ui.end_row();

        ui.label("To");
        ui.add(
            DatePickerButton::new(&mut end)
                .id_salt("end_date")
                .start_end_years(min.year()..=max.year()),
        );
        ui.end_row();
    });
    if ui.small_button("Full range").clicked() {
        start = min;
        end = max;
    }
    if (start, end) != (state.filters.range.start, state.filters.range.end) {
        state.set_range(start, end);
    }
    if start > end {
        ui.colored_label(Color32::YELLOW, "Start date is after end date.");
    }
    ui.separator();

    // ---- Weather condition ----
    let codes = state.data.weather_codes.clone();
    let header_text = format!(
        "Weather condition  ({}/{})",
        state.filters.weather.len(),
        codes.len()
    );
    ui.strong(header_text);
    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all_weather();
        }
        if ui.small_button("None").clicked() {
            state.select_no_weather();
        }
    });

    ScrollArea::vertical()
        .auto_shrink([false, true])
        .show(ui, |ui: &mut Ui| {
            for code in codes {
                let mut checked = state.filters.weather.contains(&code);
                let text = RichText::new(code.label()).color(state.weather_colors.color_for(code));
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_weather(code);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open data folder…").clicked() {
                open_folder_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} days loaded, {} visible · {} hourly rows",
            state.data.daily.len(),
            state.view.filtered.len(),
            state.data.hourly.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Central panel – metrics, charts, validation
// ---------------------------------------------------------------------------

pub fn dashboard(ui: &mut Ui, state: &AppState) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Bike Sharing Analysis 🚴");
            validation_banner(ui, state);
            ui.add_space(8.0);

            metrics::metric_tiles(ui, state);
            ui.add_space(12.0);

            ui.strong("Daily rental trend");
            plot::daily_trend(ui, &state.view);
            ui.add_space(12.0);

            ui.strong("Impact of weather on rentals");
            plot::weather_chart(ui, &state.view, &state.weather_colors);
            ui.add_space(12.0);

            ui.strong("Humidity and windspeed distribution");
            plot::distribution_charts(ui, &state.session);
            ui.add_space(12.0);

            ui.strong("Holiday vs regular day rentals");
            plot::holiday_chart(ui, &state.session);
            ui.add_space(12.0);

            ui.strong("Average rentals by hour of day");
            plot::hourly_chart(ui, &state.view);
            ui.add_space(12.0);

            metrics::validation_section(ui, state);
        });
}

fn validation_banner(ui: &mut Ui, state: &AppState) {
    let report = &state.session.validation;
    if report.inconsistent_count() > 0 {
        ui.colored_label(
            Color32::YELLOW,
            format!(
                "⚠ {} inconsistent day(s): marked as holiday but recorded as working day",
                report.inconsistent_count()
            ),
        );
    }
    if !report.count_mismatches.is_empty() {
        ui.colored_label(
            Color32::YELLOW,
            format!(
                "⚠ {} day(s) where total rentals differ from casual + registered",
                report.count_mismatches.len()
            ),
        );
    }
}

// ---------------------------------------------------------------------------
// Folder dialog
// ---------------------------------------------------------------------------

pub fn open_folder_dialog(state: &mut AppState) {
    let folder = rfd::FileDialog::new()
        .set_title("Open bike sharing data folder")
        .set_directory(&state.config.data_dir)
        .pick_folder();

    if let Some(dir) = folder {
        match state.reload_from(&dir) {
            Ok(()) => {
                log::info!("Switched data folder to {}", dir.display());
            }
            Err(e) => {
                log::error!("Failed to load data: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
