use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};
use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{
    Bar, BarChart, BoxElem, BoxPlot, BoxSpread, GridMark, Line, Plot, PlotPoints, Points,
};

use crate::color::{WeatherColors, ACCENT, PRIMARY};
use crate::data::aggregate::BoxStats;
use crate::data::model::WeatherCode;
use crate::state::{DashboardView, SessionSummary};

const CHART_HEIGHT: f32 = 260.0;

fn no_data(ui: &mut Ui) {
    ui.weak("no data");
}

/// Bar and box charts are static so the page keeps scrolling over them.
fn static_plot(id: &str) -> Plot<'_> {
    Plot::new(id)
        .height(CHART_HEIGHT)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
}

/// Label integer positions via `label`, leave fractional ticks blank.
fn category_axis(
    label: impl Fn(i64) -> String,
) -> impl Fn(GridMark, &RangeInclusive<f64>) -> String {
    move |mark, _range| {
        let v = mark.value;
        if (v - v.round()).abs() < 1e-6 {
            label(v.round() as i64)
        } else {
            String::new()
        }
    }
}

// ---------------------------------------------------------------------------
// Daily trend (line)
// ---------------------------------------------------------------------------

fn day_number(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

fn format_day(value: f64) -> String {
    NaiveDate::from_num_days_from_ce_opt(value.round() as i32)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

pub fn daily_trend(ui: &mut Ui, view: &DashboardView) {
    if view.daily.is_empty() {
        return no_data(ui);
    }

    let points: PlotPoints = view
        .daily
        .iter()
        .map(|d| [day_number(d.date), d.total as f64])
        .collect();

    Plot::new("daily_trend")
        .height(CHART_HEIGHT)
        .x_axis_label("Date")
        .y_axis_label("Rentals")
        .x_axis_formatter(|mark, _range| format_day(mark.value))
        .label_formatter(|_name, value| format!("{}\n{:.0} rentals", format_day(value.x), value.y))
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(points).name("Rentals").color(PRIMARY).width(1.5));
        });
}

// ---------------------------------------------------------------------------
// Weather (bars)
// ---------------------------------------------------------------------------

pub fn weather_chart(ui: &mut Ui, view: &DashboardView, colors: &WeatherColors) {
    if view.weather.is_empty() {
        return no_data(ui);
    }

    let bars = view
        .weather
        .iter()
        .map(|s| {
            Bar::new(f64::from(s.weather.0), s.avg_total)
                .name(format!(
                    "{}: {} days, min {}, max {}",
                    s.weather.label(),
                    s.days,
                    s.min_total,
                    s.max_total
                ))
                .fill(colors.color_for(s.weather))
                .width(0.6)
        })
        .collect();

    static_plot("weather_chart")
        .x_axis_label("Weather condition")
        .y_axis_label("Average rentals")
        .x_axis_formatter(category_axis(|v| match u8::try_from(v) {
            Ok(code) => WeatherCode(code).label().to_string(),
            Err(_) => String::new(),
        }))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Average rentals"));
        });
}

// ---------------------------------------------------------------------------
// Humidity / windspeed (box plots)
// ---------------------------------------------------------------------------

pub fn distribution_charts(ui: &mut Ui, session: &SessionSummary) {
    ui.columns(2, |columns| {
        box_chart(
            &mut columns[0],
            "humidity_box",
            "Humidity",
            session.humidity.as_ref(),
            Color32::LIGHT_BLUE,
        );
        box_chart(
            &mut columns[1],
            "windspeed_box",
            "Windspeed",
            session.windspeed.as_ref(),
            Color32::from_rgb(0xfa, 0x80, 0x72),
        );
    });
}

fn box_chart(ui: &mut Ui, id: &str, title: &str, stats: Option<&BoxStats>, color: Color32) {
    ui.label(title);
    let Some(stats) = stats else {
        return no_data(ui);
    };

    let spread = BoxSpread::new(
        stats.lower_whisker,
        stats.q1,
        stats.median,
        stats.q3,
        stats.upper_whisker,
    );
    let elem = BoxElem::new(0.0, spread)
        .name(title)
        .fill(color.gamma_multiply(0.6))
        .stroke(Stroke::new(1.5, color))
        .box_width(0.5);
    let outliers: PlotPoints = stats.outliers.iter().map(|&v| [0.0, v]).collect();

    static_plot(id)
        .show_x(false)
        .x_axis_formatter(|_mark, _range| String::new())
        .show(ui, |plot_ui| {
            plot_ui.box_plot(BoxPlot::new(vec![elem]).name(title));
            plot_ui.points(Points::new(outliers).radius(2.5).color(color));
        });
}

// ---------------------------------------------------------------------------
// Holiday comparison (bars)
// ---------------------------------------------------------------------------

pub fn holiday_chart(ui: &mut Ui, session: &SessionSummary) {
    let holidays = &session.holidays;
    let bars: Vec<Bar> = [
        (0.0, "Regular day", holidays.non_holiday_mean, PRIMARY),
        (1.0, "Holiday", holidays.holiday_mean, ACCENT),
    ]
    .into_iter()
    .filter_map(|(x, name, mean, color)| {
        mean.map(|m| Bar::new(x, m).name(name).fill(color).width(0.6))
    })
    .collect();

    if bars.is_empty() {
        return no_data(ui);
    }

    static_plot("holiday_chart")
        .x_axis_label("Day type")
        .y_axis_label("Average rentals")
        .x_axis_formatter(category_axis(|v| match v {
            0 => "Regular day".to_string(),
            1 => "Holiday".to_string(),
            _ => String::new(),
        }))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Average rentals"));
        });
}

// ---------------------------------------------------------------------------
// Hour-of-day profile (bars)
// ---------------------------------------------------------------------------

pub fn hourly_chart(ui: &mut Ui, view: &DashboardView) {
    if view.hourly_profile.is_empty() {
        return no_data(ui);
    }

    let bars = view
        .hourly_profile
        .iter()
        .map(|p| Bar::new(f64::from(p.hour), p.avg_total).fill(PRIMARY).width(0.8))
        .collect();

    static_plot("hourly_chart")
        .x_axis_label("Hour")
        .y_axis_label("Average rentals")
        .x_axis_formatter(category_axis(|v| {
            if (0..24).contains(&v) {
                format!("{v:02}")
            } else {
                String::new()
            }
        }))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Average rentals"));
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_axis_round_trips_dates() {
        let date = NaiveDate::from_ymd_opt(2011, 3, 14).unwrap();
        assert_eq!(format_day(day_number(date)), "2011-03-14");
        assert_eq!(format_day(day_number(date) + 0.3), "2011-03-14");
    }
}
