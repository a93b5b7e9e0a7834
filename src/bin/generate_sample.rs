use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

/// One row of `day.csv`, column order as in the public bike sharing dataset.
#[derive(Serialize)]
struct DayRow {
    instant: usize,
    dteday: String,
    season: u8,
    yr: u8,
    mnth: u32,
    holiday: u8,
    weekday: u32,
    workingday: u8,
    weathersit: u8,
    temp: f64,
    atemp: f64,
    hum: f64,
    windspeed: f64,
    casual: u32,
    registered: u32,
    cnt: u32,
}

#[derive(Serialize)]
struct HourRow {
    instant: usize,
    dteday: String,
    season: u8,
    yr: u8,
    mnth: u32,
    hr: u32,
    holiday: u8,
    weekday: u32,
    workingday: u8,
    weathersit: u8,
    temp: f64,
    atemp: f64,
    hum: f64,
    windspeed: f64,
    casual: u32,
    registered: u32,
    cnt: u32,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Fixed-date public holidays; movable ones are left out.
fn is_holiday(date: NaiveDate) -> bool {
    matches!((date.month(), date.day()), (1, 1) | (7, 4) | (11, 11) | (12, 25))
}

fn season(date: NaiveDate) -> u8 {
    match date.month() {
        3..=5 => 2,
        6..=8 => 3,
        9..=11 => 4,
        _ => 1,
    }
}

/// Relative share of a day's rentals per hour: commute peaks on working
/// days, a midday hump otherwise.
fn hour_weight(hour: u32, workingday: bool) -> f64 {
    let h = hour as f64;
    let bump = |center: f64, width: f64| (-(h - center).powi(2) / (2.0 * width * width)).exp();
    if workingday {
        0.05 + bump(8.0, 1.0) + 1.2 * bump(17.5, 1.5) + 0.3 * bump(12.5, 2.0)
    } else {
        0.05 + bump(14.0, 3.5)
    }
}

/// Split `total` across 24 hours proportionally to `weights`, exactly.
fn split_total(total: u32, weights: &[f64]) -> Vec<u32> {
    let sum: f64 = weights.iter().sum();
    let mut parts: Vec<u32> = weights
        .iter()
        .map(|w| (total as f64 * w / sum).floor() as u32)
        .collect();
    let assigned: u32 = parts.iter().sum();
    if let Some(peak) = weights
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, _)| i)
    {
        parts[peak] += total - assigned;
    }
    parts
}

fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    for row in rows {
        writer.serialize(row).with_context(|| format!("writing {}", path.display()))?;
    }
    writer.flush().with_context(|| format!("flushing {}", path.display()))?;
    Ok(())
}

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("dashboard"));
    std::fs::create_dir_all(&out_dir).with_context(|| format!("creating {}", out_dir.display()))?;

    let mut rng = SimpleRng::new(42);
    let first = NaiveDate::from_ymd_opt(2011, 1, 1).context("invalid start date")?;

    let mut days = Vec::new();
    let mut hours = Vec::new();

    for (i, date) in first.iter_days().take(731).enumerate() {
        let yr = (date.year() - 2011) as u8;
        let weekday = date.weekday();
        let holiday = is_holiday(date);
        let workingday = !holiday && !matches!(weekday, Weekday::Sat | Weekday::Sun);

        // Seasonal temperature curve peaking in mid-July.
        let phase = (date.ordinal() as f64 - 196.0) / 365.0 * 2.0 * std::f64::consts::PI;
        let temp = (0.5 + 0.3 * phase.cos() + rng.gauss(0.0, 0.05)).clamp(0.05, 0.95);
        let atemp = (temp * 0.95 + rng.gauss(0.0, 0.02)).clamp(0.0, 1.0);
        let hum = rng.gauss(0.63, 0.14).clamp(0.0, 1.0);
        let windspeed = rng.gauss(0.19, 0.08).clamp(0.02, 0.6);

        let roll = rng.next_f64();
        let weathersit: u8 = if roll < 0.63 {
            1
        } else if roll < 0.97 {
            2
        } else {
            3
        };

        let weather_factor = match weathersit {
            1 => 1.0,
            2 => 0.8,
            _ => 0.35,
        };
        let growth = 1.0 + 0.6 * yr as f64;
        let base = (1500.0 + 5000.0 * temp) * growth * weather_factor;
        let total = (base + rng.gauss(0.0, 300.0)).max(20.0) as u32;
        let casual_share = (if workingday { 0.12 } else { 0.35 }) + rng.gauss(0.0, 0.03);
        let casual = (total as f64 * casual_share.clamp(0.02, 0.6)) as u32;
        let registered = total - casual;

        let dteday = date.format("%Y-%m-%d").to_string();
        let weekday_no = weekday.num_days_from_sunday();

        days.push(DayRow {
            instant: i + 1,
            dteday: dteday.clone(),
            season: season(date),
            yr,
            mnth: date.month(),
            holiday: holiday as u8,
            weekday: weekday_no,
            workingday: workingday as u8,
            weathersit,
            temp,
            atemp,
            hum,
            windspeed,
            casual,
            registered,
            cnt: total,
        });

        let weights: Vec<f64> = (0..24).map(|h| hour_weight(h, workingday)).collect();
        let casual_by_hour = split_total(casual, &weights);
        let registered_by_hour = split_total(registered, &weights);

        for hr in 0..24u32 {
            let (c, r) = (casual_by_hour[hr as usize], registered_by_hour[hr as usize]);
            hours.push(HourRow {
                instant: hours.len() + 1,
                dteday: dteday.clone(),
                season: season(date),
                yr,
                mnth: date.month(),
                hr,
                holiday: holiday as u8,
                weekday: weekday_no,
                workingday: workingday as u8,
                weathersit,
                temp,
                atemp,
                hum,
                windspeed,
                casual: c,
                registered: r,
                cnt: c + r,
            });
        }
    }

    let day_path = out_dir.join("day.csv");
    let hour_path = out_dir.join("hour.csv");
    write_csv(&day_path, &days)?;
    write_csv(&hour_path, &hours)?;

    println!(
        "Wrote {} days to {} and {} hours to {}",
        days.len(),
        day_path.display(),
        hours.len(),
        hour_path.display()
    );
    Ok(())
}
