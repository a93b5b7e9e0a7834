use std::path::{Path, PathBuf};

use clap::Parser;

/// Where the dashboard reads its two rental sources from.
#[derive(Debug, Clone, Parser)]
#[command(name = "bike-share-dashboard")]
#[command(about = "Interactive dashboard for daily and hourly bike rental data", long_about = None)]
pub struct DashboardConfig {
    /// Directory containing the daily and hourly sources
    #[arg(short, long, env = "BIKE_DASHBOARD_DATA_DIR", default_value = "dashboard")]
    pub data_dir: PathBuf,

    /// File name of the daily source (csv, json or parquet)
    #[arg(long, default_value = "day.csv")]
    pub daily_file: String,

    /// File name of the hourly source (csv, json or parquet)
    #[arg(long, default_value = "hour.csv")]
    pub hourly_file: String,
}

impl DashboardConfig {
    pub fn daily_path(&self) -> PathBuf {
        self.data_dir.join(&self.daily_file)
    }

    pub fn hourly_path(&self) -> PathBuf {
        self.data_dir.join(&self.hourly_file)
    }

    /// Same file names, different directory (used by "Open data folder…").
    pub fn with_data_dir(&self, dir: &Path) -> Self {
        Self {
            data_dir: dir.to_path_buf(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_dashboard_folder() {
        let config = DashboardConfig::try_parse_from(["bike-share-dashboard"]).unwrap();
        assert_eq!(config.daily_file, "day.csv");
        assert_eq!(config.hourly_file, "hour.csv");
        // The directory default only applies when the environment leaves it unset.
        if std::env::var_os("BIKE_DASHBOARD_DATA_DIR").is_none() {
            assert_eq!(config.data_dir, PathBuf::from("dashboard"));
            assert_eq!(config.daily_path(), PathBuf::from("dashboard/day.csv"));
            assert_eq!(config.hourly_path(), PathBuf::from("dashboard/hour.csv"));
        }
    }

    #[test]
    fn paths_join_data_dir_and_file_names() {
        let args = ["bike-share-dashboard", "--data-dir", "data"];
        let config = DashboardConfig::try_parse_from(args).unwrap();
        assert_eq!(config.daily_path(), PathBuf::from("data/day.csv"));
        assert_eq!(config.hourly_path(), PathBuf::from("data/hour.csv"));
    }

    #[test]
    fn custom_file_names_survive_folder_change() {
        let config = DashboardConfig::try_parse_from([
            "bike-share-dashboard",
            "-d",
            "data",
            "--daily-file",
            "day.parquet",
            "--hourly-file",
            "hour.json",
        ])
        .unwrap();
        let moved = config.with_data_dir(Path::new("other"));
        assert_eq!(moved.daily_path(), PathBuf::from("other/day.parquet"));
        assert_eq!(moved.hourly_path(), PathBuf::from("other/hour.json"));
    }
}
