use std::fs::File;
use std::path::Path;

use arrow::array::{Array, ArrayRef, AsArray, Float64Array, Int64Array, StringArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Float64Type, Int64Type};
use arrow::record_batch::RecordBatch;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;
use serde_json::{Map as JsonMap, Value as JsonValue};

use super::error::DataSourceError;
use super::model::{BikeShareData, DailyRecord, HourlyRecord, LoadReport, WeatherCode};

/// Columns every source must carry.
pub const DAILY_COLUMNS: &[&str] = &[
    "dteday",
    "cnt",
    "casual",
    "registered",
    "holiday",
    "workingday",
    "weathersit",
    "hum",
    "windspeed",
    "temp",
];

/// The hourly source additionally carries the hour of day.
pub const HOURLY_COLUMNS: &[&str] = &[
    "dteday",
    "hr",
    "cnt",
    "casual",
    "registered",
    "holiday",
    "workingday",
    "weathersit",
    "hum",
    "windspeed",
    "temp",
];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load both rental datasets. Each source is dispatched by extension:
///
/// * `.csv`           – header row, one record per line (the native format)
/// * `.json`          – `[{ "dteday": "2011-01-01", "cnt": 985, ... }, ...]`
/// * `.parquet`/`.pq` – one column per field; `dteday` as string or date
///
/// Any failure is fatal for the session.
pub fn load(daily_path: &Path, hourly_path: &Path) -> Result<BikeShareData, DataSourceError> {
    let (daily, daily_report) = load_daily(daily_path)?;
    let (hourly, hourly_report) = load_hourly(hourly_path)?;

    log::info!(
        "Loaded {} daily rows from {} and {} hourly rows from {}",
        daily.len(),
        daily_path.display(),
        hourly.len(),
        hourly_path.display()
    );

    Ok(BikeShareData::new(daily, hourly, daily_report, hourly_report))
}

pub fn load_daily(path: &Path) -> Result<(Vec<DailyRecord>, LoadReport), DataSourceError> {
    let (rows, report) = read_rows(path, DAILY_COLUMNS)?;
    let records = rows
        .into_iter()
        .enumerate()
        .map(|(row, raw)| raw.into_daily(&RowContext { path, row }))
        .collect::<Result<Vec<_>, _>>()?;
    Ok((records, report))
}

pub fn load_hourly(path: &Path) -> Result<(Vec<HourlyRecord>, LoadReport), DataSourceError> {
    let (rows, report) = read_rows(path, HOURLY_COLUMNS)?;
    let records = rows
        .into_iter()
        .enumerate()
        .map(|(row, raw)| raw.into_hourly(&RowContext { path, row }))
        .collect::<Result<Vec<_>, _>>()?;
    Ok((records, report))
}

fn read_rows(path: &Path, required: &[&str]) -> Result<(Vec<RawRow>, LoadReport), DataSourceError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => read_csv(path, required),
        "json" => read_json(path, required),
        "parquet" | "pq" => read_parquet(path, required),
        _ => Err(DataSourceError::UnsupportedFormat(path.to_path_buf())),
    }
}

// ---------------------------------------------------------------------------
// Raw row → typed record
// ---------------------------------------------------------------------------

/// One source row before validation. Column names follow the source files.
#[derive(Debug, Deserialize)]
struct RawRow {
    dteday: String,
    #[serde(default)]
    hr: Option<i64>,
    cnt: i64,
    casual: i64,
    registered: i64,
    holiday: i64,
    workingday: i64,
    weathersit: i64,
    hum: f64,
    windspeed: f64,
    temp: f64,
}

struct RowContext<'a> {
    path: &'a Path,
    row: usize,
}

impl RowContext<'_> {
    fn invalid(&self, column: &str, message: impl Into<String>) -> DataSourceError {
        DataSourceError::InvalidValue {
            path: self.path.to_path_buf(),
            row: self.row,
            column: column.to_string(),
            message: message.into(),
        }
    }

    fn count(&self, column: &str, value: i64) -> Result<u32, DataSourceError> {
        u32::try_from(value).map_err(|_| {
            self.invalid(column, format!("expected a non-negative count, got {value}"))
        })
    }

    fn flag(&self, column: &str, value: i64) -> Result<bool, DataSourceError> {
        match value {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(self.invalid(column, format!("expected 0 or 1, got {other}"))),
        }
    }

    fn weather(&self, value: i64) -> Result<WeatherCode, DataSourceError> {
        u8::try_from(value)
            .map(WeatherCode)
            .map_err(|_| self.invalid("weathersit", format!("weather code {value} out of range")))
    }

    fn date(&self, value: &str) -> Result<NaiveDate, DataSourceError> {
        parse_date(value).ok_or_else(|| self.invalid("dteday", format!("'{value}' is not a date")))
    }
}

/// Accepts plain ISO dates as well as the datetime forms produced by
/// Arrow casts (`2011-01-01T00:00:00`) and spreadsheet exports.
fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
}

impl RawRow {
    fn into_daily(self, ctx: &RowContext<'_>) -> Result<DailyRecord, DataSourceError> {
        Ok(DailyRecord {
            date: ctx.date(&self.dteday)?,
            total: ctx.count("cnt", self.cnt)?,
            casual: ctx.count("casual", self.casual)?,
            registered: ctx.count("registered", self.registered)?,
            holiday: ctx.flag("holiday", self.holiday)?,
            workingday: ctx.flag("workingday", self.workingday)?,
            weather: ctx.weather(self.weathersit)?,
            humidity: self.hum,
            windspeed: self.windspeed,
            temperature: self.temp,
        })
    }

    fn into_hourly(self, ctx: &RowContext<'_>) -> Result<HourlyRecord, DataSourceError> {
        let hour = match self.hr {
            Some(h @ 0..=23) => h as u8,
            Some(other) => return Err(ctx.invalid("hr", format!("hour {other} outside 0-23"))),
            None => return Err(ctx.invalid("hr", "missing value")),
        };
        let day = self.into_daily(ctx)?;
        Ok(HourlyRecord {
            date: day.date,
            hour,
            total: day.total,
            casual: day.casual,
            registered: day.registered,
            holiday: day.holiday,
            workingday: day.workingday,
            weather: day.weather,
            humidity: day.humidity,
            windspeed: day.windspeed,
            temperature: day.temperature,
        })
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, extra columns ignored.
fn read_csv(path: &Path, required: &[&str]) -> Result<(Vec<RawRow>, LoadReport), DataSourceError> {
    let csv_err = |source| DataSourceError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(|e| DataSourceError::Io(path.to_path_buf(), e))?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(file);
    let headers = reader.headers().map_err(csv_err)?.clone();

    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(DataSourceError::MissingColumn {
                path: path.to_path_buf(),
                column: column.to_string(),
            });
        }
    }

    let mut rows = Vec::new();
    let mut report = LoadReport::default();

    for result in reader.records() {
        let record = result.map_err(csv_err)?;
        report.missing_values += record.iter().filter(|f| f.trim().is_empty()).count();
        rows.push(record.deserialize::<RawRow>(Some(&headers)).map_err(csv_err)?);
    }
    report.rows = rows.len();

    Ok((rows, report))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON as written by `df.to_json(orient='records')`.
/// `dteday` may be a date string or epoch milliseconds, the Pandas default
/// for datetime columns.
fn read_json(path: &Path, required: &[&str]) -> Result<(Vec<RawRow>, LoadReport), DataSourceError> {
    let json_err = |source| DataSourceError::Json {
        path: path.to_path_buf(),
        source,
    };

    let text =
        std::fs::read_to_string(path).map_err(|e| DataSourceError::Io(path.to_path_buf(), e))?;
    let records: Vec<JsonMap<String, JsonValue>> = serde_json::from_str(&text).map_err(json_err)?;

    let mut rows = Vec::with_capacity(records.len());
    let mut report = LoadReport::default();

    for mut obj in records {
        if let Some(column) = required.iter().find(|c| !obj.contains_key(**c)) {
            return Err(DataSourceError::MissingColumn {
                path: path.to_path_buf(),
                column: column.to_string(),
            });
        }
        report.missing_values += obj.values().filter(|v| v.is_null()).count();
        if let Some(date) = obj.get("dteday").and_then(epoch_millis_date) {
            obj.insert("dteday".to_string(), JsonValue::String(date.to_string()));
        }
        rows.push(serde_json::from_value(JsonValue::Object(obj)).map_err(json_err)?);
    }
    report.rows = rows.len();

    Ok((rows, report))
}

fn epoch_millis_date(value: &JsonValue) -> Option<NaiveDate> {
    let millis = value.as_i64()?;
    DateTime::from_timestamp_millis(millis).map(|dt| dt.date_naive())
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Works with files written by both Pandas (`df.to_parquet()`) and Polars.
/// Integer and float columns of any width are widened through Arrow casts.
fn read_parquet(
    path: &Path,
    required: &[&str],
) -> Result<(Vec<RawRow>, LoadReport), DataSourceError> {
    let parquet_err = |source| DataSourceError::Parquet {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(|e| DataSourceError::Io(path.to_path_buf(), e))?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file).map_err(parquet_err)?;

    for column in required {
        if builder.schema().index_of(column).is_err() {
            return Err(DataSourceError::MissingColumn {
                path: path.to_path_buf(),
                column: column.to_string(),
            });
        }
    }

    let reader = builder.build().map_err(parquet_err)?;
    let mut rows = Vec::new();
    let mut report = LoadReport::default();

    for batch_result in reader {
        let batch = batch_result.map_err(|source| DataSourceError::Arrow {
            path: path.to_path_buf(),
            source,
        })?;
        report.missing_values += batch.columns().iter().map(|c| c.null_count()).sum::<usize>();
        read_batch(path, &batch, rows.len(), &mut rows)?;
    }
    report.rows = rows.len();

    Ok((rows, report))
}

fn read_batch(
    path: &Path,
    batch: &RecordBatch,
    row_offset: usize,
    rows: &mut Vec<RawRow>,
) -> Result<(), DataSourceError> {
    let columns = BatchColumns { path, batch };

    let dteday = columns.strings("dteday")?;
    let hr = batch
        .column_by_name("hr")
        .map(|_| columns.ints("hr"))
        .transpose()?;
    let cnt = columns.ints("cnt")?;
    let casual = columns.ints("casual")?;
    let registered = columns.ints("registered")?;
    let holiday = columns.ints("holiday")?;
    let workingday = columns.ints("workingday")?;
    let weathersit = columns.ints("weathersit")?;
    let hum = columns.floats("hum")?;
    let windspeed = columns.floats("windspeed")?;
    let temp = columns.floats("temp")?;

    for row in 0..batch.num_rows() {
        let ctx = RowContext {
            path,
            row: row_offset + row,
        };
        let int = |array: &Int64Array, column: &str| {
            non_null(array, row, column, &ctx).map(|_| array.value(row))
        };
        let float = |array: &Float64Array, column: &str| {
            non_null(array, row, column, &ctx).map(|_| array.value(row))
        };

        non_null(&dteday, row, "dteday", &ctx)?;
        rows.push(RawRow {
            dteday: dteday.value(row).to_string(),
            hr: match &hr {
                Some(array) if array.is_valid(row) => Some(array.value(row)),
                _ => None,
            },
            cnt: int(&cnt, "cnt")?,
            casual: int(&casual, "casual")?,
            registered: int(&registered, "registered")?,
            holiday: int(&holiday, "holiday")?,
            workingday: int(&workingday, "workingday")?,
            weathersit: int(&weathersit, "weathersit")?,
            hum: float(&hum, "hum")?,
            windspeed: float(&windspeed, "windspeed")?,
            temp: float(&temp, "temp")?,
        });
    }
    Ok(())
}

fn non_null(
    array: &dyn Array,
    row: usize,
    column: &str,
    ctx: &RowContext<'_>,
) -> Result<(), DataSourceError> {
    if array.is_null(row) {
        Err(ctx.invalid(column, "missing value"))
    } else {
        Ok(())
    }
}

// -- Parquet / Arrow helpers --

struct BatchColumns<'a> {
    path: &'a Path,
    batch: &'a RecordBatch,
}

impl BatchColumns<'_> {
    fn column(&self, name: &str, to: &DataType) -> Result<ArrayRef, DataSourceError> {
        let column = self
            .batch
            .column_by_name(name)
            .ok_or_else(|| DataSourceError::MissingColumn {
                path: self.path.to_path_buf(),
                column: name.to_string(),
            })?;
        cast(column, to).map_err(|source| DataSourceError::Arrow {
            path: self.path.to_path_buf(),
            source,
        })
    }

    /// Dates may be stored as text, `Date32` or timestamps; all cast to text.
    fn strings(&self, name: &str) -> Result<StringArray, DataSourceError> {
        Ok(self.column(name, &DataType::Utf8)?.as_string::<i32>().clone())
    }

    fn ints(&self, name: &str) -> Result<Int64Array, DataSourceError> {
        Ok(self.column(name, &DataType::Int64)?.as_primitive::<Int64Type>().clone())
    }

    fn floats(&self, name: &str) -> Result<Float64Array, DataSourceError> {
        Ok(self.column(name, &DataType::Float64)?.as_primitive::<Float64Type>().clone())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;
    use std::sync::Arc;

    use arrow::array::{Date32Array, Int32Array};
    use arrow::datatypes::{Field, Schema};
    use parquet::arrow::ArrowWriter;

    use super::*;

    const DAY_HEADER: &str = concat!(
        "instant,dteday,season,yr,mnth,holiday,weekday,workingday,weathersit,",
        "temp,atemp,hum,windspeed,casual,registered,cnt"
    );

    fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    fn day_csv() -> String {
        format!(
            "{DAY_HEADER}\n\
             1,2011-01-01,1,0,1,0,6,0,2,0.344167,0.363625,0.805833,0.160446,331,654,985\n\
             2,2011-01-02,1,0,1,0,0,0,2,0.363478,,0.696087,0.248539,131,670,801\n"
        )
    }

    fn hour_csv() -> String {
        "instant,dteday,season,yr,mnth,hr,holiday,weekday,workingday,weathersit,\
         temp,atemp,hum,windspeed,casual,registered,cnt\n\
         1,2011-01-01,1,0,1,0,0,6,0,1,0.24,0.2879,0.81,0,3,13,16\n\
         2,2011-01-01,1,0,1,1,0,6,0,1,0.22,0.2727,0.8,0,8,32,40\n"
            .to_string()
    }

    #[test]
    fn loads_csv_sources() {
        let dir = tempfile::tempdir().unwrap();
        let day = write_file(&dir, "day.csv", &day_csv());
        let hour = write_file(&dir, "hour.csv", &hour_csv());

        let data = load(&day, &hour).unwrap();
        assert_eq!(data.daily.len(), 2);
        assert_eq!(data.hourly.len(), 2);

        let first = &data.daily[0];
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2011, 1, 1).unwrap());
        assert_eq!(first.total, 985);
        assert_eq!(first.casual, 331);
        assert_eq!(first.registered, 654);
        assert!(!first.holiday);
        assert!(!first.workingday);
        assert_eq!(first.weather, WeatherCode(2));
        assert_eq!(first.humidity, 0.805833);

        assert_eq!(data.hourly[1].hour, 1);
        assert_eq!(data.hourly[1].total, 40);

        // The blank `atemp` cell is counted but not fatal.
        assert_eq!(data.daily_report.missing_values, 1);
        assert_eq!(data.hourly_report.missing_values, 0);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_daily(&dir.path().join("day.csv")).unwrap_err();
        assert!(matches!(err, DataSourceError::Io(..)));
    }

    #[test]
    fn csv_headers_are_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let csv = day_csv().replace(",cnt\n", ", cnt \n").replace("dteday,", " dteday,");
        let path = write_file(&dir, "day.csv", &csv);

        let (records, _) = load_daily(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].total, 801);
    }

    #[test]
    fn missing_column_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "day.csv", "dteday,cnt\n2011-01-01,5\n");
        match load_daily(&path).unwrap_err() {
            DataSourceError::MissingColumn { column, .. } => assert_eq!(column, "casual"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn hourly_source_requires_hour_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "hour.csv", &day_csv());
        match load_hourly(&path).unwrap_err() {
            DataSourceError::MissingColumn { column, .. } => assert_eq!(column, "hr"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_bad_flag() {
        let dir = tempfile::tempdir().unwrap();
        let csv = format!("{DAY_HEADER}\n1,2011-01-01,1,0,1,2,6,0,2,0.3,0.3,0.8,0.1,1,2,3\n");
        let path = write_file(&dir, "day.csv", &csv);
        match load_daily(&path).unwrap_err() {
            DataSourceError::InvalidValue { column, row, .. } => {
                assert_eq!(column, "holiday");
                assert_eq!(row, 0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_bad_date_and_negative_count() {
        let dir = tempfile::tempdir().unwrap();
        let csv = format!("{DAY_HEADER}\n1,01/01/2011,1,0,1,0,6,0,2,0.3,0.3,0.8,0.1,1,2,3\n");
        let path = write_file(&dir, "day.csv", &csv);
        assert!(matches!(
            load_daily(&path).unwrap_err(),
            DataSourceError::InvalidValue { ref column, .. } if column == "dteday"
        ));

        let csv = format!("{DAY_HEADER}\n1,2011-01-01,1,0,1,0,6,0,2,0.3,0.3,0.8,0.1,-1,2,3\n");
        let path = write_file(&dir, "day.csv", &csv);
        assert!(matches!(
            load_daily(&path).unwrap_err(),
            DataSourceError::InvalidValue { ref column, .. } if column == "casual"
        ));
    }

    #[test]
    fn empty_required_cell_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let csv = format!("{DAY_HEADER}\n1,2011-01-01,1,0,1,0,6,0,2,0.3,0.3,0.8,0.1,1,2,\n");
        let path = write_file(&dir, "day.csv", &csv);
        assert!(matches!(load_daily(&path).unwrap_err(), DataSourceError::Csv { .. }));
    }

    #[test]
    fn unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "day.xlsx", "");
        assert!(matches!(
            load_daily(&path).unwrap_err(),
            DataSourceError::UnsupportedFormat(_)
        ));
    }

    #[test]
    fn loads_json_records() {
        let dir = tempfile::tempdir().unwrap();
        let json = r#"[
            {"dteday": "2011-01-03", "cnt": 1349, "casual": 120, "registered": 1229,
             "holiday": 0, "workingday": 1, "weathersit": 1,
             "hum": 0.437273, "windspeed": 0.248309, "temp": 0.196364, "atemp": null}
        ]"#;
        let path = write_file(&dir, "day.json", json);

        let (records, report) = load_daily(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].workingday);
        assert_eq!(records[0].total, 1349);
        assert_eq!(report.missing_values, 1);
    }

    #[test]
    fn json_accepts_epoch_millis_dates() {
        let dir = tempfile::tempdir().unwrap();
        // 1293840000000 ms is 2011-01-01T00:00:00Z.
        let json = r#"[
            {"dteday": 1293840000000, "cnt": 985, "casual": 331, "registered": 654,
             "holiday": 0, "workingday": 0, "weathersit": 2,
             "hum": 0.805833, "windspeed": 0.160446, "temp": 0.344167}
        ]"#;
        let path = write_file(&dir, "day.json", json);

        let (records, _) = load_daily(&path).unwrap();
        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2011, 1, 1).unwrap());
        assert_eq!(records[0].total, 985);
    }

    #[test]
    fn json_missing_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "day.json", r#"[{"dteday": "2011-01-03"}]"#);
        assert!(matches!(
            load_daily(&path).unwrap_err(),
            DataSourceError::MissingColumn { .. }
        ));
    }

    #[test]
    fn loads_parquet_with_date32_and_narrow_ints() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("day.parquet");

        let int_field = |name: &str| Field::new(name, DataType::Int32, false);
        let float_field = |name: &str| Field::new(name, DataType::Float64, false);
        let schema = Arc::new(Schema::new(vec![
            Field::new("dteday", DataType::Date32, false),
            int_field("cnt"),
            int_field("casual"),
            int_field("registered"),
            int_field("holiday"),
            int_field("workingday"),
            int_field("weathersit"),
            float_field("hum"),
            float_field("windspeed"),
            float_field("temp"),
        ]));

        // 14975 days after the epoch is 2011-01-01.
        let ints = |v: Vec<i32>| Arc::new(Int32Array::from(v)) as ArrayRef;
        let floats = |v: Vec<f64>| Arc::new(Float64Array::from(v)) as ArrayRef;
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(Date32Array::from(vec![14975, 14976])) as ArrayRef,
                ints(vec![985, 801]),
                ints(vec![331, 131]),
                ints(vec![654, 670]),
                ints(vec![0, 0]),
                ints(vec![0, 0]),
                ints(vec![2, 3]),
                floats(vec![0.8, 0.7]),
                floats(vec![0.16, 0.25]),
                floats(vec![0.34, 0.36]),
            ],
        )
        .unwrap();

        let file = File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let (records, report) = load_daily(&path).unwrap();
        assert_eq!(report.rows, 2);
        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2011, 1, 1).unwrap());
        assert_eq!(records[1].date, NaiveDate::from_ymd_opt(2011, 1, 2).unwrap());
        assert_eq!(records[1].weather, WeatherCode::RAIN_SNOW);
        assert_eq!(records[0].total, 985);
    }

    #[test]
    fn parses_datetime_forms() {
        let expected = NaiveDate::from_ymd_opt(2012, 12, 31);
        assert_eq!(parse_date("2012-12-31"), expected);
        assert_eq!(parse_date("2012-12-31T00:00:00"), expected);
        assert_eq!(parse_date(" 2012-12-31 00:00:00 "), expected);
        assert_eq!(parse_date("31/12/2012"), None);
    }
}
