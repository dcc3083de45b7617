use crate::types::observation::RawObservation;
use log::{info, warn};
use polars::prelude::*;
use thiserror::Error;

// Column names as served by the upstream data-access layer.
const COL_NAME: &str = "name";
const COL_LAT: &str = "latitude";
const COL_LON: &str = "longitude";
const COL_DATE: &str = "date";
const COL_PRCP: &str = "precip";
const COL_TMAX: &str = "temp_max";
const COL_TMIN: &str = "temp_min";

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Required column '{0}' not found in DataFrame")]
    ColumnNotFound(String, #[source] PolarsError),

    #[error("Failed to read column '{column}' as {expected}")]
    ColumnType {
        column: String,
        expected: &'static str,
        #[source]
        source: PolarsError,
    },

    #[error("Unsupported dtype {dtype} for column '{column}'")]
    UnsupportedDtype { column: String, dtype: String },
}

/// Converts a DataFrame from the data-access collaborator into typed
/// observations.
///
/// Expects the columns `name`, `latitude`, `longitude`, `date`, `precip`,
/// `temp_max` and `temp_min`. The date column may be a `YYYY-MM-DD` string
/// or a native date; numeric columns are cast to `f64`. Rows with any null
/// field are skipped with a warning, so the pipeline only ever sees dense
/// records.
pub fn observations_from_dataframe(df: &DataFrame) -> Result<Vec<RawObservation>, IngestError> {
    let names = string_column(df, COL_NAME)?;
    let latitudes = float_column(df, COL_LAT)?;
    let longitudes = float_column(df, COL_LON)?;
    let dates = date_strings(df)?;
    let precipitation = float_column(df, COL_PRCP)?;
    let temp_max = float_column(df, COL_TMAX)?;
    let temp_min = float_column(df, COL_TMIN)?;

    let mut observations = Vec::with_capacity(df.height());
    let mut skipped = 0_usize;
    for i in 0..df.height() {
        match (
            &names[i],
            latitudes[i],
            longitudes[i],
            &dates[i],
            precipitation[i],
            temp_max[i],
            temp_min[i],
        ) {
            (
                Some(name),
                Some(latitude),
                Some(longitude),
                Some(date),
                Some(precipitation),
                Some(temp_max),
                Some(temp_min),
            ) => observations.push(RawObservation {
                station_name: name.clone(),
                latitude,
                longitude,
                date: date.clone(),
                precipitation,
                temp_max,
                temp_min,
            }),
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        warn!("skipped {skipped} rows with null fields during ingest");
    }
    info!(
        "ingested {} observations from a {}x{} DataFrame",
        observations.len(),
        df.height(),
        df.width()
    );
    Ok(observations)
}

fn get_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column, IngestError> {
    df.column(name)
        .map_err(|e| IngestError::ColumnNotFound(name.to_string(), e))
}

fn float_column(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>, IngestError> {
    let column = get_column(df, name)?;
    let casted = column
        .cast(&DataType::Float64)
        .map_err(|e| IngestError::ColumnType {
            column: name.to_string(),
            expected: "f64",
            source: e,
        })?;
    let ca = casted.f64().map_err(|e| IngestError::ColumnType {
        column: name.to_string(),
        expected: "f64",
        source: e,
    })?;
    Ok(ca.into_iter().collect())
}

fn string_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>, IngestError> {
    let column = get_column(df, name)?;
    let ca = column.str().map_err(|e| IngestError::ColumnType {
        column: name.to_string(),
        expected: "str",
        source: e,
    })?;
    Ok(ca.into_iter().map(|v| v.map(str::to_string)).collect())
}

fn date_strings(df: &DataFrame) -> Result<Vec<Option<String>>, IngestError> {
    let column = get_column(df, COL_DATE)?;
    match column.dtype() {
        DataType::String => string_column(df, COL_DATE),
        DataType::Date => {
            let ca = column.date().map_err(|e| IngestError::ColumnType {
                column: COL_DATE.to_string(),
                expected: "date",
                source: e,
            })?;
            Ok(ca
                .as_date_iter()
                .map(|d| d.map(|d| d.format("%Y-%m-%d").to_string()))
                .collect())
        }
        other => Err(IngestError::UnsupportedDtype {
            column: COL_DATE.to_string(),
            dtype: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    #[test]
    fn converts_string_dated_frame() {
        let df = df!(
            COL_NAME => ["Seattle", "Seattle"],
            COL_LAT => [47.6, 47.6],
            COL_LON => [-122.3, -122.3],
            COL_DATE => ["2020-01-01", "2020-01-02"],
            COL_PRCP => [0.0, 1.4],
            COL_TMAX => [8.0, 7.5],
            COL_TMIN => [2.0, 1.0]
        )
        .expect("valid frame");

        let observations = observations_from_dataframe(&df).expect("ingest");
        assert_eq!(observations.len(), 2);
        assert_eq!(observations[0].station_name, "Seattle");
        assert_eq!(observations[1].date, "2020-01-02");
        assert_eq!(observations[1].precipitation, 1.4);
    }

    #[test]
    fn integer_weather_columns_are_cast() {
        let df = df!(
            COL_NAME => ["A"],
            COL_LAT => [1.0],
            COL_LON => [2.0],
            COL_DATE => ["2020-06-15"],
            COL_PRCP => [3_i64],
            COL_TMAX => [20_i64],
            COL_TMIN => [10_i64]
        )
        .expect("valid frame");

        let observations = observations_from_dataframe(&df).expect("ingest");
        assert_eq!(observations[0].precipitation, 3.0);
        assert_eq!(observations[0].temp_max, 20.0);
    }

    #[test]
    fn null_rows_are_skipped() {
        let df = df!(
            COL_NAME => ["A", "A"],
            COL_LAT => [1.0, 1.0],
            COL_LON => [2.0, 2.0],
            COL_DATE => ["2020-06-15", "2020-06-16"],
            COL_PRCP => [Some(0.5), None],
            COL_TMAX => [20.0, 21.0],
            COL_TMIN => [10.0, 11.0]
        )
        .expect("valid frame");

        let observations = observations_from_dataframe(&df).expect("ingest");
        assert_eq!(observations.len(), 1);
        assert_eq!(observations[0].date, "2020-06-15");
    }

    #[test]
    fn missing_column_is_reported() {
        let df = df!(
            COL_NAME => ["A"],
            COL_LAT => [1.0]
        )
        .expect("valid frame");

        let err = observations_from_dataframe(&df).unwrap_err();
        assert!(matches!(err, IngestError::ColumnNotFound(column, _) if column == COL_LON));
    }
}
