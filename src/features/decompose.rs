use crate::features::error::FeatureError;
use crate::types::observation::RawObservation;

/// Observation with the date split into numeric calendar fields.
///
/// Row order is preserved end to end through the pipeline; it is the implicit
/// time axis the lag builder later relies on.
#[derive(Debug, Clone, PartialEq)]
pub struct DecomposedRow {
    pub station_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub precipitation: f64,
    pub temp_max: f64,
    pub temp_min: f64,
}

impl DecomposedRow {
    /// Rebuilds the `YYYY-MM-DD` string for this row.
    pub fn date_string(&self) -> String {
        format!("{}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Splits each observation's `YYYY-MM-DD` date string into year, month and
/// day fields.
///
/// The split is purely structural: the string must break on `-` into exactly
/// three integer parts. Range validation of the month happens later in the
/// season encoder, so `2020-13-02` passes here and fails there. Any
/// structurally malformed date aborts the whole run, since a silently dropped
/// row would shift every lag adjacency after it.
pub fn decompose_dates(
    observations: &[RawObservation],
) -> Result<Vec<DecomposedRow>, FeatureError> {
    observations
        .iter()
        .map(|obs| {
            let (year, month, day) = split_date(&obs.date)?;
            Ok(DecomposedRow {
                station_name: obs.station_name.clone(),
                latitude: obs.latitude,
                longitude: obs.longitude,
                year,
                month,
                day,
                precipitation: obs.precipitation,
                temp_max: obs.temp_max,
                temp_min: obs.temp_min,
            })
        })
        .collect()
}

fn split_date(date: &str) -> Result<(i32, u32, u32), FeatureError> {
    let malformed = || FeatureError::MalformedDate(date.to_string());

    let mut parts = date.split('-');
    let year = parts.next().ok_or_else(malformed)?;
    let month = parts.next().ok_or_else(malformed)?;
    let day = parts.next().ok_or_else(malformed)?;
    if parts.next().is_some() {
        return Err(malformed());
    }

    let year = year.parse::<i32>().map_err(|_| malformed())?;
    let month = month.parse::<u32>().map_err(|_| malformed())?;
    let day = day.parse::<u32>().map_err(|_| malformed())?;
    Ok((year, month, day))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observation(date: &str) -> RawObservation {
        RawObservation {
            station_name: "Seattle".to_string(),
            latitude: 47.6,
            longitude: -122.3,
            date: date.to_string(),
            precipitation: 0.5,
            temp_max: 10.0,
            temp_min: 3.0,
        }
    }

    #[test]
    fn splits_iso_date_into_fields() {
        let rows = decompose_dates(&[observation("2020-01-05")]).expect("valid date");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].year, 2020);
        assert_eq!(rows[0].month, 1);
        assert_eq!(rows[0].day, 5);
        assert_eq!(rows[0].station_name, "Seattle");
        assert_eq!(rows[0].date_string(), "2020-01-05");
    }

    #[test]
    fn preserves_row_order() {
        let rows = decompose_dates(&[
            observation("2020-01-02"),
            observation("2020-01-01"),
            observation("2020-01-03"),
        ])
        .expect("valid dates");
        let days: Vec<u32> = rows.iter().map(|r| r.day).collect();
        assert_eq!(days, vec![2, 1, 3]);
    }

    #[test]
    fn rejects_wrong_separator() {
        let err = decompose_dates(&[observation("2020/13/40")]).unwrap_err();
        assert!(matches!(err, FeatureError::MalformedDate(_)));
    }

    #[test]
    fn rejects_non_numeric_parts() {
        let err = decompose_dates(&[observation("2020-jan-05")]).unwrap_err();
        assert!(matches!(err, FeatureError::MalformedDate(_)));
    }

    #[test]
    fn rejects_extra_parts() {
        let err = decompose_dates(&[observation("2020-01-05-07")]).unwrap_err();
        assert!(matches!(err, FeatureError::MalformedDate(_)));
    }

    #[test]
    fn out_of_range_month_is_not_a_date_error() {
        // Range checks belong to the season encoder.
        let rows = decompose_dates(&[observation("2020-13-02")]).expect("structurally valid");
        assert_eq!(rows[0].month, 13);
    }
}
