use crate::features::decompose::DecomposedRow;
use crate::features::encode::SeasonedRow;
use crate::types::season::Season;

/// Seasoned row plus the previous row's weather values.
///
/// The `prev_*` fields give the regressor one step of temporal context.
#[derive(Debug, Clone, PartialEq)]
pub struct LaggedRow {
    pub decomposed: DecomposedRow,
    pub season: Season,
    pub prev_precipitation: f64,
    pub prev_temp_max: f64,
    pub prev_temp_min: f64,
}

/// Produces, for each row, the previous row's value of the selected field.
///
/// The shift is circular: row 0 receives the value of the last row. That wrap
/// mildly leaks the final record into the first and, when several stations
/// share the sequence, across station boundaries. Both are accepted
/// approximations of "previous observation" context, not defects; the row
/// order at call time defines adjacency.
pub fn lag_column<T, F>(rows: &[T], select: F) -> Vec<f64>
where
    F: Fn(&T) -> f64,
{
    let n = rows.len();
    (0..n)
        .map(|i| {
            let prev = if i == 0 { n - 1 } else { i - 1 };
            select(&rows[prev])
        })
        .collect()
}

/// Appends one lag column per weather variable, composing three independent
/// [`lag_column`] passes over the same row order.
pub fn add_weather_lags(rows: Vec<SeasonedRow>) -> Vec<LaggedRow> {
    let prev_precipitation = lag_column(&rows, |r| r.decomposed.precipitation);
    let prev_temp_max = lag_column(&rows, |r| r.decomposed.temp_max);
    let prev_temp_min = lag_column(&rows, |r| r.decomposed.temp_min);

    rows.into_iter()
        .zip(prev_precipitation)
        .zip(prev_temp_max)
        .zip(prev_temp_min)
        .map(
            |(((row, prev_precipitation), prev_temp_max), prev_temp_min)| LaggedRow {
                decomposed: row.decomposed,
                season: row.season,
                prev_precipitation,
                prev_temp_max,
                prev_temp_min,
            },
        )
        .collect()
}
