use crate::features::error::FeatureError;
use crate::features::lag::LaggedRow;
use crate::features::scale::StandardScaler;
use crate::types::season::Season;
use ndarray::{Array1, Array2};
use std::collections::BTreeSet;

/// Number of standardized numeric features per row: latitude, longitude,
/// year, month, day and the three weather lags.
pub const NUMERIC_FEATURES: usize = 8;

/// Fitted feature transform: z-score standardization of the numeric fields
/// concatenated with a one-hot encoding of the season category.
///
/// Fit once on the full row set, then applied identically to any row of the
/// same shape. The season category set is fixed at fit time (ordered by
/// season code); a season never seen during fit encodes as all zeros, which
/// cannot happen when transforming the fit set itself.
#[derive(Debug, Clone)]
pub struct FeaturePreprocessor {
    scaler: StandardScaler,
    categories: Vec<Season>,
}

impl FeaturePreprocessor {
    /// Fits scaler statistics and the observed season category set.
    pub fn fit(rows: &[LaggedRow]) -> Self {
        let numeric = numeric_matrix(rows);
        let scaler = StandardScaler::fit(&numeric);
        let categories: Vec<Season> = rows
            .iter()
            .map(|row| row.season)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        Self { scaler, categories }
    }

    /// Width of the produced feature vector.
    pub fn width(&self) -> usize {
        NUMERIC_FEATURES + self.categories.len()
    }

    /// Season categories observed at fit time, ordered by code.
    pub fn categories(&self) -> &[Season] {
        &self.categories
    }

    /// Transforms one row into its feature vector.
    pub fn transform(&self, row: &LaggedRow) -> Result<Array1<f64>, FeatureError> {
        let numeric = Array1::from(numeric_features(row).to_vec());
        let scaled = self.scaler.transform_row(numeric.view())?;

        let mut features = Vec::with_capacity(self.width());
        features.extend(scaled.iter().copied());
        for category in &self.categories {
            features.push(if row.season == *category { 1.0 } else { 0.0 });
        }
        Ok(Array1::from(features))
    }

    /// Transforms a full row set into the design matrix, row order preserved.
    pub fn transform_matrix(&self, rows: &[LaggedRow]) -> Result<Array2<f64>, FeatureError> {
        let mut matrix = Array2::zeros((rows.len(), self.width()));
        for (i, row) in rows.iter().enumerate() {
            let features = self.transform(row)?;
            matrix.row_mut(i).assign(&features);
        }
        Ok(matrix)
    }
}

/// The numeric feature fields of a row, in the documented column order.
fn numeric_features(row: &LaggedRow) -> [f64; NUMERIC_FEATURES] {
    [
        row.decomposed.latitude,
        row.decomposed.longitude,
        f64::from(row.decomposed.year),
        f64::from(row.decomposed.month),
        f64::from(row.decomposed.day),
        row.prev_precipitation,
        row.prev_temp_max,
        row.prev_temp_min,
    ]
}

fn numeric_matrix(rows: &[LaggedRow]) -> Array2<f64> {
    let mut matrix = Array2::zeros((rows.len(), NUMERIC_FEATURES));
    for (i, row) in rows.iter().enumerate() {
        let features = numeric_features(row);
        for (j, value) in features.iter().enumerate() {
            matrix[[i, j]] = *value;
        }
    }
    matrix
}
