use crate::features::lag::LaggedRow;
use crate::features::preprocess::FeaturePreprocessor;
use crate::features::scale::StandardScaler;
use crate::model::error::TrainingError;
use crate::model::linear::LinearRegressor;
use crate::types::prediction::{Prediction, TrainingReport};
use bon::Builder;
use log::info;
use ndarray::{Array2, Axis};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Knobs for one training run. The two seeds make both the train/test
/// partition and the weight init reproducible across runs.
#[derive(Debug, Clone, Builder)]
pub struct TrainerConfig {
    /// Passes over the training set.
    #[builder(default = 100)]
    pub epochs: usize,
    /// Adam base learning rate.
    #[builder(default = 1e-3)]
    pub learning_rate: f64,
    /// Share of rows held out for evaluation.
    #[builder(default = 0.2)]
    pub test_fraction: f64,
    /// Seed for the train/test shuffle.
    #[builder(default = 111)]
    pub split_seed: u64,
    /// Seed for the regressor's weight init.
    #[builder(default = 42)]
    pub init_seed: u64,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        TrainerConfig::builder().build()
    }
}

/// Fitted artifacts of a run: feature transform, target scaler and the
/// regressor, kept together so single rows can be predicted without refitting.
#[derive(Debug, Clone)]
pub struct TrainedModel {
    preprocessor: FeaturePreprocessor,
    target_scaler: StandardScaler,
    regressor: LinearRegressor,
}

/// Weather values predicted for one row, in physical units.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherEstimate {
    /// Clamped to be non-negative.
    pub precipitation: f64,
    pub temp_max: f64,
    pub temp_min: f64,
}

impl TrainedModel {
    /// Predicts the weather for one engineered row, inverting the target
    /// scaling back to physical units.
    pub fn predict_row(&self, row: &LaggedRow) -> Result<WeatherEstimate, TrainingError> {
        let features = self.preprocessor.transform(row)?;
        let scaled = self.regressor.predict_one(features.view());
        let physical = self.target_scaler.inverse_row(scaled.view())?;
        Ok(WeatherEstimate {
            precipitation: physical[0].max(0.0),
            temp_max: physical[1],
            temp_min: physical[2],
        })
    }
}

/// Report plus the fitted model handle.
#[derive(Debug, Clone)]
pub struct TrainingOutcome {
    pub report: TrainingReport,
    pub model: TrainedModel,
}

/// Partitions `0..n` into (train, test) index sets with a seeded shuffle.
///
/// The test share is `ceil(n * test_fraction)`; the same `(n, fraction,
/// seed)` triple always yields the same partition.
pub fn split_indices(n: usize, test_fraction: f64, seed: u64) -> (Vec<usize>, Vec<usize>) {
    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let test_len = ((n as f64) * test_fraction).ceil() as usize;
    let test_len = test_len.min(n);
    let test = indices[..test_len].to_vec();
    let train = indices[test_len..].to_vec();
    (train, test)
}

/// Runs the full training contract over an engineered row set.
///
/// Fits the feature transform and target scaler on the whole set, splits
/// 80/20 with the seeded shuffle, fits the regressor on the training
/// partition and assembles one [`Prediction`] per held-out row, sorted by
/// `(station_name, date)`.
pub fn train(rows: &[LaggedRow], config: &TrainerConfig) -> Result<TrainingOutcome, TrainingError> {
    if rows.is_empty() {
        return Err(TrainingError::EmptyInput);
    }

    let preprocessor = FeaturePreprocessor::fit(rows);
    let features = preprocessor.transform_matrix(rows)?;

    let targets = target_matrix(rows);
    let target_scaler = StandardScaler::fit(&targets);
    let scaled_targets = target_scaler.transform(&targets)?;

    let (train_idx, test_idx) = split_indices(rows.len(), config.test_fraction, config.split_seed);
    if train_idx.is_empty() {
        return Err(TrainingError::EmptyPartition("train"));
    }
    if test_idx.is_empty() {
        return Err(TrainingError::EmptyPartition("test"));
    }

    let x_train = features.select(Axis(0), &train_idx);
    let y_train = scaled_targets.select(Axis(0), &train_idx);
    let x_test = features.select(Axis(0), &test_idx);
    let y_test = scaled_targets.select(Axis(0), &test_idx);

    info!(
        "fitting regressor on {} rows, holding out {} ({} features)",
        train_idx.len(),
        test_idx.len(),
        preprocessor.width()
    );
    let (regressor, training_loss) = LinearRegressor::fit(
        &x_train,
        &y_train,
        config.epochs,
        config.learning_rate,
        config.init_seed,
    )?;
    let test_loss = regressor.mse(&x_test, &y_test);

    let predicted = target_scaler.inverse_transform(&regressor.predict(&x_test))?;
    let actual = target_scaler.inverse_transform(&y_test)?;

    let mut predictions: Vec<Prediction> = test_idx
        .iter()
        .enumerate()
        .map(|(i, &idx)| {
            let row = &rows[idx];
            Prediction {
                station_name: row.decomposed.station_name.clone(),
                latitude: row.decomposed.latitude,
                longitude: row.decomposed.longitude,
                year: row.decomposed.year,
                month: row.decomposed.month,
                day: row.decomposed.day,
                date: row.decomposed.date_string(),
                // Precipitation cannot be physically negative; temperatures
                // are left unclamped.
                predicted_precip: predicted[[i, 0]].max(0.0),
                predicted_temp_max: predicted[[i, 1]],
                predicted_temp_min: predicted[[i, 2]],
                actual_precip: actual[[i, 0]],
                actual_temp_max: actual[[i, 1]],
                actual_temp_min: actual[[i, 2]],
            }
        })
        .collect();

    predictions.sort_by(|a, b| {
        a.station_name
            .cmp(&b.station_name)
            .then_with(|| a.date.cmp(&b.date))
    });

    info!("training mse {training_loss:.6}, test mse {test_loss:.6}");

    Ok(TrainingOutcome {
        report: TrainingReport {
            test_loss,
            training_loss,
            training_samples: train_idx.len(),
            test_samples: test_idx.len(),
            predictions,
        },
        model: TrainedModel {
            preprocessor,
            target_scaler,
            regressor,
        },
    })
}

/// Raw current-cycle targets (precipitation, temp_max, temp_min), not the
/// lagged copies.
fn target_matrix(rows: &[LaggedRow]) -> Array2<f64> {
    let mut targets = Array2::zeros((rows.len(), 3));
    for (i, row) in rows.iter().enumerate() {
        targets[[i, 0]] = row.decomposed.precipitation;
        targets[[i, 1]] = row.decomposed.temp_max;
        targets[[i, 2]] = row.decomposed.temp_min;
    }
    targets
}
