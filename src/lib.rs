mod error;
mod features;
mod ingest;
mod model;
mod pipeline;
mod types;

pub use error::ClimacastError;

pub use features::decompose::{decompose_dates, DecomposedRow};
pub use features::encode::{encode_seasons, season_for_month, SeasonedRow};
pub use features::error::FeatureError;
pub use features::lag::{add_weather_lags, lag_column, LaggedRow};
pub use features::preprocess::FeaturePreprocessor;
pub use features::scale::StandardScaler;

pub use ingest::{observations_from_dataframe, IngestError};

pub use model::assemble::group_by_station;
pub use model::error::TrainingError;
pub use model::linear::LinearRegressor;
pub use model::trainer::{
    split_indices, train, TrainedModel, TrainerConfig, TrainingOutcome, WeatherEstimate,
};

pub use pipeline::run_training;

pub use types::observation::RawObservation;
pub use types::prediction::{Prediction, TrainingReport};
pub use types::season::Season;
