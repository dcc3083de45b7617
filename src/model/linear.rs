use crate::model::error::TrainingError;
use log::debug;
use ndarray::{Array, Array1, Array2, ArrayView1, Axis, Dimension, Zip};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const BETA1: f64 = 0.9;
const BETA2: f64 = 0.999;
const EPSILON: f64 = 1e-7;

/// Single-layer multi-output linear regressor fitted by full-batch Adam
/// gradient descent on the mean-squared error.
///
/// Weight init is Glorot-uniform from an injected seed, so a fit is fully
/// reproducible from (data, epochs, learning rate, seed).
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegressor {
    weights: Array2<f64>,
    bias: Array1<f64>,
}

impl LinearRegressor {
    /// Fits the regressor and returns it with the final-epoch training MSE.
    pub fn fit(
        x: &Array2<f64>,
        y: &Array2<f64>,
        epochs: usize,
        learning_rate: f64,
        seed: u64,
    ) -> Result<(Self, f64), TrainingError> {
        let samples = x.nrows();
        let features = x.ncols();
        let outputs = y.ncols();
        if samples == 0 || features == 0 || outputs == 0 || y.nrows() != samples {
            return Err(TrainingError::EmptyInput);
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let limit = (6.0 / (features + outputs) as f64).sqrt();
        let mut weights =
            Array2::from_shape_simple_fn((features, outputs), || rng.gen_range(-limit..limit));
        let mut bias = Array1::zeros(outputs);

        let mut m_weights = Array2::zeros((features, outputs));
        let mut v_weights = Array2::zeros((features, outputs));
        let mut m_bias = Array1::zeros(outputs);
        let mut v_bias = Array1::zeros(outputs);

        let scale = 2.0 / (samples * outputs) as f64;
        let mut last_loss = f64::NAN;

        for epoch in 1..=epochs {
            let residual = x.dot(&weights) + &bias - y;
            let loss = residual.mapv(|r| r * r).mean().unwrap_or(f64::NAN);
            if !loss.is_finite() {
                return Err(TrainingError::NonFiniteLoss { epoch });
            }
            last_loss = loss;

            let grad_weights = x.t().dot(&residual) * scale;
            let grad_bias = residual.sum_axis(Axis(0)) * scale;

            // Bias-corrected step size, folded into the learning rate.
            let step = learning_rate * (1.0 - BETA2.powi(epoch as i32)).sqrt()
                / (1.0 - BETA1.powi(epoch as i32));
            adam_update(&mut weights, &mut m_weights, &mut v_weights, &grad_weights, step);
            adam_update(&mut bias, &mut m_bias, &mut v_bias, &grad_bias, step);

            if epoch % 20 == 0 || epoch == epochs {
                debug!("epoch {epoch}/{epochs}: training mse {loss:.6}");
            }
        }

        Ok((Self { weights, bias }, last_loss))
    }

    /// Predicts one output row per input row.
    pub fn predict(&self, x: &Array2<f64>) -> Array2<f64> {
        x.dot(&self.weights) + &self.bias
    }

    /// Predicts the outputs for a single feature vector.
    pub fn predict_one(&self, x: ArrayView1<'_, f64>) -> Array1<f64> {
        self.weights.t().dot(&x) + &self.bias
    }

    /// Mean-squared error of the model on the given set.
    pub fn mse(&self, x: &Array2<f64>, y: &Array2<f64>) -> f64 {
        let residual = self.predict(x) - y;
        residual.mapv(|r| r * r).mean().unwrap_or(f64::NAN)
    }
}

fn adam_update<D: Dimension>(
    param: &mut Array<f64, D>,
    m: &mut Array<f64, D>,
    v: &mut Array<f64, D>,
    grad: &Array<f64, D>,
    step: f64,
) {
    Zip::from(param).and(m).and(v).and(grad).for_each(|p, m, v, &g| {
        *m = BETA1 * *m + (1.0 - BETA1) * g;
        *v = BETA2 * *v + (1.0 - BETA2) * g * g;
        *p -= step * *m / (v.sqrt() + EPSILON);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    fn synthetic() -> (Array2<f64>, Array2<f64>) {
        // y0 = x0 + x1, y1 = x0 - x1 over a small standardized-ish grid.
        let mut x = Array2::zeros((40, 2));
        let mut y = Array2::zeros((40, 2));
        for i in 0..40 {
            let a = (i as f64 / 20.0) - 1.0;
            let b = ((i * 7 % 40) as f64 / 20.0) - 1.0;
            x[[i, 0]] = a;
            x[[i, 1]] = b;
            y[[i, 0]] = a + b;
            y[[i, 1]] = a - b;
        }
        (x, y)
    }

    #[test]
    fn fit_is_deterministic_for_a_seed() {
        let (x, y) = synthetic();
        let (first, first_loss) = LinearRegressor::fit(&x, &y, 100, 1e-3, 42).expect("fit");
        let (second, second_loss) = LinearRegressor::fit(&x, &y, 100, 1e-3, 42).expect("fit");
        assert_eq!(first, second);
        assert_eq!(first_loss, second_loss);
    }

    #[test]
    fn more_epochs_reduce_training_loss() {
        let (x, y) = synthetic();
        let (_, short_loss) = LinearRegressor::fit(&x, &y, 1, 1e-2, 42).expect("fit");
        let (_, long_loss) = LinearRegressor::fit(&x, &y, 500, 1e-2, 42).expect("fit");
        assert!(long_loss < short_loss, "{long_loss} >= {short_loss}");
        assert!(long_loss.is_finite());
    }

    #[test]
    fn predict_one_matches_batch_predict() {
        let (x, y) = synthetic();
        let (model, _) = LinearRegressor::fit(&x, &y, 50, 1e-2, 7).expect("fit");
        let batch = model.predict(&x);
        let single = model.predict_one(x.row(3));
        for output in 0..2 {
            assert_relative_eq!(single[output], batch[[3, output]], epsilon = 1e-12);
        }
    }

    #[test]
    fn empty_input_is_rejected() {
        let x = Array2::zeros((0, 3));
        let y = Array2::zeros((0, 2));
        assert!(matches!(
            LinearRegressor::fit(&x, &y, 10, 1e-3, 0),
            Err(TrainingError::EmptyInput)
        ));
    }

    #[test]
    fn mismatched_sample_counts_are_rejected() {
        let x = array![[1.0, 2.0], [3.0, 4.0]];
        let y = array![[1.0]];
        assert!(matches!(
            LinearRegressor::fit(&x, &y, 10, 1e-3, 0),
            Err(TrainingError::EmptyInput)
        ));
    }
}
