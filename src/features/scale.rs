use crate::features::error::FeatureError;
use ndarray::{Array1, Array2, ArrayView1, Axis};

/// Z-score scaler: per-column mean and standard deviation captured at fit
/// time, applied identically to every later transform.
///
/// Standard deviation is the population estimate (ddof 0). Columns with zero
/// variance scale by 1.0 so constant features pass through centered instead
/// of dividing by zero.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    mean: Array1<f64>,
    std: Array1<f64>,
}

impl StandardScaler {
    /// Captures column statistics from the fit set. The caller is expected to
    /// hand in at least one row; an empty matrix fits a zero-width scaler.
    pub fn fit(data: &Array2<f64>) -> Self {
        let columns = data.ncols();
        let mean = data
            .mean_axis(Axis(0))
            .unwrap_or_else(|| Array1::zeros(columns));
        let std = data
            .std_axis(Axis(0), 0.0)
            .mapv(|s| if s == 0.0 { 1.0 } else { s });
        Self { mean, std }
    }

    /// Number of columns this scaler was fitted on.
    pub fn width(&self) -> usize {
        self.mean.len()
    }

    pub fn transform(&self, data: &Array2<f64>) -> Result<Array2<f64>, FeatureError> {
        self.check_width(data.ncols())?;
        Ok((data - &self.mean) / &self.std)
    }

    pub fn inverse_transform(&self, data: &Array2<f64>) -> Result<Array2<f64>, FeatureError> {
        self.check_width(data.ncols())?;
        Ok(data * &self.std + &self.mean)
    }

    pub fn transform_row(&self, row: ArrayView1<'_, f64>) -> Result<Array1<f64>, FeatureError> {
        self.check_width(row.len())?;
        Ok((&row - &self.mean) / &self.std)
    }

    pub fn inverse_row(&self, row: ArrayView1<'_, f64>) -> Result<Array1<f64>, FeatureError> {
        self.check_width(row.len())?;
        Ok(&row * &self.std + &self.mean)
    }

    fn check_width(&self, found: usize) -> Result<(), FeatureError> {
        if found != self.width() {
            return Err(FeatureError::ShapeMismatch {
                expected: self.width(),
                found,
            });
        }
        Ok(())
    }
}
