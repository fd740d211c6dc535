//! Linear support vector classifier
//!
//! Binary linear-kernel SVM trained by full-batch subgradient descent on
//! the regularized hinge loss. Labels are {0, 1} at the API surface and
//! mapped to {-1, +1} internally.

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors for the linear SVM
#[derive(Error, Debug)]
pub enum SvmError {
    #[error("Model has not been fitted yet")]
    NotFitted,

    #[error("Dimension mismatch: expected {expected} features, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("Training set is empty")]
    EmptyTrainingSet,

    #[error("Labels and samples differ in length: {labels} labels for {samples} samples")]
    LabelMismatch { labels: usize, samples: usize },
}

/// Linear SVM classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearSvc {
    /// Fitted weight vector
    weights: Option<Array1<f64>>,
    /// Fitted bias term
    bias: Option<f64>,
    /// Gradient step size
    learning_rate: f64,
    /// Maximum training iterations
    max_iter: usize,
    /// Stop when the cost improvement falls below this
    tolerance: f64,
    /// L2 regularization strength
    lambda: f64,
    /// Cost per iteration during the last fit
    pub cost_history: Vec<f64>,
}

impl Default for LinearSvc {
    fn default() -> Self {
        Self::new(0.1, 1000, 1e-6, 0.01)
    }
}

impl LinearSvc {
    pub fn new(learning_rate: f64, max_iter: usize, tolerance: f64, lambda: f64) -> Self {
        Self {
            weights: None,
            bias: None,
            learning_rate,
            max_iter,
            tolerance,
            lambda,
            cost_history: Vec::new(),
        }
    }

    /// Whether the classifier has been fitted
    pub fn is_fitted(&self) -> bool {
        self.weights.is_some()
    }

    /// Fit on a feature matrix against {0, 1} labels.
    ///
    /// Any label other than 1 trains as the negative class.
    pub fn fit(&mut self, x: &Array2<f64>, y: &Array1<i64>) -> Result<(), SvmError> {
        let n_samples = x.nrows();
        if n_samples == 0 {
            return Err(SvmError::EmptyTrainingSet);
        }
        if y.len() != n_samples {
            return Err(SvmError::LabelMismatch {
                labels: y.len(),
                samples: n_samples,
            });
        }

        let n = n_samples as f64;
        let targets: Array1<f64> = y.mapv(|v| if v == 1 { 1.0 } else { -1.0 });

        let mut weights = Array1::<f64>::zeros(x.ncols());
        let mut bias = 0.0;
        self.cost_history.clear();

        for iter in 0..self.max_iter {
            let margins = (x.dot(&weights) + bias) * &targets;

            let mut dw = &weights * self.lambda;
            let mut db = 0.0;
            let mut cost = 0.5 * self.lambda * weights.dot(&weights);

            for (i, &margin) in margins.iter().enumerate() {
                if margin < 1.0 {
                    cost += (1.0 - margin) / n;
                    let yi = targets[i];
                    dw.scaled_add(-yi / n, &x.row(i));
                    db -= yi / n;
                }
            }

            weights.scaled_add(-self.learning_rate, &dw);
            bias -= self.learning_rate * db;
            self.cost_history.push(cost);

            if iter > 0 {
                let improvement = (self.cost_history[iter - 1] - cost).abs();
                if improvement < self.tolerance {
                    tracing::debug!(iteration = iter, cost, "svm converged");
                    break;
                }
            }
        }

        self.weights = Some(weights);
        self.bias = Some(bias);
        Ok(())
    }

    /// Signed distance to the separating hyperplane
    pub fn decision_function(&self, x: &Array2<f64>) -> Result<Array1<f64>, SvmError> {
        let weights = self.weights.as_ref().ok_or(SvmError::NotFitted)?;
        let bias = self.bias.ok_or(SvmError::NotFitted)?;

        if x.ncols() != weights.len() {
            return Err(SvmError::DimensionMismatch {
                expected: weights.len(),
                got: x.ncols(),
            });
        }

        Ok(x.dot(weights) + bias)
    }

    /// Predict {0, 1} class labels, one per input row
    pub fn predict(&self, x: &Array2<f64>) -> Result<Array1<i64>, SvmError> {
        let decision = self.decision_function(x)?;
        Ok(decision.mapv(|d| if d >= 0.0 { 1 } else { 0 }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_predict_before_fit_fails() {
        let svm = LinearSvc::default();
        let x = array![[1.0, 0.0]];
        assert!(matches!(svm.predict(&x), Err(SvmError::NotFitted)));
    }

    #[test]
    fn test_fit_on_empty_set_fails() {
        let mut svm = LinearSvc::default();
        let x = Array2::<f64>::zeros((0, 2));
        let y = Array1::<i64>::zeros(0);
        assert!(matches!(svm.fit(&x, &y), Err(SvmError::EmptyTrainingSet)));
    }

    #[test]
    fn test_label_length_mismatch_fails() {
        let mut svm = LinearSvc::default();
        let x = array![[1.0, 0.0], [0.0, 1.0]];
        let y = array![1i64];
        assert!(matches!(svm.fit(&x, &y), Err(SvmError::LabelMismatch { .. })));
    }

    #[test]
    fn test_separates_trivial_data() {
        let mut svm = LinearSvc::default();
        let x = array![[0.0, 1.0], [1.0, 0.0]];
        let y = array![1i64, 0];
        svm.fit(&x, &y).unwrap();

        let predictions = svm.predict(&x).unwrap();
        assert_eq!(predictions, array![1i64, 0]);
    }

    #[test]
    fn test_dimension_mismatch_on_predict() {
        let mut svm = LinearSvc::default();
        let x = array![[0.0, 1.0], [1.0, 0.0]];
        let y = array![1i64, 0];
        svm.fit(&x, &y).unwrap();

        let bad = array![[1.0, 0.0, 0.0]];
        assert!(matches!(
            svm.predict(&bad),
            Err(SvmError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_cost_decreases_during_training() {
        let mut svm = LinearSvc::default();
        let x = array![
            [0.9, 0.1],
            [0.8, 0.0],
            [0.1, 0.9],
            [0.0, 0.8]
        ];
        let y = array![0i64, 0, 1, 1];
        svm.fit(&x, &y).unwrap();

        let first = svm.cost_history.first().copied().unwrap();
        let last = svm.cost_history.last().copied().unwrap();
        assert!(last < first);
    }
}
