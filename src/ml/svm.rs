//! Linear support vector classifier.
//!
//! Minimizes a regularized squared hinge loss over sparse samples:
//!
//! ```text
//! L2:  min  ½‖w‖² + C Σᵢ max(0, 1 − yᵢ(w·xᵢ + b))²
//! L1:  min   ‖w‖₁ + C Σᵢ max(0, 1 − yᵢ(w·xᵢ + b))²
//! ```
//!
//! The intercept `b` is learned as the weight of an extra constant feature
//! of value 1, so it is regularized like every other weight.
//!
//! - L2 is solved with dual coordinate descent over a seeded random order of
//!   samples per epoch.
//! - L1 is solved on the primal with FISTA (accelerated proximal gradient,
//!   soft-thresholding proximal step, backtracking line search).

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SentimentError};
use crate::ml::sparse::SparseVector;

/// Regularization kind.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Penalty {
    /// Lasso penalty `‖w‖₁` (sparse weights).
    L1,
    /// Ridge penalty `½‖w‖²`.
    #[default]
    L2,
}

impl fmt::Display for Penalty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Penalty::L1 => write!(f, "l1"),
            Penalty::L2 => write!(f, "l2"),
        }
    }
}

impl FromStr for Penalty {
    type Err = SentimentError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "l1" => Ok(Penalty::L1),
            "l2" => Ok(Penalty::L2),
            other => Err(SentimentError::config(format!(
                "unknown penalty '{other}', expected 'l1' or 'l2'"
            ))),
        }
    }
}

/// Hyperparameters of [`LinearSvc`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SvmConfig {
    /// Regularization kind.
    pub penalty: Penalty,
    /// Regularization strength; larger values mean weaker regularization.
    pub c: f64,
    /// Convergence tolerance.
    pub tol: f64,
    /// Maximum number of epochs (L2) or proximal steps (L1).
    pub max_iter: usize,
    /// Seed for the per-epoch sample order.
    pub random_state: u64,
}

impl Default for SvmConfig {
    fn default() -> Self {
        Self {
            penalty: Penalty::L2,
            c: 1.0,
            tol: 1e-4,
            max_iter: 1000,
            random_state: 0,
        }
    }
}

impl SvmConfig {
    /// Check that the hyperparameters are usable.
    pub fn validate(&self) -> Result<()> {
        if !(self.c.is_finite() && self.c > 0.0) {
            return Err(SentimentError::config(format!(
                "regularization strength C must be a positive number, got {}",
                self.c
            )));
        }
        if !(self.tol.is_finite() && self.tol > 0.0) {
            return Err(SentimentError::config(format!(
                "tolerance must be a positive number, got {}",
                self.tol
            )));
        }
        if self.max_iter == 0 {
            return Err(SentimentError::config("max_iter must be at least 1"));
        }
        Ok(())
    }
}

/// Linear support vector classifier over sparse features.
#[derive(Debug, Clone)]
pub struct LinearSvc {
    config: SvmConfig,
    /// Feature weights, empty until fitted.
    weights: Vec<f64>,
    /// Intercept.
    bias: f64,
    /// Epochs or proximal steps used by the last fit.
    n_iter: usize,
    fitted: bool,
}

impl LinearSvc {
    /// Create an unfitted classifier.
    pub fn new(config: SvmConfig) -> Self {
        Self {
            config,
            weights: Vec::new(),
            bias: 0.0,
            n_iter: 0,
            fitted: false,
        }
    }

    /// Fit on samples `x` with `n_features` columns and targets `y` in {-1, +1}.
    pub fn fit(&mut self, x: &[SparseVector], y: &[f64], n_features: usize) -> Result<()> {
        self.config.validate()?;

        if x.len() != y.len() {
            return Err(SentimentError::training(format!(
                "x has {} samples but y has {}",
                x.len(),
                y.len()
            )));
        }
        if x.is_empty() {
            return Err(SentimentError::training("cannot fit with 0 samples"));
        }
        if y.iter().any(|&label| label != 1.0 && label != -1.0) {
            return Err(SentimentError::training("targets must be -1 or +1"));
        }
        if !y.contains(&1.0) || !y.contains(&-1.0) {
            return Err(SentimentError::training(
                "targets must contain both classes",
            ));
        }

        let (weights, bias, n_iter) = match self.config.penalty {
            Penalty::L2 => self.solve_l2_dual(x, y, n_features),
            Penalty::L1 => self.solve_l1_primal(x, y, n_features),
        };

        debug!(
            "LinearSvc ({}, C={}) fitted {} samples x {} features in {} iterations",
            self.config.penalty,
            self.config.c,
            x.len(),
            n_features,
            n_iter
        );

        self.weights = weights;
        self.bias = bias;
        self.n_iter = n_iter;
        self.fitted = true;
        Ok(())
    }

    /// Signed distance-like score `w·x + b`.
    pub fn decision_function(&self, x: &SparseVector) -> Result<f64> {
        if !self.fitted {
            return Err(SentimentError::prediction("model not trained yet"));
        }
        Ok(x.dot(&self.weights) + self.bias)
    }

    /// Predict `+1.0` when the score is non-negative, else `-1.0`.
    pub fn predict(&self, x: &SparseVector) -> Result<f64> {
        Ok(if self.decision_function(x)? >= 0.0 {
            1.0
        } else {
            -1.0
        })
    }

    /// Learned feature weights.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Learned intercept.
    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Iterations used by the last fit.
    pub fn n_iter(&self) -> usize {
        self.n_iter
    }

    /// Whether the classifier has been fitted.
    pub fn is_fitted(&self) -> bool {
        self.fitted
    }

    /// Hyperparameters.
    pub fn config(&self) -> &SvmConfig {
        &self.config
    }

    fn solve_l2_dual(&self, x: &[SparseVector], y: &[f64], n_features: usize) -> (Vec<f64>, f64, usize) {
        let n_samples = x.len();
        // Squared hinge: the dual gains a diagonal term 1/(2C).
        let diag = 0.5 / self.config.c;
        let qd: Vec<f64> = x.iter().map(|xi| xi.norm_squared() + 1.0 + diag).collect();

        let mut alpha = vec![0.0; n_samples];
        let mut w = vec![0.0; n_features];
        let mut b = 0.0;

        let mut rng = StdRng::seed_from_u64(self.config.random_state);
        let mut order: Vec<usize> = (0..n_samples).collect();

        for epoch in 0..self.config.max_iter {
            order.shuffle(&mut rng);
            let mut pg_max = f64::NEG_INFINITY;
            let mut pg_min = f64::INFINITY;

            for &i in &order {
                let yi = y[i];
                let g = yi * (x[i].dot(&w) + b) - 1.0 + diag * alpha[i];
                let pg = if alpha[i] == 0.0 { g.min(0.0) } else { g };

                pg_max = pg_max.max(pg);
                pg_min = pg_min.min(pg);

                if pg.abs() > 1e-12 {
                    let old = alpha[i];
                    alpha[i] = (old - g / qd[i]).max(0.0);
                    let delta = (alpha[i] - old) * yi;
                    x[i].axpy(delta, &mut w);
                    b += delta;
                }
            }

            if pg_max - pg_min <= self.config.tol {
                return (w, b, epoch + 1);
            }
        }

        warn!(
            "LinearSvc dual solver did not converge in {} epochs; consider raising max_iter",
            self.config.max_iter
        );
        (w, b, self.config.max_iter)
    }

    fn solve_l1_primal(&self, x: &[SparseVector], y: &[f64], n_features: usize) -> (Vec<f64>, f64, usize) {
        let c = self.config.c;
        // theta = [w_0, ..., w_{d-1}, b]
        let dim = n_features + 1;
        let loss = |theta: &[f64]| -> f64 {
            let (w, b) = theta.split_at(n_features);
            x.iter()
                .zip(y)
                .map(|(xi, &yi)| {
                    let slack = (1.0 - yi * (xi.dot(w) + b[0])).max(0.0);
                    slack * slack
                })
                .sum::<f64>()
                * c
        };
        let loss_and_grad = |theta: &[f64]| -> (f64, Vec<f64>) {
            let (w, b) = theta.split_at(n_features);
            let mut grad = vec![0.0; dim];
            let mut value = 0.0;
            for (xi, &yi) in x.iter().zip(y) {
                let slack = (1.0 - yi * (xi.dot(w) + b[0])).max(0.0);
                if slack > 0.0 {
                    value += slack * slack;
                    let coef = -2.0 * c * yi * slack;
                    xi.axpy(coef, &mut grad[..n_features]);
                    grad[n_features] += coef;
                }
            }
            (value * c, grad)
        };

        let mut theta = vec![0.0; dim];
        let mut momentum = theta.clone();
        let mut t = 1.0f64;
        let mut lipschitz = 1.0f64;

        for iter in 0..self.config.max_iter {
            let (f_m, grad_m) = loss_and_grad(&momentum);

            // Backtracking until the quadratic upper bound holds.
            let next = loop {
                let step = 1.0 / lipschitz;
                let candidate: Vec<f64> = momentum
                    .iter()
                    .zip(&grad_m)
                    .map(|(&m, &g)| soft_threshold(m - step * g, step))
                    .collect();

                let mut linear = 0.0;
                let mut quadratic = 0.0;
                for ((&cand, &m), &g) in candidate.iter().zip(&momentum).zip(&grad_m) {
                    let diff = cand - m;
                    linear += g * diff;
                    quadratic += diff * diff;
                }

                if loss(&candidate) <= f_m + linear + 0.5 * lipschitz * quadratic + 1e-12
                    || lipschitz > 1e12
                {
                    break candidate;
                }
                lipschitz *= 2.0;
            };

            let t_next = (1.0 + (1.0 + 4.0 * t * t).sqrt()) / 2.0;
            let beta = (t - 1.0) / t_next;

            let mut change = 0.0;
            let mut magnitude = 0.0;
            for j in 0..dim {
                let diff = next[j] - theta[j];
                change += diff * diff;
                magnitude += next[j] * next[j];
                momentum[j] = next[j] + beta * diff;
            }

            theta = next;
            t = t_next;

            if change.sqrt() <= self.config.tol * magnitude.sqrt().max(1.0) {
                let b = theta.pop().unwrap_or(0.0);
                return (theta, b, iter + 1);
            }
        }

        warn!(
            "LinearSvc L1 solver did not converge in {} iterations; consider raising max_iter",
            self.config.max_iter
        );
        let b = theta.pop().unwrap_or(0.0);
        (theta, b, self.config.max_iter)
    }
}

fn soft_threshold(value: f64, threshold: f64) -> f64 {
    if value > threshold {
        value - threshold
    } else if value < -threshold {
        value + threshold
    } else {
        0.0
    }
}
