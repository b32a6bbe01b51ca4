//! Scheduling and search configuration.
//!
//! One value per run, passed by reference to every component and never
//! mutated — there is no global parameter state anywhere in the crate.
//! Every field has a documented default, so a missing key on the caller's
//! side is a substitution, not an error.

use serde::{Deserialize, Serialize};

/// Weights, thresholds, and search budget for one scheduling run.
///
/// # Objective
///
/// The evaluator combines schedule metrics into one scalar:
///
/// `cost = lambda3 * Cmax + lambda2 * Σ lane_imbalance
///        + lambda1 * Σ SLA overruns + Σ tardiness`
///
/// `Cmax` is measured in elapsed minutes from the run's epoch, never as
/// an absolute wall-clock value, so the makespan term reflects the
/// schedule's span instead of the current date.
///
/// # Examples
///
/// ```
/// use sortation_core::models::Config;
///
/// let config = Config::default()
///     .with_iterations(500)
///     .with_destroy_range(2, 4)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Utilization warning threshold in (0, 1]. When the fraction of
    /// processed orders exceeds this, the decoder records a gridlock
    /// warning. Default 0.85.
    pub umax: f64,

    /// Wave-overlap fraction in [0, 1]. Bounds how far a following wave
    /// may start before the preceding wave drains. Default 0.3.
    pub theta: f64,

    /// Lane-imbalance weight applied per order (minutes of deviation
    /// from the mean lane busy time). Default 0.5.
    pub beta: f64,

    /// SLA-overrun weight in the objective. Default 1e6.
    pub lambda1: f64,

    /// Lane-imbalance weight in the objective. Default 1000.0.
    pub lambda2: f64,

    /// Makespan weight in the objective. Default 1.0.
    pub lambda3: f64,

    /// Destroy/repair iteration budget. 0 makes the solver a pass-through
    /// of the initial decode. Default 200.
    pub iterations: usize,

    /// Minimum orders removed per destroy step. Default 2.
    pub destroy_min: usize,

    /// Maximum orders removed per destroy step. Default 4.
    pub destroy_max: usize,

    /// Allowed horizon from release to completion before tardiness
    /// accrues (minutes). Default 120.
    pub sla_horizon_minutes: f64,

    /// Scales tray-to-lane distance into travel effort. Default 1.0.
    pub distance_factor: f64,

    /// Random seed for reproducibility. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            umax: 0.85,
            theta: 0.3,
            beta: 0.5,
            lambda1: 1e6,
            lambda2: 1000.0,
            lambda3: 1.0,
            iterations: 200,
            destroy_min: 2,
            destroy_max: 4,
            sla_horizon_minutes: 120.0,
            distance_factor: 1.0,
            seed: None,
        }
    }
}

impl Config {
    pub fn with_umax(mut self, umax: f64) -> Self {
        self.umax = umax;
        self
    }

    pub fn with_theta(mut self, theta: f64) -> Self {
        self.theta = theta;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_weights(mut self, lambda1: f64, lambda2: f64, lambda3: f64) -> Self {
        self.lambda1 = lambda1;
        self.lambda2 = lambda2;
        self.lambda3 = lambda3;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_destroy_range(mut self, min: usize, max: usize) -> Self {
        self.destroy_min = min;
        self.destroy_max = max.max(min);
        self
    }

    pub fn with_sla_horizon(mut self, minutes: f64) -> Self {
        self.sla_horizon_minutes = minutes;
        self
    }

    pub fn with_distance_factor(mut self, factor: f64) -> Self {
        self.distance_factor = factor;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.umax > 0.0 && self.umax <= 1.0) {
            return Err(format!("umax must be in (0, 1], got {}", self.umax));
        }
        if !(0.0..=1.0).contains(&self.theta) {
            return Err(format!("theta must be in [0, 1], got {}", self.theta));
        }
        if self.beta < 0.0 {
            return Err(format!("beta must be non-negative, got {}", self.beta));
        }
        if self.lambda1 < 0.0 || self.lambda2 < 0.0 || self.lambda3 < 0.0 {
            return Err("objective weights must be non-negative".into());
        }
        if self.destroy_min > self.destroy_max {
            return Err(format!(
                "destroy_min ({}) must be <= destroy_max ({})",
                self.destroy_min, self.destroy_max
            ));
        }
        if self.sla_horizon_minutes <= 0.0 {
            return Err(format!(
                "sla_horizon_minutes must be positive, got {}",
                self.sla_horizon_minutes
            ));
        }
        if self.distance_factor <= 0.0 {
            return Err(format!(
                "distance_factor must be positive, got {}",
                self.distance_factor
            ));
        }
        Ok(())
    }
}
