//! Objective evaluation.
//!
//! Reduces a schedule to a single scalar cost, lower is better. The
//! breakdown type reports each weighted term separately for diagnostics.
//!
//! # Objective
//!
//! | Term | Definition |
//! |------|-----------|
//! | Makespan | `lambda3 * Cmax` (elapsed minutes from epoch) |
//! | Lane imbalance | `lambda2 * Σ per-order imbalance` |
//! | SLA overrun | `lambda1 * Σ max(0, completion - deadline)` |
//! | Tardiness | `Σ tardiness` (unweighted) |
//!
//! `Cmax` is always the schedule's span from the reference epoch, never
//! an absolute timestamp — a wall-clock makespan would let the dominant
//! term drift with the time of day instead of the schedule's quality.

use crate::models::{Config, Schedule};

/// Weighted cost terms of one schedule.
///
/// All terms are non-negative; `total` is their sum.
#[derive(Debug, Clone, PartialEq)]
pub struct CostBreakdown {
    /// Makespan in elapsed minutes from epoch.
    pub cmax: f64,
    /// `lambda3 * cmax`.
    pub makespan_cost: f64,
    /// `lambda2 * Σ lane_imbalance`.
    pub lane_imbalance_cost: f64,
    /// `lambda1 * Σ SLA overruns`.
    pub sla_cost: f64,
    /// Unweighted total tardiness (minutes).
    pub tardiness: f64,
    /// Scalar objective value.
    pub total: f64,
}

impl CostBreakdown {
    /// Computes the cost terms for a schedule.
    ///
    /// An empty schedule costs 0 — neutral, not penalized, so the solver
    /// never favors an empty candidate merely because the mandatory
    /// penalty terms vanish. Callers that must exclude empty solutions
    /// weight solution size themselves.
    pub fn calculate(schedule: &Schedule, config: &Config) -> Self {
        if schedule.results.is_empty() {
            return Self {
                cmax: 0.0,
                makespan_cost: 0.0,
                lane_imbalance_cost: 0.0,
                sla_cost: 0.0,
                tardiness: 0.0,
                total: 0.0,
            };
        }

        let cmax = schedule.makespan();
        let sla_overrun: f64 = schedule
            .results
            .iter()
            .map(|r| (r.completion_time - r.sla_deadline).max(0.0))
            .sum();
        let tardiness = schedule.total_tardiness();
        let imbalance = schedule.total_lane_imbalance();

        let makespan_cost = config.lambda3 * cmax;
        let lane_imbalance_cost = config.lambda2 * imbalance;
        let sla_cost = config.lambda1 * sla_overrun;
        let total = makespan_cost + lane_imbalance_cost + sla_cost + tardiness;

        Self {
            cmax,
            makespan_cost,
            lane_imbalance_cost,
            sla_cost,
            tardiness,
            total,
        }
    }
}

/// Scalar objective value of a schedule. Lower is better.
pub fn evaluate(schedule: &Schedule, config: &Config) -> f64 {
    CostBreakdown::calculate(schedule, config).total
}
