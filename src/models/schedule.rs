//! Schedule (solution) model.
//!
//! A schedule is the full output of one decoder invocation: per-order
//! timing results, per-lane busy totals, and any gridlock warnings
//! raised along the way. Schedules are built once and then only read,
//! compared, and discarded — the solver never edits one in place.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Timing result for a single order.
///
/// # Invariants
/// - `completion_time == start_time + travel_time + processing_time
///   + packing_time + induction_time` exactly.
/// - `tardiness == max(0, completion_time - sla_deadline)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSchedule {
    /// Scheduled order ID.
    pub order_id: String,
    /// Wave the order belongs to (denormalized for reporting).
    pub wave: u32,
    /// Lane the order was routed through.
    pub lane: u32,
    /// Tray position the SKU inducts at.
    pub tray_position: f64,
    /// Start time (minutes from epoch).
    pub start_time: f64,
    /// Completion time (minutes from epoch).
    pub completion_time: f64,
    /// Travel component of the service interval (minutes).
    pub travel_time: f64,
    /// Induction component of the service interval (minutes).
    pub induction_time: f64,
    /// SLA deadline: release time plus the configured horizon.
    pub sla_deadline: f64,
    /// Minutes past the SLA deadline; 0 when on time.
    pub tardiness: f64,
    /// Weighted deviation of this order's lane from the mean lane busy
    /// time (minutes).
    pub lane_imbalance: f64,
}

impl OrderSchedule {
    /// Service interval length (minutes).
    #[inline]
    pub fn service_minutes(&self) -> f64 {
        self.completion_time - self.start_time
    }

    /// Whether the order completed within its SLA.
    #[inline]
    pub fn on_time(&self) -> bool {
        self.tardiness == 0.0
    }
}

/// Diagnostic raised when running utilization crosses the configured
/// threshold. A soft signal: scheduling continues unaffected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridlockWarning {
    /// Order being processed when the threshold was crossed.
    pub order_id: String,
    /// Observed utilization ratio (processed / total).
    pub utilization: f64,
    /// Threshold that was exceeded (`Config::umax`).
    pub threshold: f64,
}

/// A complete schedule: one decoder invocation's output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Per-order results, in scheduling order.
    pub results: Vec<OrderSchedule>,
    /// Total busy minutes per lane that served at least one order.
    pub lane_busy: HashMap<u32, f64>,
    /// Gridlock diagnostics raised during construction.
    pub warnings: Vec<GridlockWarning>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makespan: latest completion time in minutes from epoch, 0 when
    /// empty. Always elapsed time, never a wall-clock value.
    pub fn makespan(&self) -> f64 {
        self.results
            .iter()
            .map(|r| r.completion_time)
            .fold(0.0, f64::max)
    }

    /// Finds the result for a given order.
    pub fn result_for_order(&self, order_id: &str) -> Option<&OrderSchedule> {
        self.results.iter().find(|r| r.order_id == order_id)
    }

    /// Returns all results routed through a given lane.
    pub fn results_for_lane(&self, lane: u32) -> Vec<&OrderSchedule> {
        self.results.iter().filter(|r| r.lane == lane).collect()
    }

    /// Sum of tardiness across all orders (minutes).
    pub fn total_tardiness(&self) -> f64 {
        self.results.iter().map(|r| r.tardiness).sum()
    }

    /// Sum of per-order lane-imbalance contributions (minutes).
    pub fn total_lane_imbalance(&self) -> f64 {
        self.results.iter().map(|r| r.lane_imbalance).sum()
    }

    /// Fraction of orders completing within their SLA (1.0 when empty).
    pub fn on_time_rate(&self) -> f64 {
        if self.results.is_empty() {
            return 1.0;
        }
        let on_time = self.results.iter().filter(|r| r.on_time()).count();
        on_time as f64 / self.results.len() as f64
    }

    /// Number of scheduled orders.
    pub fn order_count(&self) -> usize {
        self.results.len()
    }

    /// Whether no gridlock warnings were raised.
    pub fn is_clear(&self) -> bool {
        self.warnings.is_empty()
    }
}
