//! Search loop execution.
//!
//! Destroy/repair search over order sets with greedy acceptance: a
//! candidate replaces the incumbent only on strict cost improvement, so
//! the incumbent cost is non-increasing across the whole run. Randomness
//! is seedable through [`Config::seed`] for bit-identical repeat runs.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::operators::{destroy_random, draw_destroy_count, repair_shuffle};
use crate::models::{Config, LaneLayout, Order, Schedule};
use crate::scheduler::{decode, evaluate};

/// Result of one solver run.
#[derive(Debug, Clone)]
pub struct SolverResult {
    /// The best schedule found.
    pub best: Schedule,

    /// Order list that decodes to the best schedule.
    pub best_orders: Vec<Order>,

    /// Cost of the best schedule.
    pub best_cost: f64,

    /// Number of iterations actually executed.
    pub iterations: usize,

    /// Number of accepted improvements.
    pub improvements: usize,

    /// Whether the run was cancelled before the budget was exhausted.
    pub cancelled: bool,

    /// Best cost after the initial decode and after each improvement.
    /// Non-increasing by construction.
    pub cost_history: Vec<f64>,
}

/// Executes the destroy/repair search.
pub struct SolverRunner;

impl SolverRunner {
    /// Runs the search for `config.iterations` rounds.
    ///
    /// The initial incumbent is the decode of the caller-supplied order
    /// list unmodified, so `iterations == 0` is a pass-through of that
    /// decode. Each round copies the incumbent, removes a random handful
    /// of orders, reshuffles the remainder, re-decodes, and accepts only
    /// strict improvements.
    ///
    /// # Example
    ///
    /// ```
    /// use sortation_core::models::{Config, LaneLayout, Order};
    /// use sortation_core::solver::SolverRunner;
    ///
    /// let orders: Vec<Order> = (0..6)
    ///     .map(|i| Order::new(format!("O{i}")).with_sku(format!("S{i}")))
    ///     .collect();
    /// let layout = LaneLayout::evenly_spaced(3, 10.0);
    /// let config = Config::default().with_iterations(50).with_seed(42);
    ///
    /// let result = SolverRunner::run(&orders, &layout, &config);
    /// assert!(result.best_cost.is_finite());
    /// ```
    pub fn run(orders: &[Order], layout: &LaneLayout, config: &Config) -> SolverResult {
        Self::run_with_cancel(orders, layout, config, None)
    }

    /// Runs the search with an optional cancellation flag.
    ///
    /// Cancellation is how a wall-clock timeout is layered on top of the
    /// iteration budget: the loop stops at the next round boundary and
    /// returns the current incumbent. Never an error.
    pub fn run_with_cancel(
        orders: &[Order],
        layout: &LaneLayout,
        config: &Config,
        cancel: Option<Arc<AtomicBool>>,
    ) -> SolverResult {
        config.validate().expect("invalid Config");

        let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or_else(rand::random));

        let best_orders = orders.to_vec();
        let best = decode(&best_orders, layout, config);
        let best_cost = evaluate(&best, config);

        let mut state = SearchState::new(best, best_orders, best_cost);

        for _ in 0..config.iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    state.cancelled = true;
                    break;
                }
            }

            let mut candidate = state.best_orders.clone();
            let k = draw_destroy_count(candidate.len(), config, &mut rng);
            destroy_random(&mut candidate, k, &mut rng);
            repair_shuffle(&mut candidate, &mut rng);

            let schedule = decode(&candidate, layout, config);
            let cost = evaluate(&schedule, config);
            state.executed += 1;

            state.offer(candidate, schedule, cost);
        }

        state.into_result()
    }

    /// Runs the search with batched parallel candidate evaluation.
    ///
    /// Candidates are generated and evaluated in fixed-size batches via
    /// rayon; every candidate in a batch derives from the same incumbent
    /// with its own iteration-indexed RNG, and the best strict
    /// improvement of the batch (lowest iteration index on ties) is
    /// accepted sequentially. The batch size is a constant, so a fixed
    /// seed gives the same incumbent regardless of thread count.
    ///
    /// Acceptance differs from [`run`](Self::run) — a batch explores
    /// several candidates of one incumbent instead of chaining on every
    /// improvement — but monotonic improvement and determinism hold the
    /// same way.
    #[cfg(feature = "parallel")]
    pub fn run_parallel(orders: &[Order], layout: &LaneLayout, config: &Config) -> SolverResult {
        use rayon::prelude::*;

        // Fixed so results do not depend on the machine's thread count.
        const BATCH: usize = 16;

        config.validate().expect("invalid Config");

        let base_seed = config.seed.unwrap_or_else(rand::random);

        let best_orders = orders.to_vec();
        let best = decode(&best_orders, layout, config);
        let best_cost = evaluate(&best, config);

        let mut state = SearchState::new(best, best_orders, best_cost);

        let mut next = 0usize;
        while next < config.iterations {
            let end = (next + BATCH).min(config.iterations);
            let incumbent = &state.best_orders;

            let batch: Vec<(f64, Vec<Order>, Schedule)> = (next..end)
                .into_par_iter()
                .map(|iteration| {
                    let mut rng = StdRng::seed_from_u64(iteration_seed(base_seed, iteration));
                    let mut candidate = incumbent.clone();
                    let k = draw_destroy_count(candidate.len(), config, &mut rng);
                    destroy_random(&mut candidate, k, &mut rng);
                    repair_shuffle(&mut candidate, &mut rng);
                    let schedule = decode(&candidate, layout, config);
                    let cost = evaluate(&schedule, config);
                    (cost, candidate, schedule)
                })
                .collect();

            state.executed += end - next;
            next = end;

            // Sequential accept keeps improvement monotonic and the
            // outcome independent of parallel completion order.
            if let Some((cost, candidate, schedule)) = batch
                .into_iter()
                .min_by(|a, b| a.0.total_cmp(&b.0))
            {
                state.offer(candidate, schedule, cost);
            }
        }

        state.into_result()
    }
}

/// Per-iteration seed derivation for the parallel path: splitmix-style
/// mixing keeps neighboring iterations statistically independent.
#[cfg(feature = "parallel")]
fn iteration_seed(base: u64, iteration: usize) -> u64 {
    let mut z = base.wrapping_add((iteration as u64 + 1).wrapping_mul(0x9e37_79b9_7f4a_7c15));
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Incumbent plus run statistics. The accept step is the single point
/// where search state changes.
struct SearchState {
    best: Schedule,
    best_orders: Vec<Order>,
    best_cost: f64,
    executed: usize,
    improvements: usize,
    cancelled: bool,
    cost_history: Vec<f64>,
}

impl SearchState {
    fn new(best: Schedule, best_orders: Vec<Order>, best_cost: f64) -> Self {
        tracing::debug!(initial_cost = best_cost, "search started");
        Self {
            best,
            best_orders,
            best_cost,
            executed: 0,
            improvements: 0,
            cancelled: false,
            cost_history: vec![best_cost],
        }
    }

    /// Accepts the candidate iff it strictly improves on the incumbent.
    /// The re-check against the current incumbent cost happens here,
    /// after any parallel evaluation has finished, so improvement stays
    /// monotonic no matter how candidates were produced.
    fn offer(&mut self, candidate: Vec<Order>, schedule: Schedule, cost: f64) {
        if cost < self.best_cost {
            tracing::debug!(
                iteration = self.executed,
                old_cost = self.best_cost,
                new_cost = cost,
                "incumbent improved"
            );
            self.best = schedule;
            self.best_orders = candidate;
            self.best_cost = cost;
            self.improvements += 1;
            self.cost_history.push(cost);
        }
    }

    fn into_result(self) -> SolverResult {
        SolverResult {
            best: self.best,
            best_orders: self.best_orders,
            best_cost: self.best_cost,
            iterations: self.executed,
            improvements: self.improvements,
            cancelled: self.cancelled,
            cost_history: self.cost_history,
        }
    }
}
