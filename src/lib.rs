//! Scheduling core for warehouse loop-sortation systems.
//!
//! Schedules time-sensitive orders, released in waves, onto a small set
//! of serial sortation lanes, then searches for a better ordering with a
//! destroy/repair metaheuristic. The crate is a pure library: it
//! consumes already-parsed order and configuration records, performs no
//! I/O, and hands structured results and diagnostics back to the caller.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Order`, `LaneLayout`, `Config`,
//!   `Schedule`, `OrderSchedule`, `GridlockWarning`
//! - **`timing`**: Pure timing model (stable SKU hash, travel,
//!   induction, completion)
//! - **`scheduler`**: Greedy schedule decoder and objective evaluator
//! - **`solver`**: Destroy/repair search with greedy acceptance
//! - **`validation`**: Structural input checks for loaders
//!
//! # Pipeline
//!
//! Configuration + orders → [`scheduler::decode`] → [`models::Schedule`]
//! → [`scheduler::evaluate`] → cost. [`solver::SolverRunner`] wraps that
//! pipeline in a seedable search loop and keeps the best-known schedule.
//!
//! ```
//! use sortation_core::models::{Config, LaneLayout, Order};
//! use sortation_core::solver::SolverRunner;
//!
//! let orders = vec![
//!     Order::new("A").with_sku("SKU-0033").with_quantity(10.0).with_lane(1),
//!     Order::new("B").with_sku("SKU-0145").with_quantity(5.0).with_lane(2),
//!     Order::new("C").with_sku("WIDGET-A").with_wave(2).with_release_time(20.0).with_lane(1),
//! ];
//! let layout = LaneLayout::evenly_spaced(3, 10.0);
//! let config = Config::default().with_iterations(100).with_seed(42);
//!
//! let result = SolverRunner::run(&orders, &layout, &config);
//! assert!(result.best_cost.is_finite());
//! assert!(result.best.order_count() <= 3);
//! ```
//!
//! Data loading (Excel/CSV), the graph-based order/SKU grouping that
//! assigns lanes, and presentation are external collaborators and live
//! outside this crate.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Ropke & Pisinger (2006), "An Adaptive Large Neighborhood Search
//!   Heuristic for the Pickup and Delivery Problem with Time Windows"
//! - Boysen, de Koster & Weidinger (2019), "Warehousing in the
//!   e-commerce era: A survey"

pub mod models;
pub mod scheduler;
pub mod solver;
pub mod timing;
pub mod validation;
