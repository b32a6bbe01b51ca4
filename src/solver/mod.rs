//! Destroy/repair search over order sets.
//!
//! A large-neighborhood search with one fixed destroy/repair pair:
//! uniform random removal followed by a full reshuffle of the remaining
//! orders, with greedy (improvement-only) acceptance. There is no
//! operator portfolio and no adaptive weighting — the perturbation is
//! deliberately simple and the decoder does the heavy lifting.
//!
//! # References
//!
//! Ropke & Pisinger (2006), "An Adaptive Large Neighborhood Search
//! Heuristic for the Pickup and Delivery Problem with Time Windows"
//! (the destroy/repair skeleton; the adaptive layer is not used here)

mod operators;
mod runner;

pub use operators::{destroy_random, draw_destroy_count, repair_shuffle};
pub use runner::{SolverResult, SolverRunner};
