//! Schedule decoding and objective evaluation.
//!
//! The decoder is a deterministic greedy construction: given the same
//! order sequence, layout, and configuration it always produces the same
//! schedule. The evaluator reduces a schedule to one scalar cost. Both
//! are pure, synchronous functions — the solver calls them once per
//! candidate with no shared state between invocations.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Boysen, de Koster & Weidinger (2019), "Warehousing in the e-commerce
//!   era: A survey"

mod decoder;
mod objective;

pub use decoder::decode;
pub use objective::{evaluate, CostBreakdown};
