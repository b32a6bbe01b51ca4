//! Loop-sortation domain models.
//!
//! Core data types for representing a sortation scheduling problem and
//! its solution. All times are f64 minutes relative to a scheduling
//! epoch (t=0); the caller decides what t=0 means.
//!
//! # Ownership
//!
//! Orders, the lane layout, and the configuration are constructed by an
//! external loader and handed to the core by value. Each decode builds a
//! fresh [`Schedule`]; the solver replaces its incumbent atomically and
//! never mutates a schedule after construction.

mod config;
mod lane;
mod order;
mod schedule;

pub use config::Config;
pub use lane::LaneLayout;
pub use order::Order;
pub use schedule::{GridlockWarning, OrderSchedule, Schedule};
