//! Order model.
//!
//! An order is a unit of warehouse work released as part of a wave and
//! routed through one sortation lane. Orders are immutable once built:
//! the solver adds, removes, and reorders whole `Order` values but never
//! mutates a field.
//!
//! # Time Representation
//! All times are in minutes relative to a scheduling epoch (t=0).

use serde::{Deserialize, Serialize};

/// A warehouse order to be scheduled onto a sortation lane.
///
/// Lane assignment is an input here — an upstream grouping step decides
/// which lane serves each order; the core only sequences and times them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order identifier.
    pub order_id: String,
    /// Release-time cohort (1-based). Orders in the same wave are
    /// logically batched.
    pub wave: u32,
    /// Earliest moment the order may start (minutes from epoch).
    pub release_time: f64,
    /// SKU identifier; source of the deterministic tray position and
    /// induction offset.
    pub sku: String,
    /// Number of units to route.
    pub quantity: f64,
    /// Packing duration (minutes).
    pub packing_time: f64,
    /// Processing duration (minutes).
    pub processing_time: f64,
    /// Conveyor speed of the assigned lane (distance units per minute
    /// per unit quantity).
    pub lane_speed: f64,
    /// Assigned lane identifier.
    pub lane: u32,
}

impl Order {
    /// Creates a new order with the given ID and caller-side defaults:
    /// wave 1, release at epoch, quantity 1, processing and packing
    /// 5 minutes each, lane speed 1.0, lane 1.
    pub fn new(order_id: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            wave: 1,
            release_time: 0.0,
            sku: String::new(),
            quantity: 1.0,
            packing_time: 5.0,
            processing_time: 5.0,
            lane_speed: 1.0,
            lane: 1,
        }
    }

    /// Sets the wave number.
    pub fn with_wave(mut self, wave: u32) -> Self {
        self.wave = wave;
        self
    }

    /// Sets the release time (minutes from epoch).
    pub fn with_release_time(mut self, minutes: f64) -> Self {
        self.release_time = minutes;
        self
    }

    /// Sets the SKU identifier.
    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = sku.into();
        self
    }

    /// Sets the quantity.
    pub fn with_quantity(mut self, quantity: f64) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the packing duration (minutes).
    pub fn with_packing_time(mut self, minutes: f64) -> Self {
        self.packing_time = minutes;
        self
    }

    /// Sets the processing duration (minutes).
    pub fn with_processing_time(mut self, minutes: f64) -> Self {
        self.processing_time = minutes;
        self
    }

    /// Sets the lane conveyor speed.
    pub fn with_lane_speed(mut self, speed: f64) -> Self {
        self.lane_speed = speed;
        self
    }

    /// Sets the assigned lane.
    pub fn with_lane(mut self, lane: u32) -> Self {
        self.lane = lane;
        self
    }

    /// Fixed service duration excluding travel and induction (minutes).
    pub fn service_minutes(&self) -> f64 {
        self.processing_time + self.packing_time
    }
}
