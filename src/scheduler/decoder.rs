//! Greedy schedule decoder.
//!
//! Turns an ordered list of orders plus configuration into concrete
//! start/completion times and derived penalties. A single-pass greedy
//! construction, not a discrete-event simulation: each lane is a serial
//! resource tracked by its last end time.
//!
//! # Algorithm
//!
//! 1. Stable-sort orders by release time (ties keep input order).
//! 2. For each order, start at `max(lane free time, release)`.
//! 3. Wave-overlap relaxation: waves beyond the first may start up to
//!    `theta * prev_wave_min_release` early, overlapping the previous
//!    wave's drain. This is the only step that can move a start before
//!    the lane's last end time.
//! 4. Travel/induction/completion from the timing model.
//! 5. After the pass, spread the lane-imbalance penalty over orders.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the pass.

use std::collections::HashMap;

use crate::models::{Config, GridlockWarning, LaneLayout, Order, OrderSchedule, Schedule};
use crate::timing;

/// Decodes an order list into a schedule.
///
/// The input may arrive in any order; decoding is deterministic for a
/// given input sequence (ties in release time preserve input order, and
/// all SKU-derived quantities come from a fixed hash). There are no
/// error conditions — an empty input yields an empty schedule, and an
/// order on a lane missing from the layout resolves to position 0.
///
/// # Example
///
/// ```
/// use sortation_core::models::{Config, LaneLayout, Order};
/// use sortation_core::scheduler::decode;
///
/// let orders = vec![
///     Order::new("A").with_sku("SKU-0033").with_quantity(10.0),
///     Order::new("B").with_sku("SKU-0145").with_release_time(2.0),
/// ];
/// let layout = LaneLayout::evenly_spaced(3, 10.0);
/// let schedule = decode(&orders, &layout, &Config::default());
/// assert_eq!(schedule.order_count(), 2);
/// ```
pub fn decode(orders: &[Order], layout: &LaneLayout, config: &Config) -> Schedule {
    let mut schedule = Schedule::new();
    if orders.is_empty() {
        return schedule;
    }

    let mut sorted: Vec<&Order> = orders.iter().collect();
    sorted.sort_by(|a, b| a.release_time.total_cmp(&b.release_time));

    // Minimum release time per wave, over the whole candidate set.
    let mut wave_min_release: HashMap<u32, f64> = HashMap::new();
    for order in &sorted {
        wave_min_release
            .entry(order.wave)
            .and_modify(|m| *m = m.min(order.release_time))
            .or_insert(order.release_time);
    }

    // Per-invocation lane state; never shared across decodes.
    let mut lane_last_end: HashMap<u32, f64> = HashMap::new();
    let mut lane_busy: HashMap<u32, f64> = HashMap::new();
    let total = sorted.len();

    for (processed, order) in sorted.iter().enumerate() {
        // A lane with no prior order is available at this order's release.
        let last_end = lane_last_end
            .get(&order.lane)
            .copied()
            .unwrap_or(order.release_time);
        let earliest = last_end.max(order.release_time);

        // Wave-overlap relaxation: a following wave may begin before the
        // preceding wave's lane fully drains, bounded by theta. Skipped
        // when no wave-1 orders exist in the candidate set.
        let start_time = if order.wave > 1 {
            match wave_min_release.get(&(order.wave - 1)) {
                Some(&prev_min) => earliest.min(config.theta * prev_min),
                None => earliest,
            }
        } else {
            earliest
        };

        let tray_position = timing::sku_position(&order.sku);
        let lane_position = layout.position(order.lane);
        let distance = (lane_position - tray_position).abs();
        let travel_time = timing::travel_minutes(
            order.quantity,
            order.lane_speed,
            distance,
            config.distance_factor,
        );
        let induction_time = timing::induction_minutes(&order.sku);
        let completion_time = timing::completion_minutes(
            start_time,
            travel_time,
            order.processing_time,
            order.packing_time,
            induction_time,
        );

        lane_last_end.insert(order.lane, completion_time);
        *lane_busy.entry(order.lane).or_insert(0.0) += completion_time - start_time;

        let sla_deadline = order.release_time + config.sla_horizon_minutes;
        let tardiness = (completion_time - sla_deadline).max(0.0);

        let utilization = (processed + 1) as f64 / total as f64;
        if utilization > config.umax {
            tracing::debug!(
                order_id = %order.order_id,
                utilization,
                threshold = config.umax,
                "gridlock threshold crossed"
            );
            schedule.warnings.push(GridlockWarning {
                order_id: order.order_id.clone(),
                utilization,
                threshold: config.umax,
            });
        }

        schedule.results.push(OrderSchedule {
            order_id: order.order_id.clone(),
            wave: order.wave,
            lane: order.lane,
            tray_position,
            start_time,
            completion_time,
            travel_time,
            induction_time,
            sla_deadline,
            tardiness,
            lane_imbalance: 0.0,
        });
    }

    // Imbalance: mean over lanes that served at least one order.
    let mean_busy = lane_busy.values().sum::<f64>() / lane_busy.len() as f64;
    for result in &mut schedule.results {
        let busy = lane_busy[&result.lane];
        result.lane_imbalance = config.beta * (busy - mean_busy).abs();
    }

    schedule.lane_busy = lane_busy;
    schedule
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Hash facts used below: "SKU-0033" → tray 3, induction 1;
    // "SKU-0145" → tray 7, induction 1.

    fn single_lane_layout() -> LaneLayout {
        LaneLayout::new().with_lane(1, 0.0)
    }

    fn worked_example_orders() -> Vec<Order> {
        vec![
            Order::new("X")
                .with_sku("SKU-0033")
                .with_quantity(10.0)
                .with_release_time(0.0)
                .with_processing_time(5.0)
                .with_packing_time(2.0),
            Order::new("Y")
                .with_sku("SKU-0145")
                .with_quantity(5.0)
                .with_release_time(2.0)
                .with_processing_time(5.0)
                .with_packing_time(3.0),
        ]
    }

    #[test]
    fn test_worked_example() {
        let schedule = decode(
            &worked_example_orders(),
            &single_lane_layout(),
            &Config::default(),
        );

        let x = schedule.result_for_order("X").unwrap();
        assert_eq!(x.travel_time, 30.0);
        assert_eq!(x.induction_time, 1.0);
        assert_eq!(x.start_time, 0.0);
        assert_eq!(x.completion_time, 38.0);

        let y = schedule.result_for_order("Y").unwrap();
        assert_eq!(y.travel_time, 35.0);
        assert_eq!(y.induction_time, 1.0);
        // Lane busy until 38, so Y waits: start = max(38, 2).
        assert_eq!(y.start_time, 38.0);
        assert_eq!(y.completion_time, 82.0);

        // One lane: X contributes 38, Y contributes 44.
        assert_eq!(schedule.lane_busy[&1], 82.0);
        // A single lane is exactly at the mean, so imbalance is zero.
        assert_eq!(x.lane_imbalance, 0.0);
        assert_eq!(y.lane_imbalance, 0.0);
    }

    #[test]
    fn test_empty_input() {
        let schedule = decode(&[], &single_lane_layout(), &Config::default());
        assert_eq!(schedule.order_count(), 0);
        assert_eq!(schedule.makespan(), 0.0);
        assert!(schedule.lane_busy.is_empty());
        assert!(schedule.is_clear());
    }

    #[test]
    fn test_sorts_by_release_time() {
        let orders = vec![
            Order::new("late").with_release_time(50.0).with_sku("a"),
            Order::new("early").with_release_time(1.0).with_sku("a"),
        ];
        let schedule = decode(&orders, &single_lane_layout(), &Config::default());
        assert_eq!(schedule.results[0].order_id, "early");
        assert_eq!(schedule.results[1].order_id, "late");
    }

    #[test]
    fn test_release_time_tie_keeps_input_order() {
        let orders = vec![
            Order::new("first").with_release_time(5.0).with_sku("a"),
            Order::new("second").with_release_time(5.0).with_sku("a"),
            Order::new("third").with_release_time(5.0).with_sku("a"),
        ];
        let schedule = decode(&orders, &single_lane_layout(), &Config::default());
        let ids: Vec<&str> = schedule
            .results
            .iter()
            .map(|r| r.order_id.as_str())
            .collect();
        assert_eq!(ids, ["first", "second", "third"]);
    }

    #[test]
    fn test_serial_lane_no_overlap() {
        // Same wave → no relaxation: later order waits for the lane.
        let orders = vec![
            Order::new("A").with_release_time(0.0).with_sku("SKU-0033"),
            Order::new("B").with_release_time(1.0).with_sku("SKU-0033"),
            Order::new("C").with_release_time(2.0).with_sku("SKU-0033"),
        ];
        let schedule = decode(&orders, &single_lane_layout(), &Config::default());
        for pair in schedule.results.windows(2) {
            assert!(
                pair[1].start_time >= pair[0].completion_time,
                "serial lane violated: {} starts at {} before {} ends at {}",
                pair[1].order_id,
                pair[1].start_time,
                pair[0].order_id,
                pair[0].completion_time
            );
        }
    }

    #[test]
    fn test_parallel_lanes_independent() {
        let layout = LaneLayout::new().with_lane(1, 0.0).with_lane(2, 0.0);
        let orders = vec![
            Order::new("A").with_lane(1).with_sku("SKU-0033"),
            Order::new("B").with_lane(2).with_sku("SKU-0033"),
        ];
        let schedule = decode(&orders, &layout, &Config::default());
        // Different lanes: both start at their release.
        assert_eq!(schedule.result_for_order("A").unwrap().start_time, 0.0);
        assert_eq!(schedule.result_for_order("B").unwrap().start_time, 0.0);
    }

    #[test]
    fn test_wave_overlap_relaxation() {
        // Wave 1 released at 100; wave 2 would otherwise queue behind it.
        // theta = 0.3 → relaxed start = 0.3 * 100 = 30.
        let orders = vec![
            Order::new("w1")
                .with_wave(1)
                .with_release_time(100.0)
                .with_sku("SKU-0033")
                .with_quantity(10.0)
                .with_packing_time(2.0),
            Order::new("w2")
                .with_wave(2)
                .with_release_time(150.0)
                .with_sku("SKU-0033"),
        ];
        let config = Config::default().with_theta(0.3);
        let schedule = decode(&orders, &single_lane_layout(), &config);

        let w1 = schedule.result_for_order("w1").unwrap();
        assert_eq!(w1.start_time, 100.0);
        assert_eq!(w1.completion_time, 138.0);

        // Relaxation beats both the lane's last end (138) and release (150).
        let w2 = schedule.result_for_order("w2").unwrap();
        assert_eq!(w2.start_time, 30.0);
        assert!(w2.start_time < w1.completion_time);
    }

    #[test]
    fn test_no_prior_wave_skips_relaxation() {
        // Wave 3 with no wave-2 orders in the set: relaxation skipped.
        let orders = vec![
            Order::new("w1")
                .with_wave(1)
                .with_release_time(0.0)
                .with_sku("SKU-0033")
                .with_quantity(10.0)
                .with_packing_time(2.0),
            Order::new("w3")
                .with_wave(3)
                .with_release_time(5.0)
                .with_sku("SKU-0033"),
        ];
        let schedule = decode(&orders, &single_lane_layout(), &Config::default());
        let w3 = schedule.result_for_order("w3").unwrap();
        // Lane busy until 38; without relaxation w3 waits.
        assert_eq!(w3.start_time, 38.0);
    }

    #[test]
    fn test_unknown_lane_uses_position_zero() {
        let layout = LaneLayout::new().with_lane(1, 10.0);
        let orders = vec![Order::new("A")
            .with_lane(99)
            .with_sku("SKU-0033")
            .with_quantity(10.0)];
        let schedule = decode(&orders, &layout, &Config::default());
        // Position 0 vs tray 3 → distance 3 → travel 30.
        assert_eq!(schedule.result_for_order("A").unwrap().travel_time, 30.0);
    }

    #[test]
    fn test_sla_and_tardiness() {
        let orders = vec![Order::new("slow")
            .with_sku("SKU-0033")
            .with_quantity(50.0)
            .with_packing_time(2.0)];
        let schedule = decode(&orders, &single_lane_layout(), &Config::default());
        let r = schedule.result_for_order("slow").unwrap();
        // travel = 50 * 3 = 150; completion = 150 + 5 + 2 + 1 = 158.
        assert_eq!(r.completion_time, 158.0);
        assert_eq!(r.sla_deadline, 120.0);
        assert_eq!(r.tardiness, 38.0);
    }

    #[test]
    fn test_gridlock_warnings() {
        let orders: Vec<Order> = (0..10)
            .map(|i| Order::new(format!("O{i}")).with_sku("a"))
            .collect();
        let config = Config::default().with_umax(0.75);
        let schedule = decode(&orders, &single_lane_layout(), &config);
        // Orders 8, 9, 10 of 10 cross 0.75.
        assert_eq!(schedule.warnings.len(), 3);
        let w = &schedule.warnings[0];
        assert_eq!(w.utilization, 0.8);
        assert_eq!(w.threshold, 0.75);
        // Soft signal: all 10 orders still scheduled.
        assert_eq!(schedule.order_count(), 10);
    }

    #[test]
    fn test_lane_imbalance_two_lanes() {
        let layout = LaneLayout::new().with_lane(1, 0.0).with_lane(2, 0.0);
        // Lane 1 busy 38 (SKU-0033 qty 10, pack 2); lane 2 busy 14
        // (SKU-0033 qty 1: travel 3 + 5 + 5 + 1).
        let orders = vec![
            Order::new("heavy")
                .with_lane(1)
                .with_sku("SKU-0033")
                .with_quantity(10.0)
                .with_packing_time(2.0),
            Order::new("light").with_lane(2).with_sku("SKU-0033"),
        ];
        let config = Config::default().with_beta(0.5);
        let schedule = decode(&orders, &layout, &config);
        // mean = 26; |38-26| = |14-26| = 12; beta 0.5 → 6.
        assert_eq!(schedule.result_for_order("heavy").unwrap().lane_imbalance, 6.0);
        assert_eq!(schedule.result_for_order("light").unwrap().lane_imbalance, 6.0);
    }

    #[test]
    fn test_decoder_state_not_reused() {
        let orders = worked_example_orders();
        let layout = single_lane_layout();
        let config = Config::default();
        let first = decode(&orders, &layout, &config);
        let second = decode(&orders, &layout, &config);
        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn prop_completion_identity(
            quantity in 1.0f64..50.0,
            processing in 0.0f64..30.0,
            packing in 0.0f64..30.0,
            release in 0.0f64..200.0,
            lane in 1u32..5,
        ) {
            let orders = vec![Order::new("P")
                .with_sku("SKU-0145")
                .with_quantity(quantity)
                .with_processing_time(processing)
                .with_packing_time(packing)
                .with_release_time(release)
                .with_lane(lane)];
            let layout = LaneLayout::evenly_spaced(4, 10.0);
            let schedule = decode(&orders, &layout, &Config::default());
            let r = &schedule.results[0];
            let expected = r.start_time
                + r.travel_time
                + processing
                + packing
                + r.induction_time;
            prop_assert_eq!(r.completion_time, expected);
        }

        #[test]
        fn prop_tardiness_non_negative(
            quantity in 1.0f64..100.0,
            release in 0.0f64..300.0,
        ) {
            let orders = vec![Order::new("P")
                .with_sku("SKU-0033")
                .with_quantity(quantity)
                .with_release_time(release)];
            let schedule = decode(&orders, &single_lane_layout(), &Config::default());
            let r = &schedule.results[0];
            prop_assert!(r.tardiness >= 0.0);
            prop_assert_eq!(
                r.tardiness,
                (r.completion_time - r.sla_deadline).max(0.0)
            );
        }
    }
}
