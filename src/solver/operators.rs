//! Destroy and repair operators.
//!
//! One fixed operator pair: uniform random removal and full reshuffle.
//! The repair step deliberately re-randomizes the whole remaining
//! sequence rather than reinserting the removed orders — the decoder's
//! release-time sort absorbs most of the ordering anyway, and the
//! removal is what actually changes which orders compete for lanes.

use rand::seq::index::sample;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Config, Order};

/// Draws the number of orders to remove: uniform in
/// `[destroy_min, destroy_max]`, clamped to the candidate size.
pub fn draw_destroy_count<R: Rng>(candidate_len: usize, config: &Config, rng: &mut R) -> usize {
    if candidate_len == 0 {
        return 0;
    }
    let k = rng.random_range(config.destroy_min..=config.destroy_max);
    k.min(candidate_len)
}

/// Removes `k` distinct orders chosen uniformly at random.
pub fn destroy_random<R: Rng>(orders: &mut Vec<Order>, k: usize, rng: &mut R) {
    let k = k.min(orders.len());
    if k == 0 {
        return;
    }
    let mut removed: Vec<usize> = sample(rng, orders.len(), k).into_vec();
    // Remove back-to-front so earlier indices stay valid.
    removed.sort_unstable_by(|a, b| b.cmp(a));
    for idx in removed {
        orders.remove(idx);
    }
}

/// Uniformly reshuffles the remaining orders.
pub fn repair_shuffle<R: Rng>(orders: &mut [Order], rng: &mut R) {
    orders.shuffle(rng);
}
