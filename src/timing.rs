//! Pure timing model for loop-sortation orders.
//!
//! Computes travel, induction, and completion times from order attributes
//! and positions. Stateless — every function is a pure function of its
//! arguments, so the decoder can call them in any order.
//!
//! # Time Representation
//! All times are in minutes relative to a scheduling epoch (t=0).
//! The consumer defines what t=0 means (e.g., wave release, shift start).
//!
//! # SKU-derived quantities
//! Tray position and induction offset are derived from a *fixed* 64-bit
//! FNV-1a hash of the SKU identifier, not from the standard library's
//! `Hasher` (which is randomized per process). Two runs — or two
//! implementations — therefore agree bit-for-bit on every derived value.
//!
//! # Reference
//! Fowler/Noll/Vo, FNV-1a: <http://www.isthe.com/chongo/tech/comp/fnv/>

/// FNV-1a 64-bit offset basis.
const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;

/// FNV-1a 64-bit prime.
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Number of distinct tray positions on the sortation loop.
const TRAY_POSITIONS: u64 = 30;

/// Stable 64-bit FNV-1a hash over the SKU identifier's bytes.
///
/// This is the single source of every SKU-derived pseudo-random quantity
/// in the crate. Do not replace it with `DefaultHasher`: that hash is
/// seeded per process and would make schedules irreproducible.
pub fn sku_hash(sku: &str) -> u64 {
    let mut h = FNV_OFFSET;
    for &b in sku.as_bytes() {
        h ^= u64::from(b);
        h = h.wrapping_mul(FNV_PRIME);
    }
    h
}

/// Deterministic tray position for a SKU, in `[0, 30)`.
///
/// Maps the low bits of [`sku_hash`] onto the loop's tray coordinate
/// range. Orders for the same SKU always induct at the same position.
pub fn sku_position(sku: &str) -> f64 {
    (sku_hash(sku) % TRAY_POSITIONS) as f64
}

/// Deterministic induction offset for a SKU, in `{1, 2, 3}` minutes.
///
/// Uses the upper hash bits so the offset varies independently of the
/// tray position for SKUs that happen to share a position.
pub fn induction_minutes(sku: &str) -> f64 {
    (1 + ((sku_hash(sku) >> 32) % 3)) as f64
}

/// Travel time in minutes: `quantity * distance * distance_factor / lane_speed`.
///
/// `distance` is the absolute gap between the lane position and the SKU's
/// tray position; `distance_factor` scales physical distance to travel
/// effort (1.0 = one minute per unit distance per unit quantity at speed 1).
pub fn travel_minutes(quantity: f64, lane_speed: f64, distance: f64, distance_factor: f64) -> f64 {
    quantity * distance * distance_factor / lane_speed
}

/// Completion time: exact sum of start and every service component.
///
/// The decoder relies on this being an exact sum — no rounding — so that
/// `completion - start` recovers the service interval precisely.
pub fn completion_minutes(
    start: f64,
    travel: f64,
    processing: f64,
    packing: f64,
    induction: f64,
) -> f64 {
    start + travel + processing + packing + induction
}
