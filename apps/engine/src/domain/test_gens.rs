// Proptest generators for domain types.

use proptest::prelude::*;

use crate::domain::{Zone, ZoneMap};

/// Generate a random Zone
pub fn zone() -> impl Strategy<Value = Zone> {
    prop_oneof![Just(Zone::Green), Just(Zone::Yellow), Just(Zone::Red)]
}

/// Per-zone counts with at least one card overall.
pub fn counts(max_per_zone: usize) -> impl Strategy<Value = ZoneMap<usize>> {
    (0..=max_per_zone, 0..=max_per_zone, 0..=max_per_zone)
        .prop_filter("round needs at least one card", |(g, y, r)| g + y + r > 0)
        .prop_map(|(g, y, r)| ZoneMap::new(g, y, r))
}

/// Random seed for round generation
pub fn seed() -> impl Strategy<Value = u64> {
    any::<u64>()
}
