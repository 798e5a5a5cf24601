//! Keyed lookup table mapping a vehicle id to its parked node: polynomial
//! rolling hash with `P = 17`, separate chaining, `M = n_spots` buckets,
//! rather than `std::collections::HashMap`.
//!
//! The hash is computed with the modulus folded into every step
//! (`h = (h*P + c) mod M`) rather than once at the end, which is
//! arithmetically identical for the final result but avoids signed overflow
//! accumulating over long keys before a single trailing `% m`.

use pk_core::NodeId;

const P: i64 = 17;

pub struct VehicleRegistry {
    m: usize,
    buckets: Vec<Vec<(String, NodeId)>>,
}

impl VehicleRegistry {
    /// `m` is the bucket count, normally `n_spots`; a configuration with no
    /// spots at all still gets one bucket so hashing never divides by zero.
    pub fn new(m: usize) -> Self {
        let m = m.max(1);
        Self { m, buckets: vec![Vec::new(); m] }
    }

    fn hash(&self, key: &str) -> usize {
        let mut h: i64 = 0;
        for c in key.bytes() {
            h = (h * P + c as i64).rem_euclid(self.m as i64);
        }
        h as usize
    }

    /// Records that `key` is parked at `node`. Does not check for an
    /// existing entry under the same key; a later lookup finds the most
    /// recent insert first, matching the original's prepend-on-collision
    /// chaining.
    pub fn insert(&mut self, key: &str, node: NodeId) {
        let h = self.hash(key);
        self.buckets[h].insert(0, (key.to_string(), node));
    }

    pub fn get(&self, key: &str) -> Option<NodeId> {
        let h = self.hash(key);
        self.buckets[h].iter().find(|(k, _)| k == key).map(|(_, n)| *n)
    }

    /// Removes `key`'s entry, if any, returning its node. Unlike the
    /// original hash table this is modelled on, entries are removed on
    /// departure-by-id so a later departure for the same id reports
    /// `UnknownVehicle` instead of silently re-clearing an already-cleared
    /// spot.
    pub fn remove(&mut self, key: &str) -> Option<NodeId> {
        let h = self.hash(key);
        let bucket = &mut self.buckets[h];
        let idx = bucket.iter().position(|(k, _)| k == key)?;
        Some(bucket.remove(idx).1)
    }
}
