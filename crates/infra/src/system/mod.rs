use chrono::{DateTime, Utc};
use rand::Rng;
use std::sync::Mutex;

// Mocking out time so that it is possible to run tests that depend on time.
pub trait ISys: Send + Sync {
    /// The current instant
    fn now(&self) -> DateTime<Utc>;
}

/// System that gets the real time and is used when not testing
pub struct RealSys {}
impl ISys for RealSys {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A frozen clock for tests.
pub struct StaticSys {
    pub now: DateTime<Utc>,
}
impl ISys for StaticSys {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

// Same idea as `ISys`: the alternative-time search draws random offsets, and
// tests need those draws to be deterministic.
pub trait IRandom: Send + Sync {
    /// A uniform draw from `[low, high]`, both ends inclusive
    fn int_in_range(&self, low: i64, high: i64) -> i64;
}

pub struct RealRandom {}
impl IRandom for RealRandom {
    fn int_in_range(&self, low: i64, high: i64) -> i64 {
        rand::thread_rng().gen_range(low..=high)
    }
}

/// Replays a fixed sequence of draws, then keeps returning `low`.
pub struct ScriptedRandom {
    values: Mutex<Vec<i64>>,
}

impl ScriptedRandom {
    pub fn new(values: Vec<i64>) -> Self {
        Self {
            values: Mutex::new(values),
        }
    }
}

impl IRandom for ScriptedRandom {
    fn int_in_range(&self, low: i64, high: i64) -> i64 {
        let mut values = self.values.lock().unwrap();
        if values.is_empty() {
            return low;
        }
        values.remove(0).max(low).min(high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_random_replays_and_clamps() {
        let rng = ScriptedRandom::new(vec![5, 100]);
        assert_eq!(rng.int_in_range(1, 24), 5);
        assert_eq!(rng.int_in_range(1, 24), 24);
        assert_eq!(rng.int_in_range(1, 24), 1);
    }

    #[test]
    fn real_random_respects_bounds() {
        let rng = RealRandom {};
        for _ in 0..50 {
            let draw = rng.int_in_range(1, 24);
            assert!((1..=24).contains(&draw));
        }
    }
}
