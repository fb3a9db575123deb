//! Count-up animation for the hero statistics.
//!
//! The counter advances by `target / 30` every [`COUNT_UP_INTERVAL_MS`],
//! shows the floored running value, and lands exactly on `target`. Integer
//! arithmetic keeps the last frame exact for any target.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

pub const COUNT_UP_STEPS: u64 = 30;
pub const COUNT_UP_INTERVAL_MS: u64 = 30;

/// Value displayed after `step` ticks (1-based).
pub fn count_up_value(target: u64, step: u64) -> u64 {
    if step >= COUNT_UP_STEPS {
        return target;
    }
    target.saturating_mul(step) / COUNT_UP_STEPS
}

/// Every value shown by one animation run, in order. A zero target
/// finishes on the first tick.
pub fn count_up_frames(target: u64) -> Vec<u64> {
    if target == 0 {
        return vec![0];
    }
    (1..=COUNT_UP_STEPS).map(|step| count_up_value(target, step)).collect()
}
