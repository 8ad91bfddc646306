/// Deterministic 31-multiplier byte fold. The simulated inventory and
/// delivery-status oracles key off this, so it must be stable across runs
/// and platforms, which rules out `DefaultHasher`.
pub fn stable_hash(value: &str) -> u64 {
    value
        .bytes()
        .fold(0u64, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u64))
}
