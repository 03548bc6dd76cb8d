use std::time::{SystemTime, UNIX_EPOCH};

// wall-clock seed, only used when the caller did not supply one
pub fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
