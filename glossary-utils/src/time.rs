use std::time::{SystemTime, UNIX_EPOCH};

/// Return the current unix timestamp in seconds.
pub fn now_unix_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |duration| duration.as_secs())
}

/// Seconds elapsed between `then` and `now`, clamped at zero for clock skew.
pub fn elapsed_secs(then: u64, now: u64) -> u64 {
    now.saturating_sub(then)
}

#[cfg(test)]
mod tests {
    use super::elapsed_secs;

    #[test]
    fn elapsed_never_underflows() {
        assert_eq!(elapsed_secs(10, 25), 15);
        assert_eq!(elapsed_secs(25, 10), 0);
    }
}
