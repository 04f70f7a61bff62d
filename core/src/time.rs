//! Time related utils.

use chrono::Utc;

/// Milliseconds since the unix epoch, as the API's `timestamp` parameter
/// expects.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_millis_is_millisecond_scale() {
        let ts = now_millis();
        // 2020-01-01 in ms; anything below is seconds resolution by mistake.
        assert!(ts > 1_577_836_800_000);
    }
}
