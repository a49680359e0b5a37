use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

pub const CONTACT_SUCCESS_MESSAGE: &str = "Your message has been sent successfully!";

/// Seconds a health report is served from cache.
pub const HEALTH_CACHE_SECS: i64 = 5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_time_is_fixed_once_forced() {
        let forced = *Lazy::force(&START_TIME);
        assert!(forced <= Utc::now());
        assert_eq!(*START_TIME, forced);
    }
}
