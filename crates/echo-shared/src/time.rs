//! Relative timestamps.

use chrono::{DateTime, Utc};

/// Coarse "how long ago" text: just now, minutes, hours, then days.
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - then).num_minutes();

    if minutes < 1 {
        return "刚刚".to_string();
    }
    if minutes < 60 {
        return format!("{minutes}分钟前");
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("{hours}小时前");
    }

    format!("{}天前", hours / 24)
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn test_buckets() {
        let now = Utc::now();
        assert_eq!(time_ago(now - Duration::seconds(30), now), "刚刚");
        assert_eq!(time_ago(now - Duration::minutes(5), now), "5分钟前");
        assert_eq!(time_ago(now - Duration::minutes(59), now), "59分钟前");
        assert_eq!(time_ago(now - Duration::hours(2), now), "2小时前");
        assert_eq!(time_ago(now - Duration::hours(23), now), "23小时前");
        assert_eq!(time_ago(now - Duration::hours(24), now), "1天前");
        assert_eq!(time_ago(now - Duration::days(9), now), "9天前");
    }

    #[test]
    fn test_future_timestamp_is_just_now() {
        let now = Utc::now();
        assert_eq!(time_ago(now + Duration::minutes(3), now), "刚刚");
    }
}
