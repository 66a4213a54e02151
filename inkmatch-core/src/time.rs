//! Timestamp utilities

use chrono::Utc;

/// Current time as Unix epoch milliseconds
pub fn epoch_millis() -> i64 {
    Utc::now().timestamp_millis()
}
