use chrono::{DateTime, FixedOffset, Utc};

use crate::errors::AppError;

/// Offset the provider expects `send_at` in (UTC+3, East Africa Time).
pub const SEND_AT_OFFSET_SECS: i32 = 3 * 3600;

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Formats `now` as `YYYY-MM-DDTHH:MM:SS+03:00` regardless of the host timezone.
pub fn format_send_at(now: DateTime<Utc>) -> Result<String, AppError> {
    let offset = FixedOffset::east_opt(SEND_AT_OFFSET_SECS)
        .ok_or_else(|| AppError::Config(format!("invalid UTC offset: {SEND_AT_OFFSET_SECS}s")))?;

    // %:z yields "+03:00"; plain %z would give "+0300"
    Ok(now
        .with_timezone(&offset)
        .format("%Y-%m-%dT%H:%M:%S%:z")
        .to_string())
}
