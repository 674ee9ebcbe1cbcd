//! Tracked device session entity model.
//!
//! A tracked session represents one run of the client app on one device.
//! It is opened by the device-credential path, without a bearer token, and
//! events reference it by id.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;
use uuid::Uuid;

/// One run of the tracked client app on one device.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TrackedSession {
    /// Unique session identifier.
    pub id: Uuid,
    /// The owning tenant.
    pub tenant_id: Uuid,
    /// The project the device authenticated against.
    pub project_id: Uuid,
    /// Bundle id supplied by the device credential.
    pub bundle_id: String,
    /// Device identifier supplied by the client.
    pub device_id: String,
    /// Client app version.
    pub app_version: String,
    /// When the session was opened.
    pub created_at: DateTime<Utc>,
    /// When the session expires.
    pub expires_at: DateTime<Utc>,
    /// Whether the session is active.
    pub is_active: bool,
}

/// Data required to open a tracked session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTrackedSession {
    /// The owning tenant (from the verified device credential).
    pub tenant_id: Uuid,
    /// The verified project.
    pub project_id: Uuid,
    /// Bundle id from the device credential.
    pub bundle_id: String,
    /// Device identifier.
    pub device_id: String,
    /// Client app version.
    pub app_version: String,
    /// When the session expires.
    pub expires_at: DateTime<Utc>,
}

/// Time window for session and event queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    /// Last 24 hours.
    #[serde(rename = "1d")]
    OneDay,
    /// Last 7 days.
    #[serde(rename = "1w")]
    OneWeek,
    /// Last 30 days.
    #[serde(rename = "1m")]
    OneMonth,
    /// Last 90 days.
    #[serde(rename = "3m")]
    ThreeMonths,
}

impl TimeRange {
    /// The start of the window, relative to `now`.
    pub fn since(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            Self::OneDay => now - Duration::days(1),
            Self::OneWeek => now - Duration::weeks(1),
            Self::OneMonth => now - Duration::days(30),
            Self::ThreeMonths => now - Duration::days(90),
        }
    }
}

impl FromStr for TimeRange {
    type Err = trackhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1d" => Ok(Self::OneDay),
            "1w" => Ok(Self::OneWeek),
            "1m" => Ok(Self::OneMonth),
            "3m" => Ok(Self::ThreeMonths),
            _ => Err(trackhub_core::AppError::validation(
                "Invalid time range. Use '1d', '1w', '1m', or '3m'",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_range_parsing() {
        assert_eq!("1d".parse::<TimeRange>().unwrap(), TimeRange::OneDay);
        assert_eq!("3m".parse::<TimeRange>().unwrap(), TimeRange::ThreeMonths);
        assert!("6m".parse::<TimeRange>().is_err());
        assert!("".parse::<TimeRange>().is_err());
    }

    #[test]
    fn test_time_range_window() {
        let now = Utc::now();
        assert_eq!(TimeRange::OneDay.since(now), now - Duration::days(1));
        assert_eq!(TimeRange::OneMonth.since(now), now - Duration::days(30));
    }
}
