//! Derives the scanner liveness shown on every page. The scanner is an
//! external process; the only signals it leaves behind are the
//! `last_checked` timestamps on searches and the `last_launch` system stat.

use chrono::NaiveDateTime;
use serde::Serialize;

/// Freshness window: activity younger than this counts as a running scan.
pub const ACTIVE_WINDOW_SECONDS: i64 = 600;

/// Timestamp format the scanner writes (`NOW()` / `CURRENT_TIMESTAMP`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScannerState {
    Active,
    Idle,
    Inactive,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScannerStatus {
    pub status: ScannerState,
    pub label: &'static str,
    pub color: &'static str,
    pub last_activity: Option<String>,
    pub last_launch: Option<String>,
}

/// Tri-state liveness evaluated against `now`:
/// never checked -> Inactive, checked within the window -> Active,
/// otherwise -> Idle. No hysteresis; nothing is persisted.
pub fn evaluate(
    last_activity: Option<String>,
    last_launch: Option<String>,
    now: NaiveDateTime,
) -> ScannerStatus {
    let parsed = last_activity
        .as_deref()
        .and_then(|raw| NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT).ok());

    let state = match parsed {
        None => ScannerState::Inactive,
        Some(checked) if (now - checked).num_seconds() < ACTIVE_WINDOW_SECONDS => {
            ScannerState::Active
        }
        Some(_) => ScannerState::Idle,
    };

    let (label, color) = match state {
        ScannerState::Active => ("Actif", "green"),
        ScannerState::Idle => ("En veille", "yellow"),
        ScannerState::Inactive => ("Inactif", "red"),
    };

    ScannerStatus {
        status: state,
        label,
        color,
        last_activity: parsed.map(|_| last_activity.unwrap_or_default()),
        last_launch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_opt(15, 9, 26)
            .unwrap()
    }

    fn stamp(offset_seconds: i64) -> String {
        (now() - Duration::seconds(offset_seconds))
            .format(TIMESTAMP_FORMAT)
            .to_string()
    }

    #[test]
    fn test_recent_activity_is_active() {
        let status = evaluate(Some(stamp(300)), None, now());
        assert_eq!(status.status, ScannerState::Active);
        assert_eq!(status.label, "Actif");
        assert_eq!(status.color, "green");
        assert!(status.last_activity.is_some());
    }

    #[test]
    fn test_stale_activity_is_idle() {
        let status = evaluate(Some(stamp(700)), None, now());
        assert_eq!(status.status, ScannerState::Idle);
        assert_eq!(status.label, "En veille");
        assert_eq!(status.color, "yellow");
    }

    #[test]
    fn test_never_checked_is_inactive() {
        let status = evaluate(None, Some("2026-03-14 08:00:00".to_string()), now());
        assert_eq!(status.status, ScannerState::Inactive);
        assert_eq!(status.label, "Inactif");
        assert_eq!(status.color, "red");
        assert!(status.last_activity.is_none());
        assert_eq!(status.last_launch.as_deref(), Some("2026-03-14 08:00:00"));
    }

    #[test]
    fn test_window_boundary_is_exclusive() {
        // Exactly 600 seconds old is no longer "active".
        let status = evaluate(Some(stamp(ACTIVE_WINDOW_SECONDS)), None, now());
        assert_eq!(status.status, ScannerState::Idle);

        let status = evaluate(Some(stamp(ACTIVE_WINDOW_SECONDS - 1)), None, now());
        assert_eq!(status.status, ScannerState::Active);
    }

    #[test]
    fn test_unparseable_timestamp_is_inactive() {
        let status = evaluate(Some("not-a-date".to_string()), None, now());
        assert_eq!(status.status, ScannerState::Inactive);
        assert!(status.last_activity.is_none());
    }
}
