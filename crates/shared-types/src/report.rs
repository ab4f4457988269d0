use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

// ── Recorded status vocabulary (static-data path) ───────────────────

/// Recorded status values used by the static-data iterations of the
/// dashboard. This three-value vocabulary is not interchangeable with
/// the backend's `CASE_STATUSES` and must never be conflated with it.
pub const REPORT_STATUSES: &[&str] = &["Reported", "Under Investigation", "Resolved"];

pub const STATUS_REPORTED: &str = "Reported";
pub const STATUS_UNDER_INVESTIGATION: &str = "Under Investigation";
pub const STATUS_RESOLVED: &str = "Resolved";

/// Display-only status for a reported case whose marriage date is still
/// in the future. Never persisted as a recorded status.
pub const STATUS_PENDING_INVESTIGATION: &str = "Pending Investigation";

/// Check whether a status string is a valid recorded report status.
pub fn is_valid_report_status(s: &str) -> bool {
    REPORT_STATUSES.contains(&s)
}

// ── Static-data record types ────────────────────────────────────────

/// Where a reported marriage is taking place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseLocation {
    pub village: String,
    pub district: String,
    pub state: String,
}

/// A demo-path case record carrying the marriage date that drives the
/// status resolver. Backend [`crate::case::Case`] records have no such
/// field, so the resolver applies only to this record type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportedCase {
    pub id: String,
    /// One of `REPORT_STATUSES`.
    pub status: String,
    pub location: CaseLocation,
    pub issue_date: DateTime<Utc>,
    /// Date of the impending marriage, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marriage_date: Option<DateTime<Utc>>,
    pub reporter_name: String,
    pub details: String,
}

// ── Fixtures ────────────────────────────────────────────────────────

/// Deterministic fixture records for the static-data views and tests.
/// Replaces the mutable module-level sample arrays of the prototype
/// iterations; views reach these through an injected store, never directly.
pub fn sample_cases() -> Vec<ReportedCase> {
    vec![
        ReportedCase {
            id: "CM-RJ-2024-001".to_string(),
            status: STATUS_UNDER_INVESTIGATION.to_string(),
            location: CaseLocation {
                village: "Alipur".to_string(),
                district: "Jaipur".to_string(),
                state: "Rajasthan".to_string(),
            },
            issue_date: utc(2024, 5, 10),
            marriage_date: Some(utc(2024, 5, 20)),
            reporter_name: "Asha Singh".to_string(),
            details: "A 15-year-old girl is being forced into marriage.".to_string(),
        },
        ReportedCase {
            id: "CM-AP-2024-002".to_string(),
            status: STATUS_RESOLVED.to_string(),
            location: CaseLocation {
                village: "Guntur".to_string(),
                district: "Guntur".to_string(),
                state: "Andhra Pradesh".to_string(),
            },
            issue_date: utc(2024, 4, 22),
            marriage_date: Some(utc(2024, 5, 1)),
            reporter_name: "Anonymous".to_string(),
            details: "The wedding was stopped before it took place.".to_string(),
        },
        ReportedCase {
            id: "CM-UP-2024-003".to_string(),
            status: STATUS_REPORTED.to_string(),
            location: CaseLocation {
                village: "Bari".to_string(),
                district: "Agra".to_string(),
                state: "Uttar Pradesh".to_string(),
            },
            issue_date: utc(2024, 5, 20),
            marriage_date: Some(utc(2024, 12, 15)),
            reporter_name: "Local NGO".to_string(),
            details: "Report of a planned child marriage for a 16-year-old.".to_string(),
        },
        ReportedCase {
            id: "CM-MP-2024-004".to_string(),
            status: STATUS_REPORTED.to_string(),
            location: CaseLocation {
                village: "Rewa".to_string(),
                district: "Rewa".to_string(),
                state: "Madhya Pradesh".to_string(),
            },
            issue_date: utc(2024, 5, 18),
            marriage_date: Some(utc(2024, 5, 25)),
            reporter_name: "School Teacher".to_string(),
            details: "A student has been absent; an arranged marriage is suspected."
                .to_string(),
        },
    ]
}

fn utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    // Fixture dates are compile-time constants; midnight UTC always exists.
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("valid fixture date")
}
