use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── Validation constants ────────────────────────────────────────────

/// Valid case status values assigned by the backend. The backend owns all
/// transitions; clients never write this field directly.
pub const CASE_STATUSES: &[&str] = &["OPEN", "IN_PROGRESS", "RESOLVED", "CLOSED"];

/// Check whether a status string is a valid backend case status.
pub fn is_valid_case_status(s: &str) -> bool {
    CASE_STATUSES.contains(&s)
}

// ── Backend record types ────────────────────────────────────────────

/// A child-marriage intervention case as stored by the backend.
///
/// The backend is authoritative for every field here; clients hold
/// read-only copies fetched per view-mount. Note this carries the
/// four-value `CASE_STATUSES` vocabulary, not the three-value recorded
/// status of the static-data path (see [`crate::report::ReportedCase`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    pub id: String,
    pub complainant_name: String,
    pub complainant_phone: String,
    pub case_address: String,
    pub district: String,
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reported_at: Option<DateTime<Utc>>,
    pub created_by: String,
    /// One of `CASE_STATUSES`.
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Investigation notes and evidence references, oldest first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_details: Option<Vec<CaseDetails>>,
}

/// An investigation note attached to a case, with an evidence reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseDetails {
    pub id: String,
    pub case_id: String,
    pub notes: String,
    pub evidence_path: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ── Request types ───────────────────────────────────────────────────

/// Request to report a new case. The backend assigns `id`, both
/// timestamps, and the initial `OPEN` status.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCaseRequest {
    pub complainant_name: String,
    pub complainant_phone: String,
    pub case_address: String,
    pub district: String,
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reported_at: Option<DateTime<Utc>>,
    pub created_by: String,
}

/// Request to update a case (all fields optional — only provided fields are changed).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCaseRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complainant_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complainant_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
