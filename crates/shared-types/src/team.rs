use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── Validation constants ────────────────────────────────────────────

/// Departments that appoint one member each to an intervention team.
pub const DEPARTMENTS: &[&str] = &["POLICE", "DICE", "ADMINISTRATION"];

/// Per-department states over a formation's lifetime.
pub const TEAM_MEMBER_STATUSES: &[&str] = &["PENDING", "ACCEPTED", "REJECTED"];

/// Responses a department may record. `PENDING` is the initial state, not
/// a recordable response.
pub const TEAM_RESPONSES: &[&str] = &["ACCEPTED", "REJECTED"];

/// Check whether a department string is valid.
pub fn is_valid_department(s: &str) -> bool {
    DEPARTMENTS.contains(&s)
}

/// Check whether a response status string is a recordable team response.
pub fn is_valid_team_response(s: &str) -> bool {
    TEAM_RESPONSES.contains(&s)
}

// ── Team formation types ────────────────────────────────────────────

/// An intervention team assigned to a case: one appointee per department,
/// each tracking its own accept/reject response.
///
/// A formation only exists for an existing case, and each department
/// status transitions away from `PENDING` at most once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamFormation {
    pub id: String,
    pub case_id: String,
    pub police_person_id: String,
    pub dice_person_id: String,
    pub admin_person_id: String,
    pub formed_at: DateTime<Utc>,
    /// One of `TEAM_MEMBER_STATUSES`.
    pub police_status: String,
    pub dice_status: String,
    pub admin_status: String,
}

impl TeamFormation {
    /// Response status recorded for a department, if the department is known.
    pub fn department_status(&self, department: &str) -> Option<&str> {
        match department {
            "POLICE" => Some(&self.police_status),
            "DICE" => Some(&self.dice_status),
            "ADMINISTRATION" => Some(&self.admin_status),
            _ => None,
        }
    }

    /// Whether every department has accepted its appointment.
    pub fn is_fully_accepted(&self) -> bool {
        self.police_status == "ACCEPTED"
            && self.dice_status == "ACCEPTED"
            && self.admin_status == "ACCEPTED"
    }
}

// ── Request types ───────────────────────────────────────────────────

/// Request to form an intervention team for a case. All department
/// statuses start as `PENDING`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamFormationRequest {
    pub case_id: String,
    pub police_person_id: String,
    pub dice_person_id: String,
    pub admin_person_id: String,
}

/// Request to manually assign a team to a case. The case id travels in
/// the request path, not the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignTeamRequest {
    pub police_person_id: String,
    pub dice_person_id: String,
    pub admin_person_id: String,
}
