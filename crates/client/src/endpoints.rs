//! Centralized REST paths consumed by [`crate::api::CaseApi`].
//!
//! Keeping every path in one place makes it cheap to version the API
//! surface without touching each call site.

/// Base path shared by every endpoint.
pub const API_BASE_PATH: &str = "/api";

// ── Case management ─────────────────────────────────────────────────

/// GET (list) and POST (create): `/api/cases`.
pub const CASES: &str = "/api/cases";

/// GET, PUT and DELETE on a single case: `/api/cases/{id}`.
pub fn case_by_id(case_id: &str) -> String {
    format!("{CASES}/{case_id}")
}

// ── Team formation ──────────────────────────────────────────────────

/// POST (create): `/api/team-formations`.
pub const TEAM_FORMATIONS: &str = "/api/team-formations";

/// GET a single formation: `/api/team-formations/{id}`.
pub fn team_formation_by_id(formation_id: &str) -> String {
    format!("{TEAM_FORMATIONS}/{formation_id}")
}

/// PUT a department response: `/api/team-formations/{id}/response`.
/// Department and status travel as query parameters.
pub fn team_formation_response(formation_id: &str) -> String {
    format!("{}/response", team_formation_by_id(formation_id))
}

// ── Manual intervention ─────────────────────────────────────────────

/// POST a manually assigned team: `/api/cases/{caseId}/team`.
pub fn manual_team_assignment(case_id: &str) -> String {
    format!("{}/team", case_by_id(case_id))
}
