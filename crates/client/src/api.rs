use reqwest::Response;
use serde::de::DeserializeOwned;
use serde_json::Value;

use shared_types::{
    AssignTeamRequest, Case, CreateCaseRequest, CreateTeamFormationRequest, TeamFormation,
    UpdateCaseRequest,
};

use crate::config;
use crate::endpoints;
use crate::error::ApiError;

/// Message used when an error body exists but is not valid JSON.
const UNKNOWN_SERVER_ERROR: &str = "An unknown server error occurred.";

/// Typed client for the case/team REST backend.
///
/// One method per endpoint. Every call is a single request attempt — no
/// retries, no timeout layer, no cancellation — and every failure
/// surfaces as a normalized [`ApiError`].
#[derive(Debug, Clone)]
pub struct CaseApi {
    client: reqwest::Client,
    base_url: String,
}

impl CaseApi {
    /// Build a client against the given backend origin.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Build a client from the environment (see [`config::api_base_url`]).
    pub fn from_env() -> Self {
        Self::new(config::api_base_url())
    }

    /// Backend origin this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ── Case management ─────────────────────────────────────────────

    /// GET /api/cases
    #[tracing::instrument(skip(self))]
    pub async fn get_all_cases(&self) -> Result<Vec<Case>, ApiError> {
        let response = self.client.get(self.url(endpoints::CASES)).send().await?;
        read_json(response).await
    }

    /// GET /api/cases/{id}
    #[tracing::instrument(skip(self))]
    pub async fn get_case_by_id(&self, case_id: &str) -> Result<Case, ApiError> {
        let response = self
            .client
            .get(self.url(&endpoints::case_by_id(case_id)))
            .send()
            .await?;
        read_json(response).await
    }

    /// POST /api/cases
    ///
    /// The backend assigns the id, both timestamps, and the initial
    /// `OPEN` status.
    #[tracing::instrument(skip(self, case_data))]
    pub async fn create_case(&self, case_data: &CreateCaseRequest) -> Result<Case, ApiError> {
        let response = self
            .client
            .post(self.url(endpoints::CASES))
            .json(case_data)
            .send()
            .await?;
        read_json(response).await
    }

    /// PUT /api/cases/{id}
    #[tracing::instrument(skip(self, case_data))]
    pub async fn update_case(
        &self,
        case_id: &str,
        case_data: &UpdateCaseRequest,
    ) -> Result<Case, ApiError> {
        let response = self
            .client
            .put(self.url(&endpoints::case_by_id(case_id)))
            .json(case_data)
            .send()
            .await?;
        read_json(response).await
    }

    /// DELETE /api/cases/{id}
    ///
    /// A 204 response resolves successfully with no result value.
    #[tracing::instrument(skip(self))]
    pub async fn delete_case(&self, case_id: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url(&endpoints::case_by_id(case_id)))
            .send()
            .await?;
        read_no_content(response).await
    }

    // ── Team formation ──────────────────────────────────────────────

    /// POST /api/team-formations
    #[tracing::instrument(skip(self, team_data))]
    pub async fn create_team_formation(
        &self,
        team_data: &CreateTeamFormationRequest,
    ) -> Result<TeamFormation, ApiError> {
        let response = self
            .client
            .post(self.url(endpoints::TEAM_FORMATIONS))
            .json(team_data)
            .send()
            .await?;
        read_json(response).await
    }

    /// GET /api/team-formations/{id}
    #[tracing::instrument(skip(self))]
    pub async fn get_team_formation_by_id(
        &self,
        formation_id: &str,
    ) -> Result<TeamFormation, ApiError> {
        let response = self
            .client
            .get(self.url(&endpoints::team_formation_by_id(formation_id)))
            .send()
            .await?;
        read_json(response).await
    }

    /// PUT /api/team-formations/{id}/response?department={D}&status={S}
    ///
    /// Department and status travel as query parameters; the request has
    /// no body.
    #[tracing::instrument(skip(self))]
    pub async fn update_team_response(
        &self,
        formation_id: &str,
        department: &str,
        status: &str,
    ) -> Result<(), ApiError> {
        let response = self
            .client
            .put(self.url(&endpoints::team_formation_response(formation_id)))
            .query(&[("department", department), ("status", status)])
            .send()
            .await?;
        read_no_content(response).await
    }

    // ── Manual intervention ─────────────────────────────────────────

    /// POST /api/cases/{caseId}/team
    #[tracing::instrument(skip(self, team_data))]
    pub async fn manually_assign_team(
        &self,
        case_id: &str,
        team_data: &AssignTeamRequest,
    ) -> Result<TeamFormation, ApiError> {
        let response = self
            .client
            .post(self.url(&endpoints::manual_team_assignment(case_id)))
            .json(team_data)
            .send()
            .await?;
        read_json(response).await
    }
}

// ── Uniform response handling ───────────────────────────────────────

/// Parse a successful JSON body into `T`, or normalize the failure.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = check_status(response).await?;
    Ok(response.json().await?)
}

/// Accept any success status without reading a body (204 included).
async fn read_no_content(response: Response) -> Result<(), ApiError> {
    check_status(response).await.map(|_| ())
}

/// Pass 2xx responses through; turn anything else into
/// [`ApiError::Server`], preferring the backend's `error` message field.
async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = match response.json::<Value>().await {
        Ok(body) => body
            .get("error")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16())),
        // Error body absent or not valid JSON
        Err(_) => UNKNOWN_SERVER_ERROR.to_string(),
    };

    tracing::warn!(status = status.as_u16(), message = %message, "API request failed");
    Err(ApiError::Server {
        status: status.as_u16(),
        message,
    })
}
