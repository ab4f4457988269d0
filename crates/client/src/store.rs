use std::sync::Mutex;

use uuid::Uuid;

use shared_types::{sample_cases, ReportedCase};

use crate::error::ApiError;

/// Data access for the static-data path.
///
/// Views take this as an injected dependency instead of reaching into a
/// shared sample-data array, so the status resolver and the dashboard
/// can be exercised against deterministic fixtures with no network.
pub trait CaseStore {
    /// All cases, in insertion order.
    fn list(&self) -> Vec<ReportedCase>;
    fn get(&self, id: &str) -> Result<ReportedCase, ApiError>;
    /// Insert a case, assigning a fresh id when none is given. Returns
    /// the stored record.
    fn create(&self, case: ReportedCase) -> ReportedCase;
    /// Replace the case with the given id. The id on the record itself
    /// is ignored.
    fn update(&self, id: &str, case: ReportedCase) -> Result<ReportedCase, ApiError>;
    fn delete(&self, id: &str) -> Result<(), ApiError>;
}

/// In-memory [`CaseStore`] seeded from fixtures.
///
/// Failures carry the same [`ApiError`] shape the HTTP client produces,
/// so callers handle one error type on both data paths.
pub struct InMemoryCaseStore {
    cases: Mutex<Vec<ReportedCase>>,
}

impl InMemoryCaseStore {
    /// Empty store.
    pub fn empty() -> Self {
        Self::with_cases(Vec::new())
    }

    /// Store pre-seeded with the bundled sample records.
    pub fn with_sample_data() -> Self {
        Self::with_cases(sample_cases())
    }

    /// Store seeded with caller-provided fixtures.
    pub fn with_cases(cases: Vec<ReportedCase>) -> Self {
        Self {
            cases: Mutex::new(cases),
        }
    }

    fn not_found(id: &str) -> ApiError {
        // Mirrors the backend's wire behavior for a missing case.
        ApiError::Server {
            status: 404,
            message: format!("Case not found: {id}"),
        }
    }
}

impl Default for InMemoryCaseStore {
    fn default() -> Self {
        Self::with_sample_data()
    }
}

impl CaseStore for InMemoryCaseStore {
    fn list(&self) -> Vec<ReportedCase> {
        self.cases.lock().expect("case store lock poisoned").clone()
    }

    fn get(&self, id: &str) -> Result<ReportedCase, ApiError> {
        self.cases
            .lock()
            .expect("case store lock poisoned")
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    fn create(&self, mut case: ReportedCase) -> ReportedCase {
        if case.id.is_empty() {
            case.id = Uuid::new_v4().to_string();
        }
        let mut cases = self.cases.lock().expect("case store lock poisoned");
        cases.push(case.clone());
        case
    }

    fn update(&self, id: &str, mut case: ReportedCase) -> Result<ReportedCase, ApiError> {
        let mut cases = self.cases.lock().expect("case store lock poisoned");
        let existing = cases
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        case.id = id.to_string();
        *existing = case.clone();
        Ok(case)
    }

    fn delete(&self, id: &str) -> Result<(), ApiError> {
        let mut cases = self.cases.lock().expect("case store lock poisoned");
        let before = cases.len();
        cases.retain(|c| c.id != id);
        if cases.len() == before {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}
