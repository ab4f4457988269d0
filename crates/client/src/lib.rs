//! Data-access layer for the case-management dashboard: a typed REST
//! client for the case/team backend plus the in-memory fixture store
//! backing the static-data views.

pub mod api;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod store;

pub use api::CaseApi;
pub use error::ApiError;
pub use store::{CaseStore, InMemoryCaseStore};
