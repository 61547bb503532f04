//! Job entities as returned by the board's GraphQL queries.
//!
//! The listing and the detail view select different fields, so each
//! selection gets its own struct instead of one struct full of
//! optionals: [`JobSummary`] for list rows, [`Job`] for the full
//! detail.

use serde::{Deserialize, Serialize};

use crate::types::{CompanyId, JobId};

/// The `company { id name }` subset nested under a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRef {
    pub id: CompanyId,
    pub name: String,
}

/// One row of the job listing: `{ id title company { id name } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSummary {
    pub id: JobId,
    pub title: String,
    pub company: CompanyRef,
}

/// Full job detail, adding the (possibly null) description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub description: Option<String>,
    pub company: CompanyRef,
}

/// Input payload for the create-job mutation.
///
/// Serialized exactly as `{ "title": ..., "description": ... }`; the
/// server schema owns all validation, nothing is checked client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateJobInput {
    pub title: String,
    pub description: String,
}

impl CreateJobInput {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}
