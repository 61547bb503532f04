//! Company entities as returned by the company detail query.

use serde::{Deserialize, Serialize};

use crate::types::{CompanyId, JobId};

/// A job line nested under a company: `jobs { id title }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyJob {
    pub id: JobId,
    pub title: String,
}

/// Company detail with its posted jobs in server-returned order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    pub description: Option<String>,
    pub jobs: Vec<CompanyJob>,
}
