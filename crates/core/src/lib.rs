//! Domain types for the jobdeck job board.
//!
//! Pure data shapes shared by the GraphQL client and the listing view:
//!
//! - [`JobSummary`]: one row of the board listing.
//! - [`Job`]: full job detail including the description.
//! - [`Company`]: a company with its posted job lines.
//! - [`CreateJobInput`]: input payload for posting a new job.
//!
//! Each type mirrors one GraphQL selection, so a query deserializes
//! directly into the shape it asked for. Entities are immutable values
//! once fetched; the only way a new one appears is through the create
//! mutation.

pub mod company;
pub mod job;
pub mod types;

pub use company::{Company, CompanyJob};
pub use job::{CompanyRef, CreateJobInput, Job, JobSummary};
pub use types::{CompanyId, JobId};
