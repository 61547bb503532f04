//! The fixed GraphQL operation documents used by the typed accessors.
//!
//! Each accessor sends one of these as-is; the server schema owns all
//! validation. Selections stay minimal: the listing asks only for what
//! a board row renders, the detail queries add the description.

/// Board listing: every job with the company subset a row displays.
pub const JOBS_QUERY: &str = "\
query Jobs {
  jobs {
    id
    title
    company {
      id
      name
    }
  }
}";

/// Single job in full detail.
pub const JOB_QUERY: &str = "\
query Job($id: ID!) {
  job(id: $id) {
    id
    title
    description
    company {
      id
      name
    }
  }
}";

/// Single company with its posted job lines.
pub const COMPANY_QUERY: &str = "\
query Company($id: ID!) {
  company(id: $id) {
    id
    name
    description
    jobs {
      id
      title
    }
  }
}";

/// Create a new job.
///
/// The result is aliased to `job` so it has the exact shape of
/// [`JOB_QUERY`]'s payload; the gateway reuses that when seeding the
/// operation cache for the created job.
pub const CREATE_JOB_MUTATION: &str = "\
mutation CreateJob($input: CreateJobInput!) {
  job: createJob(input: $input) {
    id
    title
    description
    company {
      id
      name
    }
  }
}";
