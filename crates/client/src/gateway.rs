//! HTTP gateway to the job board's GraphQL endpoint.
//!
//! [`Gateway`] wraps a single endpoint URL behind one primitive,
//! [`execute`](Gateway::execute), and a set of typed accessors that
//! each pair a fixed document from [`documents`](crate::documents) with
//! its variables and narrow the returned payload. Credentials and the
//! optional operation cache are injected at construction.

use std::sync::Arc;

use serde::Deserialize;

use jobdeck_core::{Company, CreateJobInput, Job, JobSummary};

use crate::auth::CredentialProvider;
use crate::cache::{CacheKey, OperationCache};
use crate::documents;
use crate::envelope::{GraphqlRequest, GraphqlResponse};
use crate::error::GatewayError;

/// Typed GraphQL client for one job-board endpoint.
pub struct Gateway {
    client: reqwest::Client,
    endpoint: String,
    credentials: Arc<dyn CredentialProvider>,
    cache: Option<Arc<OperationCache>>,
}

impl Gateway {
    /// Create a gateway for an endpoint, e.g. `http://host:9000/graphql`.
    ///
    /// The credential provider is asked for a token on every request;
    /// see [`Anonymous`](crate::auth::Anonymous) for logged-out use.
    pub fn new(endpoint: impl Into<String>, credentials: Arc<dyn CredentialProvider>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint, credentials)
    }

    /// Create a gateway reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across gateways).
    pub fn with_client(
        client: reqwest::Client,
        endpoint: impl Into<String>,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            credentials,
            cache: None,
        }
    }

    /// Attach an operation cache.
    ///
    /// Queries become read-through (a hit skips the network entirely)
    /// and a created job is seeded under the key its detail query will
    /// use.
    pub fn with_cache(mut self, cache: Arc<OperationCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// The configured endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    // -----------------------------------------------------------------
    // The execute primitive
    // -----------------------------------------------------------------

    /// Send one GraphQL operation and return its `data` payload.
    ///
    /// POSTs `{ query, variables }` to the endpoint, attaching
    /// `Authorization: Bearer <token>` only when the credential
    /// provider yields a token. The response is classified in order:
    ///
    /// 1. unparseable body -> [`GatewayError::Decode`]
    /// 2. non-empty `errors` -> [`GatewayError::Graphql`] with the
    ///    messages joined by newlines, regardless of HTTP status
    /// 3. non-2xx status -> [`GatewayError::HttpStatus`]
    /// 4. a `data` payload -> returned to the caller unmodified
    /// 5. neither -> [`GatewayError::MissingData`]
    pub async fn execute(
        &self,
        document: &str,
        variables: serde_json::Value,
    ) -> Result<serde_json::Value, GatewayError> {
        let request = GraphqlRequest::new(document, variables);

        let mut builder = self.client.post(&self.endpoint).json(&request);
        if let Some(token) = self.credentials.access_token().await {
            builder = builder.bearer_auth(token);
        }

        tracing::debug!(endpoint = %self.endpoint, "Executing GraphQL operation");
        let response = builder.send().await?;

        let status = response.status();
        let body = response.text().await?;
        let parsed: GraphqlResponse = serde_json::from_str(&body)?;

        if let Some(message) = parsed.combined_errors() {
            tracing::warn!(status = status.as_u16(), "GraphQL operation failed");
            return Err(GatewayError::Graphql { message });
        }

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "GraphQL endpoint returned an error status");
            return Err(GatewayError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        parsed.data.ok_or(GatewayError::MissingData)
    }

    // -----------------------------------------------------------------
    // Typed accessors
    // -----------------------------------------------------------------

    /// Fetch the board listing, in server-returned order.
    pub async fn list_jobs(&self) -> Result<Vec<JobSummary>, GatewayError> {
        let data = self
            .execute_query(documents::JOBS_QUERY, serde_json::json!({}))
            .await?;
        let payload: JobsPayload = serde_json::from_value(data)?;
        Ok(payload.jobs)
    }

    /// Fetch one job in full detail.
    ///
    /// A null payload means the server knows no such job and surfaces
    /// as [`GatewayError::NotFound`].
    pub async fn get_job(&self, id: &str) -> Result<Job, GatewayError> {
        let data = self
            .execute_query(documents::JOB_QUERY, serde_json::json!({ "id": id }))
            .await?;
        let payload: JobPayload = serde_json::from_value(data)?;
        payload.job.ok_or_else(|| GatewayError::NotFound {
            entity: "job",
            id: id.to_string(),
        })
    }

    /// Fetch one company with its posted job lines.
    pub async fn get_company(&self, id: &str) -> Result<Company, GatewayError> {
        let data = self
            .execute_query(documents::COMPANY_QUERY, serde_json::json!({ "id": id }))
            .await?;
        let payload: CompanyPayload = serde_json::from_value(data)?;
        payload.company.ok_or_else(|| GatewayError::NotFound {
            entity: "company",
            id: id.to_string(),
        })
    }

    /// Create a job and return it in full detail.
    ///
    /// Always goes to the network. On success the created job is
    /// written into the cache (when one is attached) under the same key
    /// a subsequent [`get_job`](Gateway::get_job) uses, so a follow-up
    /// read needs no round trip.
    pub async fn create_job(&self, input: CreateJobInput) -> Result<Job, GatewayError> {
        let variables = serde_json::json!({ "input": input });
        let data = self
            .execute(documents::CREATE_JOB_MUTATION, variables)
            .await?;
        let payload: JobPayload = serde_json::from_value(data)?;
        let job = payload.job.ok_or(GatewayError::MissingData)?;

        if let Some(cache) = &self.cache {
            let key = CacheKey::new(documents::JOB_QUERY, &serde_json::json!({ "id": job.id }));
            cache.put(key, serde_json::json!({ "job": job })).await;
        }

        tracing::info!(job_id = %job.id, "Job created");
        Ok(job)
    }

    // -----------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------

    /// Run a query read-through: serve from the cache when possible,
    /// otherwise fetch and store the payload before returning it.
    async fn execute_query(
        &self,
        document: &str,
        variables: serde_json::Value,
    ) -> Result<serde_json::Value, GatewayError> {
        let Some(cache) = &self.cache else {
            return self.execute(document, variables).await;
        };

        let key = CacheKey::new(document, &variables);
        if let Some(hit) = cache.get(&key).await {
            tracing::debug!("Operation served from cache");
            return Ok(hit);
        }

        let data = self.execute(document, variables).await?;
        cache.put(key, data.clone()).await;
        Ok(data)
    }
}

// ---------------------------------------------------------------------
// Response payload shapes
// ---------------------------------------------------------------------

/// `data` shape of the listing query.
#[derive(Deserialize)]
struct JobsPayload {
    jobs: Vec<JobSummary>,
}

/// `data` shape of the job detail query and the create mutation
/// (the mutation aliases its result to `job`).
#[derive(Deserialize)]
struct JobPayload {
    job: Option<Job>,
}

/// `data` shape of the company detail query.
#[derive(Deserialize)]
struct CompanyPayload {
    company: Option<Company>,
}
