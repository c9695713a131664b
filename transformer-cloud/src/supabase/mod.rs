//! Supabase integration via the PostgREST API (no SDK dependency)

mod query;

pub use query::{Order, Query};

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Postgres SQLSTATE for unique_violation
const UNIQUE_VIOLATION: &str = "23505";

/// Supabase client error
#[derive(Debug, Error)]
pub enum SupabaseError {
    /// Transport failure (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status; body kept verbatim so it can be forwarded
    #[error("Supabase returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Success status but the body did not match the expected shape
    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type SupabaseResult<T> = Result<T, SupabaseError>;

impl SupabaseError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Parsed PostgREST error document, if the body carries one
    pub fn postgrest_error(&self) -> Option<PostgrestError> {
        match self {
            Self::Status { body, .. } => serde_json::from_str(body).ok(),
            _ => None,
        }
    }

    /// 409 caused by a unique constraint that involves `column`
    pub fn is_unique_violation(&self, column: &str) -> bool {
        if self.status() != Some(StatusCode::CONFLICT) {
            return false;
        }
        self.postgrest_error().is_some_and(|err| {
            err.code.as_deref() == Some(UNIQUE_VIOLATION) && err.mentions(column)
        })
    }
}

/// Error document returned by PostgREST on failure
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
pub struct PostgrestError {
    pub code: Option<String>,
    pub message: Option<String>,
    pub details: Option<String>,
    pub hint: Option<String>,
}

impl PostgrestError {
    fn mentions(&self, column: &str) -> bool {
        [&self.message, &self.details]
            .into_iter()
            .any(|field| field.as_deref().is_some_and(|text| text.contains(column)))
    }
}

/// Successful response, status and body exactly as Supabase sent them
#[derive(Debug, Clone, PartialEq)]
pub struct RestResponse {
    pub status: StatusCode,
    pub body: String,
}

impl RestResponse {
    pub fn json<T: DeserializeOwned>(&self) -> SupabaseResult<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// PostgREST client bound to one Supabase project
#[derive(Debug, Clone)]
pub struct PostgrestClient {
    client: Client,
    rest_url: String,
    api_key: String,
}

impl PostgrestClient {
    pub fn new(client: Client, base_url: &str, api_key: impl Into<String>) -> Self {
        Self {
            client,
            rest_url: format!("{}/rest/v1", base_url.trim_end_matches('/')),
            api_key: api_key.into(),
        }
    }

    /// `{base}/rest/v1/{table}`
    pub fn table_url(&self, table: &str) -> String {
        format!("{}/{table}", self.rest_url)
    }

    /// Request with the API-key headers and query attached
    fn request(&self, method: Method, table: &str, query: &Query) -> RequestBuilder {
        let mut request = self
            .client
            .request(method, self.table_url(table))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key);

        if !query.is_empty() {
            request = request.query(query.params());
        }
        request
    }

    /// GET, raw response
    pub async fn select(&self, table: &str, query: &Query) -> SupabaseResult<RestResponse> {
        tracing::debug!(table, query = %query, "Supabase select");
        Self::send(self.request(Method::GET, table, query)).await
    }

    /// GET, decoded into rows
    pub async fn select_rows<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &Query,
    ) -> SupabaseResult<Vec<T>> {
        self.select(table, query).await?.json()
    }

    /// POST with `Prefer: return=representation`
    pub async fn insert<B: Serialize + ?Sized>(
        &self,
        table: &str,
        body: &B,
    ) -> SupabaseResult<RestResponse> {
        tracing::debug!(table, "Supabase insert");
        let request = self
            .request(Method::POST, table, &Query::new())
            .header("Prefer", "return=representation")
            .json(body);
        Self::send(request).await
    }

    /// PATCH with `Prefer: return=representation`
    pub async fn update<B: Serialize + ?Sized>(
        &self,
        table: &str,
        query: &Query,
        body: &B,
    ) -> SupabaseResult<RestResponse> {
        tracing::debug!(table, query = %query, "Supabase update");
        let request = self
            .request(Method::PATCH, table, query)
            .header("Prefer", "return=representation")
            .json(body);
        Self::send(request).await
    }

    /// DELETE
    pub async fn delete(&self, table: &str, query: &Query) -> SupabaseResult<RestResponse> {
        tracing::debug!(table, query = %query, "Supabase delete");
        Self::send(self.request(Method::DELETE, table, query)).await
    }

    async fn send(request: RequestBuilder) -> SupabaseResult<RestResponse> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(SupabaseError::Status { status, body });
        }
        Ok(RestResponse { status, body })
    }
}
