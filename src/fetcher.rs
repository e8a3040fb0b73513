use async_trait::async_trait;
use serde_json::json;
use thiserror::Error;

use crate::models::EventsResponse;
use crate::query::build_query;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request for event {event_id} could not be completed: {source}")]
    Transport {
        event_id: i64,
        source: reqwest::Error,
    },
    #[error("Query failed for event {event_id} with status code: {status}")]
    RequestFailed { event_id: i64, status: u16 },
    #[error("Malformed response for event {event_id}: {source}")]
    MalformedResponse {
        event_id: i64,
        source: reqwest::Error,
    },
}

#[async_trait]
pub trait Fetcher {
    async fn fetch(&self, event_id: i64) -> Result<EventsResponse, FetchError>;
}

/// Fetches one event's tokens from the GraphQL endpoint. No retry: a failed
/// request is terminal for that event.
pub struct GraphQlFetcher {
    client: reqwest::Client,
    url: String,
}

impl GraphQlFetcher {
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }
}

#[async_trait]
impl Fetcher for GraphQlFetcher {
    async fn fetch(&self, event_id: i64) -> Result<EventsResponse, FetchError> {
        let query = build_query(event_id);
        let response = self
            .client
            .post(&self.url)
            .json(&json!({ "query": query }))
            .send()
            .await
            .map_err(|source| FetchError::Transport { event_id, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::RequestFailed {
                event_id,
                status: status.as_u16(),
            });
        }

        response
            .json::<EventsResponse>()
            .await
            .map_err(|source| FetchError::MalformedResponse { event_id, source })
    }
}
