use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use crate::{
    error::SubmitError,
    schemas::{PodcastRequest, PodcastResponse},
};

const GENERATE_PATH: &str = "generate_podcast/";

/// Something that turns a podcast request into a script and audio
#[async_trait]
pub trait PodcastBackend: Send + Sync {
    async fn generate_podcast(&self, req: &PodcastRequest) -> Result<PodcastResponse, SubmitError>;
}

/// Podcast backend reached over HTTP
pub struct HttpBackend {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpBackend {
    /// `base_url` is the backend root, with or without a trailing slash
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}/{GENERATE_PATH}", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PodcastBackend for HttpBackend {
    async fn generate_podcast(&self, req: &PodcastRequest) -> Result<PodcastResponse, SubmitError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(req)
            .send()
            .await
            .map_err(SubmitError::Transport)?;

        let status = resp.status();
        tracing::debug!("Podcast backend responded with {status}");

        if !status.is_success() {
            let body = resp.text().await.map_err(SubmitError::Transport)?;
            return Err(SubmitError::Status { status, body });
        }

        let bytes = resp.bytes().await.map_err(SubmitError::Transport)?;

        serde_json::from_slice(&bytes).map_err(|e| SubmitError::InvalidResponse(e.to_string()))
    }
}
