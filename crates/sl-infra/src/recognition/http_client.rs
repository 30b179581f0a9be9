//! Recognition service HTTP client
//!
//! `POST {endpoint}` with `{"image": "<base64 jpeg>"}`; the service answers
//! with `{"artworkRecognized": bool, "artworks": [...]}`.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use serde::Serialize;
use sl_core::capture::NormalizedImage;
use sl_core::ports::{RecognitionClientPort, RecognitionTransportError};
use sl_core::recognition::RecognitionResponse;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("storylens/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Serialize)]
struct RecognitionRequest {
    image: String,
}

/// Recognition client over HTTP/JSON.
pub struct HttpRecognitionClient {
    http_client: reqwest::Client,
    endpoint: String,
}

impl HttpRecognitionClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .context("build recognition http client")?;

        Ok(Self {
            http_client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl RecognitionClientPort for HttpRecognitionClient {
    async fn recognize(
        &self,
        image: NormalizedImage,
    ) -> Result<RecognitionResponse, RecognitionTransportError> {
        let request = RecognitionRequest {
            image: image.to_base64(),
        };
        drop(image);

        debug!(endpoint = %self.endpoint, payload_len = request.image.len(), "sending recognition request");

        let response = self
            .http_client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "recognition service rejected request");
            return Err(RecognitionTransportError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(transport_error)?;
        serde_json::from_slice::<RecognitionResponse>(&body)
            .map_err(|e| RecognitionTransportError::Decode(e.to_string()))
    }
}

fn transport_error(err: reqwest::Error) -> RecognitionTransportError {
    if err.is_timeout() {
        RecognitionTransportError::Timeout
    } else if err.is_decode() {
        RecognitionTransportError::Decode(err.to_string())
    } else {
        RecognitionTransportError::Connection(err.to_string())
    }
}
