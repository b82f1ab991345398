use crate::domain::model::{ApiResponse, GenerateResponse, NameRequest};
use crate::domain::ports::NameApi;
use crate::utils::error::{FormError, Result};
use async_trait::async_trait;
use reqwest::Client;

pub struct HttpNameApi {
    client: Client,
    endpoint: String,
}

impl HttpNameApi {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl NameApi for HttpNameApi {
    async fn generate(&self, request: &NameRequest) -> Result<GenerateResponse> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self.client.post(&self.endpoint).json(request).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(FormError::StatusError {
                status: status.as_u16(),
            });
        }

        let body: ApiResponse = response.json().await?;
        Ok(body.normalize())
    }
}
