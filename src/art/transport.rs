use crate::{
    config::ArtConfig,
    error::{ArtError, Result},
    models::ArtGenerationRequest,
};
use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client,
};

/// Status code and raw body of one provider call. The body is kept as text
/// so failures can pass the provider's message through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// The two calls of the provider's async operation protocol.
#[async_trait]
pub trait ArtTransport: Send + Sync {
    async fn create_generation(&self, request: &ArtGenerationRequest) -> Result<HttpReply>;

    async fn fetch_operation(&self, operation_id: &str) -> Result<HttpReply>;
}

#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    generation_url: String,
    operations_url: String,
}

impl HttpTransport {
    pub fn new(config: &ArtConfig) -> Result<Self> {
        let client = Client::builder()
            .default_headers(build_headers(&config.api_key)?)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ArtError::Unexpected(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            generation_url: config.generation_url.clone(),
            operations_url: config.operations_url.trim_end_matches('/').to_string(),
        })
    }

    async fn into_reply(response: reqwest::Response) -> Result<HttpReply> {
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpReply { status, body })
    }
}

fn build_headers(api_key: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    let auth = HeaderValue::from_str(&format!("Api-Key {}", api_key))
        .map_err(|_| ArtError::Validation("API key contains invalid header characters".into()))?;
    headers.insert(AUTHORIZATION, auth);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

#[async_trait]
impl ArtTransport for HttpTransport {
    async fn create_generation(&self, request: &ArtGenerationRequest) -> Result<HttpReply> {
        log::debug!("POST {}", self.generation_url);
        let response = self
            .client
            .post(&self.generation_url)
            .json(request)
            .send()
            .await?;
        Self::into_reply(response).await
    }

    async fn fetch_operation(&self, operation_id: &str) -> Result<HttpReply> {
        let url = format!("{}/{}", self.operations_url, operation_id);
        log::trace!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        Self::into_reply(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::REQUEST_TIMED_OUT;
    use std::time::Duration;
    use tokio::net::TcpListener;

    /// Accepts connections and holds them open without ever replying.
    async fn silent_server() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });
        format!("http://{}", address)
    }

    #[test]
    fn test_reply_status() {
        assert!(HttpReply::new(200, "{}").is_success());
        assert!(!HttpReply::new(401, "unauthorized").is_success());
        assert!(!HttpReply::new(500, "").is_success());
        assert!(!HttpReply::new(202, "accepted").is_success());
        assert!(!HttpReply::new(204, "").is_success());
    }

    #[test]
    fn test_headers() {
        let headers = build_headers("secret").unwrap();
        assert_eq!(headers[AUTHORIZATION], "Api-Key secret");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert!(build_headers("bad\nkey").is_err());
    }

    #[test]
    fn test_operations_url_trimmed() {
        let config = ArtConfig::new("key", "b1gfolder")
            .with_endpoints("http://localhost/gen", "http://localhost/operations/");
        let transport = HttpTransport::new(&config).unwrap();
        assert_eq!(transport.operations_url, "http://localhost/operations");
    }

    #[tokio::test]
    async fn test_unanswered_requests_time_out() {
        let base = silent_server().await;
        let config = ArtConfig::new("key", "b1gfolder")
            .with_endpoints(format!("{}/generate", base), format!("{}/operations", base))
            .with_request_timeout(Duration::from_millis(200));
        let transport = HttpTransport::new(&config).unwrap();

        let request = ArtGenerationRequest::new(config.model_uri(), "Logo for X", 1);
        let err = transport.create_generation(&request).await.unwrap_err();
        assert_eq!(err, ArtError::Timeout(REQUEST_TIMED_OUT.into()));

        let err = transport.fetch_operation("op-1").await.unwrap_err();
        assert_eq!(err, ArtError::Timeout(REQUEST_TIMED_OUT.into()));
    }
}
