pub mod image_client;
pub mod transport;

use crate::{config::ArtConfig, error::Result, models::GeneratedImage};
use async_trait::async_trait;

pub use image_client::{resolve_seed, ImageClient};
pub use transport::{ArtTransport, HttpReply, HttpTransport};

/// Anything that can turn a prompt and optional seed into an image.
/// Request handlers depend on this rather than on a concrete client.
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(&self, prompt: &str, seed: Option<i64>) -> Result<GeneratedImage>;
}

#[async_trait]
impl<T: ArtTransport> Generator for ImageClient<T> {
    async fn generate(&self, prompt: &str, seed: Option<i64>) -> Result<GeneratedImage> {
        ImageClient::generate(self, prompt, seed).await
    }
}

#[derive(Clone)]
pub struct ArtClient {
    image_client: ImageClient<HttpTransport>,
}

impl ArtClient {
    pub fn new(config: ArtConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::new(&config)?;

        Ok(Self {
            image_client: ImageClient::new(transport, config),
        })
    }

    pub fn image(&self) -> &ImageClient<HttpTransport> {
        &self.image_client
    }

    pub fn config(&self) -> &ArtConfig {
        self.image_client.config()
    }
}
