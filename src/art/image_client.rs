use crate::{
    art::transport::ArtTransport,
    config::ArtConfig,
    error::{ArtError, Result, GENERATION_TIMED_OUT},
    logger::timer,
    models::{ArtGenerationRequest, GeneratedImage, Operation},
    prompt::refine_prompt,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use rand::Rng;

/// Drives one text-to-image job: create the operation, then poll it until
/// it is done, failed, or the attempt budget runs out.
#[derive(Clone)]
pub struct ImageClient<T> {
    transport: T,
    config: ArtConfig,
}

/// Explicit seeds are used verbatim; otherwise a fresh random one is drawn.
pub fn resolve_seed(seed: Option<i64>) -> i64 {
    seed.unwrap_or_else(|| rand::thread_rng().gen_range(0..=i64::from(i32::MAX)))
}

impl<T: ArtTransport> ImageClient<T> {
    pub fn new(transport: T, config: ArtConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ArtConfig {
        &self.config
    }

    pub async fn generate(&self, prompt: &str, seed: Option<i64>) -> Result<GeneratedImage> {
        if prompt.trim().is_empty() {
            return Err(ArtError::Validation("prompt must not be empty".into()));
        }

        let _timer = timer("image generation");
        let seed = resolve_seed(seed);
        let request = ArtGenerationRequest::new(self.config.model_uri(), prompt, seed);

        log::info!("🎨 Submitting generation request (seed {})", seed);
        log::debug!("Prompt: {}", prompt);

        let reply = self.transport.create_generation(&request).await?;
        if !reply.is_success() {
            log::error!("Generation request rejected with status {}", reply.status);
            return Err(ArtError::Provider(format!(
                "failed to create generation request: {}",
                reply.body
            )));
        }

        let created: Operation = serde_json::from_str(&reply.body)?;
        let operation_id = created
            .operation_id()
            .ok_or_else(|| ArtError::Provider("no operation id".into()))?
            .to_string();

        log::info!("Operation {} created, polling for result", operation_id);
        self.poll(&operation_id, prompt, seed).await
    }

    /// Regenerates with `refinement` appended to `original_prompt`, reusing
    /// the seed so the composition stays close to the original image.
    pub async fn refine(
        &self,
        original_prompt: &str,
        refinement: &str,
        seed: Option<i64>,
    ) -> Result<GeneratedImage> {
        let prompt = refine_prompt(original_prompt, refinement)?;
        self.generate(&prompt, seed).await
    }

    async fn poll(&self, operation_id: &str, prompt: &str, seed: i64) -> Result<GeneratedImage> {
        for attempt in 1..=self.config.max_poll_attempts {
            tokio::time::sleep(self.config.poll_interval).await;

            let reply = self.transport.fetch_operation(operation_id).await?;
            if !reply.is_success() {
                log::error!(
                    "Status check for {} failed with status {}",
                    operation_id,
                    reply.status
                );
                return Err(ArtError::Provider(format!(
                    "failed to check operation status: {}",
                    reply.body
                )));
            }

            let operation: Operation = serde_json::from_str(&reply.body)?;
            if operation.done {
                log::debug!("Operation {} done after {} checks", operation_id, attempt);
                return finish(operation, prompt, seed);
            }

            log::debug!(
                "Operation {} pending ({}/{})",
                operation_id,
                attempt,
                self.config.max_poll_attempts
            );
        }

        log::warn!(
            "Operation {} not done after {} checks",
            operation_id,
            self.config.max_poll_attempts
        );
        Err(ArtError::Timeout(GENERATION_TIMED_OUT.into()))
    }
}

fn finish(operation: Operation, prompt: &str, seed: i64) -> Result<GeneratedImage> {
    if let Some(error) = &operation.error {
        return Err(ArtError::Provider(format!("generation failed: {}", error)));
    }

    let image = operation
        .image()
        .ok_or_else(|| ArtError::Provider("image not found in response".into()))?;

    if STANDARD.decode(image.trim()).is_err() {
        return Err(ArtError::Provider("image payload is not valid base64".into()));
    }

    log::info!("✅ Image ready ({} base64 chars)", image.len());
    Ok(GeneratedImage {
        image: image.to_string(),
        seed,
        prompt: prompt.to_string(),
    })
}
