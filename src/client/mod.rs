//! Clients for the hosted generative endpoints.
//!
//! The pipeline talks to the models through the two traits below so tests and
//! dry runs can swap in the in-process fakes from [`fake`].

pub mod fake;
mod gemini;

pub use fake::{FakeImageModel, FakeTextModel};
pub use gemini::GeminiClient;

use async_trait::async_trait;

use crate::errors::GenerateResult;

/// A text-generation endpoint.
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Send a prompt and return the raw text payload, JSON requested but not
    /// guaranteed. Sanitization and parsing are the caller's job.
    async fn generate_text(&self, prompt: &str) -> GenerateResult<String>;
}

/// An image-generation endpoint.
#[async_trait]
pub trait ImageModel: Send + Sync {
    /// Request a single JPEG image for the prompt and return its raw bytes.
    async fn generate_image(&self, prompt: &str) -> GenerateResult<Vec<u8>>;
}
