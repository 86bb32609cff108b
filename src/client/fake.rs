//! In-process fake models for tests and `--dry` runs.
//!
//! Each fake returns a canned payload (or a canned failure) and counts how
//! often it was called, so tests can assert that a code path made zero calls.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use super::{ImageModel, TextModel};
use crate::errors::{GenerateError, GenerateResult};

/// A plausible recipe payload, deliberately wrapped in a markdown fence the
/// way a non-conforming model would return it, so dry runs exercise the
/// sanitizer too.
pub const SAMPLE_RECIPE_PAYLOAD: &str = r#"```json
{
  "recipeName": "Tuscan Chicken Pasta",
  "description": "Tender seared chicken tossed with pasta in a garlicky tomato sauce. A sunny weeknight dinner that tastes like it simmered all afternoon.",
  "prepTime": "15 minutes",
  "cookTime": "25 minutes",
  "servings": "4 servings",
  "ingredientsList": [
    {"item": "chicken breast", "quantity": "2 medium"},
    {"item": "tomatoes", "quantity": "4, diced"},
    {"item": "pasta", "quantity": "300g"}
  ],
  "instructions": [
    "Season the chicken and sear until golden, about 4 minutes per side.",
    "Cook the pasta in salted water until al dente.",
    "Simmer the tomatoes with garlic, slice the chicken, and toss everything together."
  ],
  "chefTips": ["Save a cup of pasta water to loosen the sauce."]
}
```"#;

/// Smallest valid JPEG-ish stand-in: the SOI/EOI marker bytes.
pub const SAMPLE_JPEG_BYTES: &[u8] = &[0xFF, 0xD8, 0xFF, 0xD9];

/// Shared call counter, cloneable before the fake is boxed away behind a
/// trait object so tests can still read it afterwards.
#[derive(Clone, Debug, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    fn increment(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

pub struct FakeTextModel {
    response: String,
    api_error: Option<(u16, String)>,
    calls: CallCounter,
}

impl FakeTextModel {
    /// Returns the given text for every prompt.
    pub fn with_response(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            api_error: None,
            calls: CallCounter::default(),
        }
    }

    /// Fails every call with [`GenerateError::Api`].
    pub fn with_api_error(status: u16, message: impl Into<String>) -> Self {
        Self {
            response: String::new(),
            api_error: Some((status, message.into())),
            calls: CallCounter::default(),
        }
    }

    /// Returns [`SAMPLE_RECIPE_PAYLOAD`].
    pub fn sample() -> Self {
        Self::with_response(SAMPLE_RECIPE_PAYLOAD)
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn counter(&self) -> CallCounter {
        self.calls.clone()
    }
}

#[async_trait]
impl TextModel for FakeTextModel {
    async fn generate_text(&self, _prompt: &str) -> GenerateResult<String> {
        self.calls.increment();
        match &self.api_error {
            Some((status, message)) => Err(GenerateError::Api {
                status: *status,
                message: message.clone(),
            }),
            None => Ok(self.response.clone()),
        }
    }
}

pub struct FakeImageModel {
    image: Option<Vec<u8>>,
    api_error: Option<(u16, String)>,
    calls: CallCounter,
}

impl FakeImageModel {
    /// Returns the given bytes for every prompt.
    pub fn with_image(image: impl Into<Vec<u8>>) -> Self {
        Self {
            image: Some(image.into()),
            api_error: None,
            calls: CallCounter::default(),
        }
    }

    /// Simulates an endpoint that returned zero usable images.
    pub fn empty() -> Self {
        Self {
            image: None,
            api_error: None,
            calls: CallCounter::default(),
        }
    }

    /// Fails every call with [`GenerateError::Api`].
    pub fn with_api_error(status: u16, message: impl Into<String>) -> Self {
        Self {
            image: None,
            api_error: Some((status, message.into())),
            calls: CallCounter::default(),
        }
    }

    /// Returns [`SAMPLE_JPEG_BYTES`].
    pub fn sample() -> Self {
        Self::with_image(SAMPLE_JPEG_BYTES)
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn counter(&self) -> CallCounter {
        self.calls.clone()
    }
}

#[async_trait]
impl ImageModel for FakeImageModel {
    async fn generate_image(&self, _prompt: &str) -> GenerateResult<Vec<u8>> {
        self.calls.increment();
        match (&self.api_error, &self.image) {
            (Some((status, message)), _) => Err(GenerateError::Api {
                status: *status,
                message: message.clone(),
            }),
            (None, Some(image)) => Ok(image.clone()),
            (None, None) => Err(GenerateError::NoImageData),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn counts_calls() {
        let model = FakeTextModel::with_response("hello");
        assert_eq!(model.calls(), 0);
        assert_eq!(model.generate_text("a prompt").await.unwrap(), "hello");
        let _ = model.generate_text("another").await;
        assert_eq!(model.calls(), 2);
    }

    #[tokio::test]
    async fn api_error_fake_reports_status() {
        let model = FakeImageModel::with_api_error(503, "overloaded");
        match model.generate_image("a prompt").await.unwrap_err() {
            GenerateError::Api { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "overloaded");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_image_fake_reports_no_image_data() {
        let model = FakeImageModel::empty();
        assert!(matches!(
            model.generate_image("a prompt").await.unwrap_err(),
            GenerateError::NoImageData
        ));
    }
}
