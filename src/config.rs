use std::time::Duration;

pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash-preview-04-17";
pub const DEFAULT_IMAGE_MODEL: &str = "imagen-3.0-generate-002";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Connection settings for the generative endpoints.
///
/// Constructed explicitly and handed to the client, rather than read from a
/// process-wide singleton, so tests can supply fake credentials and the CLI
/// can point at a different base URL.
#[derive(Clone, Debug)]
pub struct GeminiConfig {
    /// API key; `None` makes every generation call fail fast without a
    /// network attempt.
    pub api_key: Option<String>,
    pub text_model: String,
    pub image_model: String,
    pub api_base: String,
    /// Upper bound on each remote call. A hung call fails the submission
    /// instead of leaving it stuck in Submitting.
    pub timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(90),
        }
    }
}

impl GeminiConfig {
    /// Load the configuration from the environment (and `.env` if present).
    ///
    /// `GEMINI_API_KEY` supplies the credential; `GEMINI_TEXT_MODEL`,
    /// `GEMINI_IMAGE_MODEL` and `GEMINI_API_BASE` override the defaults.
    /// A missing key is logged here and reported when a call is attempted.
    pub fn from_env() -> Self {
        let api_key = dotenvy::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty());
        if api_key.is_none() {
            tracing::warn!("GEMINI_API_KEY not set; generation calls will fail");
        }
        let defaults = Self::default();
        Self {
            api_key,
            text_model: dotenvy::var("GEMINI_TEXT_MODEL").unwrap_or(defaults.text_model),
            image_model: dotenvy::var("GEMINI_IMAGE_MODEL").unwrap_or(defaults.image_model),
            api_base: dotenvy::var("GEMINI_API_BASE").unwrap_or(defaults.api_base),
            timeout: defaults.timeout,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}
