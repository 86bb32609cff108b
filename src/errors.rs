pub type GenerateResult<T> = std::result::Result<T, GenerateError>;

/// Everything that can go wrong between "submit" and a finished recipe.
///
/// Each failure class gets its own variant so callers can branch on kind
/// instead of inspecting message text. The `Display` strings double as the
/// user-facing messages; raw model payloads are only ever written to the log.
#[derive(thiserror::Error, Debug)]
pub enum GenerateError {
    #[error("API Key is missing. Please set the GEMINI_API_KEY environment variable.")]
    MissingApiKey,

    #[error("Please add at least one ingredient.")]
    NoIngredients,

    #[error("Failed to reach the recipe service: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("The recipe service returned an error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("The AI returned an unexpected recipe format. Please try again or adjust your ingredients.")]
    RecipeFormat(#[source] serde_json::Error),

    #[error("The AI returned an incomplete recipe structure. Please try again.")]
    IncompleteRecipe(&'static str),

    #[error("No image data received from the image service.")]
    NoImageData,
}
