//! The recipe-generation pipeline: prompt construction, response
//! sanitization, parsing and structural validation.

use base64::Engine;

use crate::client::{ImageModel, TextModel};
use crate::errors::{GenerateError, GenerateResult};
use crate::models::Recipe;

/// Delimiter for ingredient lists inside prompts.
const INGREDIENT_DELIMITER: &str = ", ";

/// How many ingredients the image prompt mentions. More than this adds prompt
/// noise without changing the picture much.
pub const IMAGE_PROMPT_INGREDIENT_LIMIT: usize = 5;

/// Build the recipe prompt for a list of ingredients.
pub fn recipe_prompt(ingredients: &[String]) -> String {
    include_str!("prompts/recipe.md").replace("{ingredients}", &ingredients.join(INGREDIENT_DELIMITER))
}

/// Build the photo prompt for a named dish and a short ingredient summary.
pub fn image_prompt(recipe_name: &str, ingredients_summary: &str) -> String {
    include_str!("prompts/illustrate.md")
        .replace("{name}", recipe_name)
        .replace("{ingredients}", ingredients_summary)
}

/// Summarize an ingredient list for the image prompt: the first
/// [`IMAGE_PROMPT_INGREDIENT_LIMIT`] entries, comma-joined.
pub fn ingredients_summary(ingredients: &[String]) -> String {
    ingredients[..ingredients.len().min(IMAGE_PROMPT_INGREDIENT_LIMIT)]
        .join(INGREDIENT_DELIMITER)
}

/// Strip a wrapping markdown code fence (with or without a `json` language
/// tag) from a model response.
///
/// The prompt forbids fences, but models wrap their output anyway often
/// enough that we tolerate it. Idempotent: an unfenced payload comes back
/// trimmed but otherwise untouched.
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let Some(body) = rest.strip_suffix("```") else {
        // Opening fence without a closing one; leave the payload alone and
        // let the JSON parser report it.
        return trimmed;
    };
    body.trim()
}

/// Generate a structured recipe from a non-empty ingredient list.
///
/// Runs the full pipeline: prompt → remote call → fence stripping → JSON
/// parse → structural validation. Parse failures and incomplete structures
/// are distinct errors; the raw payload goes to the log, never to the user.
pub async fn generate_recipe(
    model: &dyn TextModel,
    ingredients: &[String],
) -> GenerateResult<Recipe> {
    if ingredients.is_empty() {
        return Err(GenerateError::NoIngredients);
    }

    let prompt = recipe_prompt(ingredients);
    tracing::debug!(ingredients = ingredients.len(), "requesting recipe");
    let raw = model.generate_text(&prompt).await?;

    let payload = strip_code_fence(&raw);
    let recipe: Recipe = serde_json::from_str(payload).map_err(|e| {
        tracing::error!(%payload, error = %e, "recipe payload is not valid JSON");
        GenerateError::RecipeFormat(e)
    })?;

    if let Some(field) = recipe.missing_field() {
        tracing::error!(field, ?recipe, "recipe payload is missing a required field");
        return Err(GenerateError::IncompleteRecipe(field));
    }

    tracing::info!(recipe_name = %recipe.recipe_name, "generated recipe");
    Ok(recipe)
}

/// Generate a photo of the dish and return it as a
/// `data:image/jpeg;base64,...` URI, directly usable as an image source.
pub async fn generate_recipe_image(
    model: &dyn ImageModel,
    recipe_name: &str,
    ingredients_summary: &str,
) -> GenerateResult<String> {
    let prompt = image_prompt(recipe_name, ingredients_summary);
    let bytes = model.generate_image(&prompt).await?;
    if bytes.is_empty() {
        return Err(GenerateError::NoImageData);
    }
    tracing::info!(bytes = bytes.len(), "generated recipe image");
    Ok(format!(
        "data:image/jpeg;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(bytes)
    ))
}
