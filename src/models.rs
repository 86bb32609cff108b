use serde::{Deserialize, Serialize};

/// One line of the generated ingredient list. Both fields are free text;
/// quantities like "2 cups" or "a pinch" are accepted verbatim.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct RecipeIngredient {
    pub item: String,
    pub quantity: String,
}

/// A structured recipe as returned by the text model.
///
/// Field names match the JSON shape the prompt demands, so this deserializes
/// directly from the model's payload. `recipe_name`, `ingredients_list` and
/// `instructions` are the load-bearing fields; the rest default to empty if
/// the model leaves them out.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(default)]
    pub recipe_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub prep_time: String,
    #[serde(default)]
    pub cook_time: String,
    #[serde(default)]
    pub servings: String,
    #[serde(default)]
    pub ingredients_list: Vec<RecipeIngredient>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chef_tips: Option<Vec<String>>,
}

impl Recipe {
    /// Name of the first required field that is missing or empty, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.recipe_name.trim().is_empty() {
            Some("recipeName")
        } else if self.ingredients_list.is_empty() {
            Some("ingredientsList")
        } else if self.instructions.is_empty() {
            Some("instructions")
        } else {
            None
        }
    }
}

/// The outcome of one successful submission: a recipe, plus the photo of the
/// dish as a `data:image/jpeg;base64,...` URI when image generation worked.
#[derive(Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct GeneratedRecipe {
    pub recipe: Recipe,
    pub image_data_uri: Option<String>,
}

impl std::fmt::Debug for GeneratedRecipe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratedRecipe")
            .field("recipe", &self.recipe)
            .field(
                "image_data_uri",
                &self.image_data_uri.as_ref().map(|uri| uri.len()),
            )
            .finish()
    }
}
