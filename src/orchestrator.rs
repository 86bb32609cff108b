//! Sequencing of the two dependent generation calls, and the per-submission
//! state the UI renders from.

use crate::client::{ImageModel, TextModel};
use crate::errors::GenerateError;
use crate::generation::{generate_recipe, generate_recipe_image, ingredients_summary};
use crate::models::GeneratedRecipe;

/// Where a submission currently stands. `Success` and `Failed` are terminal
/// for one submission; the next `submit` starts over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Success,
    Failed,
}

/// Drives one submission at a time: text generation first, then image
/// generation fed from the text result.
///
/// Holds the latest result and error the way the form renders them: a failed
/// text step surfaces only an error, a failed image step still surfaces the
/// recipe (a recipe the user can cook beats an all-or-nothing failure; the
/// image error goes to the log).
pub struct Orchestrator {
    text: Box<dyn TextModel>,
    image: Box<dyn ImageModel>,
    state: SubmissionState,
    result: Option<GeneratedRecipe>,
    error: Option<GenerateError>,
}

impl Orchestrator {
    pub fn new(text: Box<dyn TextModel>, image: Box<dyn ImageModel>) -> Self {
        Self {
            text,
            image,
            state: SubmissionState::Idle,
            result: None,
            error: None,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn result(&self) -> Option<&GeneratedRecipe> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&GenerateError> {
        self.error.as_ref()
    }

    /// Run one submission to completion.
    ///
    /// An empty ingredient list is rejected before any remote call: the state
    /// stays `Idle` and [`Self::error`] carries the validation message.
    /// Otherwise the state passes through `Submitting` and ends in `Success`
    /// or `Failed`. Exclusive access (`&mut self`) is what keeps submissions
    /// from overlapping, mirroring the disabled submit control.
    pub async fn submit(&mut self, ingredients: &[String]) -> SubmissionState {
        if self.state == SubmissionState::Submitting {
            // Unreachable through &mut self, but cheap to state explicitly.
            return self.state;
        }
        if ingredients.is_empty() {
            self.error = Some(GenerateError::NoIngredients);
            self.state = SubmissionState::Idle;
            return self.state;
        }

        self.error = None;
        self.result = None;
        self.state = SubmissionState::Submitting;

        let recipe = match generate_recipe(self.text.as_ref(), ingredients).await {
            Ok(recipe) => recipe,
            Err(e) => {
                self.error = Some(e);
                self.state = SubmissionState::Failed;
                return self.state;
            }
        };

        let image_data_uri = if recipe.recipe_name.trim().is_empty() {
            // Validation should have caught this, but a nameless dish makes a
            // useless photo prompt. Keep the recipe, skip the image.
            tracing::warn!("recipe name missing, skipping image generation");
            None
        } else {
            let summary = ingredients_summary(ingredients);
            match generate_recipe_image(self.image.as_ref(), &recipe.recipe_name, &summary).await {
                Ok(uri) => Some(uri),
                Err(e) => {
                    tracing::warn!(error = %e, "image generation failed, showing recipe without image");
                    None
                }
            }
        };

        self.result = Some(GeneratedRecipe {
            recipe,
            image_data_uri,
        });
        self.state = SubmissionState::Success;
        self.state
    }
}
