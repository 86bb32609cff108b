//! Turn a list of ingredients into a structured recipe and a photo of the
//! finished dish, using hosted generative text and image endpoints.
//!
//! The two calls run in causal sequence: the image prompt needs the recipe
//! name the text call produced. [`orchestrator::Orchestrator`] drives that
//! sequence and maps every failure onto [`errors::GenerateError`].

pub mod client;
pub mod config;
pub mod errors;
pub mod generation;
pub mod models;
pub mod orchestrator;

pub use client::{GeminiClient, ImageModel, TextModel};
pub use config::GeminiConfig;
pub use errors::{GenerateError, GenerateResult};
pub use models::{GeneratedRecipe, Recipe, RecipeIngredient};
pub use orchestrator::{Orchestrator, SubmissionState};
