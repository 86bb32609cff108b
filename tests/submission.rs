//! End-to-end submission scenarios, driven entirely through fake models so no
//! network is involved.

use fridge_chef::client::{FakeImageModel, FakeTextModel, TextModel};
use fridge_chef::{GeminiClient, GeminiConfig, GenerateError, Orchestrator, SubmissionState};

const TUSCAN_RECIPE: &str = r#"{
    "recipeName": "Tuscan Chicken Pasta",
    "description": "Seared chicken and ripe tomatoes over al dente pasta.",
    "prepTime": "15 minutes",
    "cookTime": "25 minutes",
    "servings": "4 servings",
    "ingredientsList": [
        {"item": "chicken breast", "quantity": "2 medium"},
        {"item": "tomatoes", "quantity": "4, diced"},
        {"item": "pasta", "quantity": "300g"}
    ],
    "instructions": [
        "Sear the chicken until golden.",
        "Simmer the tomatoes into a sauce.",
        "Toss with the cooked pasta."
    ],
    "chefTips": ["Salt the pasta water generously."]
}"#;

fn ingredients() -> Vec<String> {
    ["chicken breast", "tomatoes", "pasta"]
        .map(String::from)
        .to_vec()
}

#[tokio::test]
async fn successful_submission_yields_recipe_and_photo() {
    let text = FakeTextModel::with_response(TUSCAN_RECIPE);
    let image = FakeImageModel::with_image(vec![0xFF, 0xD8, 0xFF, 0xD9]);
    let (text_calls, image_calls) = (text.counter(), image.counter());
    let mut orchestrator = Orchestrator::new(Box::new(text), Box::new(image));

    let state = orchestrator.submit(&ingredients()).await;
    assert_eq!(state, SubmissionState::Success);
    assert!(orchestrator.error().is_none());
    assert_eq!(text_calls.get(), 1);
    assert_eq!(image_calls.get(), 1);

    let result = orchestrator.result().expect("success carries a result");
    assert_eq!(result.recipe.recipe_name, "Tuscan Chicken Pasta");
    assert_eq!(result.recipe.instructions.len(), 3);
    let uri = result.image_data_uri.as_deref().expect("photo generated");
    assert!(uri.starts_with("data:image/jpeg;base64,"));
}

#[tokio::test]
async fn fenced_response_succeeds_like_the_unfenced_one() {
    let fenced = format!("```json\n{TUSCAN_RECIPE}\n```");
    let mut orchestrator = Orchestrator::new(
        Box::new(FakeTextModel::with_response(fenced)),
        Box::new(FakeImageModel::sample()),
    );

    assert_eq!(
        orchestrator.submit(&ingredients()).await,
        SubmissionState::Success
    );
    let result = orchestrator.result().unwrap();
    assert_eq!(result.recipe.recipe_name, "Tuscan Chicken Pasta");
}

#[tokio::test]
async fn empty_submission_stays_idle_and_calls_nothing() {
    let text = FakeTextModel::with_response(TUSCAN_RECIPE);
    let image = FakeImageModel::sample();
    let (text_calls, image_calls) = (text.counter(), image.counter());
    let mut orchestrator = Orchestrator::new(Box::new(text), Box::new(image));

    let state = orchestrator.submit(&[]).await;
    assert_eq!(state, SubmissionState::Idle);
    assert_eq!(
        orchestrator.error().map(ToString::to_string),
        Some("Please add at least one ingredient.".to_string())
    );
    assert!(orchestrator.result().is_none());
    assert_eq!(text_calls.get(), 0);
    assert_eq!(image_calls.get(), 0);
}

#[tokio::test]
async fn missing_credential_fails_without_a_network_call() {
    // No api_key, and a base URL that would refuse connections anyway: the
    // client must fail fast on the credential check.
    let config = GeminiConfig {
        api_base: "http://127.0.0.1:9".to_string(),
        ..GeminiConfig::default()
    };
    let client = GeminiClient::new(config).unwrap();
    let mut orchestrator = Orchestrator::new(Box::new(client.clone()), Box::new(client));

    let state = orchestrator.submit(&ingredients()).await;
    assert_eq!(state, SubmissionState::Failed);
    let err = orchestrator.error().expect("failure carries an error");
    assert!(matches!(err, GenerateError::MissingApiKey));
    assert_eq!(
        err.to_string(),
        "API Key is missing. Please set the GEMINI_API_KEY environment variable."
    );
}

#[tokio::test]
async fn text_failure_reports_the_api_error_and_skips_the_image() {
    let image = FakeImageModel::sample();
    let image_calls = image.counter();
    let mut orchestrator = Orchestrator::new(
        Box::new(FakeTextModel::with_api_error(500, "model unavailable")),
        Box::new(image),
    );

    assert_eq!(
        orchestrator.submit(&ingredients()).await,
        SubmissionState::Failed
    );
    assert!(matches!(
        orchestrator.error(),
        Some(GenerateError::Api { status: 500, .. })
    ));
    assert_eq!(image_calls.get(), 0);
}

#[tokio::test]
async fn no_image_data_still_shows_the_recipe() {
    let mut orchestrator = Orchestrator::new(
        Box::new(FakeTextModel::with_response(TUSCAN_RECIPE)),
        Box::new(FakeImageModel::empty()),
    );

    assert_eq!(
        orchestrator.submit(&ingredients()).await,
        SubmissionState::Success
    );
    let result = orchestrator.result().unwrap();
    assert_eq!(result.recipe.recipe_name, "Tuscan Chicken Pasta");
    assert!(result.image_data_uri.is_none());
}

#[tokio::test]
async fn sample_payload_exercises_the_sanitizer() {
    // The canned dry-run payload is deliberately fenced; it must flow through
    // the same pipeline as a real response.
    let model = FakeTextModel::sample();
    let raw = model.generate_text("any prompt").await.unwrap();
    assert!(raw.starts_with("```json"));

    let mut orchestrator = Orchestrator::new(
        Box::new(FakeTextModel::sample()),
        Box::new(FakeImageModel::sample()),
    );
    assert_eq!(
        orchestrator.submit(&ingredients()).await,
        SubmissionState::Success
    );
}
