use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use base64::Engine;
use clap::Parser;
use fridge_chef::client::{FakeImageModel, FakeTextModel};
use fridge_chef::{GeminiClient, GeminiConfig, GeneratedRecipe, Orchestrator, SubmissionState};
use tracing_subscriber::EnvFilter;

/// Generate a recipe (and a photo of the dish) from whatever is in the fridge
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Ingredients to cook with, one per argument
    ingredients: Vec<String>,
    /// Write the generated photo to this file as JPEG
    #[arg(short, long)]
    image_out: Option<PathBuf>,
    /// Dry run mode: use canned responses instead of calling the API
    #[arg(long)]
    dry: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let mut orchestrator = if args.dry {
        println!("Dry run mode enabled, using canned responses");
        Orchestrator::new(
            Box::new(FakeTextModel::sample()),
            Box::new(FakeImageModel::sample()),
        )
    } else {
        let client = GeminiClient::new(GeminiConfig::from_env())?;
        Orchestrator::new(Box::new(client.clone()), Box::new(client))
    };

    match orchestrator.submit(&args.ingredients).await {
        SubmissionState::Success => {}
        _ => match orchestrator.error() {
            Some(err) => bail!("{}", err),
            None => bail!("Submission did not complete"),
        },
    }

    let result = orchestrator
        .result()
        .context("Submission succeeded but produced no result")?;
    print_recipe(result);

    if let Some(path) = args.image_out {
        match &result.image_data_uri {
            Some(uri) => {
                let encoded = uri
                    .strip_prefix("data:image/jpeg;base64,")
                    .context("Unexpected image encoding")?;
                let bytes = base64::engine::general_purpose::STANDARD.decode(encoded)?;
                std::fs::write(&path, &bytes)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                println!("\nSaved photo to {} ({} bytes)", path.display(), bytes.len());
            }
            None => println!("\nNo photo was generated for this recipe."),
        }
    }

    Ok(())
}

/// Render the recipe in the order the form displays it.
fn print_recipe(result: &GeneratedRecipe) {
    let recipe = &result.recipe;
    println!("# {}", recipe.recipe_name);
    if !recipe.description.is_empty() {
        println!("\n{}", recipe.description);
    }
    println!(
        "\nPrep: {}  Cook: {}  Serves: {}",
        recipe.prep_time, recipe.cook_time, recipe.servings
    );

    println!("\nIngredients:");
    for ingredient in &recipe.ingredients_list {
        println!("  - {} {}", ingredient.quantity, ingredient.item);
    }

    println!("\nInstructions:");
    for (i, step) in recipe.instructions.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }

    if let Some(tips) = &recipe.chef_tips {
        println!("\nChef's tips:");
        for tip in tips {
            println!("  - {}", tip);
        }
    }
}
