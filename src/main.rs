use std::env;
use std::process;

use mealmatch::corpus::{MealDbClient, RecipeCorpusClient};
use mealmatch::{classify, AppConfig, RecipeAssistant, RecipeFinder, StructuredRecipe, MAX_INGREDIENT_SLOTS};

fn usage() -> ! {
    eprintln!("usage: mealmatch search <ingredient> [ingredient...]");
    eprintln!("       mealmatch chat <free text>");
    eprintln!("       mealmatch ingredients");
    process::exit(2);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        usage();
    };

    let config = AppConfig::load()?;

    match command.as_str() {
        "search" => {
            if rest.is_empty() {
                usage();
            }
            let finder = RecipeFinder::new(MealDbClient::new(&config.corpus), config.matching);
            let recipes = finder.search_by_ingredients(rest).await;
            if recipes.is_empty() {
                println!("No recipes found.");
            }
            for recipe in &recipes {
                print_recipe(recipe)?;
            }
        }
        "chat" => {
            if rest.is_empty() {
                usage();
            }
            let assistant = RecipeAssistant::from_config(&config)?;
            let reply = assistant.pantry_chat_turn(&rest.join(" ")).await;

            if let Some(text) = &reply.assistant_text {
                println!("{text}");
            }
            if !reply.recognized_terms.is_empty() {
                println!("Recognized ingredients: {}", reply.recognized_terms.join(", "));
            }
            if !reply.corpus_recipes.is_empty() {
                println!("\nFrom the recipe database:");
                for recipe in &reply.corpus_recipes {
                    print_recipe(recipe)?;
                }
            }
            if !reply.generated_recipes.is_empty() {
                println!("\nGenerated suggestions:");
                for recipe in &reply.generated_recipes {
                    print_recipe(recipe)?;
                }
            }
        }
        "ingredients" => {
            let client = MealDbClient::new(&config.corpus);
            for name in client.list_ingredients().await? {
                println!("{name}");
            }
        }
        _ => usage(),
    }

    Ok(())
}

fn print_recipe(recipe: &StructuredRecipe) -> Result<(), Box<dyn std::error::Error>> {
    let derived = classify(recipe);
    println!(
        "\n{} [{} | {}]",
        recipe.title, derived.difficulty, derived.estimated_time
    );
    for slot in 1..=MAX_INGREDIENT_SLOTS {
        if let Some(ingredient) = recipe.ingredient_slot(slot)? {
            if ingredient.measure.is_empty() {
                println!("  - {}", ingredient.name);
            } else {
                println!("  - {} {}", ingredient.measure, ingredient.name);
            }
        }
    }
    if !recipe.instructions.is_empty() {
        println!("{}", recipe.instructions);
    }
    Ok(())
}
