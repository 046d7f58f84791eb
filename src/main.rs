use clap::{ArgAction, Parser, Subcommand};
use log::{debug, error};
use mise_en_place::{
    load_config, sectionize, AppConfig, DietaryGoal, IngredientSearch, MealDbClient,
    MealPlanRequest, NutritionAdvisor, Recipe, RecipeSource, SearchSession,
    SUGGESTED_INGREDIENTS,
};
use std::error::Error;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Find recipes that use all of the given ingredients
    Search {
        /// Comma-separated ingredients, e.g. "chicken, rice"
        ingredients: String,
        /// Comma-separated ingredients to leave out
        #[arg(long, default_value = "")]
        omit: String,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a full recipe
    Show {
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// Show a recipe and ask for its nutrition analysis
    Analyze { id: String },
    /// Ask for recipe ideas and advice built around what you have
    Plan {
        /// Comma-separated ingredients you have
        ingredients: String,
        /// Target calories per meal
        #[arg(long, value_parser = clap::value_parser!(u32).range(100..=3000))]
        calories: Option<u32>,
        /// Dietary goal, e.g. "weight-loss" or "high protein"
        #[arg(long, default_value_t = DietaryGoal::default())]
        goal: DietaryGoal,
        /// Anything else the nutritionist should know
        #[arg(long)]
        notes: Option<String>,
    },
    /// List starter ingredients and dietary goals
    Suggestions,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` wins; otherwise `-v` flags raise the level from `warn`
fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

async fn run(command: Command) -> Result<(), Box<dyn Error>> {
    let config = load_config()?;
    debug!("{:?}", config.recipes);

    match command {
        Command::Search {
            ingredients,
            omit,
            json,
        } => {
            let mut session = SearchSession::new(IngredientSearch::from_config(&config.recipes)?);
            if !session.submit(&ingredients, &omit).await {
                print_suggestions();
                return Ok(());
            }
            if json {
                println!("{}", serde_json::to_string_pretty(session.results())?);
            } else {
                print_results(session.results());
            }
        }
        Command::Show { id, json } => {
            let recipe = fetch_recipe(&config, &id).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&recipe)?);
            } else {
                print_recipe(&recipe);
            }
        }
        Command::Analyze { id } => {
            let advisor = advisor(&config)?;
            let recipe = fetch_recipe(&config, &id).await?;
            print_recipe(&recipe);
            println!("\nAI Nutrition Analysis");
            println!("🥗 Nutritionist's Notes\n");
            println!("{}", advisor.analyze_recipe(&recipe).await);
        }
        Command::Plan {
            ingredients,
            calories,
            goal,
            notes,
        } => {
            let advisor = advisor(&config)?;
            let request = MealPlanRequest {
                ingredients,
                calories,
                goal,
                notes,
            };
            match advisor.plan_meals(&request).await {
                Some(text) => print_plan(&text),
                None => println!("Enter your ingredients (comma-separated) to get a plan."),
            }
        }
        Command::Suggestions => print_suggestions(),
    }

    Ok(())
}

fn advisor(config: &AppConfig) -> Result<NutritionAdvisor, Box<dyn Error>> {
    NutritionAdvisor::from_config(&config.advisor).map_err(|e| {
        format!(
            "{}. Set MISE__ADVISOR__API_KEY or ANTHROPIC_API_KEY (get a key at console.anthropic.com)",
            e
        )
        .into()
    })
}

async fn fetch_recipe(config: &AppConfig, id: &str) -> Result<Recipe, Box<dyn Error>> {
    let client = MealDbClient::from_config(&config.recipes)?;
    client
        .lookup(id)
        .await?
        .ok_or_else(|| format!("No recipe with id {}", id).into())
}

fn print_results(results: &[Recipe]) {
    if results.is_empty() {
        println!("🫙 No recipes found");
        println!("Try a different ingredient or dish name.");
        return;
    }

    let plural = if results.len() == 1 { "" } else { "s" };
    println!("Results: {} recipe{}\n", results.len(), plural);
    for recipe in results {
        let badges: Vec<&str> = [recipe.category.as_deref(), recipe.area.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        println!("  {}  [{}]", recipe.title, recipe.id);
        if !badges.is_empty() {
            println!("    {}", badges.join(" · "));
        }
    }
}

fn print_recipe(recipe: &Recipe) {
    println!("{}", recipe.title);
    let tags: Vec<&str> = [recipe.category.as_deref(), recipe.area.as_deref()]
        .into_iter()
        .flatten()
        .chain(recipe.tags.iter().map(String::as_str))
        .collect();
    if !tags.is_empty() {
        println!("{}", tags.join(" · "));
    }

    println!("\nIngredients");
    for ingredient in &recipe.ingredients {
        println!("  {:<28} {}", ingredient.name, ingredient.measure);
    }

    println!("\nInstructions\n{}", recipe.instructions);
    if let Some(video) = &recipe.video {
        println!("\n▶ Watch on YouTube: {}", video);
    }
}

fn print_plan(text: &str) {
    for section in sectionize(text) {
        match (section.icon(), section.title()) {
            (Some(icon), Some(title)) => println!("{} {}\n{}\n", icon, title, section.body),
            _ => println!("{}\n", section.body),
        }
    }
}

fn print_suggestions() {
    println!("🍽 What are you craving today?");
    println!("Try one of: {}", SUGGESTED_INGREDIENTS.join(", "));
    let goals: Vec<&str> = DietaryGoal::ALL.iter().map(|goal| goal.label()).collect();
    println!("Dietary goals: {}", goals.join(", "));
}
