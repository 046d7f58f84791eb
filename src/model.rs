use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Number of numbered ingredient/measure slots in a TheMealDB record
pub const INGREDIENT_SLOTS: usize = 20;

/// One (name, measure) line of a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ingredient {
    pub name: String,
    pub measure: String,
}

impl Ingredient {
    /// Render as `"<measure> <name>"`, the form used in prompts
    pub fn to_prompt_text(&self) -> String {
        format!("{} {}", self.measure, self.name)
    }
}

/// A full recipe as returned by the lookup endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "MealRecord")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub category: Option<String>,
    pub area: Option<String>,
    pub thumbnail: Option<String>,
    pub instructions: String,
    pub video: Option<String>,
    pub tags: Vec<String>,
    pub source: Option<String>,
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    /// Whether any ingredient name equals `name` ignoring case
    pub fn has_ingredient(&self, name: &str) -> bool {
        let needle = name.trim().to_lowercase();
        self.ingredients
            .iter()
            .any(|ingredient| ingredient.name.to_lowercase() == needle)
    }

    /// Whether the recipe uses at least one of the (already lower-cased) names
    pub fn contains_any(&self, names: &[String]) -> bool {
        if names.is_empty() {
            return false;
        }
        let own: Vec<String> = self
            .ingredients
            .iter()
            .map(|ingredient| ingredient.name.to_lowercase())
            .collect();
        names.iter().any(|name| own.contains(name))
    }
}

/// Entry of a filter-by-ingredient listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal", default)]
    pub title: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
}

/// Response envelope shared by both endpoints; `meals: null` means nothing found
#[derive(Debug, Deserialize)]
pub struct MealsEnvelope<T> {
    pub meals: Option<Vec<T>>,
}

/// Raw TheMealDB record: a flat object with numbered ingredient fields
#[derive(Debug, Deserialize)]
pub struct MealRecord {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal", default)]
    title: Option<String>,
    #[serde(rename = "strCategory", default)]
    category: Option<String>,
    #[serde(rename = "strArea", default)]
    area: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    thumbnail: Option<String>,
    #[serde(rename = "strInstructions", default)]
    instructions: Option<String>,
    #[serde(rename = "strYoutube", default)]
    video: Option<String>,
    #[serde(rename = "strTags", default)]
    tags: Option<String>,
    #[serde(rename = "strSource", default)]
    source: Option<String>,
    #[serde(flatten)]
    rest: Map<String, Value>,
}

impl MealRecord {
    fn slot(&self, field: &str, index: usize) -> Option<String> {
        self.rest
            .get(&format!("{field}{index}"))
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(String::from)
    }

    fn ingredients(&self) -> Vec<Ingredient> {
        (1..=INGREDIENT_SLOTS)
            .filter_map(|index| {
                let name = self.slot("strIngredient", index)?;
                let measure = self.slot("strMeasure", index).unwrap_or_default();
                Some(Ingredient { name, measure })
            })
            .collect()
    }
}

/// Treat empty and whitespace-only strings like null
fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl From<MealRecord> for Recipe {
    fn from(record: MealRecord) -> Self {
        let ingredients = record.ingredients();
        let tags = record
            .tags
            .as_deref()
            .map(|tags| {
                tags.split(',')
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Recipe {
            id: record.id,
            title: non_empty(record.title).unwrap_or_default(),
            category: non_empty(record.category),
            area: non_empty(record.area),
            thumbnail: non_empty(record.thumbnail),
            instructions: record.instructions.unwrap_or_default().trim().to_string(),
            video: non_empty(record.video),
            tags,
            source: non_empty(record.source),
            ingredients,
        }
    }
}

/// Dietary goal offered to the meal planner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum DietaryGoal {
    WeightLoss,
    MuscleGain,
    #[default]
    BalancedDiet,
    LowCarb,
    HighProtein,
    Vegetarian,
}

impl DietaryGoal {
    pub const ALL: [DietaryGoal; 6] = [
        DietaryGoal::WeightLoss,
        DietaryGoal::MuscleGain,
        DietaryGoal::BalancedDiet,
        DietaryGoal::LowCarb,
        DietaryGoal::HighProtein,
        DietaryGoal::Vegetarian,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DietaryGoal::WeightLoss => "Weight Loss",
            DietaryGoal::MuscleGain => "Muscle Gain",
            DietaryGoal::BalancedDiet => "Balanced Diet",
            DietaryGoal::LowCarb => "Low Carb",
            DietaryGoal::HighProtein => "High Protein",
            DietaryGoal::Vegetarian => "Vegetarian",
        }
    }
}

impl std::fmt::Display for DietaryGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for DietaryGoal {
    type Err = String;

    /// Accepts the label in any case, with spaces, dashes or underscores
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();

        DietaryGoal::ALL
            .into_iter()
            .find(|goal| {
                goal.label()
                    .chars()
                    .filter(|c| c.is_alphanumeric())
                    .flat_map(char::to_lowercase)
                    .eq(wanted.chars())
            })
            .ok_or_else(|| {
                let known: Vec<&str> = DietaryGoal::ALL.iter().map(|g| g.label()).collect();
                format!("unknown dietary goal '{}', expected one of: {}", s, known.join(", "))
            })
    }
}

/// What the meal planner is asked to work with
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MealPlanRequest {
    /// Free-text, usually comma-separated
    pub ingredients: String,
    /// Target kcal per meal
    pub calories: Option<u32>,
    pub goal: DietaryGoal,
    pub notes: Option<String>,
}

impl MealPlanRequest {
    pub fn new(ingredients: impl Into<String>) -> Self {
        Self {
            ingredients: ingredients.into(),
            ..Default::default()
        }
    }
}
