use crate::model::{MealPlanRequest, Recipe};

/// System instruction for single-recipe nutrition analysis
pub const ANALYSIS_SYSTEM: &str = "You are a warm, knowledgeable nutritionist. Provide concise, practical nutritional analysis. Never use asterisks, hashtags, or markdown. Use plain numbered lists and clear paragraphs.";

/// System instruction for meal planning
pub const MEAL_PLAN_SYSTEM: &str = "You are a warm, expert nutritionist and creative chef. Give practical, personalized advice. Never use asterisks, hashtags, bullet dashes, or markdown. Use clear plain-text paragraphs and the section headings provided.";

/// The user prompt template for analysing one recipe.
///
/// Loaded from `analysis_prompt.txt` at compile time. Contains `{{TITLE}}`,
/// `{{CATEGORY}}`, `{{AREA}}` and `{{INGREDIENTS}}` placeholders, filled by
/// [`build_analysis_prompt`].
pub const ANALYSIS_PROMPT: &str = include_str!("analysis_prompt.txt");

/// The user prompt template for a meal plan.
///
/// Loaded from `meal_plan_prompt.txt` at compile time. The section headings it
/// asks for are the ones [`crate::sectionize`] splits on, so the two must be
/// edited together.
pub const MEAL_PLAN_PROMPT: &str = include_str!("meal_plan_prompt.txt");

const UNKNOWN: &str = "Unknown";

/// Fill the analysis template from a recipe
pub fn build_analysis_prompt(recipe: &Recipe) -> String {
    let ingredients = recipe
        .ingredients
        .iter()
        .map(|ingredient| ingredient.to_prompt_text())
        .collect::<Vec<_>>()
        .join(", ");

    fill_template(
        ANALYSIS_PROMPT,
        &[
            ("TITLE", recipe.title.as_str()),
            ("CATEGORY", recipe.category.as_deref().unwrap_or(UNKNOWN)),
            ("AREA", recipe.area.as_deref().unwrap_or(UNKNOWN)),
            ("INGREDIENTS", ingredients.as_str()),
        ],
    )
}

/// Fill the meal plan template from a request
pub fn build_meal_plan_prompt(request: &MealPlanRequest) -> String {
    let calorie_note = match request.calories {
        Some(kcal) => format!("Target calories per meal: {kcal} kcal."),
        None => "No specific calorie target.".to_string(),
    };
    let notes = request
        .notes
        .as_deref()
        .map(str::trim)
        .filter(|notes| !notes.is_empty())
        .map(|notes| format!("Additional notes: {notes}"))
        .unwrap_or_default();

    fill_template(
        MEAL_PLAN_PROMPT,
        &[
            ("INGREDIENTS", request.ingredients.trim()),
            ("CALORIE_NOTE", calorie_note.as_str()),
            ("GOAL", request.goal.label()),
            ("NOTES", notes.as_str()),
        ],
    )
}

/// Replace `{{NAME}}` placeholders in one left-to-right pass
///
/// Substituted values are copied as-is and never scanned again. Unknown
/// placeholders are left in place.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after = &rest[open + 2..];
        let value = after.find("}}").and_then(|close| {
            let name = &after[..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });
        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 2..];
            }
            None => {
                out.push_str("{{");
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
