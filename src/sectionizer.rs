use serde::Serialize;

/// The headings a meal plan is asked to contain, in the order they are expected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Heading {
    RecipeSuggestions,
    NutritionalOverview,
    GoalAlignment,
    SmartSubstitutions,
}

impl Heading {
    pub const ALL: [Heading; 4] = [
        Heading::RecipeSuggestions,
        Heading::NutritionalOverview,
        Heading::GoalAlignment,
        Heading::SmartSubstitutions,
    ];

    /// Literal text searched for in the response
    pub fn label(&self) -> &'static str {
        match self {
            Heading::RecipeSuggestions => "RECIPE SUGGESTIONS",
            Heading::NutritionalOverview => "NUTRITIONAL OVERVIEW",
            Heading::GoalAlignment => "GOAL ALIGNMENT",
            Heading::SmartSubstitutions => "SMART SUBSTITUTIONS",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Heading::RecipeSuggestions => "🍽",
            Heading::NutritionalOverview => "📊",
            Heading::GoalAlignment => "🎯",
            Heading::SmartSubstitutions => "🔄",
        }
    }

    /// Display title, e.g. "Recipe Suggestions"
    pub fn title(&self) -> String {
        title_case(self.label())
    }
}

/// A block of advisory text, labeled when a known heading introduced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub heading: Option<Heading>,
    pub body: String,
}

impl Section {
    pub fn icon(&self) -> Option<&'static str> {
        self.heading.map(|heading| heading.icon())
    }

    pub fn title(&self) -> Option<String> {
        self.heading.map(|heading| heading.title())
    }
}

/// Split a response into sections at the known headings
///
/// Each heading found is matched at its first occurrence. Its body ends where
/// the next heading in [`Heading::ALL`] order appears after it, or at the end of
/// the text. Headings that appear out of order or more than once can produce
/// overlapping or empty bodies. Any non-empty text without a heading comes back
/// as one unlabeled section, even when it is only whitespace; empty text gives
/// no sections.
pub fn sectionize(text: &str) -> Vec<Section> {
    let mut sections = Vec::new();

    for (idx, heading) in Heading::ALL.iter().enumerate() {
        let label = heading.label();
        let Some(start) = text.find(label) else {
            continue;
        };
        let body_start = start + label.len();
        let rest = &text[body_start..];

        let body_end = Heading::ALL[idx + 1..]
            .iter()
            .find_map(|next| rest.find(next.label()))
            .map_or(text.len(), |offset| body_start + offset);

        sections.push(Section {
            heading: Some(*heading),
            body: text[body_start..body_end].trim().to_string(),
        });
    }

    if sections.is_empty() && !text.is_empty() {
        sections.push(Section {
            heading: None,
            body: text.trim().to_string(),
        });
    }

    sections
}

/// Upper-case the first letter of every word and lower-case the rest
///
/// A word starts at any alphanumeric character not preceded by another
/// alphanumeric character or underscore.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars() {
        let word_char = c.is_alphanumeric() || c == '_';
        if word_char && !in_word {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
        in_word = word_char;
    }

    out
}
