/// Ingredients to look for and ingredients to rule out, both normalized
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    requested: Vec<String>,
    omitted: Vec<String>,
}

impl SearchQuery {
    /// Build a query from raw comma-separated input, e.g. `"Chicken, rice"`
    pub fn parse(requested: &str, omitted: &str) -> Self {
        Self {
            requested: split_ingredient_list(requested),
            omitted: split_ingredient_list(omitted),
        }
    }

    /// Build a query from already separated names; they are normalized the same way
    pub fn from_lists<I, J, S, T>(requested: I, omitted: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        Self {
            requested: normalize(requested),
            omitted: normalize(omitted),
        }
    }

    pub fn requested(&self) -> &[String] {
        &self.requested
    }

    pub fn omitted(&self) -> &[String] {
        &self.omitted
    }

    /// A query without requested ingredients never reaches the network
    pub fn is_empty(&self) -> bool {
        self.requested.is_empty()
    }
}

/// Split comma-separated text into trimmed, lower-cased, non-empty names
///
/// Duplicates are kept; they only cost an extra identical lookup.
pub fn split_ingredient_list(raw: &str) -> Vec<String> {
    normalize(raw.split(','))
}

fn normalize<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| item.as_ref().trim().to_lowercase())
        .filter(|item| !item.is_empty())
        .collect()
}
