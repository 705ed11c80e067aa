use crate::model::Category;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::{BTreeMap, HashMap};

pub const FALLBACK_SUGGESTION: &str = "Take a deep breath and smile";

const BUILTIN: [(&str, [&str; 5]); 5] = [
    (
        "Skin Care",
        [
            "Apply aloe vera gel before sleep",
            "Drink 2 extra glasses of water today",
            "Try a homemade face mask with turmeric and curd",
            "Gently exfoliate your skin today",
            "Massage your face with coconut oil for 5 mins",
        ],
    ),
    (
        "Study",
        [
            "Revise DBMS Normal Forms",
            "Solve 3 LeetCode problems",
            "Summarize one chapter in 10 bullet points",
            "Watch one YouTube lecture and make notes",
            "Create a mind map for DSA topics",
        ],
    ),
    (
        "Shopping",
        [
            "Make a budget grocery list",
            "Clean your shopping bag",
            "Compare prices for your wishlist items",
            "Add one healthy snack to your shopping list",
            "Buy refill packs to save money",
        ],
    ),
    (
        "Personal",
        [
            "Journal your day for 5 minutes",
            "Call someone you miss",
            "Declutter one drawer today",
            "Go for a short walk or stretch",
            "Meditate for 10 minutes",
        ],
    ),
    (
        "Work",
        [
            "Organize your desktop files",
            "Write down 3 work goals for the week",
            "Clear 5 emails from inbox",
            "Prepare a to-do list for tomorrow",
            "Review your last project notes",
        ],
    ),
];

/// Read-only mapping from category label to candidate suggestions.
///
/// Keys are stored under their canonical category label, so `"skin-care"`
/// and `"Skin Care"` address the same list. Free-text keys are lowercased.
/// Empty lists are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: BTreeMap<String, Vec<String>>,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN.iter().map(|(category, suggestions)| {
            (
                category.to_string(),
                suggestions.iter().map(|s| s.to_string()).collect(),
            )
        }))
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        let mut catalog = Self::default();
        for (category, suggestions) in entries {
            catalog.insert(&category, suggestions);
        }
        catalog
    }

    /// Returns a copy where each configured category replaces the existing list.
    /// Configured lists with no usable entries leave the existing list in place.
    pub fn with_extra(&self, extra: &HashMap<String, Vec<String>>) -> Self {
        let mut merged = self.clone();
        let mut categories: Vec<&String> = extra.keys().collect();
        categories.sort();
        for category in categories {
            merged.insert(category, extra[category].clone());
        }
        merged
    }

    pub fn suggestions(&self, category: &str) -> Option<&[String]> {
        self.entries.get(&lookup_key(category)).map(Vec::as_slice)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, category: &str, suggestions: Vec<String>) {
        let key = lookup_key(category);
        let suggestions: Vec<String> = suggestions
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if suggestions.is_empty() {
            tracing::debug!(category, "ignoring empty suggestion list");
            return;
        }
        self.entries.insert(key, suggestions);
    }
}

fn lookup_key(category: &str) -> String {
    match Category::parse(category) {
        Category::Other(text) => text.to_lowercase(),
        known => known.label().to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    catalog: Catalog,
}

impl SuggestionEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn builtin() -> Self {
        Self::new(Catalog::builtin())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn pick(&self, category: &str) -> &str {
        self.pick_with(category, &mut rand::thread_rng())
    }

    /// Uniform pick from the category's list, or [`FALLBACK_SUGGESTION`] for unknown categories.
    pub fn pick_with<R: Rng + ?Sized>(&self, category: &str, rng: &mut R) -> &str {
        match self
            .catalog
            .suggestions(category)
            .and_then(|list| list.choose(rng))
        {
            Some(suggestion) => suggestion.as_str(),
            None => {
                tracing::debug!(category, "no suggestions for category, using fallback");
                FALLBACK_SUGGESTION
            }
        }
    }
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::builtin()
    }
}
