//! Cocktail records as returned by TheCocktailDB

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The API exposes ingredients as numbered slots `strIngredient1..15`
pub const MAX_INGREDIENT_SLOTS: usize = 15;

/// One ingredient line of a recipe
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IngredientLine {
    pub ingredient: String,
    pub measure: String,
}

/// A cocktail record. Immutable once fetched.
///
/// Serializes back into the API's flat shape, so persisted favorites look
/// exactly like `drinks` entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawDrink", into = "RawDrink")]
pub struct Cocktail {
    pub id: String,
    pub name: String,
    pub thumbnail: Option<String>,
    pub category: Option<String>,
    pub alcoholic: Option<String>,
    pub glass: Option<String>,
    pub tags: Option<String>,
    pub instructions: Option<String>,
    pub video: Option<String>,
    pub ingredients: Vec<IngredientLine>,
}

impl Cocktail {
    /// Tags formatted as `#tag1 #tag2`, or `None` when the record has none
    pub fn tag_line(&self) -> Option<String> {
        let tags = self.tags.as_deref()?;
        let line = tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(|t| format!("#{}", t))
            .collect::<Vec<_>>()
            .join(" ");
        if line.is_empty() { None } else { Some(line) }
    }
}

/// Wire shape of a single `drinks` entry
#[derive(Serialize, Deserialize)]
struct RawDrink {
    #[serde(rename = "idDrink")]
    id: String,
    #[serde(rename = "strDrink", default)]
    name: Option<String>,
    #[serde(rename = "strDrinkThumb", default)]
    thumbnail: Option<String>,
    #[serde(rename = "strCategory", default)]
    category: Option<String>,
    #[serde(rename = "strAlcoholic", default)]
    alcoholic: Option<String>,
    #[serde(rename = "strGlass", default)]
    glass: Option<String>,
    #[serde(rename = "strTags", default)]
    tags: Option<String>,
    #[serde(rename = "strInstructions", default)]
    instructions: Option<String>,
    #[serde(rename = "strVideo", default)]
    video: Option<String>,
    // Ingredient/measure slots plus every field we don't model
    #[serde(flatten)]
    rest: BTreeMap<String, Value>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn slot_text(rest: &BTreeMap<String, Value>, key: &str) -> Option<String> {
    rest.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

impl From<RawDrink> for Cocktail {
    fn from(raw: RawDrink) -> Self {
        let ingredients = (1..=MAX_INGREDIENT_SLOTS)
            .filter_map(|i| {
                let ingredient = slot_text(&raw.rest, &format!("strIngredient{}", i))?;
                let measure =
                    slot_text(&raw.rest, &format!("strMeasure{}", i)).unwrap_or_default();
                Some(IngredientLine { ingredient, measure })
            })
            .collect();

        Self {
            id: raw.id,
            name: raw.name.unwrap_or_default(),
            thumbnail: non_blank(raw.thumbnail),
            category: non_blank(raw.category),
            alcoholic: non_blank(raw.alcoholic),
            glass: non_blank(raw.glass),
            tags: non_blank(raw.tags),
            instructions: non_blank(raw.instructions),
            video: non_blank(raw.video),
            ingredients,
        }
    }
}

impl From<Cocktail> for RawDrink {
    fn from(cocktail: Cocktail) -> Self {
        let mut rest = BTreeMap::new();
        for (i, line) in cocktail.ingredients.into_iter().enumerate() {
            let slot = i + 1;
            rest.insert(format!("strIngredient{}", slot), Value::String(line.ingredient));
            rest.insert(format!("strMeasure{}", slot), Value::String(line.measure));
        }

        Self {
            id: cocktail.id,
            name: Some(cocktail.name),
            thumbnail: cocktail.thumbnail,
            category: cocktail.category,
            alcoholic: cocktail.alcoholic,
            glass: cocktail.glass,
            tags: cocktail.tags,
            instructions: cocktail.instructions,
            video: cocktail.video,
            rest,
        }
    }
}

/// Response envelope of both `random.php` and `search.php`
#[derive(Deserialize, Debug)]
pub struct DrinksEnvelope {
    #[serde(default)]
    pub drinks: Option<Vec<Cocktail>>,
}

impl DrinksEnvelope {
    /// `null` drinks means "no matches"
    pub fn into_cocktails(self) -> Vec<Cocktail> {
        self.drinks.unwrap_or_default()
    }
}

#[cfg(test)]
pub(crate) fn sample(id: &str, name: &str) -> Cocktail {
    Cocktail {
        id: id.to_string(),
        name: name.to_string(),
        thumbnail: Some(format!("https://img.example/{}.jpg", id)),
        category: Some("Cocktail".to_string()),
        alcoholic: Some("Alcoholic".to_string()),
        glass: None,
        tags: None,
        instructions: Some("Mix ingredients.".to_string()),
        video: None,
        ingredients: vec![],
    }
}
