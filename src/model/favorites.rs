//! User-curated favorites, deduplicated by cocktail id

use super::cocktail::Cocktail;

/// Ordered set of favorite cocktails, keyed by `Cocktail::id`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Favorites {
    items: Vec<Cocktail>,
}

impl Favorites {
    /// Build from a persisted list, dropping repeated ids (first one wins)
    pub fn from_list(list: Vec<Cocktail>) -> Self {
        let mut favorites = Self::default();
        for cocktail in list {
            if !favorites.contains(&cocktail.id) {
                favorites.items.push(cocktail);
            }
        }
        favorites
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|c| c.id == id)
    }

    /// Remove the cocktail if present, append it otherwise.
    /// Returns `true` when the cocktail is a favorite afterwards.
    pub fn toggle(&mut self, cocktail: &Cocktail) -> bool {
        if let Some(pos) = self.items.iter().position(|c| c.id == cocktail.id) {
            self.items.remove(pos);
            false
        } else {
            self.items.push(cocktail.clone());
            true
        }
    }

    pub fn as_slice(&self) -> &[Cocktail] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
