use serde::{Deserialize, Serialize};

/// A coffee as served by the catalog API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coffee {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub coffee_type: Option<String>,
    pub origin: Option<String>,
    pub country: Option<String>,
    pub roast_level: Option<String>,
    pub acidity_level: Option<String>,
    pub price: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub avg_rating: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoffeeListResponse {
    #[serde(default)]
    pub coffees: Vec<Coffee>,
}

/// Client-side conjunctive filter over an already-fetched coffee list.
#[derive(Debug, Clone, Default)]
pub struct CoffeeFilter {
    pub search_term: String,
    pub coffee_type: Option<String>,
    pub origin: Option<String>,
    pub roast_level: Option<String>,
}

impl CoffeeFilter {
    pub fn matches(&self, coffee: &Coffee) -> bool {
        if !self.search_term.is_empty() {
            let term = self.search_term.to_lowercase();
            let hit = [
                Some(coffee.name.as_str()),
                coffee.origin.as_deref(),
                coffee.country.as_deref(),
                coffee.coffee_type.as_deref(),
                coffee.roast_level.as_deref(),
            ]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&term));
            if !hit {
                return false;
            }
        }
        if let Some(wanted) = &self.coffee_type {
            if coffee.coffee_type.as_deref() != Some(wanted.as_str()) {
                return false;
            }
        }
        if let Some(wanted) = &self.origin {
            if coffee.origin.as_deref() != Some(wanted.as_str()) {
                return false;
            }
        }
        if let Some(wanted) = &self.roast_level {
            if coffee.roast_level.as_deref() != Some(wanted.as_str()) {
                return false;
            }
        }
        true
    }

    pub fn apply(&self, coffees: &[Coffee]) -> Vec<Coffee> {
        let mut filtered: Vec<Coffee> =
            coffees.iter().filter(|c| self.matches(c)).cloned().collect();
        filtered.sort_by_key(|c| c.name.to_lowercase());
        filtered
    }
}
