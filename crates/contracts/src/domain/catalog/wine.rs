use serde::{Deserialize, Serialize};

/// A wine as served by the catalog API. `type` is reserved in Rust, so the
/// upstream column is carried as `wine_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wine {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub wine_type: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub vintage: Option<i32>,
    pub price: Option<f64>,
    pub alcohol_content: Option<f64>,
    pub acidity_level: Option<String>,
    pub sweetness_level: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub avg_rating: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WineListResponse {
    #[serde(default)]
    pub wines: Vec<Wine>,
}

/// Alcohol strength buckets used by the catalog filter dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlcoholBand {
    /// below 13%
    Low,
    /// 13% to just under 14%
    Medium,
    /// 14% and up
    High,
}

impl AlcoholBand {
    pub fn contains(&self, alcohol_content: f64) -> bool {
        match self {
            AlcoholBand::Low => alcohol_content < 13.0,
            AlcoholBand::Medium => (13.0..14.0).contains(&alcohol_content),
            AlcoholBand::High => alcohol_content >= 14.0,
        }
    }
}

/// Client-side conjunctive filter over an already-fetched wine list.
#[derive(Debug, Clone, Default)]
pub struct WineFilter {
    pub search_term: String,
    pub wine_type: Option<String>,
    pub region: Option<String>,
    pub alcohol_band: Option<AlcoholBand>,
}

impl WineFilter {
    pub fn matches(&self, wine: &Wine) -> bool {
        if !self.search_term.is_empty() {
            let term = self.search_term.to_lowercase();
            let hit = [
                Some(wine.name.as_str()),
                wine.region.as_deref(),
                wine.country.as_deref(),
                wine.wine_type.as_deref(),
            ]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&term));
            if !hit {
                return false;
            }
        }
        if let Some(wanted) = &self.wine_type {
            if wine.wine_type.as_deref() != Some(wanted.as_str()) {
                return false;
            }
        }
        if let Some(wanted) = &self.region {
            if wine.region.as_deref() != Some(wanted.as_str()) {
                return false;
            }
        }
        if let Some(band) = &self.alcohol_band {
            if !band.contains(wine.alcohol_content.unwrap_or(0.0)) {
                return false;
            }
        }
        true
    }

    /// Filters and sorts case-insensitively by name, the order the catalog
    /// pages display.
    pub fn apply(&self, wines: &[Wine]) -> Vec<Wine> {
        let mut filtered: Vec<Wine> = wines.iter().filter(|w| self.matches(w)).cloned().collect();
        filtered.sort_by_key(|w| w.name.to_lowercase());
        filtered
    }
}

/// Unique non-empty values of a field, sorted for a filter dropdown.
pub fn distinct_values<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut out: Vec<String> = values
        .into_iter()
        .flatten()
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
        .collect();
    out.sort_by_key(|v| v.to_lowercase());
    out.dedup();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wine(id: i64, name: &str, wine_type: &str, region: &str, alcohol: f64) -> Wine {
        Wine {
            id,
            name: name.to_string(),
            wine_type: Some(wine_type.to_string()),
            region: Some(region.to_string()),
            country: Some("India".to_string()),
            vintage: Some(2019),
            price: Some(2400.0),
            alcohol_content: Some(alcohol),
            acidity_level: None,
            sweetness_level: None,
            description: None,
            avg_rating: None,
        }
    }

    #[test]
    fn search_term_matches_any_field_case_insensitive() {
        let filter = WineFilter {
            search_term: "nashik".to_string(),
            ..Default::default()
        };
        assert!(filter.matches(&wine(1, "Sula Rasa", "Red", "Nashik", 13.5)));
        assert!(!filter.matches(&wine(2, "Grover Art", "Red", "Bangalore", 13.5)));
    }

    #[test]
    fn filters_are_conjunctive() {
        let filter = WineFilter {
            wine_type: Some("Red".to_string()),
            alcohol_band: Some(AlcoholBand::High),
            ..Default::default()
        };
        assert!(filter.matches(&wine(1, "A", "Red", "Nashik", 14.2)));
        assert!(!filter.matches(&wine(2, "B", "Red", "Nashik", 13.2)));
        assert!(!filter.matches(&wine(3, "C", "White", "Nashik", 14.2)));
    }

    #[test]
    fn alcohol_band_boundaries() {
        assert!(AlcoholBand::Low.contains(12.9));
        assert!(!AlcoholBand::Low.contains(13.0));
        assert!(AlcoholBand::Medium.contains(13.0));
        assert!(!AlcoholBand::Medium.contains(14.0));
        assert!(AlcoholBand::High.contains(14.0));
    }

    #[test]
    fn apply_sorts_by_name() {
        let filter = WineFilter::default();
        let sorted = filter.apply(&[
            wine(1, "zinfandel", "Red", "Nashik", 13.0),
            wine(2, "Barolo", "Red", "Piedmont", 13.0),
        ]);
        assert_eq!(sorted[0].name, "Barolo");
    }

    #[test]
    fn distinct_values_dedupes_and_sorts() {
        let values = distinct_values([Some("Red"), Some("white"), Some("Red"), None, Some("")]);
        assert_eq!(values, vec!["Red".to_string(), "white".to_string()]);
    }
}
