use crate::domain::catalog::coffee::Coffee;
use crate::domain::catalog::wine::Wine;
use crate::domain::catalog::{ProductCategory, ProductKey};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One row of the recommendation endpoint's response. Exactly one of
/// `wine_id` / `coffee_id` is set, naming the recommended product; scores
/// and purchase counts are advisory display data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationEntry {
    #[serde(default)]
    pub wine_id: Option<i64>,
    #[serde(default)]
    pub coffee_id: Option<i64>,
    #[serde(default)]
    pub pairing_score: Option<f64>,
    #[serde(default)]
    pub recommendation_score: Option<f64>,
    #[serde(default)]
    pub purchase_count: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
}

impl RecommendationEntry {
    /// The recommended product's id, read from the field matching the
    /// expected (opposite) category.
    pub fn recommended_id(&self, category: ProductCategory) -> Option<i64> {
        match category {
            ProductCategory::Wine => self.wine_id,
            ProductCategory::Coffee => self.coffee_id,
        }
    }

    /// Display score: explicit pairing score first, then the broader
    /// recommendation score, then the raw co-purchase count.
    pub fn display_score(&self) -> Option<f64> {
        self.pairing_score
            .or(self.recommendation_score)
            .or(self.purchase_count.map(f64::from))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    #[serde(default)]
    pub recommendations: Vec<RecommendationEntry>,
}

/// Category-neutral view of a catalog product, as needed to render a
/// pairing card. Built by the gateway from the wine or coffee record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductProfile {
    pub category: ProductCategory,
    pub id: i64,
    pub name: String,
    pub product_type: Option<String>,
    pub region: Option<String>,
    pub origin: Option<String>,
    pub country: Option<String>,
    pub vintage: Option<i32>,
    pub alcohol_content: Option<f64>,
    pub roast_level: Option<String>,
    pub acidity_level: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
}

impl ProductProfile {
    pub fn key(&self) -> ProductKey {
        ProductKey::new(self.category, self.id)
    }
}

impl From<Wine> for ProductProfile {
    fn from(w: Wine) -> Self {
        Self {
            category: ProductCategory::Wine,
            id: w.id,
            name: w.name,
            product_type: w.wine_type,
            region: w.region,
            origin: None,
            country: w.country,
            vintage: w.vintage,
            alcohol_content: w.alcohol_content,
            roast_level: None,
            acidity_level: w.acidity_level,
            price: w.price,
            description: w.description,
        }
    }
}

impl From<Coffee> for ProductProfile {
    fn from(c: Coffee) -> Self {
        Self {
            category: ProductCategory::Coffee,
            id: c.id,
            name: c.name,
            product_type: c.coffee_type,
            region: None,
            origin: c.origin,
            country: c.country,
            vintage: None,
            alcohol_content: None,
            roast_level: c.roast_level,
            acidity_level: c.acidity_level,
            price: c.price,
            description: c.description,
        }
    }
}

/// A resolved suggestion card. `id` is `None` only for the static sample
/// pairings, which reference no live catalog product by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairingCandidate {
    pub category: ProductCategory,
    pub id: Option<i64>,
    pub name: String,
    pub product_type: Option<String>,
    pub region: Option<String>,
    pub origin: Option<String>,
    pub country: Option<String>,
    pub vintage: Option<i32>,
    pub alcohol_content: Option<f64>,
    pub roast_level: Option<String>,
    pub acidity_level: Option<String>,
    pub price: Option<f64>,
    pub pairing_score: Option<f64>,
    pub purchase_count: Option<u32>,
    pub description: Option<String>,
    /// Display name of the cart item this candidate accompanies.
    pub source_name: String,
}

impl PairingCandidate {
    pub fn key(&self) -> Option<ProductKey> {
        self.id.map(|id| ProductKey::new(self.category, id))
    }

    /// Builds a candidate from a full product record plus the advisory
    /// fields of the recommendation row that pointed at it.
    pub fn from_profile(
        profile: ProductProfile,
        entry: &RecommendationEntry,
        source_name: &str,
    ) -> Self {
        let description = entry
            .description
            .clone()
            .or_else(|| profile.description.clone())
            .or_else(|| {
                entry.purchase_count.map(|n| {
                    if n > 1 {
                        format!("Bought together {n} times")
                    } else {
                        "Bought together 1 time".to_string()
                    }
                })
            });
        Self {
            category: profile.category,
            id: Some(profile.id),
            name: profile.name,
            product_type: profile.product_type,
            region: profile.region,
            origin: profile.origin,
            country: profile.country,
            vintage: profile.vintage,
            alcohol_content: profile.alcohol_content,
            roast_level: profile.roast_level,
            acidity_level: profile.acidity_level,
            price: profile.price,
            pairing_score: entry.display_score(),
            purchase_count: entry.purchase_count,
            description,
            source_name: source_name.to_string(),
        }
    }

    /// Builds a popularity-fallback candidate for a given cart item.
    pub fn from_popular(profile: ProductProfile, source_name: &str) -> Self {
        let description = profile
            .description
            .clone()
            .unwrap_or_else(|| format!("Curated to complement {source_name}"));
        Self {
            category: profile.category,
            id: Some(profile.id),
            name: profile.name,
            product_type: profile.product_type,
            region: profile.region,
            origin: profile.origin,
            country: profile.country,
            vintage: profile.vintage,
            alcohol_content: profile.alcohol_content,
            roast_level: profile.roast_level,
            acidity_level: profile.acidity_level,
            price: profile.price,
            pairing_score: None,
            purchase_count: None,
            description: Some(description),
            source_name: source_name.to_string(),
        }
    }
}

/// All suggestions attached to one cart line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairingSuggestion {
    pub source_category: ProductCategory,
    pub source_id: i64,
    pub source_name: String,
    pub items: Vec<PairingCandidate>,
}

impl PairingSuggestion {
    pub fn source_key(&self) -> ProductKey {
        ProductKey::new(self.source_category, self.source_id)
    }
}

/// Suggestions keyed by the cart line they accompany.
pub type SuggestionMap = BTreeMap<ProductKey, PairingSuggestion>;

/// The fallback cascade, in the order it is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairingStage {
    /// Co-purchase-backed recommendations.
    Frequent,
    /// Recommendations without the co-purchase restriction.
    Broad,
    /// Shuffled top-rated products of the opposite category.
    Popular,
    /// Two hardcoded illustrative pairings, shown for UI guidance only.
    Sample,
}
