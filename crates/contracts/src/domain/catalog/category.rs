use serde::{Deserialize, Serialize};
use std::fmt;

/// The two product families the storefront sells. Pairing suggestions
/// always cross from one category to the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Wine,
    Coffee,
}

impl ProductCategory {
    pub fn opposite(&self) -> Self {
        match self {
            ProductCategory::Wine => ProductCategory::Coffee,
            ProductCategory::Coffee => ProductCategory::Wine,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Wine => "wine",
            ProductCategory::Coffee => "coffee",
        }
    }

}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of a catalog product. Cart lines and pairing candidates are
/// deduplicated on this key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductKey {
    pub category: ProductCategory,
    pub id: i64,
}

impl ProductKey {
    pub fn new(category: ProductCategory, id: i64) -> Self {
        Self { category, id }
    }
}

impl fmt::Display for ProductKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.category, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_crosses_categories() {
        assert_eq!(ProductCategory::Wine.opposite(), ProductCategory::Coffee);
        assert_eq!(ProductCategory::Coffee.opposite(), ProductCategory::Wine);
    }

    #[test]
    fn serde_uses_lowercase() {
        assert_eq!(
            serde_json::to_string(&ProductCategory::Wine).unwrap(),
            "\"wine\""
        );
        let parsed: ProductCategory = serde_json::from_str("\"coffee\"").unwrap();
        assert_eq!(parsed, ProductCategory::Coffee);
    }

    #[test]
    fn key_display_matches_storage_format() {
        let key = ProductKey::new(ProductCategory::Wine, 7);
        assert_eq!(key.to_string(), "wine:7");
    }
}
