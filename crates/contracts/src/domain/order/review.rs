use crate::domain::catalog::ProductCategory;
use serde::{Deserialize, Serialize};

/// Submission body for a product review. `wine_id`/`coffee_id` are mutually
/// exclusive; [`NewReview::for_product`] sets the right one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewReview {
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wine_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coffee_id: Option<i64>,
    pub rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl NewReview {
    pub fn for_product(
        user_id: i64,
        category: ProductCategory,
        product_id: i64,
        rating: u8,
        comment: Option<String>,
    ) -> Self {
        let mut review = Self {
            user_id,
            rating,
            comment,
            ..Self::default()
        };
        match category {
            ProductCategory::Wine => review.wine_id = Some(product_id),
            ProductCategory::Coffee => review.coffee_id = Some(product_id),
        }
        review
    }

    /// Ratings are whole stars from 1 to 5.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !(1..=5).contains(&self.rating) {
            return Err("Rating must be between 1 and 5");
        }
        Ok(())
    }
}
