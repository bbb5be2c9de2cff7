use crate::domain::catalog::{ProductCategory, ProductKey};
use crate::domain::pairing::types::{ProductProfile, RecommendationEntry};

pub type GatewayResult<T> = anyhow::Result<T>;

/// Read-side collaborators the resolver depends on. The browser build backs
/// this with the storefront's REST API; tests use an in-memory mock.
///
/// The app is single-threaded (wasm), so the futures need no `Send` bound.
pub trait PairingGateway {
    /// Recommendations for one source product. `use_frequent` restricts the
    /// result to historical co-purchase pairs.
    async fn recommendations(
        &self,
        source: ProductKey,
        use_frequent: bool,
    ) -> GatewayResult<Vec<RecommendationEntry>>;

    /// Full product record for a recommended id.
    async fn product(&self, key: ProductKey) -> GatewayResult<ProductProfile>;

    /// Top-rated products of a category, best first.
    async fn top_rated(
        &self,
        category: ProductCategory,
        limit: u32,
    ) -> GatewayResult<Vec<ProductProfile>>;

    /// The whole catalog of a category; the popularity stage's fallback
    /// when the top-rated call fails.
    async fn all_products(&self, category: ProductCategory) -> GatewayResult<Vec<ProductProfile>>;
}
