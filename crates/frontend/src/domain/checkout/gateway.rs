use anyhow::anyhow;
use contracts::domain::catalog::{ProductCategory, ProductKey};
use contracts::domain::pairing::types::{
    ProductProfile, RecommendationEntry, RecommendationsResponse,
};
use contracts::domain::pairing::{GatewayResult, PairingGateway};
use gloo_net::http::Request;

use crate::domain::{coffee, wine};
use crate::shared::api_utils::api_base;

/// REST-backed gateway for the pairing resolver.
pub struct HttpPairingGateway;

async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> GatewayResult<T> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| anyhow!("request failed: {e}"))?;
    if !response.ok() {
        return Err(anyhow!("HTTP {}", response.status()));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| anyhow!("bad response body: {e}"))
}

impl PairingGateway for HttpPairingGateway {
    async fn recommendations(
        &self,
        source: ProductKey,
        use_frequent: bool,
    ) -> GatewayResult<Vec<RecommendationEntry>> {
        let param = match source.category {
            ProductCategory::Wine => "wine_id",
            ProductCategory::Coffee => "coffee_id",
        };
        let url = format!(
            "{}/api/pairings/recommendations?{}={}&use_frequent={}",
            api_base(),
            param,
            source.id,
            use_frequent
        );
        let body: RecommendationsResponse = get_json(&url).await?;
        Ok(body.recommendations)
    }

    async fn product(&self, key: ProductKey) -> GatewayResult<ProductProfile> {
        match key.category {
            ProductCategory::Wine => {
                let wine = wine::api::get_by_id(key.id).await.map_err(|e| anyhow!(e))?;
                Ok(ProductProfile::from(wine))
            }
            ProductCategory::Coffee => {
                let coffee = coffee::api::get_by_id(key.id).await.map_err(|e| anyhow!(e))?;
                Ok(ProductProfile::from(coffee))
            }
        }
    }

    async fn top_rated(
        &self,
        category: ProductCategory,
        limit: u32,
    ) -> GatewayResult<Vec<ProductProfile>> {
        match category {
            ProductCategory::Wine => {
                let wines = wine::api::top_rated(limit).await.map_err(|e| anyhow!(e))?;
                Ok(wines.into_iter().map(ProductProfile::from).collect())
            }
            ProductCategory::Coffee => {
                let coffees = coffee::api::top_rated(limit).await.map_err(|e| anyhow!(e))?;
                Ok(coffees.into_iter().map(ProductProfile::from).collect())
            }
        }
    }

    async fn all_products(&self, category: ProductCategory) -> GatewayResult<Vec<ProductProfile>> {
        match category {
            ProductCategory::Wine => {
                let wines = wine::api::get_all().await.map_err(|e| anyhow!(e))?;
                Ok(wines.into_iter().map(ProductProfile::from).collect())
            }
            ProductCategory::Coffee => {
                let coffees = coffee::api::get_all().await.map_err(|e| anyhow!(e))?;
                Ok(coffees.into_iter().map(ProductProfile::from).collect())
            }
        }
    }
}
