use crate::domain::cart::Cart;
use crate::domain::catalog::{ProductCategory, ProductKey};
use crate::domain::pairing::gateway::PairingGateway;
use crate::domain::pairing::samples::sample_pairings;
use crate::domain::pairing::types::{
    PairingCandidate, PairingStage, PairingSuggestion, ProductProfile, SuggestionMap,
};
use crate::domain::random::{shuffle, RandomSource};
use futures::future::{join, join_all};
use std::collections::HashSet;
use std::fmt;

/// Explicit-recommendation stages keep at most this many candidates per
/// source, taken from the head of the upstream response.
const MAX_EXPLICIT_CANDIDATES: usize = 4;
/// How many top-rated products to pull into each popularity pool.
const POPULAR_POOL_LIMIT: u32 = 12;
/// The popularity stage suggests at most this many products per cart line.
const MAX_POPULAR_CANDIDATES: usize = 3;

/// Every upstream call in the pass failed; the checkout surfaces a
/// non-blocking "pairings unavailable" notice and clears suggestion state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairingUnavailable;

impl fmt::Display for PairingUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("could not load pairing suggestions")
    }
}

impl std::error::Error for PairingUnavailable {}

/// Outcome of one resolution pass.
#[derive(Debug, Clone)]
pub struct ResolvedPairings {
    /// Which fallback stage produced the result; `None` for an empty cart.
    pub stage: Option<PairingStage>,
    /// Per-cart-line suggestions (stages 1-3).
    pub suggestions: SuggestionMap,
    /// Illustrative pairings, populated only for the sample stage.
    pub samples: Vec<PairingCandidate>,
}

impl ResolvedPairings {
    fn empty() -> Self {
        Self {
            stage: None,
            suggestions: SuggestionMap::new(),
            samples: Vec::new(),
        }
    }

    fn at_stage(stage: PairingStage, suggestions: SuggestionMap) -> Self {
        Self {
            stage: Some(stage),
            suggestions,
            samples: Vec::new(),
        }
    }

    fn illustrative() -> Self {
        Self {
            stage: Some(PairingStage::Sample),
            suggestions: SuggestionMap::new(),
            samples: sample_pairings(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty() && self.samples.is_empty()
    }
}

#[derive(Debug, Default)]
struct UpstreamStats {
    attempted: u32,
    succeeded: u32,
}

impl UpstreamStats {
    fn record(&mut self, ok: bool) {
        self.attempted += 1;
        if ok {
            self.succeeded += 1;
        }
    }

    fn all_failed(&self) -> bool {
        self.attempted > 0 && self.succeeded == 0
    }
}

/// Resolves pairing suggestions for the current cart through the ordered
/// fallback cascade: frequent pairings, broad pairings, shuffled popular
/// products, then two static samples. The first stage to produce anything
/// wins and later stages are never contacted.
///
/// Read-only with respect to the cart; individual upstream failures degrade
/// to "no candidates from this source" and only a pass where every call
/// failed reports [`PairingUnavailable`].
pub async fn resolve_pairings<G: PairingGateway>(
    cart: &Cart,
    gateway: &G,
    rng: &mut dyn RandomSource,
) -> Result<ResolvedPairings, PairingUnavailable> {
    if cart.is_empty() {
        return Ok(ResolvedPairings::empty());
    }

    let in_cart = cart.keys();
    let sources: Vec<(ProductKey, String)> = cart
        .lines
        .iter()
        .map(|line| (line.key(), line.name.clone()))
        .collect();
    let mut stats = UpstreamStats::default();

    let frequent = explicit_stage(gateway, &sources, &in_cart, true, &mut stats).await;
    if !frequent.is_empty() {
        return Ok(ResolvedPairings::at_stage(PairingStage::Frequent, frequent));
    }

    let broad = explicit_stage(gateway, &sources, &in_cart, false, &mut stats).await;
    if !broad.is_empty() {
        return Ok(ResolvedPairings::at_stage(PairingStage::Broad, broad));
    }

    let popular = popular_stage(gateway, cart, &in_cart, rng, &mut stats).await;
    if !popular.is_empty() {
        return Ok(ResolvedPairings::at_stage(PairingStage::Popular, popular));
    }

    if stats.all_failed() {
        return Err(PairingUnavailable);
    }
    Ok(ResolvedPairings::illustrative())
}

/// Stages 1 and 2: fan out one recommendation request per distinct cart
/// key, await them all, then resolve each surviving entry to a full
/// product record. Candidates already in the cart, or already chosen for
/// the same source, are skipped.
async fn explicit_stage<G: PairingGateway>(
    gateway: &G,
    sources: &[(ProductKey, String)],
    in_cart: &HashSet<ProductKey>,
    use_frequent: bool,
    stats: &mut UpstreamStats,
) -> SuggestionMap {
    let requests = sources.iter().map(|(key, _)| {
        let key = *key;
        async move { (key, gateway.recommendations(key, use_frequent).await) }
    });
    let responses = join_all(requests).await;

    let mut map = SuggestionMap::new();
    for ((source_key, result), (_, source_name)) in responses.into_iter().zip(sources) {
        let entries = match result {
            Ok(entries) => {
                stats.record(true);
                entries
            }
            Err(err) => {
                stats.record(false);
                log::warn!("pairing: recommendations for {source_key} failed: {err}");
                continue;
            }
        };
        if entries.is_empty() {
            continue;
        }

        let recommended_category = source_key.category.opposite();
        let mut seen: HashSet<ProductKey> = HashSet::new();
        let mut items = Vec::new();
        for entry in entries.iter().take(MAX_EXPLICIT_CANDIDATES) {
            let Some(id) = entry.recommended_id(recommended_category) else {
                continue;
            };
            let candidate_key = ProductKey::new(recommended_category, id);
            if in_cart.contains(&candidate_key) || !seen.insert(candidate_key) {
                continue;
            }
            match gateway.product(candidate_key).await {
                Ok(profile) => {
                    stats.record(true);
                    items.push(PairingCandidate::from_profile(profile, entry, source_name));
                }
                Err(err) => {
                    stats.record(false);
                    log::warn!("pairing: product {candidate_key} failed to load: {err}");
                }
            }
        }
        if !items.is_empty() {
            map.insert(
                source_key,
                PairingSuggestion {
                    source_category: source_key.category,
                    source_id: source_key.id,
                    source_name: source_name.clone(),
                    items,
                },
            );
        }
    }
    map
}

/// Stage 3: draw shuffled candidates from the opposite category's
/// top-rated pool. Dedup here is global across the whole pass, so two cart
/// lines never share a fallback suggestion.
async fn popular_stage<G: PairingGateway>(
    gateway: &G,
    cart: &Cart,
    in_cart: &HashSet<ProductKey>,
    rng: &mut dyn RandomSource,
    stats: &mut UpstreamStats,
) -> SuggestionMap {
    let (wine_pool, coffee_pool) = join(
        popular_pool(gateway, ProductCategory::Wine),
        popular_pool(gateway, ProductCategory::Coffee),
    )
    .await;
    let wine_pool = settle_pool(wine_pool, stats);
    let coffee_pool = settle_pool(coffee_pool, stats);

    let mut used: HashSet<ProductKey> = HashSet::new();
    let mut map = SuggestionMap::new();
    for line in &cart.lines {
        let pool = match line.category {
            ProductCategory::Wine => &coffee_pool,
            ProductCategory::Coffee => &wine_pool,
        };
        if pool.is_empty() {
            continue;
        }
        let mut shuffled = pool.clone();
        shuffle(&mut shuffled, rng);

        let mut items = Vec::new();
        for profile in shuffled {
            if items.len() == MAX_POPULAR_CANDIDATES {
                break;
            }
            let candidate_key = profile.key();
            if in_cart.contains(&candidate_key) || !used.insert(candidate_key) {
                continue;
            }
            items.push(PairingCandidate::from_popular(profile, &line.name));
        }
        if !items.is_empty() {
            map.insert(
                line.key(),
                PairingSuggestion {
                    source_category: line.category,
                    source_id: line.product_id,
                    source_name: line.name.clone(),
                    items,
                },
            );
        }
    }
    map
}

enum PoolFetch {
    TopRated(Vec<ProductProfile>),
    /// Top-rated call failed; the full catalog stood in.
    Catalog(Vec<ProductProfile>),
    Failed,
}

async fn popular_pool<G: PairingGateway>(gateway: &G, category: ProductCategory) -> PoolFetch {
    match gateway.top_rated(category, POPULAR_POOL_LIMIT).await {
        Ok(pool) => PoolFetch::TopRated(pool),
        Err(err) => {
            log::warn!("pairing: top-rated {category} failed ({err}), using full catalog");
            match gateway.all_products(category).await {
                Ok(pool) => PoolFetch::Catalog(pool),
                Err(err) => {
                    log::warn!("pairing: full catalog {category} failed: {err}");
                    PoolFetch::Failed
                }
            }
        }
    }
}

fn settle_pool(fetch: PoolFetch, stats: &mut UpstreamStats) -> Vec<ProductProfile> {
    match fetch {
        PoolFetch::TopRated(pool) => {
            stats.record(true);
            pool
        }
        PoolFetch::Catalog(pool) => {
            // top-rated failed, catalog succeeded
            stats.record(false);
            stats.record(true);
            pool
        }
        PoolFetch::Failed => {
            stats.record(false);
            stats.record(false);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::CartLine;
    use crate::domain::pairing::gateway::GatewayResult;
    use crate::domain::pairing::types::RecommendationEntry;
    use anyhow::anyhow;
    use std::cell::Cell;
    use std::collections::HashMap;

    /// pick(upper) = upper - 1 makes every Fisher-Yates swap a no-op, so
    /// the "shuffled" pool keeps its original order.
    struct KeepOrder;

    impl RandomSource for KeepOrder {
        fn pick(&mut self, upper: usize) -> usize {
            upper - 1
        }
    }

    #[derive(Default)]
    struct MockGateway {
        frequent: HashMap<ProductKey, Vec<RecommendationEntry>>,
        broad: HashMap<ProductKey, Vec<RecommendationEntry>>,
        products: HashMap<ProductKey, ProductProfile>,
        top_rated_pools: HashMap<ProductCategory, Vec<ProductProfile>>,
        catalog_pools: HashMap<ProductCategory, Vec<ProductProfile>>,
        fail_recommendations_for: HashSet<ProductKey>,
        fail_everything: bool,
        fail_top_rated: bool,
        frequent_calls: Cell<u32>,
        broad_calls: Cell<u32>,
        product_calls: Cell<u32>,
        top_rated_calls: Cell<u32>,
        all_products_calls: Cell<u32>,
    }

    impl PairingGateway for MockGateway {
        async fn recommendations(
            &self,
            source: ProductKey,
            use_frequent: bool,
        ) -> GatewayResult<Vec<RecommendationEntry>> {
            let calls = if use_frequent {
                &self.frequent_calls
            } else {
                &self.broad_calls
            };
            calls.set(calls.get() + 1);
            if self.fail_everything || self.fail_recommendations_for.contains(&source) {
                return Err(anyhow!("connection refused"));
            }
            let table = if use_frequent {
                &self.frequent
            } else {
                &self.broad
            };
            Ok(table.get(&source).cloned().unwrap_or_default())
        }

        async fn product(&self, key: ProductKey) -> GatewayResult<ProductProfile> {
            self.product_calls.set(self.product_calls.get() + 1);
            if self.fail_everything {
                return Err(anyhow!("connection refused"));
            }
            self.products
                .get(&key)
                .cloned()
                .ok_or_else(|| anyhow!("no product {key}"))
        }

        async fn top_rated(
            &self,
            category: ProductCategory,
            _limit: u32,
        ) -> GatewayResult<Vec<ProductProfile>> {
            self.top_rated_calls.set(self.top_rated_calls.get() + 1);
            if self.fail_everything || self.fail_top_rated {
                return Err(anyhow!("connection refused"));
            }
            Ok(self
                .top_rated_pools
                .get(&category)
                .cloned()
                .unwrap_or_default())
        }

        async fn all_products(
            &self,
            category: ProductCategory,
        ) -> GatewayResult<Vec<ProductProfile>> {
            self.all_products_calls
                .set(self.all_products_calls.get() + 1);
            if self.fail_everything {
                return Err(anyhow!("connection refused"));
            }
            Ok(self
                .catalog_pools
                .get(&category)
                .cloned()
                .unwrap_or_default())
        }
    }

    fn profile(category: ProductCategory, id: i64, name: &str) -> ProductProfile {
        ProductProfile {
            category,
            id,
            name: name.to_string(),
            product_type: None,
            region: None,
            origin: None,
            country: None,
            vintage: None,
            alcohol_content: None,
            roast_level: None,
            acidity_level: None,
            price: Some(1000.0),
            description: None,
        }
    }

    fn wine_line(id: i64, name: &str) -> CartLine {
        CartLine {
            product_id: id,
            category: ProductCategory::Wine,
            name: name.to_string(),
            price: 2400.0,
            quantity: 1,
        }
    }

    fn coffee_line(id: i64, name: &str) -> CartLine {
        CartLine {
            product_id: id,
            category: ProductCategory::Coffee,
            name: name.to_string(),
            price: 900.0,
            quantity: 1,
        }
    }

    fn coffee_entry(id: i64) -> RecommendationEntry {
        RecommendationEntry {
            coffee_id: Some(id),
            ..Default::default()
        }
    }

    fn cart_of(lines: Vec<CartLine>) -> Cart {
        Cart { lines }
    }

    #[tokio::test]
    async fn empty_cart_makes_no_calls() {
        let gateway = MockGateway::default();
        let resolved = resolve_pairings(&Cart::default(), &gateway, &mut KeepOrder)
            .await
            .unwrap();
        assert!(resolved.is_empty());
        assert_eq!(resolved.stage, None);
        assert_eq!(gateway.frequent_calls.get(), 0);
        assert_eq!(gateway.broad_calls.get(), 0);
        assert_eq!(gateway.top_rated_calls.get(), 0);
        assert_eq!(gateway.all_products_calls.get(), 0);
    }

    #[tokio::test]
    async fn frequent_stage_annotates_source_and_excludes_cart_items() {
        // Cart holds wine 7 and coffee 7; the recommendation for coffee 7
        // must be dropped, coffee 3 kept and tagged with the wine's name.
        let mut gateway = MockGateway::default();
        let wine_key = ProductKey::new(ProductCategory::Wine, 7);
        gateway
            .frequent
            .insert(wine_key, vec![coffee_entry(3), coffee_entry(7)]);
        gateway.products.insert(
            ProductKey::new(ProductCategory::Coffee, 3),
            profile(ProductCategory::Coffee, 3, "Peaberry"),
        );

        let cart = cart_of(vec![
            wine_line(7, "Malbec Reserve"),
            coffee_line(7, "House Blend"),
        ]);
        let resolved = resolve_pairings(&cart, &gateway, &mut KeepOrder)
            .await
            .unwrap();

        assert_eq!(resolved.stage, Some(PairingStage::Frequent));
        let suggestion = &resolved.suggestions[&wine_key];
        assert_eq!(suggestion.source_name, "Malbec Reserve");
        assert_eq!(suggestion.items.len(), 1);
        assert_eq!(suggestion.items[0].id, Some(3));
        assert_eq!(suggestion.items[0].source_name, "Malbec Reserve");
        for suggestion in resolved.suggestions.values() {
            for item in &suggestion.items {
                assert!(!cart.keys().contains(&item.key().unwrap()));
            }
        }
    }

    #[tokio::test]
    async fn frequent_stage_keeps_both_when_nothing_in_cart_collides() {
        let mut gateway = MockGateway::default();
        let wine_key = ProductKey::new(ProductCategory::Wine, 7);
        gateway
            .frequent
            .insert(wine_key, vec![coffee_entry(3), coffee_entry(7)]);
        for id in [3, 7] {
            gateway.products.insert(
                ProductKey::new(ProductCategory::Coffee, id),
                profile(ProductCategory::Coffee, id, "coffee"),
            );
        }

        let cart = cart_of(vec![wine_line(7, "Malbec Reserve")]);
        let resolved = resolve_pairings(&cart, &gateway, &mut KeepOrder)
            .await
            .unwrap();
        let items = &resolved.suggestions[&wine_key].items;
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.source_name == "Malbec Reserve"));
    }

    #[tokio::test]
    async fn duplicate_entries_collapse_within_a_source() {
        let mut gateway = MockGateway::default();
        let wine_key = ProductKey::new(ProductCategory::Wine, 1);
        gateway
            .frequent
            .insert(wine_key, vec![coffee_entry(3), coffee_entry(3)]);
        gateway.products.insert(
            ProductKey::new(ProductCategory::Coffee, 3),
            profile(ProductCategory::Coffee, 3, "Peaberry"),
        );

        let cart = cart_of(vec![wine_line(1, "Chianti")]);
        let resolved = resolve_pairings(&cart, &gateway, &mut KeepOrder)
            .await
            .unwrap();
        assert_eq!(resolved.suggestions[&wine_key].items.len(), 1);
    }

    #[tokio::test]
    async fn frequent_hit_skips_every_later_stage() {
        let mut gateway = MockGateway::default();
        let wine_key = ProductKey::new(ProductCategory::Wine, 1);
        gateway.frequent.insert(wine_key, vec![coffee_entry(3)]);
        gateway.products.insert(
            ProductKey::new(ProductCategory::Coffee, 3),
            profile(ProductCategory::Coffee, 3, "Peaberry"),
        );

        let cart = cart_of(vec![wine_line(1, "Chianti")]);
        let resolved = resolve_pairings(&cart, &gateway, &mut KeepOrder)
            .await
            .unwrap();
        assert_eq!(resolved.stage, Some(PairingStage::Frequent));
        assert_eq!(gateway.broad_calls.get(), 0);
        assert_eq!(gateway.top_rated_calls.get(), 0);
        assert_eq!(gateway.all_products_calls.get(), 0);
    }

    #[tokio::test]
    async fn broad_stage_runs_only_after_frequent_comes_up_empty() {
        let mut gateway = MockGateway::default();
        let wine_key = ProductKey::new(ProductCategory::Wine, 1);
        gateway.broad.insert(wine_key, vec![coffee_entry(9)]);
        gateway.products.insert(
            ProductKey::new(ProductCategory::Coffee, 9),
            profile(ProductCategory::Coffee, 9, "Sidamo"),
        );

        let cart = cart_of(vec![wine_line(1, "Chianti")]);
        let resolved = resolve_pairings(&cart, &gateway, &mut KeepOrder)
            .await
            .unwrap();
        assert_eq!(resolved.stage, Some(PairingStage::Broad));
        assert_eq!(gateway.frequent_calls.get(), 1);
        assert_eq!(gateway.broad_calls.get(), 1);
        assert_eq!(resolved.suggestions[&wine_key].items[0].id, Some(9));
    }

    #[tokio::test]
    async fn one_failing_source_degrades_without_sinking_the_stage() {
        let mut gateway = MockGateway::default();
        let good = ProductKey::new(ProductCategory::Wine, 1);
        let bad = ProductKey::new(ProductCategory::Wine, 2);
        gateway.frequent.insert(good, vec![coffee_entry(3)]);
        gateway.fail_recommendations_for.insert(bad);
        gateway.products.insert(
            ProductKey::new(ProductCategory::Coffee, 3),
            profile(ProductCategory::Coffee, 3, "Peaberry"),
        );

        let cart = cart_of(vec![wine_line(1, "Chianti"), wine_line(2, "Syrah")]);
        let resolved = resolve_pairings(&cart, &gateway, &mut KeepOrder)
            .await
            .unwrap();
        assert_eq!(resolved.stage, Some(PairingStage::Frequent));
        assert_eq!(resolved.suggestions.len(), 1);
        assert!(resolved.suggestions.contains_key(&good));
    }

    #[tokio::test]
    async fn popular_stage_dedups_globally_across_sources() {
        // Two wine lines, explicit stages empty, a coffee pool of 6: the
        // two sources must draw 3 + 3 distinct coffees.
        let mut gateway = MockGateway::default();
        gateway.top_rated_pools.insert(
            ProductCategory::Coffee,
            (1..=6)
                .map(|id| profile(ProductCategory::Coffee, id, "coffee"))
                .collect(),
        );
        gateway
            .top_rated_pools
            .insert(ProductCategory::Wine, Vec::new());

        let cart = cart_of(vec![wine_line(1, "Chianti"), wine_line(2, "Syrah")]);
        let resolved = resolve_pairings(&cart, &gateway, &mut KeepOrder)
            .await
            .unwrap();

        assert_eq!(resolved.stage, Some(PairingStage::Popular));
        assert_eq!(resolved.suggestions.len(), 2);
        let mut all_ids: Vec<i64> = resolved
            .suggestions
            .values()
            .flat_map(|s| s.items.iter().filter_map(|i| i.id))
            .collect();
        assert_eq!(all_ids.len(), 6);
        all_ids.sort_unstable();
        all_ids.dedup();
        assert_eq!(all_ids.len(), 6, "fallback suggestions repeated an id");
    }

    #[tokio::test]
    async fn popular_stage_never_suggests_what_is_already_in_the_cart() {
        // Coffee 2 sits in the cart and in the shuffled pool; the wine
        // line must draw around it.
        let mut gateway = MockGateway::default();
        gateway.top_rated_pools.insert(
            ProductCategory::Coffee,
            (1..=3)
                .map(|id| profile(ProductCategory::Coffee, id, "coffee"))
                .collect(),
        );
        gateway
            .top_rated_pools
            .insert(ProductCategory::Wine, Vec::new());

        let cart = cart_of(vec![wine_line(1, "Chianti"), coffee_line(2, "House Blend")]);
        let resolved = resolve_pairings(&cart, &gateway, &mut KeepOrder)
            .await
            .unwrap();

        assert_eq!(resolved.stage, Some(PairingStage::Popular));
        let in_cart = cart.keys();
        let picked: Vec<i64> = resolved
            .suggestions
            .values()
            .flat_map(|s| s.items.iter())
            .inspect(|item| {
                let key = item.key().expect("fallback candidates carry ids");
                assert!(!in_cart.contains(&key), "suggested an item already in the cart");
            })
            .filter_map(|item| item.id)
            .collect();
        assert_eq!(picked, vec![1, 3]);
    }

    #[tokio::test]
    async fn popular_stage_falls_back_to_catalog_when_top_rated_fails() {
        let mut gateway = MockGateway::default();
        gateway.fail_top_rated = true;
        gateway.catalog_pools.insert(
            ProductCategory::Coffee,
            vec![profile(ProductCategory::Coffee, 5, "Peaberry")],
        );
        gateway
            .catalog_pools
            .insert(ProductCategory::Wine, Vec::new());

        let cart = cart_of(vec![wine_line(1, "Chianti")]);
        let resolved = resolve_pairings(&cart, &gateway, &mut KeepOrder)
            .await
            .unwrap();
        assert_eq!(resolved.stage, Some(PairingStage::Popular));
        assert_eq!(gateway.all_products_calls.get(), 2);
        let items = &resolved.suggestions[&ProductKey::new(ProductCategory::Wine, 1)].items;
        assert_eq!(items[0].id, Some(5));
        assert_eq!(
            items[0].description.as_deref(),
            Some("Curated to complement Chianti")
        );
    }

    #[tokio::test]
    async fn everything_empty_yields_the_two_samples() {
        let gateway = MockGateway::default();
        let cart = cart_of(vec![wine_line(1, "Chianti")]);
        let resolved = resolve_pairings(&cart, &gateway, &mut KeepOrder)
            .await
            .unwrap();
        assert_eq!(resolved.stage, Some(PairingStage::Sample));
        assert!(resolved.suggestions.is_empty());
        assert_eq!(resolved.samples.len(), 2);
        // Demo entries carry no catalog id, so they cannot collide with
        // anything in the cart.
        assert!(resolved.samples.iter().all(|s| s.key().is_none()));
    }

    #[tokio::test]
    async fn total_outage_reports_unavailable_instead_of_samples() {
        let gateway = MockGateway {
            fail_everything: true,
            ..Default::default()
        };
        let cart = cart_of(vec![wine_line(1, "Chianti"), coffee_line(2, "Sidamo")]);
        let result = resolve_pairings(&cart, &gateway, &mut KeepOrder).await;
        assert_eq!(result.unwrap_err(), PairingUnavailable);
    }

    #[tokio::test]
    async fn candidate_order_follows_upstream_not_score() {
        // Scores are advisory; the resolver must not re-sort by them.
        let mut gateway = MockGateway::default();
        let wine_key = ProductKey::new(ProductCategory::Wine, 1);
        gateway.frequent.insert(
            wine_key,
            vec![
                RecommendationEntry {
                    coffee_id: Some(4),
                    pairing_score: Some(2.0),
                    ..Default::default()
                },
                RecommendationEntry {
                    coffee_id: Some(5),
                    pairing_score: Some(9.9),
                    ..Default::default()
                },
            ],
        );
        for id in [4, 5] {
            gateway.products.insert(
                ProductKey::new(ProductCategory::Coffee, id),
                profile(ProductCategory::Coffee, id, "coffee"),
            );
        }

        let cart = cart_of(vec![wine_line(1, "Chianti")]);
        let resolved = resolve_pairings(&cart, &gateway, &mut KeepOrder)
            .await
            .unwrap();
        let ids: Vec<i64> = resolved.suggestions[&wine_key]
            .items
            .iter()
            .filter_map(|i| i.id)
            .collect();
        assert_eq!(ids, vec![4, 5]);
    }

    #[tokio::test]
    async fn explicit_stage_caps_at_four_candidates() {
        let mut gateway = MockGateway::default();
        let wine_key = ProductKey::new(ProductCategory::Wine, 1);
        gateway
            .frequent
            .insert(wine_key, (1..=6).map(coffee_entry).collect());
        for id in 1..=6 {
            gateway.products.insert(
                ProductKey::new(ProductCategory::Coffee, id),
                profile(ProductCategory::Coffee, id, "coffee"),
            );
        }

        let cart = cart_of(vec![wine_line(1, "Chianti")]);
        let resolved = resolve_pairings(&cart, &gateway, &mut KeepOrder)
            .await
            .unwrap();
        assert_eq!(resolved.suggestions[&wine_key].items.len(), 4);
    }
}
