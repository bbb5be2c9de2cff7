use crate::domain::catalog::ProductCategory;
use crate::domain::pairing::types::PairingCandidate;

/// Two illustrative pairings shown when the cascade produces nothing at
/// all. They carry no catalog id, are never persisted, and never enter the
/// dedup bookkeeping.
pub fn sample_pairings() -> Vec<PairingCandidate> {
    vec![
        PairingCandidate {
            category: ProductCategory::Wine,
            id: None,
            name: "Cabernet Sauvignon Reserve".to_string(),
            product_type: Some("Red".to_string()),
            region: Some("Napa Valley".to_string()),
            origin: None,
            country: Some("USA".to_string()),
            vintage: Some(2018),
            alcohol_content: Some(14.5),
            roast_level: None,
            acidity_level: None,
            price: Some(5200.0),
            pairing_score: Some(9.6),
            purchase_count: None,
            description: Some(
                "Bold blackcurrant notes that balance the floral sweetness of \
                 Ethiopian Yirgacheffe coffee."
                    .to_string(),
            ),
            source_name: "Ethiopian Yirgacheffe Coffee".to_string(),
        },
        PairingCandidate {
            category: ProductCategory::Coffee,
            id: None,
            name: "Ethiopian Yirgacheffe".to_string(),
            product_type: Some("Arabica".to_string()),
            region: None,
            origin: Some("Yirgacheffe".to_string()),
            country: Some("Ethiopia".to_string()),
            vintage: None,
            alcohol_content: None,
            roast_level: Some("medium-light".to_string()),
            acidity_level: Some("bright".to_string()),
            price: Some(1800.0),
            pairing_score: Some(9.4),
            purchase_count: None,
            description: Some(
                "Floral citrus profile that pairs beautifully with buttery \
                 Chardonnay and crisp white wines."
                    .to_string(),
            ),
            source_name: "Sonoma Coast Chardonnay".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_carry_no_catalog_identity() {
        // Demo entries must never collide with live cart keys.
        for sample in sample_pairings() {
            assert!(sample.key().is_none());
        }
    }

    #[test]
    fn exactly_two_samples() {
        assert_eq!(sample_pairings().len(), 2);
    }
}
