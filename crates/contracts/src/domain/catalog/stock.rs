use crate::domain::random::RandomSource;

/// Display stock for a product, banded by rarity: the pricier the bottle or
/// bag, the fewer units the storefront claims to have on hand.
///
/// Bands: price > 20000 -> 1..=5, > 10000 -> 5..=15, > 5000 -> 10..=30,
/// otherwise 30..=100.
pub fn display_stock(price: f64, rng: &mut dyn RandomSource) -> u32 {
    let (base, spread) = if price > 20000.0 {
        (1, 5)
    } else if price > 10000.0 {
        (5, 11)
    } else if price > 5000.0 {
        (10, 21)
    } else {
        (30, 71)
    };
    base + rng.pick(spread) as u32
}
