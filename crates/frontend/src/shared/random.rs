use contracts::domain::random::RandomSource;

/// Browser randomness: `Math.random()` scaled to `0..upper`.
pub struct JsRandom;

impl RandomSource for JsRandom {
    fn pick(&mut self, upper: usize) -> usize {
        if upper == 0 {
            return 0;
        }
        let raw = js_sys::Math::random() * upper as f64;
        (raw as usize).min(upper - 1)
    }
}
