/// Injectable randomness. The browser build wraps `Math.random`; tests use
/// a deterministic sequence so shuffle- and stock-dependent behavior can be
/// asserted exactly.
pub trait RandomSource {
    /// A uniformly distributed index in `0..upper`. `upper` is never 0 at
    /// the call sites.
    fn pick(&mut self, upper: usize) -> usize;
}

/// Fisher-Yates shuffle driven by a [`RandomSource`].
pub fn shuffle<T>(items: &mut [T], rng: &mut dyn RandomSource) {
    for i in (1..items.len()).rev() {
        let j = rng.pick(i + 1);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(usize);

    impl RandomSource for Fixed {
        fn pick(&mut self, upper: usize) -> usize {
            self.0 % upper
        }
    }

    #[test]
    fn shuffle_with_zero_picks_is_deterministic() {
        // j = 0 at every step: [1,2,3,4] -> [4,2,3,1] -> [3,2,4,1] -> [2,3,4,1]
        let mut items = vec![1, 2, 3, 4];
        shuffle(&mut items, &mut Fixed(0));
        assert_eq!(items, vec![2, 3, 4, 1]);
    }

    #[test]
    fn shuffle_preserves_elements() {
        let mut items = vec![5, 6, 7, 8, 9];
        shuffle(&mut items, &mut Fixed(3));
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![5, 6, 7, 8, 9]);
    }
}
