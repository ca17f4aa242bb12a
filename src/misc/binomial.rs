use std::collections::HashMap;

use log::warn;

use super::{scalar, FloatingPoint};

/// Largest degree covered by the cached factorial table
pub const TRINOMIAL_MAX_DEGREE: usize = 20;

/// `n!` for `n = 0..=20`, every entry fits in a `u64`
const FACTORIALS: [u64; TRINOMIAL_MAX_DEGREE + 1] = {
    let mut table = [1u64; TRINOMIAL_MAX_DEGREE + 1];
    let mut i = 1;
    while i <= TRINOMIAL_MAX_DEGREE {
        table[i] = table[i - 1] * i as u64;
        i += 1;
    }
    table
};

/// Returns the binomial coefficient of `n` and `k`.
pub fn binomial(n: usize, k: usize) -> f64 {
    if k == 0 || k == n {
        return 1.;
    } else if n == 0 || k > n {
        return 0.;
    }

    let k = k.min(n - k);
    let mut r = 1.;
    for i in 0..k {
        r = r * (n - i) as f64 / (i + 1) as f64;
    }
    r
}

/// Returns the trinomial (multinomial) weight `n! / (i! j! (n-i-j)!)`
/// of the Bernstein basis function `B(i, j, n-i-j)` of a degree `n` triangle.
///
/// Degrees above [`TRINOMIAL_MAX_DEGREE`] are outside the factorial table:
/// a warning is logged and `1` is returned.
///
/// # Example
/// ```
/// use trisurf::prelude::choose_weight;
/// assert_eq!(choose_weight::<f64>(1, 1, 3), 6.);
/// assert_eq!(choose_weight::<f64>(0, 0, 3), 1.);
/// ```
pub fn choose_weight<T: FloatingPoint>(i: usize, j: usize, n: usize) -> T {
    if n > TRINOMIAL_MAX_DEGREE {
        warn!(
            "trinomial degree {} exceeds the supported maximum {}",
            n, TRINOMIAL_MAX_DEGREE
        );
        return T::one();
    }
    if i + j > n {
        return T::zero();
    }

    let k = n - i - j;
    let w = FACTORIALS[n] / FACTORIALS[i] / FACTORIALS[j] / FACTORIALS[k];
    scalar(w as f64)
}

/// A memoized binomial coefficient calculator.
/// A memoization map is used to store previously calculated binomial coefficients.
pub struct Binomial<T> {
    memo: HashMap<(usize, usize), T>,
}

impl<T: FloatingPoint> Default for Binomial<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatingPoint> Binomial<T> {
    pub fn new() -> Self {
        Self {
            memo: HashMap::new(),
        }
    }

    /// Returns the binomial coefficient of `n` and `k` with memoization.
    pub fn get(&mut self, n: usize, k: usize) -> T {
        if k == 0 || k == n {
            return T::one();
        } else if n == 0 || k > n {
            return T::zero();
        }

        let k = k.min(n - k);
        if let Some(&memoized) = self.memo.get(&(n, k)) {
            return memoized;
        }

        let r = self.get(n - 1, k) + self.get(n - 1, k - 1);
        self.memo.insert((n, k), r);
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binomial() {
        assert_eq!(binomial(5, 0), 1.);
        assert_eq!(binomial(5, 2), 10.);
        assert_eq!(binomial(5, 4), 5.);
        assert_eq!(binomial(5, 6), 0.);
    }

    #[test]
    fn test_memoized_binomial() {
        let mut memo = Binomial::<f64>::new();
        for n in 1..12 {
            for k in 0..=n {
                assert_eq!(memo.get(n, k), binomial(n, k));
            }
        }
    }

    #[test]
    fn test_choose_weight() {
        assert_eq!(choose_weight::<f64>(1, 1, 3), 6.);
        assert_eq!(choose_weight::<f64>(3, 0, 3), 1.);
        assert_eq!(choose_weight::<f64>(2, 1, 3), 3.);
        assert_eq!(choose_weight::<f64>(2, 2, 3), 0.);
        assert_eq!(choose_weight::<f64>(10, 10, 20), 184756.);
    }

    #[test]
    fn test_choose_weight_out_of_table() {
        assert_eq!(choose_weight::<f64>(1, 1, TRINOMIAL_MAX_DEGREE + 1), 1.);
    }

    #[test]
    fn test_choose_weight_reduces_to_binomial() {
        for n in 0..=TRINOMIAL_MAX_DEGREE {
            for i in 0..=n {
                assert_eq!(choose_weight::<f64>(i, 0, n), binomial(n, i));
            }
        }
    }
}
