//! Reference trial-division engine.
//!
//! The plain rendition of the contract: every divisor from 2 up to
//! `floor(sqrt(n))` is tried in order, for every candidate in the range.

/// Check if a number is prime by trial division.
///
/// Handles any `n`, including 0 and 1 (not prime).
pub fn is_prime(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    for d in 2..=n.isqrt() {
        if n % d == 0 {
            return false;
        }
    }
    true
}

/// Sum of all primes in `[2, bound]`.
///
/// Pure and deterministic; `bound < 2` yields 0. The `u64` accumulator is
/// safe for any bound the interactive harness realistically sees: the sum
/// of primes up to N stays below N^2, so bounds into the low billions are
/// representable, far past the 10^6..10^8 range this tool targets.
pub fn sum_primes(bound: u64) -> u64 {
    let mut sum = 0u64;
    for n in 2..=bound {
        if is_prime(n) {
            sum += n;
        }
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_prime_small() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(is_prime(5));
        assert!(!is_prime(9));
        assert!(is_prime(97));
        assert!(!is_prime(100));
    }

    #[test]
    fn test_is_prime_square_of_prime() {
        // 49 = 7*7: the divisor 7 equals floor(sqrt(49)) exactly, so the
        // inclusive loop bound matters.
        assert!(!is_prime(49));
        assert!(!is_prime(121));
        assert!(!is_prime(10_201)); // 101^2
    }

    #[test]
    fn test_sum_primes_known_values() {
        assert_eq!(sum_primes(0), 0);
        assert_eq!(sum_primes(1), 0);
        assert_eq!(sum_primes(2), 2);
        assert_eq!(sum_primes(10), 17); // 2+3+5+7
        assert_eq!(sum_primes(100), 1060);
        assert_eq!(sum_primes(1_000), 76_127);
    }

    #[test]
    fn test_sum_primes_bound_is_prime() {
        // Inclusive upper bound: the bound itself counts when prime.
        assert_eq!(sum_primes(3), 5);
        assert_eq!(sum_primes(7), 17);
        assert_eq!(sum_primes(11), sum_primes(10) + 11);
    }
}
