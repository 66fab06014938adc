//! Cross-variant agreement: the harness's core correctness property.

use prime_bench::engine::EngineKind;

/// Known prime sums, independently sourced.
const KNOWN_SUMS: &[(u64, u64)] = &[
    (0, 0),
    (1, 0),
    (2, 2),
    (10, 17),
    (100, 1_060),
    (1_000, 76_127),
    (10_000, 5_736_396),
];

#[test]
fn test_known_sums_both_variants() {
    for &(bound, expected) in KNOWN_SUMS {
        for kind in EngineKind::ALL {
            assert_eq!(
                kind.sum_primes(bound),
                expected,
                "{kind} wrong at bound={bound}"
            );
        }
    }
}

#[test]
fn test_agreement_at_awkward_bounds() {
    // Bounds sitting on primes, prime squares, and their neighbours.
    for bound in [3u64, 4, 5, 25, 48, 49, 50, 120, 121, 122, 541, 7_919, 7_920] {
        assert_eq!(
            EngineKind::Scalar.sum_primes(bound),
            EngineKind::Strided.sum_primes(bound),
            "disagreement at bound={bound}"
        );
    }
}

#[test]
fn test_agreement_exhaustive_small_range() {
    for bound in 0..=2_000u64 {
        assert_eq!(
            EngineKind::Scalar.sum_primes(bound),
            EngineKind::Strided.sum_primes(bound),
            "disagreement at bound={bound}"
        );
    }
}

#[test]
fn test_larger_bound_known_sum() {
    // Sum of all primes up to 100,000.
    assert_eq!(EngineKind::Strided.sum_primes(100_000), 454_396_537);
}
