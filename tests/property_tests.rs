//! Property-based tests for the metric invariants.

use proptest::prelude::*;
use vecsim::{
    cosine_similarity, dot_product, euclidean_distance, euclidean_distance_squared, norm,
};

/// Two vectors of the same random length in `1..=max_len`.
fn arb_vec_pair(max_len: usize) -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (1..=max_len).prop_flat_map(|len| {
        (
            proptest::collection::vec(-100.0f64..100.0, len),
            proptest::collection::vec(-100.0f64..100.0, len),
        )
    })
}

/// Two vectors of different lengths, either possibly empty.
fn arb_mismatched_pair() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (0usize..16, 0usize..16)
        .prop_filter("lengths must differ", |(l, r)| l != r)
        .prop_flat_map(|(l, r)| {
            (
                proptest::collection::vec(-100.0f64..100.0, l),
                proptest::collection::vec(-100.0f64..100.0, r),
            )
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        ..ProptestConfig::default()
    })]

    #[test]
    fn dot_product_is_commutative((a, b) in arb_vec_pair(64)) {
        prop_assert_eq!(dot_product(&a, &b).unwrap(), dot_product(&b, &a).unwrap());
    }

    #[test]
    fn distance_to_self_is_zero((a, _) in arb_vec_pair(64)) {
        prop_assert_eq!(euclidean_distance(&a, &a).unwrap(), 0.0);
    }

    #[test]
    fn distance_is_symmetric_and_non_negative((a, b) in arb_vec_pair(64)) {
        let ab = euclidean_distance(&a, &b).unwrap();
        let ba = euclidean_distance(&b, &a).unwrap();
        prop_assert_eq!(ab, ba);
        prop_assert!(ab >= 0.0);
    }

    #[test]
    fn squared_distance_matches_distance((a, b) in arb_vec_pair(64)) {
        let d = euclidean_distance(&a, &b).unwrap();
        let sq = euclidean_distance_squared(&a, &b).unwrap();
        prop_assert!((d * d - sq).abs() <= sq * 1e-12 + 1e-12);
    }

    #[test]
    fn cosine_within_unit_range((a, b) in arb_vec_pair(64)) {
        prop_assume!(norm(&a) > 0.0 && norm(&b) > 0.0);
        let sim = cosine_similarity(&a, &b).unwrap();
        prop_assert!(
            (-1.0 - 1e-9..=1.0 + 1e-9).contains(&sim),
            "cosine out of range: {}",
            sim
        );
    }

    #[test]
    fn cosine_is_scale_invariant((a, b) in arb_vec_pair(32), scale in 0.1f64..10.0) {
        prop_assume!(norm(&a) > 0.0 && norm(&b) > 0.0);
        let scaled: Vec<f64> = a.iter().map(|x| x * scale).collect();
        let sim = cosine_similarity(&a, &b).unwrap();
        let sim_scaled = cosine_similarity(&scaled, &b).unwrap();
        prop_assert!((sim - sim_scaled).abs() < 1e-9);
    }

    #[test]
    fn cosine_against_zero_vector_is_zero((a, _) in arb_vec_pair(64)) {
        let zeros = vec![0.0; a.len()];
        prop_assert_eq!(cosine_similarity(&a, &zeros).unwrap(), 0.0);
        prop_assert_eq!(cosine_similarity(&zeros, &a).unwrap(), 0.0);
        prop_assert_eq!(cosine_similarity(&zeros, &zeros).unwrap(), 0.0);
    }

    #[test]
    fn mismatched_lengths_never_produce_a_value((a, b) in arb_mismatched_pair()) {
        let expected = (a.len(), b.len());
        prop_assert_eq!(dot_product(&a, &b).unwrap_err().lengths(), expected);
        prop_assert_eq!(euclidean_distance(&a, &b).unwrap_err().lengths(), expected);
        prop_assert_eq!(cosine_similarity(&a, &b).unwrap_err().lengths(), expected);
    }
}
