//! Property tests for the sparse-vector scorer.

use proptest::prelude::*;
use yatra_recommend::SparseVector;

fn token_strategy() -> impl Strategy<Value = String> {
    "[a-f]{1,3}"
}

fn tokens_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(token_strategy(), 0..40)
}

proptest! {
    #[test]
    fn self_similarity_is_one_for_non_empty(tokens in prop::collection::vec(token_strategy(), 1..40)) {
        let v = SparseVector::from_tokens(tokens.into_iter());
        let sim = v.cosine(&v);
        prop_assert!((sim - 1.0).abs() < 1e-9);
    }

    #[test]
    fn cosine_is_symmetric(a in tokens_strategy(), b in tokens_strategy()) {
        let va = SparseVector::from_tokens(a.into_iter());
        let vb = SparseVector::from_tokens(b.into_iter());
        prop_assert!((va.cosine(&vb) - vb.cosine(&va)).abs() < 1e-9);
    }

    #[test]
    fn cosine_stays_in_unit_interval(a in tokens_strategy(), b in tokens_strategy()) {
        let va = SparseVector::from_tokens(a.into_iter());
        let vb = SparseVector::from_tokens(b.into_iter());
        let sim = va.cosine(&vb);
        prop_assert!(sim.is_finite());
        prop_assert!((0.0..=1.0 + 1e-9).contains(&sim));
    }

    #[test]
    fn disjoint_token_sets_score_zero(a in tokens_strategy(), b in tokens_strategy()) {
        // Force disjointness by prefixing each side.
        let va = SparseVector::from_tokens(a.into_iter().map(|t| format!("x{t}")));
        let vb = SparseVector::from_tokens(b.into_iter().map(|t| format!("y{t}")));
        prop_assert_eq!(va.cosine(&vb), 0.0);
    }

    #[test]
    fn merge_matches_concatenation(a in tokens_strategy(), b in tokens_strategy()) {
        let mut merged = SparseVector::from_tokens(a.clone().into_iter());
        merged.merge(&SparseVector::from_tokens(b.clone().into_iter()));
        let concatenated =
            SparseVector::from_tokens(a.into_iter().chain(b.into_iter()));
        prop_assert_eq!(merged, concatenated);
    }

    #[test]
    fn token_order_never_changes_the_vector(mut tokens in tokens_strategy()) {
        let forward = SparseVector::from_tokens(tokens.clone().into_iter());
        tokens.reverse();
        let reversed = SparseVector::from_tokens(tokens.into_iter());
        prop_assert_eq!(forward, reversed);
    }
}
