//! Weighted merge of the content-based and collaborative rankings.

use std::collections::HashMap;

use yatra_core::config::RecommendConfig;
use yatra_core::recommendation::{Recommendation, Strategy};

/// Merge the two sub-rankings by item id: content confidence weighted by
/// `content_weight`, collaborative by `collab_weight`. An item present in
/// only one list contributes only its own weighted term. Every merged row
/// is tagged `hybrid` and capped at `confidence_cap`.
pub fn merge_weighted(
    content: Vec<Recommendation>,
    collaborative: Vec<Recommendation>,
    config: &RecommendConfig,
    limit: usize,
) -> Vec<Recommendation> {
    let mut merged: HashMap<String, (Recommendation, f64)> = HashMap::new();

    for rec in content {
        let score = rec.confidence * config.content_weight;
        merged.insert(rec.id.clone(), (rec, score));
    }
    for rec in collaborative {
        let weighted = rec.confidence * config.collab_weight;
        match merged.get_mut(&rec.id) {
            Some((_, score)) => *score += weighted,
            None => {
                merged.insert(rec.id.clone(), (rec, weighted));
            }
        }
    }

    let mut rows: Vec<(Recommendation, f64)> = merged.into_values().collect();
    // Descending merged score; ties break on item id ascending.
    rows.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.id.cmp(&b.0.id))
    });
    rows.truncate(limit);

    rows.into_iter()
        .map(|(mut rec, score)| {
            rec.strategy = Strategy::Hybrid;
            rec.confidence = score.min(config.confidence_cap);
            rec
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(id: &str, strategy: Strategy, confidence: f64) -> Recommendation {
        Recommendation {
            id: id.into(),
            strategy,
            destination: format!("{id}, Somewhere"),
            title: "t".into(),
            description: String::new(),
            confidence,
            highlights: vec![],
        }
    }

    #[test]
    fn item_in_both_lists_gets_weighted_sum() {
        let config = RecommendConfig::default();
        let merged = merge_weighted(
            vec![rec("p1", Strategy::Content, 0.8)],
            vec![rec("p1", Strategy::Collaborative, 0.5)],
            &config,
            10,
        );
        assert_eq!(merged.len(), 1);
        assert!((merged[0].confidence - 0.68).abs() < 1e-9);
        assert_eq!(merged[0].strategy, Strategy::Hybrid);
    }

    #[test]
    fn one_sided_items_keep_their_own_weighted_term() {
        let config = RecommendConfig::default();
        let merged = merge_weighted(
            vec![rec("p1", Strategy::Content, 0.5)],
            vec![rec("p2", Strategy::Collaborative, 0.5)],
            &config,
            10,
        );
        assert_eq!(merged.len(), 2);
        // 0.5*0.6 = 0.30 beats 0.5*0.4 = 0.20.
        assert_eq!(merged[0].id, "p1");
        assert!((merged[0].confidence - 0.30).abs() < 1e-9);
        assert_eq!(merged[1].id, "p2");
        assert!((merged[1].confidence - 0.20).abs() < 1e-9);
    }

    #[test]
    fn merged_confidence_is_capped() {
        let config = RecommendConfig::default();
        let merged = merge_weighted(
            vec![rec("p1", Strategy::Content, 1.0)],
            vec![rec("p1", Strategy::Collaborative, 1.0)],
            &config,
            10,
        );
        // 0.6 + 0.4 = 1.0, capped to 0.99.
        assert!((merged[0].confidence - 0.99).abs() < 1e-9);
    }

    #[test]
    fn equal_scores_order_by_id() {
        let config = RecommendConfig::default();
        let merged = merge_weighted(
            vec![
                rec("pb", Strategy::Content, 0.5),
                rec("pa", Strategy::Content, 0.5),
            ],
            vec![],
            &config,
            10,
        );
        assert_eq!(merged[0].id, "pa");
        assert_eq!(merged[1].id, "pb");
    }

    #[test]
    fn truncates_to_limit() {
        let config = RecommendConfig::default();
        let merged = merge_weighted(
            vec![
                rec("p1", Strategy::Content, 0.9),
                rec("p2", Strategy::Content, 0.8),
                rec("p3", Strategy::Content, 0.7),
            ],
            vec![],
            &config,
            2,
        );
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].id, "p1");
    }
}
