//! End-to-end ranking scenarios against the in-memory storage engine.

use yatra_core::catalog::Place;
use yatra_core::interaction::{Action, Interaction, ItemType};
use yatra_core::recommendation::Strategy;
use yatra_core::traits::{IInteractionLog, IRecommender};
use yatra_recommend::RecommendEngine;
use yatra_storage::StorageEngine;

fn place(id: &str, state: &str, category: &str) -> Place {
    Place {
        id: id.into(),
        name: format!("Place {id}"),
        state: state.into(),
        location: None,
        description: None,
        category: Some(category.into()),
        image_url: None,
        accommodations: vec![],
        foods: vec![],
        transport: vec![],
    }
}

fn like(engine: &StorageEngine, actor: &str, item: &str) {
    engine
        .upsert(&Interaction::new(
            actor,
            ItemType::Place,
            item,
            Action::Like,
            None,
            None,
        ))
        .unwrap();
}

#[test]
fn content_ranks_shared_token_candidate_first() {
    let engine = StorageEngine::open_in_memory().unwrap();
    // Token bags: p1 {heritage, jaipur}, p2 {heritage, udaipur}, p3 {beach, goa}.
    engine.insert_place(&place("p1", "Jaipur", "Heritage")).unwrap();
    engine.insert_place(&place("p2", "Udaipur", "Heritage")).unwrap();
    engine.insert_place(&place("p3", "Goa", "Beach")).unwrap();
    like(&engine, "actor-a", "p1");

    let recommender = RecommendEngine::new(&engine, &engine);
    let results = recommender.recommend_content("actor-a", 10).unwrap();

    let ids: Vec<_> = results.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["p2", "p3"]);
    // Shared "heritage" token: cosine of {heritage,jaipur} vs {heritage,udaipur} = 0.5.
    assert!((results[0].confidence - 0.5).abs() < 1e-9);
    assert_eq!(results[1].confidence, 0.0);
    assert!(results.iter().all(|r| r.strategy == Strategy::Content));
}

#[test]
fn recommendations_carry_place_highlights() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let mut p2 = place("p2", "Udaipur", "Heritage");
    p2.accommodations = vec!["Lake View".into(), "City Stay".into()];
    engine.insert_place(&place("p1", "Jaipur", "Heritage")).unwrap();
    engine.insert_place(&p2).unwrap();
    like(&engine, "actor-a", "p1");

    let recommender = RecommendEngine::new(&engine, &engine);
    let results = recommender.recommend_content("actor-a", 10).unwrap();
    assert_eq!(results[0].id, "p2");
    assert_eq!(results[0].highlights, vec!["Lake View", "City Stay"]);
    assert_eq!(results[0].destination, "Place p2, Udaipur");
}

#[test]
fn content_never_recommends_already_liked_items() {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine.insert_place(&place("p1", "Jaipur", "Heritage")).unwrap();
    engine.insert_place(&place("p2", "Udaipur", "Heritage")).unwrap();
    like(&engine, "actor-a", "p1");
    like(&engine, "actor-a", "p2");

    let recommender = RecommendEngine::new(&engine, &engine);
    let results = recommender.recommend_content("actor-a", 10).unwrap();
    assert!(results.is_empty());
}

#[test]
fn content_with_no_signals_returns_zero_scored_candidates() {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine.insert_place(&place("p1", "Jaipur", "Heritage")).unwrap();
    engine.insert_place(&place("p2", "Goa", "Beach")).unwrap();

    let recommender = RecommendEngine::new(&engine, &engine);
    let results = recommender.recommend_content("actor-new", 10).unwrap();

    // Not an error, not empty: every candidate ties at 0.
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.confidence == 0.0));
    // Tie-break is place id ascending.
    assert_eq!(results[0].id, "p1");
    assert_eq!(results[1].id, "p2");
}

#[test]
fn collaborative_with_no_signals_is_empty() {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine.insert_place(&place("p1", "Jaipur", "Heritage")).unwrap();

    let recommender = RecommendEngine::new(&engine, &engine);
    let results = recommender.recommend_collaborative("actor-new", 10).unwrap();
    assert!(results.is_empty());
}

#[test]
fn collaborative_surfaces_co_liked_item() {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine.insert_place(&place("p1", "Jaipur", "Heritage")).unwrap();
    engine.insert_place(&place("p4", "Hampi", "Heritage")).unwrap();
    // A and B share p1; B also likes p4.
    like(&engine, "actor-a", "p1");
    like(&engine, "actor-b", "p1");
    like(&engine, "actor-b", "p4");

    let recommender = RecommendEngine::new(&engine, &engine);
    let results = recommender.recommend_collaborative("actor-a", 10).unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "p4");
    assert_eq!(results[0].strategy, Strategy::Collaborative);
    // Co-occurrence count 1: 0.6 + log10(2)/2.
    let expected = 0.6 + 2.0_f64.log10() / 2.0;
    assert!((results[0].confidence - expected).abs() < 1e-9);
    assert!(results[0].confidence >= 0.6);
}

#[test]
fn collaborative_drops_unresolvable_candidates_silently() {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine.insert_place(&place("p1", "Jaipur", "Heritage")).unwrap();
    // p9 was interacted with but is not in the catalog.
    like(&engine, "actor-a", "p1");
    like(&engine, "actor-b", "p1");
    like(&engine, "actor-b", "p9");

    let recommender = RecommendEngine::new(&engine, &engine);
    let results = recommender.recommend_collaborative("actor-a", 10).unwrap();
    assert!(results.is_empty());
}

#[test]
fn collaborative_ranks_by_aggregated_count() {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine.insert_place(&place("p1", "Jaipur", "Heritage")).unwrap();
    engine.insert_place(&place("p4", "Hampi", "Heritage")).unwrap();
    engine.insert_place(&place("p5", "Goa", "Beach")).unwrap();
    like(&engine, "actor-a", "p1");
    // Two actors co-like p4 with p1, only one co-likes p5.
    like(&engine, "actor-b", "p1");
    like(&engine, "actor-b", "p4");
    like(&engine, "actor-c", "p1");
    like(&engine, "actor-c", "p4");
    like(&engine, "actor-c", "p5");

    let recommender = RecommendEngine::new(&engine, &engine);
    let results = recommender.recommend_collaborative("actor-a", 10).unwrap();

    let ids: Vec<_> = results.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["p4", "p5"]);
    assert!(results[0].confidence > results[1].confidence);
}

#[test]
fn hybrid_merges_and_tags_every_row() {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine.insert_place(&place("p1", "Jaipur", "Heritage")).unwrap();
    engine.insert_place(&place("p2", "Udaipur", "Heritage")).unwrap();
    engine.insert_place(&place("p4", "Hampi", "Heritage")).unwrap();
    like(&engine, "actor-a", "p1");
    like(&engine, "actor-b", "p1");
    like(&engine, "actor-b", "p4");

    let recommender = RecommendEngine::new(&engine, &engine);
    let results = recommender.recommend_hybrid("actor-a", 10).unwrap();

    assert!(!results.is_empty());
    assert!(results.iter().all(|r| r.strategy == Strategy::Hybrid));
    assert!(results.iter().all(|r| r.confidence <= 0.99));
    // p4 appears in both sub-rankings, so it carries both weighted terms
    // and outranks the content-only p2.
    let p4_pos = results.iter().position(|r| r.id == "p4").unwrap();
    let p2_pos = results.iter().position(|r| r.id == "p2").unwrap();
    assert!(p4_pos < p2_pos);
}

#[test]
fn hybrid_respects_limit() {
    let engine = StorageEngine::open_in_memory().unwrap();
    for i in 0..5 {
        engine
            .insert_place(&place(&format!("p{i}"), "Goa", "Beach"))
            .unwrap();
    }

    let recommender = RecommendEngine::new(&engine, &engine);
    let results = recommender.recommend_hybrid("actor-new", 3).unwrap();
    assert_eq!(results.len(), 3);
}
