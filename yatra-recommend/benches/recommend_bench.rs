//! Scoring hot path: feature extraction plus cosine against a preference
//! vector, over a synthetic catalog.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use yatra_core::catalog::Place;
use yatra_recommend::{features, SparseVector};

fn synthetic_place(i: usize) -> Place {
    Place {
        id: format!("p{i}"),
        name: format!("Place {i}"),
        state: ["Rajasthan", "Goa", "Kerala", "Sikkim"][i % 4].into(),
        location: Some(format!("Town {}", i % 17)),
        description: Some(
            "An old fort town with markets lakes temples and long winding streets \
             known for crafts textiles and street food"
                .into(),
        ),
        category: Some(["Heritage", "Beach", "Nature", "Spiritual"][i % 4].into()),
        image_url: None,
        accommodations: vec![format!("Hotel {}", i % 11), "Guest House".into()],
        foods: vec!["Thali".into(), format!("Dish {}", i % 7)],
        transport: vec!["Bus".into(), "Train".into()],
    }
}

fn bench_scoring(c: &mut Criterion) {
    let catalog: Vec<Place> = (0..500).map(synthetic_place).collect();
    let mut preference = SparseVector::new();
    for place in catalog.iter().take(20) {
        preference.merge(&SparseVector::from_tokens(
            features::extract(place, 20).into_iter(),
        ));
    }

    c.bench_function("score_500_candidates", |b| {
        b.iter(|| {
            let mut best = 0.0_f64;
            for place in &catalog {
                let vec = SparseVector::from_tokens(
                    features::extract(black_box(place), 20).into_iter(),
                );
                best = best.max(preference.cosine(&vec));
            }
            black_box(best)
        })
    });
}

criterion_group!(benches, bench_scoring);
criterion_main!(benches);
