//! Turns a catalog place into a bag of lowercase feature tokens.

use yatra_core::catalog::Place;

/// Extract feature tokens from a place: category, state, and location as
/// single tokens; the first `description_cap` alphabetic words of the
/// description; and every element of the three list attributes. All
/// lowercased. Pure and infallible.
pub fn extract(place: &Place, description_cap: usize) -> Vec<String> {
    let mut tokens = Vec::new();

    if let Some(category) = &place.category {
        tokens.push(category.to_lowercase());
    }
    tokens.push(place.state.to_lowercase());
    if let Some(location) = &place.location {
        tokens.push(location.to_lowercase());
    }
    if let Some(description) = &place.description {
        tokens.extend(
            description
                .to_lowercase()
                .split(|c: char| !c.is_ascii_alphabetic())
                .filter(|w| !w.is_empty())
                .take(description_cap)
                .map(str::to_string),
        );
    }
    for list in [&place.accommodations, &place.foods, &place.transport] {
        tokens.extend(list.iter().map(|s| s.to_lowercase()));
    }

    tokens
}
