//! Sparse frequency vectors over token bags, with cosine similarity.

use std::collections::HashMap;

/// A sparse token-frequency vector. Order-independent: equal multisets of
/// tokens produce equal vectors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    counts: HashMap<String, f64>,
}

impl SparseVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a token sequence into a frequency vector.
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut vec = Self::new();
        for token in tokens {
            vec.add(token);
        }
        vec
    }

    /// Increment the count for one token.
    pub fn add(&mut self, token: String) {
        *self.counts.entry(token).or_insert(0.0) += 1.0;
    }

    /// Count-additive merge of another vector into this one.
    pub fn merge(&mut self, other: &SparseVector) {
        for (token, count) in &other.counts {
            *self.counts.entry(token.clone()).or_insert(0.0) += count;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Frequency of a token, 0 when absent.
    pub fn get(&self, token: &str) -> f64 {
        self.counts.get(token).copied().unwrap_or(0.0)
    }

    /// Dot product over the intersection of keys.
    pub fn dot(&self, other: &SparseVector) -> f64 {
        // Iterate the smaller side.
        let (small, large) = if self.counts.len() <= other.counts.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .counts
            .iter()
            .map(|(token, count)| count * large.get(token))
            .sum()
    }

    /// L2 norm.
    pub fn norm(&self) -> f64 {
        self.counts.values().map(|c| c * c).sum::<f64>().sqrt()
    }

    /// Cosine similarity. A zero-norm operand makes the denominator 1, so
    /// an empty vector scores 0 against anything instead of producing NaN.
    /// Non-negative count vectors always land in [0, 1].
    pub fn cosine(&self, other: &SparseVector) -> f64 {
        let denom = self.norm() * other.norm();
        let denom = if denom == 0.0 { 1.0 } else { denom };
        self.dot(other) / denom
    }
}
