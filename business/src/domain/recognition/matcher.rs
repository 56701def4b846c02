use std::sync::Arc;

use crate::domain::product::model::Product;

use super::similarity::{PartialRatioScorer, SimilarityScorer};

/// Minimum combined score a product must strictly exceed to be selected.
pub const DEFAULT_MATCH_THRESHOLD: u8 = 60;

/// Outcome of matching extracted text against the catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchResult {
    Match { product: Product, score: u8 },
    NoMatch,
}

impl MatchResult {
    pub fn product(&self) -> Option<&Product> {
        match self {
            MatchResult::Match { product, .. } => Some(product),
            MatchResult::NoMatch => None,
        }
    }

    pub fn score(&self) -> Option<u8> {
        match self {
            MatchResult::Match { score, .. } => Some(*score),
            MatchResult::NoMatch => None,
        }
    }
}

/// Selects the single catalog product whose name or description best matches
/// extracted text.
///
/// Business rules:
/// - A product scores the max of its name and description similarity
/// - It replaces the current best only when strictly above both the best so
///   far and the threshold, so the earliest product wins ties
/// - The whole catalog is always scanned
#[derive(Clone)]
pub struct CatalogMatcher {
    scorer: Arc<dyn SimilarityScorer>,
    threshold: u8,
}

impl Default for CatalogMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogMatcher {
    pub fn new() -> Self {
        Self {
            scorer: Arc::new(PartialRatioScorer),
            threshold: DEFAULT_MATCH_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_scorer(mut self, scorer: Arc<dyn SimilarityScorer>) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Combined score of one product against already lowercased text.
    pub fn score_product(&self, normalized_text: &str, product: &Product) -> u8 {
        let name_score = self
            .scorer
            .score(normalized_text, &product.name.to_lowercase());
        let description_score = self
            .scorer
            .score(normalized_text, &product.description_or_empty().to_lowercase());
        name_score.max(description_score)
    }

    pub fn find_best<I>(&self, extracted_text: &str, catalog: I) -> MatchResult
    where
        I: IntoIterator<Item = Product>,
    {
        let normalized_text = extracted_text.to_lowercase();
        let mut best: Option<(Product, u8)> = None;

        for product in catalog {
            let score = self.score_product(&normalized_text, &product);
            let best_score = best.as_ref().map_or(0, |(_, s)| *s);
            if score > best_score && score > self.threshold {
                best = Some((product, score));
            }
        }

        match best {
            Some((product, score)) => MatchResult::Match { product, score },
            None => MatchResult::NoMatch,
        }
    }
}
