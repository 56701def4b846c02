/// Scores how well a candidate string appears inside extracted text, 0 to 100.
pub trait SimilarityScorer: Send + Sync {
    fn score(&self, text: &str, candidate: &str) -> u8;
}

/// Default scorer backed by [`partial_ratio`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PartialRatioScorer;

impl SimilarityScorer for PartialRatioScorer {
    fn score(&self, text: &str, candidate: &str) -> u8 {
        partial_ratio(text, candidate)
    }
}

/// Partial fuzzy similarity between two strings.
///
/// The shorter string is aligned against every same-length window of the
/// longer one, plus the truncated windows hanging off either end of it so a
/// name cut short at the edge of the text still aligns. Each alignment scores
/// `2 * LCS / (len_a + len_b)` (the normalized indel similarity) and the best
/// window wins. Returns 0 when either side is empty.
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let (shorter, longer) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };

    let width = shorter.len();
    let heads = (1..width).map(|k| &longer[..k]);
    let tails = (1..width).map(|k| &longer[longer.len() - k..]);

    heads
        .chain(longer.windows(width))
        .chain(tails)
        .map(|window| ratio(shorter, window))
        .max()
        .unwrap_or(0)
}

fn ratio(a: &[char], b: &[char]) -> u8 {
    let total = a.len() + b.len();
    let matched = longest_common_subsequence(a, b);
    (200.0 * matched as f64 / total as f64).round() as u8
}

fn longest_common_subsequence(a: &[char], b: &[char]) -> usize {
    let mut previous = vec![0usize; b.len() + 1];
    let mut current = vec![0usize; b.len() + 1];

    for left in a {
        for (j, right) in b.iter().enumerate() {
            current[j + 1] = if left == right {
                previous[j] + 1
            } else {
                previous[j + 1].max(current[j])
            };
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}
