// Generic polarity baseline: plain English sentiment, no domain logic.
//
// A small word-count heuristic that stands in for a general-purpose
// sentiment model. It carries only 20% of the compound score; the
// domain lexicon does the heavy lifting.

const POSITIVE_WORDS: &[&str] = &[
    "able", "advance", "advantage", "benefit", "best", "better", "boost", "excellent",
    "favorable", "gain", "good", "great", "helpful", "ideal", "impressive", "optimal",
    "positive", "progress", "remarkable", "robust", "strong", "success", "useful", "valuable",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "concern", "costly", "damage", "degrade", "drawback", "error", "fault", "flaw",
    "harmful", "inferior", "issue", "lack", "loss", "negative", "obstacle", "poor", "severe",
    "unable", "unstable", "weak", "worse", "worst", "wrong",
];

/// Net polarity hits are divided by this before clamping to [-1, 1],
/// so four matches saturate the score.
const SATURATION: f64 = 4.0;

pub fn polarity_score(text: &str) -> f64 {
    let mut net = 0i64;
    for raw in text.split_whitespace() {
        let token = raw
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        if POSITIVE_WORDS.contains(&token.as_str()) {
            net += 1;
        } else if NEGATIVE_WORDS.contains(&token.as_str()) {
            net -= 1;
        }
    }
    (net as f64 / SATURATION).clamp(-1.0, 1.0)
}
