// Compound sentiment formula for research abstracts.
//
// Scientific prose is deliberately flat, so a generic polarity model
// alone reads almost everything as neutral. The compound score leans
// on the domain lexicon instead: half the weight goes to technical
// confidence, a quarter to how quantitative the claims are, and the
// generic baseline only nudges.
//
// `compound = 0.20*base + 0.50*confidence + 0.25*strength + 0.05*citations`

use std::collections::HashMap;

use regex_lite::Regex;

use crate::sentiment::baseline;
use crate::sentiment::lexicon::{self, LexiconEntry};

/// Configurable weights for the compound blend.
pub struct SentimentWeights {
    /// Generic polarity baseline (default 0.20)
    pub base_weight: f64,
    /// Domain lexicon signal (default 0.50): the dominant component
    pub confidence_weight: f64,
    /// Quantitative and statistical evidence (default 0.25)
    pub strength_weight: f64,
    /// Citation density (default 0.05)
    pub citation_weight: f64,
}

impl Default for SentimentWeights {
    fn default() -> Self {
        Self {
            base_weight: 0.20,
            confidence_weight: 0.50,
            strength_weight: 0.25,
            citation_weight: 0.05,
        }
    }
}

/// The four sub-scores plus their weighted blend.
#[derive(Debug, Clone, Copy)]
pub struct SentimentScores {
    pub base_sentiment: f64,
    pub technical_confidence: f64,
    pub result_strength: f64,
    pub citation_impact: f64,
    pub compound: f64,
}

/// Reusable scorer holding the flattened lexicon and the compiled
/// evidence patterns. Scores run on the raw abstract, not the
/// normalized form, so citation markers and percentages survive.
pub struct SentimentScorer {
    lexicon: HashMap<&'static str, &'static LexiconEntry>,
    citation_re: Regex,
    quantitative_re: Regex,
    statistical_re: Regex,
    weights: SentimentWeights,
}

impl SentimentScorer {
    pub fn new() -> Self {
        Self::with_weights(SentimentWeights::default())
    }

    pub fn with_weights(weights: SentimentWeights) -> Self {
        Self {
            lexicon: lexicon::indicator_map(),
            // [12] style citations and (2020) style year references
            citation_re: Regex::new(r"\[\d+\]|\(\d{4}\)").unwrap(),
            // percentages, p-values, and "> n" comparisons
            quantitative_re: Regex::new(r"\d+(\.\d+)?%|p\s*<\s*0\.\d+|>\s*\d+(\.\d+)?").unwrap(),
            statistical_re: Regex::new(
                r"(?i)\b(significant|correlation|confidence|precision|accuracy)\b",
            )
            .unwrap(),
            weights,
        }
    }

    /// Score one abstract. Empty text yields all-zero sub-scores.
    pub fn score(&self, text: &str) -> SentimentScores {
        let base_sentiment = baseline::polarity_score(text);
        let technical_confidence = self.technical_confidence(text);
        let result_strength = self.result_strength(text);
        let citation_impact = self.citation_impact(text);
        let compound = self.weights.base_weight * base_sentiment
            + self.weights.confidence_weight * technical_confidence
            + self.weights.strength_weight * result_strength
            + self.weights.citation_weight * citation_impact;
        SentimentScores {
            base_sentiment,
            technical_confidence,
            result_strength,
            citation_impact,
            compound,
        }
    }

    /// Sum of lexicon weights over case-folded whitespace tokens,
    /// scaled so five strong indicators saturate the score. Tokens are
    /// matched exactly; "breakthrough." with trailing punctuation does
    /// not count.
    fn technical_confidence(&self, text: &str) -> f64 {
        let mut total = 0.0;
        for raw in text.split_whitespace() {
            let token = raw.to_lowercase();
            if let Some(entry) = self.lexicon.get(token.as_str()) {
                total += entry.weight;
            }
        }
        (total / 5.0).clamp(-1.0, 1.0)
    }

    /// Quantitative plus statistical matches, five of them saturating.
    fn result_strength(&self, text: &str) -> f64 {
        let quantitative = self.quantitative_re.find_iter(text).count();
        let statistical = self.statistical_re.find_iter(text).count();
        ((quantitative + statistical) as f64 / 5.0).clamp(0.0, 1.0)
    }

    /// Citation markers, ten of them saturating.
    fn citation_impact(&self, text: &str) -> f64 {
        let citations = self.citation_re.find_iter(text).count();
        (citations as f64 / 10.0).clamp(0.0, 1.0)
    }
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}
