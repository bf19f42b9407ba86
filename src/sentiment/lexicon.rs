// Scientific indicator lexicon: weighted terms for technical confidence.
//
// Weights express how strongly a term signals a positive or negative
// finding in research prose. Hedging verbs and softening adverbs carry
// small weights so they nudge rather than dominate.

use std::collections::HashMap;

/// What role a lexicon term plays in scientific writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexiconCategory {
    Positive,
    Negative,
    /// Adverbs that strengthen or soften a claim
    Intensifier,
    /// Verbs that report how firmly a result is stated
    ResultMarker,
}

/// One weighted lexicon term.
#[derive(Debug, Clone, Copy)]
pub struct LexiconEntry {
    pub term: &'static str,
    pub weight: f64,
    pub category: LexiconCategory,
}

const fn entry(term: &'static str, weight: f64, category: LexiconCategory) -> LexiconEntry {
    LexiconEntry {
        term,
        weight,
        category,
    }
}

use LexiconCategory::{Intensifier, Negative, Positive, ResultMarker};

/// The full weighted lexicon. All categories contribute to the
/// technical-confidence sum.
pub const SCIENTIFIC_INDICATORS: &[LexiconEntry] = &[
    // Positive findings, strongest first
    entry("breakthrough", 4.0, Positive),
    entry("revolutionary", 4.0, Positive),
    entry("exceptional", 4.0, Positive),
    entry("outperform", 3.0, Positive),
    entry("superior", 3.0, Positive),
    entry("novel", 3.0, Positive),
    entry("innovative", 3.0, Positive),
    entry("improve", 2.0, Positive),
    entry("enhance", 2.0, Positive),
    entry("efficient", 2.0, Positive),
    entry("effective", 2.0, Positive),
    entry("successful", 2.0, Positive),
    entry("promising", 1.0, Positive),
    entry("consistent", 1.0, Positive),
    entry("reasonable", 1.0, Positive),
    // Negative findings
    entry("incorrect", -4.0, Negative),
    entry("invalid", -4.0, Negative),
    entry("mistake", -4.0, Negative),
    entry("fail", -3.0, Negative),
    entry("poor", -3.0, Negative),
    entry("defect", -3.0, Negative),
    entry("limited", -2.0, Negative),
    entry("difficult", -2.0, Negative),
    entry("challenge", -2.0, Negative),
    entry("problem", -2.0, Negative),
    entry("unclear", -1.0, Negative),
    entry("although", -1.0, Negative),
    entry("however", -1.0, Negative),
    // Claim intensifiers and softeners
    entry("significantly", 0.293, Intensifier),
    entry("substantially", 0.293, Intensifier),
    entry("considerably", 0.293, Intensifier),
    entry("clearly", 0.267, Intensifier),
    entry("particularly", 0.267, Intensifier),
    entry("especially", 0.267, Intensifier),
    entry("generally", -0.293, Intensifier),
    entry("relatively", -0.293, Intensifier),
    entry("somewhat", -0.293, Intensifier),
    // How firmly the result is reported
    entry("prove", 1.0, ResultMarker),
    entry("demonstrate", 0.8, ResultMarker),
    entry("show", 0.6, ResultMarker),
    entry("indicate", 0.4, ResultMarker),
    entry("suggest", 0.2, ResultMarker),
    entry("may", -0.2, ResultMarker),
    entry("might", -0.2, ResultMarker),
    entry("could", -0.2, ResultMarker),
];

/// Flatten the lexicon into a term lookup map.
pub fn indicator_map() -> HashMap<&'static str, &'static LexiconEntry> {
    SCIENTIFIC_INDICATORS
        .iter()
        .map(|entry| (entry.term, entry))
        .collect()
}
