// Abstract normalization: the single text form all analysis runs on.
//
// Lowercases, protects multi-word technical compounds, strips URLs and
// bracketed spans, drops stopwords and short tokens, stems plain words,
// then restores the compounds. Hyphenated and digit-bearing tokens are
// kept verbatim since stemming mangles identifiers like "p-type" or
// "2d".

use std::collections::HashSet;

use regex_lite::Regex;
use rust_stemmers::{Algorithm, Stemmer};

use crate::text::compounds;

/// Domain terms so common in a semiconductor corpus that they carry no
/// signal for topic modeling.
pub const DOMAIN_STOPWORDS: &[&str] = &[
    // generic research vocabulary
    "study", "result", "results", "show", "shown", "using", "used", "based", "method", "analysis",
    "experimental", "measured", "measurement", "data", "research", "process", "present",
    "investigated", "obtained", "performed", "developed", "observed", "found", "reported",
    "sample", "test", "testing",
    // field vocabulary that appears in nearly every abstract
    "energy", "state", "system", "effect", "field", "high", "potential", "temperature",
    "structure", "property", "properties", "model", "application", "charge", "force", "rate",
    "value", "level", "density", "semiconductor", "electron", "band", "coupling", "carrier",
    "control", "gap", "theory", "dynamic", "different", "strong", "device", "type", "material",
    "parameter", "network", "accuracy", "light", "current", "voltage", "power", "signal",
    "quantum", "spin", "laser", "topological",
];

/// Reusable normalizer holding the stopword sets, the stemmer, and the
/// compiled strip pattern. Build once, run over the whole corpus.
pub struct Normalizer {
    stop_words: HashSet<String>,
    stemmer: Stemmer,
    strip_re: Regex,
}

impl Normalizer {
    pub fn new() -> Self {
        let stop_words = stop_words::get(stop_words::LANGUAGE::English)
            .into_iter()
            .collect();
        Self {
            stop_words,
            stemmer: Stemmer::create(Algorithm::English),
            strip_re: Regex::new(r"http\S+|www\S+|\[.*?\]|\(.*?\)").unwrap(),
        }
    }

    /// Normalize one abstract into the processed form used by sentiment
    /// aggregation, topic modeling, and phrase extraction.
    pub fn normalize(&self, text: &str) -> String {
        let protected = compounds::protect_compounds(text);
        let stripped = self.strip_re.replace_all(&protected, " ");

        let mut kept: Vec<String> = Vec::new();
        for raw in stripped.split_whitespace() {
            let token = raw.trim_matches(|c: char| !c.is_alphanumeric() && c != '_' && c != '-');
            if token.is_empty() {
                continue;
            }
            // Protected compounds pass through untouched.
            if token.contains('_') {
                kept.push(token.to_string());
                continue;
            }
            if token.chars().count() <= 2
                || self.stop_words.contains(token)
                || DOMAIN_STOPWORDS.contains(&token)
            {
                continue;
            }
            if token.contains('-') || token.chars().any(|c| c.is_ascii_digit()) {
                kept.push(token.to_string());
            } else {
                kept.push(self.stemmer.stem(token).to_string());
            }
        }

        compounds::restore_compounds(&kept.join(" "))
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}
