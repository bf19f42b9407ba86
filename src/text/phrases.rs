// Collocation extraction: frequent technical phrases from the corpus.
//
// Ranks bigrams and trigrams by pointwise mutual information so that
// genuinely associated pairs ("epitaxial growth") outrank pairs that
// are merely frequent. Runs over normalized abstracts, where protected
// compounds have already been restored to spaced form.

use std::collections::HashMap;

/// A scored n-gram.
#[derive(Debug, Clone)]
pub struct Collocation {
    pub phrase: String,
    pub count: usize,
    /// Pointwise mutual information, in bits
    pub score: f64,
}

/// Minimum corpus frequency for a bigram to be considered.
const BIGRAM_MIN_COUNT: usize = 5;
/// Minimum corpus frequency for a trigram to be considered.
const TRIGRAM_MIN_COUNT: usize = 3;
/// How many collocations of each length to keep.
const TOP_PHRASES: usize = 30;

/// Extract the top bigram and trigram collocations from normalized
/// texts. Returns (bigrams, trigrams), each ranked by PMI descending.
pub fn extract_collocations(texts: &[String]) -> (Vec<Collocation>, Vec<Collocation>) {
    let mut unigrams: HashMap<String, usize> = HashMap::new();
    let mut bigrams: HashMap<(String, String), usize> = HashMap::new();
    let mut trigrams: HashMap<(String, String, String), usize> = HashMap::new();
    let mut total_tokens = 0usize;

    for text in texts {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        total_tokens += tokens.len();
        for token in &tokens {
            *unigrams.entry((*token).to_string()).or_insert(0) += 1;
        }
        for pair in tokens.windows(2) {
            *bigrams
                .entry((pair[0].to_string(), pair[1].to_string()))
                .or_insert(0) += 1;
        }
        for triple in tokens.windows(3) {
            *trigrams
                .entry((
                    triple[0].to_string(),
                    triple[1].to_string(),
                    triple[2].to_string(),
                ))
                .or_insert(0) += 1;
        }
    }

    if total_tokens == 0 {
        return (Vec::new(), Vec::new());
    }
    let n = total_tokens as f64;

    let mut scored_bigrams: Vec<Collocation> = bigrams
        .into_iter()
        .filter(|(_, count)| *count >= BIGRAM_MIN_COUNT)
        .map(|((a, b), count)| {
            let pmi = (count as f64 * n / (unigrams[&a] as f64 * unigrams[&b] as f64)).log2();
            Collocation {
                phrase: format!("{a} {b}"),
                count,
                score: pmi,
            }
        })
        .collect();

    let mut scored_trigrams: Vec<Collocation> = trigrams
        .into_iter()
        .filter(|(_, count)| *count >= TRIGRAM_MIN_COUNT)
        .map(|((a, b, c), count)| {
            let joint = unigrams[&a] as f64 * unigrams[&b] as f64 * unigrams[&c] as f64;
            let pmi = (count as f64 * n * n / joint).log2();
            Collocation {
                phrase: format!("{a} {b} {c}"),
                count,
                score: pmi,
            }
        })
        .collect();

    rank(&mut scored_bigrams);
    rank(&mut scored_trigrams);
    (scored_bigrams, scored_trigrams)
}

/// PMI descending, then frequency, then the phrase itself so equal
/// scores always order the same way.
fn rank(collocations: &mut Vec<Collocation>) {
    collocations.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(b.count.cmp(&a.count))
            .then(a.phrase.cmp(&b.phrase))
    });
    collocations.truncate(TOP_PHRASES);
}
