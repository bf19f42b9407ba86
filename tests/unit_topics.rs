// Unit tests for topic modeling support: the count vectorizer's
// frequency filters and n-gram handling, the topic naming ladder
// through its public API, and summary assembly from fitted
// distributions.

use std::collections::HashSet;

use ndarray::array;

use gallium::corpus::models::Document;
use gallium::topics::lda::dominant_topics;
use gallium::topics::naming::{clean_term, find_compound_terms, unique_topic_name, GENERIC_TERMS};
use gallium::topics::summary::{build_summary, TopicCluster};
use gallium::topics::vectorizer::CountVectorizer;
use gallium::topics::TopicError;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn doc(id: &str, title: &str) -> Document {
    Document {
        id: id.to_string(),
        title: title.to_string(),
        abstract_text: String::new(),
        published: "2024-01-01".to_string(),
        categories: vec![],
    }
}

// ============================================================
// CountVectorizer: document frequency filters
// ============================================================

#[test]
fn min_df_drops_rare_terms() {
    let docs = strings(&["gallium nitride", "gallium arsenide"]);
    let dtm = CountVectorizer::new()
        .with_max_df_ratio(1.0)
        .fit_transform(&docs)
        .unwrap();
    // only "gallium" appears in two documents
    assert_eq!(dtm.terms, vec!["gallium"]);
}

#[test]
fn max_df_drops_ubiquitous_terms() {
    let docs = strings(&[
        "common alpha",
        "common alpha",
        "common beta",
        "common beta",
    ]);
    let dtm = CountVectorizer::new()
        .with_max_df_ratio(0.5)
        .fit_transform(&docs)
        .unwrap();
    // "common" sits in all four documents and is filtered; the bigrams
    // containing it each sit in two and survive on their own
    assert_eq!(
        dtm.terms,
        vec!["alpha", "beta", "common alpha", "common beta"]
    );
}

#[test]
fn empty_vocabulary_is_a_typed_error() {
    let docs = strings(&["unique1 unique2", "other3 other4"]);
    let result = CountVectorizer::new().fit_transform(&docs);
    assert!(matches!(result, Err(TopicError::EmptyVocabulary)));

    let no_docs: Vec<String> = Vec::new();
    let result = CountVectorizer::new().fit_transform(&no_docs);
    assert!(matches!(result, Err(TopicError::EmptyVocabulary)));
}

// ============================================================
// CountVectorizer: n-grams and counts
// ============================================================

#[test]
fn bigrams_skip_removed_stopwords() {
    // "the" is filtered before windows are formed, so the bigram joins
    // the tokens around it
    let docs = strings(&["gallium the arsenide"]);
    let dtm = CountVectorizer::new()
        .with_min_df(1)
        .with_max_df_ratio(1.0)
        .fit_transform(&docs)
        .unwrap();
    assert_eq!(dtm.terms, vec!["arsenide", "gallium", "gallium arsenide"]);
}

#[test]
fn vocabulary_is_alphabetical_and_indexed() {
    let docs = strings(&["carrier lifetime xx", "carrier lifetime yy"]);
    let dtm = CountVectorizer::new()
        .with_max_df_ratio(1.0)
        .fit_transform(&docs)
        .unwrap();
    assert_eq!(dtm.terms, vec!["carrier", "carrier lifetime", "lifetime"]);
    for (idx, term) in dtm.terms.iter().enumerate() {
        assert_eq!(dtm.vocabulary[term], idx, "Index mismatch for {term}");
    }
}

#[test]
fn matrix_cells_hold_raw_counts() {
    let docs = strings(&["gan gan gan", "gan"]);
    let dtm = CountVectorizer::new()
        .with_min_df(1)
        .with_max_df_ratio(1.0)
        .with_ngram_range((1, 1))
        .fit_transform(&docs)
        .unwrap();
    assert_eq!(dtm.terms, vec!["gan"]);
    assert_eq!(dtm.matrix[[0, 0]], 3.0);
    assert_eq!(dtm.matrix[[1, 0]], 1.0);
}

// ============================================================
// Naming: term hygiene and compound discovery
// ============================================================

#[test]
fn clean_term_keeps_letters_spaces_hyphens() {
    assert_eq!(clean_term("quantum2 dots"), "quantum dots");
    assert_eq!(clean_term("x"), "");
}

#[test]
fn generic_terms_cover_filler_vocabulary() {
    assert!(GENERIC_TERMS.contains(&"using"));
    assert!(GENERIC_TERMS.contains(&"novel"));
    for term in GENERIC_TERMS {
        assert_eq!(*term, term.to_lowercase(), "Not lowercase: {term}");
    }
}

#[test]
fn hyphenated_terms_precede_domain_compounds() {
    let compounds = find_compound_terms("Thin film growth by molecular-beam methods");
    assert_eq!(compounds, strings(&["molecular-beam", "thin film"]));
}

#[test]
fn repeated_hyphenated_terms_are_kept() {
    let compounds = find_compound_terms("spin-orbit versus spin-orbit pairing");
    assert_eq!(compounds, strings(&["spin-orbit", "spin-orbit"]));
}

// ============================================================
// Naming: uniqueness across a run
// ============================================================

#[test]
fn collision_with_seeded_set_reorders_terms() {
    let mut used: HashSet<String> = HashSet::new();
    used.insert("Quantum Transport".to_string());

    let name = unique_topic_name(
        &strings(&["quantum", "transport"]),
        &strings(&["Ballistic conduction in wires"]),
        &mut used,
    );
    assert_eq!(name, "Transport Quantum");
    assert!(used.contains("Transport Quantum"), "Name not registered");
}

#[test]
fn fallback_name_ignores_the_used_set() {
    let mut used: HashSet<String> = HashSet::new();
    let no_keywords: Vec<String> = Vec::new();
    let no_titles: Vec<String> = Vec::new();

    let first = unique_topic_name(&no_keywords, &no_titles, &mut used);
    let second = unique_topic_name(&no_keywords, &no_titles, &mut used);
    assert_eq!(first, "Semiconductor Research");
    assert_eq!(second, "Semiconductor Research");
}

// ============================================================
// build_summary: ordering, naming, and counts
// ============================================================

fn summary_fixture() -> (Vec<Document>, ndarray::Array2<f64>, ndarray::Array2<f64>, Vec<String>) {
    let documents = vec![
        doc("a0", "GaN buffer layers on sapphire"),
        doc("a1", "Strain relaxation in GaN layers"),
        doc("a2", "Dislocation density in GaN buffers"),
        doc("b0", "Exciton lifetimes in nitride wells"),
        doc("b1", "Carrier capture in nitride wells"),
        doc("b2", "Polariton modes in microcavities"),
    ];
    let doc_topics = array![
        [0.9, 0.1],
        [0.8, 0.2],
        [0.7, 0.3],
        [0.2, 0.8],
        [0.1, 0.9],
        [0.5, 0.5],
    ];
    let topic_term_dist = array![[0.1, 0.4, 0.3, 0.2], [0.3, 0.1, 0.1, 0.5]];
    let terms = strings(&["dot growth", "gan", "nitride", "quantum"]);
    (documents, doc_topics, topic_term_dist, terms)
}

#[test]
fn top_terms_order_by_weight_with_stable_ties() {
    let (documents, doc_topics, topic_term_dist, terms) = summary_fixture();
    let assignments = dominant_topics(&doc_topics);
    let summary = build_summary(&documents, &doc_topics, &topic_term_dist, &terms, &assignments);

    assert_eq!(
        summary.clusters[0].top_terms,
        strings(&["gan", "nitride", "quantum", "dot growth"])
    );
    // topic 1 has a 0.1 tie between "gan" and "nitride"; the lower
    // (alphabetical) index wins
    assert_eq!(
        summary.clusters[1].top_terms,
        strings(&["quantum", "dot growth", "gan", "nitride"])
    );
}

#[test]
fn example_papers_order_by_probability() {
    let (documents, doc_topics, topic_term_dist, terms) = summary_fixture();
    let assignments = dominant_topics(&doc_topics);
    let summary = build_summary(&documents, &doc_topics, &topic_term_dist, &terms, &assignments);

    let cluster = &summary.clusters[0];
    assert_eq!(cluster.example_titles[0], "GaN buffer layers on sapphire");
    assert_eq!(cluster.example_probabilities, vec![0.9, 0.8, 0.7, 0.5, 0.2]);
}

#[test]
fn paper_counts_follow_dominant_assignments() {
    let (documents, doc_topics, topic_term_dist, terms) = summary_fixture();
    let assignments = dominant_topics(&doc_topics);
    // the 0.5/0.5 document resolves to the lower topic index
    assert_eq!(assignments, vec![0, 0, 0, 1, 1, 0]);

    let summary = build_summary(&documents, &doc_topics, &topic_term_dist, &terms, &assignments);
    assert_eq!(summary.clusters[0].paper_count, 4);
    assert_eq!(summary.clusters[1].paper_count, 2);
    assert_eq!(summary.document_count, 6);
}

#[test]
fn cluster_names_are_distinct_and_readable() {
    let (documents, doc_topics, topic_term_dist, terms) = summary_fixture();
    let assignments = dominant_topics(&doc_topics);
    let summary = build_summary(&documents, &doc_topics, &topic_term_dist, &terms, &assignments);

    assert_eq!(summary.clusters[0].name, "Gan Nitride");
    assert_eq!(summary.clusters[1].name, "Quantum Dot Growth");
}

// ============================================================
// TopicCluster: display slices
// ============================================================

#[test]
fn keywords_cap_at_ten_terms() {
    let cluster = TopicCluster {
        index: 0,
        name: "Test".to_string(),
        top_terms: (0..15).map(|i| format!("term{i}")).collect(),
        example_titles: vec![],
        example_probabilities: vec![],
        paper_count: 0,
    };
    assert_eq!(cluster.keywords().len(), 10);
    assert_eq!(cluster.keywords()[0], "term0");
}

#[test]
fn shown_examples_cap_at_three() {
    let cluster = TopicCluster {
        index: 0,
        name: "Test".to_string(),
        top_terms: vec![],
        example_titles: (0..5).map(|i| format!("title{i}")).collect(),
        example_probabilities: vec![0.9, 0.8, 0.7, 0.6, 0.5],
        paper_count: 5,
    };
    let shown: Vec<_> = cluster.shown_examples().collect();
    assert_eq!(shown.len(), 3);
    assert_eq!(shown[0], (&"title0".to_string(), 0.9));
}
