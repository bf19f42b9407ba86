// Unit tests for sentiment scoring.
//
// Tests isolated pure paths: SentimentCategory::from_scores boundary
// conditions (including the confidence sign gate), the evidence
// counters and their clamps, the polarity baseline, and the weighted
// compound blend.

use gallium::corpus::models::SentimentCategory;
use gallium::sentiment::baseline::polarity_score;
use gallium::sentiment::scorer::{SentimentScorer, SentimentWeights};

// ============================================================
// SentimentCategory::from_scores: boundary conditions
// ============================================================

#[test]
fn category_exact_boundary_strong_positive() {
    assert_eq!(
        SentimentCategory::from_scores(0.3, 0.5),
        SentimentCategory::StrongPositive
    );
}

#[test]
fn category_just_below_strong_positive() {
    assert_eq!(
        SentimentCategory::from_scores(0.299, 0.5),
        SentimentCategory::ModeratePositive
    );
}

#[test]
fn category_exact_boundary_moderate_positive() {
    assert_eq!(
        SentimentCategory::from_scores(0.1, 0.5),
        SentimentCategory::ModeratePositive
    );
}

#[test]
fn category_just_below_moderate_positive() {
    assert_eq!(
        SentimentCategory::from_scores(0.099, 0.5),
        SentimentCategory::Neutral
    );
}

#[test]
fn category_exact_boundary_strong_negative() {
    assert_eq!(
        SentimentCategory::from_scores(-0.3, -0.5),
        SentimentCategory::StrongNegative
    );
}

#[test]
fn category_just_above_strong_negative() {
    assert_eq!(
        SentimentCategory::from_scores(-0.299, -0.5),
        SentimentCategory::ModerateNegative
    );
}

#[test]
fn category_exact_boundary_moderate_negative() {
    assert_eq!(
        SentimentCategory::from_scores(-0.1, -0.5),
        SentimentCategory::ModerateNegative
    );
}

#[test]
fn category_just_above_moderate_negative() {
    assert_eq!(
        SentimentCategory::from_scores(-0.099, -0.5),
        SentimentCategory::Neutral
    );
}

// ============================================================
// SentimentCategory::from_scores: confidence sign gate
// ============================================================

#[test]
fn positive_compound_without_positive_confidence_is_neutral() {
    // A compound driven purely by result strength must not read as a
    // positive finding when the lexicon disagrees.
    assert_eq!(
        SentimentCategory::from_scores(0.5, 0.0),
        SentimentCategory::Neutral
    );
    assert_eq!(
        SentimentCategory::from_scores(0.5, -0.2),
        SentimentCategory::Neutral
    );
}

#[test]
fn negative_compound_without_negative_confidence_is_neutral() {
    assert_eq!(
        SentimentCategory::from_scores(-0.5, 0.0),
        SentimentCategory::Neutral
    );
    assert_eq!(
        SentimentCategory::from_scores(-0.5, 0.2),
        SentimentCategory::Neutral
    );
}

#[test]
fn category_nan_falls_to_neutral() {
    // NaN fails every comparison, so it falls through to Neutral
    assert_eq!(
        SentimentCategory::from_scores(f64::NAN, f64::NAN),
        SentimentCategory::Neutral
    );
}

// ============================================================
// SentimentCategory: string round trips and ordering
// ============================================================

#[test]
fn category_as_str_all_variants() {
    assert_eq!(SentimentCategory::StrongNegative.as_str(), "Strong Negative");
    assert_eq!(
        SentimentCategory::ModerateNegative.as_str(),
        "Moderate Negative"
    );
    assert_eq!(SentimentCategory::Neutral.as_str(), "Neutral");
    assert_eq!(
        SentimentCategory::ModeratePositive.as_str(),
        "Moderate Positive"
    );
    assert_eq!(SentimentCategory::StrongPositive.as_str(), "Strong Positive");
}

#[test]
fn category_display_matches_as_str() {
    for category in SentimentCategory::ordered() {
        assert_eq!(category.to_string(), category.as_str());
    }
}

#[test]
fn category_order_runs_negative_to_positive() {
    let ordered = SentimentCategory::ordered();
    assert_eq!(ordered.len(), 5);
    assert_eq!(ordered[0], SentimentCategory::StrongNegative);
    assert_eq!(ordered[4], SentimentCategory::StrongPositive);
}

// ============================================================
// Evidence counters: quantitative, statistical, citations
// ============================================================

#[test]
fn quantitative_patterns_each_count() {
    let scorer = SentimentScorer::new();
    // "12.5%", "p < 0.01", and "> 3" are three separate matches
    let scores = scorer.score("yields rose by 12.5% with p < 0.01 and > 3 repeats");
    assert!(
        (scores.result_strength - 0.6).abs() < 1e-9,
        "Expected strength 0.6, got {}",
        scores.result_strength
    );
}

#[test]
fn statistical_terms_match_case_insensitively() {
    let scorer = SentimentScorer::new();
    let scores = scorer.score("Significant ACCURACY improvements were recorded");
    assert!(
        (scores.result_strength - 0.4).abs() < 1e-9,
        "Expected strength 0.4, got {}",
        scores.result_strength
    );
}

#[test]
fn significantly_is_not_a_statistical_match() {
    // The word boundary keeps "significantly" out of the statistical
    // counter; it only contributes its intensifier weight.
    let scorer = SentimentScorer::new();
    let scores = scorer.score("significantly");
    assert_eq!(scores.result_strength, 0.0);
    assert!(
        (scores.technical_confidence - 0.293 / 5.0).abs() < 1e-9,
        "Expected intensifier weight only, got {}",
        scores.technical_confidence
    );
}

#[test]
fn result_strength_saturates_at_one() {
    let scorer = SentimentScorer::new();
    let scores = scorer.score("significant significant significant accuracy accuracy precision");
    assert_eq!(scores.result_strength, 1.0);
}

#[test]
fn citation_impact_counts_both_marker_styles() {
    let scorer = SentimentScorer::new();
    let scores = scorer.score("as shown in [3] and confirmed later (2019)");
    assert!(
        (scores.citation_impact - 0.2).abs() < 1e-9,
        "Expected citation 0.2, got {}",
        scores.citation_impact
    );
}

#[test]
fn citation_impact_saturates_at_one() {
    let scorer = SentimentScorer::new();
    let text = (1..=12).map(|i| format!("[{i}]")).collect::<Vec<_>>().join(" ");
    let scores = scorer.score(&text);
    assert_eq!(scores.citation_impact, 1.0);
}

// ============================================================
// Technical confidence: hedging and custom weights
// ============================================================

#[test]
fn hedging_verbs_pull_confidence_negative() {
    let scorer = SentimentScorer::new();
    // may + might + could = -0.6 -> -0.12
    let scores = scorer.score("may might could");
    assert!(
        (scores.technical_confidence + 0.12).abs() < 1e-9,
        "Expected -0.12, got {}",
        scores.technical_confidence
    );
}

#[test]
fn custom_weights_isolate_one_component() {
    let scorer = SentimentScorer::with_weights(SentimentWeights {
        base_weight: 0.0,
        confidence_weight: 1.0,
        strength_weight: 0.0,
        citation_weight: 0.0,
    });
    let scores = scorer.score("novel");
    assert!(
        (scores.compound - scores.technical_confidence).abs() < 1e-9,
        "Compound should equal confidence under these weights"
    );
    assert!((scores.compound - 0.6).abs() < 1e-9);
}

#[test]
fn default_weights_match_documented_values() {
    let w = SentimentWeights::default();
    assert_eq!(w.base_weight, 0.20);
    assert_eq!(w.confidence_weight, 0.50);
    assert_eq!(w.strength_weight, 0.25);
    assert_eq!(w.citation_weight, 0.05);
}

// ============================================================
// Polarity baseline
// ============================================================

#[test]
fn baseline_empty_text_is_zero() {
    assert_eq!(polarity_score(""), 0.0);
}

#[test]
fn baseline_positive_words_raise_the_score() {
    let score = polarity_score("good excellent robust");
    assert!((score - 0.75).abs() < 1e-9, "Expected 0.75, got {score}");
}

#[test]
fn baseline_negative_words_lower_the_score() {
    let score = polarity_score("bad poor wrong");
    assert!((score + 0.75).abs() < 1e-9, "Expected -0.75, got {score}");
}

#[test]
fn baseline_clamps_to_unit_range() {
    assert_eq!(polarity_score("good great excellent best better"), 1.0);
    assert_eq!(polarity_score("bad worse worst poor weak unstable"), -1.0);
}

#[test]
fn baseline_trims_edge_punctuation() {
    let score = polarity_score("the results were good, overall.");
    assert!((score - 0.25).abs() < 1e-9, "Expected 0.25, got {score}");
}

#[test]
fn baseline_mixed_polarity_cancels() {
    assert_eq!(polarity_score("good bad"), 0.0);
}

// ============================================================
// Full chain: scores into categories
// ============================================================

#[test]
fn confident_quantified_abstract_reads_strong_positive() {
    let scorer = SentimentScorer::new();
    let scores = scorer.score("novel breakthrough demonstrate 95% accuracy");
    // confidence saturates at 1.0, strength 2/5
    let category =
        SentimentCategory::from_scores(scores.compound, scores.technical_confidence);
    assert_eq!(category, SentimentCategory::StrongPositive);
}

#[test]
fn failure_heavy_abstract_reads_strong_negative() {
    let scorer = SentimentScorer::new();
    let scores = scorer.score("incorrect invalid fail poor however");
    let category =
        SentimentCategory::from_scores(scores.compound, scores.technical_confidence);
    assert_eq!(category, SentimentCategory::StrongNegative);
}

#[test]
fn flat_descriptive_abstract_reads_neutral() {
    let scorer = SentimentScorer::new();
    let scores = scorer.score("the lattice constant was measured at room temperature");
    let category =
        SentimentCategory::from_scores(scores.compound, scores.technical_confidence);
    assert_eq!(category, SentimentCategory::Neutral);
}
