// Topic naming: unique, human-readable names for LDA clusters.
//
// Names come from two sources: multi-word compounds found in the
// cluster's representative titles, and the cluster's own keywords.
// A ladder of fallbacks (reorder the two terms, then append a counter)
// guarantees no two clusters in a run share a name.

use std::collections::HashSet;

use regex_lite::Regex;

/// Keywords too generic to name a topic by.
pub const GENERIC_TERMS: &[&str] = &[
    "based", "using", "via", "new", "novel", "improved", "high", "low", "approach", "method",
    "system", "type", "performance", "application", "device", "material", "study", "analysis",
    "research", "general", "data", "experimental", "numerical", "theoretical", "applied", "and",
    "the", "with", "for", "from", "by", "at", "to", "in", "on", "of", "work", "result", "time",
    "first", "second", "used",
];

/// Fixed multi-word domain terms scanned for in titles, in priority
/// order after hyphenated terms.
const DOMAIN_COMPOUNDS: &[&str] = &[
    "quantum dot",
    "quantum computing",
    "solar cell",
    "photonic crystal",
    "topological quantum",
    "semiconductor laser",
    "epitaxial growth",
    "thin film",
];

/// Name used when a cluster has no usable terms at all.
const FALLBACK_NAME: &str = "Semiconductor Research";

/// Strip a keyword down to its alphabetic core: drop everything that
/// is not a letter, space, or hyphen, then drop single-letter tokens.
/// Can return an empty string (for example "2d" cleans to nothing).
pub fn clean_term(term: &str) -> String {
    let non_alpha = Regex::new(r"[^a-zA-Z\s-]").unwrap();
    let single_letters = Regex::new(r"\b[a-zA-Z]\b").unwrap();
    let cleaned = non_alpha.replace_all(term, "");
    let cleaned = single_letters.replace_all(&cleaned, "");
    cleaned.trim().to_string()
}

/// Multi-word terms found in the text: hyphenated words first, then
/// the fixed domain compounds in their declared order. Duplicates are
/// kept; the caller caps how many it takes.
pub fn find_compound_terms(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let hyphenated = Regex::new(r"\w+(?:-\w+)+").unwrap();
    let mut compounds: Vec<String> = hyphenated
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect();
    for compound in DOMAIN_COMPOUNDS {
        if lowered.contains(compound) {
            compounds.push((*compound).to_string());
        }
    }
    compounds
}

/// Produce a unique name for one cluster and register it in the run's
/// used-name set. Call once per cluster, in topic-index order.
pub fn unique_topic_name(
    keywords: &[String],
    titles: &[String],
    used_names: &mut HashSet<String>,
) -> String {
    let terms = significant_terms(keywords, titles);
    let name = format_topic_name(&terms, used_names);
    used_names.insert(name.clone());
    name
}

/// Up to two significant terms for a cluster: compounds from its
/// representative titles that contain one of its keywords, topped up
/// from the keywords themselves.
///
/// Cleaned keywords that come out empty stay in the list on purpose:
/// an empty string is a substring of every compound, so such a keyword
/// lets any title compound through, and it is skipped only at the
/// top-up step.
fn significant_terms(keywords: &[String], titles: &[String]) -> Vec<String> {
    let clean_keywords: Vec<String> = keywords
        .iter()
        .filter(|k| !GENERIC_TERMS.contains(&k.as_str()))
        .map(|k| clean_term(k))
        .collect();

    let title_text = titles.join(" ").to_lowercase();
    let compounds = find_compound_terms(&title_text);

    let mut significant: Vec<String> = Vec::new();
    for compound in compounds {
        if clean_keywords.iter().any(|kw| compound.contains(kw.as_str())) {
            significant.push(compound);
            if significant.len() == 2 {
                break;
            }
        }
    }

    for keyword in clean_keywords {
        if significant.len() >= 2 {
            break;
        }
        if !keyword.is_empty() && !significant.iter().any(|t| t.contains(keyword.as_str())) {
            significant.push(keyword);
        }
    }

    significant
}

/// Format up to two terms into a title-case name, walking a ladder of
/// fallbacks until an unused name comes out:
///
/// 1. "First Second" from the first two terms
/// 2. "Modifier Base" then "Base Modifier" for each later term
/// 3. "Base N" with the first free counter
///
/// A single-term cluster has no modifiers, so it lands on the counter
/// directly and is always numbered. No terms at all yields the fixed
/// fallback name regardless of the used set.
fn format_topic_name(terms: &[String], used_names: &HashSet<String>) -> String {
    if terms.is_empty() {
        return FALLBACK_NAME.to_string();
    }

    if terms.len() >= 2 {
        let name = format!("{} {}", title_case(&terms[0]), title_case(&terms[1]));
        if !used_names.contains(&name) {
            return name;
        }
    }

    let base = title_case(&terms[0]);
    for modifier in terms.iter().skip(1) {
        let modifier = title_case(modifier);
        let prefixed = format!("{modifier} {base}");
        if !used_names.contains(&prefixed) {
            return prefixed;
        }
        let swapped = format!("{base} {modifier}");
        if !used_names.contains(&swapped) {
            return swapped;
        }
    }

    let mut counter = 1;
    loop {
        let name = format!("{base} {counter}");
        if !used_names.contains(&name) {
            return name;
        }
        counter += 1;
    }
}

/// Title-case with the first letter of every alphabetic run uppercased
/// and the rest lowercased, so "quantum-dot" becomes "Quantum-Dot".
fn title_case(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    let mut prev_alpha = false;
    for ch in term.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_clean_term_strips_digits_and_punctuation() {
        assert_eq!(clean_term("gaas2 nano-wire!"), "gaas nano-wire");
    }

    #[test]
    fn test_clean_term_drops_single_letters() {
        assert_eq!(clean_term("x ray"), "ray");
    }

    #[test]
    fn test_clean_term_can_come_out_empty() {
        assert_eq!(clean_term("2d"), "");
    }

    #[test]
    fn test_title_case_handles_hyphens() {
        assert_eq!(title_case("quantum-dot"), "Quantum-Dot");
        assert_eq!(title_case("THIN film"), "Thin Film");
    }

    #[test]
    fn test_no_terms_gives_fallback() {
        let used = HashSet::new();
        assert_eq!(format_topic_name(&[], &used), "Semiconductor Research");
    }

    #[test]
    fn test_single_term_is_always_numbered() {
        let used = HashSet::new();
        assert_eq!(
            format_topic_name(&strings(&["transport"]), &used),
            "Transport 1"
        );
    }

    #[test]
    fn test_collision_walks_the_ladder() {
        let mut used = HashSet::new();
        let terms = strings(&["quantum", "transport"]);

        assert_eq!(format_topic_name(&terms, &used), "Quantum Transport");
        used.insert("Quantum Transport".to_string());

        // two-term name taken -> modifier-first variant
        assert_eq!(format_topic_name(&terms, &used), "Transport Quantum");
        used.insert("Transport Quantum".to_string());

        // both orderings taken -> numbered base
        assert_eq!(format_topic_name(&terms, &used), "Quantum 1");
        used.insert("Quantum 1".to_string());

        assert_eq!(format_topic_name(&terms, &used), "Quantum 2");
    }

    #[test]
    fn test_compound_from_titles_preferred() {
        let mut used = HashSet::new();
        let name = unique_topic_name(
            &strings(&["quantum"]),
            &strings(&["Advances in quantum dot arrays"]),
            &mut used,
        );
        // the compound absorbs the lone keyword, leaving one term
        assert_eq!(name, "Quantum Dot 1");
        assert!(used.contains("Quantum Dot 1"));
    }

    #[test]
    fn test_hyphenated_title_terms_come_first() {
        let mut used = HashSet::new();
        let name = unique_topic_name(
            &strings(&["silicon", "quantum"]),
            &strings(&["quantum dot growth on silicon-carbide"]),
            &mut used,
        );
        assert_eq!(name, "Silicon-Carbide Quantum Dot");
    }

    #[test]
    fn test_generic_keywords_are_ignored() {
        let mut used = HashSet::new();
        let name = unique_topic_name(
            &strings(&["using", "novel", "approach"]),
            &strings(&["A study"]),
            &mut used,
        );
        assert_eq!(name, "Semiconductor Research");
    }

    #[test]
    fn test_names_never_repeat_within_a_run() {
        let mut used = HashSet::new();
        let keywords = strings(&["gan", "epitaxy"]);
        let titles = strings(&["GaN epitaxy on sapphire"]);
        let first = unique_topic_name(&keywords, &titles, &mut used);
        let second = unique_topic_name(&keywords, &titles, &mut used);
        let third = unique_topic_name(&keywords, &titles, &mut used);
        assert_ne!(first, second);
        assert_ne!(second, third);
        assert_ne!(first, third);
    }
}
