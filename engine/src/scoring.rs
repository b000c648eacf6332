//! Per-call TF-IDF weighting. Documents are tokenized once per ranking call
//! and the token bags shared across query terms; document frequency is
//! recomputed on every call, never cached across calls. O(corpus x terms)
//! per query, which is fine at FAQ scale (hundreds of records).

/// Term frequency: occurrences of `term` over total tokens of the document.
/// A zero-token document scores 0 rather than dividing by zero.
pub fn term_frequency(term: &str, tokens: &[String]) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let count = tokens.iter().filter(|t| t.as_str() == term).count();
    count as f64 / tokens.len() as f64
}

/// Inverse document frequency: ln(N / (df + 1)). Negative once a term
/// appears in more than N/e - 1 documents, which pushes ubiquitous terms
/// below zero.
pub fn inverse_document_frequency(term: &str, corpus_tokens: &[Vec<String>]) -> f64 {
    let docs_with_term = corpus_tokens
        .iter()
        .filter(|tokens| tokens.iter().any(|t| t == term))
        .count();
    (corpus_tokens.len() as f64 / (docs_with_term as f64 + 1.0)).ln()
}

pub fn tf_idf(term: &str, tokens: &[String], corpus_tokens: &[Vec<String>]) -> f64 {
    term_frequency(term, tokens) * inverse_document_frequency(term, corpus_tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bag(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn tf_of_empty_document_is_zero() {
        assert_eq!(term_frequency("refund", &[]), 0.0);
    }

    #[test]
    fn tf_counts_repeated_terms() {
        let tokens = bag(&["refund", "policy", "refund", "window"]);
        assert!((term_frequency("refund", &tokens) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn idf_goes_negative_for_ubiquitous_terms() {
        let corpus = vec![
            bag(&["shipping", "rates"]),
            bag(&["shipping", "delays"]),
            bag(&["shipping", "labels"]),
        ];
        // df = 3 in a corpus of 3: ln(3/4) < 0
        assert!(inverse_document_frequency("shipping", &corpus) < 0.0);
    }

    #[test]
    fn tfidf_is_zero_for_absent_terms() {
        let corpus = vec![bag(&["billing", "cycle"]), bag(&["account", "setup"])];
        assert_eq!(tf_idf("refund", &corpus[0], &corpus), 0.0);
    }
}
