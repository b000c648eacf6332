use crate::faq::{Faq, SearchHit};
use crate::scoring::tf_idf;
use crate::tokenizer::{tokenize, unique_tokens};

/// Scored results at or below this relevance are dropped.
pub const MIN_RELEVANCE: f64 = 0.1;

/// Rank a corpus snapshot against a query.
///
/// An empty or whitespace-only query returns the input unmodified: same
/// order, no scores attached, nothing filtered. Otherwise each candidate is
/// scored as the TF-IDF sum over the unique query tokens plus the heuristic
/// boosts, filtered to scores above [`MIN_RELEVANCE`], and sorted descending.
/// Equal scores keep their input order (stable sort, no secondary key).
pub fn rank_faqs(query: &str, faqs: &[Faq]) -> Vec<SearchHit> {
    if query.trim().is_empty() {
        return faqs
            .iter()
            .map(|faq| SearchHit { faq: faq.clone(), relevance_score: None })
            .collect();
    }

    let query_terms = unique_tokens(&tokenize(query));
    let query_lower = query.to_lowercase();
    let corpus_tokens: Vec<Vec<String>> = faqs
        .iter()
        .map(|faq| tokenize(&faq.combined_text()))
        .collect();

    tracing::debug!(terms = query_terms.len(), candidates = faqs.len(), "ranking query");

    let mut hits: Vec<SearchHit> = Vec::new();
    for (faq, tokens) in faqs.iter().zip(corpus_tokens.iter()) {
        let score = relevance_score(faq, tokens, &query_terms, &query_lower, &corpus_tokens);
        if score > MIN_RELEVANCE {
            hits.push(SearchHit { faq: faq.clone(), relevance_score: Some(score) });
        }
    }

    hits.sort_by(|a, b| {
        b.relevance_score
            .partial_cmp(&a.relevance_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    hits
}

fn relevance_score(
    faq: &Faq,
    tokens: &[String],
    query_terms: &[String],
    query_lower: &str,
    corpus_tokens: &[Vec<String>],
) -> f64 {
    let mut total_score = 0.0;
    for term in query_terms {
        total_score += tf_idf(term, tokens, corpus_tokens);
    }

    // Terms landing in the question itself count double.
    let question_tokens = tokenize(&faq.question);
    let question_boost = 2.0
        * query_terms
            .iter()
            .filter(|term| question_tokens.contains(*term))
            .count() as f64;

    let exact_match_boost = if faq.combined_text().to_lowercase().contains(query_lower) {
        3.0
    } else {
        0.0
    };

    let category_boost = match &faq.category {
        Some(category) if tokenize(category).iter().any(|t| query_terms.contains(t)) => 1.5,
        _ => 0.0,
    };

    // Tags match whole-string against query tokens; categories are tokenized
    // first. The asymmetry is intentional.
    let tag_boost = if faq
        .tags
        .iter()
        .any(|tag| query_terms.iter().any(|term| *term == tag.to_lowercase()))
    {
        1.5
    } else {
        0.0
    };

    let popularity_boost = ((faq.views as f64) + 1.0).ln() * 0.1
        + ((faq.helpful as f64) - (faq.not_helpful as f64)) * 0.2;

    total_score + question_boost + exact_match_boost + category_boost + tag_boost + popularity_boost
}
