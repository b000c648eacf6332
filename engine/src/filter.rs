use crate::faq::{Faq, SearchHit};
use crate::rank::rank_faqs;
use serde::Deserialize;
use time::OffsetDateTime;

/// Subtractive filters applied on top of a ranked result set. Every field
/// defaults to "skip"; `category` set to `"all"` also skips.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub date_from: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub date_to: Option<OffsetDateTime>,
}

/// Rank, then prune: category equality, tag membership, creation-date lower
/// bound, creation-date upper bound, in that order. Filters only remove
/// entries; the ranked order is never disturbed. Records without a creation
/// timestamp fail any present date bound.
pub fn advanced_search(query: &str, faqs: &[Faq], filters: &SearchFilters) -> Vec<SearchHit> {
    let mut results = rank_faqs(query, faqs);

    if let Some(category) = filters.category.as_deref() {
        if category != "all" {
            let wanted = category.to_lowercase();
            results.retain(|hit| {
                hit.faq
                    .category
                    .as_deref()
                    .map_or(false, |c| c.to_lowercase() == wanted)
            });
        }
    }

    if !filters.tags.is_empty() {
        let wanted: Vec<String> = filters.tags.iter().map(|t| t.to_lowercase()).collect();
        results.retain(|hit| {
            hit.faq
                .tags
                .iter()
                .any(|tag| wanted.contains(&tag.to_lowercase()))
        });
    }

    if let Some(from) = filters.date_from {
        results.retain(|hit| hit.faq.created_at.map_or(false, |at| at >= from));
    }

    if let Some(to) = filters.date_to {
        results.retain(|hit| hit.faq.created_at.map_or(false, |at| at <= to));
    }

    tracing::debug!(total = results.len(), "advanced search complete");
    results
}

/// Plain substring search: case-insensitive match of the raw term against
/// question, answer or any tag. Unranked; input order preserved.
pub fn substring_search(term: &str, faqs: &[Faq]) -> Vec<Faq> {
    let needle = term.to_lowercase();

    faqs.iter()
        .filter(|faq| {
            faq.question.to_lowercase().contains(&needle)
                || faq.answer.to_lowercase().contains(&needle)
                || faq.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}
