use crate::faq::Faq;
use crate::tokenizer::{tokenize, unique_tokens};
use regex::RegexBuilder;

/// Autocomplete candidates: whole questions and tag strings that contain the
/// raw query, case-insensitively. Scans FAQs in input order, question before
/// tags per record, first occurrence wins, capped at `limit` unique strings.
/// A trimmed query shorter than 2 characters yields nothing.
pub fn search_suggestions(query: &str, faqs: &[Faq], limit: usize) -> Vec<String> {
    if query.trim().chars().count() < 2 {
        return Vec::new();
    }

    let query_lower = query.to_lowercase();
    let mut suggestions: Vec<String> = Vec::new();

    for faq in faqs {
        if faq.question.to_lowercase().contains(&query_lower)
            && !suggestions.contains(&faq.question)
        {
            suggestions.push(faq.question.clone());
        }

        for tag in &faq.tags {
            if tag.to_lowercase().contains(&query_lower) && !suggestions.contains(tag) {
                suggestions.push(tag.clone());
            }
        }
    }

    suggestions.truncate(limit);
    suggestions
}

/// Wrap every whole-word, case-insensitive occurrence of each distinct query
/// token in `<mark>` tags, preserving the casing of the matched text. No
/// partial-word highlighting.
pub fn highlight_search_terms(text: &str, query: &str) -> String {
    if text.is_empty() || query.is_empty() {
        return text.to_string();
    }

    let mut highlighted = text.to_string();
    for token in unique_tokens(&tokenize(query)) {
        let pattern = RegexBuilder::new(&format!(r"\b{}\b", regex::escape(&token)))
            .case_insensitive(true)
            .build()
            .unwrap();
        highlighted = pattern
            .replace_all(&highlighted, |caps: &regex::Captures| {
                format!("<mark>{}</mark>", &caps[0])
            })
            .to_string();
    }
    highlighted
}
