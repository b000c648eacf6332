use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    static ref NON_WORD: Regex = Regex::new(r"[^\w\s]").expect("valid regex");
    static ref STOPWORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "a", "an", "and", "are", "as", "at", "be", "by", "for", "from",
            "has", "he", "in", "is", "it", "its", "of", "on", "that", "the",
            "to", "was", "will", "with", "what", "when", "where", "who", "how",
        ];
        words.iter().copied().collect()
    };
}

fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(token)
}

/// Tokenize text: lowercase, punctuation treated as a separator, split on
/// whitespace, tokens of length <= 2 and stopwords dropped. No stemming;
/// matching is exact-token, typos are the fuzzy matcher's job.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let cleaned = NON_WORD.replace_all(&lowered, " ");
    cleaned
        .split_whitespace()
        .filter(|word| word.chars().count() > 2 && !is_stopword(word))
        .map(str::to_string)
        .collect()
}

/// Deduplicate tokens, keeping first-occurrence order.
pub fn unique_tokens(tokens: &[String]) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(tokens.len());
    for token in tokens {
        if !unique.contains(token) {
            unique.push(token.clone());
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_separates_tokens() {
        let toks = tokenize("reset-password, quickly!");
        assert_eq!(toks, vec!["reset", "password", "quickly"]);
    }

    #[test]
    fn short_tokens_are_dropped() {
        assert!(tokenize("go to it").is_empty());
    }
}
