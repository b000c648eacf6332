use crate::faq::Faq;
use crate::tokenizer::tokenize;

/// Minimum normalized similarity for a fuzzy match.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.7;

/// Classic dynamic-programming edit distance: insertions, deletions and
/// substitutions each cost 1, computed over a full
/// (len1 + 1) x (len2 + 1) table. Lengths are character counts.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let mut matrix = vec![vec![0usize; a_chars.len() + 1]; b_chars.len() + 1];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=b_chars.len() {
        for j in 1..=a_chars.len() {
            if b_chars[i - 1] == a_chars[j - 1] {
                matrix[i][j] = matrix[i - 1][j - 1];
            } else {
                matrix[i][j] = (matrix[i - 1][j - 1] + 1)
                    .min(matrix[i][j - 1] + 1)
                    .min(matrix[i - 1][j] + 1);
            }
        }
    }

    matrix[b_chars.len()][a_chars.len()]
}

/// Normalized similarity in [0, 1], scaled by the longer string's length.
/// Two empty strings are identical (1.0).
pub fn string_similarity(str1: &str, str2: &str) -> f64 {
    let (longer, shorter) = if str1.chars().count() > str2.chars().count() {
        (str1, str2)
    } else {
        (str2, str1)
    };

    let longer_len = longer.chars().count();
    if longer_len == 0 {
        return 1.0;
    }

    let edit_distance = levenshtein_distance(longer, shorter);
    (longer_len - edit_distance) as f64 / longer_len as f64
}

/// Recall candidates whose text carries a token within `threshold` similarity
/// of any query token. Unscored; input order preserved.
pub fn fuzzy_search(query: &str, faqs: &[Faq], threshold: f64) -> Vec<Faq> {
    let query_tokens = tokenize(query);

    faqs.iter()
        .filter(|faq| {
            let faq_tokens = tokenize(&faq.combined_text());
            query_tokens.iter().any(|query_token| {
                faq_tokens
                    .iter()
                    .any(|faq_token| string_similarity(query_token, faq_token) >= threshold)
            })
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_of_identical_strings_is_zero() {
        assert_eq!(levenshtein_distance("hello", "hello"), 0);
    }

    #[test]
    fn distance_to_empty_string_is_its_length() {
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("", ""), 0);
    }

    #[test]
    fn single_edit_distances() {
        assert_eq!(levenshtein_distance("hello", "hallo"), 1);
        assert_eq!(levenshtein_distance("hello", "hell"), 1);
        assert_eq!(levenshtein_distance("hello", "helloo"), 1);
    }

    #[test]
    fn similarity_of_two_empty_strings_is_one() {
        assert_eq!(string_similarity("", ""), 1.0);
    }
}
