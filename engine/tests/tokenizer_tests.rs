use faqrank::tokenizer::{tokenize, unique_tokens};

#[test]
fn it_drops_stopwords_and_short_tokens() {
    assert_eq!(tokenize("what is the time"), vec!["time"]);
}

#[test]
fn it_lowercases_and_splits_on_punctuation() {
    let toks = tokenize("Can't reset; my-Password??");
    assert_eq!(toks, vec!["can", "reset", "password"]);
}

#[test]
fn it_is_idempotent_over_its_own_output() {
    let first = tokenize("How do I reset my account password, quickly?!");
    let rejoined = first.join(" ");
    assert_eq!(tokenize(&rejoined), first);
}

#[test]
fn empty_input_yields_no_tokens() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("   \t\n").is_empty());
}

#[test]
fn unique_tokens_keeps_first_occurrence_order() {
    let tokens = tokenize("billing invoice billing refund invoice");
    assert_eq!(unique_tokens(&tokens), vec!["billing", "invoice", "refund"]);
}
