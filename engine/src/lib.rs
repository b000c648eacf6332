//! In-process relevance engine for an FAQ knowledge base: per-call TF-IDF
//! ranking with heuristic boosts, fuzzy (edit-distance) matching,
//! autocomplete suggestions, highlighting, and filter composition.
//!
//! The engine is stateless apart from a constant stop-word set. Every call is
//! a pure function of the corpus snapshot it is handed; it never mutates
//! input records and never caches document frequencies across calls.

pub mod faq;
pub mod filter;
pub mod fuzzy;
pub mod rank;
pub mod scoring;
pub mod stats;
pub mod suggest;
pub mod tokenizer;

pub use faq::{Faq, SearchHit};
pub use filter::{advanced_search, substring_search, SearchFilters};
pub use fuzzy::{fuzzy_search, levenshtein_distance, string_similarity, DEFAULT_FUZZY_THRESHOLD};
pub use rank::{rank_faqs, MIN_RELEVANCE};
pub use stats::{dashboard_stats, DashboardStats};
pub use suggest::{highlight_search_terms, search_suggestions};
pub use tokenizer::tokenize;
