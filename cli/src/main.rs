use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use faqrank::{
    advanced_search, dashboard_stats, fuzzy_search, search_suggestions, Faq, SearchFilters,
    SearchHit, DEFAULT_FUZZY_THRESHOLD,
};
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "faqrank")]
#[command(about = "Search and inspect an FAQ corpus snapshot", long_about = None)]
struct Cli {
    /// Corpus snapshot: JSON array or JSONL stream of FAQ records
    #[arg(long, default_value = "./faqs.json")]
    faqs: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ranked search with optional filters and pagination
    Search {
        query: String,
        /// Category filter ("all" disables it)
        #[arg(long)]
        category: Option<String>,
        /// Comma-separated tag filter
        #[arg(long)]
        tags: Option<String>,
        /// Keep records created at or after this RFC 3339 timestamp
        #[arg(long)]
        date_from: Option<String>,
        /// Keep records created at or before this RFC 3339 timestamp
        #[arg(long)]
        date_to: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: usize,
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
    /// Autocomplete suggestions drawn from questions and tags
    Suggest {
        query: String,
        #[arg(long, default_value_t = 5)]
        limit: usize,
    },
    /// Edit-distance recall for misspelled queries
    Fuzzy {
        query: String,
        #[arg(long, default_value_t = DEFAULT_FUZZY_THRESHOLD)]
        threshold: f64,
    },
    /// Corpus dashboard aggregates
    Stats,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponse {
    status: &'static str,
    query: String,
    total: usize,
    page: usize,
    limit: usize,
    total_pages: usize,
    results: Vec<ResultEntry>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResultEntry {
    faq_id: String,
    question: String,
    answer: String,
    category: Option<String>,
    tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    relevance_score: Option<String>,
    views: u64,
    helpful: u64,
}

impl From<SearchHit> for ResultEntry {
    fn from(hit: SearchHit) -> Self {
        Self {
            faq_id: hit.faq.id,
            question: hit.faq.question,
            answer: hit.faq.answer,
            category: hit.faq.category,
            tags: hit.faq.tags,
            relevance_score: hit.relevance_score.map(|score| format!("{score:.4}")),
            views: hit.faq.views,
            helpful: hit.faq.helpful,
        }
    }
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    let faqs = load_faqs(Path::new(&cli.faqs))?;
    tracing::info!(num_faqs = faqs.len(), "loaded corpus snapshot");

    match cli.command {
        Commands::Search { query, category, tags, date_from, date_to, page, limit } => {
            run_search(&query, &faqs, category, tags, date_from, date_to, page, limit)
        }
        Commands::Suggest { query, limit } => {
            let suggestions = search_suggestions(&query, &faqs, limit);
            let payload = serde_json::json!({ "suggestions": suggestions });
            println!("{}", serde_json::to_string_pretty(&payload)?);
            Ok(())
        }
        Commands::Fuzzy { query, threshold } => {
            let matches = fuzzy_search(&query, &faqs, threshold);
            for faq in &matches {
                println!("{}\t{}", faq.id, faq.question);
            }
            tracing::info!(matches = matches.len(), "fuzzy search complete");
            Ok(())
        }
        Commands::Stats => {
            let stats = dashboard_stats(&faqs);
            println!("{}", serde_json::to_string_pretty(&stats)?);
            Ok(())
        }
    }
}

fn run_search(
    query: &str,
    faqs: &[Faq],
    category: Option<String>,
    tags: Option<String>,
    date_from: Option<String>,
    date_to: Option<String>,
    page: usize,
    limit: usize,
) -> Result<()> {
    // The engine scores any query; minimum length is this layer's contract.
    if query.trim().chars().count() < 3 {
        bail!("search query must be at least 3 characters long");
    }

    let filters = SearchFilters {
        category,
        tags: tags
            .map(|raw| {
                raw.split(',')
                    .map(|tag| tag.trim().to_string())
                    .filter(|tag| !tag.is_empty())
                    .collect()
            })
            .unwrap_or_default(),
        date_from: parse_timestamp(date_from.as_deref())?,
        date_to: parse_timestamp(date_to.as_deref())?,
    };

    let results = advanced_search(query, faqs, &filters);
    let total = results.len();
    let limit = limit.max(1);
    let page = page.max(1);
    let total_pages = (total + limit - 1) / limit;
    let page_results: Vec<ResultEntry> = results
        .into_iter()
        .skip((page - 1) * limit)
        .take(limit)
        .map(ResultEntry::from)
        .collect();

    let response = SearchResponse {
        status: "success",
        query: query.to_string(),
        total,
        page,
        limit,
        total_pages,
        results: page_results,
    };
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn parse_timestamp(value: Option<&str>) -> Result<Option<OffsetDateTime>> {
    match value {
        None => Ok(None),
        Some(raw) => {
            let parsed = OffsetDateTime::parse(raw, &Rfc3339)
                .with_context(|| format!("invalid RFC 3339 timestamp: {raw}"))?;
            Ok(Some(parsed))
        }
    }
}

fn load_faqs(path: &Path) -> Result<Vec<Faq>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let reader = BufReader::new(file);

    if path.extension().and_then(|ext| ext.to_str()) == Some("jsonl") {
        let mut faqs = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            faqs.push(serde_json::from_str(&line)?);
        }
        Ok(faqs)
    } else {
        let faqs = serde_json::from_reader(reader)?;
        Ok(faqs)
    }
}
