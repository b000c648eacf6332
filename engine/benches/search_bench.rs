use criterion::{criterion_group, criterion_main, Criterion};
use faqrank::{fuzzy_search, rank_faqs, tokenize, Faq, DEFAULT_FUZZY_THRESHOLD};

fn corpus(n: usize) -> Vec<Faq> {
    let topics = [
        "password reset",
        "billing invoice",
        "shipping delivery",
        "account settings",
        "refund policy",
    ];
    (0..n)
        .map(|i| {
            let topic = topics[i % topics.len()];
            let mut faq = Faq::new(
                format!("faq-{i}"),
                format!("How does {topic} work for plan {i}"),
                format!("Detailed steps for {topic}, including edge cases and timelines for request {i}"),
            );
            faq.category = Some(topic.split(' ').next().unwrap().to_string());
            faq.tags = vec![topic.to_string()];
            faq.views = (i as u64 * 17) % 400;
            faq
        })
        .collect()
}

fn bench_rank(c: &mut Criterion) {
    let faqs = corpus(300);
    c.bench_function("rank_300_faqs", |b| {
        b.iter(|| rank_faqs("password reset not working", &faqs))
    });
}

fn bench_fuzzy(c: &mut Criterion) {
    let faqs = corpus(300);
    c.bench_function("fuzzy_300_faqs", |b| {
        b.iter(|| fuzzy_search("pasword", &faqs, DEFAULT_FUZZY_THRESHOLD))
    });
}

fn bench_tokenize(c: &mut Criterion) {
    let text = corpus(50)
        .iter()
        .map(|f| f.combined_text())
        .collect::<Vec<_>>()
        .join(" ");
    c.bench_function("tokenize_corpus_text", |b| b.iter(|| tokenize(&text)));
}

criterion_group!(benches, bench_rank, bench_fuzzy, bench_tokenize);
criterion_main!(benches);
