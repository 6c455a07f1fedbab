//! Benchmarks for the match engine and the search box controller.
//!
//! Simulates realistic documentation sizes:
//! - Small site:  ~50 sections, ~80 words each   (single-package docs)
//! - Medium site: ~500 sections, ~120 words each (framework docs)
//! - Large site:  ~3000 sections, ~150 words each (platform docs)
//!
//! Every query scans the whole corpus, so cost grows linearly with section
//! count. The large size shows where that stops feeling instant.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use docfind::controller::{Event, SearchController};
use docfind::{Document, MatchEngine, SearchConfig};
use std::time::Duration;

// ============================================================================
// DOCS CORPUS SIMULATION
// ============================================================================

struct SiteSize {
    name: &'static str,
    sections: usize,
    words_per_section: usize,
}

const SITE_SIZES: &[SiteSize] = &[
    SiteSize {
        name: "small",
        sections: 50,
        words_per_section: 80,
    },
    SiteSize {
        name: "medium",
        sections: 500,
        words_per_section: 120,
    },
    SiteSize {
        name: "large",
        sections: 3000,
        words_per_section: 150,
    },
];

const TECHNICAL_WORDS: &[&str] = &[
    "install",
    "configuration",
    "theme",
    "navbar",
    "sidebar",
    "search",
    "index",
    "extension",
    "directive",
    "role",
    "toctree",
    "autodoc",
    "docstring",
    "module",
    "package",
    "function",
    "parameter",
    "return",
    "exception",
    "deprecated",
    "version",
    "changelog",
    "template",
    "layout",
    "stylesheet",
    "javascript",
    "plugin",
    "build",
    "html",
    "output",
];

const GENERAL_WORDS: &[&str] = &[
    "the", "a", "an", "is", "are", "to", "of", "and", "for", "with", "this", "that", "you",
    "can", "should", "may", "when", "how", "use", "see", "example", "default", "option", "value",
];

fn generate_text(word_count: usize, seed: usize) -> String {
    let all_words: Vec<&str> = TECHNICAL_WORDS
        .iter()
        .chain(GENERAL_WORDS.iter())
        .copied()
        .collect();

    (0..word_count)
        .map(|i| all_words[(seed * 7 + i * 3) % all_words.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

fn generate_site(size: &SiteSize) -> Vec<Document> {
    (0..size.sections)
        .map(|i| Document {
            title: format!(
                "{} > {}",
                TECHNICAL_WORDS[i % TECHNICAL_WORDS.len()],
                TECHNICAL_WORDS[(i / 3) % TECHNICAL_WORDS.len()]
            ),
            text: generate_text(size.words_per_section, i),
            href: format!("guide/page-{}.html#section-{}", i / 10, i),
        })
        .collect()
}

// ============================================================================
// ENGINE
// ============================================================================

fn bench_engine_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_build");
    let config = SearchConfig::default();

    for size in SITE_SIZES {
        let corpus = generate_site(size);
        group.throughput(Throughput::Elements(size.sections as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size.name), &corpus, |b, corpus| {
            b.iter(|| MatchEngine::new(black_box(corpus.clone()), &config));
        });
    }

    group.finish();
}

fn bench_engine_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_search");
    let engine = MatchEngine::new(generate_site(&SITE_SIZES[1]), &SearchConfig::default())
        .expect("default config is valid");

    let queries = [
        ("single_term", "install"),
        ("typo", "confgiuration"),
        ("multi_term", "theme sidebar"),
        ("extended_exact", "=changelog"),
        ("extended_or", "'toctree | 'autodoc"),
        ("inverse", "!deprecated"),
        ("no_match", "xyznonexistent"),
    ];

    for (name, query) in queries {
        group.bench_with_input(BenchmarkId::new("medium", name), &query, |b, query| {
            b.iter(|| engine.search(black_box(query), 10));
        });
    }

    group.finish();
}

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_scaling");

    for size in SITE_SIZES {
        let engine = MatchEngine::new(generate_site(size), &SearchConfig::default())
            .expect("default config is valid");
        group.throughput(Throughput::Elements(size.sections as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size.name), &engine, |b, engine| {
            b.iter(|| engine.search(black_box("sidebar"), 10));
        });
    }

    group.finish();
}

// ============================================================================
// CONTROLLER
// ============================================================================

/// Keystroke-by-keystroke typing, the way the input listener sees it.
fn bench_typing(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller_typing");
    let config = SearchConfig::default();
    let engine = MatchEngine::new(generate_site(&SITE_SIZES[1]), &config)
        .expect("default config is valid");

    let word = "configuration";
    group.throughput(Throughput::Elements(word.len() as u64));
    group.bench_function("medium", |b| {
        b.iter(|| {
            let mut controller = SearchController::new(config.clone(), "https://docs.example.com")
                .expect("default config is valid");
            controller.dispatch(Event::IndexLoaded(Ok(engine.clone())));
            for end in 1..=word.len() {
                black_box(controller.dispatch(Event::Input(word[..end].to_string())));
            }
        });
    });

    group.finish();
}

fn quick_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(2))
        .noise_threshold(0.02) // Only report changes > 2%
}

// ============================================================================
// CRITERION GROUPS
// ============================================================================

criterion_group!(
    name = benches;
    config = quick_config();
    targets =
    bench_engine_build,
    bench_engine_search,
    bench_scaling,
    bench_typing,
);

criterion_main!(benches);
