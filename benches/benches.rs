use autocomplete::filter::{FilterOptions, MatchMode, filter};
use autocomplete::suggestions::CITIES;
use autocomplete::{Action, Autocomplete};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn suggestions(n: usize) -> Vec<String> {
    CITIES.iter().cycle().take(n).map(|s| s.to_string()).collect()
}

fn filter_cities(suggestions: &[String]) {
    let result = filter(black_box("new"), suggestions, &FilterOptions::default());
    // a simple sanity check
    assert_eq!(result.len(), 8)
}

fn filter_cities_prefix(suggestions: &[String]) {
    let options = FilterOptions {
        mode: MatchMode::Prefix,
        ..FilterOptions::default()
    };
    let result = filter(black_box("san"), suggestions, &options);
    // a simple sanity check
    assert!(!result.is_empty())
}

fn navigate(suggestions: &[String]) {
    let mut state = Autocomplete::new(suggestions.to_vec());
    state.handle(Action::Focus);
    for _ in 0..10 {
        state.handle(Action::Next);
    }
    // a simple sanity check
    assert_eq!(state.active_index(), Some(7))
}

fn criterion_benchmark(c: &mut Criterion) {
    let suggestions = suggestions(10_000);
    c.bench_function("filter_cities", |b| b.iter(|| filter_cities(&suggestions)));
    c.bench_function("filter_cities_prefix", |b| {
        b.iter(|| filter_cities_prefix(&suggestions))
    });
    c.bench_function("navigate", |b| b.iter(|| navigate(&suggestions)));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
