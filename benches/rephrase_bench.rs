use criterion::{black_box, criterion_group, criterion_main, Criterion};
use webnlg_reader::{
    nlp::{Nlp, RuleTokenizer},
    rephrase::{rephrase, rephrase_if_must},
};

pub fn surface_forms(c: &mut Criterion) {
    let entities = [
        "2777.0 (metres)",
        "united states air force",
        "Turkey (country)",
        "a/b/c",
        "1,000 (days)",
    ];
    c.bench_function("rephrase", |b| {
        b.iter(|| {
            for entity in entities.iter() {
                let _ = rephrase(black_box(entity));
            }
        })
    });
    c.bench_function("rephrase_if_must", |b| {
        b.iter(|| {
            for entity in entities.iter() {
                rephrase_if_must(black_box(entity));
            }
        })
    });
}

pub fn tokenize(c: &mut Criterion) {
    let text = "Alan Bean was originally from Wheeler, Texas and graduated from UT Austin in 1955 with a B.S. He went on to work as a test pilot and became a crew member of the Apollo 12 mission before he retired.";
    let nlp = RuleTokenizer::default();
    c.bench_function("word_tokenize", |b| {
        b.iter(|| nlp.word_tokenize(black_box(text)))
    });
    c.bench_function("sent_tokenize", |b| {
        b.iter(|| nlp.sent_tokenize(black_box(text)))
    });
}

criterion_group!(benches, surface_forms, tokenize);
criterion_main!(benches);
