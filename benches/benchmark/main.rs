use criterion::criterion_main;

mod core;

criterion_main!(core::core_benches, formatting::formatting_benches);
