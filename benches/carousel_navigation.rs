// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for carousel navigation and the motion engine.
//!
//! Measures the performance of:
//! - Cyclic navigation over a product's images (controller only)
//! - Advancing the frame-ticked engine through an image swap

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::time::{Duration, Instant};
use vitrina::carousel::{self, CarouselModal, Host, ImageRef, Nodes, Product};
use vitrina::motion::{Engine, Node, RecordingAnimator};
use vitrina::page::PageState;
use vitrina::quote_form::QuoteFormState;

const NODES: Nodes = Nodes {
    surface: Node::new(1),
    image: Node::new(2),
};

fn product(len: usize) -> Product {
    Product::new(
        "Bench",
        "",
        (0..len).map(|i| ImageRef::new(format!("{i}.jpg"))),
    )
}

/// Benchmark `next()` round trips against the recording engine.
fn bench_next_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_navigation");

    for len in [3_usize, 24] {
        group.bench_function(format!("next_cycle_{len}"), |b| {
            let mut modal = CarouselModal::new(NODES);
            let mut animator: RecordingAnimator<carousel::Settled> = RecordingAnimator::new();
            let mut page = PageState::new();
            let mut form = QuoteFormState::new();
            let mut host = Host::new(&mut animator, &mut page, &mut form);
            modal.open(product(len), &mut host);

            b.iter(|| {
                for _ in 0..len {
                    modal.next(&mut host);
                }
                black_box(modal.current_index());
            });
        });
    }

    group.finish();
}

/// Benchmark an image swap driven to completion by engine ticks.
fn bench_engine_swap(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_navigation");

    group.bench_function("engine_swap", |b| {
        b.iter(|| {
            let mut modal = CarouselModal::new(NODES);
            let mut engine: Engine<carousel::Settled> = Engine::new();
            let mut page = PageState::new();
            let mut form = QuoteFormState::new();

            let mut host = Host::new(&mut engine, &mut page, &mut form);
            modal.open(product(4), &mut host);
            modal.next(&mut host);

            let start = Instant::now();
            for frame in 0..40_u64 {
                let now = start + Duration::from_millis(frame * 16);
                let completions = engine.tick(now);
                let mut host = Host::new(&mut engine, &mut page, &mut form);
                for settled in completions {
                    modal.on_settled(settled, &mut host);
                }
            }
            black_box(modal.displayed_image().cloned());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_next_cycle, bench_engine_swap);
criterion_main!(benches);
