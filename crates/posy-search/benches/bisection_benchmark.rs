// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use posy_model::{garden::Garden, request::BouquetRequest};
use posy_search::bisection::{BisectionSearch, min_days};
use posy_search::monitor::no_op::NoOpMonitor;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hint::black_box;

const SIZES: [usize; 3] = [1_000, 100_000, 1_000_000];
const MAX_BLOOM_DAY: i64 = 1_000_000_000;

fn random_garden(rng: &mut StdRng, num_plots: usize) -> Garden<i64> {
    let days: Vec<i64> = (0..num_plots)
        .map(|_| rng.random_range(1..=MAX_BLOOM_DAY))
        .collect();
    Garden::new(days).unwrap_or_else(|e| panic!("generated an invalid garden: {}", e))
}

fn bench_min_days(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut group = c.benchmark_group("min_days");

    for &num_plots in &SIZES {
        let garden = random_garden(&mut rng, num_plots);
        // Small bouquets over a large share of the row keep the answer deep in the season.
        let request = BouquetRequest::new(num_plots / 8, 3).unwrap();

        group.throughput(Throughput::Elements(num_plots as u64));
        group.bench_with_input(
            BenchmarkId::new("closed_form", num_plots),
            &garden,
            |b, garden| b.iter(|| min_days(black_box(garden), black_box(&request))),
        );
        group.bench_with_input(
            BenchmarkId::new("monitored", num_plots),
            &garden,
            |b, garden| {
                b.iter(|| {
                    let mut monitor = NoOpMonitor::new();
                    BisectionSearch::new().solve(
                        black_box(garden),
                        black_box(&request),
                        &mut monitor,
                    )
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_min_days);
criterion_main!(benches);
