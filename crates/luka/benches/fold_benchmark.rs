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
use luka::{OP, Value};
use std::hint::black_box;

fn operands(n: usize) -> Vec<f64> {
    (1..=n).map(|i| 1.0 + 1.0 / i as f64).collect()
}

fn bench_folds(c: &mut Criterion) {
    let mut group = c.benchmark_group("folds");
    for n in [0usize, 16, 1024] {
        let xs = operands(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("sum", n), &xs, |b, xs| {
            b.iter(|| luka::sum(black_box(xs)))
        });
        group.bench_with_input(BenchmarkId::new("product", n), &xs, |b, xs| {
            b.iter(|| luka::product(black_box(xs)))
        });
        group.bench_with_input(BenchmarkId::new("iterator_fold_add", n), &xs, |b, xs| {
            b.iter(|| black_box(xs).iter().copied().fold(0.0, OP.add))
        });
    }
    group.finish();
}

fn bench_dynamic_call(c: &mut Criterion) {
    let args: Vec<Value> = operands(16).into_iter().map(Value::from).collect();
    c.bench_function("call_sum_by_name", |b| {
        b.iter(|| OP.call(black_box("sum"), black_box(&args)))
    });
    c.bench_function("lookup_alias", |b| b.iter(|| OP.get(black_box("equal"))));
}

criterion_group!(benches, bench_folds, bench_dynamic_call);
criterion_main!(benches);
