use avltree::AvlTree;
use criterion::{
    measurement::Measurement, BatchSize, BenchmarkGroup, BenchmarkId, Criterion, Throughput,
};

use crate::Lfsr;

#[derive(Debug, Clone, Copy)]
struct BenchName {
    bench: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}_n_values", v.bench), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("insert");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_random(&mut g, n_values);
        bench_ascending(&mut g, n_values);
    }
}

/// Generate a benchmark measuring the time needed to insert `n_values` keys
/// drawn from the given key generator into an empty tree.
macro_rules! insert_bench {
    (
        $name:ident,
        $init:expr,
        $next_key:expr
    ) => {
        paste::paste! {
            fn [<bench_ $name>]<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
            where
                M: Measurement,
            {
                let bench_name = BenchName {
                    bench: stringify!($name),
                    n_values,
                };

                g.throughput(Throughput::Elements(n_values as _)); // Keys inserted per second
                g.bench_function(BenchmarkId::from(bench_name), |b| {
                    b.iter_batched(
                        || (AvlTree::default(), $init),
                        |(mut t, mut keys)| {
                            for _i in 0..n_values {
                                t.insert($next_key(&mut keys));
                            }
                            t
                        },
                        BatchSize::PerIteration,
                    );
                });
            }
        }
    };
}

// Keys in pseudo-random order.
insert_bench!(random, Lfsr::default(), |rand: &mut Lfsr| rand.next_key());

// Strictly ascending keys, rotating on every other insert.
insert_bench!(ascending, 0_i64, |next: &mut i64| {
    *next += 1;
    *next
});
