use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use result_or_error_core::{Error, ResultOrError};

fn parse(s: String) -> ResultOrError<i64> {
    match s.parse::<i64>() {
        Ok(n) => ResultOrError::from_value(n),
        Err(_) => Error::validation().with_code("Parse.Int").into(),
    }
}

fn pipeline(input: ResultOrError<String>) -> ResultOrError<String> {
    input
        .then(parse)
        .then_map(|n| n * 2)
        .fail_if(|n| *n < 0, Error::validation())
        .then_map(|n| n.to_string())
        .else_value_with(|errors| format!("count:{}", errors.len()))
}

/// Value path: every step runs.
fn bench_value_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("value_path");
    group.throughput(Throughput::Elements(1));

    group.bench_function("parse_double_check_format", |b| {
        b.iter(|| pipeline(black_box(ResultOrError::from_value("21".to_string()))))
    });

    group.finish();
}

/// Error path: every transformation short-circuits, recovery runs once.
fn bench_error_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("error_path");

    for error_count in [1usize, 4, 16] {
        let errors: Vec<Error> = (0..error_count)
            .map(|i| Error::custom(i as i32, "Bench.Error", "benchmark error"))
            .collect();
        group.throughput(Throughput::Elements(error_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(error_count),
            &errors,
            |b, errors| {
                b.iter(|| pipeline(black_box(ResultOrError::from_errors(errors.clone()))))
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_value_path, bench_error_path);
criterion_main!(benches);
