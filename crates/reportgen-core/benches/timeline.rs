use criterion::{black_box, criterion_group, criterion_main, Criterion};

use reportgen_core::model::{ResponseSet, StudentRef};
use reportgen_core::timeline::{completed_response_sets, format_completion, parse_completion, DateStyle};

fn make_response_sets(n: usize) -> Vec<ResponseSet> {
    (0..n)
        .map(|i| ResponseSet {
            id: format!("rs{i}"),
            assessment_id: "assessment1".into(),
            student: StudentRef {
                id: format!("student{}", i % 4),
            },
            completed: (i % 5 != 0).then(|| {
                format!(
                    "{:02}/{:02}/{} {:02}:{:02}:00",
                    i % 28 + 1,
                    i % 12 + 1,
                    2019 + i % 6,
                    i % 24,
                    i % 60
                )
            }),
            responses: vec![],
        })
        .collect()
}

fn bench_parse_completion(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_completion");

    group.bench_function("valid", |b| {
        b.iter(|| parse_completion(black_box("03/06/2024 14:15:00")))
    });

    group.bench_function("malformed", |b| {
        b.iter(|| parse_completion(black_box("2024-06-03T14:15:00")))
    });

    group.bench_function("format_date_time", |b| {
        let ts = parse_completion("03/06/2024 14:15:00").unwrap();
        b.iter(|| format_completion(black_box(&ts), DateStyle::DateTime))
    });

    group.finish();
}

fn bench_completed_response_sets(c: &mut Criterion) {
    let mut group = c.benchmark_group("completed_response_sets");

    for n in [10, 100, 1000] {
        let sets = make_response_sets(n);
        group.bench_function(format!("sets={n}"), |b| {
            b.iter(|| completed_response_sets(black_box("student1"), black_box(&sets)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse_completion, bench_completed_response_sets);
criterion_main!(benches);
