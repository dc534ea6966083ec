use criterion::{black_box, criterion_group, criterion_main, Criterion};

use longhand_core::decompose::decompose;
use longhand_core::grid::GridSchema;
use longhand_core::model::Problem;
use longhand_core::verify::grade_grid;

fn bench_decompose(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompose");

    group.bench_function("2x2 digits", |b| {
        let p = Problem::new(23, 14);
        b.iter(|| decompose(black_box(&p)))
    });

    group.bench_function("9x9 digits", |b| {
        let p = Problem::new(987_654_321, 123_456_789);
        b.iter(|| decompose(black_box(&p)))
    });

    group.finish();
}

fn bench_grade(c: &mut Criterion) {
    let mut group = c.benchmark_group("grade");

    let p = Problem::new(987_654_321, 123_456_789);
    let d = decompose(&p);
    let mut grid = GridSchema::for_decomposition(&d);
    for (shift, partial) in d.partials().iter().enumerate() {
        let text = partial.canonical_text(d.width());
        let editable = text[..text.len() - shift].trim_start_matches('0').to_string();
        grid.row_mut(shift).unwrap().enter(&editable).unwrap();
    }
    grid.final_row_mut().enter(&d.expected_final()).unwrap();

    group.bench_function("filled 9x9 grid", |b| {
        b.iter(|| grade_grid(black_box(&d), black_box(&grid)))
    });

    group.finish();
}

criterion_group!(benches, bench_decompose, bench_grade);
criterion_main!(benches);
