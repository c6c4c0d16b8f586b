use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use schemapad::domain::{Field, FieldTree, FieldUpdate};
use schemapad::project;

fn build_fields(depth: usize, width: usize) -> Vec<Field> {
    (0..width)
        .map(|i| {
            if depth == 0 {
                if i % 2 == 0 {
                    Field::string(format!("field_{}", i))
                } else {
                    Field::number(format!("field_{}", i))
                }
            } else {
                Field::nested(format!("group_{}", i), build_fields(depth - 1, width))
            }
        })
        .collect()
}

fn benchmark_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection");
    for depth in [1usize, 3, 5] {
        let fields = build_fields(depth, 4);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &fields, |b, fields| {
            b.iter(|| project(black_box(fields)))
        });
    }
    group.finish();
}

fn benchmark_update_deep_field(c: &mut Criterion) {
    let tree = FieldTree::from_fields(build_fields(4, 4)).unwrap();
    let update = FieldUpdate::new().name("renamed");

    c.bench_function("update_deep_field", |b| {
        b.iter(|| {
            tree.update_field(black_box(&[3usize, 3, 3, 3, 3][..]), &update)
                .unwrap()
        })
    });
}

criterion_group!(benches, benchmark_projection, benchmark_update_deep_field);
criterion_main!(benches);
