use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chicory_catalog::{product_catalog, CatalogEntry};
use chicory_core::slugify;

fn bench_find_by_slug(c: &mut Criterion) {
    let catalog = product_catalog().unwrap();
    let mut group = c.benchmark_group("find_by_slug");

    for slug in ["raw-chicory-roots", "roasted-chicory-powder", "missing-product"] {
        group.bench_with_input(BenchmarkId::from_parameter(slug), slug, |b, slug| {
            b.iter(|| catalog.find_by_slug(black_box(slug)).slug().as_str().len())
        });
    }

    group.finish();
}

fn bench_facets(c: &mut Criterion) {
    let catalog = product_catalog().unwrap();

    c.bench_function("list_categories", |b| {
        b.iter(|| black_box(&catalog).list_categories().len())
    });
    c.bench_function("list_featured", |b| {
        b.iter(|| black_box(&catalog).list_featured().len())
    });
}

fn bench_slugify(c: &mut Criterion) {
    c.bench_function("slugify_title", |b| {
        b.iter(|| slugify(black_box("Roasted Chicory Cubes (Dark Roast)")))
    });
}

criterion_group!(benches, bench_find_by_slug, bench_facets, bench_slugify);
criterion_main!(benches);
