use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sniff_core::{Fallback, TypeDb};

fn bench_by_path(c: &mut Criterion) {
    let db = TypeDb::with_defaults();
    c.bench_function("by_path_html", |b| {
        b.iter(|| db.by_path(black_box("/var/www/site/index.html"), Fallback::None))
    });
    c.bench_function("by_path_miss", |b| {
        b.iter(|| db.by_path(black_box("/var/www/site/index.nope"), Fallback::None))
    });
}

fn bench_by_magic(c: &mut Criterion) {
    let db = TypeDb::with_defaults();

    // High-priority hit: PNG sits near the head of the rule list.
    let mut png = b"\x89PNG\r\n\x1a\n".to_vec();
    png.resize(4096, 0);
    c.bench_function("by_magic_png", |b| {
        b.iter(|| db.by_magic(black_box(&png), Fallback::None))
    });

    // Late hit behind the OOXML range probes.
    let mut zip = b"PK\x03\x04\x14\x00".to_vec();
    zip.resize(4096, 0);
    c.bench_function("by_magic_zip", |b| {
        b.iter(|| db.by_magic(black_box(&zip), Fallback::None))
    });

    // Worst case: every rule is evaluated and none matches.
    let miss = vec![b'q'; 4096];
    c.bench_function("by_magic_miss", |b| {
        b.iter(|| db.by_magic(black_box(&miss), Fallback::None))
    });

    c.bench_function("all_by_magic_zip", |b| {
        b.iter(|| db.all_by_magic(black_box(&zip), Fallback::None))
    });
}

fn bench_lineage(c: &mut Criterion) {
    let db = TypeDb::with_defaults();
    c.bench_function("lineage_diamond", |b| {
        b.iter(|| db.lineage(black_box("application/xhtml+xml")))
    });
}

criterion_group!(benches, bench_by_path, bench_by_magic, bench_lineage);
criterion_main!(benches);
