use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use rehearsal_schedule::parsing::headers::normalize_header;
use rehearsal_schedule::parsing::normalize::{normalize_date, normalize_status, split_attendees};
use rehearsal_schedule::parsing::tsv_parser::parse_events_tsv;

fn bench_normalizers(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalizers");

    group.bench_function("normalize_date", |b| {
        b.iter(|| {
            for raw in ["13/05/2025", "05/13/25", "2025-09-20", "por definir"] {
                black_box(normalize_date(black_box(raw)));
            }
        });
    });

    group.bench_function("normalize_status", |b| {
        b.iter(|| black_box(normalize_status(black_box("Programado, pendiente"))));
    });

    group.bench_function("normalize_header", |b| {
        b.iter(|| black_box(normalize_header(black_box(" Fecha Evento Área "))));
    });

    group.bench_function("split_attendees", |b| {
        b.iter(|| black_box(split_attendees(black_box("Juan P., María L.; Sofía R., Nicolás G."))));
    });

    group.finish();
}

fn sheet(rows: usize) -> String {
    let mut body = String::from("Centro\tFecha\tHora\tResponsable\tAsistentes\tEstado\tJornada\tÁrea\n");
    for i in 0..rows {
        body.push_str(&format!(
            "Centro {}\t{:02}/09/2025\t14:00-16:00\tErika López\tJuan P., María L.\tprogramado\tTarde\tMúsica\n",
            i % 7,
            i % 28 + 1
        ));
    }
    body
}

fn bench_tsv_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("tsv_parsing");

    for rows in [10, 100, 1000] {
        let body = sheet(rows);
        group.bench_with_input(BenchmarkId::new("parse_events_tsv", rows), &body, |b, input| {
            b.iter(|| black_box(parse_events_tsv(black_box(input))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_normalizers, bench_tsv_parsing);
criterion_main!(benches);
