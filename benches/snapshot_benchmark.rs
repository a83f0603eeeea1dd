use chrono::{Duration, TimeZone};
use chrono_tz::Europe::Madrid;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mastral_snapshot::models::{BlockKind, Reading, Snapshot, StationConfig};
use mastral_snapshot::processors::{FieldReconciler, FreshnessChecker};
use mastral_snapshot::readers::StationDocument;
use mastral_snapshot::utils::STATION_NAMESPACE;
use mastral_snapshot::writers::JsonWriter;

// Station document with every block populated plus a few extra fields
fn create_test_document() -> String {
    let mut xml = String::from(r#"<ns:datos xmlns:ns="https://www.w3schools.com">"#);
    xml.push_str("<ns:fecha>20/07/2025</ns:fecha><ns:hora>18:00</ns:hora>");
    for kind in BlockKind::ALL {
        xml.push_str(&format!("<ns:{}>", kind.tag()));
        for (i, field) in kind.expected_fields().iter().enumerate() {
            xml.push_str(&format!("<ns:{field}>{}.{}</ns:{field}>", i * 3, i % 10));
        }
        if kind.uses_day_suffix() {
            xml.push_str("<ns:temperaturamaximahora>12</ns:temperaturamaximahora>");
            xml.push_str("<ns:rachavientohora>04</ns:rachavientohora>");
        }
        xml.push_str(&format!("</ns:{}>", kind.tag()));
    }
    xml.push_str("</ns:datos>");
    xml
}

fn benchmark_document_extraction(c: &mut Criterion) {
    let xml = create_test_document();

    c.bench_function("parse_and_extract_blocks", |b| {
        b.iter(|| {
            let doc = StationDocument::parse(xml.as_bytes(), STATION_NAMESPACE).unwrap();
            let populated: usize = BlockKind::ALL
                .iter()
                .map(|kind| doc.extract_block(*kind).populated_count())
                .sum();
            black_box(populated)
        })
    });
}

fn benchmark_reconciliation(c: &mut Criterion) {
    let xml = create_test_document();
    let doc = StationDocument::parse(xml.as_bytes(), STATION_NAMESPACE).unwrap();
    let monthly = doc.extract_block(BlockKind::Monthly);
    let reconciler = FieldReconciler::new();

    c.bench_function("reconcile_monthly_block", |b| {
        b.iter(|| {
            let mut block = monthly.clone();
            reconciler.reconcile(BlockKind::Monthly, &mut block);
            black_box(block.len())
        })
    });
}

fn benchmark_freshness_check(c: &mut Criterion) {
    let checker = FreshnessChecker::new(Duration::minutes(10), Madrid);
    let now = Madrid.with_ymd_and_hms(2025, 7, 20, 18, 5, 0).unwrap();
    let declared = [
        ("20/07/2025", "18:00"),
        ("20/07/2025", "17:40"),
        ("26/10/2025", "02:30"),
        ("2025-07-20", "18:00"),
    ];

    c.bench_function("freshness_check", |b| {
        b.iter(|| {
            let fresh = declared
                .iter()
                .filter(|(date, time)| checker.check(date, time, now).is_fresh())
                .count();
            black_box(fresh)
        })
    });
}

fn benchmark_serialization_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot_serialization_by_size");
    let xml = create_test_document();
    let doc = StationDocument::parse(xml.as_bytes(), STATION_NAMESPACE).unwrap();
    let now = Madrid.with_ymd_and_hms(2025, 7, 20, 18, 5, 0).unwrap();
    let writer = JsonWriter::new();

    for &size in &[1, 20, 100] {
        group.bench_with_input(BenchmarkId::new("stations", size), &size, |b, &count| {
            let readings: Vec<Reading> = (0..count)
                .map(|i| {
                    let station = StationConfig::new(&format!("Estación {}", i), "37.9", "-0.7", "http://x");
                    let mut reading = Reading::new(&station, "20/07/2025".to_string(), "18:00".to_string());
                    for kind in BlockKind::ALL {
                        *reading.block_mut(kind) = doc.extract_block(kind);
                    }
                    reading
                })
                .collect();
            let snapshot = Snapshot::assemble("Proyecto Mastral", now, readings);

            b.iter(|| black_box(writer.to_vec(&snapshot).unwrap().len()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_document_extraction,
    benchmark_reconciliation,
    benchmark_freshness_check,
    benchmark_serialization_by_size
);
criterion_main!(benches);
