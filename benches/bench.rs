// Criterion benchmarks for the RooMatch client

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use reqwest::StatusCode;
use roomatch_client::core::{interpret_response, next_match_path, prepare_next_match};
use roomatch_client::{ClientConfig, ServerSelection};
use serde_json::json;

fn create_match_body(roommates: usize) -> Vec<u8> {
    let roommate_matches: Vec<_> = (0..roommates)
        .map(|i| json!({"roommateId": format!("roommate-{}", i), "matchScore": 55 + (i % 40)}))
        .collect();

    json!({
        "id": "match-1",
        "seekerId": "seeker-1",
        "propertyId": "property-1",
        "roommateMatches": roommate_matches,
        "propertyMatchScore": 70
    })
    .to_string()
    .into_bytes()
}

fn bench_path_escaping(c: &mut Criterion) {
    c.bench_function("next_match_path_plain", |b| {
        b.iter(|| next_match_path(black_box("65f1c0a2e4b0a1b2c3d4e5f6")));
    });

    c.bench_function("next_match_path_reserved", |b| {
        b.iter(|| next_match_path(black_box("seeker/with spaces?and#reserved")));
    });
}

fn bench_prepare_request(c: &mut Criterion) {
    let config = ClientConfig::default().with_servers(
        ServerSelection::default()
            .with_servers(["https://eu.roomatch.test", "https://us.roomatch.test"])
            .with_host_index(1),
    );

    c.bench_function("prepare_next_match", |b| {
        b.iter(|| prepare_next_match(black_box(&config), black_box("seeker-1")));
    });
}

fn bench_interpret_response(c: &mut Criterion) {
    let mut group = c.benchmark_group("interpret_response");

    for roommates in [0usize, 5, 50].iter() {
        let body = create_match_body(*roommates);
        group.bench_with_input(BenchmarkId::from_parameter(roommates), &body, |b, body| {
            b.iter(|| interpret_response(StatusCode::OK, black_box(body)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_path_escaping,
    bench_prepare_request,
    bench_interpret_response
);
criterion_main!(benches);
