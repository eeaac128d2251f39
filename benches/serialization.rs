use bijson::{parse, parse_str, to_binary, to_text, to_text_pretty, Format};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn sample_document(records: usize) -> String {
    let mut out = String::from("{\"records\":[");
    for index in 0..records {
        if index > 0 {
            out.push(',');
        }
        out.push_str(&format!(
            "{{\"id\":{index},\"name\":\"item-{index}\",\"price\":{}.250000000000000,\"active\":{}}}",
            index * 3,
            index % 2 == 0
        ));
    }
    out.push_str("]}");
    out
}

fn benchmark_parse_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_text");
    for size in [10, 100, 500].iter() {
        let text = sample_document(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| parse_str(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_write_text(c: &mut Criterion) {
    let value = parse_str(&sample_document(100)).unwrap();

    c.bench_function("to_text_compact", |b| b.iter(|| to_text(black_box(&value))));
    c.bench_function("to_text_pretty", |b| {
        b.iter(|| to_text_pretty(black_box(&value)))
    });
}

fn benchmark_binary(c: &mut Criterion) {
    // Binary documents cannot hold nested objects, so the fixture is flat
    let text = "{\"id\":7,\"name\":\"item\",\"scores\":[1,2,3,4,5],\"tags\":[\"a\",\"b\"]}";
    let value = parse_str(text).unwrap();
    let bytes = to_binary(&value).unwrap();

    c.bench_function("to_binary", |b| b.iter(|| to_binary(black_box(&value))));
    c.bench_function("parse_binary", |b| {
        b.iter(|| parse(black_box(&bytes), Format::Binary))
    });
}

fn benchmark_string_escaping(c: &mut Criterion) {
    let mut group = c.benchmark_group("strings");

    let ascii = parse_str("[\"plain ascii content with no escapes at all\"]").unwrap();
    let escaped = parse_str("[\"line\\nbreaks\\tand \\\"quotes\\\" everywhere\"]").unwrap();
    let unicode = parse_str("[\"caf\\u00E9 \\uD83D\\uDE00 na\\u00EFve\"]").unwrap();

    group.bench_function("ascii", |b| b.iter(|| to_text(black_box(&ascii))));
    group.bench_function("escaped", |b| b.iter(|| to_text(black_box(&escaped))));
    group.bench_function("unicode", |b| b.iter(|| to_text(black_box(&unicode))));

    group.finish();
}

fn benchmark_comparison_with_serde_json(c: &mut Criterion) {
    let text = sample_document(100);
    let value = parse_str(&text).unwrap();
    let json_value: serde_json::Value = serde_json::from_str(&text).unwrap();

    let mut group = c.benchmark_group("comparison");

    group.bench_function("bijson_parse", |b| b.iter(|| parse_str(black_box(&text))));
    group.bench_function("serde_json_parse", |b| {
        b.iter(|| serde_json::from_str::<serde_json::Value>(black_box(&text)))
    });

    group.bench_function("bijson_serialize", |b| b.iter(|| to_text(black_box(&value))));
    group.bench_function("serde_json_serialize", |b| {
        b.iter(|| serde_json::to_string(black_box(&json_value)))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_parse_text,
    benchmark_write_text,
    benchmark_binary,
    benchmark_string_escaping,
    benchmark_comparison_with_serde_json
);
criterion_main!(benches);
