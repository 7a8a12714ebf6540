//! Conversion benchmarks

use criterion::{criterion_group, criterion_main, Criterion};
use libra_core::decoder::{CsvDecoder, JsonLinesDecoder, TextDecoder, XmlDecoder};
use libra_core::encoder::{CsvEncoder, JsonLinesEncoder, XmlEncoder};
use libra_core::{Book, Decoder, Encoder};
use std::hint::black_box;

fn sample_books(count: u32) -> Vec<Book> {
    (0..count)
        .map(|i| Book::new(format!("Book {}", i), format!("Author {}", i % 37), 100 + i))
        .collect()
}

fn conversion_benchmark(c: &mut Criterion) {
    let books = sample_books(1_000);

    let jsonl = JsonLinesEncoder::new().encode_to_vec(&books).unwrap();
    let xml = XmlEncoder::new().encode_to_vec(&books).unwrap();
    let csv = CsvEncoder::new().encode_to_vec(&books).unwrap();
    let text: String = books
        .iter()
        .map(|b| format!("Title: {}, Author: {}, Pages: {}\n", b.title, b.author, b.pages))
        .collect();

    c.bench_function("encode_jsonl_1000", |b| {
        b.iter(|| JsonLinesEncoder::new().encode_to_vec(black_box(&books)).unwrap())
    });
    c.bench_function("decode_jsonl_1000", |b| {
        b.iter(|| JsonLinesDecoder::new().decode_bytes(black_box(&jsonl)).unwrap())
    });
    c.bench_function("encode_xml_1000", |b| {
        b.iter(|| XmlEncoder::new().encode_to_vec(black_box(&books)).unwrap())
    });
    c.bench_function("decode_xml_1000", |b| {
        b.iter(|| XmlDecoder::new().decode_bytes(black_box(&xml)).unwrap())
    });
    c.bench_function("decode_csv_1000", |b| {
        b.iter(|| CsvDecoder::new().decode_bytes(black_box(&csv)).unwrap())
    });

    let text_decoder = TextDecoder::new();
    c.bench_function("decode_text_1000", |b| {
        b.iter(|| text_decoder.decode_bytes(black_box(text.as_bytes())).unwrap())
    });
}

criterion_group!(benches, conversion_benchmark);
criterion_main!(benches);
