//! Throughput of the byte stream primitives over in-memory buffers.
//!
//! The readers and writers issue one underlying call per logical operation,
//! so these numbers mostly measure per-call overhead at different chunk sizes.

use bytebound::{BoundedByteReader, ByteSink, ByteSource, ByteWriter, Passthrough, Translator};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

const PAYLOAD_LEN: usize = 1024 * 1024;

fn payload() -> Vec<u8> {
    (0..PAYLOAD_LEN).map(|i| (i % 251) as u8).collect()
}

fn read_chunks(c: &mut Criterion) {
    let data = payload();
    let mut group = c.benchmark_group("read_chunks");
    group.throughput(Throughput::Bytes(PAYLOAD_LEN as u64));

    for chunk in [1usize, 16, 4096, 64 * 1024] {
        group.bench_with_input(BenchmarkId::from_parameter(chunk), &chunk, |b, &chunk| {
            let mut buf = vec![0u8; chunk];
            b.iter(|| {
                let mut reader = BoundedByteReader::bounded(&data[..], PAYLOAD_LEN as u64);
                while reader.remaining() != Some(0) {
                    reader.read_into(&mut buf).unwrap();
                }
                black_box(reader.position())
            })
        });
    }
    group.finish();
}

fn write_chunks(c: &mut Criterion) {
    let data = payload();
    let mut group = c.benchmark_group("write_chunks");
    group.throughput(Throughput::Bytes(PAYLOAD_LEN as u64));

    for chunk in [1usize, 16, 4096, 64 * 1024] {
        // Pre-allocated and reused so the bench measures the writer, not Vec growth.
        let mut out = Vec::with_capacity(PAYLOAD_LEN);
        group.bench_with_input(BenchmarkId::from_parameter(chunk), &chunk, |b, &chunk| {
            b.iter(|| {
                out.clear();
                let mut writer = ByteWriter::new(&mut out);
                for piece in data.chunks(chunk) {
                    writer.write_bytes(piece).unwrap();
                }
                black_box(writer.position())
            })
        });
    }
    group.finish();
}

fn passthrough_round_trip(c: &mut Criterion) {
    let data = payload();
    let translator = Passthrough::new();
    let mut group = c.benchmark_group("passthrough");
    group.throughput(Throughput::Bytes(PAYLOAD_LEN as u64));

    group.bench_function("decode_encode", |b| {
        let mut out = Vec::with_capacity(PAYLOAD_LEN);
        b.iter(|| {
            out.clear();
            let mut reader = BoundedByteReader::bounded(&data[..], PAYLOAD_LEN as u64);
            let value = translator.decode(&mut reader).unwrap();
            let mut writer = ByteWriter::new(&mut out);
            translator.encode(&mut writer, &value).unwrap();
            black_box(writer.position())
        })
    });
    group.finish();
}

criterion_group!(benches, read_chunks, write_chunks, passthrough_round_trip);
criterion_main!(benches);
