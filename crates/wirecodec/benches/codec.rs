#![allow(missing_docs)]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use wirecodec::{ByteBuffer, CodecOptions, DoubleMode, TextMode, Vector3};

const RECORDS: usize = 1_000;

fn write_records(options: CodecOptions, label: &str) -> ByteBuffer {
    let mut buf = ByteBuffer::with_options(options);
    for i in 0..RECORDS {
        let i = i as f64;
        buf.write_int(i as i64);
        buf.write_double(i * 0.5 + 0.25);
        buf.write_string(label).unwrap();
        buf.write_vector3(Vector3::new(i, -i, i * 2.0));
    }
    buf
}

fn read_records(buf: &mut ByteBuffer) -> usize {
    buf.flip();
    let mut count = 0;
    while let Some(id) = buf.read_int() {
        black_box(id);
        black_box(buf.read_double());
        black_box(buf.read_string().unwrap());
        black_box(buf.read_vector3());
        count += 1;
    }
    count
}

fn bench_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("records");
    let label = "sensor-ünit-42";

    for (name, text_mode) in [("per_char", TextMode::PerChar), ("prefixed", TextMode::Prefixed)] {
        let options = CodecOptions {
            double_mode: DoubleMode::Legacy,
            text_mode,
        };
        let encoded_len = write_records(options, label).len();
        group.throughput(Throughput::Bytes(encoded_len as u64));

        group.bench_with_input(BenchmarkId::new("write", name), &options, |b, &options| {
            b.iter(|| write_records(black_box(options), black_box(label)));
        });

        let mut buf = write_records(options, label);
        group.bench_with_input(BenchmarkId::new("read", name), &options, |b, _| {
            b.iter(|| assert_eq!(read_records(&mut buf), RECORDS));
        });
    }
    group.finish();
}

fn bench_bits(c: &mut Criterion) {
    let mut group = c.benchmark_group("bits");
    for width in [1u8, 5, 13, 32] {
        group.bench_with_input(BenchmarkId::new("write_read", width), &width, |b, &width| {
            b.iter(|| {
                let mut buf = ByteBuffer::with_capacity(4 * RECORDS);
                for i in 0..RECORDS as u32 {
                    buf.write_bits(i, width).unwrap();
                }
                buf.align();
                buf.flip();
                let mut sum = 0u64;
                while let Ok(Some(v)) = buf.read_bits(width) {
                    sum += u64::from(v);
                }
                sum
            });
        });
    }
    group.finish();
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(5));
    }
    c
}

criterion_group! { name = benches; config = criterion(); targets = bench_records, bench_bits }
criterion_main!(benches);
