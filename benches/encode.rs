use criterion::{Criterion, Throughput};
use imgref::ImgVec;
use rgb::Rgba;
use vellum::bmp::{HEADER_LEN, encode};
use vellum::record::{read_records, write_records};
use vellum::{BmpHeader, Origin};

// === Fixtures ===

const W: usize = 1920;
const H: usize = 1080;

fn test_image() -> ImgVec<Rgba<u8>> {
    let buf: Vec<Rgba<u8>> = (0..W * H)
        .map(|i| {
            Rgba::new(
                (i % 251) as u8,
                (i % 241) as u8,
                (i % 239) as u8,
                255,
            )
        })
        .collect();
    ImgVec::new(buf, W, H)
}

#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
struct Particle {
    position: [f32; 2],
    velocity: [f32; 2],
}

// === Benchmark groups ===

fn bench_bmp_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("bmp_encode_1080p");
    let img = test_image();
    group.throughput(Throughput::Bytes((W * H * 4 + HEADER_LEN) as u64));
    group.bench_function("top_left", |b| {
        b.iter(|| encode(img.as_ref(), Origin::TopLeft).unwrap());
    });
    group.bench_function("bottom_left", |b| {
        b.iter(|| encode(img.as_ref(), Origin::BottomLeft).unwrap());
    });
    group.finish();
}

fn bench_header_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("bmp_header_parse");
    let bytes = encode(test_image().as_ref(), Origin::TopLeft).unwrap();
    group.throughput(Throughput::Bytes(HEADER_LEN as u64));
    group.bench_function("parse", |b| {
        b.iter(|| BmpHeader::parse(&bytes).unwrap());
    });
    group.finish();
}

fn bench_record_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_sequence_64k");
    let records: Vec<Particle> = (0..65_536)
        .map(|i| Particle {
            position: [i as f32, (i / 2) as f32],
            velocity: [0.5, -0.5],
        })
        .collect();
    let payload = 8 + records.len() * size_of::<Particle>();
    group.throughput(Throughput::Bytes(payload as u64));

    group.bench_function("write", |b| {
        let mut out = Vec::with_capacity(payload);
        b.iter(|| {
            out.clear();
            write_records(&mut out, &records).unwrap();
        });
    });

    let mut bytes = Vec::new();
    write_records(&mut bytes, &records).unwrap();
    group.bench_function("read", |b| {
        b.iter(|| {
            let mut source = bytes.as_slice();
            read_records::<Particle, _>(&mut source).unwrap()
        });
    });

    group.finish();
}

// === Custom main so criterion flags still apply ===

fn main() {
    let mut criterion = Criterion::default().configure_from_args();
    bench_bmp_encode(&mut criterion);
    bench_header_parse(&mut criterion);
    bench_record_sequence(&mut criterion);
    criterion.final_summary();
}
