//! benches/kdf.rs
//! EVP_BytesToKey (MD5) derivation cost
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use saltedcrypt::{derive_key_material, evp_bytes_to_key};
use std::hint::black_box;

fn kdf_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("KDF");
    let secret = "benchmark-secret-32-bytes-long!!";
    let salt = *b"frontbac";

    // fixed 32 + 16 split used by the envelope
    group.bench_function("evp_md5_key_iv", |b| {
        b.iter(|| {
            let material = derive_key_material(black_box(secret), black_box(&salt));
            black_box(material);
        });
    });

    for &total in &[16usize, 48, 256] {
        group.bench_with_input(BenchmarkId::new("evp_md5_bytes", total), &total, |b, &n| {
            b.iter(|| black_box(evp_bytes_to_key(secret.as_bytes(), &salt, n, 0)));
        });
    }

    group.finish();
}

criterion_group!(benches, kdf_benches);
criterion_main!(benches);
