use criterion::{black_box, criterion_group, criterion_main, Criterion};
use colorimetry::cie::{CIE_1931_2DEG_OBSERVER, CIE_ILLUMINANT_D65, CIE_ILLUMINANT_F2};
use colorimetry::{luminous_efficacy, spectral_to_xyz, SpectralDistribution, SpectralShape};

pub fn run_benchmarks(c: &mut Criterion) {
    let f2 = CIE_ILLUMINANT_F2.to_distribution();
    let d65 = CIE_ILLUMINANT_D65.to_distribution();
    let cmfs = CIE_1931_2DEG_OBSERVER.to_cmfs();
    let one_nm = SpectralShape::new(360.0, 830.0, 1.0).expect("shape is valid");
    let reflector = SpectralDistribution::from_fn("ramp", &cmfs.shape(), |w| (w - 380.0) / 400.0);

    let mut group = c.benchmark_group("photometry");

    group.bench_function("align-sprague-1nm", |b| {
        b.iter(|| black_box(&f2).align(&one_nm))
    });

    group.bench_function("luminous-efficacy", |b| {
        b.iter(|| luminous_efficacy(black_box(&f2), None))
    });

    group.bench_function("spectral-to-xyz", |b| {
        b.iter(|| spectral_to_xyz(black_box(&reflector), &cmfs, Some(&d65)))
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
