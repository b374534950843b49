// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use gf2_polynomial::{
    extended_euclid, interpolate_polynomial, Gf2Field, Polynomial, ReedSolomonDecoder, SampleSet,
};
use gf2_test_helpers::{corrupt, create_rng_from_u64, random_message, Codeword};

const GF256: u64 = 0x11b;
const GF32: u64 = 0x1020609b3;

fn create_test_polynomials(field: &Gf2Field, degree: usize) -> (Polynomial, Polynomial) {
    let mut rng = create_rng_from_u64(degree as u64);
    (
        Polynomial::new(random_message(&mut rng, field, degree)),
        Polynomial::new(random_message(&mut rng, field, degree)),
    )
}

fn benchmark_polynomial_addition(c: &mut Criterion) {
    let mut group = c.benchmark_group("polynomial_addition");
    let field = Gf2Field::new(GF256).unwrap();

    for degree in [10, 50, 100, 500] {
        let (poly1, poly2) = create_test_polynomials(&field, degree);

        group.bench_function(&format!("degree_{}", degree), |b| {
            b.iter(|| black_box(poly1.add(&poly2, &field)))
        });
    }

    group.finish();
}

fn benchmark_polynomial_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("polynomial_multiplication");
    let field = Gf2Field::new(GF256).unwrap();

    for degree in [5, 10, 20, 50] {
        let (poly1, poly2) = create_test_polynomials(&field, degree);

        group.bench_function(&format!("degree_{}", degree), |b| {
            b.iter(|| black_box(poly1.mul(&poly2, &field)))
        });
    }

    group.finish();
}

fn benchmark_multiply_by_linear(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply_by_linear");
    let field = Gf2Field::new(GF256).unwrap();

    for degree in [10, 50, 100, 255] {
        group.bench_function(&format!("degree_{}", degree), |b| {
            b.iter_batched(
                || Polynomial::with_headroom(degree),
                |mut poly| {
                    for x in 0..degree as u64 {
                        poly.multiply_by_linear(x, 1, &field).unwrap();
                    }
                    black_box(poly)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn benchmark_polynomial_division(c: &mut Criterion) {
    let mut group = c.benchmark_group("polynomial_division");
    let field = Gf2Field::new(GF256).unwrap();

    for degree in [10, 20, 50, 100] {
        let (dividend, _) = create_test_polynomials(&field, degree * 2);
        let (divisor, _) = create_test_polynomials(&field, degree);

        group.bench_function(&format!("degree_{}", degree), |b| {
            b.iter(|| black_box(dividend.div_rem(&divisor, &field).unwrap()))
        });
    }

    group.finish();
}

fn benchmark_polynomial_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("polynomial_evaluation");
    let field = Gf2Field::new(GF32).unwrap();

    for degree in [10, 50, 100, 500] {
        let (poly, _) = create_test_polynomials(&field, degree);

        group.bench_function(&format!("degree_{}", degree), |b| {
            b.iter(|| black_box(poly.evaluate(42, &field)))
        });
    }

    group.finish();
}

fn benchmark_interpolation(c: &mut Criterion) {
    let mut group = c.benchmark_group("interpolation");
    let field = Gf2Field::new(GF256).unwrap();

    for n in [8, 16, 32, 64] {
        let mut rng = create_rng_from_u64(n as u64);
        let codeword = Codeword::random(&mut rng, &field, n - 1, n);

        group.bench_function(&format!("points_{}", n), |b| {
            b.iter(|| black_box(interpolate_polynomial(&field, &codeword.xs, &codeword.ys).unwrap()))
        });
    }

    group.finish();
}

fn benchmark_extended_euclid(c: &mut Criterion) {
    let mut group = c.benchmark_group("extended_euclid");
    let field = Gf2Field::new(GF256).unwrap();

    for degree in [8, 16, 32, 64] {
        let (a, _) = create_test_polynomials(&field, degree);
        let (b, _) = create_test_polynomials(&field, degree - 1);

        group.bench_function(&format!("degree_{}", degree), |bench| {
            bench.iter_batched(
                || (a.clone(), b.clone()),
                |(a, b)| black_box(extended_euclid(&field, a, b, degree / 2).unwrap()),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn benchmark_reed_solomon_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("reed_solomon_decode");
    let field = Gf2Field::new(GF256).unwrap();

    for (n, k) in [(15, 6), (31, 14), (63, 30), (255, 222)] {
        let mut rng = create_rng_from_u64(n as u64);
        let codeword = Codeword::random(&mut rng, &field, k, n);
        let decoder = ReedSolomonDecoder::new(field, k);

        let mut ys = codeword.ys.clone();
        corrupt(&mut rng, &field, &mut ys, decoder.correctable_errors(n));
        let points: Vec<_> = codeword.xs.iter().copied().zip(ys).collect();
        let samples = SampleSet::from_points(&field, &points).unwrap();

        group.bench_function(&format!("n_{}_k_{}", n, k), |b| {
            b.iter(|| black_box(decoder.decode(&samples).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_polynomial_addition,
    benchmark_polynomial_multiplication,
    benchmark_multiply_by_linear,
    benchmark_polynomial_division,
    benchmark_polynomial_evaluation,
    benchmark_interpolation,
    benchmark_extended_euclid,
    benchmark_reed_solomon_decode
);
criterion_main!(benches);
