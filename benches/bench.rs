use criterion::{criterion_group, criterion_main};

mod checksum_benchmark {
    use criterion::{black_box, Criterion};
    use pl_validate::{bank_branch, nip, pesel, regon};

    pub fn criterion_benchmark(c: &mut Criterion) {
        let nips = vec!["8333290827", "3928621931", "392-862-19-31", "3928621933"];
        let pesels = vec!["44051401359", "02270803624", "12345678903", "44051401358"];
        let regons = vec!["123456785", "12345678512347", "12345678512348"];
        let bank_branches = vec!["10201026", "11402004", "10501445", "10201027"];

        c.bench_function("nip-checksum", |b| {
            b.iter(|| {
                for number in nips.iter() {
                    black_box(nip(black_box(number)));
                }
            })
        });
        c.bench_function("pesel-checksum-and-decode", |b| {
            b.iter(|| {
                for number in pesels.iter() {
                    black_box(pesel(black_box(number)));
                }
            })
        });
        c.bench_function("regon-checksum", |b| {
            b.iter(|| {
                for number in regons.iter() {
                    black_box(regon(black_box(number)));
                }
            })
        });
        c.bench_function("bank-branch-checksum", |b| {
            b.iter(|| {
                for number in bank_branches.iter() {
                    black_box(bank_branch(black_box(number)));
                }
            })
        });
    }
}

mod format_benchmark {
    use criterion::{black_box, Criterion};
    use pl_validate::{car_reg, postal_code};

    pub fn criterion_benchmark(c: &mut Criterion) {
        let plates = vec!["WA12345", "KRA12AB", "UA1234T", "HPAB123", "123456"];

        c.bench_function("car-registration", |b| {
            b.iter(|| {
                for plate in plates.iter() {
                    black_box(car_reg(black_box(plate)));
                }
            })
        });
        c.bench_function("postal-code", |b| {
            b.iter(|| black_box(postal_code(black_box("00-950"), false)))
        });
    }
}

criterion_group!(
    benches,
    checksum_benchmark::criterion_benchmark,
    format_benchmark::criterion_benchmark
);
criterion_main!(benches);
