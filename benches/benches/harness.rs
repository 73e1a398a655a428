use criterion::{black_box, criterion_group, criterion_main, Criterion};
use primer_harness::{CallOptions, DeployOptions, Harness, HarnessConfig};

fn bench_harness(c: &mut Criterion) {
    let mut group = c.benchmark_group("harness");

    let mut config = HarnessConfig::default();
    config.accounts.count = 2;
    group.bench_function("new", |b| b.iter(|| black_box(Harness::new(config.clone()))));

    let Ok(harness) = Harness::new(config) else {
        return;
    };
    let Ok(contract) = harness.deploy("Functions7", &[], DeployOptions::default()) else {
        return;
    };
    group.bench_function("read_multi_return", |b| {
        b.iter(|| black_box(contract.read("getName6", &[])))
    });
    group.bench_function("send_and_expect_event", |b| {
        b.iter(|| {
            contract
                .send("setName1", &[], CallOptions::default())
                .map(|receipt| harness.expect_event(&receipt, "NameChanged", &["New name".into()]).is_ok())
        })
    });
    group.finish();
}

criterion_group!(benches, bench_harness);
criterion_main!(benches);
