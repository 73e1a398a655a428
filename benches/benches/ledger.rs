use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use primer_types::{units::ether, Address, U256};
use primer_vm::Ledger;

fn funded_ledger() -> (Ledger, Address) {
    let mut ledger = Ledger::default();
    let _ = primer_fixtures::register_all(&mut ledger);
    let deployer = Address::dev_account(0);
    let _ = ledger.fund(deployer, ether(1_000_000));
    (ledger, deployer)
}

fn bench_deploy(c: &mut Criterion) {
    let mut group = c.benchmark_group("deploy");
    group.bench_function("functions7", |b| {
        b.iter_batched(
            funded_ledger,
            |(mut ledger, deployer)| black_box(ledger.deploy(deployer, "Functions7", &[], U256::ZERO)),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_calls(c: &mut Criterion) {
    let mut group = c.benchmark_group("call");
    let (mut ledger, deployer) = funded_ledger();
    let Ok(receipt) = ledger.deploy(deployer, "Functions4", &[], U256::ZERO) else {
        return;
    };
    let Some(counter) = receipt.contract_address else {
        return;
    };

    group.bench_function("view_count", |b| {
        b.iter(|| black_box(ledger.view(deployer, counter, "count", &[])))
    });
    group.bench_function("transact_increment7", |b| {
        b.iter(|| black_box(ledger.transact(deployer, counter, "increment7", &[], U256::ZERO)))
    });
    group.finish();
}

fn bench_state_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("state");
    let (mut ledger, deployer) = funded_ledger();
    for artifact in primer_fixtures::artifacts() {
        let _ = ledger.deploy(deployer, artifact.name(), &[], U256::ZERO);
    }
    group.bench_function("state_hash", |b| b.iter(|| black_box(ledger.state_hash())));
    group.finish();
}

criterion_group!(benches, bench_deploy, bench_calls, bench_state_hash);
criterion_main!(benches);
