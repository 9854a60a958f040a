use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use service::calculation::repository::mock::MockCalculationRepository;
use service::calculation::{CalculationRequest, CalculationService};

fn bench_evaluate(c: &mut Criterion) {
    let req = CalculationRequest::new("divide", 22.0, Some(7.0));
    c.bench_function("calculation_evaluate", |b| {
        b.iter(|| black_box(&req).evaluate())
    });
}

fn bench_create(c: &mut Criterion) {
    let svc = CalculationService::new(Arc::new(MockCalculationRepository::default()));
    let rt = tokio::runtime::Runtime::new().unwrap();
    let mut n = 0.0_f64;

    // every iteration stores new operands, so the duplicate scan grows with the store
    c.bench_function("calculation_create_mock_repo", |b| {
        b.iter(|| {
            n += 1.0;
            rt.block_on(svc.create(CalculationRequest::new("add", n, Some(1.0)))).unwrap()
        });
    });
}

criterion_group!(benches, bench_evaluate, bench_create);
criterion_main!(benches);
