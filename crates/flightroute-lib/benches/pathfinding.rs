use criterion::{criterion_group, criterion_main, Criterion};
use flightroute_lib::{plan_route, AirportNetwork, NetworkSpec, RouteRequest};
use once_cell::sync::Lazy;
use std::hint::black_box;

static NETWORK: Lazy<AirportNetwork> =
    Lazy::new(|| AirportNetwork::from_spec(&NetworkSpec::sample()).expect("sample builds"));
static DEL_MAA_REQUEST: Lazy<RouteRequest> = Lazy::new(|| RouteRequest::new("DEL", "MAA"));
static CCU_BLR_REQUEST: Lazy<RouteRequest> = Lazy::new(|| RouteRequest::new("CCU", "BLR"));

fn benchmark_pathfinding(c: &mut Criterion) {
    let network = &*NETWORK;

    c.bench_function("best_first_del_maa", |b| {
        let request = &*DEL_MAA_REQUEST;
        b.iter(|| {
            let plan = plan_route(network, request).expect("route exists");
            black_box(plan.total_cost)
        });
    });

    c.bench_function("best_first_ccu_blr", |b| {
        let request = &*CCU_BLR_REQUEST;
        b.iter(|| {
            let plan = plan_route(network, request).expect("route exists");
            black_box(plan.hop_count())
        });
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
