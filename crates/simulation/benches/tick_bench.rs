//! Criterion benchmarks for the simulator ticks.
//!
//! Benchmarks:
//!   - one monitoring feed step on the seed categories
//!   - one team movement step on a large en-route roster
//!   - leading-number parsing of a metric value
//!
//! Run with: cargo bench -p simulation --bench tick_bench

use std::collections::VecDeque;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use simulation::geo::LatLng;
use simulation::monitoring::{leading_number, MonitoringSimulator};
use simulation::teams::{RescueTeam, TeamMovementSimulator, TeamStatus, TeamType};

// ---------------------------------------------------------------------------
// Benchmark: monitoring feed
// ---------------------------------------------------------------------------

fn bench_monitoring_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("monitoring_tick");
    group.sample_size(1000);

    let mut sim = MonitoringSimulator::default();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    group.bench_function("seed_categories", |b| {
        b.iter(|| black_box(sim.tick(&mut rng)));
    });

    group.bench_function("leading_number", |b| {
        b.iter(|| black_box(leading_number(black_box("45mm/hr"))));
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Benchmark: team movement
// ---------------------------------------------------------------------------

fn large_roster(teams: usize, waypoints: usize) -> Vec<RescueTeam> {
    (0..teams)
        .map(|i| {
            let route: VecDeque<LatLng> = (0..waypoints)
                .map(|w| LatLng::new(10.0 + w as f64 * 1e-4, 106.0 + i as f64 * 1e-4))
                .collect();
            RescueTeam {
                status: TeamStatus::EnRoute,
                route,
                ..RescueTeam::new(
                    format!("TEAM-{i:04}"),
                    format!("Team {i}"),
                    TeamType::Rescue,
                    LatLng::new(10.0, 106.0),
                )
            }
        })
        .collect()
}

fn bench_team_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("team_tick");

    let roster = large_roster(1_000, 64);
    group.bench_function("1000_teams", |b| {
        b.iter_batched(
            || TeamMovementSimulator::new(roster.clone()),
            |mut sim| black_box(sim.tick()),
            criterion::BatchSize::LargeInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_monitoring_tick, bench_team_tick);
criterion_main!(benches);
