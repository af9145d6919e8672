// Full collision frame with a crowded arena.
//
// Run with: cargo bench --bench frame_budget
//
// One frame has to fit comfortably inside a 60 Hz tick (16.6 ms).

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

use brawl_collision::{
    BoundingBox, Collidable, CollisionConfig, CollisionCoordinator, Damageable, Obstacle,
    ProjectilePool, SpawnParams, SpatialIndex,
};

struct Target(BoundingBox);

impl Collidable for Target {
    fn bounds(&self) -> BoundingBox {
        self.0
    }
}

impl Damageable for Target {
    fn is_alive(&self) -> bool {
        true
    }
}

impl Obstacle for Target {
    fn is_destructible(&self) -> bool {
        false
    }
}

fn scatter(rng: &mut StdRng, count: usize, size: i32) -> Vec<Target> {
    (0..count)
        .map(|_| Target(BoundingBox::new(rng.gen_range(0..1280 - size), rng.gen_range(0..720 - size), size, size)))
        .collect()
}

fn fill_pool(rng: &mut StdRng, pool: &mut ProjectilePool, count: usize) {
    for _ in 0..count {
        let x = rng.gen_range(0.0..1280.0);
        let y = rng.gen_range(0.0..720.0);
        pool.acquire(SpawnParams::new(x, y, 1.0, 0.0));
    }
}

fn benchmark_full_frame(c: &mut Criterion) {
    let config = CollisionConfig::default();
    let mut group = c.benchmark_group("collision_frame");

    for &(entities, projectiles) in &[(50usize, 100usize), (200, 300), (500, 800)] {
        let mut rng = StdRng::seed_from_u64(7);
        let targets = scatter(&mut rng, entities, 40);
        let walls = scatter(&mut rng, 40, 64);
        let mut coordinator = CollisionCoordinator::new(&config);

        group.bench_with_input(
            BenchmarkId::new("run_frame", format!("{entities}e_{projectiles}p")),
            &(entities, projectiles),
            |b, _| {
                b.iter_batched(
                    || {
                        let mut rng = StdRng::seed_from_u64(11);
                        let mut pool = ProjectilePool::with_capacity(config.initial_pool_size);
                        fill_pool(&mut rng, &mut pool, projectiles);
                        pool
                    },
                    |mut pool| {
                        let hits = coordinator.run_frame(black_box(&targets), &mut pool, &walls).len();
                        black_box(hits)
                    },
                    criterion::BatchSize::SmallInput,
                )
            },
        );
    }

    group.finish();
}

fn benchmark_index_rebuild(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    let boxes: Vec<BoundingBox> = scatter(&mut rng, 500, 40).into_iter().map(|t| t.0).collect();
    let mut index = SpatialIndex::new(BoundingBox::new(0, 0, 1280, 720), 15, 6);

    c.bench_function("index_rebuild_500", |b| {
        b.iter(|| {
            index.clear();
            for bounds in &boxes {
                index.insert(*bounds);
            }
            black_box(index.depth())
        })
    });
}

criterion_group!(benches, benchmark_full_frame, benchmark_index_rebuild);
criterion_main!(benches);
