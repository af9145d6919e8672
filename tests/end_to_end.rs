//! End-to-end scenarios across the index, the pool and the coordinator.

use brawl_collision::{
    BoundingBox, Collidable, CollisionCoordinator, CollisionEvent, Damageable, Obstacle,
    ProjectilePool, SpatialIndex, SpawnParams, TargetRef,
    collision::digest_events,
};

struct Dummy(BoundingBox);

impl Collidable for Dummy {
    fn bounds(&self) -> BoundingBox {
        self.0
    }
}

impl Damageable for Dummy {
    fn is_alive(&self) -> bool {
        true
    }
}

impl Obstacle for Dummy {
    fn is_destructible(&self) -> bool {
        true
    }
}

fn clustered_boxes() -> Vec<BoundingBox> {
    [(0, 0), (4, 4), (8, 8), (2, 6), (6, 2)]
        .into_iter()
        .map(|(x, y)| BoundingBox::new(x, y, 20, 20))
        .collect()
}

#[test]
fn test_clustered_entities_all_retrieved() {
    let mut index = SpatialIndex::new(BoundingBox::new(0, 0, 800, 600), 4, 4);
    for bounds in clustered_boxes() {
        index.insert(bounds);
    }

    assert!(index.has_children());
    assert_eq!(index.len(), 5);
    assert_eq!(index.depth(), 4);
    assert_eq!(index.node_bounds().len(), 17);

    let found = index.retrieve(&BoundingBox::new(10, 10, 5, 5));
    assert_eq!(found, clustered_boxes());
}

#[test]
fn test_pool_reuses_without_growing() {
    let mut pool = ProjectilePool::new();
    assert_eq!(pool.stats().pool_size, 0);

    let handles: Vec<_> = (0..3)
        .map(|i| pool.acquire(SpawnParams::new(100.0 * i as f64, 50.0, 1.0, 0.0)))
        .collect();
    let stats = pool.stats();
    assert_eq!((stats.pool_size, stats.active_count, stats.inactive_count), (3, 3, 0));

    for &handle in &handles {
        assert!(pool.release(handle));
    }
    let stats = pool.stats();
    assert_eq!((stats.pool_size, stats.active_count, stats.inactive_count), (3, 0, 3));

    // LIFO: the last one released comes back first
    let reused = pool.acquire(SpawnParams::new(1.0, 1.0, 0.0, 1.0));
    assert_eq!(reused, handles[2]);

    pool.acquire(SpawnParams::default());
    pool.acquire(SpawnParams::default());
    let stats = pool.stats();
    assert_eq!((stats.pool_size, stats.active_count, stats.inactive_count), (3, 3, 0));
    assert_eq!(stats.utilization_percent, 100.0);
}

#[test]
fn test_clustered_hit_is_deterministic() {
    let entities: Vec<Dummy> = clustered_boxes().into_iter().map(Dummy).collect();
    let walls: Vec<Dummy> = Vec::new();

    let run = || -> Vec<CollisionEvent> {
        let mut coordinator = CollisionCoordinator::with_bounds(BoundingBox::new(0, 0, 800, 600), 4, 4);
        let mut pool = ProjectilePool::with_capacity(8);
        pool.acquire(SpawnParams::new(12.0, 12.0, 1.0, 0.0));
        pool.acquire(SpawnParams::new(500.0, 400.0, 1.0, 0.0));
        pool.acquire(SpawnParams::new(20.0, 20.0, 0.0, 1.0));
        coordinator.run_frame(&entities, &mut pool, &walls).to_vec()
    };

    let first = run();
    let second = run();

    let targets: Vec<_> = first.iter().map(|e| e.target).collect();
    assert_eq!(targets, vec![TargetRef::Entity(0), TargetRef::Entity(0)]);
    assert_eq!(first, second);
    assert_eq!(digest_events(&first), digest_events(&second));
}

#[test]
fn test_shots_expire_and_return() {
    use brawl_collision::core::fixed::TICK_DURATION;

    let field = BoundingBox::new(0, 0, 1280, 720).expanded(200);
    let mut pool = ProjectilePool::with_capacity(2);
    let slow = pool.acquire(SpawnParams::new(600.0, 300.0, 0.0, 0.0));
    let fast = pool.acquire(SpawnParams::new(1200.0, 300.0, 1.0, 0.0));

    let mut released = 0;
    for _ in 0..60 {
        pool.advance(TICK_DURATION);
        released += pool.sweep_expired(TICK_DURATION, &field);
    }

    // 400 px/s for one second leaves the extended field
    assert_eq!(released, 1);
    assert!(pool.is_active(slow));
    assert!(!pool.is_active(fast));

    for _ in 0..150 {
        pool.advance(TICK_DURATION);
        released += pool.sweep_expired(TICK_DURATION, &field);
    }
    assert_eq!(released, 2);
    assert_eq!(pool.stats().inactive_count, 2);
}
