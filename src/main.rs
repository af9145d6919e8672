//! Brawl Collision Demo
//!
//! Runs a scripted arena through the collision core: the player sprays shots
//! at a ring of enemies behind crates while enemies fire back. Damage is
//! applied here, the way the gameplay layer would. The run is then replayed
//! from the same seed and the event digests are compared.
//!
//! Usage: `brawl-collision [config.json]`

use anyhow::{Context, Result};
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use brawl_collision::{
    BoundingBox, Collidable, CollisionConfig, CollisionCoordinator, Damageable,
    DeterministicRng, FixedVec2, Obstacle, ProjectileKind, ProjectilePool, SpawnParams,
    TargetRef, TICK_RATE, VERSION,
    core::fixed::{to_fixed, TICK_DURATION},
    core::hash::{FrameDigest, FrameHasher},
};

const DEMO_SEED: u64 = 0xB8A7_1E55;
const DEMO_TICKS: u32 = 10 * TICK_RATE;
const ENEMY_COUNT: usize = 24;
const CRATE_COUNT: usize = 12;
const PLAYER_FIRE_INTERVAL: u32 = 6;
const ENEMY_FIRE_INTERVAL: u32 = 45;

const SHOT_KINDS: [ProjectileKind; 4] = [
    ProjectileKind::Normal,
    ProjectileKind::Shelly,
    ProjectileKind::Colt,
    ProjectileKind::Arco,
];

struct Brawler {
    center: (i32, i32),
    size: i32,
    health: i32,
}

impl Collidable for Brawler {
    fn bounds(&self) -> BoundingBox {
        BoundingBox::centered(self.center.0, self.center.1, self.size, self.size)
    }
}

impl Damageable for Brawler {
    fn is_alive(&self) -> bool {
        self.health > 0
    }
}

struct Crate {
    bounds: BoundingBox,
    destructible: bool,
    health: i32,
}

impl Collidable for Crate {
    fn bounds(&self) -> BoundingBox {
        if self.health > 0 {
            self.bounds
        } else {
            BoundingBox::default()
        }
    }
}

impl Obstacle for Crate {
    fn is_destructible(&self) -> bool {
        self.destructible
    }
}

/// Outcome of one scripted run.
struct ArenaReport {
    digest: FrameDigest,
    hits: usize,
    kills: usize,
    crates_destroyed: usize,
    player_health: i32,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    info!("Brawl Collision Core v{}", VERSION);

    let config = match std::env::args().nth(1) {
        Some(path) => CollisionConfig::load(&path)
            .with_context(|| format!("loading config from {path}"))?,
        None => CollisionConfig::default(),
    };
    info!(
        "Field {}x{} (+{} margin), {} objects/node, {} levels, {} pooled projectiles",
        config.field_width,
        config.field_height,
        config.offscreen_margin,
        config.max_objects_per_node,
        config.max_levels,
        config.initial_pool_size,
    );

    info!("=== Running Demo Arena ===");
    let report = run_arena(&config, DEMO_SEED, DEMO_TICKS, true)?;
    info!(
        "Hits: {} | Enemies down: {}/{} | Crates destroyed: {} | Player health: {}",
        report.hits, report.kills, ENEMY_COUNT, report.crates_destroyed, report.player_health
    );
    info!("Event Digest: {}", hex::encode(report.digest));

    info!("=== Verifying Determinism ===");
    let replay = run_arena(&config, DEMO_SEED, DEMO_TICKS, false)?;
    info!("Replay Digest: {}", hex::encode(replay.digest));

    if report.digest == replay.digest {
        info!("DETERMINISM VERIFIED: Digests match!");
    } else {
        warn!("DETERMINISM FAILURE: Digests differ!");
    }

    Ok(())
}

fn build_arena(config: &CollisionConfig, rng: &mut DeterministicRng) -> (Brawler, Vec<Brawler>, Vec<Crate>) {
    let field = config.field();
    let (cx, cy) = field.center();
    let player = Brawler { center: (cx, cy), size: 48, health: 400 };

    let enemies = (0..ENEMY_COUNT)
        .map(|_| {
            let spot = rng.random_box_in(&field, 40, 40);
            Brawler { center: spot.center(), size: 40, health: 100 }
        })
        .collect();

    let crates = (0..CRATE_COUNT)
        .map(|i| Crate {
            bounds: rng.random_box_in(&field, 64, 64),
            destructible: i % 3 != 0,
            health: 150,
        })
        .collect();

    (player, enemies, crates)
}

fn run_arena(config: &CollisionConfig, seed: u64, ticks: u32, verbose: bool) -> Result<ArenaReport> {
    let mut rng = DeterministicRng::new(seed);
    let (mut player, mut enemies, mut crates) = build_arena(config, &mut rng);

    let mut coordinator = CollisionCoordinator::new(config);
    let mut pool = ProjectilePool::with_capacity(config.initial_pool_size);
    let sweep_field = config.extended_field();
    let ttl = config.projectile_ttl();
    let shot_speed = to_fixed(500.0);

    let mut digest = FrameHasher::for_collision_events();
    let mut report = ArenaReport {
        digest: [0; 32],
        hits: 0,
        kills: 0,
        crates_destroyed: 0,
        player_health: 0,
    };

    for tick in 0..ticks {
        if tick % PLAYER_FIRE_INTERVAL == 0 && player.is_alive() {
            let kind = SHOT_KINDS[(tick / PLAYER_FIRE_INTERVAL) as usize % SHOT_KINDS.len()];
            pool.acquire(SpawnParams {
                position: FixedVec2::from_ints(player.center.0, player.center.1),
                direction: rng.random_direction(),
                speed: shot_speed,
                kind,
                ttl,
                ..SpawnParams::default()
            });
        }

        if tick % ENEMY_FIRE_INTERVAL == 0 {
            for enemy in enemies.iter().filter(|e| e.is_alive()) {
                pool.acquire(SpawnParams {
                    position: FixedVec2::from_ints(enemy.center.0, enemy.center.1),
                    direction: rng.random_direction(),
                    damage: 10,
                    ttl,
                    ..SpawnParams::default()
                }.from_enemy());
            }
        }

        pool.advance(TICK_DURATION);
        let swept = pool.sweep_expired(TICK_DURATION, &sweep_field);
        if swept > 0 {
            debug!(tick, swept, "projectiles returned to pool");
        }

        coordinator.run_frame(&enemies, &mut pool, &crates);
        coordinator.run_hostile_pass(&player, &mut pool);

        for event in coordinator.events() {
            event.hash_into(&mut digest);
            report.hits += 1;

            match event.target {
                TargetRef::Entity(slot) => {
                    let enemy = &mut enemies[slot];
                    let was_alive = enemy.is_alive();
                    enemy.health -= event.damage as i32;
                    if was_alive && !enemy.is_alive() {
                        report.kills += 1;
                        if verbose {
                            info!("Tick {}: enemy {} down", tick, slot);
                        }
                    }
                }
                TargetRef::Obstacle { slot, destructible: true } => {
                    let crate_ = &mut crates[slot];
                    let was_standing = crate_.health > 0;
                    crate_.health -= event.damage as i32;
                    if was_standing && crate_.health <= 0 {
                        report.crates_destroyed += 1;
                        if verbose {
                            info!("Tick {}: crate {} destroyed", tick, slot);
                        }
                    }
                }
                TargetRef::Obstacle { .. } => {}
                TargetRef::Player => player.health -= event.damage as i32,
            }
        }

        if verbose && tick % TICK_RATE == 0 {
            let stats = coordinator.last_frame();
            info!(
                "Tick {}: {} tested, {} candidates, {} | depth {}",
                tick,
                stats.projectiles_tested,
                stats.candidates_examined,
                pool.stats(),
                coordinator.index().depth(),
            );
        }
    }

    if verbose {
        if let Some(overlay) = coordinator.overlay(&pool) {
            let json = serde_json::to_string_pretty(&overlay).context("serializing debug overlay")?;
            info!("Debug overlay:\n{}", json);
        }
    }

    report.digest = digest.finalize();
    report.player_health = player.health;
    Ok(report)
}
