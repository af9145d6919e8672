//! Collision Events
//!
//! Output of the collision pass. Events are reported outward only; the
//! gameplay layer decides what a hit means (damage, knockback, effects).

use serde::{Serialize, Deserialize};

use crate::core::hash::{FrameDigest, FrameHasher};
use crate::pool::object_pool::ProjectileHandle;

/// What a projectile hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetRef {
    /// Index into the entity slice passed to `run_frame`
    Entity(usize),
    /// Index into the obstacle slice passed to `run_frame`
    Obstacle {
        /// Slot in the obstacle slice
        slot: usize,
        /// Whether the obstacle takes damage; indestructible ones only absorb
        destructible: bool,
    },
    /// The player, from the hostile pass
    Player,
}

impl TargetRef {
    fn tag(self) -> u8 {
        match self {
            TargetRef::Entity(_) => 0,
            TargetRef::Obstacle { .. } => 1,
            TargetRef::Player => 2,
        }
    }

    /// True if the gameplay layer should apply damage to the target.
    pub fn takes_damage(self) -> bool {
        match self {
            TargetRef::Entity(_) | TargetRef::Player => true,
            TargetRef::Obstacle { destructible, .. } => destructible,
        }
    }
}

/// A single projectile hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionEvent {
    /// The projectile that hit (already released back to the pool)
    pub projectile: ProjectileHandle,
    /// What it hit
    pub target: TargetRef,
    /// Damage carried by the projectile
    pub damage: u32,
}

impl CollisionEvent {
    /// Feed this event into a digest.
    pub fn hash_into(&self, hasher: &mut FrameHasher) {
        hasher.update_u32(self.projectile.index() as u32);
        hasher.update_u8(self.target.tag());
        match self.target {
            TargetRef::Entity(slot) => hasher.update_u32(slot as u32),
            TargetRef::Obstacle { slot, destructible } => {
                hasher.update_u32(slot as u32);
                hasher.update_bool(destructible);
            }
            TargetRef::Player => {}
        }
        hasher.update_u32(self.damage);
    }
}

/// Digest of an ordered event stream.
pub fn digest_events<'a>(events: impl IntoIterator<Item = &'a CollisionEvent>) -> FrameDigest {
    let mut hasher = FrameHasher::for_collision_events();
    for event in events {
        event.hash_into(&mut hasher);
    }
    hasher.finalize()
}

/// Counters from the most recent pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameStats {
    /// Live entities inserted into the entity index
    pub entities_indexed: usize,
    /// Obstacles inserted into the obstacle index
    pub obstacles_indexed: usize,
    /// Active projectiles run through the broad phase
    pub projectiles_tested: usize,
    /// Candidates returned by the index, summed over projectiles
    pub candidates_examined: usize,
    /// Events emitted
    pub hits: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::object_pool::ProjectilePool;
    use crate::pool::projectile::SpawnParams;

    fn handles(n: usize) -> Vec<ProjectileHandle> {
        let mut pool = ProjectilePool::new();
        (0..n).map(|_| pool.acquire(SpawnParams::default())).collect()
    }

    #[test]
    fn test_takes_damage() {
        assert!(TargetRef::Entity(3).takes_damage());
        assert!(TargetRef::Player.takes_damage());
        assert!(TargetRef::Obstacle { slot: 0, destructible: true }.takes_damage());
        assert!(!TargetRef::Obstacle { slot: 0, destructible: false }.takes_damage());
    }

    #[test]
    fn test_digest_is_order_sensitive() {
        let h = handles(2);
        let a = CollisionEvent { projectile: h[0], target: TargetRef::Entity(1), damage: 25 };
        let b = CollisionEvent { projectile: h[1], target: TargetRef::Player, damage: 10 };

        assert_eq!(digest_events(&[a, b]), digest_events(&[a, b]));
        assert_ne!(digest_events(&[a, b]), digest_events(&[b, a]));
        assert_ne!(digest_events(&[a]), digest_events(Vec::<CollisionEvent>::new().iter()));
    }

    #[test]
    fn test_digest_distinguishes_targets() {
        let h = handles(1);
        let entity = CollisionEvent { projectile: h[0], target: TargetRef::Entity(0), damage: 25 };
        let obstacle = CollisionEvent {
            projectile: h[0],
            target: TargetRef::Obstacle { slot: 0, destructible: false },
            damage: 25,
        };
        assert_ne!(digest_events(&[entity]), digest_events(&[obstacle]));
    }

    #[test]
    fn test_event_json_shape() {
        let h = handles(1);
        let event = CollisionEvent {
            projectile: h[0],
            target: TargetRef::Obstacle { slot: 2, destructible: true },
            damage: 25,
        };
        let json = serde_json::to_value(event).unwrap();
        assert_eq!(json["target"]["obstacle"]["slot"], 2);
        assert_eq!(json["target"]["obstacle"]["destructible"], true);
        assert_eq!(json["damage"], 25);
    }
}
