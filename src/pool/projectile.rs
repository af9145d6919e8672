//! Projectiles
//!
//! The pooled object type. A projectile is never freed during play: when it
//! hits something, expires, or leaves the field it is deactivated and parked
//! in the pool until the next shot reuses it.

use serde::{Serialize, Deserialize};

use crate::core::fixed::{Fixed, DEFAULT_PROJECTILE_SPEED, PROJECTILE_TTL};
use crate::core::rect::{BoundingBox, Collidable};
use crate::core::vec2::FixedVec2;
use crate::pool::object_pool::Poolable;

/// Side length of a projectile's square collision box, in pixels.
pub const PROJECTILE_SIZE: i32 = 32;

/// Damage dealt by a default shot.
pub const DEFAULT_DAMAGE: u32 = 25;

/// Who fired a projectile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Owner {
    /// Fired by the player; tested against enemies and obstacles
    #[default]
    Player,
    /// Fired by an enemy; tested against the player
    Enemy,
}

/// Visual/behavioral family of a shot. Opaque to the collision core; carried
/// through so the gameplay layer can pick effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum ProjectileKind {
    /// Plain shot
    #[default]
    Normal = 0,
    /// Spread pellet
    Shotgun = 1,
    /// Shelly's buckshot
    Shelly = 2,
    /// Nita's shockwave
    Nita = 3,
    /// Colt's revolver round
    Colt = 4,
    /// Bull's double-barrel slug
    Bull = 5,
    /// Arrow
    Arco = 6,
    /// Sound wave
    Ondas = 7,
}

/// Everything needed to (re)initialize a projectile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnParams {
    /// Center position in pixels
    pub position: FixedVec2,
    /// Direction of travel (expected unit length; not normalized here)
    pub direction: FixedVec2,
    /// Damage applied by the gameplay layer on hit
    pub damage: u32,
    /// Speed in pixels per second
    pub speed: Fixed,
    /// Who fired it
    pub owner: Owner,
    /// Shot family
    pub kind: ProjectileKind,
    /// Lifetime in seconds
    pub ttl: Fixed,
}

impl Default for SpawnParams {
    fn default() -> Self {
        Self {
            position: FixedVec2::ZERO,
            direction: FixedVec2::ZERO,
            damage: DEFAULT_DAMAGE,
            speed: DEFAULT_PROJECTILE_SPEED,
            owner: Owner::Player,
            kind: ProjectileKind::Normal,
            ttl: PROJECTILE_TTL,
        }
    }
}

impl SpawnParams {
    /// A default player shot at `(x, y)` heading along `(dx, dy)`.
    pub fn new(x: f64, y: f64, dx: f64, dy: f64) -> Self {
        Self {
            position: FixedVec2::from_floats(x, y),
            direction: FixedVec2::from_floats(dx, dy),
            ..Self::default()
        }
    }

    /// Set damage.
    pub fn with_damage(mut self, damage: u32) -> Self {
        self.damage = damage;
        self
    }

    /// Set speed (pixels per second, fixed-point).
    pub fn with_speed(mut self, speed: Fixed) -> Self {
        self.speed = speed;
        self
    }

    /// Mark as an enemy shot.
    pub fn from_enemy(mut self) -> Self {
        self.owner = Owner::Enemy;
        self
    }

    /// Set the shot family.
    pub fn with_kind(mut self, kind: ProjectileKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the lifetime (seconds, fixed-point).
    pub fn with_ttl(mut self, ttl: Fixed) -> Self {
        self.ttl = ttl;
        self
    }
}

/// A pooled projectile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projectile {
    /// Center position in pixels
    pub position: FixedVec2,
    /// Velocity in pixels per second
    pub velocity: FixedVec2,
    /// Who fired it
    pub owner: Owner,
    /// Damage on hit
    pub damage: u32,
    /// Shot family
    pub kind: ProjectileKind,
    /// Remaining lifetime in seconds
    pub ttl: Fixed,
    /// False once the shot has hit, expired or been returned
    pub active: bool,
}

impl Projectile {
    /// Build a live projectile.
    pub fn new(params: &SpawnParams) -> Self {
        Self {
            position: params.position,
            velocity: params.direction.scale(params.speed),
            owner: params.owner,
            damage: params.damage,
            kind: params.kind,
            ttl: params.ttl,
            active: true,
        }
    }

    /// True for a live player-owned shot.
    #[inline]
    pub fn is_player_shot(&self) -> bool {
        self.active && self.owner == Owner::Player
    }

    /// True for a live enemy-owned shot.
    #[inline]
    pub fn is_enemy_shot(&self) -> bool {
        self.active && self.owner == Owner::Enemy
    }

    /// Move by `velocity * dt`. Inactive projectiles do not move.
    pub fn integrate(&mut self, dt: Fixed) {
        if !self.active {
            return;
        }
        self.position = self.position + self.velocity.scale(dt);
    }

    /// Spend `dt` seconds of lifetime; deactivates when it runs out.
    pub fn age(&mut self, dt: Fixed) {
        if !self.active {
            return;
        }
        self.ttl = self.ttl.saturating_sub(dt);
        if self.ttl <= 0 {
            self.active = false;
        }
    }

    /// True if the collision box no longer touches `field` at all.
    #[inline]
    pub fn is_outside(&self, field: &BoundingBox) -> bool {
        !field.intersects(&self.bounds())
    }
}

impl Collidable for Projectile {
    #[inline]
    fn bounds(&self) -> BoundingBox {
        BoundingBox::centered_on(self.position, PROJECTILE_SIZE, PROJECTILE_SIZE)
    }
}

impl Poolable for Projectile {
    type Spawn = SpawnParams;

    fn dormant() -> Self {
        let mut projectile = Self::new(&SpawnParams::default());
        projectile.active = false;
        projectile
    }

    fn spawn(params: &SpawnParams) -> Self {
        Self::new(params)
    }

    fn reset(&mut self, params: &SpawnParams) {
        *self = Self::new(params);
    }

    fn deactivate(&mut self) {
        self.active = false;
    }
}
