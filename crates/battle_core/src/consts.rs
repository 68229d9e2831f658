//! Fixed rules of the battle. None of these are configurable at runtime.

use bevy::math::Vec2;

pub const SCREEN_WIDTH: f32 = 1280.0;
pub const SCREEN_HEIGHT: f32 = 720.0;

/// Target simulation rate; movement constants below are per tick at this rate.
pub const FIXED_DELTA: f64 = 1.0 / 60.0;

pub const ENEMY_SPEED: f32 = 2.0;
pub const PLAYER_STEP: f32 = 5.0;

/// Drawn radius of both combatants, also used as their clamp margin.
pub const CHARACTER_RADIUS: f32 = 40.0;
/// The monster lands blows when closer than this.
pub const CONTACT_RADIUS: f32 = 40.0;
pub const ATTACK_RANGE: f32 = 60.0;
pub const ATTACK_COOLDOWN: f32 = 1.0;
pub const HIT_EFFECT_DURATION: f32 = 0.2;
/// Slack for timers built from summed `f32` steps; 60 steps of 1/60 add up
/// to just under one second.
pub const TIMER_EPSILON: f32 = 1e-4;

pub const PLAYER_START: Vec2 = Vec2::new(200.0, 300.0);
pub const MONSTER_START: Vec2 = Vec2::new(600.0, 300.0);
pub const PLAYER_MAX_HEALTH: i32 = 100;
pub const MONSTER_MAX_HEALTH: i32 = 80;

pub const PLAYER_DAMAGE: std::ops::RangeInclusive<i32> = 5..=15;
pub const MONSTER_DAMAGE: std::ops::RangeInclusive<i32> = 10..=25;

pub const HEAL_AMOUNT: i32 = 20;
pub const PICKUP_RADIUS: f32 = 30.0;
pub const HEALTH_PACK_RADIUS: f32 = 20.0;
pub const HEALTH_PACK_RESPAWN: f32 = 10.0;
/// Packs spawn at least this far from every screen edge.
pub const SPAWN_INSET: f32 = 100.0;

pub const HEALTH_BAR_WIDTH: f32 = 200.0;
pub const HEALTH_BAR_HEIGHT: f32 = 20.0;
