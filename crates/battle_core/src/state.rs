//! Battle state: the two combatants, the health pack and the seeded RNG that
//! drives damage rolls and pack placement.

use std::ops::{Range, RangeInclusive};

use bevy::math::Vec2;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;

use crate::consts::*;
use crate::scene::Palette;

/// Integer hit points. Damage is subtracted without a floor so the game-over
/// check sees the real value; healing never exceeds `max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Health {
    current: i32,
    max: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    pub fn damage(&mut self, amount: i32) {
        self.current -= amount;
        debug!(target: "battle_core.health", current = self.current, max = self.max, "health updated");
    }

    pub fn heal(&mut self, amount: i32) {
        self.current = (self.current + amount).min(self.max);
        debug!(target: "battle_core.health", current = self.current, max = self.max, "health restored");
    }

    pub fn set(&mut self, value: i32) {
        self.current = value;
    }

    pub fn reset(&mut self) {
        self.current = self.max;
    }

    pub fn current(&self) -> i32 {
        self.current
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Combatant {
    Player,
    Monster,
}

#[derive(Clone, Debug)]
pub struct Character {
    pub position: Vec2,
    pub start_position: Vec2,
    pub health: Health,
    pub color: Palette,
    /// Seconds since this character last attacked.
    pub since_attack: f32,
    /// Seconds since this character was last struck.
    pub since_hit: f32,
}

impl Character {
    pub fn new(start_position: Vec2, max_health: i32, color: Palette) -> Self {
        Self {
            position: start_position,
            start_position,
            health: Health::new(max_health),
            color,
            since_attack: ATTACK_COOLDOWN,
            since_hit: HIT_EFFECT_DURATION,
        }
    }

    pub fn player() -> Self {
        Self::new(PLAYER_START, PLAYER_MAX_HEALTH, Palette::Blue)
    }

    pub fn monster() -> Self {
        Self::new(MONSTER_START, MONSTER_MAX_HEALTH, Palette::Red)
    }

    pub fn tick(&mut self, dt: f32) {
        self.since_attack += dt;
        self.since_hit += dt;
    }

    pub fn is_flashing(&self) -> bool {
        !has_elapsed(self.since_hit, HIT_EFFECT_DURATION)
    }

    /// Restores health, position and attack readiness, and clears any hit
    /// flash left over from the last round.
    pub fn reset(&mut self) {
        self.health.reset();
        self.position = self.start_position;
        self.since_attack = ATTACK_COOLDOWN;
        self.since_hit = HIT_EFFECT_DURATION;
    }
}

/// Whether a timer accumulated from frame deltas has reached `duration`.
/// A boundary that lands exactly on `duration` counts as reached.
pub fn has_elapsed(since: f32, duration: f32) -> bool {
    since + TIMER_EPSILON >= duration
}

#[derive(Clone, Debug, PartialEq)]
pub struct HealthPack {
    pub position: Vec2,
    pub active: bool,
    /// Seconds since the pack was last spawned or collected.
    pub since_spawn: f32,
}

impl HealthPack {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            active: true,
            since_spawn: 0.0,
        }
    }

    pub fn collect(&mut self) {
        self.active = false;
        self.since_spawn = 0.0;
    }

    pub fn ready_to_respawn(&self) -> bool {
        !self.active && has_elapsed(self.since_spawn, HEALTH_PACK_RESPAWN)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Victory,
    Defeat,
}

impl Outcome {
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Victory => "You won!",
            Outcome::Defeat => "You lost!",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Title,
    Playing,
    GameOver { outcome: Outcome },
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Title => "title",
            Phase::Playing => "playing",
            Phase::GameOver { .. } => "game_over",
        }
    }
}

/// Seeded generator owned by the game state so rolls replay exactly.
#[derive(Debug, Clone)]
pub struct BattleRng {
    seed: u64,
    rng: StdRng,
}

impl BattleRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn gen_range(&mut self, range: RangeInclusive<i32>) -> i32 {
        self.rng.gen_range(range)
    }

    pub fn gen_span(&mut self, range: Range<i32>) -> i32 {
        self.rng.gen_range(range)
    }
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: Phase,
    pub player: Character,
    pub monster: Character,
    pub health_pack: HealthPack,
    rng: BattleRng,
}

impl GameState {
    /// Fresh session on the title screen with a pack already placed.
    pub fn new(seed: u64) -> Self {
        let mut rng = BattleRng::new(seed);
        let health_pack = crate::rules::generate_health_pack(&mut rng);
        Self {
            phase: Phase::Title,
            player: Character::player(),
            monster: Character::monster(),
            health_pack,
            rng,
        }
    }

    pub fn rng_mut(&mut self) -> &mut BattleRng {
        &mut self.rng
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn distance_between_combatants(&self) -> f32 {
        crate::geometry::distance(self.player.position, self.monster.position)
    }

    /// Back into play with starting health and positions and a new pack.
    pub fn restart(&mut self) {
        self.player.reset();
        self.monster.reset();
        self.health_pack = crate::rules::generate_health_pack(&mut self.rng);
        self.phase = Phase::Playing;
    }
}
