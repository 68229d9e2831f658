//! Per-frame battle rules. Everything here is headless: the caller supplies
//! the input snapshot and the elapsed time, and gets back what happened.

use bevy::math::Vec2;
use bevy::prelude::Event;
use tracing::debug;

use crate::consts::*;
use crate::geometry::{distance, keep_inside_screen, move_towards};
use crate::state::{has_elapsed, BattleRng, Combatant, GameState, HealthPack, Outcome, Phase};

/// Keyboard state for one simulation tick. Directions are held keys; the rest
/// are presses since the previous tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub attack: bool,
    pub confirm: bool,
    pub cancel: bool,
}

impl FrameInput {
    pub fn confirm() -> Self {
        Self {
            confirm: true,
            ..Default::default()
        }
    }

    pub fn attack() -> Self {
        Self {
            attack: true,
            ..Default::default()
        }
    }

    fn step(&self) -> Vec2 {
        let mut step = Vec2::ZERO;
        if self.right {
            step.x += PLAYER_STEP;
        }
        if self.left {
            step.x -= PLAYER_STEP;
        }
        if self.up {
            step.y -= PLAYER_STEP;
        }
        if self.down {
            step.y += PLAYER_STEP;
        }
        step
    }
}

#[derive(Event, Clone, Debug, PartialEq)]
pub enum BattleEvent {
    Started,
    ExitRequested,
    PlayerStruck { damage: i32, monster_health: i32 },
    MonsterStruck { damage: i32, player_health: i32 },
    PackCollected { player_health: i32 },
    PackSpawned { position: Vec2 },
    MatchEnded { outcome: Outcome },
    Restarted,
}

pub fn can_attack(since_attack: f32) -> bool {
    has_elapsed(since_attack, ATTACK_COOLDOWN)
}

pub fn random_damage(rng: &mut BattleRng, attacker: Combatant) -> i32 {
    match attacker {
        Combatant::Monster => rng.gen_range(MONSTER_DAMAGE),
        Combatant::Player => rng.gen_range(PLAYER_DAMAGE),
    }
}

/// A new active pack at a whole-unit position inside the spawn inset.
pub fn generate_health_pack(rng: &mut BattleRng) -> HealthPack {
    let inset = SPAWN_INSET as i32;
    let x = rng.gen_span(inset..SCREEN_WIDTH as i32 - inset);
    let y = rng.gen_span(inset..SCREEN_HEIGHT as i32 - inset);
    HealthPack::new(Vec2::new(x as f32, y as f32))
}

/// Advances the battle by one tick of `dt` seconds. Cancel requests an exit
/// from any phase and nothing else happens on that tick.
pub fn update(state: &mut GameState, input: &FrameInput, dt: f32) -> Vec<BattleEvent> {
    if input.cancel {
        return vec![BattleEvent::ExitRequested];
    }
    let mut events = Vec::new();
    match state.phase {
        Phase::Title => {
            if input.confirm {
                state.phase = Phase::Playing;
                events.push(BattleEvent::Started);
            }
        }
        Phase::Playing => play_tick(state, input, dt, &mut events),
        Phase::GameOver { .. } => {
            if input.confirm {
                state.restart();
                events.push(BattleEvent::Restarted);
            }
        }
    }
    events
}

fn play_tick(state: &mut GameState, input: &FrameInput, dt: f32, events: &mut Vec<BattleEvent>) {
    state.player.tick(dt);
    state.monster.tick(dt);
    state.health_pack.since_spawn += dt;

    state.player.position += input.step();
    keep_inside_screen(&mut state.player.position, CHARACTER_RADIUS);
    let target = state.player.position;
    move_towards(&mut state.monster, target);

    let gap = state.distance_between_combatants();

    if input.attack && gap < ATTACK_RANGE && can_attack(state.player.since_attack) {
        let damage = random_damage(state.rng_mut(), Combatant::Player);
        state.monster.health.damage(damage);
        state.player.since_attack = 0.0;
        state.monster.since_hit = 0.0;
        debug!(target: "battle_core.rules", damage, gap, "player strike landed");
        events.push(BattleEvent::PlayerStruck {
            damage,
            monster_health: state.monster.health.current(),
        });
    }

    if gap < CONTACT_RADIUS && can_attack(state.monster.since_attack) {
        let damage = random_damage(state.rng_mut(), Combatant::Monster);
        state.player.health.damage(damage);
        state.monster.since_attack = 0.0;
        state.player.since_hit = 0.0;
        debug!(target: "battle_core.rules", damage, gap, "monster strike landed");
        events.push(BattleEvent::MonsterStruck {
            damage,
            player_health: state.player.health.current(),
        });
    }

    if state.health_pack.active
        && distance(state.player.position, state.health_pack.position) < PICKUP_RADIUS
    {
        state.player.health.heal(HEAL_AMOUNT);
        state.health_pack.collect();
        events.push(BattleEvent::PackCollected {
            player_health: state.player.health.current(),
        });
    }

    if state.health_pack.ready_to_respawn() {
        state.health_pack = generate_health_pack(state.rng_mut());
        events.push(BattleEvent::PackSpawned {
            position: state.health_pack.position,
        });
    }

    // Player loss is checked first so a double knockout counts as a defeat.
    let outcome = if state.player.health.is_depleted() {
        Some(Outcome::Defeat)
    } else if state.monster.health.is_depleted() {
        Some(Outcome::Victory)
    } else {
        None
    };
    if let Some(outcome) = outcome {
        state.phase = Phase::GameOver { outcome };
        events.push(BattleEvent::MatchEnded { outcome });
    }
}
