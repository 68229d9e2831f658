//! Helpers for deterministic regression tests.

use battle_core::consts::FIXED_DELTA;
use battle_core::rules::random_damage;
use battle_core::state::{BattleRng, Combatant};
use battle_core::{update, FrameInput, GameState, Phase};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use serde_json::json;

pub const DEFAULT_SEED: u64 = 42;

/// Upper bound on idle ticks before a defenceless player must have fallen.
const MAX_IDLE_TICKS: usize = 60 * 600;

/// First player and monster rolls for `seed`.
pub fn combat_roll_trace(seed: u64) -> serde_json::Value {
    let mut rng = BattleRng::new(seed);
    let player = random_damage(&mut rng, Combatant::Player);
    let monster = random_damage(&mut rng, Combatant::Monster);
    json!({ "seed": seed, "player": player, "monster": monster })
}

/// Seeds for property sweeps, themselves derived from `seed`.
pub fn sample_seeds(seed: u64, count: usize) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen()).collect()
}

#[derive(Debug, Serialize)]
pub struct RestartTrace {
    pub phases: Vec<&'static str>,
    pub message: &'static str,
    pub after_restart: Snapshot,
}

#[derive(Debug, Serialize)]
pub struct Snapshot {
    pub player_health: i32,
    pub monster_health: i32,
    pub player_position: [i32; 2],
    pub monster_position: [i32; 2],
    pub pack_active: bool,
}

impl Snapshot {
    fn of(state: &GameState) -> Self {
        let round = |v: battle_core::Vec2| [v.x.round() as i32, v.y.round() as i32];
        Self {
            player_health: state.player.health.current(),
            monster_health: state.monster.health.current(),
            player_position: round(state.player.position),
            monster_position: round(state.monster.position),
            pack_active: state.health_pack.active,
        }
    }
}

/// Starts a match, lets the monster beat an idle player, then restarts.
pub fn restart_trace(seed: u64) -> RestartTrace {
    let dt = FIXED_DELTA as f32;
    let mut state = GameState::new(seed);
    let mut phases = vec![state.phase.name()];

    update(&mut state, &FrameInput::confirm(), dt);
    note_phase(&state, &mut phases);

    for _ in 0..MAX_IDLE_TICKS {
        if state.phase != Phase::Playing {
            break;
        }
        update(&mut state, &FrameInput::default(), dt);
    }
    note_phase(&state, &mut phases);

    let message = match state.phase {
        Phase::GameOver { outcome } => outcome.message(),
        _ => "",
    };

    update(&mut state, &FrameInput::confirm(), dt);
    note_phase(&state, &mut phases);

    RestartTrace {
        phases,
        message,
        after_restart: Snapshot::of(&state),
    }
}

fn note_phase(state: &GameState, phases: &mut Vec<&'static str>) {
    let name = state.phase.name();
    if phases.last() != Some(&name) {
        phases.push(name);
    }
}
