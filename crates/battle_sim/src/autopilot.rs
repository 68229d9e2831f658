use battle_core::consts::{ATTACK_RANGE, PLAYER_STEP};
use battle_core::{FrameInput, GameState, Phase, Vec2};

/// Player health at or below which the autopilot goes for an active pack.
pub const HEAL_THRESHOLD: i32 = 60;

/// Scripted player: closes on the monster, swings whenever it is in range and
/// detours for health packs when hurt.
#[derive(Debug, Default)]
pub struct Autopilot {
    swung_last_tick: bool,
}

impl Autopilot {
    pub fn next_input(&mut self, state: &GameState) -> FrameInput {
        if state.phase != Phase::Playing {
            self.swung_last_tick = false;
            return FrameInput::confirm();
        }

        let player = &state.player;
        let gap = state.distance_between_combatants();
        let pack = &state.health_pack;
        let wants_pack = pack.active && player.health.current() <= HEAL_THRESHOLD;

        let mut input = if wants_pack {
            steer(player.position, pack.position)
        } else if gap > ATTACK_RANGE * 0.75 {
            steer(player.position, state.monster.position)
        } else {
            FrameInput::default()
        };

        // A press needs a release in between, so swing every other tick.
        input.attack = gap < ATTACK_RANGE && !self.swung_last_tick;
        self.swung_last_tick = input.attack;
        input
    }
}

fn steer(from: Vec2, to: Vec2) -> FrameInput {
    let delta = to - from;
    FrameInput {
        left: delta.x < -PLAYER_STEP,
        right: delta.x > PLAYER_STEP,
        up: delta.y < -PLAYER_STEP,
        down: delta.y > PLAYER_STEP,
        ..Default::default()
    }
}
