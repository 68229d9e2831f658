//! Headless battles: an autopilot plays seeded matches at the fixed timestep
//! and the result is summarized as a serializable report.

pub mod autopilot;
pub mod report;

use battle_core::consts::FIXED_DELTA;
use battle_core::{update, GameState, Phase};
use tracing::{debug, info};

pub use autopilot::Autopilot;
pub use report::{EventTally, MatchOutcome, MatchReport};

pub fn ticks_for(seconds: f64) -> u64 {
    (seconds / FIXED_DELTA).round().max(0.0) as u64
}

/// Plays one match from the title screen until it ends or `max_ticks` of
/// battle time have elapsed.
pub fn run_match(seed: u64, max_ticks: u64) -> MatchReport {
    let mut state = GameState::new(seed);
    let mut pilot = Autopilot::default();
    let mut tally = EventTally::default();
    let dt = FIXED_DELTA as f32;

    let opening = pilot.next_input(&state);
    update(&mut state, &opening, dt);

    let mut ticks = 0;
    while ticks < max_ticks && state.phase == Phase::Playing {
        let input = pilot.next_input(&state);
        for event in update(&mut state, &input, dt) {
            debug!(target: "battle_sim", ?event, tick = ticks, "battle event");
            tally.record(&event);
        }
        ticks += 1;
    }

    let outcome = match state.phase {
        Phase::GameOver { outcome } => Some(outcome),
        _ => None,
    };
    let mut report = MatchReport::new(seed, ticks, ticks as f64 * FIXED_DELTA, outcome.into());
    report.player_health = state.player.health.current();
    report.monster_health = state.monster.health.current();
    report.tally = tally;
    info!(target: "battle_sim", seed, ticks, outcome = ?report.outcome, "match finished");
    report
}
