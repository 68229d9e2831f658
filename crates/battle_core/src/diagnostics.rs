use bevy::diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin};
use bevy::prelude::*;

use crate::rules::BattleEvent;

pub struct DiagnosticsPlugin;

impl Plugin for DiagnosticsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            FrameTimeDiagnosticsPlugin,
            LogDiagnosticsPlugin::default(),
        ))
        .add_systems(Update, log_battle_events);
    }
}

fn log_battle_events(mut events: EventReader<BattleEvent>) {
    for event in events.read() {
        match event {
            BattleEvent::Started => info!(target: "battle_core.events", "battle started"),
            BattleEvent::ExitRequested => info!(target: "battle_core.events", "exit requested"),
            BattleEvent::PlayerStruck {
                damage,
                monster_health,
            } => info!(target: "battle_core.events", damage, monster_health, "player hit the monster"),
            BattleEvent::MonsterStruck {
                damage,
                player_health,
            } => info!(target: "battle_core.events", damage, player_health, "monster hit the player"),
            BattleEvent::PackCollected { player_health } => {
                info!(target: "battle_core.events", player_health, "health pack collected")
            }
            BattleEvent::PackSpawned { position } => {
                info!(target: "battle_core.events", x = position.x, y = position.y, "health pack spawned")
            }
            BattleEvent::MatchEnded { outcome } => {
                info!(target: "battle_core.events", result = outcome.message(), "match ended")
            }
            BattleEvent::Restarted => info!(target: "battle_core.events", "battle restarted"),
        }
    }
}
