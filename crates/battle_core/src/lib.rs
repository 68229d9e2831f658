//! Monster battle: a player circle against an AI-driven monster circle, with
//! health bars, a cooldown-gated melee attack and a respawning health pack.
//!
//! The rules in [`rules`] run headless over [`state::GameState`]; the plugins
//! wire them into a bevy app with a fixed timestep.

pub mod audio;
pub mod consts;
pub mod diagnostics;
pub mod gameplay;
pub mod geometry;
pub mod rules;
pub mod scene;
pub mod settings;
pub mod state;
pub mod ui;

use bevy::prelude::*;

pub use bevy::math::Vec2;
pub use rules::{update, BattleEvent, FrameInput};
pub use state::{GameState, Outcome, Phase};

/// Everything the windowed game needs: rules, rendering, sound and logging.
pub struct BattlePlugin;

impl Plugin for BattlePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            gameplay::GameplayPlugin,
            ui::UiPlugin,
            audio::SoundPlugin,
            diagnostics::DiagnosticsPlugin,
        ));
    }
}
