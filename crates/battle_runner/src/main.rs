use battle_core::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use battle_core::BattlePlugin;
use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowPlugin, WindowResolution};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg_attr(target_arch = "wasm32", wasm_bindgen(start))]
pub fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let mut app = App::new();
    configure_default_plugins(&mut app);
    app.add_plugins(BattlePlugin);
    app.run();
}

fn configure_default_plugins(app: &mut App) {
    #[cfg(target_arch = "wasm32")]
    let window_plugin = WindowPlugin {
        primary_window: Some(Window {
            canvas: Some("#bevy-canvas".into()),
            resolution: WindowResolution::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    };

    #[cfg(not(target_arch = "wasm32"))]
    let window_plugin = WindowPlugin {
        primary_window: Some(Window {
            title: "Monster Battle".into(),
            present_mode: PresentMode::Fifo,
            resolution: WindowResolution::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            resizable: false,
            ..default()
        }),
        ..default()
    };

    app.add_plugins(DefaultPlugins.set(window_plugin).set(AssetPlugin {
        file_path: "assets".into(),
        ..default()
    }));
}
