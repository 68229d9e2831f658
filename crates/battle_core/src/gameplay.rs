use bevy::input::{ButtonInput, InputSystem};
use bevy::prelude::*;
use bevy::time::{Fixed, Time};

use crate::rules::{self, BattleEvent, FrameInput};
use crate::settings::SimulationParams;
use crate::state::GameState;

/// Runs the battle rules on the fixed timestep. Keyboard state is sampled
/// every frame and handed to the next tick, so presses between ticks are
/// never dropped.
pub struct GameplayPlugin;

impl Plugin for GameplayPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<SimulationParams>() {
            app.insert_resource(SimulationParams::from_env());
        }
        if app.world().get_resource::<ButtonInput<KeyCode>>().is_none() {
            app.world_mut()
                .insert_resource(ButtonInput::<KeyCode>::default());
        }

        app.add_event::<BattleEvent>()
            .init_resource::<BattleSession>()
            .init_resource::<PendingInput>()
            .add_systems(Startup, configure_fixed_time)
            .add_systems(PreUpdate, collect_input.after(InputSystem))
            .add_systems(FixedUpdate, advance_battle);
    }
}

#[derive(Resource, Debug)]
pub struct BattleSession {
    state: GameState,
}

impl BattleSession {
    pub fn new(seed: u64) -> Self {
        Self {
            state: GameState::new(seed),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}

impl FromWorld for BattleSession {
    fn from_world(world: &mut World) -> Self {
        let seed = world
            .get_resource::<SimulationParams>()
            .cloned()
            .unwrap_or_default()
            .seed;
        info!(target: "battle_core.session", seed, "battle session created");
        Self::new(seed)
    }
}

/// Input gathered since the last tick: held keys reflect the latest frame,
/// presses accumulate until a tick consumes them.
#[derive(Resource, Default, Debug)]
pub struct PendingInput {
    input: FrameInput,
}

impl PendingInput {
    pub fn merge(&mut self, latest: FrameInput) {
        let input = &mut self.input;
        input.left = latest.left;
        input.right = latest.right;
        input.up = latest.up;
        input.down = latest.down;
        input.attack |= latest.attack;
        input.confirm |= latest.confirm;
        input.cancel |= latest.cancel;
    }

    pub fn take(&mut self) -> FrameInput {
        let input = self.input;
        self.input.attack = false;
        self.input.confirm = false;
        self.input.cancel = false;
        input
    }
}

fn collect_input(keys: Res<ButtonInput<KeyCode>>, mut pending: ResMut<PendingInput>) {
    pending.merge(FrameInput {
        left: keys.pressed(KeyCode::ArrowLeft),
        right: keys.pressed(KeyCode::ArrowRight),
        up: keys.pressed(KeyCode::ArrowUp),
        down: keys.pressed(KeyCode::ArrowDown),
        attack: keys.just_pressed(KeyCode::Space),
        confirm: keys.any_just_pressed([KeyCode::Enter, KeyCode::NumpadEnter]),
        cancel: keys.just_pressed(KeyCode::Escape),
    });
}

fn advance_battle(
    time: Res<Time>,
    mut session: ResMut<BattleSession>,
    mut pending: ResMut<PendingInput>,
    mut battle_events: EventWriter<BattleEvent>,
    mut exit: EventWriter<AppExit>,
) {
    let input = pending.take();
    let events = rules::update(session.state_mut(), &input, time.delta_secs());
    for event in events {
        if matches!(event, BattleEvent::ExitRequested) {
            exit.send(AppExit::Success);
        }
        battle_events.send(event);
    }
}

fn configure_fixed_time(mut fixed_time: ResMut<Time<Fixed>>, params: Res<SimulationParams>) {
    fixed_time.set_timestep_seconds(params.fixed_delta);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Phase;
    use std::time::Duration;

    fn headless_app(seed: u64) -> App {
        let mut app = App::new();
        app.insert_resource(SimulationParams::from_seed(seed));
        app.init_resource::<Time>();
        app.add_plugins(GameplayPlugin);
        app
    }

    fn press_and_tick(app: &mut App, key: KeyCode) {
        {
            let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
            keys.release_all();
            keys.clear();
            keys.press(key);
        }
        app.world_mut().run_schedule(PreUpdate);
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f64(crate::consts::FIXED_DELTA));
        app.world_mut().run_schedule(FixedUpdate);
    }

    #[test]
    fn enter_starts_the_battle() {
        let mut app = headless_app(9);
        press_and_tick(&mut app, KeyCode::Enter);
        let session = app.world().resource::<BattleSession>();
        assert_eq!(Phase::Playing, session.state().phase);
        assert_eq!(9, session.state().seed());
        assert!(!app.world().resource::<Events<BattleEvent>>().is_empty());
    }

    #[test]
    fn escape_on_title_exits() {
        let mut app = headless_app(9);
        press_and_tick(&mut app, KeyCode::Escape);
        assert!(!app.world().resource::<Events<AppExit>>().is_empty());
        assert_eq!(
            Phase::Title,
            app.world().resource::<BattleSession>().state().phase
        );
    }

    #[test]
    fn presses_survive_until_the_next_tick() {
        let mut pending = PendingInput::default();
        pending.merge(FrameInput::confirm());
        pending.merge(FrameInput {
            right: true,
            ..Default::default()
        });
        let first = pending.take();
        assert!(first.confirm && first.right);
        let second = pending.take();
        assert!(!second.confirm && second.right);
    }
}
