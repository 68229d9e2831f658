//! Frame composition in screen coordinates (origin top-left, y down).
//!
//! The battle is drawn through the small [`Canvas`] capability so the same
//! composition feeds the bevy renderer and headless tests alike.

use bevy::math::Vec2;

use crate::consts::*;
use crate::state::{Character, GameState, Phase};

/// Named colors used by the battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Palette {
    RayWhite,
    White,
    Black,
    Gray,
    DarkGray,
    Blue,
    Red,
    Green,
    DarkGreen,
}

impl Palette {
    pub const ALL: [Palette; 9] = [
        Palette::RayWhite,
        Palette::White,
        Palette::Black,
        Palette::Gray,
        Palette::DarkGray,
        Palette::Blue,
        Palette::Red,
        Palette::Green,
        Palette::DarkGreen,
    ];

    pub fn rgb(&self) -> [u8; 3] {
        match self {
            Palette::RayWhite => [245, 245, 245],
            Palette::White => [255, 255, 255],
            Palette::Black => [0, 0, 0],
            Palette::Gray => [130, 130, 130],
            Palette::DarkGray => [80, 80, 80],
            Palette::Blue => [0, 121, 241],
            Palette::Red => [230, 41, 55],
            Palette::Green => [0, 228, 48],
            Palette::DarkGreen => [0, 117, 44],
        }
    }
}

pub trait Canvas {
    fn rect(&mut self, origin: Vec2, size: Vec2, color: Palette);
    fn rect_lines(&mut self, origin: Vec2, size: Vec2, color: Palette);
    fn circle(&mut self, center: Vec2, radius: f32, color: Palette);
    fn line(&mut self, from: Vec2, to: Vec2, color: Palette);
    fn text(&mut self, text: &str, origin: Vec2, size: f32, color: Palette);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Rect {
        origin: Vec2,
        size: Vec2,
        color: Palette,
    },
    RectLines {
        origin: Vec2,
        size: Vec2,
        color: Palette,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Palette,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Palette,
    },
    Text {
        text: String,
        origin: Vec2,
        size: f32,
        color: Palette,
    },
}

/// Records draw calls in submission order; later commands paint over earlier ones.
#[derive(Clone, Debug, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Canvas for DisplayList {
    fn rect(&mut self, origin: Vec2, size: Vec2, color: Palette) {
        self.commands.push(DrawCommand::Rect {
            origin,
            size,
            color,
        });
    }

    fn rect_lines(&mut self, origin: Vec2, size: Vec2, color: Palette) {
        self.commands.push(DrawCommand::RectLines {
            origin,
            size,
            color,
        });
    }

    fn circle(&mut self, center: Vec2, radius: f32, color: Palette) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Palette) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }

    fn text(&mut self, text: &str, origin: Vec2, size: f32, color: Palette) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            origin,
            size,
            color,
        });
    }
}

/// Background, proportional fill (whole units, never negative), then outline.
pub fn draw_health_bar(
    canvas: &mut impl Canvas,
    origin: Vec2,
    health: i32,
    max_health: i32,
    color: Palette,
) {
    let ratio = if max_health > 0 {
        (health as f32 / max_health as f32).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let size = Vec2::new(HEALTH_BAR_WIDTH, HEALTH_BAR_HEIGHT);
    canvas.rect(origin, size, Palette::DarkGray);
    canvas.rect(
        origin,
        Vec2::new((HEALTH_BAR_WIDTH * ratio).floor(), HEALTH_BAR_HEIGHT),
        color,
    );
    canvas.rect_lines(origin, size, Palette::Black);
}

pub fn compose(state: &GameState, canvas: &mut impl Canvas) {
    match state.phase {
        Phase::Title => compose_title(canvas),
        Phase::Playing => compose_battle(state, canvas),
        Phase::GameOver { outcome } => {
            canvas.text(
                outcome.message(),
                Vec2::new(SCREEN_WIDTH / 2.0 - 50.0, SCREEN_HEIGHT / 2.0),
                40.0,
                Palette::Black,
            );
            canvas.text(
                "Press ENTER to restart",
                Vec2::new(SCREEN_WIDTH / 2.0 - 100.0, SCREEN_HEIGHT / 2.0 + 50.0),
                20.0,
                Palette::Gray,
            );
        }
    }
}

fn compose_title(canvas: &mut impl Canvas) {
    let left = SCREEN_WIDTH / 2.0 - 100.0;
    canvas.text("Monster Battle", Vec2::new(left, 200.0), 40.0, Palette::Black);
    canvas.text(
        "Press ENTER to start",
        Vec2::new(left, 300.0),
        30.0,
        Palette::DarkGray,
    );
    canvas.text(
        "Press ESC to exit",
        Vec2::new(left, 350.0),
        30.0,
        Palette::DarkGray,
    );
}

fn compose_battle(state: &GameState, canvas: &mut impl Canvas) {
    let (player, monster) = (&state.player, &state.monster);

    if monster.is_flashing() {
        canvas.line(player.position, monster.position, Palette::DarkGray);
    }
    canvas.circle(player.position, CHARACTER_RADIUS, body_color(player));
    canvas.circle(monster.position, CHARACTER_RADIUS, body_color(monster));

    draw_health_bar(
        canvas,
        Vec2::new(20.0, 20.0),
        player.health.current(),
        player.health.max(),
        player.color,
    );
    draw_health_bar(
        canvas,
        Vec2::new(SCREEN_WIDTH - HEALTH_BAR_WIDTH - 20.0, 20.0),
        monster.health.current(),
        monster.health.max(),
        monster.color,
    );
    canvas.text(
        "Press SPACE to attack",
        Vec2::new(SCREEN_WIDTH / 2.0 - 100.0, SCREEN_HEIGHT - 50.0),
        20.0,
        Palette::Black,
    );

    let pack = &state.health_pack;
    if pack.active {
        canvas.circle(pack.position, HEALTH_PACK_RADIUS, Palette::Green);
        canvas.text(
            "Health Pack",
            pack.position - Vec2::splat(30.0),
            20.0,
            Palette::DarkGreen,
        );
    }
}

fn body_color(character: &Character) -> Palette {
    if character.is_flashing() {
        Palette::White
    } else {
        character.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Outcome;

    fn fills(list: &DisplayList) -> Vec<(Vec2, Palette)> {
        list.commands()
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Rect { size, color, .. } => Some((*size, *color)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn health_bar_fill_is_proportional() {
        let mut list = DisplayList::default();
        draw_health_bar(&mut list, Vec2::ZERO, 40, 80, Palette::Red);
        let rects = fills(&list);
        assert_eq!((Vec2::new(200.0, 20.0), Palette::DarkGray), rects[0]);
        assert_eq!((Vec2::new(100.0, 20.0), Palette::Red), rects[1]);
        assert!(matches!(
            list.commands().last(),
            Some(DrawCommand::RectLines {
                color: Palette::Black,
                ..
            })
        ));
    }

    #[test]
    fn health_bar_never_draws_negative_fill() {
        let mut list = DisplayList::default();
        draw_health_bar(&mut list, Vec2::ZERO, -12, 100, Palette::Blue);
        assert_eq!(0.0, fills(&list)[1].0.x);
    }

    #[test]
    fn title_screen_shows_instructions() {
        let state = GameState::new(1);
        let mut list = DisplayList::default();
        compose(&state, &mut list);
        let texts: Vec<_> = list.texts().collect();
        assert_eq!(
            vec!["Monster Battle", "Press ENTER to start", "Press ESC to exit"],
            texts
        );
    }

    #[test]
    fn battle_draws_combatants_bars_and_pack() {
        let mut state = GameState::new(1);
        state.phase = Phase::Playing;
        let mut list = DisplayList::default();
        compose(&state, &mut list);

        let circles: Vec<_> = list
            .commands()
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Circle { center, color, .. } => Some((*center, *color)),
                _ => None,
            })
            .collect();
        assert_eq!(
            vec![
                (PLAYER_START, Palette::Blue),
                (MONSTER_START, Palette::Red),
                (state.health_pack.position, Palette::Green),
            ],
            circles
        );
        assert!(list.texts().any(|text| text == "Health Pack"));
        assert!(list.texts().any(|text| text == "Press SPACE to attack"));
        assert!(!list
            .commands()
            .iter()
            .any(|command| matches!(command, DrawCommand::Line { .. })));
    }

    #[test]
    fn struck_monster_flashes_with_strike_line() {
        let mut state = GameState::new(1);
        state.phase = Phase::Playing;
        state.health_pack.active = false;
        state.monster.since_hit = 0.0;
        let mut list = DisplayList::default();
        compose(&state, &mut list);
        assert!(matches!(list.commands()[0], DrawCommand::Line { .. }));
        assert!(list.commands().contains(&DrawCommand::Circle {
            center: MONSTER_START,
            radius: CHARACTER_RADIUS,
            color: Palette::White,
        }));
        assert!(!list.texts().any(|text| text == "Health Pack"));
    }

    #[test]
    fn restarted_round_opens_without_strike_effects() {
        use crate::rules::{update, FrameInput};

        let dt = 1.0 / 60.0;
        let mut state = GameState::new(6);
        update(&mut state, &FrameInput::confirm(), dt);
        state.health_pack.position = Vec2::new(1100.0, 600.0);
        state.monster.health.set(1);
        state.monster.since_attack = 0.0;
        state.monster.position = state.player.position + Vec2::new(45.0 + ENEMY_SPEED, 0.0);
        update(&mut state, &FrameInput::attack(), dt);
        assert_eq!(
            Phase::GameOver {
                outcome: Outcome::Victory
            },
            state.phase
        );

        update(&mut state, &FrameInput::confirm(), dt);
        update(&mut state, &FrameInput::default(), dt);
        let mut list = DisplayList::default();
        compose(&state, &mut list);
        assert!(!list
            .commands()
            .iter()
            .any(|command| matches!(command, DrawCommand::Line { .. })));
        assert!(!list.commands().iter().any(|command| matches!(
            command,
            DrawCommand::Circle {
                color: Palette::White,
                ..
            }
        )));
    }

    #[test]
    fn game_over_shows_result_and_restart_prompt() {
        let mut state = GameState::new(1);
        state.phase = Phase::GameOver {
            outcome: Outcome::Defeat,
        };
        let mut list = DisplayList::default();
        compose(&state, &mut list);
        let texts: Vec<_> = list.texts().collect();
        assert_eq!(vec!["You lost!", "Press ENTER to restart"], texts);
    }
}
