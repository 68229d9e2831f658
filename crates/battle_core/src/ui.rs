use bevy::math::Isometry2d;
use bevy::prelude::*;
use bevy::sprite::Anchor;
use bevy::utils::HashMap;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::gameplay::BattleSession;
use crate::scene::{self, DisplayList, DrawCommand, Palette};

const LINE_WIDTH: f32 = 1.0;

/// Draws the composed scene every frame. Shapes, lines and text are spawned
/// as short-lived entities stacked in submission order; rectangle outlines go
/// through gizmos and so always sit on top.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(palette_color(Palette::RayWhite)))
            .add_systems(Startup, setup_scene_assets)
            .add_systems(Update, render_scene);
    }
}

/// Marks entities that only live for the frame they were drawn in.
#[derive(Component)]
struct SceneItem;

#[derive(Resource)]
struct SceneAssets {
    circle: Handle<Mesh>,
    materials: HashMap<Palette, Handle<ColorMaterial>>,
}

fn setup_scene_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.spawn(Camera2d);

    let palette_materials = Palette::ALL
        .into_iter()
        .map(|palette| (palette, materials.add(palette_color(palette))))
        .collect();
    commands.insert_resource(SceneAssets {
        circle: meshes.add(Circle::new(1.0)),
        materials: palette_materials,
    });
}

pub fn palette_color(palette: Palette) -> Color {
    let [r, g, b] = palette.rgb();
    Color::srgb_u8(r, g, b)
}

/// Screen space (origin top-left, y down) to world space (origin center, y up).
pub fn to_world(point: Vec2) -> Vec2 {
    Vec2::new(point.x - SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0 - point.y)
}

/// Places a unit-height sprite so it spans `from` to `to` (screen space).
pub fn line_transform(from: Vec2, to: Vec2, z: f32) -> Transform {
    let (start, end) = (to_world(from), to_world(to));
    let delta = end - start;
    Transform::from_translation(((start + end) / 2.0).extend(z))
        .with_rotation(Quat::from_rotation_z(delta.y.atan2(delta.x)))
}

fn render_scene(
    mut commands: Commands,
    session: Res<BattleSession>,
    assets: Option<Res<SceneAssets>>,
    stale: Query<Entity, With<SceneItem>>,
    mut gizmos: Gizmos,
) {
    let Some(assets) = assets else {
        return;
    };
    for entity in stale.iter() {
        commands.entity(entity).despawn_recursive();
    }

    let mut list = DisplayList::default();
    scene::compose(session.state(), &mut list);

    for (idx, command) in list.commands().iter().enumerate() {
        let z = idx as f32 * 0.01;
        match command {
            DrawCommand::Rect {
                origin,
                size,
                color,
            } => {
                commands.spawn((
                    Sprite {
                        color: palette_color(*color),
                        custom_size: Some(*size),
                        anchor: Anchor::TopLeft,
                        ..default()
                    },
                    Transform::from_translation(to_world(*origin).extend(z)),
                    SceneItem,
                ));
            }
            DrawCommand::RectLines {
                origin,
                size,
                color,
            } => {
                let center = to_world(*origin + *size / 2.0);
                gizmos.rect_2d(
                    Isometry2d::from_translation(center),
                    *size,
                    palette_color(*color),
                );
            }
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => {
                let Some(material) = assets.materials.get(color) else {
                    continue;
                };
                commands.spawn((
                    Mesh2d(assets.circle.clone()),
                    MeshMaterial2d(material.clone()),
                    Transform {
                        translation: to_world(*center).extend(z),
                        scale: Vec3::new(*radius, *radius, 1.0),
                        ..default()
                    },
                    SceneItem,
                ));
            }
            DrawCommand::Line { from, to, color } => {
                commands.spawn((
                    Sprite::from_color(
                        palette_color(*color),
                        Vec2::new(from.distance(*to), LINE_WIDTH),
                    ),
                    line_transform(*from, *to, z),
                    SceneItem,
                ));
            }
            DrawCommand::Text {
                text,
                origin,
                size,
                color,
            } => {
                commands.spawn((
                    Text2d::new(text.clone()),
                    TextFont {
                        font_size: *size,
                        ..default()
                    },
                    TextColor(palette_color(*color)),
                    Anchor::TopLeft,
                    Transform::from_translation(to_world(*origin).extend(z)),
                    SceneItem,
                ));
            }
        }
    }
}
