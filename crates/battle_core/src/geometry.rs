use bevy::math::Vec2;

use crate::consts::{CHARACTER_RADIUS, ENEMY_SPEED, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::state::Character;

pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Clamps `position` into the screen rectangle shrunk by `margin` on every side.
pub fn keep_inside_screen(position: &mut Vec2, margin: f32) {
    position.x = position.x.max(margin).min(SCREEN_WIDTH - margin);
    position.y = position.y.max(margin).min(SCREEN_HEIGHT - margin);
}

/// Steps `enemy` one tick toward `target` at [`ENEMY_SPEED`], then clamps it
/// on screen. An enemy already on the target does not move.
pub fn move_towards(enemy: &mut Character, target: Vec2) {
    let offset = target - enemy.position;
    let length = offset.length();
    if length > 0.0 {
        enemy.position += offset / length * ENEMY_SPEED;
    }
    keep_inside_screen(&mut enemy.position, CHARACTER_RADIUS);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_zero_to_self_and_symmetric() {
        let a = Vec2::new(12.5, -3.0);
        let b = Vec2::new(-40.0, 88.0);
        assert_eq!(0.0, distance(a, a));
        assert_eq!(distance(a, b), distance(b, a));
        assert_eq!(5.0, distance(Vec2::ZERO, Vec2::new(3.0, 4.0)));
    }

    #[test]
    fn clamp_keeps_points_inside_margin() {
        let margin = 40.0;
        for point in [
            Vec2::new(-500.0, -500.0),
            Vec2::new(5000.0, 5000.0),
            Vec2::new(640.0, -1.0),
            Vec2::new(1279.0, 360.0),
            Vec2::new(700.0, 400.0),
        ] {
            let mut p = point;
            keep_inside_screen(&mut p, margin);
            assert!((margin..=SCREEN_WIDTH - margin).contains(&p.x), "{p:?}");
            assert!((margin..=SCREEN_HEIGHT - margin).contains(&p.y), "{p:?}");
        }
    }

    #[test]
    fn clamp_leaves_interior_points_alone() {
        let mut p = Vec2::new(700.0, 400.0);
        keep_inside_screen(&mut p, 40.0);
        assert_eq!(Vec2::new(700.0, 400.0), p);
    }

    #[test]
    fn move_towards_steps_by_enemy_speed() {
        let mut enemy = Character::monster();
        enemy.position = Vec2::new(600.0, 300.0);
        move_towards(&mut enemy, Vec2::new(200.0, 300.0));
        assert_eq!(Vec2::new(600.0 - ENEMY_SPEED, 300.0), enemy.position);
    }

    #[test]
    fn move_towards_own_position_is_a_no_op() {
        let mut enemy = Character::monster();
        let target = enemy.position;
        move_towards(&mut enemy, target);
        assert_eq!(target, enemy.position);
        assert!(!enemy.position.is_nan());
    }
}
