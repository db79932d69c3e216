//! Controller steering the keyboard-controlled entities.
//!
//! The arrow keys held down are turned into the displacement the player requests for the tick.
//! While no arrow key is held, an autopilot walks a square, which keeps the player moving when
//! the simulation runs without a window.

use bevy::{input::InputSystem, prelude::*};

use crate::{
    domain::{Direction, Vector},
    resource::{ConfigRes, DesiredDisplacement, TickRes},
};

const KEY_DIRECTIONS: [(KeyCode, Direction); 4] = [
    (KeyCode::ArrowUp, Direction::North),
    (KeyCode::ArrowDown, Direction::South),
    (KeyCode::ArrowLeft, Direction::West),
    (KeyCode::ArrowRight, Direction::East),
];

const AUTOPILOT_LEGS: [Direction; 4] = [
    Direction::East,
    Direction::South,
    Direction::West,
    Direction::North,
];

pub struct Controller;

impl Plugin for Controller {
    fn build(&self, app: &mut App) {
        app.init_resource::<DesiredDisplacement>()
            .init_resource::<TickRes>()
            .add_systems(PreUpdate, control.after(InputSystem));
    }
}

fn control(
    keys: Res<ButtonInput<KeyCode>>,
    config: Res<ConfigRes>,
    tick: Res<TickRes>,
    mut desired_displacement: ResMut<DesiredDisplacement>,
) {
    let speed = config.movement.speed;
    let mut held = KEY_DIRECTIONS
        .iter()
        .filter(|(key, _)| keys.pressed(*key))
        .map(|(_, direction)| direction)
        .peekable();

    let desired = if held.peek().is_some() {
        held.fold(Vector::ZERO, |sum, direction| sum + direction.vector(speed))
    } else {
        autopilot_direction(config.movement.autopilot_leg_ticks, **tick)
            .map_or(Vector::ZERO, |direction| direction.vector(speed))
    };

    *desired_displacement = desired.into();
}

fn autopilot_direction(leg_ticks: u64, tick: u64) -> Option<Direction> {
    if leg_ticks == 0 {
        return None;
    }
    let leg = (tick / leg_ticks) % AUTOPILOT_LEGS.len() as u64;
    Some(AUTOPILOT_LEGS[leg as usize])
}
