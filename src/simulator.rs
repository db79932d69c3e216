//! Simulation of entities moving through a level.
//!
//! Every tick, the keyboard-controlled entities try to move by the displacement requested by the
//! player and the strolling entities by the displacement of their stroll. The navigator decides
//! where each of them ends up.

use bevy::{app::AppExit, prelude::*};
use log::{info, warn};

use crate::{
    domain::{
        MoveOptions, Navigator, Position, PositionedSolid, SideStepTracker, SolidIndex, Stroll,
    },
    resource::{ConfigRes, DesiredDisplacement, LevelRes, RngRes, SolidsRes, TickRes},
};

/// Moving entity: the solid it is made of and its position in the level.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Body {
    pub solid: SolidIndex,
    pub position: Position,
}

#[derive(Component, Clone, Copy, Debug, Default)]
pub struct KeyboardControlled(pub SideStepTracker);

#[derive(Component, Clone, Copy, Debug)]
pub struct Strolling(pub Stroll);

pub struct Simulator;

impl Plugin for Simulator {
    fn build(&self, app: &mut App) {
        app.init_resource::<TickRes>()
            .init_resource::<DesiredDisplacement>()
            .add_systems(
                Update,
                (
                    move_keyboard_controlled,
                    move_strolling,
                    log_positions,
                    advance_tick,
                    stop_after_ticks,
                )
                    .chain(),
            );
    }
}

fn move_keyboard_controlled(
    desired_displacement: Res<DesiredDisplacement>,
    config: Res<ConfigRes>,
    level: Res<LevelRes>,
    solids: Res<SolidsRes>,
    mut query: Query<(Entity, &mut Body, &mut KeyboardControlled)>,
) {
    let navigator = Navigator::new(&solids);
    let desired = **desired_displacement;

    for (entity, mut body, mut controlled) in &mut query {
        let Some(solid) = solids.get(&body.solid) else {
            warn!("{entity:?} is made of unknown solid {}", body.solid);
            continue;
        };
        let tracker = &mut controlled.0;
        let options = config.movement.move_options(tracker.distance_for(desired));
        let result = navigator.move_by(
            &PositionedSolid::new(body.position, solid),
            desired,
            &level,
            options,
        );
        tracker.record(desired, result.position - body.position, result.side_stepped);
        body.position = result.position;
    }
}

fn move_strolling(
    tick: Res<TickRes>,
    level: Res<LevelRes>,
    solids: Res<SolidsRes>,
    mut rng: ResMut<RngRes>,
    mut query: Query<(Entity, &mut Body, &mut Strolling)>,
) {
    let navigator = Navigator::new(&solids);

    for (entity, mut body, mut strolling) in &mut query {
        let Some(solid) = solids.get(&body.solid) else {
            warn!("{entity:?} is made of unknown solid {}", body.solid);
            continue;
        };
        let stroll = &mut strolling.0;
        let desired = stroll.desired_displacement(**tick, &mut **rng);
        let options = MoveOptions {
            sidestep_distance: 0,
            sidestep_speed: stroll.speed(),
            allow_slide: true,
        };
        body.position = navigator
            .move_by(
                &PositionedSolid::new(body.position, solid),
                desired,
                &level,
                options,
            )
            .position;
    }
}

fn log_positions(tick: Res<TickRes>, config: Res<ConfigRes>, query: Query<(&Name, &Body)>) {
    let period = u64::from(config.simulation.tick_rate_hz.max(1));
    if **tick % period != 0 {
        return;
    }
    for (name, body) in &query {
        info!(
            "tick {}: {name} at ({}, {})",
            **tick,
            body.position.x(),
            body.position.y()
        );
    }
}

fn advance_tick(mut tick: ResMut<TickRes>) {
    tick.advance();
}

fn stop_after_ticks(
    tick: Res<TickRes>,
    config: Res<ConfigRes>,
    mut exit: EventWriter<AppExit>,
) {
    let ticks = config.simulation.ticks;
    if ticks != 0 && **tick == ticks {
        info!("stopping after {ticks} ticks");
        exit.send(AppExit);
    }
}
