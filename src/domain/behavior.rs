//! Policies of the callers moving entities tick after tick.
//!
//! The navigator resolves a single tick and keeps no state. Growing the side-step lookahead while
//! an entity stays blocked, and wandering around at random, is decided here.

use rand::Rng;

use super::Vector;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    #[default]
    South,
    West,
    East,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::South,
        Direction::North,
        Direction::West,
        Direction::East,
    ];

    pub fn vector(&self, speed: i64) -> Vector {
        match self {
            Direction::North => Vector::new(0, -speed),
            Direction::South => Vector::new(0, speed),
            Direction::West => Vector::new(-speed, 0),
            Direction::East => Vector::new(speed, 0),
        }
    }
}

/// Side-step lookahead of an entity pushing against an obstacle.
///
/// The lookahead grows by one pixel per tick while the entity doesn't get where it wants, up to
/// `max_distance`, and starts over from zero whenever the desired displacement changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SideStepTracker {
    max_distance: i64,
    distance: i64,
    last_desired: Vector,
}

impl SideStepTracker {
    pub fn new(max_distance: i64) -> Self {
        Self {
            max_distance,
            ..Default::default()
        }
    }

    pub fn distance(&self) -> i64 {
        self.distance
    }

    /// Lookahead to use for moving by `desired` this tick.
    pub fn distance_for(&mut self, desired: Vector) -> i64 {
        if desired != self.last_desired {
            self.distance = 0;
            self.last_desired = desired;
        }
        self.distance
    }

    pub fn record(&mut self, desired: Vector, moved: Vector, side_stepped: bool) {
        if moved == desired && !side_stepped {
            self.distance = 0;
        } else {
            self.distance = (self.distance + 1).min(self.max_distance);
        }
    }
}

/// Stays idle and from time to time walks a few steps in a random direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stroll {
    idle_ticks: u64,
    walk_ticks: u64,
    speed: i64,
    direction: Direction,
}

impl Stroll {
    pub fn new(idle_ticks: u64, walk_ticks: u64, speed: i64) -> Self {
        Self {
            idle_ticks,
            walk_ticks,
            speed,
            direction: Direction::default(),
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn speed(&self) -> i64 {
        self.speed
    }

    /// A new direction is drawn from `rng` at the beginning of every cycle. Walking happens at the
    /// beginning of the cycle and idling the rest of it.
    pub fn desired_displacement<R: Rng + ?Sized>(&mut self, tick: u64, rng: &mut R) -> Vector {
        let cycle = self.idle_ticks + self.walk_ticks;
        if cycle == 0 {
            return Vector::ZERO;
        }

        if tick % cycle == 0 {
            self.direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
        }

        if tick % cycle < self.walk_ticks {
            self.direction.vector(self.speed)
        } else {
            Vector::ZERO
        }
    }
}
