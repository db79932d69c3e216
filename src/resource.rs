//! The resource module wraps domain entities for use with Bevy.

use std::ops::{Deref, DerefMut};

use bevy::ecs::system::Resource;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::{config::SimulationConfig, domain};

#[derive(Resource)]
pub struct LevelRes(domain::Level);

impl Deref for LevelRes {
    type Target = domain::Level;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<domain::Level> for LevelRes {
    fn from(value: domain::Level) -> Self {
        Self(value)
    }
}

#[derive(Resource, Default)]
pub struct SolidsRes(domain::Solids);

impl Deref for SolidsRes {
    type Target = domain::Solids;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<domain::Solids> for SolidsRes {
    fn from(value: domain::Solids) -> Self {
        Self(value)
    }
}

#[derive(Resource, Default)]
pub struct ConfigRes(SimulationConfig);

impl Deref for ConfigRes {
    type Target = SimulationConfig;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<SimulationConfig> for ConfigRes {
    fn from(value: SimulationConfig) -> Self {
        Self(value)
    }
}

/// The only source of randomness of the simulation.
#[derive(Resource)]
pub struct RngRes(ChaCha8Rng);

impl RngRes {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl Deref for RngRes {
    type Target = ChaCha8Rng;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for RngRes {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// Number of completed simulation ticks.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickRes(u64);

impl TickRes {
    pub fn advance(&mut self) {
        self.0 += 1;
    }
}

impl Deref for TickRes {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Displacement requested by the player for the current tick.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DesiredDisplacement(domain::Vector);

impl Deref for DesiredDisplacement {
    type Target = domain::Vector;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<domain::Vector> for DesiredDisplacement {
    fn from(value: domain::Vector) -> Self {
        Self(value)
    }
}
