//! Catalog of server-defined building configurations.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// A building configuration offered by the simulation service.
///
/// Selecting a building fixes the floor count, elevator count, passenger
/// volume, and turn limit server-side; the client only names one at session
/// start. The figures on each variant mirror the service documentation and
/// are informational — the server, not the client, validates the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Building {
    /// 10 floors, 2 elevators, 3 passenger requests, 30 turns.
    TinyRandom,
    /// 20 floors, 4 elevators, 25 passenger requests, 80 turns.
    MediumRandom,
    /// 25 floors, 8 elevators, 450 passenger requests, 500 turns.
    BigRandom,
    /// Like [`Building::BigRandom`], but requests cluster into rush hours.
    BigClustered,
    /// 50 floors, 8 elevators, 700 passenger requests, 1000 turns, with
    /// rush-hour clustering.
    SkyTower,
}

impl Building {
    /// Every configuration the service currently offers.
    pub const ALL: [Self; 5] = [
        Self::TinyRandom,
        Self::MediumRandom,
        Self::BigRandom,
        Self::BigClustered,
        Self::SkyTower,
    ];

    /// Wire name expected in the init payload's `building_name` field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TinyRandom => "tiny_random",
            Self::MediumRandom => "medium_random",
            Self::BigRandom => "big_random",
            Self::BigClustered => "big_clustered",
            Self::SkyTower => "85_sky_tower",
        }
    }

    /// Floor count; valid floors are `1..=num_floors`.
    pub fn num_floors(self) -> u32 {
        match self {
            Self::TinyRandom => 10,
            Self::MediumRandom => 20,
            Self::BigRandom | Self::BigClustered => 25,
            Self::SkyTower => 50,
        }
    }

    /// Number of elevator cars.
    pub fn num_elevators(self) -> u32 {
        match self {
            Self::TinyRandom => 2,
            Self::MediumRandom => 4,
            Self::BigRandom | Self::BigClustered | Self::SkyTower => 8,
        }
    }

    /// Passenger requests generated over the whole run.
    pub fn num_requests(self) -> u32 {
        match self {
            Self::TinyRandom => 3,
            Self::MediumRandom => 25,
            Self::BigRandom | Self::BigClustered => 450,
            Self::SkyTower => 700,
        }
    }

    /// Turn limit before the simulation ends.
    pub fn num_turns(self) -> u32 {
        match self {
            Self::TinyRandom => 30,
            Self::MediumRandom => 80,
            Self::BigRandom | Self::BigClustered => 500,
            Self::SkyTower => 1000,
        }
    }

    /// Whether passenger requests cluster into rush hours.
    pub fn clustered(self) -> bool {
        matches!(self, Self::BigClustered | Self::SkyTower)
    }
}

impl fmt::Display for Building {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A building name the service does not offer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown building name: {0}")]
pub struct UnknownBuilding(pub String);

impl FromStr for Building {
    type Err = UnknownBuilding;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|building| building.as_str() == s)
            .ok_or_else(|| UnknownBuilding(s.to_owned()))
    }
}
