//! Test episodes.
//!
//! A PET or adequacy test is repeated over the course of treatment (first,
//! second and third test). Each episode owns an immutable
//! [`MeasurementSet`](crate::core::MeasurementSet) and the results of the last
//! explicit calculation. Field updates return a new episode and leave those
//! results alone; only [`PetEpisode::calculate`] and
//! [`AdequacyEpisode::calculate`] refresh them.

pub mod adequacy;
pub mod pet;

pub use adequacy::AdequacyEpisode;
pub use pet::PetEpisode;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which repetition of a test an episode records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EpisodeOrdinal {
    First,
    Second,
    Third,
}

impl fmt::Display for EpisodeOrdinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EpisodeOrdinal::First => "First",
            EpisodeOrdinal::Second => "Second",
            EpisodeOrdinal::Third => "Third",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EpisodeKind {
    Pet,
    Adequacy,
}

impl fmt::Display for EpisodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EpisodeKind::Pet => "PET",
            EpisodeKind::Adequacy => "Adequacy",
        })
    }
}
