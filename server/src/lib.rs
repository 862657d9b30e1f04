//! # Kickoff Server
//! Session-side startup handshake: decides which experience bundle a session
//! should run (walking a fixed-priority chain of candidate sources, one
//! cycle after initialization), hands the winner to the readiness-tracking
//! component, and gates pawn-configuration lookups until that bundle has
//! finished loading.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

#[macro_use]
extern crate cfg_if;

pub mod shared {
    pub use kickoff_shared::{
        AssetKind, ExperienceId, ExperienceIdError, NextTickQueue, OptionString, TaskHandle,
    };
}

mod asset_registry;
mod error;
mod experience;
mod game_mode;
mod pawn;
mod session;

pub use asset_registry::{AssetRegistry, StaticAssetRegistry};
pub use error::KickoffServerError;
pub use experience::{
    resolve, CandidateSource, CommandLineOverride, DedicatedHostFallback, DeveloperOverride,
    ExperienceBundle, ExperienceManager, ExperienceState, GlobalDefault, MatchAssignment,
    OptionsStringOverride, Resolution, SceneDefaults, StaticSceneDefaults, WorldSettingsDefault,
};
pub use game_mode::{GameMode, GameModeConfig};
pub use pawn::{
    ExperiencePawnClassResolver, FrameworkPawnClassResolver, PawnClass, PawnClassResolver,
    PawnConfiguration,
};
pub use session::{ControllerId, SessionEvents, SessionState};
