mod bundle;
mod manager;
mod resolver;
mod source;

pub use bundle::ExperienceBundle;
pub use manager::{ExperienceManager, ExperienceState};
pub use resolver::{resolve, Resolution};
pub use source::{
    CandidateSource, CommandLineOverride, DedicatedHostFallback, DeveloperOverride, GlobalDefault,
    MatchAssignment, OptionsStringOverride, SceneDefaults, StaticSceneDefaults,
    WorldSettingsDefault,
};
