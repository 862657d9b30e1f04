use thiserror::Error;

use kickoff_shared::ExperienceId;

/// Errors that can occur during the session startup handshake
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KickoffServerError {
    /// No candidate source produced a valid experience identifier. The
    /// session stays unassigned until an operator corrects the configuration
    /// and restarts; retrying the same static chain would deterministically
    /// reproduce the same absence.
    #[error("no candidate source produced a valid experience identifier")]
    NoExperienceResolved,
    /// An experience was already assigned this session. Assignment happens
    /// at most once per session startup.
    #[error("experience already assigned as {current}, cannot assign {requested}")]
    ExperienceAlreadyAssigned {
        current: ExperienceId,
        requested: ExperienceId,
    },
    /// A load completion was reported while no load was in flight
    #[error("no experience load in flight")]
    NoLoadInFlight,
    /// The loaded bundle does not match the identifier that was assigned
    #[error("loaded bundle {loaded} does not match in-flight experience {expected}")]
    LoadedBundleMismatch {
        expected: ExperienceId,
        loaded: ExperienceId,
    },
}
