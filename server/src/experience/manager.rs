use log::info;

use kickoff_shared::ExperienceId;

use crate::{error::KickoffServerError, experience::bundle::ExperienceBundle};

/// Readiness of the session's experience. The actual content load is owned
/// by an external asset-loading subsystem, which may suspend across many
/// update cycles; this state is the only thing the handshake ever observes
/// about it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExperienceState {
    /// No experience has been assigned yet. A session stuck here after
    /// startup means no candidate source resolved.
    Unassigned,
    /// An experience was assigned and its content load is in flight
    Loading(ExperienceId),
    /// The bundle finished loading and is ready to serve queries
    Loaded(ExperienceBundle),
}

/// Readiness-tracking component for the session's experience bundle.
///
/// Owned by [`SessionState`](crate::SessionState) as a named, typed handle.
/// Assignment happens at most once per session: `begin_loading` rejects a
/// second assignment rather than replacing the first. State queries are pure
/// reads and safe to call any number of times while a load is in flight.
pub struct ExperienceManager {
    state: ExperienceState,
}

impl ExperienceManager {
    pub fn new() -> Self {
        Self {
            state: ExperienceState::Unassigned,
        }
    }

    /// Records the assigned experience and hands off to the external loader.
    /// Transitions `Unassigned -> Loading`.
    pub fn begin_loading(&mut self, id: ExperienceId) -> Result<(), KickoffServerError> {
        debug_assert!(id.is_valid());
        if let Some(current) = self.assigned_id() {
            return Err(KickoffServerError::ExperienceAlreadyAssigned {
                current: current.clone(),
                requested: id,
            });
        }
        info!("EXPERIENCE: beginning load of {}", id);
        self.state = ExperienceState::Loading(id);
        Ok(())
    }

    /// Called by the host when the external load completes. Transitions
    /// `Loading -> Loaded`; the bundle must match the in-flight identifier.
    pub fn finish_loading(&mut self, bundle: ExperienceBundle) -> Result<(), KickoffServerError> {
        let ExperienceState::Loading(expected) = &self.state else {
            return Err(KickoffServerError::NoLoadInFlight);
        };
        if bundle.id() != expected {
            return Err(KickoffServerError::LoadedBundleMismatch {
                expected: expected.clone(),
                loaded: bundle.id().clone(),
            });
        }
        info!("EXPERIENCE: {} finished loading", bundle.id());
        self.state = ExperienceState::Loaded(bundle);
        Ok(())
    }

    // Read-only queries

    pub fn state(&self) -> &ExperienceState {
        &self.state
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, ExperienceState::Loaded(_))
    }

    /// The assigned identifier, whether or not its load has completed
    pub fn assigned_id(&self) -> Option<&ExperienceId> {
        match &self.state {
            ExperienceState::Unassigned => None,
            ExperienceState::Loading(id) => Some(id),
            ExperienceState::Loaded(bundle) => Some(bundle.id()),
        }
    }

    pub fn current_bundle(&self) -> Option<&ExperienceBundle> {
        match &self.state {
            ExperienceState::Loaded(bundle) => Some(bundle),
            _ => None,
        }
    }

    /// The loaded bundle. Callers must have checked `is_loaded` first;
    /// querying earlier is a programming error.
    pub fn current_bundle_checked(&self) -> &ExperienceBundle {
        match &self.state {
            ExperienceState::Loaded(bundle) => bundle,
            _ => panic!("current_bundle_checked() called before the experience finished loading"),
        }
    }
}

impl Default for ExperienceManager {
    fn default() -> Self {
        Self::new()
    }
}
