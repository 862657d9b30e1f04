use crate::{experience::ExperienceManager, session::events::SessionEvents};

/// Session-wide state entity. Holds the readiness-tracking component as a
/// named, typed handle; the handshake never discovers it by runtime type.
pub struct SessionState {
    experience_manager: ExperienceManager,
    events: SessionEvents,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            experience_manager: ExperienceManager::new(),
            events: SessionEvents::new(),
        }
    }

    pub fn experience_manager(&self) -> &ExperienceManager {
        &self.experience_manager
    }

    pub fn experience_manager_mut(&mut self) -> &mut ExperienceManager {
        &mut self.experience_manager
    }

    pub fn events(&self) -> &SessionEvents {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut SessionEvents {
        &mut self.events
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
