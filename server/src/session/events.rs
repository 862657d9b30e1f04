use std::mem;

use kickoff_shared::ExperienceId;

use crate::{error::KickoffServerError, session::controller::ControllerId};

/// Startup events accumulated by the handshake, drained by the host once
/// per update cycle
pub struct SessionEvents {
    resolutions: Vec<(ExperienceId, &'static str)>,
    player_initializations: Vec<ControllerId>,
    errors: Vec<KickoffServerError>,

    empty: bool,
}

impl SessionEvents {
    pub(crate) fn new() -> Self {
        Self {
            resolutions: Vec::new(),
            player_initializations: Vec::new(),
            errors: Vec::new(),

            empty: true,
        }
    }

    // Public

    pub fn is_empty(&self) -> bool {
        self.empty
    }

    pub fn has_resolutions(&self) -> bool {
        !self.resolutions.is_empty()
    }
    pub fn take_resolutions(&mut self) -> Vec<(ExperienceId, &'static str)> {
        mem::take(&mut self.resolutions)
    }

    pub fn has_player_initializations(&self) -> bool {
        !self.player_initializations.is_empty()
    }
    pub fn take_player_initializations(&mut self) -> Vec<ControllerId> {
        mem::take(&mut self.player_initializations)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
    pub fn take_errors(&mut self) -> Vec<KickoffServerError> {
        mem::take(&mut self.errors)
    }

    // Crate-public

    pub(crate) fn push_resolution(&mut self, id: ExperienceId, source: &'static str) {
        self.resolutions.push((id, source));
        self.empty = false;
    }

    pub(crate) fn push_player_initialized(&mut self, controller: ControllerId) {
        self.player_initializations.push(controller);
        self.empty = false;
    }

    pub(crate) fn push_error(&mut self, error: KickoffServerError) {
        self.errors.push(error);
        self.empty = false;
    }
}
