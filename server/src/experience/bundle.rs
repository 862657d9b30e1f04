use kickoff_shared::ExperienceId;

use crate::pawn::PawnConfiguration;

/// A loaded experience bundle: the named configuration package selecting
/// gameplay rules and default pawn setup for a session. Produced by the
/// external asset-loading subsystem, never constructed by the handshake
/// itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExperienceBundle {
    id: ExperienceId,
    default_pawn: Option<PawnConfiguration>,
}

impl ExperienceBundle {
    pub fn new(id: ExperienceId, default_pawn: Option<PawnConfiguration>) -> Self {
        Self { id, default_pawn }
    }

    pub fn id(&self) -> &ExperienceId {
        &self.id
    }

    /// The bundle's own default pawn configuration, if it defines one
    pub fn default_pawn(&self) -> Option<&PawnConfiguration> {
        self.default_pawn.as_ref()
    }
}
