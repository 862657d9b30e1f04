use crate::{
    game_mode::GameMode,
    session::{ControllerId, SessionState},
};

/// Opaque key naming a pawn class the hosting framework knows how to spawn
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PawnClass(String);

impl PawnClass {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Default pawn setup for spawning controllers. Owned by an experience
/// bundle or by the process-wide asset registry; retrieved, never
/// constructed, by the readiness-gated lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PawnConfiguration {
    pawn_class: Option<PawnClass>,
}

impl PawnConfiguration {
    pub fn new(pawn_class: Option<PawnClass>) -> Self {
        Self { pawn_class }
    }

    pub fn pawn_class(&self) -> Option<&PawnClass> {
        self.pawn_class.as_ref()
    }
}

/// Strategy for deciding which pawn class a controller spawns with.
/// Implementations compose via delegation: an outer resolver consults its
/// own data and defers to an inner one when it has nothing to say.
pub trait PawnClassResolver {
    fn pawn_class_for(&self, controller: Option<ControllerId>) -> Option<PawnClass>;
}

/// The hosting framework's stock resolution: one configured class for
/// every controller
pub struct FrameworkPawnClassResolver {
    default_class: Option<PawnClass>,
}

impl FrameworkPawnClassResolver {
    pub fn new(default_class: Option<PawnClass>) -> Self {
        Self { default_class }
    }
}

impl PawnClassResolver for FrameworkPawnClassResolver {
    fn pawn_class_for(&self, _controller: Option<ControllerId>) -> Option<PawnClass> {
        self.default_class.clone()
    }
}

/// Experience-aware resolution: if the readiness-gated lookup yields a pawn
/// configuration that names a class, use it; otherwise defer to the wrapped
/// resolver. While the experience is still loading this always defers,
/// because spawning with the wrong configuration is worse than deferring
/// spawn.
pub struct ExperiencePawnClassResolver<'s, F: PawnClassResolver> {
    game_mode: &'s GameMode,
    session: &'s SessionState,
    fallback: F,
}

impl<'s, F: PawnClassResolver> ExperiencePawnClassResolver<'s, F> {
    pub fn new(game_mode: &'s GameMode, session: &'s SessionState, fallback: F) -> Self {
        Self {
            game_mode,
            session,
            fallback,
        }
    }
}

impl<'s, F: PawnClassResolver> PawnClassResolver for ExperiencePawnClassResolver<'s, F> {
    fn pawn_class_for(&self, controller: Option<ControllerId>) -> Option<PawnClass> {
        if let Some(config) = self
            .game_mode
            .pawn_configuration_for(self.session, controller)
        {
            if let Some(class) = config.pawn_class() {
                return Some(class.clone());
            }
        }
        self.fallback.pawn_class_for(controller)
    }
}
