use log::{error, info, warn};

use kickoff_shared::{NextTickQueue, TaskHandle};

use crate::{
    asset_registry::AssetRegistry,
    error::KickoffServerError,
    experience::{
        resolve, CandidateSource, CommandLineOverride, DedicatedHostFallback, DeveloperOverride,
        GlobalDefault, MatchAssignment, OptionsStringOverride, Resolution, SceneDefaults,
        WorldSettingsDefault,
    },
    pawn::PawnConfiguration,
    session::{ControllerId, SessionState},
    GameModeConfig,
};

/// Drives the two-stage startup handshake for a session.
///
/// Stage one: `init_session` schedules experience resolution to run one
/// cycle later, so subsystems that supply candidate sources (scene settings
/// in particular) are fully constructed by the time the chain is walked.
/// Stage two: once the resolved bundle finishes loading, pawn-configuration
/// lookups start returning data.
pub struct GameMode {
    config: GameModeConfig,
    scene: Option<Box<dyn SceneDefaults>>,
    registry: Box<dyn AssetRegistry>,
    assignment_task: Option<TaskHandle>,
}

impl GameMode {
    /// Create a new GameMode
    pub fn new(
        config: GameModeConfig,
        scene: Box<dyn SceneDefaults>,
        registry: Box<dyn AssetRegistry>,
    ) -> Self {
        Self {
            config,
            scene: Some(scene),
            registry,
            assignment_task: None,
        }
    }

    /// Initialization entry point. Schedules `handle_match_assignment` to
    /// run on the next cycle and returns its cancellation handle; the host
    /// cancels it if the session is torn down before the task fires.
    ///
    /// Reentrant calls within one cycle schedule the trigger exactly once
    /// and return the same handle.
    pub fn init_session(&mut self, queue: &mut NextTickQueue<SessionState>) -> TaskHandle {
        if let Some(handle) = self.assignment_task {
            return handle;
        }

        // Wait for the next cycle to give startup settings time to initialize
        let mut chain = self.candidate_chain();
        let handle = queue.schedule_once(Box::new(move |session| {
            let resolution = resolve(&mut chain);
            on_match_assignment(resolution, session);
        }));
        self.assignment_task = Some(handle);
        handle
    }

    // Precedence order (highest wins)
    //  - Matchmaking assignment (if present)
    //  - Options override
    //  - Developer Settings (non-production builds only)
    //  - Command Line override
    //  - World Settings
    //  - Dedicated host fallback
    //  - Default experience
    fn candidate_chain(&mut self) -> Vec<Box<dyn CandidateSource>> {
        let scene = self
            .scene
            .take()
            .expect("scene defaults already handed to a candidate chain this session");
        vec![
            Box::new(MatchAssignment::new(self.config.match_assignment.clone())),
            Box::new(OptionsStringOverride::new(self.config.options.clone())),
            Box::new(DeveloperOverride::new(self.config.developer_override.clone())),
            Box::new(CommandLineOverride::new(self.config.command_line.clone())),
            Box::new(WorldSettingsDefault::new(scene)),
            Box::new(DedicatedHostFallback::new(
                self.config.dedicated_host,
                self.config.dedicated_host_experience.clone(),
            )),
            Box::new(GlobalDefault::new(self.config.default_experience.clone())),
        ]
    }

    /// The readiness-gated lookup: default pawn configuration for a
    /// controller. Returns no data until the experience has finished
    /// loading; callers retry later or accept a temporary absence, rather
    /// than spawn with a stale or guessed configuration.
    ///
    /// A pure read of current state; safe to call any number of times per
    /// cycle while the load is in flight.
    pub fn pawn_configuration_for<'a>(
        &'a self,
        session: &'a SessionState,
        controller: Option<ControllerId>,
    ) -> Option<&'a PawnConfiguration> {
        let manager = session.experience_manager();
        if !manager.is_loaded() {
            // Experience not loaded yet, so there is no pawn configuration to be had
            return None;
        }

        let bundle = manager.current_bundle_checked();
        if let Some(pawn) = bundle.default_pawn() {
            return Some(pawn);
        }

        // Bundle loaded and still no pawn configuration, fall back to the
        // process-wide default
        if let Some(pawn) = self.registry.default_pawn_configuration() {
            return Some(pawn);
        }

        error!(
            "experience {} defines no pawn configuration and no process-wide default exists (controller: {:?})",
            bundle.id(),
            controller
        );
        None
    }

    /// Post-login event, recorded after a player or bot finishes
    /// initialization
    pub fn notify_player_initialized(&self, session: &mut SessionState, controller: ControllerId) {
        info!("controller {:?} finished initialization", controller);
        session.events_mut().push_player_initialized(controller);
    }
}

fn on_match_assignment(resolution: Resolution, session: &mut SessionState) {
    match resolution {
        Resolution::Resolved { id, source } => {
            info!("identified experience {} (source: {})", id, source);
            session.events_mut().push_resolution(id.clone(), source);
            if let Err(err) = session.experience_manager_mut().begin_loading(id) {
                warn!("experience assignment rejected: {}", err);
            }
        }
        Resolution::Unresolved => {
            error!("failed to identify experience, loading screen will stay up forever");
            session
                .events_mut()
                .push_error(KickoffServerError::NoExperienceResolved);
        }
    }
}
