use log::warn;

use kickoff_shared::{ExperienceId, OptionString};

/// Scene/level default provider: the current scene may customize which
/// experience a session runs when nothing higher-priority decides it
pub trait SceneDefaults {
    fn default_experience(&self) -> Option<ExperienceId>;
}

/// A fixed scene default, for hosts whose scenes are configured up front
pub struct StaticSceneDefaults {
    default: Option<ExperienceId>,
}

impl StaticSceneDefaults {
    pub fn new(default: Option<ExperienceId>) -> Self {
        Self { default }
    }
}

impl SceneDefaults for StaticSceneDefaults {
    fn default_experience(&self) -> Option<ExperienceId> {
        self.default.clone()
    }
}

/// One origin that may produce an experience identifier. The label is used
/// purely for diagnostics; priority is extrinsic, defined by the order the
/// chain is built in.
///
/// Sources are not required to be side-effect-free, and are invoked at most
/// once per resolution.
pub trait CandidateSource {
    fn label(&self) -> &'static str;
    fn candidate(&mut self) -> Option<ExperienceId>;
}

/// Externally-assigned override, e.g. a matchmaking-provided identifier
pub struct MatchAssignment {
    assigned: Option<ExperienceId>,
}

impl MatchAssignment {
    pub fn new(assigned: Option<ExperienceId>) -> Self {
        Self { assigned }
    }
}

impl CandidateSource for MatchAssignment {
    fn label(&self) -> &'static str {
        "MatchAssignment"
    }

    fn candidate(&mut self) -> Option<ExperienceId> {
        self.assigned.clone()
    }
}

/// `Experience=` key in the session's option string
pub struct OptionsStringOverride {
    options: OptionString,
}

impl OptionsStringOverride {
    pub fn new(options: OptionString) -> Self {
        Self { options }
    }
}

impl CandidateSource for OptionsStringOverride {
    fn label(&self) -> &'static str {
        "OptionsString"
    }

    fn candidate(&mut self) -> Option<ExperienceId> {
        self.options
            .get_option("Experience")
            .map(ExperienceId::experience)
    }
}

cfg_if! {
    if #[cfg(debug_assertions)] {
        const DEVELOPER_OVERRIDE_ACTIVE: bool = true;
    } else {
        const DEVELOPER_OVERRIDE_ACTIVE: bool = false;
    }
}

/// Per-environment developer override. Only participates in non-production
/// builds; in release builds the configured identifier is ignored.
pub struct DeveloperOverride {
    id: Option<ExperienceId>,
}

impl DeveloperOverride {
    pub fn new(id: Option<ExperienceId>) -> Self {
        Self { id }
    }
}

impl CandidateSource for DeveloperOverride {
    fn label(&self) -> &'static str {
        "DeveloperSettings"
    }

    fn candidate(&mut self) -> Option<ExperienceId> {
        if DEVELOPER_OVERRIDE_ACTIVE {
            self.id.clone()
        } else {
            None
        }
    }
}

/// `Experience=` argument on the process command line. Accepts either the
/// full `kind:name` form or a bare bundle name.
pub struct CommandLineOverride {
    args: Vec<String>,
}

impl CommandLineOverride {
    pub fn new(args: Vec<String>) -> Self {
        Self { args }
    }

    pub fn from_env() -> Self {
        Self::new(std::env::args().collect())
    }
}

impl CandidateSource for CommandLineOverride {
    fn label(&self) -> &'static str {
        "CommandLine"
    }

    fn candidate(&mut self) -> Option<ExperienceId> {
        let value = self.args.iter().find_map(|arg| {
            let (key, value) = arg.split_once('=')?;
            if key.eq_ignore_ascii_case("Experience") {
                Some(value)
            } else {
                None
            }
        })?;
        match ExperienceId::parse_type_and_name(value) {
            Ok(id) => Some(id),
            Err(err) => {
                warn!("ignoring command line experience `{}`: {}", value, err);
                None
            }
        }
    }
}

/// Scene/level default, via the [`SceneDefaults`] provider
pub struct WorldSettingsDefault {
    settings: Box<dyn SceneDefaults>,
}

impl WorldSettingsDefault {
    pub fn new(settings: Box<dyn SceneDefaults>) -> Self {
        Self { settings }
    }
}

impl CandidateSource for WorldSettingsDefault {
    fn label(&self) -> &'static str {
        "WorldSettings"
    }

    fn candidate(&mut self) -> Option<ExperienceId> {
        self.settings.default_experience()
    }
}

/// Fallback identifier for headless dedicated hosts awaiting login-driven
/// assignment
pub struct DedicatedHostFallback {
    enabled: bool,
    id: Option<ExperienceId>,
}

impl DedicatedHostFallback {
    pub fn new(enabled: bool, id: Option<ExperienceId>) -> Self {
        Self { enabled, id }
    }
}

impl CandidateSource for DedicatedHostFallback {
    fn label(&self) -> &'static str {
        "DedicatedHost"
    }

    fn candidate(&mut self) -> Option<ExperienceId> {
        if self.enabled {
            self.id.clone()
        } else {
            None
        }
    }
}

/// Process-wide default experience, the lowest-priority tier
pub struct GlobalDefault {
    id: Option<ExperienceId>,
}

impl GlobalDefault {
    pub fn new(id: Option<ExperienceId>) -> Self {
        Self { id }
    }
}

impl CandidateSource for GlobalDefault {
    fn label(&self) -> &'static str {
        "Default"
    }

    fn candidate(&mut self) -> Option<ExperienceId> {
        self.id.clone()
    }
}
