use std::default::Default;

use kickoff_shared::{ExperienceId, OptionString};

/// Contains Config properties which will be used by the GameMode.
///
/// Each field feeds exactly one tier of the candidate source chain; leaving
/// a field at its default disables that tier without affecting the order of
/// the others.
#[derive(Clone)]
pub struct GameModeConfig {
    /// Externally-assigned experience, e.g. from matchmaking
    pub match_assignment: Option<ExperienceId>,
    /// Option string the session was requested with
    pub options: OptionString,
    /// Developer override; only honored in non-production builds
    pub developer_override: Option<ExperienceId>,
    /// Process command-line arguments to scan for an `Experience=` override
    pub command_line: Vec<String>,
    /// Whether this host runs headless, awaiting login-driven assignment
    pub dedicated_host: bool,
    /// Fallback experience for dedicated hosts
    pub dedicated_host_experience: Option<ExperienceId>,
    /// Process-wide default experience, the lowest-priority tier
    pub default_experience: Option<ExperienceId>,
}

impl Default for GameModeConfig {
    fn default() -> Self {
        Self {
            match_assignment: None,
            options: OptionString::empty(),
            developer_override: None,
            command_line: Vec::new(),
            dedicated_host: false,
            dedicated_host_experience: None,
            default_experience: None,
        }
    }
}
